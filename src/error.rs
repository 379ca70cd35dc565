use alloc::string::String;
use enough::StopReason;

/// Errors from BMP decoding, encoding, and cropping.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: usize, height: usize },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("pixel ({row}, {col}) is outside the image")]
    OutOfBounds { row: usize, col: usize },

    #[error("no pixel differs from the background color")]
    EmptyCrop,

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

/// Coarse classification of a [`BitmapError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The byte source or sink failed, including a truncated stream.
    Io,
    /// The bytes are not an image this crate accepts.
    Format,
    /// Cropping found no foreground pixel.
    EmptyCrop,
    /// A dimension, limit, or index was out of range.
    Resource,
    /// A [`enough::Stop`] token asked the operation to stop.
    Cancelled,
}

impl BitmapError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::UnexpectedEof => ErrorClass::Io,
            #[cfg(feature = "std")]
            Self::Io(_) => ErrorClass::Io,
            Self::UnrecognizedFormat
            | Self::InvalidHeader(_)
            | Self::UnsupportedVariant(_)
            | Self::InvalidDimensions { .. } => ErrorClass::Format,
            Self::DimensionsTooLarge { .. } | Self::LimitExceeded(_) | Self::OutOfBounds { .. } => {
                ErrorClass::Resource
            }
            Self::EmptyCrop => ErrorClass::EmptyCrop,
            Self::Cancelled(_) => ErrorClass::Cancelled,
        }
    }
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}
