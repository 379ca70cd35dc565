use alloc::format;

use crate::error::BitmapError;

/// Caps applied to a BMP before its pixel grid is allocated.
///
/// Header dimensions are untrusted: a 1 KiB file can claim to be
/// 2^31 pixels wide. Each cap left at `None` is not enforced.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Cap on `width * height`.
    pub max_pixels: Option<u64>,
    /// Cap on the decoded grid, one byte per palette index.
    pub max_memory_bytes: Option<u64>,
}

fn enforce(what: &str, actual: u64, cap: Option<u64>) -> Result<(), BitmapError> {
    match cap {
        Some(cap) if actual > cap => Err(BitmapError::LimitExceeded(format!(
            "{what} {actual} exceeds limit {cap}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Reject header dimensions over the width, height or pixel caps.
    pub(crate) fn check(&self, width: usize, height: usize) -> Result<(), BitmapError> {
        let (width, height) = (width as u64, height as u64);
        enforce("width", width, self.max_width)?;
        enforce("height", height, self.max_height)?;
        enforce("pixel count", width.saturating_mul(height), self.max_pixels)
    }

    /// Reject a pixel grid of `bytes` over the memory cap.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), BitmapError> {
        match self.max_memory_bytes {
            Some(cap) if bytes as u64 > cap => Err(BitmapError::LimitExceeded(format!(
                "pixel grid of {bytes} bytes exceeds memory limit {cap}"
            ))),
            _ => Ok(()),
        }
    }
}
