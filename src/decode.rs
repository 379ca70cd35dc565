use enough::Stop;

use crate::bmp::{self, BmpPermissiveness};
use crate::error::BitmapError;
use crate::image::Image;
use crate::limits::Limits;

/// Decode builder for callers that need limits or a non-default strictness.
///
/// ```
/// use zencrop::{BmpPermissiveness, DecodeRequest, Limits, Unstoppable};
///
/// let limits = Limits {
///     max_pixels: Some(4096 * 4096),
///     ..Default::default()
/// };
/// let result = DecodeRequest::new(b"not a bitmap")
///     .with_limits(&limits)
///     .with_permissiveness(BmpPermissiveness::Strict)
///     .decode(Unstoppable);
/// assert!(result.is_err());
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    permissiveness: BmpPermissiveness,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            permissiveness: BmpPermissiveness::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_permissiveness(mut self, permissiveness: BmpPermissiveness) -> Self {
        self.permissiveness = permissiveness;
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<Image, BitmapError> {
        bmp::decode::decode_image(self.data, self.limits, self.permissiveness, &stop)
    }
}
