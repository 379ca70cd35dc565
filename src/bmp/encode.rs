//! BMP encoder: writes an [`Image`] back in the layout the decoder reads.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::BitmapError;
use crate::image::Image;

/// Encode an image to BMP bytes.
///
/// Headers and color table are written verbatim; each row is followed by
/// its zero padding.
pub(crate) fn encode_image(image: &Image, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let pad_bytes = image.row_padding_bytes();
    let mut out = Vec::with_capacity(image.encoded_len());

    out.extend_from_slice(&image.file_header().to_bytes());
    out.extend_from_slice(&image.info_header().to_bytes());
    out.extend_from_slice(&image.color_table().to_bytes());

    stop.check()?;
    for (row_idx, row) in image.rows().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend_from_slice(row);
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    log::debug!(
        "encoded {}x{} 8-bit BMP ({} bytes)",
        image.width(),
        image.height(),
        out.len()
    );

    Ok(out)
}
