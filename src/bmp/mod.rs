//! 8-bit indexed BMP layout: headers, color table, and padded pixel rows.
//!
//! Use top-level [`crate::decode_bmp8`], [`crate::encode_bmp8`], etc.

pub(crate) mod cursor;
pub(crate) mod decode;
pub(crate) mod encode;
mod header;
mod palette;

pub use decode::BmpPermissiveness;
pub use header::{FileHeader, InfoHeader};
pub use palette::{ColorTable, PaletteEntry};

use crate::error::BitmapError;

/// "BM" read as a little-endian `u16`.
pub const BMP_MAGIC: u16 = 0x4D42;
pub const FILE_HEADER_LEN: usize = 14;
pub const INFO_HEADER_LEN: usize = 40;
pub const PALETTE_SIZE: usize = 256;
/// 256 entries of B, G, R, reserved.
pub const COLOR_TABLE_LEN: usize = PALETTE_SIZE * 4;
/// Where pixel rows start in every file this crate writes.
pub const PIXEL_DATA_OFFSET: usize = FILE_HEADER_LEN + INFO_HEADER_LEN + COLOR_TABLE_LEN;

/// Zero bytes appended to a row of `width` pixels so it ends on a 4-byte boundary.
pub const fn row_padding_bytes(width: usize) -> usize {
    (4 - width % 4) % 4
}

/// Bytes of pixel data for `height` padded rows of `width` pixels.
pub(crate) fn pixel_data_len(width: usize, height: usize) -> Result<usize, BitmapError> {
    width
        .checked_add(row_padding_bytes(width))
        .and_then(|stride| stride.checked_mul(height))
        .ok_or(BitmapError::DimensionsTooLarge { width, height })
}

/// Total file size for an image whose rows start at [`PIXEL_DATA_OFFSET`].
///
/// Fails when the size does not fit the 32-bit header field.
pub(crate) fn file_size(width: usize, height: usize) -> Result<u32, BitmapError> {
    pixel_data_len(width, height)?
        .checked_add(PIXEL_DATA_OFFSET)
        .and_then(|total| u32::try_from(total).ok())
        .ok_or(BitmapError::DimensionsTooLarge { width, height })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_rounds_rows_to_four_bytes() {
        for width in 1..=64 {
            let pad = row_padding_bytes(width);
            assert!(pad <= 3);
            assert_eq!((width + pad) % 4, 0, "width {width}");
        }
        assert_eq!(row_padding_bytes(4), 0);
        assert_eq!(row_padding_bytes(5), 3);
        assert_eq!(row_padding_bytes(6), 2);
        assert_eq!(row_padding_bytes(7), 1);
    }

    #[test]
    fn file_size_includes_headers_and_padding() {
        assert_eq!(PIXEL_DATA_OFFSET, 1078);
        assert_eq!(file_size(5, 2).unwrap(), 1078 + 8 * 2);
        assert!(matches!(
            file_size(usize::MAX / 2, 3),
            Err(BitmapError::DimensionsTooLarge { .. })
        ));
    }
}
