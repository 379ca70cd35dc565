//! 8-bit indexed BMP decoder.

use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec;

use enough::Stop;
use imgref::ImgVec;

use super::cursor::Cursor;
use super::header::{FileHeader, InfoHeader};
use super::palette::ColorTable;
use super::{
    COLOR_TABLE_LEN, FILE_HEADER_LEN, INFO_HEADER_LEN, PIXEL_DATA_OFFSET, row_padding_bytes,
};
use crate::error::BitmapError;
use crate::image::Image;
use crate::limits::Limits;

// ── Permissiveness ──────────────────────────────────────────────────

/// Controls how strictly the BMP decoder validates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmpPermissiveness {
    /// Additionally reject header fields that don't affect decoding but
    /// disagree with the layout this crate writes: header size != 40,
    /// non-zero reserved fields, pixel data offset != 1078, and a
    /// non-zero file size field that doesn't match the input length.
    Strict,

    /// Default behavior. Reject planes != 1 and any compression.
    #[default]
    Standard,

    /// Check only the magic bytes and the bit depth (plus dimensions the
    /// in-memory grid can represent).
    Permissive,
}

/// Headers with validated dimensions.
pub(crate) struct Headers {
    pub file: FileHeader,
    pub info: InfoHeader,
    pub width: usize,
    pub height: usize,
}

/// Read and validate the file and info headers, leaving the cursor at the
/// start of the color table.
pub(crate) fn read_headers(
    cursor: &mut Cursor<'_>,
    input_len: usize,
    permissiveness: BmpPermissiveness,
) -> Result<Headers, BitmapError> {
    let file = FileHeader::from_bytes(&cursor.read_fixed_bytes::<FILE_HEADER_LEN>()?)?;
    let info = InfoHeader::from_bytes(&cursor.read_fixed_bytes::<INFO_HEADER_LEN>()?);

    if info.bit_count != 8 {
        return Err(BitmapError::UnsupportedVariant(alloc::format!(
            "{} bits per pixel, only 8 is supported",
            info.bit_count
        )));
    }
    if info.height < 0 {
        return Err(BitmapError::UnsupportedVariant(
            "top-down row order (negative height)".to_string(),
        ));
    }
    if info.width <= 0 || info.height == 0 {
        return Err(BitmapError::InvalidDimensions {
            width: info.width.into(),
            height: info.height.into(),
        });
    }

    if permissiveness != BmpPermissiveness::Permissive {
        if info.planes != 1 {
            return Err(BitmapError::InvalidHeader(alloc::format!(
                "BMP planes field is {}, expected 1",
                info.planes
            )));
        }
        if info.compression != 0 {
            return Err(BitmapError::UnsupportedVariant(alloc::format!(
                "BMP compression {} (only uncompressed is supported)",
                info.compression
            )));
        }
    }

    if permissiveness == BmpPermissiveness::Strict {
        check_strict(&file, &info, input_len)?;
    }

    Ok(Headers {
        file,
        info,
        width: info.width as usize,
        height: info.height as usize,
    })
}

fn check_strict(file: &FileHeader, info: &InfoHeader, input_len: usize) -> Result<(), BitmapError> {
    if info.header_size != INFO_HEADER_LEN as u32 {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP info header size is {}, expected {INFO_HEADER_LEN}",
            info.header_size
        )));
    }
    if file.reserved1 != 0 || file.reserved2 != 0 {
        return Err(BitmapError::InvalidHeader(
            "BMP reserved fields are not zero".to_string(),
        ));
    }
    if file.off_bits as usize != PIXEL_DATA_OFFSET {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP pixel data offset is {}, expected {PIXEL_DATA_OFFSET}",
            file.off_bits
        )));
    }
    if file.size != 0 && file.size as usize != input_len {
        return Err(BitmapError::InvalidHeader(alloc::format!(
            "BMP file size field ({}) doesn't match actual size ({input_len})",
            file.size
        )));
    }
    Ok(())
}

/// Decode a complete 8-bit BMP into an [`Image`].
pub(crate) fn decode_image(
    data: &[u8],
    limits: Option<&Limits>,
    permissiveness: BmpPermissiveness,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    let mut cursor = Cursor::new(data);
    let Headers {
        file,
        info,
        width,
        height,
    } = read_headers(&mut cursor, data.len(), permissiveness)?;

    let out_bytes = width
        .checked_mul(height)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(out_bytes)?;
    }

    // The whole table is read regardless of `colors_used`.
    let color_table = ColorTable::from_bytes(&cursor.read_fixed_bytes::<COLOR_TABLE_LEN>()?);

    let padding = row_padding_bytes(width);
    // Every row but the last must carry its padding before the next row starts.
    let min_pixel_bytes = (width + padding)
        .checked_mul(height - 1)
        .and_then(|n| n.checked_add(width))
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    if cursor.remaining() < min_pixel_bytes {
        return Err(BitmapError::UnexpectedEof);
    }

    stop.check()?;
    let mut buf = vec![0u8; out_bytes];
    for (row_idx, row) in buf.chunks_exact_mut(width).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        cursor.read_exact_bytes(row)?;
        cursor.skip_up_to(padding);
    }

    log::debug!(
        "decoded {width}x{height} 8-bit BMP ({} bytes, {padding} padding bytes per row)",
        data.len()
    );

    Ok(Image::from_parts(
        file,
        info,
        Arc::new(color_table),
        ImgVec::new(buf, width, height),
    ))
}
