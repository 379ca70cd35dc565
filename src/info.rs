use crate::bmp::cursor::Cursor;
use crate::bmp::decode::{BmpPermissiveness, read_headers};
use crate::error::BitmapError;

/// Header-level facts about an 8-bit BMP, read without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    /// Declared palette usage; the decoder always reads all 256 entries.
    pub colors_used: u32,
    pub pixel_data_offset: u32,
    pub file_size: u32,
}

impl ImageInfo {
    /// Probe the file and info headers.
    ///
    /// Uses [`BmpPermissiveness::Permissive`], so anything with the "BM"
    /// magic, 8 bits per pixel, and non-empty bottom-up dimensions probes
    /// successfully.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        let mut cursor = Cursor::new(data);
        let headers = read_headers(&mut cursor, data.len(), BmpPermissiveness::Permissive)?;
        Ok(Self {
            width: headers.width as u32,
            height: headers.height as u32,
            bits_per_pixel: headers.info.bit_count,
            colors_used: headers.info.colors_used,
            pixel_data_offset: headers.file.off_bits,
            file_size: headers.file.size,
        })
    }
}
