//! BITMAPFILEHEADER and BITMAPINFOHEADER, field by field.
//!
//! Every field is read from and written to its fixed byte offset in
//! little-endian order; nothing depends on in-memory struct layout.

use super::{BMP_MAGIC, FILE_HEADER_LEN, INFO_HEADER_LEN};
use crate::error::BitmapError;

fn le_u16(buf: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([buf[off], buf[off + 1]])
}

fn le_u32(buf: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([buf[off], buf[off + 1], buf[off + 2], buf[off + 3]])
}

fn le_i32(buf: &[u8], off: usize) -> i32 {
    le_u32(buf, off) as i32
}

fn put(buf: &mut [u8], off: usize, bytes: &[u8]) {
    buf[off..off + bytes.len()].copy_from_slice(bytes);
}

/// The 14-byte file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Always `0x4D42` ("BM") for a decoded header.
    pub magic: u16,
    /// Total file size in bytes.
    pub size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Byte offset from the start of the file to the pixel rows.
    pub off_bits: u32,
}

impl FileHeader {
    /// Parse the file header, rejecting anything that is not "BM".
    pub fn from_bytes(buf: &[u8; FILE_HEADER_LEN]) -> Result<Self, BitmapError> {
        let magic = le_u16(buf, 0);
        if magic != BMP_MAGIC {
            return Err(BitmapError::UnrecognizedFormat);
        }
        Ok(Self {
            magic,
            size: le_u32(buf, 2),
            reserved1: le_u16(buf, 6),
            reserved2: le_u16(buf, 8),
            off_bits: le_u32(buf, 10),
        })
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_LEN] {
        let mut buf = [0u8; FILE_HEADER_LEN];
        put(&mut buf, 0, &self.magic.to_le_bytes());
        put(&mut buf, 2, &self.size.to_le_bytes());
        put(&mut buf, 6, &self.reserved1.to_le_bytes());
        put(&mut buf, 8, &self.reserved2.to_le_bytes());
        put(&mut buf, 10, &self.off_bits.to_le_bytes());
        buf
    }
}

/// The 40-byte BITMAPINFOHEADER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive for bottom-up storage. Rows are kept in stored order.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub size_image: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    /// Parse the info header. Validation is left to the decoder, which
    /// knows the requested strictness.
    pub fn from_bytes(buf: &[u8; INFO_HEADER_LEN]) -> Self {
        Self {
            header_size: le_u32(buf, 0),
            width: le_i32(buf, 4),
            height: le_i32(buf, 8),
            planes: le_u16(buf, 12),
            bit_count: le_u16(buf, 14),
            compression: le_u32(buf, 16),
            size_image: le_u32(buf, 20),
            x_pixels_per_meter: le_i32(buf, 24),
            y_pixels_per_meter: le_i32(buf, 28),
            colors_used: le_u32(buf, 32),
            colors_important: le_u32(buf, 36),
        }
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_LEN] {
        let mut buf = [0u8; INFO_HEADER_LEN];
        put(&mut buf, 0, &self.header_size.to_le_bytes());
        put(&mut buf, 4, &self.width.to_le_bytes());
        put(&mut buf, 8, &self.height.to_le_bytes());
        put(&mut buf, 12, &self.planes.to_le_bytes());
        put(&mut buf, 14, &self.bit_count.to_le_bytes());
        put(&mut buf, 16, &self.compression.to_le_bytes());
        put(&mut buf, 20, &self.size_image.to_le_bytes());
        put(&mut buf, 24, &self.x_pixels_per_meter.to_le_bytes());
        put(&mut buf, 28, &self.y_pixels_per_meter.to_le_bytes());
        put(&mut buf, 32, &self.colors_used.to_le_bytes());
        put(&mut buf, 36, &self.colors_important.to_le_bytes());
        buf
    }
}
