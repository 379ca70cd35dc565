//! Hand-built BMP files and pixel patterns shared by the integration tests.

#![allow(dead_code)]

use zencrop::{ColorTable, Image};

pub const HEADER_AND_PALETTE: usize = 1078;

/// Build an 8-bit BMP byte for byte, filling row padding with `pad_fill`.
pub fn build_bmp8(rows: &[&[u8]], pad_fill: u8) -> Vec<u8> {
    let width = rows[0].len();
    let height = rows.len();
    let pad = (4 - width % 4) % 4;
    let file_size = HEADER_AND_PALETTE + (width + pad) * height;

    let mut out = Vec::with_capacity(file_size);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADER_AND_PALETTE as u32).to_le_bytes());

    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&8u16.to_le_bytes()); // bpp
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&(((width + pad) * height) as u32).to_le_bytes());
    out.extend_from_slice(&3780i32.to_le_bytes());
    out.extend_from_slice(&3780i32.to_le_bytes());
    out.extend_from_slice(&16u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors

    for i in 0..=255u8 {
        out.extend_from_slice(&[i, 255 - i, i / 2, 0]);
    }

    for row in rows {
        assert_eq!(row.len(), width);
        out.extend_from_slice(row);
        out.extend(std::iter::repeat_n(pad_fill, pad));
    }
    assert_eq!(out.len(), file_size);
    out
}

pub fn noise_pattern(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}

pub fn image_from_rows(rows: &[&[u8]]) -> Image {
    let width = rows[0].len();
    let buf: Vec<u8> = rows.iter().flat_map(|r| r.iter().copied()).collect();
    Image::from_pixels(
        imgref::ImgVec::new(buf, width, rows.len()),
        ColorTable::grayscale(),
    )
    .unwrap()
}
