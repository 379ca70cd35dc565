//! # zencrop
//!
//! Decoder and encoder for 8-bit indexed (palette) BMP files, plus
//! crop-to-content: find the smallest rectangle holding every pixel that
//! differs from the background and produce a new image of just that part.
//!
//! ## Format
//!
//! Only the classic layout is handled: a 14-byte file header, a 40-byte
//! BITMAPINFOHEADER with 8 bits per pixel and no compression, a 256-entry
//! color table, then one palette index per pixel with every row padded to
//! a multiple of 4 bytes. Decoding materializes the whole image; encoding
//! writes headers and color table back verbatim, so
//! `decode(encode(image)) == image`.
//!
//! ## Cropping
//!
//! The top and left edges are found against the color of pixel (0, 0);
//! the bottom and right edges against the color of the last pixel
//! (height - 1, width - 1). An image with nothing to crop to fails with
//! [`BitmapError::EmptyCrop`]. The cropped image shares the source's color
//! table and owns a copy of its pixels.
//!
//! ## Non-Goals
//!
//! - Bit depths other than 8, RLE or bitfield compression
//! - Editing the color table
//! - Streaming or partial decode
//!
//! ## Usage
//!
//! ```no_run
//! use zencrop::{Unstoppable, crop_to_content, decode_bmp8, encode_bmp8};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//! let image = decode_bmp8(data, Unstoppable)?;
//! let cropped = crop_to_content(&image, Unstoppable)?;
//! let bytes = encode_bmp8(&cropped, Unstoppable)?;
//! # let _ = bytes;
//! # Ok::<(), zencrop::BitmapError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bmp;
mod crop;
mod decode;
mod error;
mod image;
mod info;
mod limits;

#[cfg(feature = "std")]
mod io;

// Re-exports
pub use bmp::{BmpPermissiveness, ColorTable, FileHeader, InfoHeader, PaletteEntry};
pub use crop::CropBounds;
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::{BitmapError, ErrorClass};
pub use image::Image;
pub use info::ImageInfo;
pub use limits::Limits;

#[cfg(feature = "std")]
pub use io::{load, load_with, read_from, save, save_with_stop, write_to};

/// Decode an 8-bit BMP with default strictness and no limits.
pub fn decode_bmp8(data: &[u8], stop: impl Stop) -> Result<Image, BitmapError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode an image to BMP bytes.
pub fn encode_bmp8(image: &Image, stop: impl Stop) -> Result<alloc::vec::Vec<u8>, BitmapError> {
    bmp::encode::encode_image(image, &stop)
}

/// Locate the foreground rectangle without copying anything.
pub fn find_bounds(image: &Image, stop: impl Stop) -> Result<CropBounds, BitmapError> {
    crop::find_bounds(image, &stop)
}

/// Copy the foreground rectangle of `image` into a new image.
pub fn crop_to_content(image: &Image, stop: impl Stop) -> Result<Image, BitmapError> {
    crop::crop_to_content(image, &stop)
}

impl Image {
    /// [`crop_to_content`] without cancellation.
    pub fn crop(&self) -> Result<Image, BitmapError> {
        crop_to_content(self, Unstoppable)
    }
}
