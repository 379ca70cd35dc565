use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};

use crate::bmp::{
    self, BMP_MAGIC, ColorTable, FileHeader, INFO_HEADER_LEN, InfoHeader, PIXEL_DATA_OFFSET,
};
use crate::error::BitmapError;

/// Horizontal and vertical resolution written into new headers (72 DPI).
const DEFAULT_PIXELS_PER_METER: i32 = 2835;

/// A fully decoded 8-bit indexed bitmap.
///
/// The pixel grid always matches the width and height in the info header;
/// rows are kept in the order they are stored in the file.
#[derive(Clone, Debug)]
pub struct Image {
    file_header: FileHeader,
    info_header: InfoHeader,
    color_table: Arc<ColorTable>,
    pixels: ImgVec<u8>,
    row_padding_bytes: usize,
}

impl Image {
    /// Create an image of `width` x `height` pixels, all set to index 0,
    /// with headers describing the canonical uncompressed layout.
    pub fn new(width: usize, height: usize, color_table: ColorTable) -> Result<Self, BitmapError> {
        let (file_header, info_header) = fresh_headers(width, height)?;
        let buf = vec![0u8; width * height];
        Ok(Self::from_parts(
            file_header,
            info_header,
            Arc::new(color_table),
            ImgVec::new(buf, width, height),
        ))
    }

    /// Create an image from a grid of palette indices.
    pub fn from_pixels(pixels: ImgVec<u8>, color_table: ColorTable) -> Result<Self, BitmapError> {
        let (width, height) = (pixels.width(), pixels.height());
        let (file_header, info_header) = fresh_headers(width, height)?;
        let buf: Vec<u8> = if pixels.stride() == width {
            pixels.into_buf()
        } else {
            pixels.rows().flatten().copied().collect()
        };
        Ok(Self::from_parts(
            file_header,
            info_header,
            Arc::new(color_table),
            ImgVec::new(buf, width, height),
        ))
    }

    /// `pixels` must be contiguous and match the header dimensions.
    pub(crate) fn from_parts(
        file_header: FileHeader,
        info_header: InfoHeader,
        color_table: Arc<ColorTable>,
        pixels: ImgVec<u8>,
    ) -> Self {
        debug_assert_eq!(pixels.width(), info_header.width as usize);
        debug_assert_eq!(pixels.height(), info_header.height as usize);
        debug_assert_eq!(pixels.stride(), pixels.width());
        Self {
            row_padding_bytes: bmp::row_padding_bytes(pixels.width()),
            file_header,
            info_header,
            color_table,
            pixels,
        }
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    pub fn info_header(&self) -> &InfoHeader {
        &self.info_header
    }

    pub fn color_table(&self) -> &ColorTable {
        &self.color_table
    }

    /// The color table, shared with every image cropped from this one.
    pub fn shared_color_table(&self) -> &Arc<ColorTable> {
        &self.color_table
    }

    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Zero bytes that follow each row on disk.
    pub fn row_padding_bytes(&self) -> usize {
        self.row_padding_bytes
    }

    /// Bytes per row on disk, always a multiple of 4.
    pub fn encoded_stride(&self) -> usize {
        self.width() + self.row_padding_bytes
    }

    /// Size of the encoded file in bytes.
    pub fn encoded_len(&self) -> usize {
        PIXEL_DATA_OFFSET + self.encoded_stride() * self.height()
    }

    /// Palette index at `row`, `col`, or `None` outside the image.
    pub fn pixel(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height() && col < self.width() {
            Some(self.at(row, col))
        } else {
            None
        }
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, index: u8) -> Result<(), BitmapError> {
        if row >= self.height() || col >= self.width() {
            return Err(BitmapError::OutOfBounds { row, col });
        }
        let width = self.width();
        self.pixels.buf_mut()[row * width + col] = index;
        Ok(())
    }

    pub(crate) fn at(&self, row: usize, col: usize) -> u8 {
        self.pixels.buf()[row * self.width() + col]
    }

    pub(crate) fn row(&self, row: usize) -> &[u8] {
        let width = self.width();
        &self.pixels.buf()[row * width..(row + 1) * width]
    }

    /// Borrow the pixel grid.
    pub fn pixels(&self) -> ImgRef<'_, u8> {
        self.pixels.as_ref()
    }

    /// Rows in stored order, `width` indices each.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.pixels.buf().chunks_exact(self.width())
    }

    /// Expand palette indices to RGBA colors (alpha 255).
    #[cfg(feature = "rgb")]
    pub fn to_rgba8(&self) -> ImgVec<rgb::RGBA8> {
        let table = &self.color_table;
        let buf = self
            .pixels
            .buf()
            .iter()
            .map(|&i| {
                let e = &table[i];
                rgb::RGBA8::new(e.red, e.green, e.blue, 255)
            })
            .collect();
        ImgVec::new(buf, self.width(), self.height())
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.file_header == other.file_header
            && self.info_header == other.info_header
            && self.color_table == other.color_table
            && self.width() == other.width()
            && self.height() == other.height()
            && self.pixels.buf()[..] == other.pixels.buf()[..]
    }
}

impl Eq for Image {}

/// Width and height as the signed header fields, rejecting empty images.
pub(crate) fn header_dimensions(width: usize, height: usize) -> Result<(i32, i32), BitmapError> {
    if width == 0 || height == 0 {
        return Err(BitmapError::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        });
    }
    match (i32::try_from(width), i32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(BitmapError::DimensionsTooLarge { width, height }),
    }
}

fn fresh_headers(width: usize, height: usize) -> Result<(FileHeader, InfoHeader), BitmapError> {
    let (w, h) = header_dimensions(width, height)?;
    let size = bmp::file_size(width, height)?;
    let file_header = FileHeader {
        magic: BMP_MAGIC,
        size,
        reserved1: 0,
        reserved2: 0,
        off_bits: PIXEL_DATA_OFFSET as u32,
    };
    let info_header = InfoHeader {
        header_size: INFO_HEADER_LEN as u32,
        width: w,
        height: h,
        planes: 1,
        bit_count: 8,
        compression: 0,
        size_image: size - PIXEL_DATA_OFFSET as u32,
        x_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
        y_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
        colors_used: 0,
        colors_important: 0,
    };
    Ok((file_header, info_header))
}
