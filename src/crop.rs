//! Crop-to-content: find the rectangle holding every non-background pixel
//! and copy it into a new image.
//!
//! The lower bounds are measured against the color of the first stored
//! pixel (row 0, column 0), the upper bounds against the last one
//! (row `height - 1`, column `width - 1`). When the two corners differ the
//! rectangle follows each corner's notion of background independently.

use alloc::sync::Arc;
use alloc::vec::Vec;

use enough::Stop;
use imgref::ImgVec;

use crate::bmp::{self, PIXEL_DATA_OFFSET};
use crate::error::BitmapError;
use crate::image::{Image, header_dimensions};

/// Inclusive pixel rectangle `[y_lower, y_upper] x [x_lower, x_upper]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CropBounds {
    pub y_lower: usize,
    pub y_upper: usize,
    pub x_lower: usize,
    pub x_upper: usize,
}

impl CropBounds {
    /// Columns covered, or `None` when the bounds are inverted.
    pub fn width(&self) -> Option<usize> {
        self.x_upper.checked_sub(self.x_lower)?.checked_add(1)
    }

    /// Rows covered, or `None` when the bounds are inverted.
    pub fn height(&self) -> Option<usize> {
        self.y_upper.checked_sub(self.y_lower)?.checked_add(1)
    }
}

/// First index in `order` for which `hit` is true.
fn scan(
    order: impl Iterator<Item = usize>,
    stop: &dyn Stop,
    mut hit: impl FnMut(usize) -> bool,
) -> Result<Option<usize>, BitmapError> {
    for (step, idx) in order.enumerate() {
        if step % 16 == 0 {
            stop.check()?;
        }
        if hit(idx) {
            return Ok(Some(idx));
        }
    }
    Ok(None)
}

pub(crate) fn find_bounds(image: &Image, stop: &dyn Stop) -> Result<CropBounds, BitmapError> {
    let (height, width) = (image.height(), image.width());
    let bkg = image.at(0, 0);
    let y_lower = scan(0..height, stop, |y| image.row(y).iter().any(|&p| p != bkg))?
        .ok_or(BitmapError::EmptyCrop)?;
    let x_lower = scan(0..width, stop, |x| {
        (y_lower..height).any(|y| image.at(y, x) != bkg)
    })?
    .ok_or(BitmapError::EmptyCrop)?;

    let bkg = image.at(height - 1, width - 1);
    let y_upper = scan((y_lower..height).rev(), stop, |y| {
        image.row(y)[x_lower..].iter().any(|&p| p != bkg)
    })?
    .ok_or(BitmapError::EmptyCrop)?;
    let x_upper = scan((x_lower..width).rev(), stop, |x| {
        (y_lower..=y_upper).any(|y| image.at(y, x) != bkg)
    })?
    .ok_or(BitmapError::EmptyCrop)?;

    let bounds = CropBounds {
        y_lower,
        y_upper,
        x_lower,
        x_upper,
    };
    log::trace!("crop bounds for {width}x{height} image: {bounds:?}");
    Ok(bounds)
}

/// Deep-copy `bounds` out of `image` into a new image with updated headers.
pub(crate) fn extract(
    image: &Image,
    bounds: CropBounds,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    let out_of_bounds = BitmapError::OutOfBounds {
        row: bounds.y_upper,
        col: bounds.x_upper,
    };
    if bounds.x_upper >= image.width() || bounds.y_upper >= image.height() {
        return Err(out_of_bounds);
    }
    let (Some(width), Some(height)) = (bounds.width(), bounds.height()) else {
        return Err(out_of_bounds);
    };
    let (w, h) = header_dimensions(width, height)?;

    let mut file_header = *image.file_header();
    let mut info_header = *image.info_header();
    info_header.width = w;
    info_header.height = h;
    file_header.off_bits = PIXEL_DATA_OFFSET as u32;
    file_header.size = bmp::file_size(width, height)?;

    let region = image
        .pixels()
        .sub_image(bounds.x_lower, bounds.y_lower, width, height);
    let mut buf = Vec::with_capacity(width * height);
    for (row_idx, row) in region.rows().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        buf.extend_from_slice(row);
    }

    Ok(Image::from_parts(
        file_header,
        info_header,
        Arc::clone(image.shared_color_table()),
        ImgVec::new(buf, width, height),
    ))
}

pub(crate) fn crop_to_content(image: &Image, stop: &dyn Stop) -> Result<Image, BitmapError> {
    let bounds = find_bounds(image, stop)?;
    let cropped = extract(image, bounds, stop)?;
    log::debug!(
        "cropped {}x{} to {}x{} at ({}, {})",
        image.width(),
        image.height(),
        cropped.width(),
        cropped.height(),
        bounds.x_lower,
        bounds.y_lower
    );
    Ok(cropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmp::ColorTable;
    use enough::Unstoppable;

    fn image_from(rows: &[&[u8]]) -> Image {
        let width = rows[0].len();
        let buf = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Image::from_pixels(ImgVec::new(buf, width, rows.len()), ColorTable::grayscale()).unwrap()
    }

    #[test]
    fn corner_colors_are_used_independently() {
        // Lower bounds against 1, upper bounds against 2.
        let img = image_from(&[
            &[1, 1, 1, 1],
            &[1, 1, 9, 2],
            &[1, 9, 2, 2],
            &[2, 2, 2, 2],
        ]);
        let bounds = find_bounds(&img, &Unstoppable).unwrap();
        assert_eq!(bounds.y_lower, 1);
        assert_eq!(bounds.x_lower, 0);
        assert_eq!(bounds.y_upper, 2);
        assert_eq!(bounds.x_upper, 2);
    }

    #[test]
    fn single_column_without_upper_match_is_empty() {
        let img = image_from(&[&[0], &[5], &[5]]);
        assert!(matches!(
            find_bounds(&img, &Unstoppable),
            Err(BitmapError::EmptyCrop)
        ));
    }

    #[test]
    fn extract_rejects_bounds_outside_image() {
        let img = image_from(&[&[0, 1], &[1, 0]]);
        let bounds = CropBounds {
            y_lower: 0,
            y_upper: 2,
            x_lower: 0,
            x_upper: 1,
        };
        assert!(matches!(
            extract(&img, bounds, &Unstoppable),
            Err(BitmapError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn inverted_bounds_have_no_size() {
        let inverted = CropBounds {
            y_lower: 0,
            y_upper: 0,
            x_lower: 3,
            x_upper: 1,
        };
        assert_eq!(inverted.width(), None);
        assert_eq!(inverted.height(), Some(1));

        let img = image_from(&[&[0, 1, 2, 3], &[1, 0, 1, 0]]);
        assert!(matches!(
            extract(&img, inverted, &Unstoppable),
            Err(BitmapError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn maximal_upper_bound_does_not_overflow() {
        let bounds = CropBounds {
            y_lower: 0,
            y_upper: usize::MAX,
            x_lower: 0,
            x_upper: 0,
        };
        assert_eq!(bounds.height(), None);
        assert_eq!(bounds.width(), Some(1));
    }
}
