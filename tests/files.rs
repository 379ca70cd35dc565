#![cfg(feature = "std")]

mod common;

use std::io::Cursor;

use common::{build_bmp8, image_from_rows};
use zencrop::*;

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("marks.bmp");

    let image = image_from_rows(&[&[0, 0, 0], &[0, 6, 0], &[0, 0, 9]]);
    save(&image, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), image.encoded_len());
    assert_eq!(load(&path).unwrap(), image);
}

#[test]
fn load_crop_save() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.bmp");
    let output = dir.path().join("out.bmp");
    std::fs::write(&input, build_bmp8(&[&[2, 2, 2], &[2, 5, 2], &[2, 2, 2]], 0)).unwrap();

    let image = load(&input).unwrap();
    save(&image.crop().unwrap(), &output).unwrap();

    let cropped = load(&output).unwrap();
    assert_eq!(cropped.width(), 1);
    assert_eq!(cropped.height(), 1);
    assert_eq!(cropped.pixel(0, 0), Some(5));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load(dir.path().join("nope.bmp")).unwrap_err();
    assert!(matches!(err, BitmapError::Io(_)));
    assert_eq!(err.class(), ErrorClass::Io);
}

#[test]
fn unwritable_destination_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let image = Image::new(2, 2, ColorTable::grayscale()).unwrap();
    let err = save(&image, dir.path().join("missing-dir").join("out.bmp")).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Io);
}

#[test]
fn stream_roundtrip() {
    let image = image_from_rows(&[&[1, 2, 3, 4, 5]]);
    let mut sink = Vec::new();
    write_to(&image, &mut sink).unwrap();
    assert_eq!(sink.len(), 1078 + 8);

    let back = read_from(Cursor::new(sink)).unwrap();
    assert_eq!(back, image);
}

#[test]
fn strictness_applies_to_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("offset.bmp");
    let mut data = build_bmp8(&[&[1, 2, 3, 4]], 0);
    data[10..14].copy_from_slice(&0u32.to_le_bytes());
    std::fs::write(&path, data).unwrap();

    assert!(load(&path).is_ok());
    let err = load_with(&path, BmpPermissiveness::Strict).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Format);
}
