//! File and stream helpers around the in-memory codec.

use std::io::{Read, Write};
use std::path::Path;

use enough::{Stop, Unstoppable};

use crate::bmp::BmpPermissiveness;
use crate::decode::DecodeRequest;
use crate::error::BitmapError;
use crate::image::Image;

/// Read and decode a BMP file with the default strictness.
pub fn load(path: impl AsRef<Path>) -> Result<Image, BitmapError> {
    load_with(path, BmpPermissiveness::default())
}

pub fn load_with(
    path: impl AsRef<Path>,
    permissiveness: BmpPermissiveness,
) -> Result<Image, BitmapError> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    DecodeRequest::new(&data)
        .with_permissiveness(permissiveness)
        .decode(Unstoppable)
}

/// Read a whole stream and decode it.
pub fn read_from(mut reader: impl Read) -> Result<Image, BitmapError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    DecodeRequest::new(&data).decode(Unstoppable)
}

/// Encode `image` and write it to `writer`, flushing at the end.
pub fn write_to(image: &Image, mut writer: impl Write) -> Result<(), BitmapError> {
    let bytes = crate::encode_bmp8(image, Unstoppable)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

/// Encode `image` into a new file at `path`, replacing any existing file.
pub fn save(image: &Image, path: impl AsRef<Path>) -> Result<(), BitmapError> {
    save_with_stop(image, path, Unstoppable)
}

/// [`save`] with cancellation. The destination is only touched once the
/// whole file has been encoded, so a failed encode leaves it as it was.
pub fn save_with_stop(
    image: &Image,
    path: impl AsRef<Path>,
    stop: impl Stop,
) -> Result<(), BitmapError> {
    let path = path.as_ref();
    let bytes = crate::encode_bmp8(image, stop)?;
    std::fs::write(path, &bytes)?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
