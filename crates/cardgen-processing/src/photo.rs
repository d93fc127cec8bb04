//! Decoded photo types and decoding.
//!
//! Every photo, whatever its source, is decoded here: guessed format,
//! capture-orientation correction from the raw bytes, then conversion to a
//! single three-channel color model before any geometric operation.

use image::{DynamicImage, ImageReader, RgbImage};
use std::io::Cursor;

use crate::orientation;

/// An in-memory photo normalized to RGB8. Owned by the pipeline invocation
/// that decoded it; never shared across requests.
#[derive(Debug, Clone)]
pub struct DecodedPhoto {
    pub image: RgbImage,
    pub width: u32,
    pub height: u32,
}

/// What the photo panel receives after source resolution.
#[derive(Debug)]
pub enum PhotoInput {
    /// No source supplied; draw the neutral placeholder frame.
    Missing,
    /// Source fetched and decoded.
    Decoded(DecodedPhoto),
    /// Source acquisition failed; draw the error box with this diagnostic.
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PhotoDecodeError {
    #[error("unreadable image data: {0}")]
    Read(#[from] std::io::Error),

    #[error("undecodable image data: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode raw bytes into an orientation-corrected RGB photo.
pub fn decode_photo(data: &[u8]) -> Result<DecodedPhoto, PhotoDecodeError> {
    let img = ImageReader::new(Cursor::new(data))
        .with_guessed_format()?
        .decode()?;
    // Normalize the color model first; everything geometric works on RGB8.
    let img = DynamicImage::ImageRgb8(img.to_rgb8());
    let img = orientation::normalize(img, data);
    let image = img.into_rgb8();
    let (width, height) = image.dimensions();
    tracing::debug!(width, height, "Decoded photo");
    Ok(DecodedPhoto {
        image,
        width,
        height,
    })
}
