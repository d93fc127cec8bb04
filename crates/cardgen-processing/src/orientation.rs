//! Capture-orientation normalization.
//!
//! Phone cameras record the physical rotation of the device in the EXIF
//! orientation tag instead of rotating pixels. This module reads the tag
//! from the original byte stream and rotates the decoded image so its
//! top-left pixel is the intended visual top-left.
//!
//! Rotation convention, applied consistently and covered by tests:
//! code 3 rotates 180°, code 6 rotates 90° clockwise, code 8 rotates 90°
//! counter-clockwise. The mirrored codes (2, 4, 5, 7) do not occur in any
//! observed caller and are left uncorrected. Unreadable metadata is never an
//! error; the image passes through unchanged.

use image::DynamicImage;
use std::io::Cursor;

/// Read the EXIF orientation tag from raw image bytes.
/// Returns `None` if the bytes carry no EXIF block or it cannot be parsed.
pub fn read_orientation(data: &[u8]) -> Option<u32> {
    let mut cursor = Cursor::new(data);
    let exif = exif::Reader::new().read_from_container(&mut cursor).ok()?;
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    field.value.get_uint(0)
}

/// Correct a decoded image using the orientation tag found in `data`.
pub fn normalize(img: DynamicImage, data: &[u8]) -> DynamicImage {
    match read_orientation(data) {
        Some(code) => {
            tracing::debug!(code, "Applying capture orientation");
            apply_code(img, code)
        }
        None => img,
    }
}

/// Apply a single orientation code to an already decoded image.
pub fn apply_code(img: DynamicImage, code: u32) -> DynamicImage {
    match code {
        3 => img.rotate180(),
        6 => img.rotate90(),
        8 => img.rotate270(),
        2 | 4 | 5 | 7 => {
            tracing::debug!(code, "Mirrored orientation not supported, leaving as-is");
            img
        }
        _ => img,
    }
}
