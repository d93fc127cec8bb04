//! Composite pipeline - builds the final card image.
//!
//! Orchestrates the text panel and photo panel renderers onto one canvas and
//! encodes it once. Source-acquisition failures arrive already folded into
//! [`PhotoInput`] and degrade to drawn placeholders; text panel or encode
//! failures are fatal to the request.

use bytes::Bytes;
use image::{ImageFormat, RgbImage};
use std::io::Cursor;

use cardgen_core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, OUTPUT_FORMAT};
use cardgen_core::models::IdentityFields;

use crate::error::ComposeError;
use crate::fit;
use crate::fonts::PanelFont;
use crate::layout;
use crate::photo::PhotoInput;
use crate::style;

/// The encoded composite and its summary stats.
#[derive(Debug, Clone)]
pub struct ComposedCard {
    pub bytes: Bytes,
    pub width: u32,
    pub height: u32,
    pub format: &'static str,
}

impl ComposedCard {
    /// Canvas dimensions in the `WxH` form reported to clients.
    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// Builds card images. Font resolution happens once at construction; the
/// composer is then reusable across requests.
pub struct CardComposer {
    font: PanelFont,
}

impl Default for CardComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl CardComposer {
    pub fn new() -> Self {
        Self {
            font: PanelFont::resolve(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_builtin_font() -> Self {
        Self {
            font: PanelFont::Builtin,
        }
    }

    /// Compose the card and encode it as PNG.
    pub fn compose(
        &self,
        fields: &IdentityFields,
        photo: PhotoInput,
    ) -> Result<ComposedCard, ComposeError> {
        let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, style::CANVAS_BG);

        layout::draw_text_panel(&mut canvas, fields, &self.font)?;

        match photo {
            PhotoInput::Decoded(photo) => {
                if let Err(e) = fit::place_photo(&mut canvas, &photo) {
                    tracing::warn!(error = %e, "Photo placement failed, drawing error box");
                    fit::draw_source_error(&mut canvas, &self.font, &e.to_string())?;
                }
            }
            PhotoInput::Missing => {
                fit::draw_photo_placeholder(&mut canvas, &self.font)?;
            }
            PhotoInput::Failed(reason) => {
                fit::draw_source_error(&mut canvas, &self.font, &reason)?;
            }
        }

        let mut buffer = Vec::new();
        canvas.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;

        tracing::info!(size_bytes = buffer.len(), "Composed card image");

        Ok(ComposedCard {
            bytes: Bytes::from(buffer),
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            format: OUTPUT_FORMAT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::photo::DecodedPhoto;
    use cardgen_core::models::identity::IdentityAliases;
    use image::Rgb;

    fn fields_with_long_address() -> IdentityFields {
        IdentityFields::resolve(IdentityAliases {
            name: Some("Jane Doe".to_string()),
            address: Some(
                "1 very long street address that exceeds the wrap threshold, City, Country"
                    .to_string(),
            ),
            ..Default::default()
        })
    }

    #[test]
    fn test_compose_without_photo_succeeds() {
        let composer = CardComposer::with_builtin_font();
        let card = composer
            .compose(&fields_with_long_address(), PhotoInput::Missing)
            .unwrap();

        assert!(!card.bytes.is_empty());
        assert_eq!(&card.bytes[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(card.dimensions(), "2400x1440");
        assert_eq!(card.format, "PNG");
    }

    #[test]
    fn test_compose_with_failed_source_succeeds() {
        let composer = CardComposer::with_builtin_font();
        let card = composer
            .compose(
                &fields_with_long_address(),
                PhotoInput::Failed("Fetch failed: connection refused".to_string()),
            )
            .unwrap();
        assert!(!card.bytes.is_empty());
        assert_eq!(card.dimensions(), "2400x1440");
    }

    #[test]
    fn test_compose_with_photo_places_it() {
        let composer = CardComposer::with_builtin_font();
        let photo = DecodedPhoto {
            image: RgbImage::from_pixel(640, 480, Rgb([20, 160, 80])),
            width: 640,
            height: 480,
        };
        let card = composer
            .compose(&fields_with_long_address(), PhotoInput::Decoded(photo))
            .unwrap();

        // Decode the PNG back and look for the photo at the panel center.
        let decoded = image::load_from_memory(&card.bytes).unwrap().to_rgb8();
        let center = decoded.get_pixel(1800, 720);
        assert!(center.0[1] > 100, "photo pixels missing at center: {center:?}");
    }
}
