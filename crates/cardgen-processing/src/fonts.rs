//! Font resolution for the text panel.
//!
//! Walks an ordered list of known font file locations and uses the first
//! one that parses; every candidate yields an explicit success or failure.
//! When none load (bare containers with no font packages), a minimal
//! built-in bitmap glyph renderer guarantees the panel still renders.

mod builtin;

use ab_glyph::{FontArc, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;

/// Candidate font files, tried in order.
pub const FONT_CANDIDATES: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
];

/// The renderer used for all panel text, resolved once per composer.
pub enum PanelFont {
    /// An outline font loaded from disk.
    Vector(FontArc),
    /// Built-in 5x7 bitmap glyphs; always available.
    Builtin,
}

impl PanelFont {
    /// Try each candidate font path in order, falling back to the built-in
    /// renderer when none loads.
    pub fn resolve() -> Self {
        for path in FONT_CANDIDATES {
            match std::fs::read(path) {
                Ok(bytes) => match FontArc::try_from_vec(bytes) {
                    Ok(font) => {
                        tracing::info!(path, "Loaded panel font");
                        return PanelFont::Vector(font);
                    }
                    Err(e) => {
                        tracing::debug!(path, error = %e, "Font file did not parse");
                    }
                },
                Err(e) => {
                    tracing::debug!(path, error = %e, "Font file not readable");
                }
            }
        }
        tracing::warn!("No candidate font loaded, using built-in glyphs");
        PanelFont::Builtin
    }

    /// Draw `text` with its top-left corner at `(x, y)` at `px` pixels tall.
    pub fn draw_text(
        &self,
        canvas: &mut RgbImage,
        color: Rgb<u8>,
        x: i32,
        y: i32,
        px: f32,
        text: &str,
    ) {
        match self {
            PanelFont::Vector(font) => {
                draw_text_mut(canvas, color, x, y, PxScale::from(px), font, text);
            }
            PanelFont::Builtin => {
                builtin::draw_text(canvas, color, x, y, px, text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_draws_pixels() {
        let mut canvas = RgbImage::from_pixel(200, 60, Rgb([255, 255, 255]));
        PanelFont::Builtin.draw_text(&mut canvas, Rgb([0, 0, 0]), 4, 4, 36.0, "Name: 123");
        let drawn = canvas.pixels().filter(|p| p.0 != [255, 255, 255]).count();
        assert!(drawn > 0);
    }

    #[test]
    fn test_builtin_clips_at_canvas_edge() {
        // Must not panic when text runs past the canvas.
        let mut canvas = RgbImage::from_pixel(30, 10, Rgb([255, 255, 255]));
        PanelFont::Builtin.draw_text(
            &mut canvas,
            Rgb([0, 0, 0]),
            0,
            0,
            36.0,
            "A very long line that overruns",
        );
    }

    #[test]
    fn test_resolve_never_fails() {
        // Whatever the host has installed, resolution must yield a renderer.
        let font = PanelFont::resolve();
        let mut canvas = RgbImage::from_pixel(100, 60, Rgb([255, 255, 255]));
        font.draw_text(&mut canvas, Rgb([0, 0, 0]), 2, 2, 24.0, "ok");
    }
}
