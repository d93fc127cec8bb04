//! Text panel layout.
//!
//! Draws the left half of the card: panel background, center divider, title
//! with accent underline, and the five label/value rows at fixed offsets.
//! The address row wraps onto sub-lines when it exceeds the width bound.

use image::RgbImage;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use cardgen_core::constants::{
    ADDRESS_WRAP_THRESHOLD, CANVAS_HEIGHT, CANVAS_WIDTH, TEXT_PANEL_WIDTH,
};
use cardgen_core::models::IdentityFields;

use crate::error::RenderError;
use crate::fonts::PanelFont;
use crate::style;
use crate::wrap::wrap_value;

const TITLE_TEXT: &str = "DRIVER LICENSE";
const MARGIN_X: i32 = 80;
const TITLE_Y: i32 = 64;
const RULE_Y: i32 = 140;
const RULE_HEIGHT: u32 = 4;
const RULE_WIDTH: u32 = TEXT_PANEL_WIDTH - 2 * MARGIN_X as u32;
const ROWS_TOP: i32 = 200;
const ROW_PITCH: i32 = 220;
const VALUE_OFFSET: i32 = 60;
const WRAP_LINE_PITCH: i32 = 45;
const DIVIDER_WIDTH: u32 = 4;
const ADDRESS_LABEL: &str = "Address:";

/// Render the text panel into the left half of `canvas`.
pub fn draw_text_panel(
    canvas: &mut RgbImage,
    fields: &IdentityFields,
    font: &PanelFont,
) -> Result<(), RenderError> {
    if canvas.width() < CANVAS_WIDTH || canvas.height() < CANVAS_HEIGHT {
        return Err(RenderError::CanvasTooSmall {
            required_width: CANVAS_WIDTH,
            required_height: CANVAS_HEIGHT,
            actual_width: canvas.width(),
            actual_height: canvas.height(),
        });
    }

    draw_filled_rect_mut(
        canvas,
        Rect::at(0, 0).of_size(TEXT_PANEL_WIDTH, CANVAS_HEIGHT),
        style::TEXT_PANEL_BG,
    );

    // Center divider between the two panels
    draw_filled_rect_mut(
        canvas,
        Rect::at(TEXT_PANEL_WIDTH as i32 - DIVIDER_WIDTH as i32 / 2, 0)
            .of_size(DIVIDER_WIDTH, CANVAS_HEIGHT),
        style::DIVIDER,
    );

    font.draw_text(
        canvas,
        style::TEXT_PRIMARY,
        MARGIN_X,
        TITLE_Y,
        style::TITLE_PX,
        TITLE_TEXT,
    );
    draw_filled_rect_mut(
        canvas,
        Rect::at(MARGIN_X, RULE_Y).of_size(RULE_WIDTH, RULE_HEIGHT),
        style::ACCENT,
    );

    let mut y = ROWS_TOP;
    for (label, value) in fields.rows() {
        font.draw_text(canvas, style::TEXT_PRIMARY, MARGIN_X, y, style::LABEL_PX, label);

        let value_y = y + VALUE_OFFSET;
        if label == ADDRESS_LABEL && value.chars().count() > ADDRESS_WRAP_THRESHOLD {
            for (i, line) in wrap_value(value, ADDRESS_WRAP_THRESHOLD).iter().enumerate() {
                font.draw_text(
                    canvas,
                    style::TEXT_SECONDARY,
                    MARGIN_X,
                    value_y + i as i32 * WRAP_LINE_PITCH,
                    style::VALUE_PX,
                    line,
                );
            }
        } else {
            font.draw_text(
                canvas,
                style::TEXT_SECONDARY,
                MARGIN_X,
                value_y,
                style::VALUE_PX,
                value,
            );
        }

        y += ROW_PITCH;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardgen_core::models::identity::IdentityAliases;

    fn canvas() -> RgbImage {
        RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, style::CANVAS_BG)
    }

    #[test]
    fn test_panel_renders_placeholders() {
        let fields = IdentityFields::resolve(IdentityAliases::default());
        let mut canvas = canvas();
        draw_text_panel(&mut canvas, &fields, &PanelFont::Builtin).unwrap();

        // Panel background was filled and some text pixels were drawn.
        assert_eq!(canvas.get_pixel(10, 10), &style::TEXT_PANEL_BG);
        let text_pixels = canvas
            .enumerate_pixels()
            .filter(|(x, _, p)| *x < TEXT_PANEL_WIDTH && **p == style::TEXT_SECONDARY)
            .count();
        assert!(text_pixels > 0, "no value text rendered");
    }

    #[test]
    fn test_long_address_renders_extra_lines() {
        let long = "1 very long street address that exceeds the wrap threshold, City, Country";
        let short_fields = IdentityFields::resolve(IdentityAliases {
            address: Some("1 Short St".to_string()),
            ..Default::default()
        });
        let long_fields = IdentityFields::resolve(IdentityAliases {
            address: Some(long.to_string()),
            ..Default::default()
        });

        let mut short_canvas = canvas();
        let mut long_canvas = canvas();
        draw_text_panel(&mut short_canvas, &short_fields, &PanelFont::Builtin).unwrap();
        draw_text_panel(&mut long_canvas, &long_fields, &PanelFont::Builtin).unwrap();

        // The address row is the third row; its wrapped sub-lines occupy the
        // band below the single-line position.
        let band_top = (ROWS_TOP + 2 * ROW_PITCH + VALUE_OFFSET + WRAP_LINE_PITCH) as u32;
        let band_bottom = band_top + 2 * WRAP_LINE_PITCH as u32;
        let drawn_in_band = |img: &RgbImage| {
            img.enumerate_pixels()
                .filter(|(x, y, p)| {
                    *x < TEXT_PANEL_WIDTH
                        && *y >= band_top
                        && *y < band_bottom
                        && **p == style::TEXT_SECONDARY
                })
                .count()
        };
        assert_eq!(drawn_in_band(&short_canvas), 0);
        assert!(drawn_in_band(&long_canvas) > 0);
    }

    #[test]
    fn test_undersized_canvas_is_an_error() {
        let fields = IdentityFields::resolve(IdentityAliases::default());
        let mut small = RgbImage::from_pixel(100, 100, style::CANVAS_BG);
        assert!(draw_text_panel(&mut small, &fields, &PanelFont::Builtin).is_err());
    }
}
