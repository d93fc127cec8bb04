//! Photo panel rendering: fit-inside scaling, placement, and placeholders.

use image::imageops::{self, FilterType};
use image::RgbImage;
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

use cardgen_core::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, MAX_PHOTO_UPSCALE, PHOTO_BORDER_WIDTH, PHOTO_PADDING,
    PHOTO_PANEL_WIDTH, TEXT_PANEL_WIDTH,
};

use crate::error::RenderError;
use crate::fonts::PanelFont;
use crate::photo::DecodedPhoto;
use crate::style;

/// Compute the final pixel dimensions for a photo fitted inside the
/// available area. The scale is the smaller of the two axis ratios, capped
/// at [`MAX_PHOTO_UPSCALE`]; results round down and never hit zero.
pub fn compute_fit(src_width: u32, src_height: u32, avail_width: u32, avail_height: u32) -> (u32, u32) {
    let scale_w = avail_width as f32 / src_width as f32;
    let scale_h = avail_height as f32 / src_height as f32;
    let scale = scale_w.min(scale_h).min(MAX_PHOTO_UPSCALE);

    let width = ((src_width as f32 * scale) as u32).max(1);
    let height = ((src_height as f32 * scale) as u32).max(1);
    (width, height)
}

fn check_canvas(canvas: &RgbImage) -> Result<(), RenderError> {
    if canvas.width() < CANVAS_WIDTH || canvas.height() < CANVAS_HEIGHT {
        return Err(RenderError::CanvasTooSmall {
            required_width: CANVAS_WIDTH,
            required_height: CANVAS_HEIGHT,
            actual_width: canvas.width(),
            actual_height: canvas.height(),
        });
    }
    Ok(())
}

/// Scale the photo to fit the padded photo panel, center it, and frame it.
pub fn place_photo(canvas: &mut RgbImage, photo: &DecodedPhoto) -> Result<(), RenderError> {
    check_canvas(canvas)?;

    let avail_width = PHOTO_PANEL_WIDTH - 2 * PHOTO_PADDING;
    let avail_height = CANVAS_HEIGHT - 2 * PHOTO_PADDING;
    let (width, height) = compute_fit(photo.width, photo.height, avail_width, avail_height);

    tracing::debug!(
        src_width = photo.width,
        src_height = photo.height,
        width,
        height,
        "Placing photo"
    );

    let resized = imageops::resize(&photo.image, width, height, FilterType::Lanczos3);

    let x = TEXT_PANEL_WIDTH + (PHOTO_PANEL_WIDTH - width) / 2;
    let y = (CANVAS_HEIGHT - height) / 2;
    imageops::overlay(canvas, &resized, x as i64, y as i64);

    // Border drawn just outside the photo edge
    for i in 0..PHOTO_BORDER_WIDTH as i32 {
        draw_hollow_rect_mut(
            canvas,
            Rect::at(x as i32 - 2 - i, y as i32 - 2 - i)
                .of_size(width + 4 + 2 * i as u32, height + 4 + 2 * i as u32),
            style::PHOTO_BORDER,
        );
    }

    Ok(())
}

/// Draw the neutral frame shown when no photo source was supplied.
pub fn draw_photo_placeholder(canvas: &mut RgbImage, font: &PanelFont) -> Result<(), RenderError> {
    check_canvas(canvas)?;

    let inset = 80i32;
    let outline = Rect::at(TEXT_PANEL_WIDTH as i32 + inset, inset).of_size(
        PHOTO_PANEL_WIDTH - 2 * inset as u32,
        CANVAS_HEIGHT - 2 * inset as u32,
    );
    for i in 0..4 {
        draw_hollow_rect_mut(
            canvas,
            Rect::at(outline.left() + i, outline.top() + i)
                .of_size(outline.width() - 2 * i as u32, outline.height() - 2 * i as u32),
            style::PLACEHOLDER_OUTLINE,
        );
    }

    let center_x = TEXT_PANEL_WIDTH as i32 + PHOTO_PANEL_WIDTH as i32 / 2;
    let center_y = CANVAS_HEIGHT as i32 / 2;
    font.draw_text(
        canvas,
        style::PLACEHOLDER_TEXT,
        center_x - 240,
        center_y - 60,
        style::TITLE_PX,
        "License Image",
    );
    font.draw_text(
        canvas,
        style::PLACEHOLDER_TEXT,
        center_x - 280,
        center_y,
        style::TITLE_PX,
        "Will Appear Here",
    );

    Ok(())
}

/// Draw the visibly marked error box shown when the photo source could not
/// be fetched or decoded. `diagnostic` is clipped to keep the box readable.
pub fn draw_source_error(
    canvas: &mut RgbImage,
    font: &PanelFont,
    diagnostic: &str,
) -> Result<(), RenderError> {
    check_canvas(canvas)?;

    let center_y = CANVAS_HEIGHT as i32 / 2;
    let box_rect = Rect::at(TEXT_PANEL_WIDTH as i32 + 50, center_y - 50)
        .of_size(PHOTO_PANEL_WIDTH - 100, 100);

    draw_filled_rect_mut(canvas, box_rect, style::ERROR_FILL);
    for i in 0..3 {
        draw_hollow_rect_mut(
            canvas,
            Rect::at(box_rect.left() + i, box_rect.top() + i)
                .of_size(box_rect.width() - 2 * i as u32, box_rect.height() - 2 * i as u32),
            style::ERROR_OUTLINE,
        );
    }

    let clipped: String = diagnostic.chars().take(50).collect();
    font.draw_text(
        canvas,
        style::ERROR_OUTLINE,
        box_rect.left() + 30,
        center_y - 18,
        style::VALUE_PX,
        &clipped,
    );

    Ok(())
}
