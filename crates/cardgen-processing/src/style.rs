//! Card palette and type sizes.

use image::Rgb;

pub const CANVAS_BG: Rgb<u8> = Rgb([255, 255, 255]);
pub const TEXT_PANEL_BG: Rgb<u8> = Rgb([248, 249, 250]);
pub const TEXT_PRIMARY: Rgb<u8> = Rgb([26, 26, 26]);
pub const TEXT_SECONDARY: Rgb<u8> = Rgb([51, 51, 51]);
pub const DIVIDER: Rgb<u8> = Rgb([224, 224, 224]);
pub const ACCENT: Rgb<u8> = Rgb([33, 150, 243]);
pub const PHOTO_BORDER: Rgb<u8> = Rgb([204, 204, 204]);
pub const PLACEHOLDER_OUTLINE: Rgb<u8> = Rgb([221, 221, 221]);
pub const PLACEHOLDER_TEXT: Rgb<u8> = Rgb([153, 153, 153]);
pub const ERROR_OUTLINE: Rgb<u8> = Rgb([255, 107, 107]);
pub const ERROR_FILL: Rgb<u8> = Rgb([255, 245, 245]);

pub const TITLE_PX: f32 = 48.0;
pub const LABEL_PX: f32 = 40.0;
pub const VALUE_PX: f32 = 36.0;
