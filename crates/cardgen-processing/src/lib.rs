//! Cardgen image processing.
//!
//! Pure-CPU compositing: orientation normalization, text wrapping and panel
//! layout, fit-inside photo placement, and the composite pipeline that turns
//! identity fields plus an optional photo into one encoded PNG. Nothing in
//! this crate performs I/O beyond reading font files at startup.

pub mod error;
pub mod fit;
pub mod fonts;
pub mod layout;
pub mod orientation;
pub mod photo;
pub mod pipeline;
pub mod style;
pub mod wrap;

pub use error::{ComposeError, RenderError};
pub use fonts::PanelFont;
pub use photo::{decode_photo, DecodedPhoto, PhotoDecodeError, PhotoInput};
pub use pipeline::{CardComposer, ComposedCard};
