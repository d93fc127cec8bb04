//! Rendering and composition error types.

/// A sub-renderer failed to draw into its canvas region.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("canvas is {actual_width}x{actual_height}, expected at least {required_width}x{required_height}")]
    CanvasTooSmall {
        required_width: u32,
        required_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

/// The composite pipeline failed. These are internal-invariant failures and
/// fail the whole request; source-acquisition problems never reach here.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("text panel rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("failed to encode canvas: {0}")]
    Encode(#[from] image::ImageError),
}
