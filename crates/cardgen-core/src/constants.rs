//! Shared constants for canvas geometry, rendering policy, and service defaults.

/// Output canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 2400;

/// Output canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 1440;

/// Width of the text panel. The photo panel occupies the remaining half,
/// so the vertical split sits exactly at `TEXT_PANEL_WIDTH`.
pub const TEXT_PANEL_WIDTH: u32 = 1200;

/// Width of the photo panel (right half of the canvas).
pub const PHOTO_PANEL_WIDTH: u32 = CANVAS_WIDTH - TEXT_PANEL_WIDTH;

/// Padding on all sides of the photo panel before the photo is placed.
pub const PHOTO_PADDING: u32 = 60;

/// Width of the border drawn around a placed photo.
pub const PHOTO_BORDER_WIDTH: u32 = 3;

/// Upper bound on enlarging a source photo when fitting it into the panel.
/// Small sources are not blown up past this factor; over-enlargement makes
/// the photo visibly soft, so we keep it at its captured fidelity instead
/// of filling the panel.
pub const MAX_PHOTO_UPSCALE: f32 = 1.5;

/// Character count above which the address value is wrapped onto sub-lines,
/// and the per-line width bound used when wrapping it.
pub const ADDRESS_WRAP_THRESHOLD: usize = 45;

/// Maximum number of display lines produced by the text wrapper.
pub const MAX_WRAP_LINES: usize = 3;

/// Rendered in place of a missing or empty identity field value.
pub const FIELD_PLACEHOLDER: &str = "Not Available";

/// The only output encoding; the canvas is encoded once, losslessly.
pub const OUTPUT_FORMAT: &str = "PNG";

/// Default time-to-live for stored previews, in seconds (1 hour).
pub const DEFAULT_PREVIEW_TTL_SECS: u64 = 3600;

/// Default interval between preview sweeper wake-ups, in seconds (5 minutes).
pub const DEFAULT_PREVIEW_SWEEP_INTERVAL_SECS: u64 = 300;

/// Default timeout for outbound photo downloads, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Some providers reject unidentified clients, so outbound photo downloads
/// carry a browser-like User-Agent.
pub const REMOTE_FETCH_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
