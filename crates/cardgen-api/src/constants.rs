//! API-level constants.

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "cardgen-api";

/// Upper bound on request body size. Inline base64 photos dominate here;
/// anything larger than this is not a plausible reference photo.
pub const MAX_REQUEST_BODY_BYTES: usize = 25 * 1024 * 1024;
