//! Cardgen API Library
//!
//! This crate provides the HTTP handlers, ephemeral preview store, photo
//! source resolver, and application setup for the card image service.

pub mod api_doc;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod store;
pub mod telemetry;

// Re-exports
pub use error::ErrorResponse;
pub use state::AppState;
pub use store::PreviewStore;
