//! Application state.
//!
//! Constructed once at process start (see `setup::initialize_app`) and
//! injected into handlers through axum's state extractor.

use cardgen_core::Config;
use cardgen_processing::CardComposer;

use crate::services::PhotoFetcher;
use crate::store::{PreviewStore, SweeperHandle};

pub struct AppState {
    pub config: Config,
    pub composer: CardComposer,
    pub previews: PreviewStore,
    pub photos: PhotoFetcher,
    pub sweeper: SweeperHandle,
}
