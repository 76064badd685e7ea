//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the user store, constructed once in `main`, and the parsed
//! configuration. There is no global store instance.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::UserStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(store: UserStore, config: AppConfig) -> Self {
        Self { store, config: Arc::new(config) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
