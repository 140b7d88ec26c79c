//! Shared application state for axum handlers.

use std::sync::Arc;

use pgdesk_app::ports::Backend;

/// Application state shared across all axum handlers.
///
/// Generic over the backend to avoid dynamic dispatch. `Clone` is
/// implemented manually so the backend itself does not need to be `Clone`;
/// only the `Arc` wrapper is cloned.
pub struct AppState<B> {
    /// The REST service every page reads from and writes to.
    pub backend: Arc<B>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<B: Backend> AppState<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }
}
