//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use pgdesk_app::ports::Backend;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the console pages at `/` and a liveness check at `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<B>(state: AppState<B>) -> Router
where
    B: Backend + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::pages::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
