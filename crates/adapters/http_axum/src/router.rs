//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use pronote_dashboard_app::ports::PronoteConnector;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the dashboard at `/` and a health probe at `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<C>(state: AppState<C>) -> Router
where
    C: PronoteConnector + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::dashboard::routes::<C>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
