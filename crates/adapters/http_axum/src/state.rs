//! Shared application state for axum handlers.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use pronote_dashboard_app::ports::PronoteConnector;
use pronote_dashboard_app::services::dashboard_service::DashboardService;

/// Application state shared across all axum handlers.
///
/// Generic over the collaborator to avoid dynamic dispatch.
/// `Clone` is implemented manually so the connector itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<C> {
    /// Dashboard use-case.
    pub dashboard_service: Arc<DashboardService<C>>,
    /// Key signing the flash cookie.
    pub cookie_key: Key,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            dashboard_service: Arc::clone(&self.dashboard_service),
            cookie_key: self.cookie_key.clone(),
        }
    }
}

impl<C> AppState<C>
where
    C: PronoteConnector + 'static,
{
    /// Create a new application state.
    pub fn new(dashboard_service: DashboardService<C>, cookie_key: Key) -> Self {
        Self {
            dashboard_service: Arc::new(dashboard_service),
            cookie_key,
        }
    }
}

impl<C> FromRef<AppState<C>> for Key {
    fn from_ref(state: &AppState<C>) -> Self {
        state.cookie_key.clone()
    }
}
