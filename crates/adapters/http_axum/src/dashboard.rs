//! Server-side rendered HTML dashboard (no JavaScript).
//!
//! - `GET  /`      — empty dashboard shell with the login form
//! - `POST /fetch` — log in, fetch, and render the populated dashboard
//!
//! Failed submissions redirect back to `/` with a flashed notice (PRG pattern).

pub mod fetch;
pub mod home;

use askama::Template;
use axum::Router;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};

use pronote_dashboard_app::ports::PronoteConnector;
use pronote_dashboard_app::view::{DaySchedule, Dashboard, HomeworkItem};

use crate::state::AppState;

/// The single page of the application.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pronote_url: String,
    notices: Vec<String>,
    week_start: String,
    homework: Vec<HomeworkItem>,
    days: Vec<DaySchedule>,
}

impl DashboardTemplate {
    /// Render `dashboard` for the instance at `pronote_url`.
    #[must_use]
    pub fn new(pronote_url: impl Into<String>, dashboard: Dashboard, notices: Vec<String>) -> Self {
        Self {
            pronote_url: pronote_url.into(),
            notices,
            week_start: dashboard.week_start,
            homework: dashboard.homework,
            days: dashboard.days,
        }
    }
}

impl IntoResponse for DashboardTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// Build the dashboard sub-router for SSR HTML pages.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: PronoteConnector + 'static,
{
    Router::new()
        .route("/", get(home::index::<C>))
        .route("/fetch", post(fetch::submit::<C>))
}
