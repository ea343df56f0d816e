//! Dashboard landing page — empty shell and login form.

use axum::extract::State;
use axum_extra::extract::cookie::SignedCookieJar;

use pronote_dashboard_app::ports::PronoteConnector;
use pronote_dashboard_app::view::Dashboard;
use pronote_dashboard_domain::time;

use super::DashboardTemplate;
use crate::flash;
use crate::state::AppState;

/// `GET /` — empty dashboard anchored on today, plus any pending notice.
pub async fn index<C>(
    State(state): State<AppState<C>>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, DashboardTemplate)
where
    C: PronoteConnector + 'static,
{
    let (jar, notices) = flash::take(jar);
    let template = DashboardTemplate::new(
        state.dashboard_service.endpoint(),
        Dashboard::empty(time::today()),
        notices,
    );
    (jar, template)
}
