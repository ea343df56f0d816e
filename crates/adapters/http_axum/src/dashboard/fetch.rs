//! Login form submission.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum_extra::extract::cookie::SignedCookieJar;
use serde::Deserialize;

use pronote_dashboard_app::ports::PronoteConnector;
use pronote_dashboard_domain::time;

use super::DashboardTemplate;
use crate::error::FlashRedirect;
use crate::state::AppState;

/// Form data for the login form. Both fields are checked by the service.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// `POST /fetch` — authenticate, fetch, and render the populated dashboard.
///
/// A body that cannot be read as a form counts as a submission without
/// credentials.
pub async fn submit<C>(
    State(state): State<AppState<C>>,
    jar: SignedCookieJar,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<DashboardTemplate, FlashRedirect>
where
    C: PronoteConnector + 'static,
{
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable login form");
            LoginForm::default()
        }
    };
    let service = &state.dashboard_service;
    let dashboard = service
        .load(form.username, form.password, time::today())
        .await
        .map_err(|err| FlashRedirect::new(jar, err))?;

    Ok(DashboardTemplate::new(service.endpoint(), dashboard, Vec::new()))
}
