//! HTTP error response mapping.
//!
//! Every dashboard failure ends the same way for the user: a notice on the
//! landing page. Only collaborator failures are logged.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::SignedCookieJar;

use pronote_dashboard_domain::error::DashboardError;

use crate::flash;

/// User-facing notice for a failure.
#[must_use]
pub fn notice(err: &DashboardError) -> String {
    match err {
        DashboardError::MissingCredentials => "Identifiant et mot de passe requis.".to_string(),
        DashboardError::ClientUnavailable => "Client Pronote indisponible.".to_string(),
        DashboardError::AuthenticationRejected => {
            "Connexion impossible : identifiants ou méthode CAS incorrecte.".to_string()
        }
        DashboardError::UnsupportedAuthMethod(name) => {
            format!("Méthode d'authentification non prise en charge : {name}")
        }
        DashboardError::Client(err) => format!("Erreur : {err}"),
    }
}

/// Maps a [`DashboardError`] to a flashed notice and a redirect to `/`.
pub struct FlashRedirect {
    jar: SignedCookieJar,
    error: DashboardError,
}

impl FlashRedirect {
    #[must_use]
    pub fn new(jar: SignedCookieJar, error: DashboardError) -> Self {
        Self { jar, error }
    }
}

impl IntoResponse for FlashRedirect {
    fn into_response(self) -> Response {
        if self.error.is_unexpected() {
            tracing::error!(error = %self.error, details = ?self.error, "dashboard fetch failed");
        }
        let jar = flash::push(self.jar, &notice(&self.error));
        (jar, Redirect::to("/")).into_response()
    }
}
