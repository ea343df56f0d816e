//! Dashboard service — turns a login form submission into a [`Dashboard`].

use chrono::NaiveDate;

use pronote_dashboard_domain::credentials::{AuthMethod, Credentials, LoginRequest};
use pronote_dashboard_domain::error::DashboardError;
use pronote_dashboard_domain::homework::homework_window;
use pronote_dashboard_domain::week::Week;

use crate::ports::{PronoteConnector, PronoteSession};
use crate::view::Dashboard;

/// Where and how remote sessions are opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// Pronote instance URL.
    pub endpoint: String,
    pub auth_method: AuthMethod,
    pub device_uuid: Option<String>,
}

impl ConnectionSettings {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            auth_method: AuthMethod::Direct,
            device_uuid: None,
        }
    }
}

/// Application service behind the dashboard submit form.
///
/// Holds no per-user state: every call re-authenticates and re-fetches.
pub struct DashboardService<C> {
    connector: Option<C>,
    settings: ConnectionSettings,
}

impl<C: PronoteConnector> DashboardService<C> {
    /// Create a service backed by the given collaborator.
    pub fn new(connector: C, settings: ConnectionSettings) -> Self {
        Self {
            connector: Some(connector),
            settings,
        }
    }

    /// Create a service with no collaborator; every submission fails with
    /// [`DashboardError::ClientUnavailable`].
    pub fn unavailable(settings: ConnectionSettings) -> Self {
        Self {
            connector: None,
            settings,
        }
    }

    /// Pronote instance the service connects to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.settings.endpoint
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.connector.is_some()
    }

    /// Authenticate with the submitted credentials and build the dashboard
    /// for the week containing `today`.
    ///
    /// Nothing is returned unless every step succeeds.
    ///
    /// # Errors
    ///
    /// - [`DashboardError::ClientUnavailable`] when no collaborator is wired
    /// - [`DashboardError::MissingCredentials`] when a form value is absent
    /// - [`DashboardError::UnsupportedAuthMethod`] for ENT providers
    /// - [`DashboardError::AuthenticationRejected`] when login fails
    /// - [`DashboardError::Client`] for any collaborator failure
    pub async fn load(
        &self,
        username: Option<String>,
        password: Option<String>,
        today: NaiveDate,
    ) -> Result<Dashboard, DashboardError> {
        let connector = self
            .connector
            .as_ref()
            .ok_or(DashboardError::ClientUnavailable)?;
        let credentials = Credentials::from_form(username, password)?;
        self.settings.auth_method.ensure_supported()?;

        let request = LoginRequest::new(self.settings.endpoint.clone(), credentials)
            .auth_method(self.settings.auth_method.clone())
            .device_uuid(self.settings.device_uuid.clone());
        let session = connector.connect(request).await?;
        if !session.is_logged_in() {
            return Err(DashboardError::AuthenticationRejected);
        }

        let (from, to) = homework_window(today);
        let homework = session.homework(from, to).await?;

        let week = Week::containing(today);
        let lessons = session.lessons(week.start(), week.end()).await?;

        tracing::debug!(
            homework = homework.len(),
            lessons = lessons.len(),
            week_start = %week.start(),
            "dashboard data fetched"
        );

        Ok(Dashboard::build(week, homework, lessons))
    }
}
