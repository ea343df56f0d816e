//! Credentials and the login request handed to the Pronote collaborator.

use std::fmt;

use crate::error::DashboardError;

/// A username/password pair submitted through the login form.
///
/// The password is never printed by the `Debug` implementation.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Validate raw form values.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::MissingCredentials`] when either value is
    /// absent or empty.
    pub fn from_form(
        username: Option<String>,
        password: Option<String>,
    ) -> Result<Self, DashboardError> {
        match (username, password) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Ok(Self { username, password })
            }
            _ => Err(DashboardError::MissingCredentials),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// How the remote instance authenticates the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthMethod {
    /// Plain Pronote login form.
    #[default]
    Direct,
    /// Login delegated to a named ENT/CAS provider.
    Ent(String),
}

impl AuthMethod {
    /// Build from an optional provider name; `None` or blank means direct login.
    #[must_use]
    pub fn from_provider(provider: Option<&str>) -> Self {
        match provider.map(str::trim) {
            Some(name) if !name.is_empty() => Self::Ent(name.to_string()),
            _ => Self::Direct,
        }
    }

    /// Fail for every provider the dashboard cannot negotiate.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::UnsupportedAuthMethod`] for any ENT provider.
    pub fn ensure_supported(&self) -> Result<(), DashboardError> {
        match self {
            Self::Direct => Ok(()),
            Self::Ent(name) => Err(DashboardError::UnsupportedAuthMethod(name.clone())),
        }
    }
}

/// Everything the collaborator needs to open one remote session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    /// Pronote instance URL (e.g. `https://…/pronote/eleve.html`).
    pub endpoint: String,
    pub credentials: Credentials,
    pub auth_method: AuthMethod,
    /// Identifier of a previously registered device, if any.
    pub device_uuid: Option<String>,
    /// Skip the payload encryption layer. Recent instances reject sessions
    /// opened with this set, so it is always `false` here.
    pub bypass_crypto: bool,
}

impl LoginRequest {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            endpoint: endpoint.into(),
            credentials,
            auth_method: AuthMethod::Direct,
            device_uuid: None,
            bypass_crypto: false,
        }
    }

    #[must_use]
    pub fn auth_method(mut self, auth_method: AuthMethod) -> Self {
        self.auth_method = auth_method;
        self
    }

    #[must_use]
    pub fn device_uuid(mut self, device_uuid: Option<String>) -> Self {
        self.device_uuid = device_uuid;
        self
    }
}
