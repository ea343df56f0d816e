//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `pronote-dashboard.toml` in the working directory. Every field
//! has a sensible default so the file is optional. Environment variables take
//! precedence over file values. The cookie secret is only ever read from the
//! environment.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use pronote_dashboard_app::services::dashboard_service::ConnectionSettings;
use pronote_dashboard_domain::credentials::AuthMethod;

/// Instance queried when nothing else is configured.
pub const DEFAULT_PRONOTE_URL: &str = "https://4170004n.index-education.net/pronote/eleve.html";

/// Minimum secret length accepted for signing cookies, in bytes.
pub const MIN_SECRET_LEN: usize = 64;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Remote Pronote instance settings.
    pub pronote: PronoteConfig,
    /// Collaborator selection.
    pub connector: ConnectorConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Cookie signing secret (`PRONOTE_DASHBOARD_SECRET`).
    #[serde(skip)]
    pub secret: Option<Secret>,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Remote instance configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PronoteConfig {
    /// Pronote instance URL.
    pub url: String,
    /// ENT/CAS provider name. Not supported; rejected by validation.
    pub ent: Option<String>,
    /// Identifier of a previously registered device.
    pub device_uuid: Option<String>,
}

/// Collaborator configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    /// Fixture file served in place of a live instance. Without one, no
    /// collaborator is available and every submission is refused.
    pub fixture: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Secret value that never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl Config {
    /// Load configuration from `pronote-dashboard.toml` (if present) then
    /// apply environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("pronote-dashboard.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PRONOTE_DASHBOARD_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("PRONOTE_DASHBOARD_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("PRONOTE_DASHBOARD_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("PRONOTE_DASHBOARD_URL") {
            self.pronote.url = val;
        }
        if let Ok(val) = std::env::var("PRONOTE_DASHBOARD_FIXTURE") {
            self.connector.fixture = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("PRONOTE_DASHBOARD_SECRET") {
            self.secret = Some(Secret::new(val));
        }
        if let Ok(val) = std::env::var("PRONOTE_DASHBOARD_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.pronote.url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "pronote url must not be empty".to_string(),
            ));
        }
        if let Some(ent) = self.pronote.ent.as_deref().filter(|ent| !ent.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "ENT authentication ({ent}) is not supported"
            )));
        }
        if let Some(secret) = &self.secret
            && secret.expose().len() < MIN_SECRET_LEN
        {
            return Err(ConfigError::Validation(format!(
                "secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Settings used to open remote sessions.
    #[must_use]
    pub fn connection_settings(&self) -> ConnectionSettings {
        ConnectionSettings {
            endpoint: self.pronote.url.clone(),
            auth_method: AuthMethod::from_provider(self.pronote.ent.as_deref()),
            device_uuid: self.pronote.device_uuid.clone(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for PronoteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PRONOTE_URL.to_string(),
            ent: None,
            device_uuid: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "pronote_dashboard=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
