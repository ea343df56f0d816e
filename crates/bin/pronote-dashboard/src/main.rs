//! # pronote-dashboard — homework and timetable dashboard server
//!
//! Composition root that wires the collaborator and HTTP adapter together
//! and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise logging
//! - Construct the Pronote collaborator (fixture file, or none)
//! - Construct the dashboard service, injecting the collaborator via port traits
//! - Build the axum router with the cookie signing key
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use axum_extra::extract::cookie::Key;
use tracing_subscriber::EnvFilter;

use pronote_dashboard_adapter_fixture::{Fixture, FixtureConnector};
use pronote_dashboard_adapter_http_axum::router;
use pronote_dashboard_adapter_http_axum::state::AppState;
use pronote_dashboard_app::services::dashboard_service::DashboardService;

use crate::config::{Config, ConfigError, Secret};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    init_logging(&config.logging.filter);

    // Collaborator
    let settings = config.connection_settings();
    let service = match &config.connector.fixture {
        Some(path) => {
            let fixture = Fixture::from_path(path)?;
            tracing::info!(
                path = %path.display(),
                accounts = fixture.accounts.len(),
                "fixture collaborator loaded"
            );
            DashboardService::new(FixtureConnector::new(fixture), settings)
        }
        None => {
            tracing::warn!("no Pronote collaborator configured, every login will be refused");
            DashboardService::unavailable(settings)
        }
    };

    // HTTP
    let cookie_key = cookie_key(config.secret.as_ref())?;
    let app = router::build(AppState::new(service, cookie_key));

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, endpoint = %config.pronote.url, "pronote-dashboard listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("pronote-dashboard stopped");
    Ok(())
}

fn init_logging(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();
}

fn cookie_key(secret: Option<&Secret>) -> Result<Key, ConfigError> {
    match secret {
        Some(secret) => Key::try_from(secret.expose().as_bytes())
            .map_err(|err| ConfigError::Validation(err.to_string())),
        None => {
            tracing::warn!(
                "PRONOTE_DASHBOARD_SECRET is not set, using a random key; notices will not survive a restart"
            );
            Ok(Key::generate())
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
