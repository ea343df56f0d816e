//! # pronote-dashboard-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **server-side-rendered HTML dashboard** that works with
//!   **zero JavaScript**: a login form, the homework list, and the week grid
//! - Map the login form submission into a `DashboardService` call (driving adapter)
//! - Map failures into a flashed notice plus a redirect to the landing page
//!
//! ## Flash notices
//! - A failed submission stores one notice in a signed `flash` cookie and
//!   redirects to `/` (PRG pattern).
//! - The landing page displays the notice once and clears the cookie.
//!
//! ## Dependency rule
//! Depends on `pronote-dashboard-app` (for port traits and services) and
//! `pronote-dashboard-domain` (for error types). Never leaks axum types into
//! the domain.

pub mod dashboard;
pub mod error;
pub mod flash;
pub mod router;
pub mod state;
