//! # pronote-dashboard-domain
//!
//! Pure domain model for the Pronote dashboard.
//!
//! ## Responsibilities
//! - Records handed back by the Pronote collaborator: **homework**, **lessons**, **subjects**
//! - The **login request** used to open a remote session
//! - **Week math**: the Monday-start calendar week and the homework look-ahead window
//! - Typed error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The collaborator boundary is expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod credentials;
pub mod homework;
pub mod lesson;
pub mod subject;
pub mod week;
