//! # pronote-dashboard-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** the Pronote collaborator must implement:
//!   - `PronoteConnector` — open an authenticated remote session
//!   - `PronoteSession` — logged-in flag, homework and lesson listings
//! - Define the **display records** rendered by the dashboard
//!   (`HomeworkItem`, `LessonSlot`, `DaySchedule`, `Dashboard`)
//! - Provide the `DashboardService` use-case: validate a submission,
//!   authenticate, fetch, and reshape the results
//!
//! ## Dependency rule
//! Depends on `pronote-dashboard-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
pub mod view;
