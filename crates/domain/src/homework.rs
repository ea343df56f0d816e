//! Homework — an assignment due on a given date.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::subject::Subject;

/// Number of days after today covered by the homework listing.
pub const HOMEWORK_LOOKAHEAD_DAYS: u64 = 14;

/// A homework record as returned by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Homework {
    pub subject: Option<Subject>,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub teacher: Option<String>,
}

/// Inclusive date range `[today, today + 14 days]` used to list homework.
#[must_use]
pub fn homework_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let end = today
        .checked_add_days(Days::new(HOMEWORK_LOOKAHEAD_DAYS))
        .unwrap_or(NaiveDate::MAX);
    (today, end)
}
