//! Lesson — one timetable slot.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::subject::Subject;

/// A lesson record as returned by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub subject: Option<Subject>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub teacher: Option<String>,
    pub classroom: Option<String>,
}

impl Lesson {
    /// Calendar day the lesson belongs to (the day it starts).
    #[must_use]
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }
}
