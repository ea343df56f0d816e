//! Time and date helpers.

use chrono::{Local, NaiveDate};

/// Display format for full dates (`18 Oct 2026`).
pub const DATE_FORMAT: &str = "%d %b %Y";
/// Display format for day column headers (`Mon 12`).
pub const DAY_LABEL_FORMAT: &str = "%a %d";
/// Display format for lesson boundaries (`08:30`).
pub const TIME_FORMAT: &str = "%H:%M";

/// Return today's date in the server's local timezone.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
