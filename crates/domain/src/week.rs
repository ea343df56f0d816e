//! Calendar week math for the timetable view.
//!
//! A week always starts on Monday and always has seven days, whether or not
//! any lesson falls on them.

use chrono::{Datelike, Days, NaiveDate};

use crate::lesson::Lesson;

/// Number of days in a timetable week.
pub const DAYS_PER_WEEK: usize = 7;

/// The Monday-to-Sunday week containing a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    monday: NaiveDate,
}

impl Week {
    /// Week containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        let offset = u64::from(date.weekday().num_days_from_monday());
        let monday = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
        Self { monday }
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.monday
    }

    /// Sunday closing the week.
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.monday
            .checked_add_days(Days::new(6))
            .unwrap_or(NaiveDate::MAX)
    }

    /// The seven dates of the week, Monday first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.monday.iter_days().take(DAYS_PER_WEEK)
    }

    /// Bucket lessons by the day they start on.
    ///
    /// Always returns seven buckets, Monday first. Lessons outside the week
    /// are dropped; each bucket is ordered by start time, keeping the
    /// collaborator's order for ties.
    #[must_use]
    pub fn partition(&self, lessons: Vec<Lesson>) -> [Vec<Lesson>; DAYS_PER_WEEK] {
        let mut buckets: [Vec<Lesson>; DAYS_PER_WEEK] = Default::default();
        for lesson in lessons {
            let Ok(index) = usize::try_from((lesson.day() - self.monday).num_days()) else {
                continue;
            };
            if let Some(bucket) = buckets.get_mut(index) {
                bucket.push(lesson);
            }
        }
        for bucket in &mut buckets {
            bucket.sort_by_key(|lesson| lesson.start);
        }
        buckets
    }
}
