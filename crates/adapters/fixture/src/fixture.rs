//! Fixture file format.

use std::path::Path;

use chrono::{NaiveTime, Weekday};
use serde::Deserialize;

use pronote_dashboard_domain::subject::Subject;

use crate::error::FixtureError;

/// Raw TOML layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FixtureFile {
    accounts: Vec<Account>,
    homework: Vec<HomeworkEntry>,
    lessons: Vec<LessonEntry>,
    simulate: Simulate,
}

/// A username/password pair accepted by the fixture.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub username: String,
    pub password: String,
}

/// A homework item due a fixed number of days after the session opens.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeworkEntry {
    pub subject: Option<String>,
    pub color: Option<String>,
    pub teacher: Option<String>,
    pub description: Option<String>,
    pub due_in_days: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct LessonEntry {
    weekday: Weekday,
    start: String,
    end: String,
    subject: Option<String>,
    teacher: Option<String>,
    room: Option<String>,
    color: Option<String>,
}

/// Failure injection for demos and tests.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Simulate {
    /// When set, every listing fails with this network error message.
    pub network_error: Option<String>,
}

/// A lesson repeating every week on the same day and hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyLesson {
    pub weekday: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub subject: Option<Subject>,
    pub teacher: Option<String>,
    pub room: Option<String>,
}

/// Validated fixture content.
#[derive(Debug, Clone, Default)]
pub struct Fixture {
    pub accounts: Vec<Account>,
    pub homework: Vec<HomeworkEntry>,
    pub lessons: Vec<WeeklyLesson>,
    pub simulate: Simulate,
}

impl Fixture {
    /// Read and validate a fixture file.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the file cannot be read, is not valid
    /// TOML, or holds an invalid lesson.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate fixture content.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError`] if the content is not valid TOML or holds
    /// an invalid lesson.
    pub fn parse(content: &str) -> Result<Self, FixtureError> {
        let file: FixtureFile = toml::from_str(content)?;
        let lessons = file
            .lessons
            .into_iter()
            .enumerate()
            .map(|(index, entry)| entry.validate(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            accounts: file.accounts,
            homework: file.homework,
            lessons,
            simulate: file.simulate,
        })
    }

    /// Whether the credentials match one of the accounts.
    #[must_use]
    pub fn accepts(&self, username: &str, password: &str) -> bool {
        self.accounts
            .iter()
            .any(|account| account.username == username && account.password == password)
    }
}

impl LessonEntry {
    fn validate(self, index: usize) -> Result<WeeklyLesson, FixtureError> {
        let start = parse_time(index, &self.start)?;
        let end = parse_time(index, &self.end)?;
        if end < start {
            return Err(FixtureError::EndsBeforeStart { index });
        }
        Ok(WeeklyLesson {
            weekday: self.weekday,
            start,
            end,
            subject: subject(self.subject, self.color),
            teacher: self.teacher,
            room: self.room,
        })
    }
}

fn parse_time(index: usize, value: &str) -> Result<NaiveTime, FixtureError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| FixtureError::InvalidTime {
        index,
        value: value.to_string(),
    })
}

pub(crate) fn subject(name: Option<String>, color: Option<String>) -> Option<Subject> {
    name.map(|name| Subject { name, color })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
        [[accounts]]
        username = "demo"
        password = "demo"

        [[homework]]
        subject = "Mathématiques"
        color = "#f59e0b"
        teacher = "M. Martin"
        description = "Exercices 1 à 4"
        due_in_days = 2

        [[lessons]]
        weekday = "mon"
        start = "08:00"
        end = "09:00"
        subject = "Mathématiques"
        room = "B12"
    "##;

    #[test]
    fn should_parse_sample_fixture() {
        let fixture = Fixture::parse(SAMPLE).unwrap();
        assert_eq!(fixture.accounts.len(), 1);
        assert_eq!(fixture.homework.len(), 1);
        assert_eq!(fixture.lessons.len(), 1);
        assert_eq!(fixture.lessons[0].weekday, Weekday::Mon);
        assert_eq!(
            fixture.lessons[0].start,
            NaiveTime::from_hms_opt(8, 0, 0).unwrap()
        );
        assert!(fixture.simulate.network_error.is_none());
    }

    #[test]
    fn should_parse_empty_fixture() {
        let fixture = Fixture::parse("").unwrap();
        assert!(fixture.accounts.is_empty());
        assert!(fixture.lessons.is_empty());
    }

    #[test]
    fn should_match_known_account_only() {
        let fixture = Fixture::parse(SAMPLE).unwrap();
        assert!(fixture.accepts("demo", "demo"));
        assert!(!fixture.accepts("demo", "wrong"));
        assert!(!fixture.accepts("other", "demo"));
    }

    #[test]
    fn should_reject_malformed_time() {
        let content = r#"
            [[lessons]]
            weekday = "tue"
            start = "8h"
            end = "09:00"
        "#;
        let err = Fixture::parse(content).unwrap_err();
        assert!(matches!(err, FixtureError::InvalidTime { index: 0, .. }));
    }

    #[test]
    fn should_reject_lesson_ending_before_start() {
        let content = r#"
            [[lessons]]
            weekday = "tue"
            start = "10:00"
            end = "09:00"
        "#;
        let err = Fixture::parse(content).unwrap_err();
        assert!(matches!(err, FixtureError::EndsBeforeStart { index: 0 }));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let err = Fixture::parse("invalid {{{").unwrap_err();
        assert!(matches!(err, FixtureError::Parse(_)));
    }

    #[test]
    fn should_load_fixture_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let fixture = Fixture::from_path(&path).unwrap();
        assert_eq!(fixture.accounts[0].username, "demo");
    }

    #[test]
    fn should_report_io_error_for_missing_file() {
        let err = Fixture::from_path("does-not-exist.toml").unwrap_err();
        assert!(matches!(err, FixtureError::Io(_)));
    }
}
