//! # pronote-dashboard-adapter-fixture
//!
//! Fixture collaborator that stands in for a live Pronote instance, for
//! demonstration and end-to-end testing.
//!
//! ## Behaviour
//!
//! | Operation | Result |
//! |-----------|--------|
//! | `connect` | Logged in iff the credentials match an `[[accounts]]` entry |
//! | `homework` | `[[homework]]` entries dated `session day + due_in_days`, within the range |
//! | `lessons` | `[[lessons]]` entries repeated on their weekday, within the range |
//!
//! Setting `[simulate] network_error` makes every listing fail.
//!
//! ## Dependency rule
//!
//! Depends on `pronote-dashboard-app` (port traits) and `pronote-dashboard-domain` only.

mod error;
mod fixture;

use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate};

use pronote_dashboard_app::ports::{PronoteConnector, PronoteSession};
use pronote_dashboard_domain::credentials::LoginRequest;
use pronote_dashboard_domain::error::ClientError;
use pronote_dashboard_domain::homework::Homework;
use pronote_dashboard_domain::lesson::Lesson;

pub use error::FixtureError;
pub use fixture::{Account, Fixture, HomeworkEntry, Simulate, WeeklyLesson};

/// Connector serving a [`Fixture`].
#[derive(Debug, Clone)]
pub struct FixtureConnector {
    fixture: Arc<Fixture>,
    anchor: Option<NaiveDate>,
}

impl FixtureConnector {
    #[must_use]
    pub fn new(fixture: Fixture) -> Self {
        Self {
            fixture: Arc::new(fixture),
            anchor: None,
        }
    }

    /// Date homework offsets count from; defaults to the day each session opens.
    #[must_use]
    pub fn with_anchor(mut self, anchor: NaiveDate) -> Self {
        self.anchor = Some(anchor);
        self
    }
}

impl PronoteConnector for FixtureConnector {
    type Session = FixtureSession;

    async fn connect(&self, request: LoginRequest) -> Result<FixtureSession, ClientError> {
        let logged_in = self.fixture.accepts(
            &request.credentials.username,
            &request.credentials.password,
        );
        tracing::debug!(endpoint = %request.endpoint, logged_in, "fixture session opened");

        Ok(FixtureSession {
            fixture: Arc::clone(&self.fixture),
            anchor: self.anchor.unwrap_or_else(pronote_dashboard_domain::time::today),
            logged_in,
        })
    }
}

/// One fixture session.
#[derive(Debug)]
pub struct FixtureSession {
    fixture: Arc<Fixture>,
    anchor: NaiveDate,
    logged_in: bool,
}

impl FixtureSession {
    fn check_simulated_failure(&self) -> Result<(), ClientError> {
        match &self.fixture.simulate.network_error {
            Some(message) => Err(ClientError::Network(message.clone())),
            None => Ok(()),
        }
    }
}

impl PronoteSession for FixtureSession {
    fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    async fn homework(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Homework>, ClientError> {
        self.check_simulated_failure()?;

        let mut items: Vec<Homework> = self
            .fixture
            .homework
            .iter()
            .filter_map(|entry| {
                let date = self
                    .anchor
                    .checked_add_days(Days::new(u64::from(entry.due_in_days)))?;
                (from..=to).contains(&date).then(|| Homework {
                    subject: fixture::subject(entry.subject.clone(), entry.color.clone()),
                    description: entry.description.clone(),
                    date,
                    teacher: entry.teacher.clone(),
                })
            })
            .collect();
        items.sort_by_key(|hw| hw.date);
        Ok(items)
    }

    async fn lessons(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Lesson>, ClientError> {
        self.check_simulated_failure()?;

        let lessons = from
            .iter_days()
            .take_while(|day| *day <= to)
            .flat_map(|day| {
                self.fixture
                    .lessons
                    .iter()
                    .filter(move |lesson| lesson.weekday == day.weekday())
                    .map(move |lesson| Lesson {
                        subject: lesson.subject.clone(),
                        start: day.and_time(lesson.start),
                        end: day.and_time(lesson.end),
                        teacher: lesson.teacher.clone(),
                        classroom: lesson.room.clone(),
                    })
            })
            .collect();
        Ok(lessons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pronote_dashboard_domain::credentials::Credentials;

    const SAMPLE: &str = r##"
        [[accounts]]
        username = "demo"
        password = "demo"

        [[homework]]
        subject = "Mathématiques"
        color = "#f59e0b"
        due_in_days = 2

        [[homework]]
        subject = "Histoire"
        due_in_days = 30

        [[homework]]
        due_in_days = 0

        [[lessons]]
        weekday = "mon"
        start = "10:00"
        end = "11:00"
        subject = "Anglais"

        [[lessons]]
        weekday = "mon"
        start = "08:00"
        end = "09:00"
        subject = "Mathématiques"
        room = "B12"

        [[lessons]]
        weekday = "fri"
        start = "14:00"
        end = "16:00"
    "##;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(username: &str, password: &str) -> LoginRequest {
        let creds = Credentials::from_form(Some(username.into()), Some(password.into())).unwrap();
        LoginRequest::new("https://demo.index-education.net/pronote/eleve.html", creds)
    }

    fn connector(content: &str) -> FixtureConnector {
        FixtureConnector::new(Fixture::parse(content).unwrap()).with_anchor(date(2026, 10, 14))
    }

    #[tokio::test]
    async fn should_log_in_with_known_account() {
        let session = connector(SAMPLE).connect(request("demo", "demo")).await.unwrap();
        assert!(session.is_logged_in());
    }

    #[tokio::test]
    async fn should_not_log_in_with_wrong_password() {
        let session = connector(SAMPLE).connect(request("demo", "nope")).await.unwrap();
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn should_list_homework_within_range_sorted_by_date() {
        let session = connector(SAMPLE).connect(request("demo", "demo")).await.unwrap();

        let homework = session
            .homework(date(2026, 10, 14), date(2026, 10, 28))
            .await
            .unwrap();

        assert_eq!(homework.len(), 2);
        assert_eq!(homework[0].date, date(2026, 10, 14));
        assert!(homework[0].subject.is_none());
        assert_eq!(homework[1].date, date(2026, 10, 16));
        let subject = homework[1].subject.as_ref().unwrap();
        assert_eq!(subject.name, "Mathématiques");
        assert_eq!(subject.color.as_deref(), Some("#f59e0b"));
    }

    #[tokio::test]
    async fn should_repeat_lessons_on_their_weekday() {
        let session = connector(SAMPLE).connect(request("demo", "demo")).await.unwrap();

        let lessons = session
            .lessons(date(2026, 10, 12), date(2026, 10, 18))
            .await
            .unwrap();

        assert_eq!(lessons.len(), 3);
        assert!(lessons[..2].iter().all(|l| l.day() == date(2026, 10, 12)));
        assert_eq!(lessons[2].day(), date(2026, 10, 16));
        assert_eq!(lessons[1].classroom.as_deref(), Some("B12"));
    }

    #[tokio::test]
    async fn should_return_nothing_for_inverted_range() {
        let session = connector(SAMPLE).connect(request("demo", "demo")).await.unwrap();

        let lessons = session
            .lessons(date(2026, 10, 18), date(2026, 10, 12))
            .await
            .unwrap();
        let homework = session
            .homework(date(2026, 10, 18), date(2026, 10, 12))
            .await
            .unwrap();

        assert!(lessons.is_empty());
        assert!(homework.is_empty());
    }

    #[tokio::test]
    async fn should_fail_listings_when_network_error_is_simulated() {
        let content = r#"
            [[accounts]]
            username = "demo"
            password = "demo"

            [simulate]
            network_error = "connection reset by peer"
        "#;
        let session = connector(content).connect(request("demo", "demo")).await.unwrap();

        let err = session
            .homework(date(2026, 10, 14), date(2026, 10, 28))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ClientError::Network("connection reset by peer".to_string())
        );
    }
}
