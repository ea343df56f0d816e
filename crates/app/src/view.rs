//! Display records rendered by the dashboard template.
//!
//! These are rebuilt from scratch on every request and never stored.

use askama_escape::{Html, escape};
use chrono::NaiveDate;

use pronote_dashboard_domain::homework::Homework;
use pronote_dashboard_domain::lesson::Lesson;
use pronote_dashboard_domain::time::{DATE_FORMAT, DAY_LABEL_FORMAT, TIME_FORMAT};
use pronote_dashboard_domain::week::Week;

/// Shown when a subject or teacher is missing.
pub const PLACEHOLDER: &str = "—";
/// Shown when a lesson has no classroom.
pub const ROOM_PLACEHOLDER: &str = "-";
/// Accent used when a subject carries no color.
pub const DEFAULT_COLOR: &str = "#7dd3fc";

/// One homework card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkItem {
    pub subject: String,
    /// Already HTML-escaped, with line breaks turned into `<br>`.
    pub description: String,
    pub due_date: String,
    pub teacher: String,
    pub color: Option<String>,
}

impl HomeworkItem {
    #[must_use]
    pub fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_COLOR)
    }
}

impl From<Homework> for HomeworkItem {
    fn from(hw: Homework) -> Self {
        let (subject, color) = match hw.subject {
            Some(subject) => (subject.name, subject.color),
            None => (PLACEHOLDER.to_string(), None),
        };
        Self {
            subject,
            description: render_description(hw.description.as_deref().unwrap_or_default()),
            due_date: hw.date.format(DATE_FORMAT).to_string(),
            teacher: hw.teacher.unwrap_or_else(|| PLACEHOLDER.to_string()),
            color,
        }
    }
}

/// One lesson inside a day column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonSlot {
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    pub teacher: String,
    pub room: String,
    pub color: Option<String>,
}

impl LessonSlot {
    #[must_use]
    pub fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_COLOR)
    }
}

impl From<Lesson> for LessonSlot {
    fn from(lesson: Lesson) -> Self {
        let (subject, color) = match lesson.subject {
            Some(subject) => (subject.name, subject.color),
            None => (PLACEHOLDER.to_string(), None),
        };
        Self {
            subject,
            start_time: lesson.start.format(TIME_FORMAT).to_string(),
            end_time: lesson.end.format(TIME_FORMAT).to_string(),
            teacher: lesson.teacher.unwrap_or_else(|| PLACEHOLDER.to_string()),
            room: lesson
                .classroom
                .unwrap_or_else(|| ROOM_PLACEHOLDER.to_string()),
            color,
        }
    }
}

/// A day column of the timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub label: String,
    pub lessons: Vec<LessonSlot>,
}

/// Everything the dashboard template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    /// Date anchoring the timetable header.
    pub week_start: String,
    pub homework: Vec<HomeworkItem>,
    /// Always seven entries, Monday first.
    pub days: Vec<DaySchedule>,
}

impl Dashboard {
    /// Empty shell for the landing page, anchored on `today`.
    #[must_use]
    pub fn empty(today: NaiveDate) -> Self {
        let days = Week::containing(today)
            .days()
            .map(|day| DaySchedule {
                label: day.format(DAY_LABEL_FORMAT).to_string(),
                lessons: Vec::new(),
            })
            .collect();
        Self {
            week_start: today.format(DATE_FORMAT).to_string(),
            homework: Vec::new(),
            days,
        }
    }

    /// Shape collaborator records for display.
    #[must_use]
    pub fn build(week: Week, homework: Vec<Homework>, lessons: Vec<Lesson>) -> Self {
        let days = week
            .days()
            .zip(week.partition(lessons))
            .map(|(day, lessons)| DaySchedule {
                label: day.format(DAY_LABEL_FORMAT).to_string(),
                lessons: lessons.into_iter().map(LessonSlot::from).collect(),
            })
            .collect();
        Self {
            week_start: week.start().format(DATE_FORMAT).to_string(),
            homework: homework.into_iter().map(HomeworkItem::from).collect(),
            days,
        }
    }
}

fn render_description(raw: &str) -> String {
    escape(raw, Html).to_string().replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use pronote_dashboard_domain::subject::Subject;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn lesson(day: NaiveDate, start: (u32, u32), end: (u32, u32)) -> Lesson {
        Lesson {
            subject: Some(Subject::new("Physique").with_color("#22c55e")),
            start: day.and_time(NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap()),
            end: day.and_time(NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap()),
            teacher: Some("Mme Curie".into()),
            classroom: Some("Labo 2".into()),
        }
    }

    #[test]
    fn should_escape_description_and_break_lines() {
        let hw = Homework {
            subject: Some(Subject::new("Français")),
            description: Some("Lire <b>Candide\nchapitres 1 & 2".into()),
            date: date(2026, 10, 20),
            teacher: Some("M. Hugo".into()),
        };

        let item = HomeworkItem::from(hw);
        assert_eq!(
            item.description,
            "Lire &lt;b&gt;Candide<br>chapitres 1 &amp; 2"
        );
        assert_eq!(item.due_date, "20 Oct 2026");
        assert_eq!(item.subject, "Français");
        assert_eq!(item.teacher, "M. Hugo");
    }

    #[test]
    fn should_default_missing_homework_fields() {
        let hw = Homework {
            subject: None,
            description: None,
            date: date(2026, 10, 20),
            teacher: None,
        };

        let item = HomeworkItem::from(hw);
        assert_eq!(item.subject, PLACEHOLDER);
        assert_eq!(item.teacher, PLACEHOLDER);
        assert_eq!(item.description, "");
        assert!(item.color.is_none());
        assert_eq!(item.color_or_default(), DEFAULT_COLOR);
    }

    #[test]
    fn should_format_lesson_times_and_keep_color() {
        let slot = LessonSlot::from(lesson(date(2026, 10, 12), (8, 5), (9, 0)));
        assert_eq!(slot.start_time, "08:05");
        assert_eq!(slot.end_time, "09:00");
        assert_eq!(slot.room, "Labo 2");
        assert_eq!(slot.color_or_default(), "#22c55e");
    }

    #[test]
    fn should_default_missing_lesson_fields() {
        let mut raw = lesson(date(2026, 10, 12), (8, 0), (9, 0));
        raw.subject = None;
        raw.teacher = None;
        raw.classroom = None;

        let slot = LessonSlot::from(raw);
        assert_eq!(slot.subject, PLACEHOLDER);
        assert_eq!(slot.teacher, PLACEHOLDER);
        assert_eq!(slot.room, ROOM_PLACEHOLDER);
    }

    #[test]
    fn should_render_seven_empty_days_for_landing_page() {
        let dashboard = Dashboard::empty(date(2026, 10, 15));
        assert!(dashboard.homework.is_empty());
        assert_eq!(dashboard.days.len(), 7);
        assert!(dashboard.days.iter().all(|day| day.lessons.is_empty()));
        assert_eq!(dashboard.days[0].label, "Mon 12");
        assert_eq!(dashboard.days[6].label, "Sun 18");
        assert_eq!(dashboard.week_start, "15 Oct 2026");
    }

    #[test]
    fn should_keep_empty_days_when_building_week() {
        let week = Week::containing(date(2026, 10, 15));
        let lessons = vec![lesson(date(2026, 10, 14), (10, 0), (11, 0))];

        let dashboard = Dashboard::build(week, vec![], lessons);
        assert_eq!(dashboard.days.len(), 7);
        assert_eq!(dashboard.week_start, "12 Oct 2026");
        assert_eq!(dashboard.days[2].label, "Wed 14");
        assert_eq!(dashboard.days[2].lessons.len(), 1);
        let empty_days = dashboard.days.iter().filter(|d| d.lessons.is_empty()).count();
        assert_eq!(empty_days, 6);
    }
}
