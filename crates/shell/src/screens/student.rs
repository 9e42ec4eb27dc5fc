//! Student screens: read-only views over the student's own records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixture date helper; all mock data uses literal, known-valid dates.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid mock date")
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub subject: String,
    pub status: AttendanceStatus,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamScore {
    pub exam: String,
    pub subject: String,
    pub score: u32,
    pub max_score: u32,
    pub grade: String,
    pub date: NaiveDate,
}

impl ExamScore {
    pub fn percentage(&self) -> f64 {
        if self.max_score == 0 {
            return 0.0;
        }
        (self.score as f64 / self.max_score as f64) * 100.0
    }
}

/// Filter options offered on the scores screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreFilters {
    pub academic_years: Vec<String>,
    pub sections: Vec<String>,
    pub exam_types: Vec<String>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeeStatus {
    Paid,
    Due,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeRecord {
    pub description: String,
    pub amount: u32,
    pub status: FeeStatus,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryAlbum {
    pub title: String,
    pub event_date: NaiveDate,
    pub photo_count: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StudentScreen {
    Attendance(Vec<AttendanceRecord>),
    Scores {
        filters: ScoreFilters,
        results: Vec<ExamScore>,
    },
    Fees(Vec<FeeRecord>),
    Gallery(Vec<GalleryAlbum>),
    Notifications(Vec<Notification>),
}

pub fn screen_for(key: &str) -> StudentScreen {
    match key {
        "scores" => StudentScreen::Scores {
            filters: mock_score_filters(),
            results: mock_scores(),
        },
        "fees" => StudentScreen::Fees(mock_fees()),
        "gallery" => StudentScreen::Gallery(mock_gallery()),
        "notifications" => StudentScreen::Notifications(mock_notifications()),
        // "attendance" and anything unexpected.
        _ => StudentScreen::Attendance(mock_attendance()),
    }
}

pub fn mock_attendance() -> Vec<AttendanceRecord> {
    let record = |y, m, d, subject: &str, status, time: &str| AttendanceRecord {
        date: date(y, m, d),
        subject: subject.to_string(),
        status,
        time: time.to_string(),
    };
    vec![
        record(2024, 3, 15, "Mathematics", AttendanceStatus::Present, "09:00 AM"),
        record(2024, 3, 15, "Physics", AttendanceStatus::Present, "10:30 AM"),
        record(2024, 3, 15, "Chemistry", AttendanceStatus::Absent, "12:00 PM"),
        record(2024, 3, 14, "English", AttendanceStatus::Present, "09:00 AM"),
        record(2024, 3, 14, "History", AttendanceStatus::Present, "11:00 AM"),
    ]
}

pub fn mock_score_filters() -> ScoreFilters {
    ScoreFilters {
        academic_years: vec![
            "2023-2024".to_string(),
            "2022-2023".to_string(),
            "2021-2022".to_string(),
        ],
        sections: vec![
            "Grade 10-A".to_string(),
            "Grade 10-B".to_string(),
            "Grade 9-A".to_string(),
        ],
        exam_types: vec![
            "Mid-term Exam".to_string(),
            "Final Exam".to_string(),
            "Unit Test".to_string(),
            "Quiz".to_string(),
        ],
    }
}

pub fn mock_scores() -> Vec<ExamScore> {
    let score = |exam: &str, subject: &str, score, grade: &str, y, m, d| ExamScore {
        exam: exam.to_string(),
        subject: subject.to_string(),
        score,
        max_score: 100,
        grade: grade.to_string(),
        date: date(y, m, d),
    };
    vec![
        score("Mid-term Exam", "Mathematics", 95, "A+", 2024, 3, 10),
        score("Mid-term Exam", "Physics", 88, "A", 2024, 3, 8),
        score("Mid-term Exam", "Chemistry", 92, "A+", 2024, 3, 6),
        score("Unit Test", "English", 85, "A", 2024, 2, 28),
        score("Unit Test", "History", 90, "A+", 2024, 2, 26),
    ]
}

pub fn mock_fees() -> Vec<FeeRecord> {
    vec![
        FeeRecord {
            description: "Tuition Fee - March 2024".to_string(),
            amount: 1500,
            status: FeeStatus::Paid,
            due_date: date(2024, 3, 1),
            paid_date: Some(date(2024, 2, 28)),
        },
        FeeRecord {
            description: "Library Fee - March 2024".to_string(),
            amount: 50,
            status: FeeStatus::Paid,
            due_date: date(2024, 3, 1),
            paid_date: Some(date(2024, 2, 28)),
        },
        FeeRecord {
            description: "Laboratory Fee - April 2024".to_string(),
            amount: 200,
            status: FeeStatus::Due,
            due_date: date(2024, 4, 1),
            paid_date: None,
        },
        FeeRecord {
            description: "Transportation Fee - April 2024".to_string(),
            amount: 300,
            status: FeeStatus::Due,
            due_date: date(2024, 4, 5),
            paid_date: None,
        },
    ]
}

pub fn mock_gallery() -> Vec<GalleryAlbum> {
    vec![
        GalleryAlbum {
            title: "Annual Sports Day".to_string(),
            event_date: date(2024, 2, 10),
            photo_count: 48,
        },
        GalleryAlbum {
            title: "Science Exhibition".to_string(),
            event_date: date(2024, 1, 22),
            photo_count: 32,
        },
        GalleryAlbum {
            title: "Independence Day Celebration".to_string(),
            event_date: date(2023, 8, 15),
            photo_count: 26,
        },
    ]
}

pub fn mock_notifications() -> Vec<Notification> {
    vec![
        Notification {
            title: "Fee Payment Confirmation".to_string(),
            message: "Your March 2024 tuition fee payment has been confirmed.".to_string(),
            kind: NotificationKind::Success,
            date: date(2024, 3, 1),
        },
        Notification {
            title: "Absence Notification".to_string(),
            message: "You were marked absent in Chemistry class on March 15, 2024.".to_string(),
            kind: NotificationKind::Warning,
            date: date(2024, 3, 15),
        },
        Notification {
            title: "Exam Reminder".to_string(),
            message: "Mid-term exams starting April 15, 2024. Fee payment required before April 13."
                .to_string(),
            kind: NotificationKind::Info,
            date: date(2024, 3, 10),
        },
    ]
}
