//! Head-of-institute screens: approvals, admin management, system overview.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use edumanage_core::ClassSection;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid mock date")
}

/// A profile-creation request awaiting the head's decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    pub name: String,
    pub requested_by: String,
    pub date: NaiveDate,
    pub subject: ApprovalSubject,
}

/// What the request is about; carries the role-specific request details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ApprovalSubject {
    Student {
        admission_number: String,
        section: ClassSection,
    },
    Teacher {
        subjects: Vec<String>,
        sections: Vec<ClassSection>,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminStatus {
    Active,
    Inactive,
}

/// An administrator account listed on the management screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminAccount {
    pub name: String,
    pub email: String,
    pub handle: String,
    pub status: AdminStatus,
    pub created: NaiveDate,
}

/// Aggregate counters for the overview dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStats {
    pub total_students: u32,
    pub total_teachers: u32,
    pub total_admins: u32,
    pub total_classes: u32,
    pub pending_approvals: u32,
    pub monthly_logins: u32,
}

/// One entry in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub action: String,
    pub user: String,
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemOverview {
    pub stats: SystemStats,
    pub recent_activity: Vec<ActivityEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum HeadScreen {
    Approvals(Vec<ApprovalRequest>),
    AdminManagement(Vec<AdminAccount>),
    Overview(SystemOverview),
}

pub fn screen_for(key: &str) -> HeadScreen {
    match key {
        "admin-management" => HeadScreen::AdminManagement(mock_admins()),
        "overview" => HeadScreen::Overview(mock_overview()),
        // "approvals" and anything unexpected.
        _ => HeadScreen::Approvals(mock_approvals()),
    }
}

pub fn mock_approvals() -> Vec<ApprovalRequest> {
    vec![
        ApprovalRequest {
            name: "Alex Johnson".to_string(),
            requested_by: "Admin001".to_string(),
            date: date(2024, 1, 15),
            subject: ApprovalSubject::Student {
                admission_number: "STU025".to_string(),
                section: ClassSection::new("Grade 10-A"),
            },
        },
        ApprovalRequest {
            name: "Ms. Rebecca Smith".to_string(),
            requested_by: "Admin001".to_string(),
            date: date(2024, 1, 14),
            subject: ApprovalSubject::Teacher {
                subjects: vec!["Mathematics".to_string(), "Physics".to_string()],
                sections: vec![
                    ClassSection::new("Grade 11-A"),
                    ClassSection::new("Grade 11-B"),
                ],
            },
        },
        ApprovalRequest {
            name: "Maria Garcia".to_string(),
            requested_by: "Admin002".to_string(),
            date: date(2024, 1, 13),
            subject: ApprovalSubject::Student {
                admission_number: "STU026".to_string(),
                section: ClassSection::new("Grade 9-B"),
            },
        },
    ]
}

pub fn mock_admins() -> Vec<AdminAccount> {
    vec![
        AdminAccount {
            name: "Mr. David Brown".to_string(),
            email: "david.brown@school.edu".to_string(),
            handle: "ADM001".to_string(),
            status: AdminStatus::Active,
            created: date(2023, 9, 1),
        },
        AdminAccount {
            name: "Ms. Jennifer Wilson".to_string(),
            email: "jennifer.wilson@school.edu".to_string(),
            handle: "ADM002".to_string(),
            status: AdminStatus::Active,
            created: date(2023, 10, 15),
        },
    ]
}

pub fn mock_overview() -> SystemOverview {
    let approvals = mock_approvals();
    let activity = |action: &str, user: &str, when: &str| ActivityEntry {
        action: action.to_string(),
        user: user.to_string(),
        when: when.to_string(),
    };
    SystemOverview {
        stats: SystemStats {
            total_students: 1250,
            total_teachers: 85,
            total_admins: 2,
            total_classes: 24,
            pending_approvals: approvals.len() as u32,
            monthly_logins: 2840,
        },
        recent_activity: vec![
            activity("Student profile created", "Admin001", "2 hours ago"),
            activity("Teacher attendance uploaded", "Ms. Sarah Wilson", "4 hours ago"),
            activity("Circular distributed", "Admin002", "1 day ago"),
            activity("Exam scores uploaded", "Mr. John Smith", "2 days ago"),
        ],
    }
}
