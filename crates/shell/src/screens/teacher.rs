//! Teacher screens: attendance and score entry for assigned sections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use edumanage_core::ClassSection;

use super::student::AttendanceStatus;

/// One student row on the attendance sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub name: String,
    pub admission_number: String,
    pub status: AttendanceStatus,
}

/// Daily attendance entry sheet for one of the teacher's sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSheet {
    pub date: NaiveDate,
    /// Sections the teacher may mark attendance for.
    pub sections: Vec<ClassSection>,
    pub entries: Vec<AttendanceEntry>,
}

/// Score entry form: choices for section/subject/student plus grade banding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntryForm {
    pub sections: Vec<ClassSection>,
    pub subjects: Vec<String>,
    pub students_by_section: Vec<(ClassSection, Vec<String>)>,
}

/// Roster overview for one assigned section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRoster {
    pub section: ClassSection,
    pub students: Vec<RosterEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub admission_number: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TeacherScreen {
    UploadAttendance(AttendanceSheet),
    UploadScores(ScoreEntryForm),
    MyClasses(Vec<ClassRoster>),
}

pub fn screen_for(key: &str) -> TeacherScreen {
    match key {
        "upload-scores" => TeacherScreen::UploadScores(mock_score_entry_form()),
        "my-classes" => TeacherScreen::MyClasses(mock_rosters()),
        // "upload-attendance" and anything unexpected.
        _ => TeacherScreen::UploadAttendance(mock_attendance_sheet()),
    }
}

/// Grade band for a mark out of 100.
pub fn grade_for(marks: u32) -> &'static str {
    match marks {
        90.. => "A+",
        80..=89 => "A",
        70..=79 => "B",
        60..=69 => "C",
        _ => "F",
    }
}

fn assigned_sections() -> Vec<ClassSection> {
    vec![
        ClassSection::new("Grade 10-A"),
        ClassSection::new("Grade 10-B"),
    ]
}

fn section_students(section: &ClassSection) -> Vec<&'static str> {
    match section.as_str() {
        "Grade 10-A" => vec!["John Doe", "Emma Wilson", "Michael Brown", "Sarah Davis"],
        "Grade 10-B" => vec!["Alex Johnson", "Maria Garcia", "David Lee", "Jessica Taylor"],
        _ => vec![],
    }
}

pub fn mock_attendance_sheet() -> AttendanceSheet {
    let entry = |name: &str, admission: &str, status| AttendanceEntry {
        name: name.to_string(),
        admission_number: admission.to_string(),
        status,
    };
    AttendanceSheet {
        date: chrono::Utc::now().date_naive(),
        sections: assigned_sections(),
        entries: vec![
            entry("John Doe", "STU001", AttendanceStatus::Present),
            entry("Emma Wilson", "STU002", AttendanceStatus::Present),
            entry("Michael Brown", "STU003", AttendanceStatus::Absent),
            entry("Sarah Davis", "STU004", AttendanceStatus::Present),
        ],
    }
}

pub fn mock_score_entry_form() -> ScoreEntryForm {
    let sections = assigned_sections();
    let students_by_section = sections
        .iter()
        .map(|section| {
            (
                section.clone(),
                section_students(section)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            )
        })
        .collect();

    ScoreEntryForm {
        sections,
        subjects: vec![
            "Mathematics".to_string(),
            "Physics".to_string(),
            "Chemistry".to_string(),
        ],
        students_by_section,
    }
}

pub fn mock_rosters() -> Vec<ClassRoster> {
    assigned_sections()
        .into_iter()
        .map(|section| {
            let students = section_students(&section)
                .into_iter()
                .enumerate()
                .map(|(i, name)| RosterEntry {
                    name: name.to_string(),
                    admission_number: format!("STU{:03}", i + 1),
                })
                .collect();
            ClassRoster { section, students }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_bands_match_the_marking_scheme() {
        assert_eq!(grade_for(100), "A+");
        assert_eq!(grade_for(90), "A+");
        assert_eq!(grade_for(89), "A");
        assert_eq!(grade_for(80), "A");
        assert_eq!(grade_for(79), "B");
        assert_eq!(grade_for(70), "B");
        assert_eq!(grade_for(69), "C");
        assert_eq!(grade_for(60), "C");
        assert_eq!(grade_for(59), "F");
        assert_eq!(grade_for(0), "F");
    }

    #[test]
    fn every_assigned_section_has_a_roster() {
        let rosters = mock_rosters();
        assert_eq!(rosters.len(), 2);
        for roster in rosters {
            assert!(!roster.students.is_empty());
        }
    }

    #[test]
    fn score_form_offers_students_for_each_section() {
        let form = mock_score_entry_form();
        assert_eq!(form.sections.len(), form.students_by_section.len());
        for (_, students) in &form.students_by_section {
            assert!(!students.is_empty());
        }
    }
}
