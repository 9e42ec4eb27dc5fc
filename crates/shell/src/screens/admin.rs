//! Administrator screens: profile creation and upload forms.

use serde::{Deserialize, Serialize};

use edumanage_core::ClassSection;

/// The institute's class list offered in admin forms.
fn all_sections() -> Vec<ClassSection> {
    [
        "Grade 9-A", "Grade 9-B", "Grade 10-A", "Grade 10-B", "Grade 11-A", "Grade 11-B",
        "Grade 12-A", "Grade 12-B",
    ]
    .into_iter()
    .map(ClassSection::new)
    .collect()
}

fn all_subjects() -> Vec<String> {
    [
        "Mathematics", "Physics", "Chemistry", "Biology", "English", "History", "Geography",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

/// New-student admission form: personal, academic and guardian details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfileForm {
    /// Classes the student can be admitted into.
    pub sections: Vec<ClassSection>,
}

/// New-teacher form: profile plus class and subject assignment choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherProfileForm {
    pub sections: Vec<ClassSection>,
    pub subjects: Vec<String>,
}

/// Circular upload form: type and priority choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularUploadForm {
    pub circular_types: Vec<String>,
    pub priorities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminScreen {
    CreateStudent(StudentProfileForm),
    CreateTeacher(TeacherProfileForm),
    /// Event photo upload form; all fields are free-form entry.
    UploadPhotos,
    UploadCirculars(CircularUploadForm),
}

pub fn screen_for(key: &str) -> AdminScreen {
    match key {
        "create-teacher" => AdminScreen::CreateTeacher(TeacherProfileForm {
            sections: all_sections(),
            subjects: all_subjects(),
        }),
        "upload-photos" => AdminScreen::UploadPhotos,
        "upload-circulars" => AdminScreen::UploadCirculars(CircularUploadForm {
            circular_types: vec![
                "Holiday Notice".to_string(),
                "Examination Notice".to_string(),
                "Event Announcement".to_string(),
                "General Notice".to_string(),
            ],
            priorities: vec![
                "High Priority".to_string(),
                "Medium Priority".to_string(),
                "Low Priority".to_string(),
            ],
        }),
        // "create-student" and anything unexpected.
        _ => AdminScreen::CreateStudent(StudentProfileForm {
            sections: all_sections(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_form_offers_all_sections_and_subjects() {
        let AdminScreen::CreateTeacher(form) = screen_for("create-teacher") else {
            panic!("expected teacher form");
        };
        assert_eq!(form.sections.len(), 8);
        assert_eq!(form.subjects.len(), 7);
    }

    #[test]
    fn circular_form_offers_types_and_priorities() {
        let AdminScreen::UploadCirculars(form) = screen_for("upload-circulars") else {
            panic!("expected circular form");
        };
        assert_eq!(form.circular_types.len(), 4);
        assert_eq!(form.priorities.len(), 3);
    }
}
