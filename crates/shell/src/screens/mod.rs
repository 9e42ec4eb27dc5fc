//! Content descriptors consumed by the dashboard shell.
//!
//! Each role screen is described by plain data: the render layer accepts a
//! descriptor and draws it without reaching back into the session or the
//! policy. All data here is mock/static; a real backend replaces the
//! `mock_*` providers, not the descriptor shapes.

pub mod admin;
pub mod head;
pub mod student;
pub mod teacher;

use edumanage_auth::UserRole;

use crate::policy::default_destination_for;

/// Content for one role × destination pair.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentDescriptor {
    Student(student::StudentScreen),
    Teacher(teacher::TeacherScreen),
    Administrator(admin::AdminScreen),
    HeadOfInstitute(head::HeadScreen),
}

/// Total mapping `role × destination key → content descriptor`.
///
/// A key outside the role's set resolves to the role's default screen: the
/// router already rejects such selections, so this fallback only matters if
/// a caller bypasses it, and a default screen beats a blank one.
pub fn content_for(role: UserRole, key: &str) -> ContentDescriptor {
    let key = if crate::policy::is_permitted(role, key) {
        key
    } else {
        default_destination_for(role)
    };

    match role {
        UserRole::Student => ContentDescriptor::Student(student::screen_for(key)),
        UserRole::Teacher => ContentDescriptor::Teacher(teacher::screen_for(key)),
        UserRole::Administrator => ContentDescriptor::Administrator(admin::screen_for(key)),
        UserRole::HeadOfInstitute => ContentDescriptor::HeadOfInstitute(head::screen_for(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::destinations_for;

    #[test]
    fn every_permitted_destination_has_matching_content() {
        for role in UserRole::ALL {
            for destination in destinations_for(role) {
                let content = content_for(role, destination.key);
                let matches = matches!(
                    (role, &content),
                    (UserRole::Student, ContentDescriptor::Student(_))
                        | (UserRole::Teacher, ContentDescriptor::Teacher(_))
                        | (UserRole::Administrator, ContentDescriptor::Administrator(_))
                        | (UserRole::HeadOfInstitute, ContentDescriptor::HeadOfInstitute(_))
                );
                assert!(matches, "{role} × {} produced wrong variant", destination.key);
            }
        }
    }

    #[test]
    fn unknown_key_falls_back_to_the_role_default() {
        let fallback = content_for(UserRole::Student, "upload-circulars");
        let default = content_for(UserRole::Student, "attendance");
        assert_eq!(fallback, default);
    }
}
