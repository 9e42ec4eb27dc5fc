//! Identity of an authenticated user.

use serde::{Deserialize, Serialize};

use edumanage_core::{ClassSection, UserId};

use crate::UserRole;

/// Role-specific profile data.
///
/// Modeled as a tagged variant rather than optional fields so the
/// role/attribute pairing holds by construction: a student cannot carry
/// assigned classes, a teacher cannot carry an admission number. The `role`
/// tag is what the persisted session record stores; an unknown tag fails
/// deserialization and is absorbed upstream as a malformed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum RoleProfile {
    Student {
        admission_number: String,
        section: ClassSection,
    },
    Teacher {
        assigned_sections: Vec<ClassSection>,
    },
    Administrator,
    HeadOfInstitute,
}

impl RoleProfile {
    pub fn role(&self) -> UserRole {
        match self {
            RoleProfile::Student { .. } => UserRole::Student,
            RoleProfile::Teacher { .. } => UserRole::Teacher,
            RoleProfile::Administrator => UserRole::Administrator,
            RoleProfile::HeadOfInstitute => UserRole::HeadOfInstitute,
        }
    }
}

/// The authenticated principal for the current session.
///
/// # Invariants
/// - The role is immutable for the lifetime of a session (changing roles
///   means a new login and a new `Identity`).
/// - Role-specific attributes live inside [`RoleProfile`] and exist only for
///   the matching role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    /// Login handle (case-sensitive, unique).
    pub handle: String,
    pub display_name: String,
    pub email: Option<String>,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

impl Identity {
    pub fn role(&self) -> UserRole {
        self.profile.role()
    }

    /// Human-readable role label for header/profile display.
    pub fn role_label(&self) -> &'static str {
        self.role().label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn student() -> Identity {
        Identity {
            id: UserId::from_uuid(Uuid::nil()),
            handle: "STU001".to_string(),
            display_name: "John Doe".to_string(),
            email: Some("john.doe@school.edu".to_string()),
            profile: RoleProfile::Student {
                admission_number: "STU001".to_string(),
                section: ClassSection::new("Grade 10-A"),
            },
        }
    }

    #[test]
    fn role_is_derived_from_profile() {
        assert_eq!(student().role(), UserRole::Student);
        assert_eq!(student().role_label(), "Student");
    }

    #[test]
    fn serialized_record_carries_role_tag() {
        let json = serde_json::to_value(student()).unwrap();
        assert_eq!(json["role"], "student");
        assert_eq!(json["section"], "Grade 10-A");
        // Teacher-only attributes must not leak into a student record.
        assert!(json.get("assigned_sections").is_none());
    }

    #[test]
    fn round_trips_through_persisted_form() {
        let original = student();
        let raw = serde_json::to_string(&original).unwrap();
        let restored: Identity = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn record_with_unknown_role_tag_is_rejected() {
        let raw = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "handle": "X001",
            "display_name": "Nobody",
            "email": null,
            "role": "janitor"
        }"#;
        assert!(serde_json::from_str::<Identity>(raw).is_err());
    }
}
