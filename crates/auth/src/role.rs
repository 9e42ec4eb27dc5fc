//! The closed set of roles recognized by the system.

use serde::{Deserialize, Serialize};

/// Role of an authenticated user.
///
/// This is a **closed** set: adding a role is a source change, and every
/// `match` over it is exhaustive, so the navigation policy cannot silently
/// miss a role. Serialized form uses the snake_case tags the persisted
/// session record carries (`student`, `teacher`, `administrator`,
/// `head_of_institute`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Teacher,
    Administrator,
    HeadOfInstitute,
}

impl UserRole {
    /// All recognized roles, in declaration order.
    pub const ALL: [UserRole; 4] = [
        UserRole::Student,
        UserRole::Teacher,
        UserRole::Administrator,
        UserRole::HeadOfInstitute,
    ];

    /// Stable string tag (matches the serialized form).
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Administrator => "administrator",
            UserRole::HeadOfInstitute => "head_of_institute",
        }
    }

    /// Human-readable label for identity display.
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Teacher => "Teacher",
            UserRole::Administrator => "Administrator",
            UserRole::HeadOfInstitute => "Head of Institute",
        }
    }
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_tags_are_snake_case() {
        for role in UserRole::ALL {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn unknown_role_tag_fails_to_deserialize() {
        let result: Result<UserRole, _> = serde_json::from_str("\"janitor\"");
        assert!(result.is_err());
    }
}
