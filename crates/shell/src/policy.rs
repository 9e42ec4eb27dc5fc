//! Role policy: the static role → destinations mapping.
//!
//! Every navigation surface (sidebar, mobile panel) must render from these
//! tables; duplicating them per-component is how the tables drift apart.

use edumanage_auth::UserRole;

/// A navigable unit of content.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Destination {
    /// Stable string key (also the persisted "active view" value).
    pub key: &'static str,
    /// Display label for navigation.
    pub label: &'static str,
}

const STUDENT_DESTINATIONS: &[Destination] = &[
    Destination { key: "attendance", label: "Attendance" },
    Destination { key: "scores", label: "Test Scores" },
    Destination { key: "fees", label: "Fee Status" },
    Destination { key: "gallery", label: "Photo Gallery" },
    Destination { key: "notifications", label: "Notifications" },
];

const TEACHER_DESTINATIONS: &[Destination] = &[
    Destination { key: "upload-attendance", label: "Upload Attendance" },
    Destination { key: "upload-scores", label: "Upload Scores" },
    Destination { key: "my-classes", label: "My Classes" },
];

const ADMINISTRATOR_DESTINATIONS: &[Destination] = &[
    Destination { key: "create-student", label: "Create Student Profile" },
    Destination { key: "create-teacher", label: "Create Teacher Profile" },
    Destination { key: "upload-photos", label: "Upload Event Photos" },
    Destination { key: "upload-circulars", label: "Upload Circulars" },
];

const HEAD_DESTINATIONS: &[Destination] = &[
    Destination { key: "approvals", label: "Pending Approvals" },
    Destination { key: "admin-management", label: "Admin Management" },
    Destination { key: "overview", label: "System Overview" },
];

/// Permitted destinations for a role, in navigation order.
///
/// The order is deliberate (insertion order, not alphabetical): it is the
/// rendered order, and operators control visual priority by editing the
/// tables above.
pub fn destinations_for(role: UserRole) -> &'static [Destination] {
    match role {
        UserRole::Student => STUDENT_DESTINATIONS,
        UserRole::Teacher => TEACHER_DESTINATIONS,
        UserRole::Administrator => ADMINISTRATOR_DESTINATIONS,
        UserRole::HeadOfInstitute => HEAD_DESTINATIONS,
    }
}

/// The destination a fresh session of this role lands on.
pub fn default_destination_for(role: UserRole) -> &'static str {
    match role {
        UserRole::Student => "attendance",
        UserRole::Teacher => "upload-attendance",
        UserRole::Administrator => "create-student",
        UserRole::HeadOfInstitute => "approvals",
    }
}

/// Whether `key` is a member of the role's permitted set.
pub fn is_permitted(role: UserRole, key: &str) -> bool {
    destinations_for(role).iter().any(|d| d.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_destinations_and_a_member_default() {
        for role in UserRole::ALL {
            let destinations = destinations_for(role);
            assert!(!destinations.is_empty(), "{role} has no destinations");

            let default = default_destination_for(role);
            assert!(
                destinations.iter().any(|d| d.key == default),
                "{role} default '{default}' is not in its destination set"
            );
        }
    }

    #[test]
    fn destination_keys_are_unique_per_role() {
        for role in UserRole::ALL {
            let destinations = destinations_for(role);
            for (i, a) in destinations.iter().enumerate() {
                for b in &destinations[i + 1..] {
                    assert_ne!(a.key, b.key, "{role} has duplicate key '{}'", a.key);
                }
            }
        }
    }

    #[test]
    fn student_navigation_order_is_stable() {
        let keys: Vec<_> = destinations_for(UserRole::Student)
            .iter()
            .map(|d| d.key)
            .collect();
        assert_eq!(
            keys,
            ["attendance", "scores", "fees", "gallery", "notifications"]
        );
    }

    #[test]
    fn permission_does_not_cross_roles() {
        assert!(is_permitted(UserRole::Teacher, "upload-scores"));
        assert!(!is_permitted(UserRole::Student, "upload-scores"));
        assert!(!is_permitted(UserRole::HeadOfInstitute, "create-student"));
    }
}
