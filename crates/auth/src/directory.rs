//! Static credential directory.
//!
//! In production this is the seam where a real authentication backend plugs
//! in; the session layer only depends on the single lookup-and-compare
//! operation exposed here.

use std::collections::HashMap;

use thiserror::Error;

use edumanage_core::{ClassSection, DomainError, UserId};
use uuid::Uuid;

use crate::{Identity, RoleProfile};

#[derive(Debug, Clone)]
struct Account {
    secret: String,
    identity: Identity,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("handle '{0}' is already registered")]
    DuplicateHandle(String),

    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// Mapping from login handle to secret and identity.
///
/// Handles are case-sensitive. Secrets are compared verbatim; there is no
/// hashing here because the directory holds demo fixtures only.
#[derive(Debug, Clone, Default)]
pub struct CredentialDirectory {
    accounts: HashMap<String, Account>,
}

impl CredentialDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account under its identity's handle.
    pub fn register(
        &mut self,
        secret: impl Into<String>,
        identity: Identity,
    ) -> Result<(), DirectoryError> {
        if identity.handle.trim().is_empty() {
            return Err(DomainError::validation("login handle cannot be empty").into());
        }
        if self.accounts.contains_key(&identity.handle) {
            return Err(DirectoryError::DuplicateHandle(identity.handle));
        }
        self.accounts.insert(
            identity.handle.clone(),
            Account {
                secret: secret.into(),
                identity,
            },
        );
        Ok(())
    }

    /// Look up `handle` and compare `secret`.
    ///
    /// Returns the identity on a match, `None` otherwise. Callers must not
    /// distinguish "unknown handle" from "wrong secret".
    pub fn verify(&self, handle: &str, secret: &str) -> Option<&Identity> {
        let account = self.accounts.get(handle)?;
        if account.secret == secret {
            Some(&account.identity)
        } else {
            None
        }
    }

    /// The four demo accounts the product ships with.
    pub fn demo() -> Self {
        let mut directory = Self::new();

        let accounts = [
            (
                "student123",
                Identity {
                    id: UserId::from_uuid(demo_uuid(1)),
                    handle: "STU001".to_string(),
                    display_name: "John Doe".to_string(),
                    email: Some("john.doe@school.edu".to_string()),
                    profile: RoleProfile::Student {
                        admission_number: "STU001".to_string(),
                        section: ClassSection::new("Grade 10-A"),
                    },
                },
            ),
            (
                "teacher123",
                Identity {
                    id: UserId::from_uuid(demo_uuid(2)),
                    handle: "TCH001".to_string(),
                    display_name: "Ms. Sarah Wilson".to_string(),
                    email: Some("sarah.wilson@school.edu".to_string()),
                    profile: RoleProfile::Teacher {
                        assigned_sections: vec![
                            ClassSection::new("Grade 10-A"),
                            ClassSection::new("Grade 10-B"),
                        ],
                    },
                },
            ),
            (
                "admin123",
                Identity {
                    id: UserId::from_uuid(demo_uuid(3)),
                    handle: "ADM001".to_string(),
                    display_name: "Mr. David Brown".to_string(),
                    email: Some("david.brown@school.edu".to_string()),
                    profile: RoleProfile::Administrator,
                },
            ),
            (
                "head123",
                Identity {
                    id: UserId::from_uuid(demo_uuid(4)),
                    handle: "HEAD001".to_string(),
                    display_name: "Dr. Emily Johnson".to_string(),
                    email: Some("emily.johnson@school.edu".to_string()),
                    profile: RoleProfile::HeadOfInstitute,
                },
            ),
        ];

        for (secret, identity) in accounts {
            directory
                .register(secret, identity)
                .expect("demo handles are unique");
        }

        directory
    }
}

/// Fixed UUIDs for the demo fixtures so restarts see stable identities.
fn demo_uuid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserRole;

    #[test]
    fn demo_student_credentials_verify() {
        let directory = CredentialDirectory::demo();
        let identity = directory.verify("STU001", "student123").unwrap();
        assert_eq!(identity.role(), UserRole::Student);
        assert_eq!(identity.display_name, "John Doe");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let directory = CredentialDirectory::demo();
        assert!(directory.verify("STU001", "wrong").is_none());
    }

    #[test]
    fn handles_are_case_sensitive() {
        let directory = CredentialDirectory::demo();
        assert!(directory.verify("stu001", "student123").is_none());
    }

    #[test]
    fn unknown_handle_is_rejected() {
        let directory = CredentialDirectory::demo();
        assert!(directory.verify("GHOST", "student123").is_none());
    }

    #[test]
    fn duplicate_handle_is_rejected() {
        let mut directory = CredentialDirectory::demo();
        let identity = Identity {
            id: UserId::new(),
            handle: "STU001".to_string(),
            display_name: "Impostor".to_string(),
            email: None,
            profile: RoleProfile::Administrator,
        };
        let err = directory.register("x", identity).unwrap_err();
        assert!(matches!(err, DirectoryError::DuplicateHandle(_)));
    }

    #[test]
    fn empty_handle_is_rejected() {
        let mut directory = CredentialDirectory::new();
        let identity = Identity {
            id: UserId::new(),
            handle: "  ".to_string(),
            display_name: "Nobody".to_string(),
            email: None,
            profile: RoleProfile::Administrator,
        };
        assert!(directory.register("x", identity).is_err());
    }
}
