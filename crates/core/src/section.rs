//! Class section value object.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A class section a student belongs to or a teacher is assigned to
/// (e.g. "Grade 10-A").
///
/// Sections are compared by value; there is no registry of valid sections at
/// this layer — the institute's class list is owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassSection(Cow<'static, str>);

impl ClassSection {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Validating constructor for externally supplied section names.
    pub fn parse(name: impl Into<Cow<'static, str>>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("class section cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ClassSection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_empty_section() {
        assert!(ClassSection::parse("").is_err());
        assert!(ClassSection::parse("   ").is_err());
    }

    #[test]
    fn sections_compare_by_value() {
        assert_eq!(
            ClassSection::new("Grade 10-A"),
            ClassSection::parse("Grade 10-A").unwrap()
        );
    }
}
