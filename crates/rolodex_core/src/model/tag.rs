//! Tag value type.
//!
//! # Responsibility
//! - Represent one validated label attached to persons, relationships and events.
//!
//! # Invariants
//! - Tag names are non-empty and alphanumeric.
//! - Tags are immutable once constructed.

use crate::model::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static TAG_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Alphabetic}\p{Nd}]+$").expect("valid tag regex"));

pub const TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";

/// Label attached to contacts, relationships and events.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    name: String,
}

impl Tag {
    /// Creates a tag after validating its name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !Self::is_valid_name(&name) {
            return Err(ValidationError::new("tag", name, TAG_CONSTRAINTS));
        }
        Ok(Self { name })
    }

    pub fn is_valid_name(value: &str) -> bool {
        TAG_NAME_RE.is_match(value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

impl TryFrom<String> for Tag {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.name
    }
}

#[cfg(test)]
mod tests {
    use super::Tag;

    #[test]
    fn accepts_alphanumeric_names() {
        assert!(Tag::new("friends").is_ok());
        assert!(Tag::new("cs2103").is_ok());
    }

    #[test]
    fn rejects_blank_and_symbol_names() {
        assert!(Tag::new("").is_err());
        assert!(Tag::new("best friend").is_err());
        assert!(Tag::new("#vip").is_err());
    }

    #[test]
    fn displays_in_brackets() {
        assert_eq!(Tag::new("family").unwrap().to_string(), "[family]");
    }
}
