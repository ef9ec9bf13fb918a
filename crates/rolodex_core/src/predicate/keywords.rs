//! Keyword-substring person predicates.
//!
//! # Responsibility
//! - Test a person attribute against an ordered keyword list.
//! - Provide the filter value installed on the model's person view.
//!
//! # Invariants
//! - Matching is literal, case-insensitive substring containment.
//! - A person matches when ANY keyword matches; an empty list matches nobody.
//! - Keyword order affects equality only, never the match outcome.

use crate::model::person::Person;
use std::fmt::{Display, Formatter};

/// Pure boolean test against one person.
pub trait PersonPredicate {
    fn test(&self, person: &Person) -> bool;
}

/// Person attribute a keyword predicate reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonAttribute {
    Name,
    Phone,
    Email,
    Address,
    /// Matches against every tag name of the person.
    Tag,
}

impl PersonAttribute {
    /// Stable lowercase label used in logs and structural display.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::Tag => "tag",
        }
    }
}

/// Matches persons whose attribute contains any keyword as a substring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordsPredicate {
    attribute: PersonAttribute,
    keywords: Vec<String>,
}

impl KeywordsPredicate {
    pub fn new(attribute: PersonAttribute, keywords: Vec<String>) -> Self {
        Self {
            attribute,
            keywords,
        }
    }

    pub fn name(keywords: Vec<String>) -> Self {
        Self::new(PersonAttribute::Name, keywords)
    }

    pub fn phone(keywords: Vec<String>) -> Self {
        Self::new(PersonAttribute::Phone, keywords)
    }

    pub fn email(keywords: Vec<String>) -> Self {
        Self::new(PersonAttribute::Email, keywords)
    }

    pub fn address(keywords: Vec<String>) -> Self {
        Self::new(PersonAttribute::Address, keywords)
    }

    pub fn tag(keywords: Vec<String>) -> Self {
        Self::new(PersonAttribute::Tag, keywords)
    }

    pub fn attribute(&self) -> PersonAttribute {
        self.attribute
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    fn matches_value(&self, value: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| contains_ignore_case(value, keyword))
    }
}

impl PersonPredicate for KeywordsPredicate {
    fn test(&self, person: &Person) -> bool {
        match self.attribute {
            PersonAttribute::Name => self.matches_value(person.name.as_str()),
            PersonAttribute::Phone => self.matches_value(person.phone.as_str()),
            PersonAttribute::Email => self.matches_value(person.email.as_str()),
            PersonAttribute::Address => self.matches_value(person.address.as_str()),
            PersonAttribute::Tag => person.tags.iter().any(|tag| self.matches_value(tag.name())),
        }
    }
}

impl Display for KeywordsPredicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "KeywordsPredicate{{attribute={}, keywords=[{}]}}",
            self.attribute.as_str(),
            self.keywords.join(", ")
        )
    }
}

/// Active filter over the person list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    /// Every person is visible.
    #[default]
    All,
    Keywords(KeywordsPredicate),
}

impl PersonPredicate for PersonFilter {
    fn test(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::Keywords(predicate) => predicate.test(person),
        }
    }
}

impl From<KeywordsPredicate> for PersonFilter {
    fn from(value: KeywordsPredicate) -> Self {
        Self::Keywords(value)
    }
}

fn contains_ignore_case(value: &str, keyword: &str) -> bool {
    value.to_lowercase().contains(&keyword.to_lowercase())
}
