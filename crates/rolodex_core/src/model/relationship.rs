//! Relationship domain model.
//!
//! # Responsibility
//! - Represent a typed, named edge between two persons.
//! - Resolve the relationship name as seen from either endpoint.
//! - Define direction-aware identity, equality and hashing.
//!
//! # Invariants
//! - `forward_name` and `reverse_name` are non-empty and start with a
//!   non-whitespace character.
//! - Two relationships are the same when they connect the same unordered pair
//!   and their names match in the same or in the fully swapped orientation.
//! - Equal relationships hash identically regardless of construction order.
//! - Values are immutable; tag edits return new values.

use crate::model::person::PersonId;
use crate::model::tag::Tag;
use crate::model::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

// Single-line names only, including `\r` and Unicode line separators.
static RELATIONSHIP_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\S[^\r\n\x{85}\x{2028}\x{2029}]*$").expect("valid relationship name regex")
});

pub const RELATIONSHIP_NAME_CONSTRAINTS: &str =
    "Relationship names can take any values, should not be blank, \
     and must start with a non-whitespace character";

/// Raised when a user ID is resolved against a relationship it is not part of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument {
    pub user_id: PersonId,
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "User ID does not match either end of the relationship: {}",
            self.user_id
        )
    }
}

impl Error for InvalidArgument {}

/// Named, tagged edge between two persons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RelationshipRecord", into = "RelationshipRecord")]
pub struct Relationship {
    first_user_id: PersonId,
    second_user_id: PersonId,
    forward_name: String,
    reverse_name: String,
    tags: BTreeSet<Tag>,
}

/// Plain storage shape of a relationship.
///
/// Decoding goes through `Relationship::new`, so persisted rows with invalid
/// names are rejected instead of masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    pub first_user_id: PersonId,
    pub second_user_id: PersonId,
    pub forward_name: String,
    pub reverse_name: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Relationship {
    /// Creates a relationship between `first_user_id` and `second_user_id`.
    ///
    /// `forward_name` is the name seen from the first user looking at the
    /// second; `reverse_name` is the opposite direction.
    ///
    /// # Errors
    /// - Returns `ValidationError` when either name is blank or starts with
    ///   whitespace.
    pub fn new(
        first_user_id: impl Into<PersonId>,
        second_user_id: impl Into<PersonId>,
        forward_name: impl Into<String>,
        reverse_name: impl Into<String>,
        tags: BTreeSet<Tag>,
    ) -> Result<Self, ValidationError> {
        let forward_name = forward_name.into();
        let reverse_name = reverse_name.into();
        validate_name(&forward_name)?;
        validate_name(&reverse_name)?;

        Ok(Self {
            first_user_id: first_user_id.into(),
            second_user_id: second_user_id.into(),
            forward_name,
            reverse_name,
            tags,
        })
    }

    pub fn is_valid_name(value: &str) -> bool {
        RELATIONSHIP_NAME_RE.is_match(value)
    }

    pub fn first_user_id(&self) -> &str {
        &self.first_user_id
    }

    pub fn second_user_id(&self) -> &str {
        &self.second_user_id
    }

    pub fn forward_name(&self) -> &str {
        &self.forward_name
    }

    pub fn reverse_name(&self) -> &str {
        &self.reverse_name
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns the relationship name as seen by `user_id`.
    ///
    /// # Errors
    /// - Returns `InvalidArgument` when `user_id` is neither endpoint.
    pub fn name_from_perspective(&self, user_id: &str) -> Result<&str, InvalidArgument> {
        if user_id == self.first_user_id {
            Ok(&self.forward_name)
        } else if user_id == self.second_user_id {
            Ok(&self.reverse_name)
        } else {
            Err(InvalidArgument {
                user_id: user_id.to_string(),
            })
        }
    }

    /// Returns the endpoint opposite to `user_id`, if `user_id` is an endpoint.
    pub fn other_user_id(&self, user_id: &str) -> Option<&str> {
        if user_id == self.first_user_id {
            Some(&self.second_user_id)
        } else if user_id == self.second_user_id {
            Some(&self.first_user_id)
        } else {
            None
        }
    }

    pub fn involves_user(&self, user_id: &str) -> bool {
        self.first_user_id == user_id || self.second_user_id == user_id
    }

    /// Lookup check: does this relationship carry `name` between the two users?
    ///
    /// The user pair is compared as a set and `name` may be either the forward
    /// or the reverse name, independent of the order the IDs were given in.
    pub fn is_same_relationship_between(&self, user_id1: &str, user_id2: &str, name: &str) -> bool {
        let users_match = (self.first_user_id == user_id1 && self.second_user_id == user_id2)
            || (self.first_user_id == user_id2 && self.second_user_id == user_id1);
        if !users_match {
            return false;
        }

        self.forward_name == name || self.reverse_name == name
    }

    /// Identity check ignoring tags.
    ///
    /// Matches when endpoints and names agree in the same orientation, or
    /// when both IDs and both names are swapped together. Swapping only the
    /// IDs is a different relationship.
    pub fn is_same_relationship(&self, other: &Relationship) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        let matches_forward_direction = self.first_user_id == other.first_user_id
            && self.second_user_id == other.second_user_id
            && self.forward_name == other.forward_name
            && self.reverse_name == other.reverse_name;

        let matches_reverse_direction = self.first_user_id == other.second_user_id
            && self.second_user_id == other.first_user_id
            && self.forward_name == other.reverse_name
            && self.reverse_name == other.forward_name;

        matches_forward_direction || matches_reverse_direction
    }

    /// Returns a copy with `tag` added.
    pub fn with_added_tag(&self, tag: Tag) -> Self {
        let mut next = self.clone();
        next.tags.insert(tag);
        next
    }

    /// Returns a copy without `tag`. Removing an absent tag is a no-op.
    pub fn with_removed_tag(&self, tag: &Tag) -> Self {
        let mut next = self.clone();
        next.tags.remove(tag);
        next
    }

    /// Endpoints and names in canonical orientation: smaller ID first.
    ///
    /// A self-relationship has no direction to anchor on, so its names are
    /// ordered instead.
    fn canonical_parts(&self) -> (&str, &str, &str, &str) {
        let (first, second) = (self.first_user_id.as_str(), self.second_user_id.as_str());
        let (forward, reverse) = (self.forward_name.as_str(), self.reverse_name.as_str());
        if first < second {
            (first, second, forward, reverse)
        } else if second < first {
            (second, first, reverse, forward)
        } else {
            (first, second, forward.min(reverse), forward.max(reverse))
        }
    }
}

fn validate_name(value: &str) -> Result<(), ValidationError> {
    if !Relationship::is_valid_name(value) {
        return Err(ValidationError::new(
            "relationship_name",
            value,
            RELATIONSHIP_NAME_CONSTRAINTS,
        ));
    }
    Ok(())
}

impl PartialEq for Relationship {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_relationship(other) && self.tags == other.tags
    }
}

impl Eq for Relationship {}

impl Hash for Relationship {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_parts().hash(state);
        self.tags.hash(state);
    }
}

impl Display for Relationship {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Forward: {}, Reverse: {}] Between: {} and {}",
            self.forward_name, self.reverse_name, self.first_user_id, self.second_user_id
        )?;
        if !self.tags.is_empty() {
            f.write_str(" Tags: ")?;
            for tag in &self.tags {
                write!(f, "{tag}")?;
            }
        }
        Ok(())
    }
}

impl TryFrom<RelationshipRecord> for Relationship {
    type Error = ValidationError;

    fn try_from(value: RelationshipRecord) -> Result<Self, Self::Error> {
        Self::new(
            value.first_user_id,
            value.second_user_id,
            value.forward_name,
            value.reverse_name,
            value.tags.into_iter().collect(),
        )
    }
}

impl From<Relationship> for RelationshipRecord {
    fn from(value: Relationship) -> Self {
        Self {
            first_user_id: value.first_user_id,
            second_user_id: value.second_user_id,
            forward_name: value.forward_name,
            reverse_name: value.reverse_name,
            tags: value.tags.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Relationship;
    use std::collections::BTreeSet;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(value: &Relationship) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn names_must_start_with_non_whitespace() {
        assert!(Relationship::is_valid_name("friend"));
        assert!(Relationship::is_valid_name("best friend "));
        assert!(!Relationship::is_valid_name(""));
        assert!(!Relationship::is_valid_name(" friend"));
        assert!(!Relationship::is_valid_name("\tfriend"));
    }

    #[test]
    fn names_reject_line_breaks() {
        assert!(!Relationship::is_valid_name("friend\rly"));
        assert!(!Relationship::is_valid_name("friend\nly"));
        assert!(!Relationship::is_valid_name("friend\u{2028}ly"));
        assert!(Relationship::new("a", "b", "friend\rly", "friend", BTreeSet::new()).is_err());
    }

    #[test]
    fn self_relationship_hash_ignores_name_order() {
        let left = Relationship::new("a", "a", "mentor", "mentee", BTreeSet::new()).unwrap();
        let right = Relationship::new("a", "a", "mentee", "mentor", BTreeSet::new()).unwrap();
        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
    }

    #[test]
    fn canonical_parts_put_smaller_id_first() {
        let relationship = Relationship::new("zed", "amy", "boss", "employee", BTreeSet::new())
            .unwrap();
        assert_eq!(
            relationship.canonical_parts(),
            ("amy", "zed", "employee", "boss")
        );
    }
}
