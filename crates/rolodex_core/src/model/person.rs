//! Person domain model.
//!
//! # Responsibility
//! - Define the contact record and its validated field values.
//! - Provide the weaker identity check used for duplicate detection.
//!
//! # Invariants
//! - `id` is stable, non-blank and never reused for another person.
//! - Every field value passed its constraint check at construction or decode.
//! - Tags are held by value; no caller can mutate them through aliasing.

use crate::model::tag::Tag;
use crate::model::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable opaque identifier of a person.
///
/// Relationships and events refer to persons only through this value.
pub type PersonId = String;

const ALNUM: &str = r"[\p{Alphabetic}\p{Nd}]";

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{Alphabetic}\p{Nd}][\p{Alphabetic}\p{Nd} ]*$").expect("valid name regex")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let local = format!(r"{ALNUM}([{ALNUM}+_.\-]*{ALNUM})?");
    let label = format!(r"{ALNUM}([\p{{Alphabetic}}\p{{Nd}}\-]*{ALNUM})?");
    let last = format!(r"{ALNUM}[\p{{Alphabetic}}\p{{Nd}}\-]*{ALNUM}");
    Regex::new(&format!(r"^{local}@({label}\.)*{last}$")).expect("valid email regex")
});
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S.*$").expect("valid address regex"));

pub const NAME_CONSTRAINTS: &str =
    "Names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers should only contain numbers, and it should be at least 3 digits long";
pub const EMAIL_CONSTRAINTS: &str = "Emails should be of the format local-part@domain; \
     the local-part holds alphanumerics and + _ . - without starting or ending with them, \
     and the domain is made of alphanumeric labels separated by periods";
pub const ADDRESS_CONSTRAINTS: &str = "Addresses can take any values, and it should not be blank";
pub const PERSON_ID_CONSTRAINTS: &str = "Person IDs should not be blank";

macro_rules! validated_field {
    ($(#[$meta:meta])* $name:ident, $field:literal, $re:ident, $constraints:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if !Self::is_valid(&value) {
                    return Err(ValidationError::new($field, value, $constraints));
                }
                Ok(Self(value))
            }

            pub fn is_valid(value: &str) -> bool {
                $re.is_match(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

validated_field!(
    /// Full display name of a person.
    Name,
    "name",
    NAME_RE,
    NAME_CONSTRAINTS
);
validated_field!(
    /// Digits-only phone number.
    Phone,
    "phone",
    PHONE_RE,
    PHONE_CONSTRAINTS
);
validated_field!(Email, "email", EMAIL_RE, EMAIL_CONSTRAINTS);
validated_field!(
    /// Free-form postal address.
    Address,
    "address",
    ADDRESS_RE,
    ADDRESS_CONSTRAINTS
);

/// Contact record stored in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord")]
pub struct Person {
    /// Stable identifier referenced by relationships and event contacts.
    pub id: PersonId,
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

/// Decode-side shape; converted through `Person::with_id` so blank IDs fail.
#[derive(Deserialize)]
struct PersonRecord {
    id: PersonId,
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl TryFrom<PersonRecord> for Person {
    type Error = ValidationError;

    fn try_from(value: PersonRecord) -> Result<Self, Self::Error> {
        Person::with_id(
            value.id,
            value.name,
            value.phone,
            value.email,
            value.address,
            value.tags,
        )
    }
}

impl Person {
    /// Creates a person with a freshly generated stable ID.
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            phone,
            email,
            address,
            tags,
        }
    }

    /// Creates a person with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: impl Into<PersonId>,
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::new("person_id", id, PERSON_ID_CONSTRAINTS));
        }
        Ok(Self {
            id,
            name,
            phone,
            email,
            address,
            tags,
        })
    }

    /// Returns true when both records describe the same contact.
    ///
    /// Weaker than `==`: only identity (ID or name) is compared.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.id == other.id || self.name == other.name
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Address, Email, Name, Person, Phone, PERSON_ID_CONSTRAINTS};
    use std::collections::BTreeSet;

    #[test]
    fn with_id_rejects_blank_id() {
        let err = Person::with_id(
            "   ",
            Name::new("Alex Yeoh").unwrap(),
            Phone::new("87438807").unwrap(),
            Email::new("alexyeoh@example.com").unwrap(),
            Address::new("Blk 30 Geylang Street 29").unwrap(),
            BTreeSet::new(),
        )
        .unwrap_err();
        assert_eq!(err.field, "person_id");
        assert_eq!(err.constraint, PERSON_ID_CONSTRAINTS);
    }

    #[test]
    fn decode_rejects_blank_id() {
        let json = serde_json::json!({
            "id": "   ",
            "name": "Alex Yeoh",
            "phone": "87438807",
            "email": "alexyeoh@example.com",
            "address": "Blk 30 Geylang Street 29"
        });
        let err = serde_json::from_value::<Person>(json).unwrap_err();
        assert!(err.to_string().contains(PERSON_ID_CONSTRAINTS));
    }

    #[test]
    fn name_rejects_blank_and_symbols() {
        assert!(Name::new("Alex Yeoh").is_ok());
        assert!(Name::new("").is_err());
        assert!(Name::new(" leading").is_err());
        assert!(Name::new("peter*").is_err());
    }

    #[test]
    fn phone_requires_three_digits() {
        assert!(Phone::new("911").is_ok());
        assert!(Phone::new("91").is_err());
        assert!(Phone::new("9011p041").is_err());
    }

    #[test]
    fn email_accepts_common_shapes() {
        assert!(Email::new("alexyeoh@example.com").is_ok());
        assert!(Email::new("a+b_c.d-e@sub-domain.example.org").is_ok());
        assert!(Email::new("peterjack@example").is_ok());
    }

    #[test]
    fn email_rejects_malformed_values() {
        assert!(Email::new("peterjack").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("-peter@example.com").is_err());
        assert!(Email::new("peter@example.c").is_err());
        assert!(Email::new("peter@-example.com").is_err());
    }

    #[test]
    fn address_must_start_with_non_whitespace() {
        assert!(Address::new("Blk 456, Den Road, #01-355").is_ok());
        assert!(Address::new("-").is_ok());
        assert!(Address::new(" ").is_err());
        assert!(Address::new("").is_err());
    }
}
