//! Event domain model.
//!
//! # Responsibility
//! - Represent a dated event and the contacts attending it.
//! - Keep event creation independent from contact attachment.
//!
//! # Invariants
//! - `name` is non-empty and starts with a non-whitespace character.
//! - `contacts` holds each person ID at most once, in attachment order.
//! - A freshly constructed event has no contacts.

use crate::model::person::PersonId;
use crate::model::tag::Tag;
use crate::model::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

static EVENT_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S.*$").expect("valid event name regex"));

pub const EVENT_NAME_CONSTRAINTS: &str =
    "Event names can take any values, and it should not be blank";
pub const EVENT_CONTACTS_CONSTRAINTS: &str = "Event contacts should not repeat a person";

/// Dated event with optional details and attending contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord")]
pub struct Event {
    name: String,
    /// Unix epoch milliseconds.
    start_epoch_ms: i64,
    location: Option<String>,
    description: Option<String>,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    contacts: Vec<PersonId>,
}

/// Decode-side shape; converted through `Event::new` so invalid rows fail.
///
/// Repeated contact IDs are rejected rather than collapsed.
#[derive(Deserialize)]
struct EventRecord {
    name: String,
    start_epoch_ms: i64,
    location: Option<String>,
    description: Option<String>,
    #[serde(default)]
    tags: BTreeSet<Tag>,
    #[serde(default)]
    contacts: Vec<PersonId>,
}

impl TryFrom<EventRecord> for Event {
    type Error = ValidationError;

    fn try_from(value: EventRecord) -> Result<Self, Self::Error> {
        let mut event = Event::new(
            value.name,
            value.start_epoch_ms,
            value.location,
            value.description,
            value.tags,
        )?;
        for contact in value.contacts {
            if event.has_contact(&contact) {
                return Err(ValidationError::new(
                    "event_contacts",
                    contact,
                    EVENT_CONTACTS_CONSTRAINTS,
                ));
            }
            event.add_contact(contact);
        }
        Ok(event)
    }
}

impl Event {
    /// Creates an event with an empty contact collection.
    ///
    /// Blank `location`/`description` values are stored as `None`.
    pub fn new(
        name: impl Into<String>,
        start_epoch_ms: i64,
        location: Option<String>,
        description: Option<String>,
        tags: BTreeSet<Tag>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if !EVENT_NAME_RE.is_match(&name) {
            return Err(ValidationError::new("event_name", name, EVENT_NAME_CONSTRAINTS));
        }

        Ok(Self {
            name,
            start_epoch_ms,
            location: non_blank(location),
            description: non_blank(description),
            tags,
            contacts: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_epoch_ms(&self) -> i64 {
        self.start_epoch_ms
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn contacts(&self) -> &[PersonId] {
        &self.contacts
    }

    pub fn has_contact(&self, person_id: &str) -> bool {
        self.contacts.iter().any(|id| id == person_id)
    }

    /// Attaches one contact. Returns `false` when already attached.
    pub fn add_contact(&mut self, person_id: impl Into<PersonId>) -> bool {
        let person_id = person_id.into();
        if self.has_contact(&person_id) {
            return false;
        }
        self.contacts.push(person_id);
        true
    }

    /// Detaches one contact. Returns `false` when it was not attached.
    pub fn remove_contact(&mut self, person_id: &str) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|id| id != person_id);
        self.contacts.len() != before
    }

    /// Same name at the same time is the same event, whatever the details.
    pub fn is_same_event(&self, other: &Event) -> bool {
        self.name == other.name && self.start_epoch_ms == other.start_epoch_ms
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl Display for Event {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}; Start: {}", self.name, self.start_epoch_ms)?;
        if let Some(location) = &self.location {
            write!(f, "; Location: {location}")?;
        }
        if let Some(description) = &self.description {
            write!(f, "; Description: {description}")?;
        }
        if !self.tags.is_empty() {
            f.write_str("; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{tag}")?;
            }
        }
        Ok(())
    }
}
