//! In-memory address book collections.
//!
//! # Responsibility
//! - Hold persons, relationships and events with their uniqueness rules.
//! - Cascade person removal into relationships and event contacts.
//!
//! # Invariants
//! - No two persons satisfy `Person::is_same_person`.
//! - No two relationships satisfy `Relationship::is_same_relationship`.
//! - Relationship endpoints and event contacts always reference stored persons.
//! - No two events satisfy `Event::is_same_event`.

use crate::model::event::Event;
use crate::model::person::{Person, PersonId};
use crate::model::relationship::Relationship;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BookResult<T> = Result<T, BookError>;

/// Uniqueness and lookup failures raised by `AddressBook`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    DuplicatePerson(PersonId),
    PersonNotFound(PersonId),
    SelfRelationship(PersonId),
    DuplicateRelationship,
    RelationshipNotFound,
    DuplicateEvent,
    EventNotFound,
    DuplicateContact(PersonId),
    /// Decoded data breaks a collection invariant.
    InvalidData(String),
}

impl Display for BookError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePerson(_) => write!(f, "This person already exists in the address book"),
            Self::PersonNotFound(id) => write!(f, "No person with ID {id} exists"),
            Self::SelfRelationship(_) => {
                write!(f, "Cannot create a relationship between a person and themselves")
            }
            Self::DuplicateRelationship => write!(f, "This relationship already exists"),
            Self::RelationshipNotFound => write!(f, "Relationship not found"),
            Self::DuplicateEvent => write!(f, "This event already exists in the address book"),
            Self::EventNotFound => write!(f, "The event does not exist in the address book"),
            Self::DuplicateContact(id) => write!(f, "Contact {id} is already attached to the event"),
            Self::InvalidData(message) => write!(f, "invalid address book data: {message}"),
        }
    }
}

impl Error for BookError {}

/// Contacts, relationships and events of one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AddressBookRecord")]
pub struct AddressBook {
    persons: Vec<Person>,
    relationships: Vec<Relationship>,
    events: Vec<Event>,
}

#[derive(Deserialize)]
struct AddressBookRecord {
    #[serde(default)]
    persons: Vec<Person>,
    #[serde(default)]
    relationships: Vec<Relationship>,
    #[serde(default)]
    events: Vec<Event>,
}

impl TryFrom<AddressBookRecord> for AddressBook {
    type Error = BookError;

    fn try_from(value: AddressBookRecord) -> Result<Self, Self::Error> {
        let mut book = AddressBook::new();
        for person in value.persons {
            book.add_person(person)?;
        }
        for relationship in value.relationships {
            book.add_relationship(relationship)?;
        }
        for event in value.events {
            let contacts = event.contacts().to_vec();
            if let Some(missing) = contacts.iter().find(|id| book.person(id).is_none()) {
                return Err(BookError::InvalidData(format!(
                    "event contact {missing} does not reference a stored person"
                )));
            }
            book.add_event(event)?;
        }
        Ok(book)
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|stored| stored.is_same_person(person))
    }

    pub fn person(&self, person_id: &str) -> Option<&Person> {
        self.persons.iter().find(|stored| stored.id == person_id)
    }

    pub fn add_person(&mut self, person: Person) -> BookResult<()> {
        if self.has_person(&person) {
            return Err(BookError::DuplicatePerson(person.id));
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target_id` with `edited`, keeping list position.
    ///
    /// The stable ID must not change; relationships and events keep pointing
    /// at the same person.
    pub fn set_person(&mut self, target_id: &str, edited: Person) -> BookResult<()> {
        let index = self
            .persons
            .iter()
            .position(|stored| stored.id == target_id)
            .ok_or_else(|| BookError::PersonNotFound(target_id.to_string()))?;
        if edited.id != target_id {
            return Err(BookError::InvalidData(
                "edited person must keep its stable ID".to_string(),
            ));
        }
        let clashes = self
            .persons
            .iter()
            .enumerate()
            .any(|(other, stored)| other != index && stored.is_same_person(&edited));
        if clashes {
            return Err(BookError::DuplicatePerson(edited.id));
        }
        self.persons[index] = edited;
        Ok(())
    }

    /// Removes one person and everything that references it.
    ///
    /// Returns the removed person and the number of cascaded relationships.
    pub fn remove_person(&mut self, person_id: &str) -> BookResult<(Person, usize)> {
        let index = self
            .persons
            .iter()
            .position(|stored| stored.id == person_id)
            .ok_or_else(|| BookError::PersonNotFound(person_id.to_string()))?;
        let removed = self.persons.remove(index);

        let before = self.relationships.len();
        self.relationships
            .retain(|relationship| !relationship.involves_user(person_id));
        let cascaded = before - self.relationships.len();

        for event in &mut self.events {
            event.remove_contact(person_id);
        }

        Ok((removed, cascaded))
    }

    pub fn has_relationship(&self, relationship: &Relationship) -> bool {
        self.relationships
            .iter()
            .any(|stored| stored.is_same_relationship(relationship))
    }

    /// Adds a relationship between two stored, distinct persons.
    pub fn add_relationship(&mut self, relationship: Relationship) -> BookResult<()> {
        let first = relationship.first_user_id();
        let second = relationship.second_user_id();
        for endpoint in [first, second] {
            if self.person(endpoint).is_none() {
                return Err(BookError::PersonNotFound(endpoint.to_string()));
            }
        }
        if first == second {
            return Err(BookError::SelfRelationship(first.to_string()));
        }
        if self.has_relationship(&relationship) {
            return Err(BookError::DuplicateRelationship);
        }
        self.relationships.push(relationship);
        Ok(())
    }

    /// Finds the relationship carrying `name` between the two users.
    pub fn find_relationship(
        &self,
        user_id1: &str,
        user_id2: &str,
        name: &str,
    ) -> Option<&Relationship> {
        self.relationships
            .iter()
            .find(|stored| stored.is_same_relationship_between(user_id1, user_id2, name))
    }

    /// Removes the relationship carrying `name` between the two users.
    pub fn remove_relationship(
        &mut self,
        user_id1: &str,
        user_id2: &str,
        name: &str,
    ) -> BookResult<Relationship> {
        let index = self
            .relationships
            .iter()
            .position(|stored| stored.is_same_relationship_between(user_id1, user_id2, name))
            .ok_or(BookError::RelationshipNotFound)?;
        Ok(self.relationships.remove(index))
    }

    /// Replaces `target` with `edited`, keeping list position.
    pub fn set_relationship(
        &mut self,
        target: &Relationship,
        edited: Relationship,
    ) -> BookResult<()> {
        let index = self
            .relationships
            .iter()
            .position(|stored| stored.is_same_relationship(target))
            .ok_or(BookError::RelationshipNotFound)?;
        let clashes = self
            .relationships
            .iter()
            .enumerate()
            .any(|(other, stored)| other != index && stored.is_same_relationship(&edited));
        if clashes {
            return Err(BookError::DuplicateRelationship);
        }
        self.relationships[index] = edited;
        Ok(())
    }

    pub fn relationships_of(&self, person_id: &str) -> Vec<&Relationship> {
        self.relationships
            .iter()
            .filter(|relationship| relationship.involves_user(person_id))
            .collect()
    }

    pub fn has_event(&self, event: &Event) -> bool {
        self.events.iter().any(|stored| stored.is_same_event(event))
    }

    pub fn add_event(&mut self, event: Event) -> BookResult<()> {
        if self.has_event(&event) {
            return Err(BookError::DuplicateEvent);
        }
        self.events.push(event);
        Ok(())
    }

    /// Attaches one stored person to one stored event.
    pub fn add_contact_to_event(&mut self, event: &Event, person_id: &str) -> BookResult<()> {
        if self.person(person_id).is_none() {
            return Err(BookError::PersonNotFound(person_id.to_string()));
        }
        let stored = self
            .events
            .iter_mut()
            .find(|stored| stored.is_same_event(event))
            .ok_or(BookError::EventNotFound)?;
        if !stored.add_contact(person_id) {
            return Err(BookError::DuplicateContact(person_id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{AddressBook, BookError};
    use crate::model::person::{Address, Email, Name, Person, Phone};
    use crate::model::relationship::Relationship;
    use std::collections::BTreeSet;

    fn person(id: &str, name: &str) -> Person {
        Person::with_id(
            id,
            Name::new(name).unwrap(),
            Phone::new("12345678").unwrap(),
            Email::new("someone@example.com").unwrap(),
            Address::new("Somewhere 1").unwrap(),
            BTreeSet::new(),
        )
        .unwrap()
    }

    #[test]
    fn rejects_person_with_same_name() {
        let mut book = AddressBook::new();
        book.add_person(person("p1", "Alice")).unwrap();
        let err = book.add_person(person("p2", "Alice")).unwrap_err();
        assert_eq!(err, BookError::DuplicatePerson("p2".to_string()));
    }

    #[test]
    fn relationship_requires_distinct_stored_endpoints() {
        let mut book = AddressBook::new();
        book.add_person(person("p1", "Alice")).unwrap();

        let dangling = Relationship::new("p1", "p9", "friend", "friend", BTreeSet::new()).unwrap();
        assert_eq!(
            book.add_relationship(dangling).unwrap_err(),
            BookError::PersonNotFound("p9".to_string())
        );

        let own = Relationship::new("p1", "p1", "self", "self", BTreeSet::new()).unwrap();
        assert_eq!(
            book.add_relationship(own).unwrap_err(),
            BookError::SelfRelationship("p1".to_string())
        );
    }

    #[test]
    fn set_person_keeps_stable_id() {
        let mut book = AddressBook::new();
        book.add_person(person("p1", "Alice")).unwrap();
        book.add_person(person("p2", "Bob")).unwrap();

        book.set_person("p1", person("p1", "Alicia")).unwrap();
        assert_eq!(book.person("p1").unwrap().name.as_str(), "Alicia");

        let clash = book.set_person("p1", person("p1", "Bob")).unwrap_err();
        assert_eq!(clash, BookError::DuplicatePerson("p1".to_string()));

        let moved = book.set_person("p1", person("p3", "Carl")).unwrap_err();
        assert!(matches!(moved, BookError::InvalidData(_)));
    }
}
