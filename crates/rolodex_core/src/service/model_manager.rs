//! Shared mutable model used by commands.
//!
//! # Responsibility
//! - Define the `Model` seam every command executes against.
//! - Own the address book together with the active person filter.
//!
//! # Invariants
//! - The filtered person view is always derived from the current book and
//!   the last installed filter; it is never stored separately.
//! - Removing a person cascades through relationships and event contacts.

use crate::model::event::Event;
use crate::model::person::Person;
use crate::model::relationship::Relationship;
use crate::predicate::keywords::{PersonFilter, PersonPredicate};
use crate::repo::address_book::{AddressBook, BookResult};
use log::{debug, info};

/// Operations commands may perform on the shared address book state.
pub trait Model {
    fn address_book(&self) -> &AddressBook;

    fn person(&self, person_id: &str) -> Option<&Person>;
    fn add_person(&mut self, person: Person) -> BookResult<()>;
    /// Replaces the stored person, keeping its ID.
    fn set_person(&mut self, target_id: &str, edited: Person) -> BookResult<()>;
    fn delete_person(&mut self, person_id: &str) -> BookResult<Person>;

    /// Installs `filter` as the active view over the person list.
    fn update_filtered_person_list(&mut self, filter: PersonFilter);
    /// Persons visible under the active filter, in book order.
    fn filtered_person_list(&self) -> Vec<&Person>;

    fn add_relationship(&mut self, relationship: Relationship) -> BookResult<()>;
    fn find_relationship(&self, user_id1: &str, user_id2: &str, name: &str)
        -> Option<&Relationship>;
    fn delete_relationship(
        &mut self,
        user_id1: &str,
        user_id2: &str,
        name: &str,
    ) -> BookResult<Relationship>;
    fn set_relationship(&mut self, target: &Relationship, edited: Relationship)
        -> BookResult<()>;
    fn relationships_of(&self, person_id: &str) -> Vec<&Relationship>;

    fn has_event(&self, event: &Event) -> bool;
    fn add_event(&mut self, event: Event) -> BookResult<()>;
    fn add_contact_to_event(&mut self, event: &Event, person_id: &str) -> BookResult<()>;
}

/// Default in-memory `Model` implementation.
#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    address_book: AddressBook,
    filter: PersonFilter,
}

impl ModelManager {
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            filter: PersonFilter::All,
        }
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }
}

impl Model for ModelManager {
    fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    fn person(&self, person_id: &str) -> Option<&Person> {
        self.address_book.person(person_id)
    }

    fn add_person(&mut self, person: Person) -> BookResult<()> {
        self.address_book.add_person(person)?;
        self.filter = PersonFilter::All;
        Ok(())
    }

    fn set_person(&mut self, target_id: &str, edited: Person) -> BookResult<()> {
        self.address_book.set_person(target_id, edited)
    }

    fn delete_person(&mut self, person_id: &str) -> BookResult<Person> {
        let (removed, cascaded) = self.address_book.remove_person(person_id)?;
        info!(
            "event=person_delete module=model status=ok cascaded_relationships={}",
            cascaded
        );
        Ok(removed)
    }

    fn update_filtered_person_list(&mut self, filter: PersonFilter) {
        debug!(
            "event=filter_update module=model status=ok kind={}",
            match &filter {
                PersonFilter::All => "all",
                PersonFilter::Keywords(predicate) => predicate.attribute().as_str(),
            }
        );
        self.filter = filter;
    }

    fn filtered_person_list(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|person| self.filter.test(person))
            .collect()
    }

    fn add_relationship(&mut self, relationship: Relationship) -> BookResult<()> {
        self.address_book.add_relationship(relationship)
    }

    fn find_relationship(
        &self,
        user_id1: &str,
        user_id2: &str,
        name: &str,
    ) -> Option<&Relationship> {
        self.address_book.find_relationship(user_id1, user_id2, name)
    }

    fn delete_relationship(
        &mut self,
        user_id1: &str,
        user_id2: &str,
        name: &str,
    ) -> BookResult<Relationship> {
        self.address_book.remove_relationship(user_id1, user_id2, name)
    }

    fn set_relationship(&mut self, target: &Relationship, edited: Relationship) -> BookResult<()> {
        self.address_book.set_relationship(target, edited)
    }

    fn relationships_of(&self, person_id: &str) -> Vec<&Relationship> {
        self.address_book.relationships_of(person_id)
    }

    fn has_event(&self, event: &Event) -> bool {
        self.address_book.has_event(event)
    }

    fn add_event(&mut self, event: Event) -> BookResult<()> {
        self.address_book.add_event(event)
    }

    fn add_contact_to_event(&mut self, event: &Event, person_id: &str) -> BookResult<()> {
        self.address_book.add_contact_to_event(event, person_id)
    }
}
