//! Add-event command.
//!
//! # Invariants
//! - The event is stored before any contact is attached.
//! - A failed contact attachment never removes the stored event; failures are
//!   reported in the feedback instead.

use crate::command::messages::{contacts_not_added, event_added};
use crate::command::{Command, CommandError, CommandResult};
use crate::model::event::Event;
use crate::model::person::PersonId;
use crate::model::tag::Tag;
use crate::model::validation::ValidationError;
use crate::repo::address_book::BookError;
use crate::service::model_manager::Model;
use log::{info, warn};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Adds an event, then attaches the requested contacts one by one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEventCommand {
    event: Event,
    contacts: Vec<PersonId>,
}

impl AddEventCommand {
    pub const COMMAND_WORD: &'static str = "addEvent";

    /// Binds an event to the contacts that should be attached after insertion.
    pub fn new(event: Event, contacts: Vec<PersonId>) -> Self {
        Self { event, contacts }
    }

    /// Builds the event from parsed parts with an empty contact collection.
    pub fn from_parts(
        name: impl Into<String>,
        start_epoch_ms: i64,
        location: Option<String>,
        description: Option<String>,
        tags: BTreeSet<Tag>,
        contacts: Vec<PersonId>,
    ) -> Result<Self, ValidationError> {
        let event = Event::new(name, start_epoch_ms, location, description, tags)?;
        Ok(Self::new(event, contacts))
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn contacts(&self) -> &[PersonId] {
        &self.contacts
    }
}

impl Command for AddEventCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.has_event(&self.event) {
            return Err(BookError::DuplicateEvent.into());
        }
        model.add_event(self.event.clone())?;

        let mut failed = Vec::new();
        for contact in &self.contacts {
            if let Err(err) = model.add_contact_to_event(&self.event, contact) {
                warn!(
                    "event=event_contact_attach module=command status=error reason={}",
                    attach_failure_reason(&err)
                );
                failed.push(contact.as_str());
            }
        }

        info!(
            "event=event_add module=command status=ok contacts_requested={} contacts_failed={}",
            self.contacts.len(),
            failed.len()
        );

        let mut feedback = event_added(&self.event);
        if !failed.is_empty() {
            feedback.push('\n');
            feedback.push_str(&contacts_not_added(&failed));
        }
        Ok(CommandResult::new(feedback))
    }
}

fn attach_failure_reason(err: &BookError) -> &'static str {
    match err {
        BookError::PersonNotFound(_) => "person_not_found",
        BookError::DuplicateContact(_) => "duplicate_contact",
        BookError::EventNotFound => "event_not_found",
        _ => "other",
    }
}

impl Display for AddEventCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AddEventCommand{{toAdd={}, contacts=[{}]}}",
            self.event,
            self.contacts.join(", ")
        )
    }
}
