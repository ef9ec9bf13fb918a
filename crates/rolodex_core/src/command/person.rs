//! Person add/edit/delete commands.

use crate::command::messages::{person_added, person_deleted, person_edited};
use crate::command::{Command, CommandError, CommandResult};
use crate::model::person::{Address, Email, Name, Person, PersonId, Phone};
use crate::model::tag::Tag;
use crate::service::model_manager::Model;
use log::info;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Adds one person to the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPersonCommand {
    person: Person,
}

impl AddPersonCommand {
    pub const COMMAND_WORD: &'static str = "add";

    pub fn new(person: Person) -> Self {
        Self { person }
    }
}

impl Command for AddPersonCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.add_person(self.person.clone())?;
        info!("event=person_add module=command status=ok");
        Ok(CommandResult::new(person_added(&self.person)))
    }
}

impl Display for AddPersonCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "AddPersonCommand{{toAdd={}}}", self.person)
    }
}

/// Replaces the details of one stored person.
///
/// The ID is kept, so relationships and event contacts still resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPersonCommand {
    person_id: PersonId,
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
}

impl EditPersonCommand {
    pub const COMMAND_WORD: &'static str = "edit";

    pub fn new(
        person_id: impl Into<PersonId>,
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            person_id: person_id.into(),
            name,
            phone,
            email,
            address,
            tags,
        }
    }
}

impl Command for EditPersonCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let edited = Person::with_id(
            self.person_id.as_str(),
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.address.clone(),
            self.tags.clone(),
        )?;
        let feedback = person_edited(&edited);
        model.set_person(&self.person_id, edited)?;
        info!("event=person_edit module=command status=ok");
        Ok(CommandResult::new(feedback))
    }
}

impl Display for EditPersonCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EditPersonCommand{{personId={}, name={}}}",
            self.person_id, self.name
        )
    }
}

/// Deletes one person and every relationship or event link that names them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePersonCommand {
    person_id: PersonId,
}

impl DeletePersonCommand {
    pub const COMMAND_WORD: &'static str = "delete";

    pub fn new(person_id: impl Into<PersonId>) -> Self {
        Self {
            person_id: person_id.into(),
        }
    }
}

impl Command for DeletePersonCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let removed = model.delete_person(&self.person_id)?;
        Ok(CommandResult::new(person_deleted(&removed)))
    }
}

impl Display for DeletePersonCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "DeletePersonCommand{{personId={}}}", self.person_id)
    }
}
