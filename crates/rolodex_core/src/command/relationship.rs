//! Relationship commands.
//!
//! # Responsibility
//! - Create, delete, retag and list relationships between stored persons.
//!
//! # Invariants
//! - Deletion and retagging select the target with the lenient
//!   "either name between these two users" lookup.
//! - Adding rejects anything `is_same_relationship` already covers.

use crate::command::messages::{
    no_relationships, relationship_added, relationship_deleted, relationship_tagged,
    MESSAGE_RELATIONSHIP_NOT_FOUND, MESSAGE_UNKNOWN_USERS,
};
use crate::command::{Command, CommandError, CommandResult};
use crate::model::person::PersonId;
use crate::model::relationship::Relationship;
use crate::model::tag::Tag;
use crate::repo::address_book::BookError;
use crate::service::model_manager::Model;
use log::info;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Adds a named relationship between two existing persons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRelationshipCommand {
    first_user_id: PersonId,
    second_user_id: PersonId,
    forward_name: String,
    reverse_name: String,
    tags: BTreeSet<Tag>,
}

impl AddRelationshipCommand {
    pub const COMMAND_WORD: &'static str = "addRelationship";

    pub fn new(
        first_user_id: impl Into<PersonId>,
        second_user_id: impl Into<PersonId>,
        forward_name: impl Into<String>,
        reverse_name: impl Into<String>,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            first_user_id: first_user_id.into(),
            second_user_id: second_user_id.into(),
            forward_name: forward_name.into(),
            reverse_name: reverse_name.into(),
            tags,
        }
    }
}

impl Command for AddRelationshipCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.person(&self.first_user_id).is_none()
            || model.person(&self.second_user_id).is_none()
        {
            return Err(CommandError::Rejected(MESSAGE_UNKNOWN_USERS));
        }

        let relationship = Relationship::new(
            self.first_user_id.as_str(),
            self.second_user_id.as_str(),
            self.forward_name.as_str(),
            self.reverse_name.as_str(),
            self.tags.clone(),
        )?;
        let feedback = relationship_added(&relationship);
        model.add_relationship(relationship)?;
        info!(
            "event=relationship_add module=command status=ok tags={}",
            self.tags.len()
        );
        Ok(CommandResult::new(feedback))
    }
}

impl Display for AddRelationshipCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AddRelationshipCommand{{user1={}, user2={}, forwardName={}, reverseName={}}}",
            self.first_user_id, self.second_user_id, self.forward_name, self.reverse_name
        )
    }
}

/// Deletes the relationship carrying `name` between two persons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRelationshipCommand {
    first_user_id: PersonId,
    second_user_id: PersonId,
    name: String,
}

impl DeleteRelationshipCommand {
    pub const COMMAND_WORD: &'static str = "deleteRelationship";

    pub fn new(
        first_user_id: impl Into<PersonId>,
        second_user_id: impl Into<PersonId>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            first_user_id: first_user_id.into(),
            second_user_id: second_user_id.into(),
            name: name.into(),
        }
    }
}

impl Command for DeleteRelationshipCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let removed = model
            .delete_relationship(&self.first_user_id, &self.second_user_id, &self.name)
            .map_err(|err| match err {
                BookError::RelationshipNotFound => {
                    CommandError::Rejected(MESSAGE_RELATIONSHIP_NOT_FOUND)
                }
                other => CommandError::Book(other),
            })?;
        info!("event=relationship_delete module=command status=ok");
        Ok(CommandResult::new(relationship_deleted(&removed)))
    }
}

impl Display for DeleteRelationshipCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DeleteRelationshipCommand{{user1={}, user2={}, name={}}}",
            self.first_user_id, self.second_user_id, self.name
        )
    }
}

/// Whether a tag is attached to or detached from a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOperation {
    Add,
    Remove,
}

/// Adds or removes one tag on an existing relationship.
///
/// The stored value is replaced, since relationships are immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRelationshipCommand {
    first_user_id: PersonId,
    second_user_id: PersonId,
    name: String,
    tag: Tag,
    operation: TagOperation,
}

impl TagRelationshipCommand {
    pub const COMMAND_WORD: &'static str = "tagRelationship";

    pub fn new(
        first_user_id: impl Into<PersonId>,
        second_user_id: impl Into<PersonId>,
        name: impl Into<String>,
        tag: Tag,
        operation: TagOperation,
    ) -> Self {
        Self {
            first_user_id: first_user_id.into(),
            second_user_id: second_user_id.into(),
            name: name.into(),
            tag,
            operation,
        }
    }
}

impl Command for TagRelationshipCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let target = model
            .find_relationship(&self.first_user_id, &self.second_user_id, &self.name)
            .cloned()
            .ok_or(CommandError::Rejected(MESSAGE_RELATIONSHIP_NOT_FOUND))?;

        let edited = match self.operation {
            TagOperation::Add => target.with_added_tag(self.tag.clone()),
            TagOperation::Remove => target.with_removed_tag(&self.tag),
        };
        let feedback = relationship_tagged(&edited);
        model.set_relationship(&target, edited)?;
        Ok(CommandResult::new(feedback))
    }
}

impl Display for TagRelationshipCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TagRelationshipCommand{{user1={}, user2={}, name={}, tag={}, operation={:?}}}",
            self.first_user_id, self.second_user_id, self.name, self.tag, self.operation
        )
    }
}

/// Lists every relationship of one person, named from that person's side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRelationshipsCommand {
    person_id: PersonId,
}

impl ListRelationshipsCommand {
    pub const COMMAND_WORD: &'static str = "listRelationships";

    pub fn new(person_id: impl Into<PersonId>) -> Self {
        Self {
            person_id: person_id.into(),
        }
    }
}

impl Command for ListRelationshipsCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.person(&self.person_id).is_none() {
            return Err(BookError::PersonNotFound(self.person_id.clone()).into());
        }

        let mut lines = Vec::new();
        for relationship in model.relationships_of(&self.person_id) {
            let name = relationship.name_from_perspective(&self.person_id)?;
            let other_id = relationship
                .other_user_id(&self.person_id)
                .unwrap_or_default();
            lines.push(format!("{name}: {other_id}"));
        }

        if lines.is_empty() {
            return Ok(CommandResult::new(no_relationships(&self.person_id)));
        }
        Ok(CommandResult::new(lines.join("\n")))
    }
}

impl Display for ListRelationshipsCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ListRelationshipsCommand{{personId={}}}", self.person_id)
    }
}
