//! Command layer over the shared model.
//!
//! # Responsibility
//! - Bind already-parsed arguments to predicates or entity construction.
//! - Execute against `Model` and return user-facing feedback.
//!
//! # Invariants
//! - Commands hold no state across invocations; `execute` takes `&self`.
//! - Construction and model errors propagate unchanged to the caller.
//! - Equality and display are structural so command values can be compared
//!   in tests.

use crate::model::relationship::InvalidArgument;
use crate::model::validation::ValidationError;
use crate::repo::address_book::BookError;
use crate::service::model_manager::Model;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub mod event;
pub mod find;
pub mod messages;
pub mod person;
pub mod relationship;

pub use event::AddEventCommand;
pub use find::{FindCommand, ListCommand};
pub use person::{AddPersonCommand, DeletePersonCommand, EditPersonCommand};
pub use relationship::{
    AddRelationshipCommand, DeleteRelationshipCommand, ListRelationshipsCommand, TagOperation,
    TagRelationshipCommand,
};

/// Feedback produced by a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback_to_user: String,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
        }
    }
}

/// Failure raised while executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// An entity built from the arguments violates its constraints.
    Validation(ValidationError),
    /// The address book rejected the mutation or lookup.
    Book(BookError),
    /// A user ID was resolved against an unrelated relationship.
    InvalidArgument(InvalidArgument),
    /// Command-specific rejection with a fixed message.
    Rejected(&'static str),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Book(err) => write!(f, "{err}"),
            Self::InvalidArgument(err) => write!(f, "{err}"),
            Self::Rejected(message) => f.write_str(message),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Book(err) => Some(err),
            Self::InvalidArgument(err) => Some(err),
            Self::Rejected(_) => None,
        }
    }
}

impl From<ValidationError> for CommandError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<BookError> for CommandError {
    fn from(value: BookError) -> Self {
        Self::Book(value)
    }
}

impl From<InvalidArgument> for CommandError {
    fn from(value: InvalidArgument) -> Self {
        Self::InvalidArgument(value)
    }
}

/// Executable command bound to its parsed arguments.
pub trait Command: Debug + Display {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError>;
}
