//! Find-family and list commands.

use crate::command::messages::{persons_listed, MESSAGE_LISTED_ALL_PERSONS};
use crate::command::{Command, CommandError, CommandResult};
use crate::predicate::keywords::{KeywordsPredicate, PersonAttribute, PersonFilter};
use crate::service::model_manager::Model;
use log::info;
use std::fmt::{Display, Formatter};

/// Lists every person whose attribute contains any keyword (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: KeywordsPredicate,
}

impl FindCommand {
    pub const FIND_NAME_WORD: &'static str = "find";
    pub const FIND_PHONE_WORD: &'static str = "findPhone";
    pub const FIND_EMAIL_WORD: &'static str = "findEmail";
    pub const FIND_ADDRESS_WORD: &'static str = "findAddress";
    pub const FIND_TAG_WORD: &'static str = "findTag";

    pub fn new(predicate: KeywordsPredicate) -> Self {
        Self { predicate }
    }

    pub fn predicate(&self) -> &KeywordsPredicate {
        &self.predicate
    }

    /// Command word that selects this command's target attribute.
    pub fn command_word(&self) -> &'static str {
        match self.predicate.attribute() {
            PersonAttribute::Name => Self::FIND_NAME_WORD,
            PersonAttribute::Phone => Self::FIND_PHONE_WORD,
            PersonAttribute::Email => Self::FIND_EMAIL_WORD,
            PersonAttribute::Address => Self::FIND_ADDRESS_WORD,
            PersonAttribute::Tag => Self::FIND_TAG_WORD,
        }
    }
}

impl Command for FindCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_person_list(PersonFilter::Keywords(self.predicate.clone()));
        let matched = model.filtered_person_list().len();
        info!(
            "event=find_persons module=command status=ok attribute={} keywords={} matched={}",
            self.predicate.attribute().as_str(),
            self.predicate.keywords().len(),
            matched
        );
        Ok(CommandResult::new(persons_listed(matched)))
    }
}

impl Display for FindCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "FindCommand{{predicate={}}}", self.predicate)
    }
}

/// Clears any active filter so every person is listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
}

impl Command for ListCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        model.update_filtered_person_list(PersonFilter::All);
        Ok(CommandResult::new(MESSAGE_LISTED_ALL_PERSONS))
    }
}

impl Display for ListCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ListCommand")
    }
}
