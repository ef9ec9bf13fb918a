//! Core domain logic for Rolodex.
//! This crate is the single source of truth for contact, relationship and
//! event invariants.

pub mod command;
pub mod config;
pub mod logging;
pub mod model;
pub mod predicate;
pub mod repo;
pub mod sample;
pub mod service;

pub use command::{Command, CommandError, CommandResult};
pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::event::Event;
pub use model::person::{Address, Email, Name, Person, PersonId, Phone};
pub use model::relationship::{InvalidArgument, Relationship, RelationshipRecord};
pub use model::tag::Tag;
pub use model::validation::ValidationError;
pub use predicate::keywords::{KeywordsPredicate, PersonAttribute, PersonFilter, PersonPredicate};
pub use repo::address_book::{AddressBook, BookError, BookResult};
pub use sample::{sample_address_book, SampleDataError};
pub use service::model_manager::{Model, ModelManager};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
