//! Domain model for contacts, relationships and events.
//!
//! # Responsibility
//! - Define canonical value types used by core business logic.
//! - Enforce field constraints at construction and decode time.
//!
//! # Invariants
//! - Every person is identified by a stable `PersonId`.
//! - Relationships and events refer to persons by ID only.

pub mod event;
pub mod person;
pub mod relationship;
pub mod tag;
pub mod validation;
