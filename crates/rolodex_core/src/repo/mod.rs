//! Storage-side collections of the address book.
//!
//! # Responsibility
//! - Own the in-memory collections and their uniqueness rules.
//! - Stay serializable so an external collaborator can load/save the book.
//!
//! # Invariants
//! - Collection writes go through the uniqueness checks; decode paths too.
//! - Lookup APIs return semantic errors (`PersonNotFound`, ...) instead of
//!   silently ignoring missing rows.

pub mod address_book;
