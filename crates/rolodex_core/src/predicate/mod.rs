//! Person filtering entry points.
//!
//! # Responsibility
//! - Expose keyword predicates used by the find family of commands.
//! - Keep matching rules inside core so every caller filters the same way.

pub mod keywords;
