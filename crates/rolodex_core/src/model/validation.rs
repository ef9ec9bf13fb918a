//! Shared validation error for domain value types.
//!
//! # Responsibility
//! - Carry the offending field and its fixed constraint message.
//! - Keep one error shape for every constructor that validates input.
//!
//! # Invariants
//! - `constraint` is always a static, user-facing sentence.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure raised when a value violates its field constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Field that failed validation, e.g. `relationship_name`.
    pub field: &'static str,
    /// Rejected input as received.
    pub value: String,
    /// Fixed constraint message shown to users.
    pub constraint: &'static str,
}

impl ValidationError {
    pub fn new(field: &'static str, value: impl Into<String>, constraint: &'static str) -> Self {
        Self {
            field,
            value: value.into(),
            constraint,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.constraint)
    }
}

impl Error for ValidationError {}
