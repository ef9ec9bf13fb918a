//! Core use-case services.
//!
//! # Responsibility
//! - Expose the shared model that commands mutate and query.
//! - Keep command code decoupled from collection details.

pub mod model_manager;
