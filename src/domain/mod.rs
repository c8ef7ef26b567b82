//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, value objects, errors)
//! - `question` - Question aggregate and its answer choices

pub mod foundation;
pub mod question;
