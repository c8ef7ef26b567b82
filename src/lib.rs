//! Quiz Question - validated quiz questions with answer choices.
//!
//! This crate implements the question aggregate: identity assignment,
//! choice lifecycle and the rules for marking and selecting correct answers.

pub mod config;
pub mod domain;
