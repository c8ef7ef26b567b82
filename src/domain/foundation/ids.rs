//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identifier for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Creates a QuestionId from a raw value.
    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Identifier of a choice, unique within its owning question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(u32);

impl ChoiceId {
    /// The id given to the first choice added to a question.
    pub const FIRST: Self = Self(1);

    /// Creates a ChoiceId from a raw value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns the id that follows this one, or `None` past `u32::MAX`.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Default for ChoiceId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChoiceId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

static GLOBAL_QUESTION_IDS: QuestionIdGenerator = QuestionIdGenerator::new();

/// Monotonic source of question ids.
///
/// Ids are never reissued by the same generator, even across threads.
/// Only [`QuestionIdGenerator::global`] guarantees uniqueness for the
/// whole process; standalone generators are meant for isolated tests.
#[derive(Debug)]
pub struct QuestionIdGenerator {
    next: AtomicU64,
}

impl QuestionIdGenerator {
    /// Creates a generator whose first id is 1.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Returns the process-wide generator.
    pub fn global() -> &'static QuestionIdGenerator {
        &GLOBAL_QUESTION_IDS
    }

    /// Draws the next id.
    pub fn next_id(&self) -> QuestionId {
        QuestionId(self.next.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for QuestionIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn generator_starts_at_one_and_increments() {
        let ids = QuestionIdGenerator::new();
        assert_eq!(ids.next_id(), QuestionId::from_raw(1));
        assert_eq!(ids.next_id(), QuestionId::from_raw(2));
        assert_eq!(ids.next_id(), QuestionId::from_raw(3));
    }

    #[test]
    fn global_generator_never_repeats() {
        let a = QuestionIdGenerator::global().next_id();
        let b = QuestionIdGenerator::global().next_id();
        assert_ne!(a, b);
        assert!(b > a);
    }

    #[test]
    fn generator_is_collision_free_across_threads() {
        let ids = Arc::new(QuestionIdGenerator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                thread::spawn(move || (0..250).map(|_| ids.next_id()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {}", id);
            }
        }
        assert_eq!(seen.len(), 2000);
    }

    #[test]
    fn choice_id_next_increments() {
        assert_eq!(ChoiceId::FIRST.next(), Some(ChoiceId::new(2)));
        assert_eq!(ChoiceId::default(), ChoiceId::FIRST);
    }

    #[test]
    fn choice_id_next_stops_at_max() {
        assert_eq!(ChoiceId::new(u32::MAX - 1).next(), Some(ChoiceId::new(u32::MAX)));
        assert_eq!(ChoiceId::new(u32::MAX).next(), None);
    }

    #[test]
    fn ids_display_as_bare_numbers() {
        assert_eq!(ChoiceId::new(999).to_string(), "999");
        assert_eq!(QuestionId::from_raw(42).to_string(), "42");
    }

    #[test]
    fn ids_parse_from_strings() {
        assert_eq!("7".parse::<ChoiceId>().unwrap(), ChoiceId::new(7));
        assert_eq!("12".parse::<QuestionId>().unwrap(), QuestionId::from_raw(12));
        assert!("abc".parse::<ChoiceId>().is_err());
    }

    #[test]
    fn ids_serialize_transparently() {
        assert_eq!(serde_json::to_string(&ChoiceId::new(3)).unwrap(), "3");
        let id: QuestionId = serde_json::from_str("17").unwrap();
        assert_eq!(id, QuestionId::from_raw(17));
    }
}
