//! Points value object (1-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Score awarded for a question, between 1 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub struct Points(u32);

impl Points {
    /// Smallest allowed value.
    pub const MIN: u32 = 1;

    /// Largest allowed value.
    pub const MAX: u32 = 100;

    /// Creates Points, returning error if out of range.
    pub fn try_new(value: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "points",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the value as u32.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Points {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Points> for u32 {
    fn from(points: Points) -> Self {
        points.0
    }
}

impl Default for Points {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_accept_boundaries() {
        assert_eq!(Points::try_new(1).unwrap().value(), 1);
        assert_eq!(Points::try_new(50).unwrap().value(), 50);
        assert_eq!(Points::try_new(100).unwrap().value(), 100);
    }

    #[test]
    fn points_reject_out_of_range() {
        assert_eq!(
            Points::try_new(0),
            Err(ValidationError::out_of_range("points", 1, 100, 0))
        );
        assert!(Points::try_new(101).is_err());
        assert!(Points::try_new(u32::MAX).is_err());
    }

    #[test]
    fn points_deserialize_only_within_range() {
        let points: Points = serde_json::from_str("42").unwrap();
        assert_eq!(points.value(), 42);
        assert!(serde_json::from_str::<Points>("0").is_err());
        assert!(serde_json::from_str::<Points>("101").is_err());
    }

    #[test]
    fn points_serialize_as_number() {
        let points = Points::try_new(7).unwrap();
        assert_eq!(serde_json::to_string(&points).unwrap(), "7");
    }

    #[test]
    fn points_default_is_one() {
        assert_eq!(Points::default().value(), 1);
    }
}
