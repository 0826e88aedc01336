//! Star rating type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, InvalidInputError};

/// A validated star rating.
///
/// Ratings are whole stars from 0 (unrated) up to [`Rating::MAX`].
///
/// # Example
///
/// ```
/// use larder_core::Rating;
///
/// let rating = Rating::new(4).unwrap();
/// assert_eq!(rating.value(), 4);
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// The highest rating: five stars.
    pub const MAX: u8 = 5;

    /// Create a new rating, validating the range.
    ///
    /// # Errors
    ///
    /// Returns an error if the value exceeds [`Rating::MAX`].
    pub fn new(value: u8) -> Result<Self, Error> {
        Self::validate(value)?;
        Ok(Self(value))
    }

    /// Returns the rating as a plain integer.
    pub fn value(&self) -> u8 {
        self.0
    }

    fn validate(value: u8) -> Result<(), Error> {
        if value > Self::MAX {
            return Err(InvalidInputError::Rating {
                value,
                reason: format!("exceeds maximum of {}", Self::MAX),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Rating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_zero() {
        let rating = Rating::new(0).unwrap();
        assert_eq!(rating.value(), 0);
    }

    #[test]
    fn valid_max() {
        let rating = Rating::new(Rating::MAX).unwrap();
        assert_eq!(rating.value(), 5);
    }

    #[test]
    fn invalid_above_max() {
        assert!(Rating::new(6).is_err());
    }

    #[test]
    fn default_is_unrated() {
        assert_eq!(Rating::default().value(), 0);
    }

    #[test]
    fn deserialize_out_of_range_fails() {
        let result: Result<Rating, _> = serde_json::from_str("9");
        assert!(result.is_err());
    }

    #[test]
    fn serialize_as_plain_integer() {
        let rating = Rating::new(3).unwrap();
        assert_eq!(serde_json::to_string(&rating).unwrap(), "3");
    }
}
