//! Meal name type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated meal name.
///
/// The empty string is the one rejected form: an editing form keeps its
/// save action disabled until the name field holds some text, and this
/// type enforces the same rule at the record level.
///
/// # Example
///
/// ```
/// use larder_core::MealName;
///
/// let name = MealName::new("Lovely Peaches").unwrap();
/// assert_eq!(name.as_str(), "Lovely Peaches");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MealName(String);

impl MealName {
    /// Create a new meal name from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the name string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::Name {
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for MealName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MealName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for MealName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<MealName> for String {
    fn from(name: MealName) -> Self {
        name.0
    }
}

impl AsRef<str> for MealName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name() {
        let name = MealName::new("Tasty Avacados").unwrap();
        assert_eq!(name.as_str(), "Tasty Avacados");
    }

    #[test]
    fn invalid_empty() {
        assert!(MealName::new("").is_err());
    }

    #[test]
    fn whitespace_is_accepted() {
        // Only the empty string is rejected; any other text counts.
        assert!(MealName::new(" ").is_ok());
    }

    #[test]
    fn deserialize_empty_fails() {
        let result: Result<MealName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn serialize_roundtrip() {
        let name = MealName::new("Fantastic Blueberries").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        let back: MealName = serde_json::from_str(&json).unwrap();
        assert_eq!(name, back);
    }
}
