//! The meal record type.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::{MealName, Photo, Rating};

/// A single meal entry.
///
/// A meal couples a non-empty name with an optional photo and a star
/// rating. The field types carry their own invariants, so a `Meal`
/// holds valid data however it was produced, including by
/// deserializing an archive.
///
/// # Example
///
/// ```
/// use larder_core::Meal;
///
/// let meal = Meal::new("Lovely Peaches", None, 4).unwrap();
/// assert_eq!(meal.name.as_str(), "Lovely Peaches");
/// assert!(Meal::new("", None, 4).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// The meal name.
    pub name: MealName,

    /// The meal photo, if one was attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<Photo>,

    /// The star rating.
    pub rating: Rating,
}

impl Meal {
    /// Create a new meal from raw form input.
    ///
    /// This is the single entry point for user-entered data: a form
    /// hands over its fields and gets back a valid record or an error
    /// it can surface while keeping its save action disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the rating exceeds
    /// [`Rating::MAX`].
    pub fn new(name: impl Into<String>, photo: Option<Photo>, rating: u8) -> Result<Self, Error> {
        Ok(Self {
            name: MealName::new(name)?,
            photo,
            rating: Rating::new(rating)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid_meal() {
        let meal = Meal::new("Tasty Avacados", None, 1).unwrap();
        assert_eq!(meal.name.as_str(), "Tasty Avacados");
        assert!(meal.photo.is_none());
        assert_eq!(meal.rating.value(), 1);
    }

    #[test]
    fn new_with_photo() {
        let photo = Photo::new(vec![1, 2, 3]);
        let meal = Meal::new("Fantastic Blueberries", Some(photo.clone()), 3).unwrap();
        assert_eq!(meal.photo, Some(photo));
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(Meal::new("", None, 4).is_err());
    }

    #[test]
    fn rating_above_max_is_invalid() {
        assert!(Meal::new("Lovely Peaches", None, 6).is_err());
    }

    #[test]
    fn serialize_roundtrip() {
        let meal = Meal::new("Lovely Peaches", Some(Photo::new(vec![9, 8, 7])), 4).unwrap();
        let json = serde_json::to_string(&meal).unwrap();
        let back: Meal = serde_json::from_str(&json).unwrap();
        assert_eq!(meal, back);
    }

    #[test]
    fn photo_field_is_omitted_when_absent() {
        let meal = Meal::new("Toast", None, 0).unwrap();
        let json = serde_json::to_string(&meal).unwrap();
        assert!(!json.contains("photo"));
    }

    #[test]
    fn deserialize_without_photo_field() {
        let meal: Meal = serde_json::from_str(r#"{"name": "Toast", "rating": 2}"#).unwrap();
        assert!(meal.photo.is_none());
        assert_eq!(meal.rating.value(), 2);
    }

    #[test]
    fn deserialize_enforces_invariants() {
        let empty_name: Result<Meal, _> =
            serde_json::from_str(r#"{"name": "", "rating": 2}"#);
        assert!(empty_name.is_err());

        let bad_rating: Result<Meal, _> =
            serde_json::from_str(r#"{"name": "Toast", "rating": 11}"#);
        assert!(bad_rating.is_err());
    }
}
