//! larder-core - Core meal record types.
//!
//! A meal is a named entry with an optional photo and a star rating.
//! The types in this crate validate at construction and at
//! deserialization time, so any `Meal` in hand is a valid record.

pub mod error;
pub mod meal;
pub mod seed;
pub mod types;

pub use error::Error;
pub use meal::Meal;
pub use seed::sample_meals;
pub use types::{MealName, Photo, Rating};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
