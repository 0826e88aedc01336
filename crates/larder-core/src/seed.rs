//! Built-in sample meals.

use crate::meal::Meal;

/// The fallback meal list for a fresh start.
///
/// Used when no archive can be read from disk, so the list is never
/// empty on first run. Pure and constant: callers decide when to fall
/// back, this function only says what the fallback is.
pub fn sample_meals() -> Vec<Meal> {
    vec![
        sample("Tasty Avacados", 1),
        sample("Fantastic Blueberries", 3),
        sample("Lovely Peaches", 4),
    ]
}

fn sample(name: &str, rating: u8) -> Meal {
    Meal::new(name, None, rating).expect("sample meal inputs are valid")
}
