//! File-backed meal store.

use std::path::{Path, PathBuf};

use tracing::{debug, error, instrument};

use larder_core::{Meal, sample_meals};

use crate::archive;

/// File-backed store for the meal list.
///
/// Owns the in-memory ordered list and mirrors it to a single archive
/// file: every mutation rewrites the whole archive. Insertion order is
/// display order is persistence order, and positions are the only
/// identity a meal has.
///
/// The store is single-owner: mutations take `&mut self` and complete
/// before returning, and the in-memory list stays authoritative even
/// when a write to disk fails.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    meals: Vec<Meal>,
}

impl FileStore {
    /// Open the store backed by the archive at `path`.
    ///
    /// Loads the previously archived list if one can be read, otherwise
    /// starts from [`sample_meals`].
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let meals = match archive::read_archive(&path) {
            Some(meals) => {
                debug!(count = meals.len(), "loaded meal archive");
                meals
            }
            None => {
                debug!("starting from sample meals");
                sample_meals()
            }
        };

        Self { path, meals }
    }

    /// Open the store at the default platform location.
    pub fn open_default() -> Self {
        Self::open(archive::default_archive_path())
    }

    /// The archive path backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of meals in the list.
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// The meal at `index`, if that position is occupied.
    pub fn get(&self, index: usize) -> Option<&Meal> {
        self.meals.get(index)
    }

    /// The current ordered list.
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    /// Append a meal at the end of the list and rewrite the archive.
    #[instrument(skip(self, meal))]
    pub fn append(&mut self, meal: Meal) {
        debug!(name = %meal.name, index = self.meals.len(), "appending meal");
        self.meals.push(meal);
        self.persist();
    }

    /// Replace the meal at `index` and rewrite the archive.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not occupied: the list and whatever is
    /// presenting it have desynchronized, and there is no sensible way
    /// to continue.
    #[instrument(skip(self, meal))]
    pub fn replace_at(&mut self, index: usize, meal: Meal) {
        assert!(
            index < self.meals.len(),
            "replace_at index {index} out of range (len {})",
            self.meals.len()
        );
        debug!(name = %meal.name, index, "replacing meal");
        self.meals[index] = meal;
        self.persist();
    }

    /// Remove and return the meal at `index`, shifting later meals down
    /// by one, and rewrite the archive.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not occupied.
    #[instrument(skip(self))]
    pub fn remove_at(&mut self, index: usize) -> Meal {
        assert!(
            index < self.meals.len(),
            "remove_at index {index} out of range (len {})",
            self.meals.len()
        );
        let meal = self.meals.remove(index);
        debug!(name = %meal.name, index, "removed meal");
        self.persist();
        meal
    }

    /// Rewrite the archive from the current in-memory list.
    ///
    /// Best-effort: a failed write is logged and otherwise ignored, and
    /// the in-memory list remains the source of truth until the next
    /// successful write.
    pub fn persist(&self) {
        match archive::write_archive(&self.path, &self.meals) {
            Ok(()) => {
                debug!(count = self.meals.len(), path = %self.path.display(), "meals saved");
            }
            Err(err) => {
                error!(path = %self.path.display(), error = %err, "meals did not save");
            }
        }
    }
}
