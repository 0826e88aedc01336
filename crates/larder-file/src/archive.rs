//! Whole-file archive of the meal list.
//!
//! The archive is one JSON file holding the full ordered list. Reads
//! and writes always cover the entire list; the dataset is small and
//! single-user, so there is no incremental form.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use larder_core::Meal;
use larder_core::error::ArchiveError;

/// Read the full meal list from the archive at `path`.
///
/// Returns `None` when the file is missing or does not deserialize;
/// the caller treats both the same way, as "no data yet".
pub fn read_archive(path: &Path) -> Option<Vec<Meal>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "no readable meal archive");
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(meals) => Some(meals),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "meal archive did not deserialize");
            None
        }
    }
}

/// Write the full meal list to the archive at `path`, replacing any
/// prior contents.
///
/// The list is written to a sibling temp file and renamed into place,
/// so the archive is never observed half-written.
///
/// # Errors
///
/// Returns an error if serialization or any filesystem step fails.
pub fn write_archive(path: &Path, meals: &[Meal]) -> Result<(), ArchiveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = serde_json::to_string_pretty(meals)?;

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// The default archive location under the platform data directory.
pub fn default_archive_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from(".local/share"))
        .join("larder")
        .join("meals.json")
}
