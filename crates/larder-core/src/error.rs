//! Error types for the larder library.
//!
//! This module provides a unified error type with explicit variants for
//! input validation and archive (persistence) errors.

use thiserror::Error;

/// The unified error type for larder operations.
///
/// This error type covers all possible failure modes in the library,
/// with explicit variants to allow callers to handle specific cases.
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation errors (empty name, rating out of bounds).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Archive errors (serializing or writing the meal archive file).
    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid meal name.
    #[error("invalid meal name: {reason}")]
    Name { reason: String },

    /// Invalid rating value.
    #[error("invalid rating {value}: {reason}")]
    Rating { value: u8, reason: String },
}

/// Errors from writing the archive file.
///
/// These only surface inside the store's best-effort persist path;
/// a failed read is folded into "no archive yet" instead.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the meal list failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
