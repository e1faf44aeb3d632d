//! Error types for the catalog crate.

use crate::types::MovieId;
use thiserror::Error;

/// Errors raised by the intake queue and the category catalog.
///
/// Expected conditions like an empty bucket or an absent filter match
/// are not errors; they come back as `Option`/empty values. These
/// variants cover the cases where the caller asked for something the
/// catalog cannot do.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogError {
    /// A movie with this id is already staged or catalogued
    #[error("movie {id} is already in the catalog")]
    DuplicateMovie { id: MovieId },

    /// The movie is required to exist but is in no bucket
    #[error("movie {id} was not found in any category")]
    MovieNotFound { id: MovieId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
