//! Error type for engine operations.

use activity::ActivityError;
use catalog::CatalogError;
use thiserror::Error;

/// Any failure an engine operation can report.
///
/// Both underlying kinds boil down to "duplicate id" or "not found";
/// the wrapper keeps them typed so callers can still match on the
/// exact condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Activity(#[from] ActivityError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, EngineError>;
