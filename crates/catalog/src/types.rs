//! Core domain types for the streaming catalog.
//!
//! This module defines the value types shared by every other crate:
//! - Type aliases for domain clarity (UserId, MovieId, Year)
//! - MovieInfo, the immutable movie record
//! - Category, the closed set of six catalog categories
//! - The node types of the intake queue and the category buckets

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up user IDs with movie IDs

/// Unique identifier for a movie. Unique across the whole system:
/// no two entries anywhere share an id at the same time.
pub type MovieId = u32;

/// Unique identifier for a registered user.
///
/// Signed to stay compatible with the event-script format, which allows
/// any non-negative integer; all ids >= 0 are valid.
pub type UserId = i32;

/// Release year of a movie.
pub type Year = u16;

// =============================================================================
// Movie Record
// =============================================================================

/// Immutable record of a movie: its id and release year.
///
/// This is the value that flows through the whole system. The intake
/// queue, the category buckets, watch histories and suggestion lists
/// all carry *copies* of it; they never share nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieInfo {
    pub id: MovieId,
    pub year: Year,
}

impl MovieInfo {
    pub fn new(id: MovieId, year: Year) -> Self {
        Self { id, year }
    }
}

// =============================================================================
// Category
// =============================================================================

/// The closed set of catalog categories, used as a bucket index.
///
/// The declaration order below is load-bearing: `Category::ALL` fixes
/// the bucket scan order used by [`crate::CategoryCatalog::find_anywhere`]
/// and [`crate::CategoryCatalog::remove_by_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Horror,
    SciFi,
    Drama,
    Romance,
    Documentary,
    Comedy,
}

/// Number of categories, and therefore of catalog buckets.
pub const CATEGORY_COUNT: usize = 6;

impl Category {
    /// All categories in the documented bucket scan order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Horror,
        Category::SciFi,
        Category::Drama,
        Category::Romance,
        Category::Documentary,
        Category::Comedy,
    ];

    /// Bucket index of this category, the position in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Category::index`]; `None` for out-of-range values.
    ///
    /// Event scripts encode categories as their bucket index (0-5).
    pub fn from_index(index: usize) -> Option<Category> {
        Category::ALL.get(index).copied()
    }

    /// Human-readable label used when rendering the category table.
    pub fn label(self) -> &'static str {
        match self {
            Category::Horror => "Horror",
            Category::SciFi => "Sci-fi",
            Category::Drama => "Drama",
            Category::Romance => "Romance",
            Category::Documentary => "Documentary",
            Category::Comedy => "Comedy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Sequence node types
// =============================================================================
// The C-era layout reused one struct for catalog entries and watch
// history entries. They are distinct named types here so the two
// sequences cannot be accidentally interchanged.

/// A movie waiting in the intake queue, not yet placed into the catalog.
///
/// Owned exclusively by the intake queue until a drain moves its `info`
/// into a category bucket and discards the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMovie {
    pub info: MovieInfo,
    pub category: Category,
}

/// An active movie inside one category bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub info: MovieInfo,
}
