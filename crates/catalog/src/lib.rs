//! # Catalog Crate
//!
//! In-memory movie catalog for the streaming service: the intake queue
//! of newly added movies and the six per-category sorted buckets that
//! hold every active movie.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieInfo, Category, node types)
//! - **intake**: Sorted staging queue for movies awaiting distribution
//! - **shelf**: The per-category buckets, filled by draining the intake
//! - **error**: Error types for catalog operations
//!
//! ## Example Usage
//!
//! ```
//! use catalog::{Category, CategoryCatalog, IntakeQueue};
//!
//! let mut intake = IntakeQueue::new();
//! intake.insert_sorted(147, Category::Comedy, 2014)?;
//! intake.insert_sorted(18, Category::Drama, 1976)?;
//!
//! let mut shelves = CategoryCatalog::new();
//! shelves.absorb(&mut intake);
//!
//! assert!(intake.is_empty());
//! assert!(shelves.find_anywhere(147).is_some());
//! # Ok::<(), catalog::CatalogError>(())
//! ```

// Public modules
pub mod error;
pub mod intake;
pub mod shelf;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use intake::IntakeQueue;
pub use shelf::CategoryCatalog;
pub use types::{
    // Type aliases
    MovieId,
    UserId,
    Year,
    // Core types
    CatalogEntry,
    MovieInfo,
    PendingMovie,
    // Enums
    CATEGORY_COUNT,
    Category,
};
