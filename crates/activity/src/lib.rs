//! # Activity Crate
//!
//! Per-user activity state for the streaming service: the directory of
//! registered users, each user's watch-history stack, and each user's
//! doubly-linked suggestion list.
//!
//! ## Main Components
//!
//! - **directory**: Registered users and lookup/insert/remove
//! - **history**: LIFO stack of watched movies per user
//! - **suggestions**: Arena-backed doubly-linked suggestion list with
//!   the two-cursor insertion used by the alternating merge
//! - **error**: Error types for directory operations
//!
//! ## Example Usage
//!
//! ```
//! use activity::UserDirectory;
//! use catalog::MovieInfo;
//!
//! let mut directory = UserDirectory::new();
//! directory.insert(3)?;
//!
//! let user = directory.find_mut(3).unwrap();
//! user.history.push(MovieInfo::new(147, 2014));
//! assert_eq!(user.history.pop(), Some(MovieInfo::new(147, 2014)));
//! # Ok::<(), activity::ActivityError>(())
//! ```

// Public modules
pub mod directory;
pub mod error;
pub mod history;
pub mod suggestions;

// Re-export commonly used types for convenience
pub use directory::{User, UserDirectory};
pub use error::{ActivityError, Result};
pub use history::{HistoryEntry, WatchHistory};
pub use suggestions::{SuggestCursor, SuggestionIter, SuggestionList};
