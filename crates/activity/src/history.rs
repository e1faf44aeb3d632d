//! Per-user watch history, a last-in-first-out stack of watched movies.

use catalog::MovieInfo;
use serde::Serialize;

/// One watched movie on the history stack.
///
/// Structurally this is just a movie record, but it is a distinct type
/// from [`catalog::CatalogEntry`]: a history entry is a copy of the
/// movie's info at watch time, never a node shared with the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub info: MovieInfo,
}

/// Stack of watched movies, most recent on top. Bounded only by memory.
#[derive(Debug, Default)]
pub struct WatchHistory {
    entries: Vec<HistoryEntry>,
}

impl WatchHistory {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// O(1) push of the most recently watched movie.
    pub fn push(&mut self, info: MovieInfo) {
        self.entries.push(HistoryEntry { info });
    }

    /// Remove and return the most recent entry.
    ///
    /// An empty stack yields `None`; this is a valid result, not an
    /// error. The suggestion merge relies on it to detect "this user
    /// has no more history".
    pub fn pop(&mut self) -> Option<MovieInfo> {
        self.entries.pop().map(|e| e.info)
    }

    /// Most recent entry without removing it; `None` when empty.
    pub fn peek(&self) -> Option<MovieInfo> {
        self.entries.last().map(|e| e.info)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries top-down, most recently watched first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }
}
