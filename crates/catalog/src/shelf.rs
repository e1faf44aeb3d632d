//! The category catalog: six per-category sorted movie sequences.
//!
//! Buckets are filled exclusively by draining the intake queue. Because
//! the intake queue is globally sorted by id, appending each drained
//! movie to the back of its bucket keeps every bucket sorted, so a
//! whole drain costs O(n) in the size of the queue.

use crate::error::{CatalogError, Result};
use crate::intake::IntakeQueue;
use crate::types::{CATEGORY_COUNT, CatalogEntry, Category, MovieId, MovieInfo};
use tracing::debug;

/// The per-category sorted sequences holding all active movies.
///
/// Invariants:
/// - every bucket is strictly increasing by movie id;
/// - every bucket entry belongs to that bucket's category;
/// - a movie id appears in at most one bucket.
#[derive(Debug, Default)]
pub struct CategoryCatalog {
    buckets: [Vec<CatalogEntry>; CATEGORY_COUNT],
}

impl CategoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// O(1) append to the back of a bucket.
    ///
    /// Callers must only append ids greater than the bucket's current
    /// maximum; `absorb` guarantees this by draining a sorted queue.
    fn append_to_bucket(&mut self, category: Category, info: MovieInfo) {
        let bucket = &mut self.buckets[category.index()];
        debug_assert!(bucket.last().is_none_or(|e| e.info.id < info.id));
        bucket.push(CatalogEntry { info });
    }

    /// Drain the intake queue into the category buckets.
    ///
    /// Every staged movie is appended to the bucket matching its
    /// category, in queue order; the queue is empty afterward. Returns
    /// the number of movies moved. O(n) in the queue size.
    pub fn absorb(&mut self, intake: &mut IntakeQueue) -> usize {
        let drained = intake.take_all();
        let moved = drained.len();
        for pending in drained {
            self.append_to_bucket(pending.category, pending.info);
        }
        debug!(moved, "distributed intake queue into category buckets");
        moved
    }

    /// Look up a movie inside one bucket.
    ///
    /// Linear scan that exploits the sort order: stops as soon as an
    /// entry's id reaches the target.
    pub fn find_in_bucket(&self, category: Category, id: MovieId) -> Option<MovieInfo> {
        for entry in &self.buckets[category.index()] {
            if entry.info.id >= id {
                return (entry.info.id == id).then_some(entry.info);
            }
        }
        None
    }

    /// Look up a movie across all buckets, in [`Category::ALL`] order.
    pub fn find_anywhere(&self, id: MovieId) -> Option<(Category, MovieInfo)> {
        Category::ALL
            .iter()
            .find_map(|&cat| self.find_in_bucket(cat, id).map(|info| (cat, info)))
    }

    /// Like [`CategoryCatalog::find_anywhere`], but an error when absent.
    pub fn require(&self, id: MovieId) -> Result<MovieInfo> {
        self.find_anywhere(id)
            .map(|(_, info)| info)
            .ok_or(CatalogError::MovieNotFound { id })
    }

    /// Remove a movie from whichever bucket holds it.
    ///
    /// Scans buckets in [`Category::ALL`] order and stops at the first
    /// match (a movie belongs to exactly one bucket). Returns the
    /// bucket it was removed from, or `None` if no bucket held it.
    pub fn remove_by_id(&mut self, id: MovieId) -> Option<Category> {
        for &cat in Category::ALL.iter() {
            let bucket = &mut self.buckets[cat.index()];
            for (i, entry) in bucket.iter().enumerate() {
                if entry.info.id > id {
                    break;
                }
                if entry.info.id == id {
                    bucket.remove(i);
                    debug!(movie = id, category = %cat, "removed movie from catalog");
                    return Some(cat);
                }
            }
        }
        None
    }

    /// The entries of one bucket, ascending by id (for rendering).
    pub fn bucket(&self, category: Category) -> &[CatalogEntry] {
        &self.buckets[category.index()]
    }

    /// Total number of catalogued movies across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|b| b.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|b| b.is_empty())
    }
}
