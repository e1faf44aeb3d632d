//! The intake queue: movies staged for the catalog.
//!
//! Newly added movies wait here, kept in strictly increasing id order,
//! until a drain distributes them into the per-category buckets. The
//! queue supports no removal other than that full drain.

use crate::error::{CatalogError, Result};
use crate::types::{Category, MovieId, MovieInfo, PendingMovie, Year};

/// Sorted staging sequence for movies not yet placed into the catalog.
///
/// Invariant: entries are strictly increasing by movie id, so ids are
/// also unique. Kept as a `Vec` scanned front to back; insertion stops
/// at the first entry with id >= target, matching the O(n) sorted
/// splice of a singly-linked list without the pointer chasing.
#[derive(Debug, Default)]
pub struct IntakeQueue {
    pending: Vec<PendingMovie>,
}

impl IntakeQueue {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Stage a movie, keeping the queue sorted by id.
    ///
    /// Fails with [`CatalogError::DuplicateMovie`] if the id is already
    /// staged; the queue is left untouched in that case.
    pub fn insert_sorted(&mut self, id: MovieId, category: Category, year: Year) -> Result<()> {
        // Find the splice point: first entry with id >= target.
        let mut at = self.pending.len();
        for (i, entry) in self.pending.iter().enumerate() {
            if entry.info.id >= id {
                if entry.info.id == id {
                    return Err(CatalogError::DuplicateMovie { id });
                }
                at = i;
                break;
            }
        }

        self.pending.insert(
            at,
            PendingMovie {
                info: MovieInfo::new(id, year),
                category,
            },
        );
        Ok(())
    }

    /// Remove and return every staged movie, in id order.
    ///
    /// The queue is empty afterward. Used only by the catalog drain.
    pub(crate) fn take_all(&mut self) -> Vec<PendingMovie> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterate the staged movies in id order (for rendering).
    pub fn iter(&self) -> impl Iterator<Item = &PendingMovie> {
        self.pending.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(queue: &IntakeQueue) -> Vec<MovieId> {
        queue.iter().map(|p| p.info.id).collect()
    }

    #[test]
    fn test_insert_keeps_ascending_order() {
        let mut queue = IntakeQueue::new();
        for (id, cat, year) in [
            (10, Category::Drama, 1976),
            (18, Category::Drama, 1976),
            (147, Category::Comedy, 2014),
            (4, Category::Drama, 1976),
            (711, Category::Romance, 1976),
        ] {
            queue.insert_sorted(id, cat, year).unwrap();
            // Strictly increasing after every single insertion
            assert!(ids(&queue).windows(2).all(|w| w[0] < w[1]));
        }
        assert_eq!(ids(&queue), vec![4, 10, 18, 147, 711]);
    }

    #[test]
    fn test_duplicate_insert_is_rejected_without_side_effect() {
        let mut queue = IntakeQueue::new();
        queue.insert_sorted(18, Category::Drama, 1976).unwrap();
        queue.insert_sorted(25, Category::SciFi, 1976).unwrap();

        let before = ids(&queue);
        let err = queue.insert_sorted(18, Category::Comedy, 2000).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateMovie { id: 18 });
        assert_eq!(ids(&queue), before);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_insert_at_both_ends() {
        let mut queue = IntakeQueue::new();
        queue.insert_sorted(50, Category::Horror, 1990).unwrap();
        queue.insert_sorted(5, Category::Horror, 1990).unwrap();
        queue.insert_sorted(500, Category::Horror, 1990).unwrap();
        assert_eq!(ids(&queue), vec![5, 50, 500]);
    }

    #[test]
    fn test_take_all_empties_the_queue() {
        let mut queue = IntakeQueue::new();
        queue.insert_sorted(1, Category::Comedy, 2001).unwrap();
        queue.insert_sorted(2, Category::Drama, 2002).unwrap();

        let drained = queue.take_all();
        assert_eq!(drained.len(), 2);
        assert!(queue.is_empty());
    }
}
