//! # Streaming Service Engine
//!
//! This module coordinates the whole event surface:
//! 1. Stage new movies in the intake queue
//! 2. Distribute them into the category catalog
//! 3. Track watches on per-user history stacks
//! 4. Build suggestion lists by alternating merge or filter-merge
//! 5. Take movies off the service everywhere at once
//!
//! Everything runs single-threaded and synchronously: each operation
//! completes before the next begins, and no operation leaves partial
//! state behind on failure.

use activity::{ActivityError, User, UserDirectory};
use catalog::{
    CatalogEntry, Category, CategoryCatalog, IntakeQueue, MovieId, MovieInfo, UserId, Year,
};
use tracing::{info, warn};

use crate::error::Result;

/// Outcome of taking a movie off the service.
///
/// Removal from each user's suggestion list is a distinct observable
/// effect; the catalog removal happens once, afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakeOffReport {
    /// Users whose suggestion list contained the movie, in directory order
    pub removed_for: Vec<UserId>,
    /// Bucket the movie was removed from, `None` if it was not catalogued
    pub removed_from: Option<Category>,
}

/// The in-memory streaming service: one catalog, one user directory.
#[derive(Debug, Default)]
pub struct StreamingService {
    intake: IntakeQueue,
    catalog: CategoryCatalog,
    directory: UserDirectory,
}

impl StreamingService {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // User events
    // -------------------------------------------------------------------------

    /// Register a user. Fails on a duplicate id.
    pub fn register_user(&mut self, uid: UserId) -> Result<()> {
        self.directory.insert(uid)?;
        info!(user = uid, "user registered");
        Ok(())
    }

    /// Unregister a user, dropping their suggestion list and history.
    pub fn unregister_user(&mut self, uid: UserId) -> Result<()> {
        self.directory.remove(uid)?;
        info!(user = uid, "user unregistered");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Catalog events
    // -------------------------------------------------------------------------

    /// Stage a movie in the intake queue. Fails on a duplicate id.
    pub fn add_movie(&mut self, id: MovieId, category: Category, year: Year) -> Result<()> {
        self.intake.insert_sorted(id, category, year)?;
        info!(movie = id, category = %category, year, "movie staged for intake");
        Ok(())
    }

    /// Drain the intake queue into the category buckets.
    ///
    /// A no-op when the intake queue is empty. Returns how many movies
    /// were distributed.
    pub fn distribute_movies(&mut self) -> usize {
        let moved = self.catalog.absorb(&mut self.intake);
        info!(moved, "distributed new movies");
        moved
    }

    /// Push a catalogued movie onto a user's watch history.
    ///
    /// Fails if the user is unregistered or the movie is in no bucket;
    /// the history is untouched in either case. Returns the recorded
    /// movie info.
    pub fn watch_movie(&mut self, uid: UserId, id: MovieId) -> Result<MovieInfo> {
        if !self.directory.contains(uid) {
            return Err(ActivityError::UserNotFound { id: uid }.into());
        }
        let info = self.catalog.require(id)?;
        if let Some(user) = self.directory.find_mut(uid) {
            user.history.push(info);
        }
        info!(user = uid, movie = id, "watch recorded");
        Ok(info)
    }

    // -------------------------------------------------------------------------
    // Suggestion events
    // -------------------------------------------------------------------------

    /// Extend a user's suggestion list from other users' histories.
    ///
    /// Walks the directory once in registration order, skipping the
    /// target. Every other user contributes their single most recent
    /// watched movie; users with empty history contribute nothing and
    /// do not advance the alternation. Odd-numbered contributions go
    /// right of a cursor anchored at the list's current head,
    /// even-numbered ones left of a cursor anchored at the current
    /// tail, so the existing list grows outward on both ends at once.
    /// O(number of users). Returns the number of contributions.
    pub fn suggest_movies(&mut self, uid: UserId) -> Result<usize> {
        if !self.directory.contains(uid) {
            return Err(ActivityError::UserNotFound { id: uid }.into());
        }

        // Pop the contributions first, in directory order. The engine
        // is single-threaded, so this is indistinguishable from
        // interleaving the pops with the inserts, and it keeps one
        // mutable borrow of the directory at a time.
        let mut contributions: Vec<MovieInfo> = Vec::new();
        for user in self.directory.iter_mut() {
            if user.id == uid {
                continue;
            }
            if let Some(info) = user.history.pop() {
                contributions.push(info);
            }
        }

        let Some(target) = self.directory.find_mut(uid) else {
            return Err(ActivityError::UserNotFound { id: uid }.into());
        };
        let mut right = target.suggestions.head_cursor();
        let mut left = target.suggestions.tail_cursor();
        for (k, info) in contributions.iter().enumerate() {
            // k counts successful contributors only; the first goes right.
            if k % 2 == 0 {
                target.suggestions.insert_right_of(&mut right, *info);
            } else {
                target.suggestions.insert_left_of(&mut left, *info);
            }
        }

        info!(
            user = uid,
            contributions = contributions.len(),
            "suggestions merged from other users"
        );
        Ok(contributions.len())
    }

    /// Append a category/year filter-merge to a user's suggestion list.
    ///
    /// Treats the two category buckets as sorted runs and merges them
    /// into one run sorted by id, skipping movies released before
    /// `min_year`. The run is spliced onto the tail of the target's
    /// existing list. O(n1 + n2). Returns how many movies were
    /// appended.
    pub fn filtered_search(
        &mut self,
        uid: UserId,
        category1: Category,
        category2: Category,
        min_year: Year,
    ) -> Result<usize> {
        if !self.directory.contains(uid) {
            return Err(ActivityError::UserNotFound { id: uid }.into());
        }

        let first = self.catalog.bucket(category1);
        // Merging a bucket against itself would emit every movie
        // twice; an identical second category contributes nothing.
        let second: &[CatalogEntry] = if category1 == category2 {
            &[]
        } else {
            self.catalog.bucket(category2)
        };
        let run = filter_merge(first, second, min_year);
        let appended = run.len();

        if appended == 0 {
            warn!(user = uid, %category1, %category2, min_year, "filtered search matched nothing");
        }
        if let Some(target) = self.directory.find_mut(uid) {
            target.suggestions.append(run);
        }
        info!(user = uid, appended, "filtered search appended suggestions");
        Ok(appended)
    }

    // -------------------------------------------------------------------------
    // Take-off
    // -------------------------------------------------------------------------

    /// Remove a movie from every suggestion list and from the catalog.
    ///
    /// Suggestion lists first, catalog second; absent entries are
    /// silently skipped, so a second call is a no-op.
    pub fn take_off_movie(&mut self, id: MovieId) -> TakeOffReport {
        let mut removed_for = Vec::new();
        for user in self.directory.iter_mut() {
            if user.suggestions.remove_by_id(id) {
                removed_for.push(user.id);
            }
        }
        let removed_from = self.catalog.remove_by_id(id);
        info!(
            movie = id,
            suggestion_lists = removed_for.len(),
            catalogued = removed_from.is_some(),
            "movie taken off the service"
        );
        TakeOffReport {
            removed_for,
            removed_from,
        }
    }

    // -------------------------------------------------------------------------
    // Read-only enumeration, for rendering and snapshots
    // -------------------------------------------------------------------------

    pub fn intake(&self) -> &IntakeQueue {
        &self.intake
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn user(&self, uid: UserId) -> Option<&User> {
        self.directory.find(uid)
    }
}

/// Two-pointer merge of two sorted bucket runs under a year filter.
///
/// Entries below `min_year` on either side are skipped without being
/// consumed; of the two surviving fronts the smaller id is copied out
/// and that run advances; once a run is exhausted the other's filtered
/// remainder is appended in order.
fn filter_merge(
    first: &[CatalogEntry],
    second: &[CatalogEntry],
    min_year: Year,
) -> activity::SuggestionList {
    let mut run = activity::SuggestionList::new();
    let mut i = 0;
    let mut j = 0;
    loop {
        while first.get(i).is_some_and(|e| e.info.year < min_year) {
            i += 1;
        }
        while second.get(j).is_some_and(|e| e.info.year < min_year) {
            j += 1;
        }
        match (first.get(i), second.get(j)) {
            (Some(a), Some(b)) => {
                if a.info.id < b.info.id {
                    run.push_back(a.info);
                    i += 1;
                } else {
                    run.push_back(b.info);
                    j += 1;
                }
            }
            (Some(a), None) => {
                run.push_back(a.info);
                i += 1;
            }
            (None, Some(b)) => {
                run.push_back(b.info);
                j += 1;
            }
            (None, None) => break,
        }
    }
    run
}
