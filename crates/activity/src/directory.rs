//! The user directory: every registered user and their per-user state.
//!
//! The C-era directory terminated its list with a mutable guard node
//! whose id was overwritten during every search. That trick is not
//! reentrant and buys nothing here; this directory does an explicit
//! bounds-checked linear search instead.

use crate::error::{ActivityError, Result};
use crate::history::WatchHistory;
use crate::suggestions::SuggestionList;
use catalog::UserId;
use tracing::debug;

/// One registered user with their watch history and suggestion list.
///
/// Both owned lists die with the user: unregistration drops them.
#[derive(Debug)]
pub struct User {
    pub id: UserId,
    pub history: WatchHistory,
    pub suggestions: SuggestionList,
}

impl User {
    fn new(id: UserId) -> Self {
        Self {
            id,
            history: WatchHistory::new(),
            suggestions: SuggestionList::new(),
        }
    }
}

/// Registered users in registration order.
///
/// Registration order matters: the suggestion merge scans the
/// directory in this order, and the alternation of contributions onto
/// the target's list depends on it. User ids are unique, enforced at
/// insertion.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }

    /// Find a user by id.
    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn find_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|user| user.id == id)
    }

    pub fn contains(&self, id: UserId) -> bool {
        self.position(id).is_some()
    }

    /// Register a user with empty history and suggestions.
    ///
    /// Fails with [`ActivityError::DuplicateUser`] if the id is taken.
    pub fn insert(&mut self, id: UserId) -> Result<()> {
        if self.contains(id) {
            return Err(ActivityError::DuplicateUser { id });
        }
        self.users.push(User::new(id));
        debug!(user = id, "registered user");
        Ok(())
    }

    /// Unregister a user, dropping their suggestion list and history.
    ///
    /// Fails with [`ActivityError::UserNotFound`] if absent.
    pub fn remove(&mut self, id: UserId) -> Result<()> {
        let at = self
            .position(id)
            .ok_or(ActivityError::UserNotFound { id })?;
        self.users.remove(at);
        debug!(user = id, "unregistered user");
        Ok(())
    }

    /// Iterate users in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut User> {
        self.users.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
