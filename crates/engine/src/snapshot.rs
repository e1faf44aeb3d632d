//! Serializable view of the whole service state.
//!
//! Built on demand from the engine's enumeration accessors; the CLI
//! serializes it with serde_json for the `--snapshot` dump.

use catalog::{Category, MovieId, MovieInfo, UserId, Year};
use serde::Serialize;

use crate::service::StreamingService;

#[derive(Debug, Serialize)]
pub struct PendingSnapshot {
    pub id: MovieId,
    pub year: Year,
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct BucketSnapshot {
    pub category: Category,
    pub movies: Vec<MovieInfo>,
}

#[derive(Debug, Serialize)]
pub struct UserSnapshot {
    pub id: UserId,
    /// Most recently watched first
    pub watch_history: Vec<MovieInfo>,
    /// Head to tail
    pub suggestions: Vec<MovieInfo>,
}

/// Point-in-time copy of intake, catalog and every user's state.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub intake: Vec<PendingSnapshot>,
    pub catalog: Vec<BucketSnapshot>,
    pub users: Vec<UserSnapshot>,
}

impl Snapshot {
    pub fn capture(service: &StreamingService) -> Self {
        let intake = service
            .intake()
            .iter()
            .map(|pending| PendingSnapshot {
                id: pending.info.id,
                year: pending.info.year,
                category: pending.category,
            })
            .collect();

        let catalog = Category::ALL
            .iter()
            .map(|&category| BucketSnapshot {
                category,
                movies: service
                    .catalog()
                    .bucket(category)
                    .iter()
                    .map(|entry| entry.info)
                    .collect(),
            })
            .collect();

        let users = service
            .directory()
            .iter()
            .map(|user| UserSnapshot {
                id: user.id,
                watch_history: user.history.iter().map(|entry| entry.info).collect(),
                suggestions: user.suggestions.iter().collect(),
            })
            .collect();

        Self {
            intake,
            catalog,
            users,
        }
    }
}
