//! # Engine Crate
//!
//! The streaming service facade: one [`StreamingService`] owns the
//! intake queue, the category catalog and the user directory, and
//! exposes the eight catalogued events as operations:
//!
//! | Event | Operation |
//! |---|---|
//! | R | [`StreamingService::register_user`] |
//! | U | [`StreamingService::unregister_user`] |
//! | A | [`StreamingService::add_movie`] |
//! | D | [`StreamingService::distribute_movies`] |
//! | W | [`StreamingService::watch_movie`] |
//! | S | [`StreamingService::suggest_movies`] |
//! | F | [`StreamingService::filtered_search`] |
//! | T | [`StreamingService::take_off_movie`] |
//!
//! Expected failures ("user not found", "duplicate movie") come back
//! as [`EngineError`] values; nothing here panics on bad input.

pub mod error;
pub mod service;
pub mod snapshot;

pub use error::{EngineError, Result};
pub use service::{StreamingService, TakeOffReport};
pub use snapshot::Snapshot;
