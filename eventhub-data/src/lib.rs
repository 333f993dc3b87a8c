//! Snapshot-backed data access for the EventHub recommender.
//!
//! Responsibilities:
//! - Parse JSON exports of the backend's events, follows and profiles.
//! - Answer the recommendation lookups defined in `eventhub-core`.
//!
//! Boundaries:
//! - Do not encode ranking or filtering rules (those live in
//!   `eventhub-scorer` and `eventhub-recommender`).
//! - Filesystem access goes through `eventhub-fs`.
//!
//! Invariants:
//! - A loaded directory is immutable and therefore `Send + Sync`.
//! - Events are reported in document order.

#![forbid(unsafe_code)]

mod error;
mod snapshot;
mod store;

pub use error::SnapshotError;
pub use snapshot::{Follow, Snapshot, UserProfile};
pub use store::SnapshotDirectory;
