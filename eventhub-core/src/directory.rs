//! Read-only lookups against the backend that feeds recommendations.
//!
//! Each trait mirrors one query the recommendation flow performs: the
//! organizers a user follows, the user's stored location, and the listing of
//! candidate events. Implementations own their I/O and surface failures as
//! [`LookupError`] so the orchestration layer can degrade gracefully.

use thiserror::Error;

use crate::{CandidateEvent, FollowedOrganizers, UserId};

/// Errors raised by backend lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The backing store could not answer the query.
    #[error("{lookup} lookup failed: {reason}")]
    Unavailable {
        /// Name of the lookup that failed.
        lookup: &'static str,
        /// Human-readable cause.
        reason: String,
    },
    /// A stored record could not be interpreted.
    #[error("{lookup} lookup returned a malformed record: {reason}")]
    Malformed {
        /// Name of the lookup that failed.
        lookup: &'static str,
        /// Human-readable cause.
        reason: String,
    },
}

/// Fetch the organizers a user follows.
pub trait FollowedOrganizerLookup: Send + Sync {
    /// Return every organizer `user` follows. Unknown users follow nobody.
    ///
    /// # Errors
    /// Returns [`LookupError`] when the backing store cannot be queried.
    fn followed_organizers(&self, user: &UserId) -> Result<FollowedOrganizers, LookupError>;
}

/// Fetch a user's stored location preference.
pub trait UserProfileLookup: Send + Sync {
    /// Return the location stored for `user`, if any.
    ///
    /// # Errors
    /// Returns [`LookupError`] when the backing store cannot be queried.
    fn user_location(&self, user: &UserId) -> Result<Option<String>, LookupError>;
}

/// List events that may be recommended.
pub trait EventListingLookup: Send + Sync {
    /// Return candidate events in listing order.
    ///
    /// Implementations may pre-filter to published, upcoming events; callers
    /// must not rely on it.
    ///
    /// # Errors
    /// Returns [`LookupError`] when the backing store cannot be queried.
    fn candidate_events(&self) -> Result<Vec<CandidateEvent>, LookupError>;
}

/// Convenience bound for stores that answer every recommendation lookup.
pub trait EventDirectory: FollowedOrganizerLookup + UserProfileLookup + EventListingLookup {}

impl<T> EventDirectory for T where T: FollowedOrganizerLookup + UserProfileLookup + EventListingLookup
{}
