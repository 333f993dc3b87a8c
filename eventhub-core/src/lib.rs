//! Core domain types for the EventHub recommendation engine.
//!
//! The crate defines the candidate events and user context that scorers
//! consume, the [`EventScorer`] trait with a stable [`rank_events`] helper,
//! the backend lookup traits the orchestration layer reads through, and the
//! [`Recommender`] contract with its request and response types.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod context;
pub mod directory;
mod event;
mod ids;
pub mod recommender;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use context::{FollowedOrganizers, UserContext};
pub use directory::{
    EventDirectory, EventListingLookup, FollowedOrganizerLookup, LookupError, UserProfileLookup,
};
pub use event::{CandidateEvent, EventStatus, TicketType, parse_event_date};
pub use ids::{EventId, OrganizerId, UserId};
pub use recommender::{
    Diagnostics, RecommendError, RecommendationFeed, RecommendationRequest,
    RecommendationRequestValidationError, RecommendationResponse, Recommender,
};
pub use scorer::{EventScorer, ScoredEvent, rank_events, sanitise_score};
#[cfg(any(test, feature = "test-support"))]
pub use test_support::{FailingDirectory, FailingLookup, FollowScorer, MemoryDirectory};
