//! Facade crate for the EventHub recommendation engine.
//!
//! This crate re-exports the core domain types and the default scorer, and
//! exposes the feed recommender and snapshot directory behind feature flags.

#![forbid(unsafe_code)]

pub use eventhub_core::{
    CandidateEvent, Diagnostics, EventDirectory, EventId, EventListingLookup, EventScorer,
    EventStatus, FollowedOrganizerLookup, FollowedOrganizers, LookupError, OrganizerId,
    RecommendError, RecommendationFeed, RecommendationRequest,
    RecommendationRequestValidationError, RecommendationResponse, Recommender, ScoredEvent,
    TicketType, UserContext, UserId, UserProfileLookup, parse_event_date, rank_events,
    sanitise_score,
};
pub use eventhub_scorer::{RecommendationScorer, ScoreBreakdown, ScoreWeights, ScorerError, rank};

#[cfg(feature = "recommender")]
pub use eventhub_recommender::FeedRecommender;

#[cfg(feature = "snapshot")]
pub use eventhub_data::{Snapshot, SnapshotDirectory, SnapshotError};

#[cfg(feature = "test-support")]
pub use eventhub_core::test_support;
