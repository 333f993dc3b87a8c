//! Recommendation requests, responses and the `Recommender` contract.
//!
//! A [`Recommender`] turns a [`RecommendationRequest`] into a ranked
//! [`RecommendationResponse`]. [`RecommendationFeed`] is the shape handed to
//! presentation code, where failures become an empty list plus a message.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{LookupError, ScoredEvent, UserId};

/// Parameters for a recommendation request.
///
/// The request names the user, the reference instant used for temporal
/// scoring and candidate filtering, and an optional cap on the number of
/// events returned.
///
/// # Examples
/// ```rust
/// use chrono::{DateTime, Utc};
/// use eventhub_core::{RecommendationRequest, UserId};
///
/// let request = RecommendationRequest {
///     user_id: UserId::from("user-1"),
///     now: DateTime::<Utc>::UNIX_EPOCH,
///     limit: Some(10),
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationRequest {
    /// User requesting recommendations.
    pub user_id: UserId,
    /// Reference instant for scoring.
    pub now: DateTime<Utc>,
    /// Maximum number of events to return; `None` returns every candidate.
    #[cfg_attr(feature = "serde", serde(default))]
    pub limit: Option<usize>,
}

/// Reasons a [`RecommendationRequest`] is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecommendationRequestValidationError {
    /// The user identifier was empty or whitespace.
    #[error("user id must not be blank")]
    BlankUser,
    /// A limit of zero would always produce an empty feed.
    #[error("limit must be greater than zero when provided")]
    ZeroLimit,
}

impl RecommendationRequest {
    /// Build an unlimited request.
    #[must_use]
    pub fn new(user_id: impl Into<UserId>, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            now,
            limit: None,
        }
    }

    /// Cap the number of returned events.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Validate the request, reporting the first problem found.
    ///
    /// # Errors
    /// Returns [`RecommendationRequestValidationError`] describing the
    /// offending field.
    pub fn validate_detailed(&self) -> Result<(), RecommendationRequestValidationError> {
        if self.user_id.is_blank() {
            return Err(RecommendationRequestValidationError::BlankUser);
        }
        if self.limit == Some(0) {
            return Err(RecommendationRequestValidationError::ZeroLimit);
        }
        Ok(())
    }

    /// Validate the request, collapsing every failure into
    /// [`RecommendError::InvalidRequest`].
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidRequest`] when validation fails.
    pub fn validate(&self) -> Result<(), RecommendError> {
        self.validate_detailed().map_err(RecommendError::InvalidRequest)
    }
}

/// Counters describing a recommendation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Events returned by the listing lookup.
    pub candidates_received: usize,
    /// Events that survived filtering and were scored.
    pub candidates_ranked: usize,
    /// Size of the user's followed-organizer set.
    pub followed_organizers: usize,
}

/// Response from a successful recommendation pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationResponse {
    /// Ranked events, best first.
    pub events: Vec<ScoredEvent>,
    /// Counters describing the pass.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Recommender::recommend`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    /// Request parameters were invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(#[source] RecommendationRequestValidationError),
    /// A backend lookup failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Produce a ranked event feed for a user.
///
/// Implementations should return [`RecommendError::InvalidRequest`] for
/// invalid parameters rather than panicking. Recommenders must be
/// `Send + Sync` so they can be shared across request handlers.
pub trait Recommender: Send + Sync {
    /// Rank candidate events for `request.user_id`.
    ///
    /// # Errors
    /// Returns [`RecommendError`] when the request is invalid or a lookup
    /// fails.
    fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, RecommendError>;
}

/// Feed handed to presentation layers: events plus an error indicator.
///
/// Failures never reach callers as partial rankings; they collapse to an
/// empty event list with the error message recorded.
///
/// # Examples
/// ```rust
/// use eventhub_core::{LookupError, RecommendError, RecommendationFeed};
///
/// let failure = RecommendError::Lookup(LookupError::Unavailable {
///     lookup: "candidate events",
///     reason: "timeout".into(),
/// });
/// let feed = RecommendationFeed::from_result(Err(failure));
/// assert!(feed.events.is_empty());
/// assert!(feed.error.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationFeed {
    /// Ranked events; empty when `error` is set.
    pub events: Vec<ScoredEvent>,
    /// Description of the failure, if any.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub error: Option<String>,
}

impl RecommendationFeed {
    /// Collapse a recommender result into a feed.
    #[must_use]
    pub fn from_result(result: Result<RecommendationResponse, RecommendError>) -> Self {
        match result {
            Ok(response) => Self {
                events: response.events,
                error: None,
            },
            Err(err) => Self {
                events: Vec::new(),
                error: Some(err.to_string()),
            },
        }
    }

    /// Report whether the feed carries an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
