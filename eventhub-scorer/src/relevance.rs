//! Relevance scoring that blends follows, location, timing and inventory.
//!
//! Each signal is computed independently and the contributions are summed.
//! With the default weights the follow bonus alone outranks the best
//! possible combination of the remaining signals.
#![forbid(unsafe_code)]

use eventhub_core::{CandidateEvent, EventScorer, ScoredEvent, UserContext, rank_events};

use crate::{ScoreWeights, ScorerError, availability, location_similarity, temporal_proximity};

/// Per-signal contributions to an event's score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    /// Follow bonus, either `0` or the configured bonus.
    pub follow: f64,
    /// Weighted location similarity.
    pub location: f64,
    /// Temporal proximity points.
    pub temporal: f64,
    /// Capped ticket availability points.
    pub availability: f64,
}

impl ScoreBreakdown {
    /// Sum of every contribution.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the total score is an additive blend"
    )]
    pub fn total(&self) -> f64 {
        self.follow + self.location + self.temporal + self.availability
    }
}

/// Scorer implementing the EventHub recommendation formula.
///
/// # Examples
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use eventhub_core::{CandidateEvent, EventScorer, TicketType, UserContext};
/// use eventhub_scorer::RecommendationScorer;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).single().ok_or("bad now")?;
/// let date = NaiveDate::from_ymd_opt(2025, 6, 6).ok_or("bad date")?;
/// let event = CandidateEvent::new("evt-1", "org-1", date)
///     .with_location("Bogotá, Colombia")
///     .with_ticket_type(TicketType::with_available("General", 120));
/// let context = UserContext::new(now).with_location("Bogotá, Colombia");
///
/// let scorer = RecommendationScorer::default();
/// let breakdown = scorer.breakdown(&event, &context);
/// assert_eq!(breakdown.location, 500.0);
/// assert_eq!(scorer.score(&event, &context), 635.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecommendationScorer {
    weights: ScoreWeights,
}

impl RecommendationScorer {
    /// Construct a scorer with custom weights.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeight`] when any weight is negative or
    /// not finite, and [`ScorerError::UnboundedScore`] when the weights
    /// combine into an infinite score.
    pub fn new(weights: ScoreWeights) -> Result<Self, ScorerError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights in use.
    #[must_use]
    pub const fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Compute each signal's contribution for `event`.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "location similarity is scaled by its weight"
    )]
    pub fn breakdown(&self, event: &CandidateEvent, context: &UserContext) -> ScoreBreakdown {
        let follow = if context.followed.contains(&event.organizer_id) {
            self.weights.follow_bonus
        } else {
            0.0
        };
        let similarity = location_similarity(context.location(), event.location.as_deref());
        ScoreBreakdown {
            follow,
            location: similarity * self.weights.location_weight,
            temporal: temporal_proximity(event.event_date, context.now, &self.weights),
            availability: availability(event.available_ticket_count(), &self.weights),
        }
    }

    /// Rank `events` for `context`, best first, ties in input order.
    #[must_use]
    pub fn rank(&self, events: &[CandidateEvent], context: &UserContext) -> Vec<ScoredEvent> {
        let ranked = rank_events(self, events, context);
        log::debug!(
            "ranked {} events against {} followed organizers",
            ranked.len(),
            context.followed.len()
        );
        ranked
    }
}

impl EventScorer for RecommendationScorer {
    fn score(&self, event: &CandidateEvent, context: &UserContext) -> f64 {
        <Self as EventScorer>::sanitise(self.breakdown(event, context).total())
    }
}
