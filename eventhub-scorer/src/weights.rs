//! Tunable weights for the additive event score.
#![forbid(unsafe_code)]

use crate::ScorerError;

/// Multipliers and caps applied to each scoring signal.
///
/// The defaults make a followed organizer outweigh every other signal
/// combined: location tops out at `100 * 5`, temporal proximity at `100` and
/// availability at `50`, all below the `1000` follow bonus.
///
/// # Examples
/// ```
/// use eventhub_scorer::ScoreWeights;
///
/// let weights = ScoreWeights::default();
/// assert_eq!(weights.follow_bonus, 1000.0);
/// assert!(weights.max_secondary_score() < weights.follow_bonus);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Points added when the user follows the event's organizer.
    pub follow_bonus: f64,
    /// Multiplier applied to the `0..=100` location similarity.
    pub location_weight: f64,
    /// Events further out than this many days earn no temporal points.
    pub temporal_window_days: u32,
    /// Temporal points for an event starting tomorrow, before decay.
    pub temporal_ceiling: f64,
    /// Temporal points lost per day until the event.
    pub temporal_decay_per_day: f64,
    /// Upper bound on points earned from remaining ticket inventory.
    pub availability_cap: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            follow_bonus: 1_000.0,
            location_weight: 5.0,
            temporal_window_days: 30,
            temporal_ceiling: 100.0,
            temporal_decay_per_day: 3.0,
            availability_cap: 50.0,
        }
    }
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScorerError::InvalidWeight`] naming the first field that is
    /// negative or not finite, and [`ScorerError::UnboundedScore`] when the
    /// weights combine into a score that is not finite.
    pub fn validate(self) -> Result<Self, ScorerError> {
        let fields = [
            ("follow_bonus", self.follow_bonus),
            ("location_weight", self.location_weight),
            ("temporal_ceiling", self.temporal_ceiling),
            ("temporal_decay_per_day", self.temporal_decay_per_day),
            ("availability_cap", self.availability_cap),
        ];
        if let Some((field, value)) = fields
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(ScorerError::InvalidWeight { field, value });
        }
        let bounds = [
            ("max_secondary_score", self.max_secondary_score()),
            ("max_total_score", self.max_total_score()),
        ];
        match bounds.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((bound, value)) => Err(ScorerError::UnboundedScore { bound, value }),
            None => Ok(self),
        }
    }

    /// Highest score obtainable without the follow bonus.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "the bound is a weighted sum of signal maxima"
    )]
    pub fn max_secondary_score(&self) -> f64 {
        crate::location::MAX_SIMILARITY * self.location_weight
            + self.temporal_ceiling
            + self.availability_cap
    }

    /// Highest score obtainable by any event.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "follow bonus plus the secondary bound")]
    pub fn max_total_score(&self) -> f64 {
        self.follow_bonus + self.max_secondary_score()
    }
}
