//! Score and rank candidate events for a user.
//!
//! The `EventScorer` trait assigns a relevance score to a
//! [`CandidateEvent`](crate::CandidateEvent) given the requesting user's
//! [`UserContext`](crate::UserContext). [`rank_events`] turns any scorer into
//! a stable, descending ranking.

use crate::{CandidateEvent, UserContext};

/// Calculate a relevance score for a candidate event.
///
/// Higher scores indicate a better match for the user. Implementations must
/// be thread-safe (`Send` + `Sync`) so a single scorer can serve concurrent
/// requests. The method is infallible; implementers must return `0.0` for any
/// factor whose input is missing.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return non-negative values.
///
/// Scores have no upper bound. Use [`EventScorer::sanitise`] to apply these
/// guards.
///
/// # Examples
///
/// ```rust
/// use chrono::{DateTime, NaiveDate, Utc};
/// use eventhub_core::{CandidateEvent, EventScorer, UserContext};
///
/// struct UnitScorer;
///
/// impl EventScorer for UnitScorer {
///     fn score(&self, _event: &CandidateEvent, _context: &UserContext) -> f64 {
///         1.0
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let date = NaiveDate::from_ymd_opt(2025, 6, 10).ok_or("bad date")?;
/// let event = CandidateEvent::new("evt-1", "org-1", date);
/// let context = UserContext::new(DateTime::<Utc>::UNIX_EPOCH);
/// assert_eq!(UnitScorer.score(&event, &context), 1.0);
/// # Ok(())
/// # }
/// ```
pub trait EventScorer: Send + Sync {
    /// Return a score for `event` according to `context`.
    fn score(&self, event: &CandidateEvent, context: &UserContext) -> f64;

    /// Validate a raw score.
    ///
    /// Returns `0.0` for non-finite or negative values; see [`sanitise_score`].
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        sanitise_score(score)
    }
}

impl<S: EventScorer + ?Sized> EventScorer for &S {
    fn score(&self, event: &CandidateEvent, context: &UserContext) -> f64 {
        (**self).score(event, context)
    }
}

impl<S: EventScorer + ?Sized> EventScorer for Box<S> {
    fn score(&self, event: &CandidateEvent, context: &UserContext) -> f64 {
        (**self).score(event, context)
    }
}

/// Clamp a raw score to a finite, non-negative value.
///
/// `NaN` and infinities become `0.0`, as do negative scores.
#[must_use]
pub const fn sanitise_score(score: f64) -> f64 {
    if score.is_finite() { score.max(0.0) } else { 0.0 }
}

/// A candidate event paired with its combined score.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredEvent {
    /// The scored event.
    pub event: CandidateEvent,
    /// Combined relevance score; finite and non-negative.
    pub score: f64,
}

/// Rank `events` by descending score.
///
/// The input slice is never modified; each event is cloned into the output.
/// Events with equal scores keep their input order. Scores are passed
/// through [`sanitise_score`] so a misbehaving scorer cannot poison the
/// ordering with `NaN`.
///
/// # Examples
///
/// ```rust
/// use chrono::{DateTime, NaiveDate, Utc};
/// use eventhub_core::{CandidateEvent, EventScorer, UserContext, rank_events};
///
/// struct TicketScorer;
///
/// impl EventScorer for TicketScorer {
///     fn score(&self, event: &CandidateEvent, _context: &UserContext) -> f64 {
///         if event.ticket_types.is_empty() { 0.0 } else { 1.0 }
///     }
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let date = NaiveDate::from_ymd_opt(2025, 6, 10).ok_or("bad date")?;
/// let sold_out = CandidateEvent::new("a", "org", date);
/// let on_sale = CandidateEvent::new("b", "org", date)
///     .with_ticket_type(eventhub_core::TicketType::with_available("General", 1));
/// let context = UserContext::new(DateTime::<Utc>::UNIX_EPOCH);
///
/// let ranked = rank_events(&TicketScorer, &[sold_out, on_sale], &context);
/// assert_eq!(ranked[0].event.id.as_str(), "b");
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn rank_events<S>(scorer: &S, events: &[CandidateEvent], context: &UserContext) -> Vec<ScoredEvent>
where
    S: EventScorer + ?Sized,
{
    let mut scored: Vec<ScoredEvent> = events
        .iter()
        .map(|event| ScoredEvent {
            score: sanitise_score(scorer.score(event, context)),
            event: event.clone(),
        })
        .collect();
    // `sort_by` is stable, which preserves input order among ties.
    scored.sort_by(|left, right| right.score.total_cmp(&left.score));
    scored
}
