//! Event recommendation scoring for EventHub.
//!
//! The crate ranks candidate events for a user by summing four independent
//! signals:
//! - **Follow bonus**: a flat bonus when the user follows the event's
//!   organizer. It outweighs every other signal combined.
//! - **Location similarity**: token overlap between the user's and the
//!   event's free-text locations, scaled by a weight.
//! - **Temporal proximity**: linearly decaying points for events in the next
//!   month.
//! - **Availability**: remaining ticket inventory, capped.
//!
//! [`rank`] applies the default [`ScoreWeights`]; [`RecommendationScorer`]
//! exposes custom weights, a per-signal [`ScoreBreakdown`], and implements
//! [`EventScorer`](eventhub_core::EventScorer) so the orchestration layer can
//! plug it in.
//!
//! # Examples
//!
//! ```
//! use chrono::{NaiveDate, TimeZone, Utc};
//! use eventhub_core::{CandidateEvent, FollowedOrganizers, TicketType};
//! use eventhub_scorer::rank;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).single().ok_or("bad now")?;
//! let soon = NaiveDate::from_ymd_opt(2025, 6, 6).ok_or("bad date")?;
//! let later = NaiveDate::from_ymd_opt(2025, 6, 26).ok_or("bad date")?;
//!
//! let local = CandidateEvent::new("local", "org-2", soon)
//!     .with_location("Bogotá, Colombia")
//!     .with_ticket_type(TicketType::with_available("General", 300));
//! let followed_event = CandidateEvent::new("followed", "org-1", later)
//!     .with_location("Madrid, España")
//!     .with_ticket_type(TicketType::with_available("General", 3));
//! let followed: FollowedOrganizers = ["org-1"].into_iter().collect();
//!
//! let ranked = rank(&[local, followed_event], &followed, Some("Bogotá, Colombia"), now);
//! assert_eq!(ranked[0].event.id.as_str(), "followed");
//! assert_eq!(ranked[0].score, 1_028.0);
//! assert_eq!(ranked[1].score, 635.0);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use chrono::{DateTime, Utc};
use eventhub_core::{CandidateEvent, FollowedOrganizers, ScoredEvent, UserContext};

mod error;
mod location;
mod relevance;
mod signals;
mod weights;

pub use error::ScorerError;
pub use location::{MAX_SIMILARITY, location_similarity};
pub use relevance::{RecommendationScorer, ScoreBreakdown};
pub use signals::{availability, days_until, temporal_proximity};
pub use weights::ScoreWeights;

/// Rank `events` for a user with the default weights.
///
/// Returns one [`ScoredEvent`] per input event, sorted by descending score.
/// Events with equal scores keep their input order. The input slice is left
/// untouched and a missing `user_location` simply scores zero for location.
#[must_use]
pub fn rank(
    events: &[CandidateEvent],
    followed: &FollowedOrganizers,
    user_location: Option<&str>,
    now: DateTime<Utc>,
) -> Vec<ScoredEvent> {
    let mut context = UserContext::new(now).with_followed(followed.clone());
    context.location = user_location.map(str::to_owned);
    RecommendationScorer::default().rank(events, &context)
}

#[cfg(test)]
mod tests;
