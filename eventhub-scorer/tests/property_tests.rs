//! Property-based tests for event ranking.
//!
//! These tests use `proptest` to assert invariants that must hold for every
//! candidate list, complementing the unit and behavioural scenarios.
//!
//! # Invariants tested
//!
//! - **Length preservation:** every input event appears exactly once.
//! - **Ordering:** scores are non-increasing down the ranking.
//! - **Score validity:** scores are finite and non-negative.
//! - **Follow dominance:** followed-organizer events precede all others.
//! - **Purity:** ranking twice yields the same result and leaves the input
//!   untouched.

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use eventhub_core::{CandidateEvent, FollowedOrganizers, TicketType};
use eventhub_scorer::{location_similarity, rank};
use proptest::prelude::*;

const ORGANIZERS: &[&str] = &["org-a", "org-b", "org-c", "org-d"];
const LOCATIONS: &[&str] = &[
    "Bogotá, Colombia",
    "Bogotá, Cundinamarca",
    "Medellín, Colombia",
    "Madrid, España",
    "Lima",
    "",
];

fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn event_strategy() -> impl Strategy<Value = CandidateEvent> {
    (
        0_usize..ORGANIZERS.len(),
        proptest::option::of(0_usize..LOCATIONS.len()),
        -60_i64..=120_i64,
        proptest::collection::vec(proptest::option::of(-10_i64..=400_i64), 0..4),
    )
        .prop_map(|(organizer, location, offset, tickets)| {
            let date = (reference_now() + TimeDelta::days(offset)).date_naive();
            let organizer_id = ORGANIZERS.get(organizer).copied().unwrap_or("org-a");
            let mut event =
                CandidateEvent::new(format!("evt-{organizer}-{offset}"), organizer_id, date);
            event.location = location
                .and_then(|index| LOCATIONS.get(index))
                .map(|raw| (*raw).to_owned());
            event.ticket_types = tickets
                .into_iter()
                .map(|available| TicketType {
                    name: None,
                    available,
                })
                .collect();
            event
        })
}

fn followed_strategy() -> impl Strategy<Value = FollowedOrganizers> {
    proptest::sample::subsequence(ORGANIZERS.to_vec(), 0..=ORGANIZERS.len())
        .prop_map(|organizers| organizers.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: ranking returns one entry per input event, best first.
    #[test]
    fn ranking_is_a_sorted_permutation(
        events in proptest::collection::vec(event_strategy(), 0..24),
        followed in followed_strategy(),
        user_location in proptest::option::of(proptest::sample::select(LOCATIONS.to_vec())),
    ) {
        let ranked = rank(&events, &followed, user_location, reference_now());

        prop_assert_eq!(ranked.len(), events.len());
        for pair in ranked.windows(2) {
            if let [first, second] = pair {
                prop_assert!(first.score >= second.score);
            }
        }
        for scored in &ranked {
            prop_assert!(scored.score.is_finite());
            prop_assert!(scored.score >= 0.0);
            prop_assert!(events.contains(&scored.event));
        }
    }

    /// Property: every followed-organizer event precedes every other event.
    #[test]
    fn followed_organizers_dominate(
        events in proptest::collection::vec(event_strategy(), 1..24),
        followed in followed_strategy(),
        user_location in proptest::option::of(proptest::sample::select(LOCATIONS.to_vec())),
    ) {
        let ranked = rank(&events, &followed, user_location, reference_now());

        let first_unfollowed = ranked
            .iter()
            .position(|scored| !followed.contains(&scored.event.organizer_id))
            .unwrap_or(ranked.len());
        let followed_after_unfollowed = ranked
            .iter()
            .skip(first_unfollowed)
            .any(|scored| followed.contains(&scored.event.organizer_id));
        prop_assert!(!followed_after_unfollowed);
    }

    /// Property: ranking is deterministic and does not modify its input.
    #[test]
    fn ranking_is_pure(
        events in proptest::collection::vec(event_strategy(), 0..16),
        followed in followed_strategy(),
    ) {
        let before = events.clone();
        let first = rank(&events, &followed, Some("Bogotá, Colombia"), reference_now());
        let second = rank(&events, &followed, Some("Bogotá, Colombia"), reference_now());

        prop_assert_eq!(&events, &before);
        prop_assert_eq!(first, second);
    }

    /// Property: location similarity stays within `0..=100` for arbitrary text.
    #[test]
    fn location_similarity_is_bounded(user in ".{0,24}", event in ".{0,24}") {
        let similarity = location_similarity(Some(user.as_str()), Some(event.as_str()));
        prop_assert!((0.0..=100.0).contains(&similarity));
    }
}
