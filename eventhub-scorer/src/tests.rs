//! Unit coverage for the `rank` entry point.
#![forbid(unsafe_code)]

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use eventhub_core::{CandidateEvent, FollowedOrganizers, ScoredEvent, TicketType};
use rstest::{fixture, rstest};

use crate::rank;

#[fixture]
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0)
        .single()
        .expect("valid instant")
}

fn date_in(now: DateTime<Utc>, days: i64) -> NaiveDate {
    (now + TimeDelta::days(days)).date_naive()
}

fn ids(ranked: &[ScoredEvent]) -> Vec<&str> {
    ranked.iter().map(|scored| scored.event.id.as_str()).collect()
}

#[rstest]
fn empty_input_yields_empty_output(now: DateTime<Utc>) {
    let followed: FollowedOrganizers = ["org-1"].into_iter().collect();
    assert!(rank(&[], &followed, Some("Bogotá, Colombia"), now).is_empty());
}

#[rstest]
fn followed_organizer_outranks_everything_else(now: DateTime<Utc>) {
    let followed: FollowedOrganizers = ["org-followed"].into_iter().collect();
    let events = [
        CandidateEvent::new("local", "org-other", date_in(now, 5))
            .with_location("Bogotá, Colombia")
            .with_ticket_type(TicketType::with_available("General", 200)),
        CandidateEvent::new("followed", "org-followed", date_in(now, 25))
            .with_location("Madrid, España")
            .with_ticket_type(TicketType::with_available("General", 10)),
    ];

    let ranked = rank(&events, &followed, Some("Bogotá, Colombia"), now);

    assert_eq!(ids(&ranked), ["followed", "local"]);
    let scores: Vec<f64> = ranked.iter().map(|scored| scored.score).collect();
    assert_eq!(scores, [1_035.0, 635.0]);
}

#[rstest]
fn rank_leaves_input_untouched(now: DateTime<Utc>) {
    let followed: FollowedOrganizers = ["org-2"].into_iter().collect();
    let events = vec![
        CandidateEvent::new("a", "org-1", date_in(now, 3)),
        CandidateEvent::new("b", "org-2", date_in(now, 12)).with_location("Cali, Colombia"),
    ];
    let before = events.clone();

    let ranked = rank(&events, &followed, Some("Cali"), now);

    assert_eq!(events, before);
    assert_eq!(ranked.len(), events.len());
}

#[rstest]
fn missing_user_location_scores_no_location_points(now: DateTime<Utc>) {
    let events = [
        CandidateEvent::new("a", "org-1", date_in(now, 60)).with_location("Bogotá, Colombia"),
        CandidateEvent::new("b", "org-1", date_in(now, 60)),
    ];

    let ranked = rank(&events, &FollowedOrganizers::new(), None, now);

    assert!(ranked.iter().all(|scored| scored.score == 0.0));
    assert_eq!(ids(&ranked), ["a", "b"]);
}

#[rstest]
fn equal_scores_keep_input_order(now: DateTime<Utc>) {
    let events: Vec<CandidateEvent> = ["first", "second", "third"]
        .into_iter()
        .map(|id| {
            CandidateEvent::new(id, "org", date_in(now, 10))
                .with_ticket_type(TicketType::with_available("General", 8))
        })
        .collect();

    let ranked = rank(&events, &FollowedOrganizers::new(), None, now);

    assert_eq!(ids(&ranked), ["first", "second", "third"]);
}

#[rstest]
#[case::exact("Bogotá, Colombia", 500.0)]
#[case::partial("Bogotá, Cundinamarca", 375.0)]
#[case::disjoint("Madrid, España", 0.0)]
fn location_contribution_uses_weight_of_five(
    now: DateTime<Utc>,
    #[case] event_location: &str,
    #[case] expected: f64,
) {
    let event = CandidateEvent::new("a", "org", date_in(now, 90)).with_location(event_location);

    let ranked = rank(&[event], &FollowedOrganizers::new(), Some("bogotá, colombia"), now);

    assert_eq!(ranked.first().map(|scored| scored.score), Some(expected));
}
