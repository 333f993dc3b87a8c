//! Temporal and inventory signals.
#![forbid(unsafe_code)]

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::ScoreWeights;

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days from `now` until the start of `event_date` (00:00 UTC),
/// rounded towards negative infinity.
///
/// # Examples
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use eventhub_scorer::days_until;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).single().ok_or("bad now")?;
/// let date = NaiveDate::from_ymd_opt(2025, 6, 6).ok_or("bad date")?;
/// assert_eq!(days_until(date, now), 4);
/// let yesterday = NaiveDate::from_ymd_opt(2025, 5, 31).ok_or("bad date")?;
/// assert_eq!(days_until(yesterday, now), -2);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn days_until(event_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let starts_at = event_date.and_time(NaiveTime::MIN).and_utc();
    starts_at
        .signed_duration_since(now)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
}

/// Points for how soon an event starts.
///
/// Events `d` days away with `0 < d <= temporal_window_days` earn
/// `max(0, temporal_ceiling - d * temporal_decay_per_day)`. Events already
/// under way, in the past, or beyond the window earn nothing.
///
/// # Examples
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use eventhub_scorer::{ScoreWeights, temporal_proximity};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let now = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).single().ok_or("bad now")?;
/// let in_five_days = NaiveDate::from_ymd_opt(2025, 6, 6).ok_or("bad date")?;
/// assert_eq!(temporal_proximity(in_five_days, now, &ScoreWeights::default()), 85.0);
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "temporal points decay linearly with distance in days"
)]
pub fn temporal_proximity(event_date: NaiveDate, now: DateTime<Utc>, weights: &ScoreWeights) -> f64 {
    let Ok(days) = u32::try_from(days_until(event_date, now)) else {
        return 0.0;
    };
    if days == 0 || days > weights.temporal_window_days {
        return 0.0;
    }
    (weights.temporal_ceiling - f64::from(days) * weights.temporal_decay_per_day).max(0.0)
}

/// Points for remaining ticket inventory, capped at `availability_cap`.
///
/// # Examples
/// ```
/// use eventhub_scorer::{ScoreWeights, availability};
///
/// let weights = ScoreWeights::default();
/// assert_eq!(availability(5, &weights), 5.0);
/// assert_eq!(availability(200, &weights), 50.0);
/// ```
#[must_use]
pub fn availability(available_tickets: u64, weights: &ScoreWeights) -> f64 {
    let count = u32::try_from(available_tickets).map_or(f64::from(u32::MAX), f64::from);
    count.min(weights.availability_cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};
    use rstest::{fixture, rstest};

    #[fixture]
    fn midnight() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0)
            .single()
            .expect("valid instant")
    }

    fn date_in(now: DateTime<Utc>, days: i64) -> NaiveDate {
        (now + TimeDelta::days(days)).date_naive()
    }

    #[rstest]
    #[case::tomorrow(1, 97.0)]
    #[case::five_days(5, 85.0)]
    #[case::twenty_five_days(25, 25.0)]
    #[case::window_edge(30, 10.0)]
    #[case::beyond_window(31, 0.0)]
    #[case::forty_days(40, 0.0)]
    #[case::today(0, 0.0)]
    #[case::past(-3, 0.0)]
    fn temporal_scenarios(midnight: DateTime<Utc>, #[case] offset: i64, #[case] expected: f64) {
        let date = date_in(midnight, offset);
        assert_eq!(
            temporal_proximity(date, midnight, &ScoreWeights::default()),
            expected
        );
    }

    #[rstest]
    fn partial_days_round_down(midnight: DateTime<Utc>) {
        let afternoon = midnight + TimeDelta::hours(15);
        let date = date_in(midnight, 5);
        assert_eq!(days_until(date, afternoon), 4);
        assert_eq!(
            temporal_proximity(date, afternoon, &ScoreWeights::default()),
            88.0
        );
    }

    #[rstest]
    fn decay_never_goes_negative(midnight: DateTime<Utc>) {
        let weights = ScoreWeights {
            temporal_window_days: 60,
            ..ScoreWeights::default()
        };
        let date = date_in(midnight, 50);
        assert_eq!(temporal_proximity(date, midnight, &weights), 0.0);
    }

    #[rstest]
    #[case(0, 0.0)]
    #[case(5, 5.0)]
    #[case(50, 50.0)]
    #[case(200, 50.0)]
    #[case(u64::MAX, 50.0)]
    fn availability_is_capped(#[case] tickets: u64, #[case] expected: f64) {
        assert_eq!(availability(tickets, &ScoreWeights::default()), expected);
    }
}
