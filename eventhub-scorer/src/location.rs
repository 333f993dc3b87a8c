//! Free-text location similarity.
//!
//! Locations are compared as comma-separated token lists, so
//! `"Bogotá, Colombia"` becomes `["bogotá", "colombia"]`. The heuristic knows
//! nothing about geography: it rewards shared or overlapping place names and
//! nothing else.
#![forbid(unsafe_code)]

/// Similarity awarded to an exact (case-insensitive, trimmed) match.
pub const MAX_SIMILARITY: f64 = 100.0;

/// Floor awarded to any partial token overlap.
const PARTIAL_FLOOR: f64 = 50.0;

/// Compare a user's location with an event's location.
///
/// Returns a similarity in `0.0..=100.0`:
/// - `0` when either side is absent or blank, or no tokens overlap.
/// - `100` for an exact match after trimming and lowercasing.
/// - `50 + matches / max(user_tokens, event_tokens) * 50`, capped at `100`,
///   when at least one user token is a substring of, or contains, an event
///   token.
///
/// # Examples
/// ```
/// use eventhub_scorer::location_similarity;
///
/// assert_eq!(location_similarity(Some("Bogotá, Colombia"), Some("bogotá, colombia ")), 100.0);
/// assert_eq!(location_similarity(Some("Bogotá, Colombia"), Some("Bogotá, Cundinamarca")), 75.0);
/// assert_eq!(location_similarity(Some("Bogotá, Colombia"), Some("Madrid, España")), 0.0);
/// assert_eq!(location_similarity(None, Some("Madrid, España")), 0.0);
/// ```
#[must_use]
pub fn location_similarity(user_location: Option<&str>, event_location: Option<&str>) -> f64 {
    let (Some(user), Some(event)) = (normalise(user_location), normalise(event_location)) else {
        return 0.0;
    };
    if user == event {
        return MAX_SIMILARITY;
    }

    let user_tokens = tokens(&user);
    let event_tokens = tokens(&event);
    let matches = user_tokens
        .iter()
        .filter(|user_token| {
            event_tokens
                .iter()
                .any(|event_token| overlaps(user_token, event_token))
        })
        .count();
    if matches == 0 {
        return 0.0;
    }
    partial_similarity(matches, user_tokens.len().max(event_tokens.len()))
}

fn normalise(location: Option<&str>) -> Option<String> {
    let trimmed = location?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn tokens(location: &str) -> Vec<&str> {
    location
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

fn overlaps(left: &str, right: &str) -> bool {
    left.contains(right) || right.contains(left)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "token counts are tiny and the ratio is inherently fractional"
)]
fn partial_similarity(matches: usize, denominator: usize) -> f64 {
    let ratio = matches as f64 / denominator.max(1) as f64;
    (PARTIAL_FLOOR + ratio * PARTIAL_FLOOR).min(MAX_SIMILARITY)
}
