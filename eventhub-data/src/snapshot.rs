//! Serialised snapshot document.
//!
//! Field names follow the English model; the Spanish column names used by
//! the backend export are accepted as aliases. Event rows are decoded one at
//! a time so a malformed row is skipped instead of losing the whole export.

use eventhub_core::{CandidateEvent, OrganizerId, UserId};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Export of the tables the recommender reads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Event listing, in backend order. Rows that fail to decode are dropped.
    #[serde(default, deserialize_with = "lenient_events")]
    pub events: Vec<CandidateEvent>,
    /// User-to-organizer follow relations.
    #[serde(default)]
    pub follows: Vec<Follow>,
    /// Per-user profile data.
    #[serde(default)]
    pub profiles: Vec<UserProfile>,
}

/// A user following an organizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follow {
    /// Follower.
    #[serde(alias = "usuario_id")]
    pub user_id: UserId,
    /// Followed organizer.
    #[serde(alias = "organizador_id")]
    pub organizer_id: OrganizerId,
}

/// Profile fields relevant to recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Profile owner.
    #[serde(alias = "usuario_id")]
    pub user_id: UserId,
    /// Free-text home location.
    #[serde(default, alias = "ubicacion")]
    pub location: Option<String>,
}

fn lenient_events<'de, D>(deserializer: D) -> Result<Vec<CandidateEvent>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(rows.into_iter().filter_map(decode_event_row).collect())
}

fn decode_event_row(row: Value) -> Option<CandidateEvent> {
    let id = row
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("<missing id>")
        .to_owned();
    serde_json::from_value(row)
        .inspect_err(|err| log::warn!("skipping event {id}: {err}"))
        .ok()
}
