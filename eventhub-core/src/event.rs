//! Candidate events and their ticket inventory.
//!
//! Events arrive fully materialised from the backend. Every field the scorer
//! reads is optional in practice, so the accessors here fold missing data to
//! neutral values instead of failing.

use chrono::NaiveDate;

use crate::{EventId, OrganizerId};

/// Publication state of an event record.
///
/// Only [`EventStatus::Published`] events are eligible for recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum EventStatus {
    /// Not yet visible to attendees.
    #[cfg_attr(feature = "serde", serde(alias = "borrador"))]
    Draft,
    /// Visible and selling tickets.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "publicado"))]
    Published,
    /// Called off by the organizer.
    #[cfg_attr(feature = "serde", serde(alias = "cancelado"))]
    Cancelled,
    /// Already took place.
    #[cfg_attr(feature = "serde", serde(alias = "finalizado"))]
    Finished,
    /// A state this crate does not recognise. Never recommended.
    #[cfg_attr(feature = "serde", serde(other))]
    Unknown,
}

/// One ticket category and its remaining inventory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TicketType {
    /// Display name, e.g. "General".
    #[cfg_attr(feature = "serde", serde(default, alias = "nombre"))]
    pub name: Option<String>,
    /// Remaining sellable tickets. Negative values are treated as sold out.
    #[cfg_attr(feature = "serde", serde(default, alias = "cantidad_disponible"))]
    pub available: Option<i64>,
}

impl TicketType {
    /// Build a ticket type with a known inventory.
    ///
    /// # Examples
    /// ```
    /// use eventhub_core::TicketType;
    ///
    /// let general = TicketType::with_available("General", 40);
    /// assert_eq!(general.remaining(), 40);
    /// ```
    #[must_use]
    pub fn with_available(name: impl Into<String>, available: i64) -> Self {
        Self {
            name: Some(name.into()),
            available: Some(available),
        }
    }

    /// Remaining inventory with missing or negative counts folded to zero.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.available
            .and_then(|count| u64::try_from(count).ok())
            .unwrap_or(0)
    }
}

/// An event eligible for a recommendation pass.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use eventhub_core::{CandidateEvent, TicketType};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let date = NaiveDate::from_ymd_opt(2025, 6, 10).ok_or("bad date")?;
/// let event = CandidateEvent::new("evt-1", "org-1", date)
///     .with_location("Bogotá, Colombia")
///     .with_ticket_type(TicketType::with_available("General", 30))
///     .with_ticket_type(TicketType::with_available("VIP", 5));
/// assert_eq!(event.available_ticket_count(), 35);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateEvent {
    /// Unique identifier.
    pub id: EventId,
    /// Organizer who owns the event.
    #[cfg_attr(feature = "serde", serde(alias = "organizador_id"))]
    pub organizer_id: OrganizerId,
    /// Human-readable title.
    #[cfg_attr(feature = "serde", serde(default, alias = "titulo"))]
    pub title: Option<String>,
    /// Free-text venue location, typically "City, Country".
    #[cfg_attr(feature = "serde", serde(default, alias = "ubicacion"))]
    pub location: Option<String>,
    /// Calendar date on which the event starts.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "fecha", deserialize_with = "serde_date::deserialize")
    )]
    pub event_date: NaiveDate,
    /// Publication state.
    #[cfg_attr(feature = "serde", serde(default, alias = "estado"))]
    pub status: EventStatus,
    /// Ticket categories with remaining inventory.
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "tipos_entrada", deserialize_with = "serde_tickets::deserialize")
    )]
    pub ticket_types: Vec<TicketType>,
}

impl CandidateEvent {
    /// Construct a published event without location or tickets.
    #[must_use]
    pub fn new(
        id: impl Into<EventId>,
        organizer_id: impl Into<OrganizerId>,
        event_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            organizer_id: organizer_id.into(),
            title: None,
            location: None,
            event_date,
            status: EventStatus::Published,
            ticket_types: Vec::new(),
        }
    }

    /// Set the free-text location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the publication state.
    #[must_use]
    pub const fn with_status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    /// Append a ticket category.
    #[must_use]
    pub fn with_ticket_type(mut self, ticket_type: TicketType) -> Self {
        self.ticket_types.push(ticket_type);
        self
    }

    /// Sum of remaining inventory across every ticket type.
    ///
    /// Saturates at `u64::MAX` rather than overflowing.
    #[must_use]
    pub fn available_ticket_count(&self) -> u64 {
        self.ticket_types
            .iter()
            .map(TicketType::remaining)
            .fold(0_u64, u64::saturating_add)
    }

    /// Report whether the event may be recommended on `today`.
    ///
    /// Published events dated today or later qualify.
    #[must_use]
    pub fn is_candidate_on(&self, today: NaiveDate) -> bool {
        self.status == EventStatus::Published && self.event_date >= today
    }
}

/// Parse the date portion of a backend date or timestamp string.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (converted to UTC first) and
/// naive `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DD HH:MM:SS` timestamps.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use eventhub_core::parse_event_date;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 6, 10);
/// assert_eq!(parse_event_date("2025-06-10"), expected);
/// assert_eq!(parse_event_date("2025-06-10T18:30:00"), expected);
/// assert_eq!(parse_event_date("2025-06-10T18:30:00Z"), expected);
/// assert_eq!(parse_event_date("next tuesday"), None);
/// ```
#[must_use]
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.with_timezone(&chrono::Utc).date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| chrono::NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|timestamp| timestamp.date())
}

#[cfg(feature = "serde")]
mod serde_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, de::Error};

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_event_date(&raw)
            .ok_or_else(|| D::Error::custom(format!("unrecognised event date '{raw}'")))
    }
}

#[cfg(feature = "serde")]
mod serde_tickets {
    use serde::{Deserialize, Deserializer};

    use super::TicketType;

    /// The backend returns `null` when an event has no ticket rows.
    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<TicketType>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Vec<TicketType>>::deserialize(deserializer)?.unwrap_or_default())
    }
}
