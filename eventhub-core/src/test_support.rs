//! Test-only, in-memory directory implementations used by unit and behaviour
//! tests.

use std::collections::HashMap;

use crate::{
    CandidateEvent, EventListingLookup, EventScorer, FollowedOrganizerLookup, FollowedOrganizers,
    LookupError, UserContext, UserId, UserProfileLookup,
};

/// In-memory directory answering every recommendation lookup.
///
/// Events are returned in insertion order without filtering.
#[derive(Debug, Default, Clone)]
pub struct MemoryDirectory {
    follows: HashMap<UserId, FollowedOrganizers>,
    locations: HashMap<UserId, String>,
    events: Vec<CandidateEvent>,
}

impl MemoryDirectory {
    /// Create a directory listing `events`.
    pub fn with_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = CandidateEvent>,
    {
        Self {
            events: events.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Append `event` to the listing.
    #[must_use]
    pub fn with_event(mut self, event: CandidateEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Record that `user` follows `organizer`.
    #[must_use]
    pub fn with_follow(mut self, user: &str, organizer: &str) -> Self {
        self.follows
            .entry(UserId::from(user))
            .or_default()
            .follow(organizer);
        self
    }

    /// Store a location preference for `user`.
    #[must_use]
    pub fn with_location(mut self, user: &str, location: &str) -> Self {
        self.locations
            .insert(UserId::from(user), location.to_owned());
        self
    }
}

impl FollowedOrganizerLookup for MemoryDirectory {
    fn followed_organizers(&self, user: &UserId) -> Result<FollowedOrganizers, LookupError> {
        Ok(self.follows.get(user).cloned().unwrap_or_default())
    }
}

impl UserProfileLookup for MemoryDirectory {
    fn user_location(&self, user: &UserId) -> Result<Option<String>, LookupError> {
        Ok(self.locations.get(user).cloned())
    }
}

impl EventListingLookup for MemoryDirectory {
    fn candidate_events(&self) -> Result<Vec<CandidateEvent>, LookupError> {
        Ok(self.events.clone())
    }
}

/// Lookup that a [`FailingDirectory`] should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailingLookup {
    /// Fail the followed-organizer lookup.
    Follows,
    /// Fail the user-profile lookup.
    Profile,
    /// Fail the event listing.
    Events,
}

/// Directory that delegates to a [`MemoryDirectory`] but fails one lookup.
#[derive(Debug, Clone)]
pub struct FailingDirectory {
    inner: MemoryDirectory,
    failing: FailingLookup,
}

impl FailingDirectory {
    /// Wrap `inner`, failing the `failing` lookup.
    #[must_use]
    pub const fn new(inner: MemoryDirectory, failing: FailingLookup) -> Self {
        Self { inner, failing }
    }

    fn check(&self, lookup: FailingLookup, name: &'static str) -> Result<(), LookupError> {
        if self.failing == lookup {
            return Err(LookupError::Unavailable {
                lookup: name,
                reason: "backend unreachable".to_owned(),
            });
        }
        Ok(())
    }
}

impl FollowedOrganizerLookup for FailingDirectory {
    fn followed_organizers(&self, user: &UserId) -> Result<FollowedOrganizers, LookupError> {
        self.check(FailingLookup::Follows, "followed organizers")?;
        self.inner.followed_organizers(user)
    }
}

impl UserProfileLookup for FailingDirectory {
    fn user_location(&self, user: &UserId) -> Result<Option<String>, LookupError> {
        self.check(FailingLookup::Profile, "user profile")?;
        self.inner.user_location(user)
    }
}

impl EventListingLookup for FailingDirectory {
    fn candidate_events(&self) -> Result<Vec<CandidateEvent>, LookupError> {
        self.check(FailingLookup::Events, "candidate events")?;
        self.inner.candidate_events()
    }
}

/// Test `EventScorer` that awards one point per followed organizer match.
#[derive(Debug, Copy, Clone, Default)]
pub struct FollowScorer;

impl EventScorer for FollowScorer {
    fn score(&self, event: &CandidateEvent, context: &UserContext) -> f64 {
        if context.followed.contains(&event.organizer_id) {
            1.0
        } else {
            0.0
        }
    }
}
