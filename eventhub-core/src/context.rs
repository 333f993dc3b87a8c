//! Per-request user context handed to scorers.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::OrganizerId;

/// Organizers followed by the requesting user.
///
/// # Examples
/// ```
/// use eventhub_core::{FollowedOrganizers, OrganizerId};
///
/// let followed: FollowedOrganizers = ["org-1", "org-2", "org-1"].into_iter().collect();
/// assert_eq!(followed.len(), 2);
/// assert!(followed.contains(&OrganizerId::from("org-2")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FollowedOrganizers {
    organizers: HashSet<OrganizerId>,
}

impl FollowedOrganizers {
    /// Construct an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an organizer. Returns `false` when it was already present.
    pub fn follow(&mut self, organizer: impl Into<OrganizerId>) -> bool {
        self.organizers.insert(organizer.into())
    }

    /// Report whether `organizer` is followed.
    #[must_use]
    pub fn contains(&self, organizer: &OrganizerId) -> bool {
        self.organizers.contains(organizer)
    }

    /// Number of followed organizers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.organizers.len()
    }

    /// Report whether the user follows nobody.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.organizers.is_empty()
    }

    /// Iterate over followed organizers in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &OrganizerId> {
        self.organizers.iter()
    }
}

impl<I> FromIterator<I> for FollowedOrganizers
where
    I: Into<OrganizerId>,
{
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            organizers: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<I> Extend<I> for FollowedOrganizers
where
    I: Into<OrganizerId>,
{
    fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
        self.organizers.extend(iter.into_iter().map(Into::into));
    }
}

/// Everything a scorer needs to know about the requesting user.
///
/// `now` is injected so scoring stays a pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    /// Organizers the user follows.
    pub followed: FollowedOrganizers,
    /// Stored location preference, if any.
    pub location: Option<String>,
    /// Reference instant for temporal scoring.
    pub now: DateTime<Utc>,
}

impl UserContext {
    /// Build a context with no follows and no location.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            followed: FollowedOrganizers::new(),
            location: None,
            now,
        }
    }

    /// Replace the followed organizers.
    #[must_use]
    pub fn with_followed(mut self, followed: FollowedOrganizers) -> Self {
        self.followed = followed;
        self
    }

    /// Set the user's location preference.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Borrow the location as `&str`.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}
