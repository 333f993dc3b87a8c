//! Read-only directory built from a [`Snapshot`].

use std::{collections::HashMap, fmt, io::BufReader, io::Read};

use camino::Utf8Path;
use eventhub_core::{
    CandidateEvent, EventListingLookup, FollowedOrganizerLookup, FollowedOrganizers, LookupError,
    UserId, UserProfileLookup,
};
use eventhub_fs::open_utf8_file;

use crate::{Snapshot, SnapshotError};

/// Directory answering recommendation lookups from an in-memory snapshot.
pub struct SnapshotDirectory {
    follows: HashMap<UserId, FollowedOrganizers>,
    locations: HashMap<UserId, String>,
    events: Vec<CandidateEvent>,
}

impl fmt::Debug for SnapshotDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotDirectory")
            .field("events", &self.events.len())
            .field("followers", &self.follows.len())
            .field("profiles", &self.locations.len())
            .finish_non_exhaustive()
    }
}

impl SnapshotDirectory {
    /// Load a snapshot document from `path`.
    ///
    /// # Errors
    /// Returns [`SnapshotError::Open`] when the file cannot be opened and
    /// [`SnapshotError::Parse`] when its contents are not a snapshot.
    pub fn open(snapshot_path: impl AsRef<Utf8Path>) -> Result<Self, SnapshotError> {
        let path = snapshot_path.as_ref();
        let file = open_utf8_file(path).map_err(|source| SnapshotError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            SnapshotError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        log::debug!("loaded snapshot from {path}");
        Ok(Self::from_snapshot(snapshot))
    }

    /// Decode a snapshot document from `reader`.
    ///
    /// # Errors
    /// Returns [`SnapshotError::Decode`] when the input is not a snapshot.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        let snapshot: Snapshot = serde_json::from_reader(reader).map_err(SnapshotError::Decode)?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Index an already decoded snapshot.
    ///
    /// Later profiles for the same user replace earlier ones; blank
    /// locations are treated as absent.
    #[must_use]
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let Snapshot {
            events,
            follows: follow_rows,
            profiles,
        } = snapshot;

        let mut follows: HashMap<UserId, FollowedOrganizers> = HashMap::new();
        for row in follow_rows {
            follows
                .entry(row.user_id)
                .or_default()
                .follow(row.organizer_id);
        }

        let mut locations = HashMap::new();
        for profile in profiles {
            match profile.location {
                Some(location) if !location.trim().is_empty() => {
                    locations.insert(profile.user_id, location);
                }
                _ => {
                    locations.remove(&profile.user_id);
                }
            }
        }

        log::debug!(
            "indexed snapshot: {} events, {} followers, {} located profiles",
            events.len(),
            follows.len(),
            locations.len()
        );
        Self {
            follows,
            locations,
            events,
        }
    }

    /// Number of events in the listing.
    #[must_use]
    pub const fn event_count(&self) -> usize {
        self.events.len()
    }
}

impl FollowedOrganizerLookup for SnapshotDirectory {
    fn followed_organizers(&self, user: &UserId) -> Result<FollowedOrganizers, LookupError> {
        Ok(self.follows.get(user).cloned().unwrap_or_default())
    }
}

impl UserProfileLookup for SnapshotDirectory {
    fn user_location(&self, user: &UserId) -> Result<Option<String>, LookupError> {
        Ok(self.locations.get(user).cloned())
    }
}

impl EventListingLookup for SnapshotDirectory {
    fn candidate_events(&self) -> Result<Vec<CandidateEvent>, LookupError> {
        Ok(self.events.clone())
    }
}
