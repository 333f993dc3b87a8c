//! Errors raised while loading snapshots.

use std::io;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Error raised when a snapshot cannot be read or decoded.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Opening the snapshot file failed.
    #[error("failed to open snapshot at {path}: {source}")]
    Open {
        /// Location of the snapshot on disk.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// The snapshot file was not a valid snapshot document.
    #[error("failed to parse snapshot at {path}: {source}")]
    Parse {
        /// Location of the snapshot on disk.
        path: Utf8PathBuf,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
    /// A snapshot read from an arbitrary reader was not valid.
    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] serde_json::Error),
}
