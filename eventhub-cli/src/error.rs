//! Error types emitted by the EventHub CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use eventhub_core::{RecommendError, RecommendationRequestValidationError};
use eventhub_data::SnapshotError;
use thiserror::Error;

/// Errors emitted by the EventHub CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Option name.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Offending path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// `--now` was neither an RFC 3339 timestamp nor a `YYYY-MM-DD` date.
    #[error("invalid --now value {value:?}: expected RFC 3339 or YYYY-MM-DD")]
    InvalidTimestamp {
        /// Rejected input.
        value: String,
    },
    /// The recommendation request failed validation.
    #[error("invalid recommendation request: {0}")]
    InvalidRequest(#[source] RecommendationRequestValidationError),
    /// Loading the snapshot failed.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    /// The recommender rejected the request or a lookup failed.
    #[error("recommendation failed: {0}")]
    Recommend(#[source] RecommendError),
    /// Serializing the recommendation response failed.
    #[error("failed to serialize recommendation response: {0}")]
    SerializeResponse(#[source] serde_json::Error),
    /// Creating the output file failed.
    #[error("failed to create output file {path:?}: {source}")]
    CreateOutput {
        /// Requested output path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Writing the recommendation output failed.
    #[error("failed to write recommendation output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
