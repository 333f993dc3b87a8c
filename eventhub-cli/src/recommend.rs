//! Recommend command implementation for the EventHub CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Parser;
use eventhub_core::{RecommendationRequest, RecommendationResponse, Recommender, UserId};
use eventhub_data::SnapshotDirectory;
use eventhub_recommender::FeedRecommender;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_LIMIT, ARG_NOW, ARG_OUTPUT, ARG_SNAPSHOT, ARG_USER, CliError, ENV_SNAPSHOT, ENV_USER,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the published, upcoming events in a JSON snapshot for \
                 one user. Events by followed organizers come first, then \
                 nearby, imminent and well-stocked events.",
    about = "Rank snapshot events for a user"
)]
#[ortho_config(prefix = "EVENTHUB")]
pub(crate) struct RecommendArgs {
    /// Path to the JSON snapshot of events, follows and profiles.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) snapshot: Option<Utf8PathBuf>,
    /// Identifier of the user to recommend for.
    #[arg(long = ARG_USER, value_name = "id")]
    #[serde(default)]
    pub(crate) user: Option<String>,
    /// Reference instant (RFC 3339) or date (YYYY-MM-DD); defaults to now.
    #[arg(long = ARG_NOW, value_name = "timestamp")]
    #[serde(default)]
    pub(crate) now: Option<String>,
    /// Maximum number of events to return.
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Write the response to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the snapshot document.
    pub(crate) snapshot: Utf8PathBuf,
    /// User to recommend for.
    pub(crate) user: UserId,
    /// Reference instant for scoring and filtering.
    pub(crate) now: DateTime<Utc>,
    /// Optional cap on returned events.
    pub(crate) limit: Option<usize>,
    /// Optional output file.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        let path = &self.snapshot;
        match eventhub_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_SNAPSHOT,
                path: path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_SNAPSHOT,
                    path: path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_SNAPSHOT,
                path: path.clone(),
                source,
            }),
        }
    }

    pub(crate) fn request(&self) -> RecommendationRequest {
        RecommendationRequest {
            user_id: self.user.clone(),
            now: self.now,
            limit: self.limit,
        }
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let snapshot = args.snapshot.ok_or(CliError::MissingArgument {
            field: ARG_SNAPSHOT,
            env: ENV_SNAPSHOT,
        })?;
        let user = args.user.map(UserId::new).ok_or(CliError::MissingArgument {
            field: ARG_USER,
            env: ENV_USER,
        })?;
        let now = args
            .now
            .as_deref()
            .map_or_else(|| Ok(Utc::now()), parse_now)?;

        Ok(Self {
            snapshot,
            user,
            now,
            limit: args.limit,
            output: args.output,
        })
    }
}

/// Parse `--now` as an RFC 3339 instant or a bare date at midnight UTC.
pub(crate) fn parse_now(raw: &str) -> Result<DateTime<Utc>, CliError> {
    let trimmed = raw.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| CliError::InvalidTimestamp {
            value: raw.to_owned(),
        })
}

/// Builds a recommender for the current invocation.
pub(super) trait RecommenderBuilder {
    fn build(&self, config: &RecommendConfig) -> Result<Box<dyn Recommender>, CliError>;
}

pub(super) struct SnapshotRecommenderBuilder;

impl RecommenderBuilder for SnapshotRecommenderBuilder {
    fn build(&self, config: &RecommendConfig) -> Result<Box<dyn Recommender>, CliError> {
        let directory = SnapshotDirectory::open(&config.snapshot)?;
        Ok(Box::new(FeedRecommender::with_default_scorer(directory)))
    }
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &SnapshotRecommenderBuilder, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn RecommenderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_recommend_config(args)?;
    let response = execute_recommend(&config, builder)?;
    config.output.as_deref().map_or_else(
        || write_response(writer, &response),
        |path| write_response_file(path, &response),
    )
}

fn resolve_recommend_config(args: RecommendArgs) -> Result<RecommendConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_recommend(
    config: &RecommendConfig,
    builder: &dyn RecommenderBuilder,
) -> Result<RecommendationResponse, CliError> {
    let request = config.request();
    request
        .validate_detailed()
        .map_err(CliError::InvalidRequest)?;
    let recommender = builder.build(config)?;
    recommender.recommend(&request).map_err(CliError::Recommend)
}

fn write_response_file(path: &Utf8Path, response: &RecommendationResponse) -> Result<(), CliError> {
    let mut file = eventhub_fs::create_utf8_file(path).map_err(|source| CliError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    write_response(&mut file, response)
}

fn write_response(
    writer: &mut dyn Write,
    response: &RecommendationResponse,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(response).map_err(CliError::SerializeResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
