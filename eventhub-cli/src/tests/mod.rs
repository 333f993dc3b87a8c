//! Shared test harness modules for the EventHub CLI.

use super::*;
use crate::recommend::{
    RecommendConfig, RecommenderBuilder, SnapshotRecommenderBuilder, config_from_layers_for_test,
    parse_now, run_recommend_with,
};

mod helpers;
mod recommend_steps;
