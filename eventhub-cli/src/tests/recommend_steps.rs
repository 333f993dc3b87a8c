//! Behaviour-driven step definitions driving the recommend CLI scenarios.

use super::helpers::Workspace;
use super::*;
use camino::Utf8PathBuf;
use eventhub_core::{RecommendationRequestValidationError, RecommendationResponse};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

#[derive(Debug)]
struct RecommendWorld {
    workspace: Workspace,
    snapshot: RefCell<Option<Utf8PathBuf>>,
    output: RefCell<Option<Utf8PathBuf>>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl RecommendWorld {
    fn new() -> Self {
        Self {
            workspace: Workspace::new(),
            snapshot: RefCell::new(None),
            output: RefCell::new(None),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self, user: &str) -> Vec<String> {
        let mut argv = vec!["eventhub".to_owned(), "recommend".to_owned()];
        if let Some(snapshot) = self.snapshot.borrow().as_ref() {
            argv.push(snapshot.as_str().to_owned());
        }
        argv.extend([format!("--{ARG_USER}"), user.to_owned()]);
        if !self
            .cli_args
            .borrow()
            .iter()
            .any(|arg| arg == &format!("--{ARG_NOW}"))
        {
            argv.extend([format!("--{ARG_NOW}"), "2025-06-01T00:00:00Z".to_owned()]);
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn push_args<const N: usize>(&self, args: [String; N]) {
        self.cli_args.borrow_mut().extend(args);
    }

    fn expect_error<T>(&self, check: impl FnOnce(&CliError) -> T) -> T {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        check(error)
    }
}

#[fixture]
fn world() -> RecommendWorld {
    RecommendWorld::new()
}

#[given("a snapshot exists on disk")]
fn snapshot_exists(#[from(world)] world: &RecommendWorld) {
    world
        .snapshot
        .replace(Some(world.workspace.write_snapshot()));
}

#[given("I omit the snapshot path")]
fn omit_snapshot(#[from(world)] world: &RecommendWorld) {
    world.snapshot.replace(None);
}

#[given("I ask for the feed to be written to a nested output file")]
fn nested_output(#[from(world)] world: &RecommendWorld) {
    let output = world.workspace.path("out/feeds/user-1.json");
    world.push_args([format!("--{ARG_OUTPUT}"), output.as_str().to_owned()]);
    world.output.replace(Some(output));
}

#[given("the reference time is given as free text")]
fn free_text_now(#[from(world)] world: &RecommendWorld) {
    world.push_args([format!("--{ARG_NOW}"), "tomorrow evening".to_owned()]);
}

#[given("the limit is set to zero")]
fn zero_limit(#[from(world)] world: &RecommendWorld) {
    world.push_args([format!("--{ARG_LIMIT}"), "0".to_owned()]);
}

#[when("I run the recommend command for user-1")]
fn run_recommend_command(#[from(world)] world: &RecommendWorld) {
    let invocation = world.build_command_line("user-1");
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Recommend(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_recommend_with(args, &SnapshotRecommenderBuilder, &mut *buffer)
        }
    });
    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints the festival before the concert")]
fn prints_ranked_feed(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    let response: RecommendationResponse =
        serde_json::from_str(&stdout).expect("output should be a JSON response");
    let ids: Vec<&str> = response
        .events
        .iter()
        .map(|scored| scored.event.id.as_str())
        .collect();
    assert_eq!(ids, ["festival", "concert"]);
    let scores: Vec<f64> = response.events.iter().map(|scored| scored.score).collect();
    assert_eq!(scores, [1_035.0, 635.0]);
}

#[then("the output file holds 2 ranked events and nothing is printed")]
fn output_file_written(#[from(world)] world: &RecommendWorld) {
    let borrowed = world.result.borrow();
    borrowed
        .as_ref()
        .expect("result recorded")
        .as_ref()
        .expect("expected success");
    assert!(world.stdout.borrow().is_empty());

    let output = world.output.borrow().clone().expect("output path recorded");
    let written = std::fs::read_to_string(&output).expect("output file");
    let response: RecommendationResponse =
        serde_json::from_str(&written).expect("output should be a JSON response");
    assert_eq!(response.events.len(), 2);
}

#[then("the command fails because the snapshot path is missing")]
fn fails_missing_snapshot(#[from(world)] world: &RecommendWorld) {
    world.expect_error(|error| match error {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_SNAPSHOT),
        other => panic!("expected MissingArgument, found {other:?}"),
    });
}

#[then("the command fails because the reference time is invalid")]
fn fails_invalid_now(#[from(world)] world: &RecommendWorld) {
    world.expect_error(|error| match error {
        CliError::InvalidTimestamp { value } => assert_eq!(value, "tomorrow evening"),
        other => panic!("expected InvalidTimestamp, found {other:?}"),
    });
}

#[then("the command fails because the request is invalid")]
fn fails_invalid_request(#[from(world)] world: &RecommendWorld) {
    world.expect_error(|error| match error {
        CliError::InvalidRequest(source) => {
            assert_eq!(*source, RecommendationRequestValidationError::ZeroLimit);
        }
        other => panic!("expected InvalidRequest, found {other:?}"),
    });
}

macro_rules! register_recommend_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/recommend_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: RecommendWorld) {
            let _ = world;
        }
    };
}

register_recommend_scenario!(recommend_happy_path, "ranking a snapshot for a user");
register_recommend_scenario!(recommend_output_file, "writing the feed to an output file");
register_recommend_scenario!(recommend_missing_snapshot, "rejecting missing snapshot paths");
register_recommend_scenario!(
    recommend_invalid_now,
    "rejecting unparseable reference times"
);
register_recommend_scenario!(recommend_zero_limit, "rejecting a zero limit");
