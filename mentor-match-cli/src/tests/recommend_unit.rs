//! Focused unit tests covering recommend CLI configuration and output.

use super::helpers::{SNAPSHOT_JSON, Workspace, env_key_for, run_cli};
use super::*;
use crate::recommend::{RecommendArgs, RecommendConfig, config_from_layers_for_test, load_snapshot};
use camino::Utf8PathBuf;
use rstest::rstest;
use serde_json::Value;

#[rstest]
fn converting_without_snapshot_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default())
        .expect_err("missing snapshot should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SNAPSHOT);
            assert_eq!(env, ENV_SNAPSHOT);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_keeps_optional_fields() {
    let args = RecommendArgs {
        snapshot: Some(Utf8PathBuf::from("snapshot.json")),
        ..RecommendArgs::default()
    };
    let config = RecommendConfig::try_from(args).expect("config should build");
    assert_eq!(config.snapshot, Utf8PathBuf::from("snapshot.json"));
    assert_eq!(config.room, None);
    assert_eq!(config.db, None);
}

#[rstest]
fn snapshot_env_key_matches_the_key_ortho_config_reads() {
    assert_eq!(env_key_for::<RecommendArgs>(ARG_SNAPSHOT), ENV_SNAPSHOT);
}

#[rstest]
#[case::compatibility("--compatibility-weight")]
#[case::availability("--availability-weight")]
fn recommend_rejects_blend_weight_flags(#[case] flag: &str) {
    let (outcome, _) = run_cli(&["mentor-match", "recommend", "snapshot.json", flag, "0.5"]);
    match outcome.expect_err("blend weights are fixed") {
        CliError::ArgumentParsing(_) => {}
        other => panic!("expected ArgumentParsing, found {other:?}"),
    }
}

#[rstest]
fn load_snapshot_reports_parse_errors() {
    let workspace = Workspace::new();
    let path = workspace.write_snapshot("{ not json");
    match load_snapshot(&path).expect_err("invalid JSON should error") {
        CliError::ParseSnapshot { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected ParseSnapshot, found {other:?}"),
    }
}

#[rstest]
fn recommend_reports_missing_snapshot() {
    let workspace = Workspace::new();
    let missing = workspace.path("missing.json");
    let (outcome, _) = run_cli(&["mentor-match", "recommend", missing.as_str()]);
    match outcome.expect_err("missing snapshot should error") {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_SNAPSHOT);
            assert_eq!(path, missing);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn recommend_prints_every_room() {
    let workspace = Workspace::new();
    let snapshot = workspace.write_snapshot(SNAPSHOT_JSON);
    let (outcome, stdout) = run_cli(&["mentor-match", "recommend", snapshot.as_str()]);
    outcome.expect("recommend should succeed");

    let rooms: Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    let rooms = rooms.as_array().expect("array of rooms");
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0]["profile"]["room_id"], 101);
    assert_eq!(rooms[0]["recommendations"][0]["name"], "Brook");
    assert_eq!(rooms[0]["recommendations"][0]["compatibility_score"], 95.0);
}

#[rstest]
#[case::known_room("101", 1)]
#[case::unapproved_room("202", 0)]
fn recommend_filters_by_room(#[case] room: &str, #[case] expected: usize) {
    let workspace = Workspace::new();
    let snapshot = workspace.write_snapshot(SNAPSHOT_JSON);
    let (outcome, stdout) =
        run_cli(&["mentor-match", "recommend", snapshot.as_str(), "--room", room]);
    outcome.expect("recommend should succeed");
    let rooms: Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(rooms.as_array().map(Vec::len), Some(expected));
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "snapshot": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({ "snapshot": "from-file.json", "db": "from-file.db" }),
        None,
    );
    composer.push_environment(json!({ "snapshot": "from-env.json", "room": 7 }));
    composer.push_cli(json!({ "room": 101 }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.snapshot, Utf8PathBuf::from("from-env.json"));
    assert_eq!(config.room, Some(101));
    assert_eq!(config.db, Some(Utf8PathBuf::from("from-file.db")));
}
