//! Focused unit tests covering assignment commands.

use super::helpers::{Workspace, env_key_for, run_cli};
use super::*;
use crate::assign::{AssignArgs, AssignConfig, AssignmentsArgs, UnassignArgs};
use camino::Utf8PathBuf;
use rstest::rstest;
use serde_json::{Value, json};

fn assign_args_without(field: &str) -> AssignArgs {
    let mut args = AssignArgs {
        db: Some(Utf8PathBuf::from("a.db")),
        mentor: Some(1),
        floor: Some(1),
        room: Some(1),
    };
    match field {
        ARG_DB => args.db = None,
        ARG_MENTOR => args.mentor = None,
        ARG_FLOOR => args.floor = None,
        _ => args.room = None,
    }
    args
}

fn unassign_args_without(field: &str) -> UnassignArgs {
    let AssignArgs {
        db,
        mentor,
        floor,
        room,
    } = assign_args_without(field);
    UnassignArgs {
        db,
        mentor,
        floor,
        room,
    }
}

fn assert_missing(
    outcome: Result<AssignConfig, CliError>,
    expected_field: &str,
    expected_env: &str,
) {
    match outcome.expect_err("missing field should error") {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, expected_field);
            assert_eq!(env, expected_env);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
#[case::db(ARG_DB, ENV_ASSIGN_DB)]
#[case::mentor(ARG_MENTOR, ENV_ASSIGN_MENTOR)]
#[case::floor(ARG_FLOOR, ENV_ASSIGN_FLOOR)]
#[case::room(ARG_ROOM, ENV_ASSIGN_ROOM)]
fn converting_without_required_fields_errors(#[case] field: &str, #[case] env: &str) {
    assert_missing(AssignConfig::try_from(assign_args_without(field)), field, env);
}

#[rstest]
#[case::db(ARG_DB, ENV_UNASSIGN_DB)]
#[case::mentor(ARG_MENTOR, ENV_UNASSIGN_MENTOR)]
#[case::floor(ARG_FLOOR, ENV_UNASSIGN_FLOOR)]
#[case::room(ARG_ROOM, ENV_UNASSIGN_ROOM)]
fn unassign_reports_its_own_env_keys(#[case] field: &str, #[case] env: &str) {
    assert_missing(AssignConfig::try_from(unassign_args_without(field)), field, env);
}

#[rstest]
#[case::db(ARG_DB, ENV_ASSIGN_DB)]
#[case::mentor(ARG_MENTOR, ENV_ASSIGN_MENTOR)]
#[case::floor(ARG_FLOOR, ENV_ASSIGN_FLOOR)]
#[case::room(ARG_ROOM, ENV_ASSIGN_ROOM)]
fn assign_env_keys_match_the_keys_ortho_config_reads(
    #[case] field: &str,
    #[case] expected: &str,
) {
    assert_eq!(env_key_for::<AssignArgs>(field), expected);
}

#[rstest]
#[case::db(ARG_DB, ENV_UNASSIGN_DB)]
#[case::mentor(ARG_MENTOR, ENV_UNASSIGN_MENTOR)]
#[case::floor(ARG_FLOOR, ENV_UNASSIGN_FLOOR)]
#[case::room(ARG_ROOM, ENV_UNASSIGN_ROOM)]
fn unassign_env_keys_match_the_keys_ortho_config_reads(
    #[case] field: &str,
    #[case] expected: &str,
) {
    assert_eq!(env_key_for::<UnassignArgs>(field), expected);
}

#[rstest]
fn assignments_env_key_matches_the_key_ortho_config_reads() {
    assert_eq!(env_key_for::<AssignmentsArgs>(ARG_DB), ENV_ASSIGNMENTS_DB);
}

#[cfg(feature = "store-sqlite")]
#[rstest]
fn assign_twice_reports_duplicate_and_keeps_one_row() {
    let workspace = Workspace::new();
    let db = workspace.db();
    let argv = [
        "mentor-match", "assign", "--db", db.as_str(), "--mentor", "7", "--floor", "1", "--room",
        "101",
    ];

    let (first, first_out) = run_cli(&argv);
    first.expect("first assign should succeed");
    assert_eq!(first_out, "assigned\n");

    let (second, second_out) = run_cli(&argv);
    second.expect("duplicate assign should still succeed");
    assert_eq!(second_out, "duplicate assignment\n");

    let (listing, stdout) = run_cli(&["mentor-match", "assignments", "--db", db.as_str()]);
    listing.expect("listing should succeed");
    let rows: Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    assert_eq!(rows, json!([{ "mentor_id": 7, "floor_id": 1, "room_id": 101 }]));
}

#[cfg(feature = "store-sqlite")]
#[rstest]
fn unassign_reports_missing_rows() {
    let workspace = Workspace::new();
    let db = workspace.db();
    let tail = ["--db", db.as_str(), "--mentor", "3", "--floor", "2", "--room", "20"];
    let with = |command: &'static str| {
        let mut argv = vec!["mentor-match", command];
        argv.extend(tail);
        run_cli(&argv)
    };

    with("assign").0.expect("assign");
    let (removed, removed_out) = with("unassign");
    removed.expect("unassign should succeed");
    assert_eq!(removed_out, "removed\n");
    let (missing, missing_out) = with("unassign");
    missing.expect("unassign of a missing row should succeed");
    assert_eq!(missing_out, "not assigned\n");
}

#[cfg(feature = "store-sqlite")]
#[rstest]
fn recommend_reads_assignments_from_db() {
    let workspace = Workspace::new();
    let db = workspace.db();
    let snapshot = workspace.write_snapshot(super::helpers::SNAPSHOT_JSON);
    run_cli(&[
        "mentor-match", "assign", "--db", db.as_str(), "--mentor", "2", "--floor", "1", "--room",
        "101",
    ])
    .0
    .expect("assign");

    let (outcome, stdout) = run_cli(&[
        "mentor-match",
        "recommend",
        snapshot.as_str(),
        "--room",
        "101",
        "--db",
        db.as_str(),
    ]);
    outcome.expect("recommend should succeed");
    let rooms: Value = serde_json::from_str(&stdout).expect("stdout should be JSON");
    let brook = &rooms[0]["recommendations"][0];
    assert_eq!(brook["name"], "Brook");
    assert_eq!(brook["is_assigned"], true);
    assert_eq!(brook["availability_score"], 55.0);
}

#[cfg(not(feature = "store-sqlite"))]
#[rstest]
fn assign_requires_sqlite_feature() {
    let workspace = Workspace::new();
    let db = workspace.db();
    let (outcome, _) = run_cli(&[
        "mentor-match", "assign", "--db", db.as_str(), "--mentor", "1", "--floor", "1", "--room",
        "1",
    ]);
    match outcome.expect_err("assign should require sqlite") {
        CliError::MissingFeature { feature, .. } => assert_eq!(feature, "store-sqlite"),
        other => panic!("expected MissingFeature, found {other:?}"),
    }
}
