//! Test helpers for writing snapshots and driving the CLI in-process.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const SNAPSHOT_JSON: &str = r#"{
  "mentors": [
    {"id": 1, "name": "Ada", "email": "ada@example.com", "skills": "Python"},
    {"id": 2, "name": "Brook", "email": "brook@example.com", "skills": "React, Node.js, MongoDB"}
  ],
  "assignments": [],
  "teams": [
    {"id": 1, "floor_id": 1, "room_id": 101, "approved": true, "tech_stack": "React, Node"},
    {"id": 2, "floor_id": 1, "room_id": 101, "approved": true, "tech_stack": "React, Node"},
    {"id": 3, "floor_id": 1, "room_id": 101, "approved": true, "tech_stack": "React, Express"},
    {"id": 4, "floor_id": 2, "room_id": 201, "approved": true, "tech_stack": "Go"},
    {"id": 5, "floor_id": 2, "room_id": 202, "approved": false, "tech_stack": "Rust"}
  ]
}"#;

/// Temporary directory holding CLI inputs.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_snapshot(&self, contents: &str) -> Utf8PathBuf {
        let path = self.path("snapshot.json");
        write_utf8(&path, contents.as_bytes());
        path
    }

    pub(super) fn db(&self) -> Utf8PathBuf {
        self.path("assignments.db")
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write file");
}

/// Parse `argv` and run the selected command, capturing stdout.
pub(super) fn run_cli(argv: &[&str]) -> (Result<(), CliError>, String) {
    let mut buffer = Vec::new();
    let outcome = Cli::try_parse_from(argv.iter().copied())
        .map_err(CliError::from)
        .and_then(|cli| dispatch(cli.command, &mut buffer));
    let stdout = String::from_utf8(buffer).expect("stdout utf-8");
    (outcome, stdout)
}

/// Environment variable `ortho_config` consults for `field` of subcommand `T`.
pub(super) fn env_key_for<T>(field: &str) -> String
where
    T: clap::CommandFactory + ortho_config::OrthoConfig,
{
    let command = ortho_config::subcommand::CmdName::new(T::command().get_name()).env_key();
    format!("{}CMDS_{command}_{}", T::prefix(), field.to_ascii_uppercase())
}
