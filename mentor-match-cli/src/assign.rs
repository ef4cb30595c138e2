//! `assign`, `unassign` and `assignments` command implementations.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use mentor_match_core::AssignmentStore;
use mentor_match_scorer::{AssignOutcome, UnassignOutcome, assign, unassign};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DB, ARG_FLOOR, ARG_MENTOR, ARG_ROOM, CliError, ENV_ASSIGN_DB, ENV_ASSIGN_FLOOR,
    ENV_ASSIGN_MENTOR, ENV_ASSIGN_ROOM, ENV_ASSIGNMENTS_DB, ENV_UNASSIGN_DB, ENV_UNASSIGN_FLOOR,
    ENV_UNASSIGN_MENTOR, ENV_UNASSIGN_ROOM, write_json, write_line,
};

/// Environment variables that can supply each field of a room target.
struct TargetEnv {
    db: &'static str,
    mentor: &'static str,
    floor: &'static str,
    room: &'static str,
}

const ASSIGN_ENV: TargetEnv = TargetEnv {
    db: ENV_ASSIGN_DB,
    mentor: ENV_ASSIGN_MENTOR,
    floor: ENV_ASSIGN_FLOOR,
    room: ENV_ASSIGN_ROOM,
};

const UNASSIGN_ENV: TargetEnv = TargetEnv {
    db: ENV_UNASSIGN_DB,
    mentor: ENV_UNASSIGN_MENTOR,
    floor: ENV_UNASSIGN_FLOOR,
    room: ENV_UNASSIGN_ROOM,
};

/// CLI arguments for the `assign` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "assign", about = "Assign a mentor to the room on a floor")]
#[ortho_config(prefix = "MENTOR_MATCH")]
pub(crate) struct AssignArgs {
    /// SQLite assignment database.
    #[arg(long = ARG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) db: Option<Utf8PathBuf>,
    /// Mentor identifier.
    #[arg(long = ARG_MENTOR, value_name = "id")]
    #[serde(default)]
    pub(crate) mentor: Option<u64>,
    /// Floor identifier.
    #[arg(long = ARG_FLOOR, value_name = "id")]
    #[serde(default)]
    pub(crate) floor: Option<u64>,
    /// Room identifier.
    #[arg(long = ARG_ROOM, value_name = "id")]
    #[serde(default)]
    pub(crate) room: Option<u64>,
}

impl AssignArgs {
    pub(crate) fn into_config(self) -> Result<AssignConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AssignConfig::try_from(merged)
    }
}

/// CLI arguments for the `unassign` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "unassign", about = "Remove a mentor from the room on a floor")]
#[ortho_config(prefix = "MENTOR_MATCH")]
pub(crate) struct UnassignArgs {
    /// SQLite assignment database.
    #[arg(long = ARG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) db: Option<Utf8PathBuf>,
    /// Mentor identifier.
    #[arg(long = ARG_MENTOR, value_name = "id")]
    #[serde(default)]
    pub(crate) mentor: Option<u64>,
    /// Floor identifier.
    #[arg(long = ARG_FLOOR, value_name = "id")]
    #[serde(default)]
    pub(crate) floor: Option<u64>,
    /// Room identifier.
    #[arg(long = ARG_ROOM, value_name = "id")]
    #[serde(default)]
    pub(crate) room: Option<u64>,
}

impl UnassignArgs {
    pub(crate) fn into_config(self) -> Result<AssignConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AssignConfig::try_from(merged)
    }
}

/// Resolved `assign`/`unassign` configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AssignConfig {
    pub(crate) db: Utf8PathBuf,
    pub(crate) mentor: u64,
    pub(crate) floor: u64,
    pub(crate) room: u64,
}

impl AssignConfig {
    fn resolve(
        db: Option<Utf8PathBuf>,
        mentor: Option<u64>,
        floor: Option<u64>,
        room: Option<u64>,
        env: &TargetEnv,
    ) -> Result<Self, CliError> {
        let db = db.ok_or(CliError::MissingArgument {
            field: ARG_DB,
            env: env.db,
        })?;
        let mentor = mentor.ok_or(CliError::MissingArgument {
            field: ARG_MENTOR,
            env: env.mentor,
        })?;
        let floor = floor.ok_or(CliError::MissingArgument {
            field: ARG_FLOOR,
            env: env.floor,
        })?;
        let room = room.ok_or(CliError::MissingArgument {
            field: ARG_ROOM,
            env: env.room,
        })?;
        Ok(Self {
            db,
            mentor,
            floor,
            room,
        })
    }
}

impl TryFrom<AssignArgs> for AssignConfig {
    type Error = CliError;

    fn try_from(args: AssignArgs) -> Result<Self, Self::Error> {
        Self::resolve(args.db, args.mentor, args.floor, args.room, &ASSIGN_ENV)
    }
}

impl TryFrom<UnassignArgs> for AssignConfig {
    type Error = CliError;

    fn try_from(args: UnassignArgs) -> Result<Self, Self::Error> {
        Self::resolve(args.db, args.mentor, args.floor, args.room, &UNASSIGN_ENV)
    }
}

/// CLI arguments for the `assignments` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(name = "assignments", about = "Print stored assignments as JSON")]
#[ortho_config(prefix = "MENTOR_MATCH")]
pub(crate) struct AssignmentsArgs {
    /// SQLite assignment database.
    #[arg(long = ARG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) db: Option<Utf8PathBuf>,
}

impl AssignmentsArgs {
    fn into_db(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        merged.db.ok_or(CliError::MissingArgument {
            field: ARG_DB,
            env: ENV_ASSIGNMENTS_DB,
        })
    }
}

#[cfg(feature = "store-sqlite")]
pub(crate) fn open_store(path: &Utf8Path) -> Result<Box<dyn AssignmentStore>, CliError> {
    let store = mentor_match_core::SqliteAssignmentStore::open(path.as_std_path())?;
    Ok(Box::new(store))
}

#[cfg(not(feature = "store-sqlite"))]
pub(crate) fn open_store(_path: &Utf8Path) -> Result<Box<dyn AssignmentStore>, CliError> {
    Err(CliError::MissingFeature {
        feature: "store-sqlite",
        action: "opening an assignment database",
    })
}

pub(crate) fn run_assign(args: AssignArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let store = open_store(&config.db)?;
    let message = match assign(&*store, config.mentor, config.floor, config.room)? {
        AssignOutcome::Assigned => "assigned",
        AssignOutcome::DuplicateAssignment => "duplicate assignment",
    };
    write_line(writer, message)
}

pub(crate) fn run_unassign(args: UnassignArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let store = open_store(&config.db)?;
    let message = match unassign(&*store, config.mentor, config.floor, config.room)? {
        UnassignOutcome::Removed => "removed",
        UnassignOutcome::NotAssigned => "not assigned",
    };
    write_line(writer, message)
}

pub(crate) fn run_assignments(
    args: AssignmentsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let db = args.into_db()?;
    let store = open_store(&db)?;
    write_json(writer, &store.assignments()?)
}
