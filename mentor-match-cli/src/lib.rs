//! Command-line interface for the mentor matching engine.
//!
//! `recommend` ranks mentors for every room (or one room) in a JSON snapshot.
//! `assign`, `unassign` and `assignments` manage the SQLite assignment table.
//! Options are layered by `ortho_config`: CLI flags override
//! `MENTOR_MATCH_*` environment variables, which override configuration
//! files.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod assign;
mod error;
mod fs;
mod recommend;

pub use error::CliError;

use assign::{
    AssignArgs, AssignmentsArgs, UnassignArgs, run_assign, run_assignments, run_unassign,
};
use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_SNAPSHOT: &str = "snapshot";
pub(crate) const ARG_ROOM: &str = "room";
pub(crate) const ARG_DB: &str = "db";
pub(crate) const ARG_MENTOR: &str = "mentor";
pub(crate) const ARG_FLOOR: &str = "floor";
pub(crate) const ENV_SNAPSHOT: &str = "MENTOR_MATCH_CMDS_RECOMMEND_SNAPSHOT";
pub(crate) const ENV_ASSIGN_DB: &str = "MENTOR_MATCH_CMDS_ASSIGN_DB";
pub(crate) const ENV_ASSIGN_MENTOR: &str = "MENTOR_MATCH_CMDS_ASSIGN_MENTOR";
pub(crate) const ENV_ASSIGN_FLOOR: &str = "MENTOR_MATCH_CMDS_ASSIGN_FLOOR";
pub(crate) const ENV_ASSIGN_ROOM: &str = "MENTOR_MATCH_CMDS_ASSIGN_ROOM";
pub(crate) const ENV_UNASSIGN_DB: &str = "MENTOR_MATCH_CMDS_UNASSIGN_DB";
pub(crate) const ENV_UNASSIGN_MENTOR: &str = "MENTOR_MATCH_CMDS_UNASSIGN_MENTOR";
pub(crate) const ENV_UNASSIGN_FLOOR: &str = "MENTOR_MATCH_CMDS_UNASSIGN_FLOOR";
pub(crate) const ENV_UNASSIGN_ROOM: &str = "MENTOR_MATCH_CMDS_UNASSIGN_ROOM";
pub(crate) const ENV_ASSIGNMENTS_DB: &str = "MENTOR_MATCH_CMDS_ASSIGNMENTS_DB";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration merging, input
/// loading, store access or output writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => run_recommend(args, writer),
        Command::Assign(args) => run_assign(args, writer),
        Command::Unassign(args) => run_unassign(args, writer),
        Command::Assignments(args) => run_assignments(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "mentor-match",
    about = "Rank hackathon mentors for rooms and record assignments",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank mentors for each room in a snapshot.
    Recommend(RecommendArgs),
    /// Assign a mentor to a room.
    Assign(AssignArgs),
    /// Remove a mentor from a room.
    Unassign(UnassignArgs),
    /// List stored assignments.
    Assignments(AssignmentsArgs),
}

pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    write_line(writer, &payload)
}

pub(crate) fn write_line(writer: &mut dyn Write, line: &str) -> Result<(), CliError> {
    writer
        .write_all(line.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
