//! `recommend` command implementation.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, warn};
use mentor_match_core::Snapshot;
use mentor_match_scorer::{RecommendationRanker, RoomRecommendations};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_DB, ARG_ROOM, ARG_SNAPSHOT, CliError, ENV_SNAPSHOT, assign::open_store, fs, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Rank every mentor for each room with approved teams. The \
                 snapshot is a JSON document with `mentors`, `assignments` \
                 and `teams` arrays. When --db is given, assignments are read \
                 from the SQLite store instead of the snapshot.",
    about = "Rank mentors for rooms"
)]
#[ortho_config(prefix = "MENTOR_MATCH")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON snapshot of mentors, assignments and teams.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) snapshot: Option<Utf8PathBuf>,
    /// Only rank mentors for this room.
    #[arg(long = ARG_ROOM, value_name = "id")]
    #[serde(default)]
    pub(crate) room: Option<u64>,
    /// SQLite assignment database overriding the snapshot's assignments.
    #[arg(long = ARG_DB, value_name = "path")]
    #[serde(default)]
    pub(crate) db: Option<Utf8PathBuf>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    pub(crate) snapshot: Utf8PathBuf,
    pub(crate) room: Option<u64>,
    pub(crate) db: Option<Utf8PathBuf>,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let snapshot = args.snapshot.ok_or(CliError::MissingArgument {
            field: ARG_SNAPSHOT,
            env: ENV_SNAPSHOT,
        })?;
        Ok(Self {
            snapshot,
            room: args.room,
            db: args.db,
        })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let rooms = execute_recommend(&config)?;
    write_json(writer, &rooms)
}

fn execute_recommend(config: &RecommendConfig) -> Result<Vec<RoomRecommendations>, CliError> {
    fs::require_existing(&config.snapshot, ARG_SNAPSHOT)?;
    let mut snapshot = load_snapshot(&config.snapshot)?;
    if let Some(db) = &config.db {
        let store = open_store(db)?;
        snapshot = snapshot.with_assignments(store.assignments()?);
        debug!("read {} assignment(s) from {db}", snapshot.assignments.len());
    }
    let ranker = RecommendationRanker::standard();
    Ok(match config.room {
        Some(room_id) => {
            let room = ranker.recommend_room(&snapshot, room_id);
            if room.is_none() {
                warn!("room {room_id} has no approved teams");
            }
            room.into_iter().collect()
        }
        None => ranker.recommend(&snapshot),
    })
}

/// Loads a JSON-encoded [`Snapshot`] from disk.
pub(crate) fn load_snapshot(path: &Utf8Path) -> Result<Snapshot, CliError> {
    let file = fs::open_utf8_file(path).map_err(|source| CliError::OpenSnapshot {
        path: path.to_path_buf(),
        source,
    })?;
    Snapshot::from_json_reader(BufReader::new(file)).map_err(|source| CliError::ParseSnapshot {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
