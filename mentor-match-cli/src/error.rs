//! Error types emitted by the mentor-match CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
#[cfg(feature = "store-sqlite")]
use mentor_match_core::SqliteAssignmentStoreError;
use mentor_match_core::{SnapshotError, StoreError};
use thiserror::Error;

/// Errors emitted by the mentor-match CLI.
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
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        /// Cargo feature that provides the operation.
        feature: &'static str,
        /// Operation that was attempted.
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option that named the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option that named the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the snapshot file failed.
    #[error("failed to open snapshot at {path:?}: {source}")]
    OpenSnapshot {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Snapshot JSON could not be decoded.
    #[error("failed to parse snapshot at {path:?}: {source}")]
    ParseSnapshot {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Decoding error.
        #[source]
        source: SnapshotError,
    },
    /// Opening the assignment database failed.
    #[cfg(feature = "store-sqlite")]
    #[error(transparent)]
    OpenStore(#[from] SqliteAssignmentStoreError),
    /// Reading or writing assignment rows failed.
    #[error("assignment store failed: {0}")]
    Store(#[from] StoreError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
