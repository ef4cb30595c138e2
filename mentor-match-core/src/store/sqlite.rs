//! SQLite-backed assignment table.
//!
//! Uniqueness of `(mentor_id, floor_id, room_id)` is enforced by the table's
//! primary key, and inserts use `INSERT OR IGNORE`, so the duplicate check
//! and the write are one statement. Concurrent writers in other processes
//! are serialised by SQLite itself.

use std::{
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use log::debug;
use rusqlite::{Connection, params};
use thiserror::Error;

use crate::{Assignment, AssignmentStore, StoreError};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS mentor_assignments (
        mentor_id INTEGER NOT NULL,
        floor_id INTEGER NOT NULL,
        room_id INTEGER NOT NULL,
        PRIMARY KEY (mentor_id, floor_id, room_id)
    )";
const SELECT_SQL: &str =
    "SELECT mentor_id, floor_id, room_id FROM mentor_assignments ORDER BY rowid";
const INSERT_SQL: &str =
    "INSERT OR IGNORE INTO mentor_assignments (mentor_id, floor_id, room_id) VALUES (?1, ?2, ?3)";
const DELETE_SQL: &str =
    "DELETE FROM mentor_assignments WHERE mentor_id = ?1 AND floor_id = ?2 AND room_id = ?3";

/// Error raised by [`SqliteAssignmentStore`].
#[derive(Debug, Error)]
pub enum SqliteAssignmentStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Creating the assignment table failed.
    #[error("failed to create assignment schema: {source}")]
    Schema {
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Reading or writing assignment rows failed.
    #[error("failed to {operation}: {source}")]
    Query {
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
}

/// Assignment table persisted in SQLite.
#[derive(Debug)]
pub struct SqliteAssignmentStore {
    connection: Mutex<Connection>,
}

impl SqliteAssignmentStore {
    /// Open (creating if needed) the database at `path` and ensure the schema.
    ///
    /// # Errors
    /// Returns [`SqliteAssignmentStoreError`] when the file cannot be opened
    /// or the schema cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SqliteAssignmentStoreError> {
        let path = path.as_ref();
        let connection =
            Connection::open(path).map_err(|source| SqliteAssignmentStoreError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;
        Self::with_connection(connection)
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    /// Returns [`SqliteAssignmentStoreError`] when the schema cannot be
    /// created.
    pub fn open_in_memory() -> Result<Self, SqliteAssignmentStoreError> {
        let connection = Connection::open_in_memory().map_err(|source| {
            SqliteAssignmentStoreError::OpenDatabase {
                path: PathBuf::from(":memory:"),
                source,
            }
        })?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self, SqliteAssignmentStoreError> {
        connection
            .execute(CREATE_TABLE_SQL, [])
            .map_err(|source| SqliteAssignmentStoreError::Schema { source })?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.connection.lock().map_err(|_| StoreError::Poisoned)
    }
}

fn query_error(operation: &'static str) -> impl FnOnce(rusqlite::Error) -> StoreError {
    move |source| SqliteAssignmentStoreError::Query { operation, source }.into()
}

impl AssignmentStore for SqliteAssignmentStore {
    fn assignments(&self) -> Result<Vec<Assignment>, StoreError> {
        let connection = self.lock()?;
        let mut statement = connection
            .prepare(SELECT_SQL)
            .map_err(query_error("prepare assignment listing"))?;
        let rows = statement
            .query_map([], |row| {
                Ok(Assignment::new(row.get(0)?, row.get(1)?, row.get(2)?))
            })
            .map_err(query_error("list assignments"))?;
        rows.collect::<Result<Vec<_>, _>>()
            .map_err(query_error("decode assignment row"))
    }

    fn insert_if_absent(&self, assignment: Assignment) -> Result<bool, StoreError> {
        let connection = self.lock()?;
        let changed = connection
            .execute(
                INSERT_SQL,
                params![assignment.mentor_id, assignment.floor_id, assignment.room_id],
            )
            .map_err(query_error("insert assignment"))?;
        debug!("insert of {assignment:?} changed {changed} row(s)");
        Ok(changed == 1)
    }

    fn remove(&self, assignment: Assignment) -> Result<bool, StoreError> {
        let connection = self.lock()?;
        let changed = connection
            .execute(
                DELETE_SQL,
                params![assignment.mentor_id, assignment.floor_id, assignment.room_id],
            )
            .map_err(query_error("delete assignment"))?;
        Ok(changed > 0)
    }
}
