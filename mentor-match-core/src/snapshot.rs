//! Input snapshot supplied by the storage collaborator.
//!
//! A snapshot is read once per computation. Recommendation flags derived from
//! it may be stale relative to concurrent writers; assignment writes always
//! re-validate against the store.

use crate::{Assignment, MentorRecord, TeamRecord};

/// Raw records for one matching run.
///
/// Mentors are kept in the order supplied. That order breaks ranking ties,
/// so callers should list mentors alphabetically by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Mentors in upstream listing order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mentors: Vec<MentorRecord>,
    /// Current assignment tuples.
    #[cfg_attr(feature = "serde", serde(default))]
    pub assignments: Vec<Assignment>,
    /// Teams with their room placement and submission text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub teams: Vec<TeamRecord>,
}

impl Snapshot {
    /// Replace the assignment rows, e.g. with a fresh read from a store.
    #[must_use]
    pub fn with_assignments(mut self, assignments: Vec<Assignment>) -> Self {
        self.assignments = assignments;
        self
    }

    /// Look up a mentor record by id.
    #[must_use]
    pub fn mentor(&self, mentor_id: u64) -> Option<&MentorRecord> {
        self.mentors.iter().find(|mentor| mentor.id == mentor_id)
    }
}

#[cfg(feature = "serde")]
pub use json::SnapshotError;

#[cfg(feature = "serde")]
mod json {
    use std::io::Read;

    use thiserror::Error;

    use super::Snapshot;

    /// Errors raised while decoding a snapshot.
    #[derive(Debug, Error)]
    pub enum SnapshotError {
        /// The JSON payload was malformed or did not match the schema.
        #[error("failed to parse snapshot JSON: {0}")]
        Parse(#[from] serde_json::Error),
    }

    impl Snapshot {
        /// Decode a JSON-encoded snapshot.
        ///
        /// # Errors
        /// Returns [`SnapshotError::Parse`] when the payload is not a valid
        /// snapshot.
        ///
        /// # Examples
        /// ```
        /// use mentor_match_core::Snapshot;
        ///
        /// let json = r#"{"mentors":[{"id":1,"name":"Ada","email":"ada@example.com","skills":"Rust"}]}"#;
        /// let snapshot = Snapshot::from_json_reader(json.as_bytes()).expect("valid snapshot");
        /// assert_eq!(snapshot.mentors.len(), 1);
        /// assert!(snapshot.teams.is_empty());
        /// ```
        pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
            Ok(serde_json::from_reader(reader)?)
        }
    }

}
