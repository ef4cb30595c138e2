//! In-memory `AssignmentStore` guarded by a single mutex.

use std::sync::{Mutex, MutexGuard};

use crate::{Assignment, AssignmentStore, StoreError};

/// `AssignmentStore` backed by a `Vec` behind a `Mutex`.
///
/// The store performs linear scans and suits small tables and tests.
#[derive(Debug, Default)]
pub struct MemoryAssignmentStore {
    rows: Mutex<Vec<Assignment>>,
}

impl MemoryAssignmentStore {
    /// Seed a store with existing rows. Duplicate tuples are dropped.
    pub fn with_assignments<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Assignment>,
    {
        let mut unique = Vec::new();
        for row in rows {
            if !unique.contains(&row) {
                unique.push(row);
            }
        }
        Self {
            rows: Mutex::new(unique),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Assignment>>, StoreError> {
        self.rows.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl AssignmentStore for MemoryAssignmentStore {
    fn assignments(&self) -> Result<Vec<Assignment>, StoreError> {
        Ok(self.lock()?.clone())
    }

    fn insert_if_absent(&self, assignment: Assignment) -> Result<bool, StoreError> {
        let mut rows = self.lock()?;
        if rows.contains(&assignment) {
            return Ok(false);
        }
        rows.push(assignment);
        Ok(true)
    }

    fn remove(&self, assignment: Assignment) -> Result<bool, StoreError> {
        let mut rows = self.lock()?;
        let before = rows.len();
        rows.retain(|row| *row != assignment);
        Ok(rows.len() != before)
    }
}
