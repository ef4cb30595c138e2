//! Persistence seam for the mentor assignment table.
//!
//! The `AssignmentStore` trait is the only shared, mutable resource in the
//! engine. Implementations must make [`AssignmentStore::insert_if_absent`]
//! atomic: concurrent callers inserting the same tuple must see exactly one
//! success.

use thiserror::Error;

use crate::Assignment;

mod memory;
#[cfg(feature = "store-sqlite")]
mod sqlite;

pub use memory::MemoryAssignmentStore;
#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteAssignmentStore, SqliteAssignmentStoreError};

/// Errors raised by an [`AssignmentStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("assignment store lock was poisoned")]
    Poisoned,
    /// The SQLite backend failed.
    #[cfg(feature = "store-sqlite")]
    #[error(transparent)]
    Sqlite(#[from] SqliteAssignmentStoreError),
}

/// Read and write access to persisted mentor assignments.
///
/// # Examples
///
/// ```rust
/// use mentor_match_core::{Assignment, AssignmentStore, MemoryAssignmentStore};
///
/// # fn main() -> Result<(), mentor_match_core::StoreError> {
/// let store = MemoryAssignmentStore::default();
/// let row = Assignment::new(1, 2, 3);
/// assert!(store.insert_if_absent(row)?);
/// assert!(!store.insert_if_absent(row)?);
/// assert_eq!(store.assignments()?, vec![row]);
/// # Ok(())
/// # }
/// ```
pub trait AssignmentStore: Send + Sync {
    /// Every stored tuple, in insertion order.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend cannot be read.
    fn assignments(&self) -> Result<Vec<Assignment>, StoreError>;

    /// Insert `assignment` unless the identical tuple already exists.
    ///
    /// Returns `true` when a row was written and `false` when the tuple was
    /// already present. The check and the write happen atomically.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend fails; no row is written.
    fn insert_if_absent(&self, assignment: Assignment) -> Result<bool, StoreError>;

    /// Remove `assignment`, returning whether a row was deleted.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend fails.
    fn remove(&self, assignment: Assignment) -> Result<bool, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn memory_store_rejects_duplicate_tuples() {
        let store = MemoryAssignmentStore::default();
        let row = Assignment::new(1, 1, 10);
        assert!(store.insert_if_absent(row).expect("first insert"));
        assert!(!store.insert_if_absent(row).expect("second insert"));
        assert_eq!(store.assignments().expect("list rows"), vec![row]);
    }

    #[rstest]
    fn memory_store_keeps_insertion_order() {
        let rows = [
            Assignment::new(2, 1, 10),
            Assignment::new(1, 1, 10),
            Assignment::new(1, 2, 20),
        ];
        let store = MemoryAssignmentStore::with_assignments(rows);
        assert_eq!(store.assignments().expect("list rows"), rows);
    }

    #[rstest]
    fn memory_store_removes_rows() {
        let row = Assignment::new(1, 1, 10);
        let store = MemoryAssignmentStore::with_assignments([row]);
        assert!(store.remove(row).expect("remove row"));
        assert!(!store.remove(row).expect("remove missing row"));
        assert!(store.assignments().expect("list rows").is_empty());
    }

    #[rstest]
    fn concurrent_inserts_write_one_row() {
        let store = MemoryAssignmentStore::default();
        let row = Assignment::new(5, 1, 10);
        let successes = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| store.insert_if_absent(row).expect("insert")))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("join"))
                .filter(|inserted| *inserted)
                .count()
        });
        assert_eq!(successes, 1);
        assert_eq!(store.assignments().expect("list rows").len(), 1);
    }
}
