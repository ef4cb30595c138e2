//! Record and remove mentor assignments.
//!
//! Both operations delegate the existence check to the store so that the
//! check and the write are a single atomic step.

use log::{info, warn};
use mentor_match_core::{Assignment, AssignmentStore, StoreError};

/// Result of [`assign`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AssignOutcome {
    /// A new row was written.
    Assigned,
    /// The identical tuple already existed; nothing was written.
    DuplicateAssignment,
}

/// Result of [`unassign`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnassignOutcome {
    /// The row was deleted.
    Removed,
    /// No such row existed.
    NotAssigned,
}

/// Assign `mentor_id` to the room at `(floor_id, room_id)`.
///
/// A mentor may hold any number of rooms; only the exact tuple is
/// deduplicated.
///
/// # Errors
/// Propagates [`StoreError`] from the store. No row is written on error.
///
/// # Examples
/// ```
/// use mentor_match_core::MemoryAssignmentStore;
/// use mentor_match_scorer::{AssignOutcome, assign};
///
/// let store = MemoryAssignmentStore::default();
/// assert_eq!(assign(&store, 1, 2, 20).expect("assign"), AssignOutcome::Assigned);
/// assert_eq!(
///     assign(&store, 1, 2, 20).expect("assign"),
///     AssignOutcome::DuplicateAssignment
/// );
/// ```
pub fn assign<T>(
    store: &T,
    mentor_id: u64,
    floor_id: u64,
    room_id: u64,
) -> Result<AssignOutcome, StoreError>
where
    T: AssignmentStore + ?Sized,
{
    let assignment = Assignment::new(mentor_id, floor_id, room_id);
    if store.insert_if_absent(assignment)? {
        info!("assigned mentor {mentor_id} to room {room_id} on floor {floor_id}");
        Ok(AssignOutcome::Assigned)
    } else {
        warn!("mentor {mentor_id} is already assigned to room {room_id} on floor {floor_id}");
        Ok(AssignOutcome::DuplicateAssignment)
    }
}

/// Remove the assignment of `mentor_id` to `(floor_id, room_id)`.
///
/// # Errors
/// Propagates [`StoreError`] from the store.
pub fn unassign<T>(
    store: &T,
    mentor_id: u64,
    floor_id: u64,
    room_id: u64,
) -> Result<UnassignOutcome, StoreError>
where
    T: AssignmentStore + ?Sized,
{
    let assignment = Assignment::new(mentor_id, floor_id, room_id);
    if store.remove(assignment)? {
        info!("removed mentor {mentor_id} from room {room_id} on floor {floor_id}");
        Ok(UnassignOutcome::Removed)
    } else {
        Ok(UnassignOutcome::NotAssigned)
    }
}
