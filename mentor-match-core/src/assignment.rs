//! Mentor assignment rows and room locations.

/// A physical room identified by its floor and room ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomLocation {
    /// Floor identifier.
    pub floor_id: u64,
    /// Room identifier.
    pub room_id: u64,
}

impl RoomLocation {
    /// Construct a location.
    #[must_use]
    pub const fn new(floor_id: u64, room_id: u64) -> Self {
        Self { floor_id, room_id }
    }
}

/// One `(mentor, floor, room)` assignment tuple.
///
/// The tuple is unique in the assignment table; see
/// [`AssignmentStore::insert_if_absent`](crate::AssignmentStore::insert_if_absent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Assigned mentor.
    pub mentor_id: u64,
    /// Floor of the assigned room.
    pub floor_id: u64,
    /// Assigned room.
    pub room_id: u64,
}

impl Assignment {
    /// Construct an assignment tuple.
    #[must_use]
    pub const fn new(mentor_id: u64, floor_id: u64, room_id: u64) -> Self {
        Self {
            mentor_id,
            floor_id,
            room_id,
        }
    }

    /// The room this assignment points at.
    #[must_use]
    pub const fn location(&self) -> RoomLocation {
        RoomLocation::new(self.floor_id, self.room_id)
    }
}
