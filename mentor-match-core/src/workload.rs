//! Mentor workload derived from the current assignment table.
//!
//! A mentor's load is the number of approved teams sitting in the rooms the
//! mentor is assigned to. Availability falls by a fixed penalty per team and
//! never drops below a floor, so no mentor is ever scored as fully
//! unavailable.

use std::collections::HashSet;

use crate::{Assignment, RoomLocation, TeamRecord};

/// Availability with no assigned teams.
pub const MAX_AVAILABILITY: u32 = 100;

/// Availability lost per team under the mentor's existing assignments.
pub const AVAILABILITY_PENALTY_PER_TEAM: u32 = 15;

/// Lowest availability a mentor can score.
pub const MIN_AVAILABILITY: u32 = 20;

/// A mentor's current assignments and the teams they cover.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkloadRecord {
    /// Mentor identifier.
    pub mentor_id: u64,
    /// Number of assignment tuples held.
    pub assignment_count: usize,
    /// Rooms held, in assignment order.
    pub assigned_locations: Vec<RoomLocation>,
    /// Distinct approved teams in any assigned room.
    pub team_count: u32,
}

impl WorkloadRecord {
    /// `max(20, 100 - 15 * team_count)`.
    ///
    /// # Examples
    /// ```
    /// use mentor_match_core::WorkloadRecord;
    ///
    /// let mut record = WorkloadRecord {
    ///     mentor_id: 1,
    ///     assignment_count: 1,
    ///     assigned_locations: Vec::new(),
    ///     team_count: 2,
    /// };
    /// assert_eq!(record.availability_score(), 70.0);
    /// record.team_count = 50;
    /// assert_eq!(record.availability_score(), 20.0);
    /// ```
    #[must_use]
    pub fn availability_score(&self) -> f64 {
        let penalty = self.team_count.saturating_mul(AVAILABILITY_PENALTY_PER_TEAM);
        let remaining = MAX_AVAILABILITY.saturating_sub(penalty);
        f64::from(remaining.max(MIN_AVAILABILITY))
    }

    /// Report whether the mentor holds exactly `location`.
    #[must_use]
    pub fn holds(&self, location: RoomLocation) -> bool {
        self.assigned_locations.contains(&location)
    }

    /// First held location other than `location`.
    #[must_use]
    pub fn first_elsewhere(&self, location: RoomLocation) -> Option<RoomLocation> {
        self.assigned_locations
            .iter()
            .copied()
            .find(|held| *held != location)
    }
}

/// Computes [`WorkloadRecord`]s from a snapshot of assignments and teams.
#[derive(Debug, Clone, Copy)]
pub struct WorkloadTracker<'a> {
    assignments: &'a [Assignment],
    teams: &'a [TeamRecord],
}

impl<'a> WorkloadTracker<'a> {
    /// Create a tracker over the given snapshot.
    #[must_use]
    pub const fn new(assignments: &'a [Assignment], teams: &'a [TeamRecord]) -> Self {
        Self { assignments, teams }
    }

    /// Load for `mentor_id`. Unknown mentors get an empty record.
    #[must_use]
    pub fn load(&self, mentor_id: u64) -> WorkloadRecord {
        let assigned_locations: Vec<RoomLocation> = self
            .assignments
            .iter()
            .filter(|assignment| assignment.mentor_id == mentor_id)
            .map(Assignment::location)
            .collect();
        let rooms: HashSet<u64> = assigned_locations.iter().map(|l| l.room_id).collect();
        let teams: HashSet<u64> = self
            .teams
            .iter()
            .filter(|team| team.approved && team.room_id.is_some_and(|room| rooms.contains(&room)))
            .map(|team| team.id)
            .collect();

        WorkloadRecord {
            mentor_id,
            assignment_count: assigned_locations.len(),
            assigned_locations,
            team_count: u32::try_from(teams.len()).unwrap_or(u32::MAX),
        }
    }
}
