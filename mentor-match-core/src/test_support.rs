//! Deterministic helpers shared by unit and behaviour tests.

use crate::{MentorRecord, RoomProfile, Scorer, TeamRecord, TokenSet, round_to_tenth};

/// Test `Scorer` that only credits exact token matches.
///
/// Returns the percentage of the room's total frequency carried by tokens
/// the mentor lists verbatim.
#[derive(Debug, Copy, Clone, Default)]
pub struct ExactMatchScorer;

impl Scorer for ExactMatchScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "percentage of matched frequency"
    )]
    fn score(&self, mentor_tokens: &TokenSet, room: &RoomProfile) -> f64 {
        let total = room.total_frequency();
        if mentor_tokens.is_empty() || total == 0 {
            return 0.0;
        }
        let matched: u32 = room
            .tech_counts()
            .iter()
            .filter(|(token, _)| mentor_tokens.contains(*token))
            .map(|(_, count)| *count)
            .sum();
        Self::sanitise(round_to_tenth(f64::from(matched) / f64::from(total) * 100.0))
    }
}

/// Build a mentor record with a derived e-mail address.
#[must_use]
pub fn mentor(id: u64, name: &str, skills: &str) -> MentorRecord {
    MentorRecord {
        id,
        name: name.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        skills: Some(skills.to_owned()),
    }
}

/// Build an approved team placed in `(floor_id, room_id)`.
#[must_use]
pub fn approved_team(id: u64, floor_id: u64, room_id: u64, tech_stack: &str) -> TeamRecord {
    TeamRecord {
        id,
        floor_id: Some(floor_id),
        room_id: Some(room_id),
        approved: true,
        tech_stack: Some(tech_stack.to_owned()),
    }
}
