//! Ranked output records.

use std::collections::BTreeSet;

use mentor_match_core::{RoomLocation, RoomProfile, TechCategory, TokenSet};

/// One mentor scored against one room.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Mentor identifier.
    pub mentor_id: u64,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Canonical skill tokens.
    pub tokens: TokenSet,
    /// Categories covered by the mentor's tokens.
    pub categories: BTreeSet<TechCategory>,
    /// Room the recommendation targets.
    pub room_id: u64,
    /// Floor of the target room.
    pub floor_id: u64,
    /// Skill coverage of the room's demand, `0.0..=100.0`.
    pub compatibility_score: f64,
    /// Spare capacity given current assignments, `20.0..=100.0`.
    pub availability_score: f64,
    /// Weighted blend used for ordering.
    pub final_score: f64,
    /// The mentor already holds this exact room.
    pub is_assigned: bool,
    /// The mentor holds at least one other room.
    pub is_assigned_elsewhere: bool,
    /// First held room other than this one.
    pub assigned_location: Option<RoomLocation>,
}

/// A room profile with its mentors in ranked order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoomRecommendations {
    /// The aggregated room.
    pub profile: RoomProfile,
    /// Mentors sorted by descending `final_score`.
    pub recommendations: Vec<Recommendation>,
}

impl RoomRecommendations {
    /// Highest-ranked mentor, if any mentors were supplied.
    #[must_use]
    pub fn best(&self) -> Option<&Recommendation> {
        self.recommendations.first()
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;
    use mentor_match_core::{RoomProfileBuilder, test_support::approved_team};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn serialises_profile_and_flags() {
        let teams = [approved_team(1, 2, 20, "React, Docker")];
        let profile = RoomProfileBuilder::standard()
            .build(&teams)
            .pop()
            .expect("one room");
        let room = RoomRecommendations {
            profile,
            recommendations: Vec::new(),
        };
        let value = serde_json::to_value(&room).expect("serialise room");
        assert_eq!(value["profile"]["project_complexity"], json!("high"));
        assert_eq!(value["profile"]["primary_category"], json!("frontend"));
        assert_eq!(value["profile"]["tech_counts"], json!({"react": 1, "docker": 1}));
        assert_eq!(value["recommendations"], json!([]));
    }
}
