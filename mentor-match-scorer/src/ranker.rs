//! Rank mentors for each room.
//!
//! Ranking reads one [`Snapshot`] and rebuilds every profile from it. The
//! `is_assigned` flags reflect that read only; writes go through
//! [`assign`](fn@crate::assign), which re-validates against the store.

use std::collections::HashSet;

use log::{debug, warn};
use mentor_match_core::{
    MentorProfile, RoomProfile, RoomProfileBuilder, Scorer, Snapshot, TechNormalizer,
    TechTaxonomy, WorkloadTracker,
};

use crate::{CompatibilityScorer, Recommendation, RoomRecommendations, blend};

/// Scores every mentor against a room and orders them by blended score.
///
/// The final score is always [`blend`] of compatibility and availability.
///
/// # Examples
/// ```
/// use mentor_match_core::{MentorRecord, Snapshot, TeamRecord};
/// use mentor_match_scorer::RecommendationRanker;
///
/// let snapshot = Snapshot {
///     mentors: vec![MentorRecord {
///         id: 1,
///         name: "Ada".into(),
///         email: "ada@example.com".into(),
///         skills: Some("Rust".into()),
///     }],
///     assignments: Vec::new(),
///     teams: vec![TeamRecord {
///         id: 10,
///         floor_id: Some(1),
///         room_id: Some(101),
///         approved: true,
///         tech_stack: Some("Rust".into()),
///     }],
/// };
/// let rooms = RecommendationRanker::standard().recommend(&snapshot);
/// assert_eq!(rooms[0].recommendations[0].final_score, 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct RecommendationRanker<'a, S> {
    scorer: S,
    normalizer: &'a TechNormalizer,
    taxonomy: &'a TechTaxonomy,
}

impl<S: Scorer> RecommendationRanker<'static, S> {
    /// Build a ranker over the standard normaliser and taxonomy.
    #[must_use]
    pub fn new(scorer: S) -> Self {
        Self {
            scorer,
            normalizer: TechNormalizer::standard(),
            taxonomy: TechTaxonomy::standard(),
        }
    }
}

impl RecommendationRanker<'static, CompatibilityScorer<'static>> {
    /// Ranker using the taxonomy-aware [`CompatibilityScorer`].
    #[must_use]
    pub fn standard() -> Self {
        Self::new(CompatibilityScorer::standard())
    }
}

impl<'a, S: Scorer> RecommendationRanker<'a, S> {
    /// Replace the lookup tables used to build mentor and room profiles.
    #[must_use]
    pub fn with_tables<'b>(
        self,
        normalizer: &'b TechNormalizer,
        taxonomy: &'b TechTaxonomy,
    ) -> RecommendationRanker<'b, S> {
        RecommendationRanker {
            scorer: self.scorer,
            normalizer,
            taxonomy,
        }
    }

    /// Rank `mentors` for `room`.
    ///
    /// The sort is stable, so mentors with equal final scores keep their
    /// relative order in `mentors`.
    #[must_use]
    pub fn rank_room(
        &self,
        room: &RoomProfile,
        mentors: &[MentorProfile],
        workload: &WorkloadTracker<'_>,
    ) -> Vec<Recommendation> {
        let location = room.location();
        let mut ranked: Vec<Recommendation> = mentors
            .iter()
            .map(|mentor| {
                let compatibility_score = S::sanitise(self.scorer.score(&mentor.tokens, room));
                let load = workload.load(mentor.mentor_id);
                let availability_score = load.availability_score();
                let assigned_location = load.first_elsewhere(location);
                Recommendation {
                    mentor_id: mentor.mentor_id,
                    name: mentor.name.clone(),
                    email: mentor.email.clone(),
                    tokens: mentor.tokens.clone(),
                    categories: mentor.categories.clone(),
                    room_id: room.room_id(),
                    floor_id: room.floor_id(),
                    compatibility_score,
                    availability_score,
                    final_score: blend(compatibility_score, availability_score),
                    is_assigned: load.holds(location),
                    is_assigned_elsewhere: assigned_location.is_some(),
                    assigned_location,
                }
            })
            .collect();
        ranked.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
        debug!(
            "ranked {} mentor(s) for room {} on floor {}",
            ranked.len(),
            room.room_id(),
            room.floor_id()
        );
        ranked
    }

    /// Rank every mentor for every room with approved teams.
    #[must_use]
    pub fn recommend(&self, snapshot: &Snapshot) -> Vec<RoomRecommendations> {
        let mentors = self.mentor_profiles(snapshot);
        let workload = WorkloadTracker::new(&snapshot.assignments, &snapshot.teams);
        self.room_profiles(snapshot)
            .into_iter()
            .map(|profile| RoomRecommendations {
                recommendations: self.rank_room(&profile, &mentors, &workload),
                profile,
            })
            .collect()
    }

    /// Rank every mentor for the room with `room_id`.
    ///
    /// Returns `None` when no approved team occupies that room.
    #[must_use]
    pub fn recommend_room(&self, snapshot: &Snapshot, room_id: u64) -> Option<RoomRecommendations> {
        let Some(profile) = self
            .room_profiles(snapshot)
            .into_iter()
            .find(|profile| profile.room_id() == room_id)
        else {
            debug!("room {room_id} has no approved teams");
            return None;
        };
        let mentors = self.mentor_profiles(snapshot);
        let workload = WorkloadTracker::new(&snapshot.assignments, &snapshot.teams);
        Some(RoomRecommendations {
            recommendations: self.rank_room(&profile, &mentors, &workload),
            profile,
        })
    }

    fn room_profiles(&self, snapshot: &Snapshot) -> Vec<RoomProfile> {
        RoomProfileBuilder::new(self.normalizer, self.taxonomy).build(&snapshot.teams)
    }

    fn mentor_profiles(&self, snapshot: &Snapshot) -> Vec<MentorProfile> {
        let known: HashSet<u64> = snapshot.mentors.iter().map(|mentor| mentor.id).collect();
        for assignment in &snapshot.assignments {
            if !known.contains(&assignment.mentor_id) {
                warn!(
                    "assignment {assignment:?} references unknown mentor {}",
                    assignment.mentor_id
                );
            }
        }
        snapshot
            .mentors
            .iter()
            .map(|record| MentorProfile::from_record(record, self.normalizer, self.taxonomy))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentor_match_core::{
        Assignment, RelationGraph, RoomLocation, SynonymMap, TechCategory, TechToken,
        test_support::{ExactMatchScorer, approved_team, mentor},
    };
    use rstest::{fixture, rstest};

    #[fixture]
    fn snapshot() -> Snapshot {
        Snapshot {
            mentors: vec![
                mentor(1, "Ada", "Python"),
                mentor(2, "Brook", "React, Node.js, MongoDB"),
                mentor(3, "Cyd", "React, Node.js, MongoDB"),
            ],
            assignments: vec![Assignment::new(3, 2, 201)],
            teams: vec![
                approved_team(1, 1, 101, "React, Node"),
                approved_team(2, 1, 101, "React, Node"),
                approved_team(3, 1, 101, "React, Express"),
                approved_team(4, 2, 201, "Go"),
                approved_team(5, 2, 201, "Go"),
            ],
        }
    }

    #[rstest]
    fn ranks_by_final_score(snapshot: Snapshot) {
        let room = RecommendationRanker::standard()
            .recommend_room(&snapshot, 101)
            .expect("room 101 exists");
        let order: Vec<u64> = room.recommendations.iter().map(|r| r.mentor_id).collect();
        assert_eq!(order, [2, 3, 1]);

        let brook = &room.recommendations[0];
        assert_eq!(brook.compatibility_score, 95.0);
        assert_eq!(brook.availability_score, 100.0);
        assert_eq!(brook.final_score, 96.5);

        let cyd = &room.recommendations[1];
        assert_eq!(cyd.availability_score, 70.0);
        assert_eq!(cyd.final_score, 87.5);
        assert!(!cyd.is_assigned);
        assert!(cyd.is_assigned_elsewhere);
        assert_eq!(cyd.assigned_location, Some(RoomLocation::new(2, 201)));
    }

    #[rstest]
    fn held_room_is_flagged_as_assigned(snapshot: Snapshot) {
        let room = RecommendationRanker::standard()
            .recommend_room(&snapshot, 201)
            .expect("room 201 exists");
        let cyd = room
            .recommendations
            .iter()
            .find(|r| r.mentor_id == 3)
            .expect("Cyd is ranked");
        assert!(cyd.is_assigned);
        assert!(!cyd.is_assigned_elsewhere);
        assert_eq!(cyd.assigned_location, None);
    }

    #[rstest]
    fn ties_keep_mentor_order(mut snapshot: Snapshot) {
        snapshot.assignments.clear();
        let room = RecommendationRanker::standard()
            .recommend_room(&snapshot, 101)
            .expect("room 101 exists");
        let order: Vec<u64> = room.recommendations.iter().map(|r| r.mentor_id).collect();
        assert_eq!(order, [2, 3, 1]);
    }

    #[rstest]
    fn unknown_room_is_none(snapshot: Snapshot) {
        assert!(RecommendationRanker::standard().recommend_room(&snapshot, 999).is_none());
    }

    #[rstest]
    fn recommends_every_room_in_first_seen_order(snapshot: Snapshot) {
        let rooms = RecommendationRanker::standard().recommend(&snapshot);
        let ids: Vec<u64> = rooms.iter().map(|room| room.profile.room_id()).collect();
        assert_eq!(ids, [101, 201]);
        assert!(rooms.iter().all(|room| room.recommendations.len() == 3));
    }

    #[rstest]
    fn no_mentors_yields_empty_rankings(mut snapshot: Snapshot) {
        snapshot.mentors.clear();
        let rooms = RecommendationRanker::standard().recommend(&snapshot);
        assert!(rooms.iter().all(|room| room.best().is_none()));
    }

    #[rstest]
    fn custom_scorer_keeps_fixed_blend(snapshot: Snapshot) {
        let room = RecommendationRanker::new(ExactMatchScorer)
            .recommend_room(&snapshot, 101)
            .expect("room 101 exists");
        let best = room.best().expect("mentors ranked");
        assert_eq!(best.compatibility_score, 83.3);
        assert_eq!(best.final_score, 88.3);
    }

    #[rstest]
    fn unrelated_mentor_scores_availability_share_only() {
        let snapshot = Snapshot {
            mentors: vec![mentor(1, "Ada", "Python")],
            assignments: Vec::new(),
            teams: vec![approved_team(1, 1, 101, "React")],
        };
        let room = RecommendationRanker::standard()
            .recommend_room(&snapshot, 101)
            .expect("room 101 exists");
        let ada = room.best().expect("Ada is ranked");
        assert_eq!(ada.compatibility_score, 0.0);
        assert_eq!(ada.availability_score, 100.0);
        assert_eq!(ada.final_score, 30.0);
    }

    #[rstest]
    fn custom_tables_drive_profiles() {
        let normalizer = TechNormalizer::new(SynonymMap::from_pairs([("ex", "elixir")]));
        let taxonomy = TechTaxonomy::new(
            [(TechCategory::Backend, HashSet::from([TechToken::new("elixir")]))],
            RelationGraph::default(),
        );
        let snapshot = Snapshot {
            mentors: vec![mentor(1, "Ada", "ex")],
            assignments: Vec::new(),
            teams: vec![approved_team(1, 1, 101, "Elixir")],
        };
        let room = RecommendationRanker::new(ExactMatchScorer)
            .with_tables(&normalizer, &taxonomy)
            .recommend_room(&snapshot, 101)
            .expect("room 101 exists");
        assert_eq!(room.profile.primary_category(), Some(TechCategory::Backend));
        let ada = room.best().expect("Ada is ranked");
        assert_eq!(ada.compatibility_score, 100.0);
        assert_eq!(ada.final_score, 100.0);
    }
}
