//! Taxonomy-aware compatibility scoring.
//!
//! A room token earns full weight when the mentor lists it verbatim and
//! partial weight when it is related to one of the mentor's tokens in either
//! direction. The score is the weighted share of the room's total token
//! frequency, as a percentage rounded to one decimal place.

use mentor_match_core::{RoomProfile, Scorer, TechTaxonomy, TokenSet, round_to_tenth};

/// Weight credited for a verbatim match.
pub const EXACT_MATCH_WEIGHT: f64 = 1.0;
/// Weight credited for a related-technology match.
pub const RELATED_MATCH_WEIGHT: f64 = 0.7;

/// [`Scorer`] backed by a [`TechTaxonomy`] relation graph.
///
/// # Examples
/// ```
/// use mentor_match_core::{RoomProfileBuilder, Scorer, TeamRecord, TechNormalizer};
/// use mentor_match_scorer::CompatibilityScorer;
///
/// let team = |id, stack: &str| TeamRecord {
///     id,
///     floor_id: Some(1),
///     room_id: Some(101),
///     approved: true,
///     tech_stack: Some(stack.to_owned()),
/// };
/// let teams = [team(1, "React, Node"), team(2, "React, Node"), team(3, "React, Express")];
/// let rooms = RoomProfileBuilder::standard().build(&teams);
/// let mentor = TechNormalizer::standard().extract_tokens("React, Node.js, MongoDB");
///
/// assert_eq!(CompatibilityScorer::standard().score(&mentor, &rooms[0]), 95.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityScorer<'a> {
    taxonomy: &'a TechTaxonomy,
}

impl<'a> CompatibilityScorer<'a> {
    /// Score against a custom taxonomy.
    #[must_use]
    pub const fn new(taxonomy: &'a TechTaxonomy) -> Self {
        Self { taxonomy }
    }

    /// Weight earned by `room_token` given the mentor's tokens.
    fn weight(&self, mentor_tokens: &TokenSet, room_token: &str) -> f64 {
        if mentor_tokens.contains(room_token) {
            return EXACT_MATCH_WEIGHT;
        }
        let related = mentor_tokens
            .iter()
            .any(|mentor_token| self.taxonomy.are_related(mentor_token.as_str(), room_token));
        if related { RELATED_MATCH_WEIGHT } else { 0.0 }
    }
}

impl CompatibilityScorer<'static> {
    /// Scorer over the standard taxonomy.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(TechTaxonomy::standard())
    }
}

impl Scorer for CompatibilityScorer<'_> {
    #[expect(
        clippy::float_arithmetic,
        reason = "compatibility is a weighted share of room demand"
    )]
    fn score(&self, mentor_tokens: &TokenSet, room: &RoomProfile) -> f64 {
        let total = room.total_frequency();
        if mentor_tokens.is_empty() || total == 0 {
            return 0.0;
        }
        let matched: f64 = room
            .tech_counts()
            .iter()
            .map(|(token, count)| self.weight(mentor_tokens, token.as_str()) * f64::from(*count))
            .sum();
        Self::sanitise(round_to_tenth(matched / f64::from(total) * 100.0))
    }
}
