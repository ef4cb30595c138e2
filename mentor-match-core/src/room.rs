//! Aggregate the approved teams of each room into a technology profile.
//!
//! A [`RoomProfile`] counts, for every canonical token, how many team
//! submissions in the room mention it. A token repeated inside one
//! submission still counts once because the normaliser deduplicates.
//! Rooms without an approved team get no profile at all.

use indexmap::IndexMap;
use log::debug;

use crate::{RoomLocation, TechCategory, TechNormalizer, TechTaxonomy, TechToken};

/// Per-token submission counts in first-seen order.
pub type TechCounts = IndexMap<TechToken, u32>;

/// Tokens that mark a project as complex regardless of breadth.
pub const COMPLEX_TECH: [&str; 9] = [
    "kubernetes",
    "docker",
    "microservices",
    "tensorflow",
    "pytorch",
    "blockchain",
    "aws",
    "azure",
    "gcp",
];

/// Distinct-token count at or above which a room is `high` complexity.
pub const HIGH_COMPLEXITY_MIN_UNIQUE: usize = 8;

/// Distinct-token count at or below which a room is `low` complexity.
pub const LOW_COMPLEXITY_MAX_UNIQUE: usize = 3;

/// A team as supplied by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamRecord {
    /// Unique identifier.
    pub id: u64,
    /// Floor of the team's room, if placed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub floor_id: Option<u64>,
    /// The team's room, if placed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub room_id: Option<u64>,
    /// Only approved teams contribute to profiles and workloads.
    pub approved: bool,
    /// Free-text technology stack from the team's submission.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tech_stack: Option<String>,
}

impl TeamRecord {
    /// The team's room, when both floor and room are set.
    #[must_use]
    pub fn location(&self) -> Option<RoomLocation> {
        Some(RoomLocation::new(self.floor_id?, self.room_id?))
    }

    /// The team's room when it is approved and placed, otherwise `None`.
    #[must_use]
    pub fn approved_location(&self) -> Option<RoomLocation> {
        self.location().filter(|_| self.approved)
    }
}

/// Coarse project complexity of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ProjectComplexity {
    /// Three or fewer distinct technologies, none complex.
    Low,
    /// Between the low and high thresholds.
    Medium,
    /// Eight or more distinct technologies, or any complex technology.
    High,
}

impl ProjectComplexity {
    /// Classify a room from its token counts.
    ///
    /// The complex-technology override takes priority over the count
    /// thresholds.
    ///
    /// # Examples
    /// ```
    /// use mentor_match_core::{ProjectComplexity, TechToken, room::TechCounts};
    ///
    /// let counts: TechCounts = [("react", 1), ("docker", 1)]
    ///     .into_iter()
    ///     .map(|(t, c)| (TechToken::new(t), c))
    ///     .collect();
    /// assert_eq!(ProjectComplexity::classify(&counts), ProjectComplexity::High);
    /// ```
    #[must_use]
    pub fn classify(tech_counts: &TechCounts) -> Self {
        let unique = tech_counts.len();
        let has_complex_tech = COMPLEX_TECH.iter().any(|tech| tech_counts.contains_key(*tech));
        if has_complex_tech || unique >= HIGH_COMPLEXITY_MIN_UNIQUE {
            Self::High
        } else if unique <= LOW_COMPLEXITY_MAX_UNIQUE {
            Self::Low
        } else {
            Self::Medium
        }
    }

    /// Return the complexity as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for ProjectComplexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable technology-demand snapshot for one room.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoomProfile {
    room_id: u64,
    floor_id: u64,
    team_count: u32,
    tech_counts: TechCounts,
    unique_tech_count: usize,
    project_complexity: ProjectComplexity,
    primary_category: Option<TechCategory>,
}

impl RoomProfile {
    /// Build a profile from pre-aggregated counts, deriving the metrics.
    ///
    /// # Examples
    /// ```
    /// use mentor_match_core::{
    ///     ProjectComplexity, RoomLocation, RoomProfile, TechCategory, TechTaxonomy, TechToken,
    /// };
    ///
    /// let counts = [("react", 3), ("node", 2), ("express", 1)]
    ///     .into_iter()
    ///     .map(|(t, c)| (TechToken::new(t), c))
    ///     .collect();
    /// let location = RoomLocation::new(1, 101);
    /// let profile = RoomProfile::from_counts(location, 3, counts, TechTaxonomy::standard());
    /// assert_eq!(profile.unique_tech_count(), 3);
    /// assert_eq!(profile.project_complexity(), ProjectComplexity::Low);
    /// assert_eq!(profile.primary_category(), Some(TechCategory::Frontend));
    /// ```
    #[must_use]
    pub fn from_counts(
        location: RoomLocation,
        team_count: u32,
        tech_counts: TechCounts,
        taxonomy: &TechTaxonomy,
    ) -> Self {
        let primary_category =
            most_frequent(&tech_counts).and_then(|t| taxonomy.category_of(t.as_str()));
        Self {
            room_id: location.room_id,
            floor_id: location.floor_id,
            team_count,
            unique_tech_count: tech_counts.len(),
            project_complexity: ProjectComplexity::classify(&tech_counts),
            primary_category,
            tech_counts,
        }
    }

    /// Room identifier.
    #[must_use]
    pub const fn room_id(&self) -> u64 {
        self.room_id
    }

    /// Floor identifier.
    #[must_use]
    pub const fn floor_id(&self) -> u64 {
        self.floor_id
    }

    /// The room as a location.
    #[must_use]
    pub const fn location(&self) -> RoomLocation {
        RoomLocation::new(self.floor_id, self.room_id)
    }

    /// Number of approved teams in the room.
    #[must_use]
    pub const fn team_count(&self) -> u32 {
        self.team_count
    }

    /// Submission counts per token, in first-seen order.
    #[must_use]
    pub const fn tech_counts(&self) -> &TechCounts {
        &self.tech_counts
    }

    /// Sum of all token counts.
    #[must_use]
    pub fn total_frequency(&self) -> u32 {
        self.tech_counts.values().sum()
    }

    /// Number of distinct tokens.
    #[must_use]
    pub const fn unique_tech_count(&self) -> usize {
        self.unique_tech_count
    }

    /// Derived complexity class.
    #[must_use]
    pub const fn project_complexity(&self) -> ProjectComplexity {
        self.project_complexity
    }

    /// Category of the most frequent token, if it has one.
    #[must_use]
    pub const fn primary_category(&self) -> Option<TechCategory> {
        self.primary_category
    }
}

/// Highest-count token; ties resolve to the earliest inserted.
fn most_frequent(tech_counts: &TechCounts) -> Option<&TechToken> {
    let mut best: Option<(&TechToken, u32)> = None;
    for (token, &count) in tech_counts {
        if best.is_none_or(|(_, top)| count > top) {
            best = Some((token, count));
        }
    }
    best.map(|(token, _)| token)
}

#[derive(Debug, Default)]
struct RoomAccumulator {
    team_count: u32,
    tech_counts: TechCounts,
}

/// Builds one [`RoomProfile`] per room with at least one approved team.
#[derive(Debug, Clone, Copy)]
pub struct RoomProfileBuilder<'a> {
    normalizer: &'a TechNormalizer,
    taxonomy: &'a TechTaxonomy,
}

impl<'a> RoomProfileBuilder<'a> {
    /// Create a builder over the given lookup tables.
    #[must_use]
    pub const fn new(normalizer: &'a TechNormalizer, taxonomy: &'a TechTaxonomy) -> Self {
        Self {
            normalizer,
            taxonomy,
        }
    }

    /// Aggregate `teams` into room profiles.
    ///
    /// Unapproved and unplaced teams are skipped. Profiles appear in the
    /// order each room's first approved team appears in `teams`.
    #[must_use]
    pub fn build(&self, teams: &[TeamRecord]) -> Vec<RoomProfile> {
        let mut rooms: IndexMap<RoomLocation, RoomAccumulator> = IndexMap::new();
        for team in teams {
            let Some(location) = team.approved_location() else {
                debug!("team {} is unapproved or has no room; skipping", team.id);
                continue;
            };
            let room = rooms.entry(location).or_default();
            room.team_count += 1;
            for token in self.normalizer.extract_optional(team.tech_stack.as_deref()) {
                *room.tech_counts.entry(token).or_insert(0) += 1;
            }
        }

        rooms
            .into_iter()
            .map(|(location, room)| {
                RoomProfile::from_counts(location, room.team_count, room.tech_counts, self.taxonomy)
            })
            .collect()
    }
}

impl RoomProfileBuilder<'static> {
    /// Builder over the standard normaliser and taxonomy.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(TechNormalizer::standard(), TechTaxonomy::standard())
    }
}
