//! Facade crate for the mentor matching engine.
//!
//! This crate re-exports the core domain types, the ranking API and the
//! optional SQLite assignment store behind feature flags.

#![forbid(unsafe_code)]

pub use mentor_match_core::{
    Assignment, AssignmentStore, MemoryAssignmentStore, MentorProfile, MentorRecord,
    ProjectComplexity, RoomLocation, RoomProfile, RoomProfileBuilder, Scorer, Snapshot,
    StoreError, TeamRecord, TechCategory, TechNormalizer, TechTaxonomy, TechToken, TokenSet,
    WorkloadRecord, WorkloadTracker,
};
pub use mentor_match_scorer::{
    AVAILABILITY_WEIGHT, AssignOutcome, COMPATIBILITY_WEIGHT, CompatibilityScorer,
    Recommendation, RecommendationRanker, RoomRecommendations, UnassignOutcome, assign, blend,
    unassign,
};

#[cfg(feature = "serde")]
pub use mentor_match_core::SnapshotError;

#[cfg(feature = "store-sqlite")]
pub use mentor_match_core::{SqliteAssignmentStore, SqliteAssignmentStoreError};

#[cfg(feature = "test-support")]
pub use mentor_match_core::test_support;
