//! Mentor ranking for the mentor matching engine.
//!
//! The crate provides:
//! - **Compatibility scoring** via [`CompatibilityScorer`], which credits
//!   exact skill matches in full and related technologies at 70%, weighted by
//!   how many teams in a room use each technology.
//! - **Ranking** via [`RecommendationRanker`], which blends compatibility with
//!   workload-based availability at a fixed 0.7/0.3 split (see [`blend`]) and
//!   orders mentors per room.
//! - **Assignment writes** via [`assign()`] and [`unassign()`], which delegate
//!   duplicate detection to an
//!   [`AssignmentStore`](mentor_match_core::AssignmentStore).
//!
//! # Examples
//!
//! ```
//! use mentor_match_core::{Snapshot, test_support::{approved_team, mentor}};
//! use mentor_match_scorer::RecommendationRanker;
//!
//! let snapshot = Snapshot {
//!     mentors: vec![mentor(1, "Ada", "Python"), mentor(2, "Brook", "React, Node.js")],
//!     assignments: Vec::new(),
//!     teams: vec![approved_team(1, 1, 101, "React")],
//! };
//! let room = RecommendationRanker::standard()
//!     .recommend_room(&snapshot, 101)
//!     .expect("room 101 has teams");
//! assert_eq!(room.best().map(|r| r.mentor_id), Some(2));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod assign;
mod compatibility;
mod ranker;
mod types;
mod weights;

pub use assign::{AssignOutcome, UnassignOutcome, assign, unassign};
pub use compatibility::{CompatibilityScorer, EXACT_MATCH_WEIGHT, RELATED_MATCH_WEIGHT};
pub use ranker::RecommendationRanker;
pub use types::{Recommendation, RoomRecommendations};
pub use weights::{AVAILABILITY_WEIGHT, COMPATIBILITY_WEIGHT, blend};
