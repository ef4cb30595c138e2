//! Core domain types for the mentor matching engine.
//!
//! The crate turns free-text skill and technology strings into canonical
//! [`TechToken`] sets, aggregates the approved teams of each room into an
//! immutable [`RoomProfile`], derives per-mentor [`WorkloadRecord`]s from the
//! current assignment table, and defines the [`Scorer`] and
//! [`AssignmentStore`] seams used by the ranking crate.
//!
//! Every computation here is a pure function of its inputs. Profiles are
//! rebuilt on each call; nothing is cached between invocations.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod assignment;
pub mod category;
pub mod mentor;
pub mod normalizer;
pub mod room;
pub mod scorer;
pub mod snapshot;
pub mod store;
pub mod taxonomy;
pub mod token;
pub mod workload;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use assignment::{Assignment, RoomLocation};
pub use category::{TechCategory, UnknownCategoryError};
pub use mentor::{MentorProfile, MentorRecord};
pub use normalizer::{SynonymMap, TechNormalizer};
pub use room::{ProjectComplexity, RoomProfile, RoomProfileBuilder, TeamRecord, TechCounts};
pub use scorer::{MAX_SCORE, Scorer, round_to_tenth};
pub use snapshot::Snapshot;
#[cfg(feature = "serde")]
pub use snapshot::SnapshotError;
pub use store::{AssignmentStore, MemoryAssignmentStore, StoreError};
#[cfg(feature = "store-sqlite")]
pub use store::{SqliteAssignmentStore, SqliteAssignmentStoreError};
pub use taxonomy::{RelationGraph, TechTaxonomy};
pub use token::{TechToken, TokenSet};
pub use workload::{WorkloadRecord, WorkloadTracker};
