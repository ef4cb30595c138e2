//! Score how well a mentor's skills cover a room's technology demand.
//!
//! The `Scorer` trait assigns a compatibility percentage to a mentor's
//! [`TokenSet`] given a [`RoomProfile`].

use crate::{RoomProfile, TokenSet};

/// Upper bound of every score in the engine.
pub const MAX_SCORE: f64 = 100.0;

/// Calculate a compatibility score for a mentor against a room.
///
/// Implementations must be thread-safe (`Send` + `Sync`). The method is
/// infallible; implementers return `0.0` when nothing matches or no
/// information is available.
///
/// Implementations must:
/// - Produce finite scores.
/// - Return values in `0.0..=100.0`.
///
/// Use [`Scorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use mentor_match_core::{RoomProfile, Scorer, TokenSet};
///
/// struct FullMarks;
///
/// impl Scorer for FullMarks {
///     fn score(&self, _mentor: &TokenSet, _room: &RoomProfile) -> f64 {
///         100.0
///     }
/// }
///
/// assert_eq!(FullMarks::sanitise(f64::NAN), 0.0);
/// assert_eq!(FullMarks::sanitise(140.0), 100.0);
/// ```
pub trait Scorer: Send + Sync {
    /// Return a score for `mentor_tokens` against `room`.
    fn score(&self, mentor_tokens: &TokenSet, room: &RoomProfile) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=100.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, MAX_SCORE)
    }
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, mentor_tokens: &TokenSet, room: &RoomProfile) -> f64 {
        (**self).score(mentor_tokens, room)
    }
}

/// Round half away from zero to one decimal place.
///
/// # Examples
/// ```
/// use mentor_match_core::round_to_tenth;
///
/// assert_eq!(round_to_tenth(95.0), 95.0);
/// assert_eq!(round_to_tenth(66.66), 66.7);
/// assert_eq!(round_to_tenth(12.25), 12.3);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "rounding to a fixed decimal place is float maths"
)]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
