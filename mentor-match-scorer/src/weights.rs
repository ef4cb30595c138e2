//! Fixed blend of compatibility and availability into the final score.

use mentor_match_core::{MAX_SCORE, round_to_tenth};

/// Share of the final score taken from skill compatibility.
pub const COMPATIBILITY_WEIGHT: f64 = 0.7;
/// Share of the final score taken from mentor availability.
pub const AVAILABILITY_WEIGHT: f64 = 0.3;

/// Blend both components as `0.7 * compatibility + 0.3 * availability`,
/// rounded to one decimal and clamped to `0.0..=100.0`.
///
/// # Examples
/// ```
/// use mentor_match_scorer::blend;
///
/// assert_eq!(blend(95.0, 70.0), 87.5);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "score blending requires weighted sums"
)]
pub fn blend(compatibility: f64, availability: f64) -> f64 {
    let blended = round_to_tenth(
        COMPATIBILITY_WEIGHT * compatibility + AVAILABILITY_WEIGHT * availability,
    );
    if blended.is_finite() {
        blended.clamp(0.0, MAX_SCORE)
    } else {
        0.0
    }
}
