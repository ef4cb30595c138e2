//! Shared test harness modules for the mentor-match CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod assign_unit;
mod helpers;
mod recommend_unit;
