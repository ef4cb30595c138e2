//! Canonical technology tokens.
//!
//! A [`TechToken`] is the lowercase, normalised name of one technology, such
//! as `react` or `react native`. Multi-word names stay a single token.
//!
//! # Examples
//! ```
//! use mentor_match_core::{TechToken, TokenSet};
//!
//! let token = TechToken::new("React Native");
//! assert_eq!(token.as_str(), "react native");
//!
//! let set: TokenSet = ["react", "node", "react"].into_iter().map(TechToken::new).collect();
//! assert_eq!(set.len(), 2);
//! ```

use std::{borrow::Borrow, fmt};

use indexmap::IndexSet;

/// Deduplicated tokens in first-seen order.
pub type TokenSet = IndexSet<TechToken>;

/// Canonical lowercase identifier for one technology.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TechToken(String);

impl TechToken {
    /// Build a token, lowercasing and trimming the input.
    ///
    /// No synonym folding happens here; use
    /// [`TechNormalizer`](crate::TechNormalizer) for the full pipeline.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Return the token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TechToken {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TechToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TechToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TechToken {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("React", "react")]
    #[case("  PostgreSQL ", "postgresql")]
    #[case("React Native", "react native")]
    fn new_lowercases_and_trims(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(TechToken::new(raw).as_str(), expected);
    }

    #[rstest]
    fn token_sets_can_be_queried_by_str() {
        let set: TokenSet = [TechToken::new("docker")].into_iter().collect();
        assert!(set.contains("docker"));
        assert!(!set.contains("podman"));
    }
}
