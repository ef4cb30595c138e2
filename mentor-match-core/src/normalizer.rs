//! Tokenise and canonicalise free-text technology strings.
//!
//! The pipeline for each fragment is: split on `, ; | /` and line breaks,
//! lowercase, trim, strip one trailing file suffix (`.js`, `.css`, `.html`,
//! `.php`, `.py`), strip one leading article (`the`, `a`, `an`), then fold the
//! result through the [`SynonymMap`] exactly once.
//!
//! Malformed or empty input is not an error: it yields an empty set.
//!
//! # Examples
//! ```
//! use mentor_match_core::TechNormalizer;
//!
//! let tokens = TechNormalizer::standard().extract_tokens("React, Node.js; MongoDB");
//! let names: Vec<&str> = tokens.iter().map(|t| t.as_str()).collect();
//! assert_eq!(names, ["react", "node", "mongodb"]);
//! ```

use std::{collections::HashMap, sync::LazyLock};

use crate::{TechToken, TokenSet};

const SEPARATORS: [char; 6] = [',', ';', '|', '/', '\n', '\r'];
const FILE_SUFFIXES: [&str; 5] = [".js", ".css", ".html", ".php", ".py"];
const ARTICLES: [&str; 3] = ["the ", "a ", "an "];

/// Alias spellings folded into their canonical token.
const STANDARD_SYNONYMS: &[(&str, &str)] = &[
    ("reactjs", "react"),
    ("react js", "react"),
    ("nodejs", "node"),
    ("node js", "node"),
    ("vuejs", "vue"),
    ("nextjs", "next"),
    ("nuxtjs", "nuxt"),
    ("expressjs", "express"),
    ("angularjs", "angular"),
    ("js", "javascript"),
    ("es6", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("python3", "python"),
    ("golang", "go"),
    ("c sharp", "c#"),
    ("csharp", "c#"),
    ("cpp", "c++"),
    ("postgres", "postgresql"),
    ("psql", "postgresql"),
    ("mongo", "mongodb"),
    ("mssql", "sql server"),
    ("k8s", "kubernetes"),
    ("amazon web services", "aws"),
    ("google cloud", "gcp"),
    ("google cloud platform", "gcp"),
    ("microsoft azure", "azure"),
    ("tf", "tensorflow"),
    ("torch", "pytorch"),
    ("sklearn", "scikit-learn"),
    ("ml", "machine learning"),
    ("ai", "artificial intelligence"),
    ("rn", "react native"),
    ("react-native", "react native"),
    ("tailwindcss", "tailwind"),
    ("tailwind css", "tailwind"),
    ("sol", "solidity"),
    ("eth", "ethereum"),
];

static STANDARD_NORMALIZER: LazyLock<TechNormalizer> = LazyLock::new(|| {
    TechNormalizer::new(SynonymMap::from_pairs(STANDARD_SYNONYMS.iter().copied()))
});

/// Immutable alias table applied once per token.
///
/// Resolution is a single hop: if `a -> b` and `b -> c` are both present,
/// `a` resolves to `b`, never to `c`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymMap {
    entries: HashMap<String, TechToken>,
}

impl SynonymMap {
    /// Build a map from `(alias, canonical)` pairs. Both sides are lowercased.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(alias, canonical)| (alias.trim().to_lowercase(), TechToken::new(canonical)))
            .collect();
        Self { entries }
    }

    /// Look up the canonical token for `alias`, if mapped.
    #[must_use]
    pub fn resolve(&self, alias: &str) -> Option<&TechToken> {
        self.entries.get(alias)
    }

    /// Iterate over `(alias, canonical)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TechToken)> {
        self.entries
            .iter()
            .map(|(alias, canonical)| (alias.as_str(), canonical))
    }
}

/// Splits raw technology text into a deduplicated [`TokenSet`].
#[derive(Debug, Clone, Default)]
pub struct TechNormalizer {
    synonyms: SynonymMap,
}

impl TechNormalizer {
    /// Build a normaliser around a custom synonym table.
    #[must_use]
    pub const fn new(synonyms: SynonymMap) -> Self {
        Self { synonyms }
    }

    /// The process-wide normaliser using the built-in synonym table.
    ///
    /// The table is built on first use and never mutated afterwards.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_NORMALIZER
    }

    /// The synonym table backing this normaliser.
    #[must_use]
    pub const fn synonyms(&self) -> &SynonymMap {
        &self.synonyms
    }

    /// Extract canonical tokens from `raw`.
    ///
    /// Tokens appear once, in the order they were first seen.
    #[must_use]
    pub fn extract_tokens(&self, raw: &str) -> TokenSet {
        raw.split(SEPARATORS)
            .filter_map(|fragment| self.canonicalise(fragment))
            .collect()
    }

    /// Extract tokens from an optional string; `None` yields an empty set.
    #[must_use]
    pub fn extract_optional(&self, raw: Option<&str>) -> TokenSet {
        raw.map(|text| self.extract_tokens(text)).unwrap_or_default()
    }

    fn canonicalise(&self, fragment: &str) -> Option<TechToken> {
        let lowered = fragment.trim().to_lowercase();
        let stem = strip_article(strip_file_suffix(&lowered)).trim();
        if stem.is_empty() {
            return None;
        }
        Some(
            self.synonyms
                .resolve(stem)
                .cloned()
                .unwrap_or_else(|| TechToken::new(stem)),
        )
    }
}

fn strip_file_suffix(fragment: &str) -> &str {
    FILE_SUFFIXES
        .iter()
        .find_map(|suffix| fragment.strip_suffix(suffix))
        .unwrap_or(fragment)
}

fn strip_article(fragment: &str) -> &str {
    ARTICLES
        .iter()
        .find_map(|article| fragment.strip_prefix(article))
        .unwrap_or(fragment)
}
