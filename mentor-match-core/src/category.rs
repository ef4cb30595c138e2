//! Broad technology categories used to classify tokens.
//!
//! Declaration order is significant: [`TechTaxonomy`](crate::TechTaxonomy)
//! checks categories in this order and the first category containing a token
//! wins. The derived `Ord` follows the same order.
//!
//! # Examples
//! ```
//! use mentor_match_core::TechCategory;
//!
//! assert_eq!(TechCategory::AiMl.as_str(), "ai_ml");
//! assert_eq!(TechCategory::Frontend.to_string(), "frontend");
//! ```

use thiserror::Error;

/// A technology category in fixed declared order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TechCategory {
    /// Browser-side frameworks, markup and styling.
    Frontend,
    /// Server runtimes, web frameworks and general-purpose languages.
    Backend,
    /// Native and cross-platform mobile toolkits.
    Mobile,
    /// Relational, document and key-value stores.
    Database,
    /// Containers, orchestration and delivery tooling.
    Devops,
    /// Hosted cloud platforms.
    Cloud,
    /// Machine learning and data science.
    AiMl,
    /// Distributed ledgers and smart contracts.
    Blockchain,
    /// Product and interface design tools.
    Design,
}

impl TechCategory {
    /// Every category in declared order.
    pub const ALL: [Self; 9] = [
        Self::Frontend,
        Self::Backend,
        Self::Mobile,
        Self::Database,
        Self::Devops,
        Self::Cloud,
        Self::AiMl,
        Self::Blockchain,
        Self::Design,
    ];

    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::Mobile => "mobile",
            Self::Database => "database",
            Self::Devops => "devops",
            Self::Cloud => "cloud",
            Self::AiMl => "ai_ml",
            Self::Blockchain => "blockchain",
            Self::Design => "design",
        }
    }
}

impl std::fmt::Display for TechCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised category name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown technology category '{name}'")]
pub struct UnknownCategoryError {
    /// The rejected input.
    pub name: String,
}

impl std::str::FromStr for TechCategory {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == lowered)
            .ok_or_else(|| UnknownCategoryError { name: s.to_owned() })
    }
}
