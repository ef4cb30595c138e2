//! Mentor input records and the profiles derived from them.

use std::collections::BTreeSet;

use crate::{TechCategory, TechNormalizer, TechTaxonomy, TokenSet};

/// A mentor as supplied by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MentorRecord {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Free-text skill list, e.g. `"React, Node.js, MongoDB"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Option<String>,
}

/// Normalised view of a mentor used for scoring.
///
/// # Examples
/// ```
/// use mentor_match_core::{
///     MentorProfile, MentorRecord, TechCategory, TechNormalizer, TechTaxonomy,
/// };
///
/// let record = MentorRecord {
///     id: 7,
///     name: "Ada".into(),
///     email: "ada@example.com".into(),
///     skills: Some("React, Node.js, MongoDB".into()),
/// };
/// let profile =
///     MentorProfile::from_record(&record, TechNormalizer::standard(), TechTaxonomy::standard());
/// assert_eq!(profile.tokens.len(), 3);
/// assert!(profile.categories.contains(&TechCategory::Database));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MentorProfile {
    /// Mentor identifier.
    pub mentor_id: u64,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Canonical skill tokens.
    pub tokens: TokenSet,
    /// Categories covered by `tokens`.
    pub categories: BTreeSet<TechCategory>,
}

impl MentorProfile {
    /// Derive a profile from a stored record.
    ///
    /// Missing or blank skill text yields an empty token set.
    #[must_use]
    pub fn from_record(
        record: &MentorRecord,
        normalizer: &TechNormalizer,
        taxonomy: &TechTaxonomy,
    ) -> Self {
        let tokens = normalizer.extract_optional(record.skills.as_deref());
        let categories = taxonomy.categories_of(&tokens);
        Self {
            mentor_id: record.id,
            name: record.name.clone(),
            email: record.email.clone(),
            tokens,
            categories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(skills: Option<&str>) -> MentorRecord {
        MentorRecord {
            id: 1,
            name: "Grace".into(),
            email: "grace@example.com".into(),
            skills: skills.map(str::to_owned),
        }
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some(" ; , "))]
    fn blank_skills_produce_empty_profile(#[case] skills: Option<&str>) {
        let profile = MentorProfile::from_record(
            &record(skills),
            TechNormalizer::standard(),
            TechTaxonomy::standard(),
        );
        assert!(profile.tokens.is_empty());
        assert!(profile.categories.is_empty());
    }

    #[rstest]
    fn categories_follow_tokens() {
        let profile = MentorProfile::from_record(
            &record(Some("Docker, Figma, COBOL")),
            TechNormalizer::standard(),
            TechTaxonomy::standard(),
        );
        assert_eq!(profile.tokens.len(), 3);
        let categories: Vec<_> = profile.categories.into_iter().collect();
        assert_eq!(categories, [TechCategory::Devops, TechCategory::Design]);
    }
}
