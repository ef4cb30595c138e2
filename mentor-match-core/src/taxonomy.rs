//! Static category table and token relation graph.
//!
//! Both tables are built once and never mutated. Category lookup walks the
//! categories in declared order and returns the first one containing the
//! token. The relation graph grants partial credit between related but
//! distinct technologies; see the compatibility scorer for how it is used.

use std::{
    collections::{BTreeSet, HashMap, HashSet},
    sync::LazyLock,
};

use crate::{TechCategory, TechToken, TokenSet};

const STANDARD_CATEGORIES: &[(TechCategory, &[&str])] = &[
    (
        TechCategory::Frontend,
        &[
            "html", "css", "javascript", "typescript", "react", "vue", "angular", "svelte",
            "next", "nuxt", "tailwind", "bootstrap", "jquery", "redux", "sass",
        ],
    ),
    (
        TechCategory::Backend,
        &[
            "node", "express", "nestjs", "python", "django", "flask", "fastapi", "java",
            "spring", "php", "laravel", "ruby", "rails", "go", "rust", "c#", ".net", "c++",
            "graphql", "api",
        ],
    ),
    (
        TechCategory::Mobile,
        &[
            "react native", "flutter", "dart", "swift", "kotlin", "android", "ios", "ionic",
            "xamarin",
        ],
    ),
    (
        TechCategory::Database,
        &[
            "mysql", "postgresql", "mongodb", "sqlite", "redis", "firebase", "supabase",
            "sql server", "oracle", "cassandra", "dynamodb", "sql",
        ],
    ),
    (
        TechCategory::Devops,
        &[
            "docker", "kubernetes", "jenkins", "terraform", "ansible", "git", "github actions",
            "ci", "cd", "nginx", "linux", "microservices",
        ],
    ),
    (
        TechCategory::Cloud,
        &["aws", "azure", "gcp", "heroku", "vercel", "netlify", "digitalocean"],
    ),
    (
        TechCategory::AiMl,
        &[
            "machine learning", "artificial intelligence", "tensorflow", "pytorch",
            "scikit-learn", "keras", "pandas", "numpy", "opencv", "nlp", "deep learning",
            "computer vision", "data science", "llm",
        ],
    ),
    (
        TechCategory::Blockchain,
        &["blockchain", "solidity", "ethereum", "web3", "smart contracts", "hardhat", "polygon"],
    ),
    (
        TechCategory::Design,
        &["figma", "adobe xd", "sketch", "ui", "ux", "photoshop", "illustrator"],
    ),
];

const STANDARD_RELATIONS: &[(&str, &[&str])] = &[
    ("javascript", &["typescript", "node", "react", "vue", "angular"]),
    ("typescript", &["javascript", "angular", "nestjs"]),
    ("react", &["react native", "next", "redux", "javascript"]),
    ("vue", &["nuxt", "javascript"]),
    ("angular", &["typescript"]),
    ("node", &["express", "nestjs", "javascript"]),
    ("python", &["django", "flask", "fastapi", "machine learning", "pandas"]),
    ("java", &["spring", "kotlin", "android"]),
    ("php", &["laravel"]),
    ("ruby", &["rails"]),
    ("c#", &[".net", "xamarin"]),
    ("kotlin", &["android"]),
    ("swift", &["ios"]),
    ("flutter", &["dart", "firebase"]),
    ("sql", &["mysql", "postgresql", "sqlite", "sql server"]),
    ("mysql", &["postgresql"]),
    ("mongodb", &["firebase"]),
    ("docker", &["kubernetes", "microservices"]),
    ("aws", &["azure", "gcp"]),
    ("machine learning", &["tensorflow", "pytorch", "scikit-learn", "deep learning"]),
    ("tensorflow", &["keras", "pytorch"]),
    ("deep learning", &["pytorch", "tensorflow", "computer vision", "nlp"]),
    ("blockchain", &["solidity", "ethereum", "web3", "smart contracts"]),
    ("solidity", &["ethereum", "hardhat"]),
    ("figma", &["ui", "ux", "adobe xd", "sketch"]),
];

static STANDARD_TAXONOMY: LazyLock<TechTaxonomy> = LazyLock::new(|| {
    let categories = STANDARD_CATEGORIES.iter().map(|(category, tokens)| {
        let set = tokens.iter().map(|t| TechToken::new(t)).collect::<HashSet<_>>();
        (*category, set)
    });
    let relations = RelationGraph::from_pairs(STANDARD_RELATIONS.iter().copied());
    TechTaxonomy::new(categories, relations)
});

/// Immutable adjacency lists between related tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationGraph {
    edges: HashMap<TechToken, Vec<TechToken>>,
}

impl RelationGraph {
    /// Build a graph from `(token, related tokens)` pairs.
    ///
    /// Repeated keys append to the existing adjacency list.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a [&'a str])>,
    {
        let mut edges: HashMap<TechToken, Vec<TechToken>> = HashMap::new();
        for (token, related) in pairs {
            edges
                .entry(TechToken::new(token))
                .or_default()
                .extend(related.iter().map(|r| TechToken::new(r)));
        }
        Self { edges }
    }

    /// Tokens listed as related to `token`, in declared order.
    #[must_use]
    pub fn related_to(&self, token: &str) -> &[TechToken] {
        self.edges.get(token).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Category and relation lookups over static tables.
///
/// # Examples
/// ```
/// use mentor_match_core::{TechCategory, TechTaxonomy};
///
/// let taxonomy = TechTaxonomy::standard();
/// assert_eq!(taxonomy.category_of("react"), Some(TechCategory::Frontend));
/// assert!(taxonomy.related_to("node").iter().any(|t| t.as_str() == "express"));
/// assert!(taxonomy.related_to("cobol").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TechTaxonomy {
    categories: Vec<(TechCategory, HashSet<TechToken>)>,
    relations: RelationGraph,
}

impl TechTaxonomy {
    /// Build a taxonomy. Categories keep the iteration order of `categories`.
    pub fn new<I>(categories: I, relations: RelationGraph) -> Self
    where
        I: IntoIterator<Item = (TechCategory, HashSet<TechToken>)>,
    {
        Self {
            categories: categories.into_iter().collect(),
            relations,
        }
    }

    /// The process-wide taxonomy built from the built-in tables.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD_TAXONOMY
    }

    /// First category, in declared order, whose set contains `token`.
    #[must_use]
    pub fn category_of(&self, token: &str) -> Option<TechCategory> {
        self.categories
            .iter()
            .find(|(_, tokens)| tokens.contains(token))
            .map(|(category, _)| *category)
    }

    /// Relation graph entry for `token`; empty when absent.
    #[must_use]
    pub fn related_to(&self, token: &str) -> &[TechToken] {
        self.relations.related_to(token)
    }

    /// Report whether `a` lists `b` or `b` lists `a` as related.
    #[must_use]
    pub fn are_related(&self, a: &str, b: &str) -> bool {
        self.related_to(a).iter().any(|t| t.as_str() == b)
            || self.related_to(b).iter().any(|t| t.as_str() == a)
    }

    /// Distinct categories covered by `tokens`.
    #[must_use]
    pub fn categories_of(&self, tokens: &TokenSet) -> BTreeSet<TechCategory> {
        tokens
            .iter()
            .filter_map(|token| self.category_of(token.as_str()))
            .collect()
    }
}
