use serde::Deserialize;
use thiserror::Error;

use beleg_core::Category;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to parse catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Brand tokens of well-known chains, as they appear on German receipts.
/// Token order is match priority within a line.
const BUILTIN_MERCHANTS: &[&str] = &[
    "KAUFLAND",
    "REWE",
    "ALDI",
    "LIDL",
    "EDEKA",
    "NETTO",
    "PENNY",
    "NORMA",
    "TEGUT",
    "GLOBUS",
    "ROSSMANN",
    "MUELLER",
    "APOTHEKE",
    "ARAL",
    "SHELL",
    "ESSO",
    "OMV",
    "MCDONALD",
    "BURGER KING",
    "SUBWAY",
    "NORDSEE",
    "MEDIA MARKT",
    "SATURN",
    "CONRAD",
    "CYBERPORT",
    "DEICHMANN",
    "TK MAXX",
    "PRIMARK",
    "ZARA",
    "H&M",
    "C&A",
    "IKEA",
    "OBI",
    "BAUHAUS",
    "HORNBACH",
    "JET",
    "DM",
];

const BUILTIN_RULES: &[(Category, &[&str])] = &[
    (
        Category::Grocery,
        &[
            "KAUFLAND", "REWE", "ALDI", "LIDL", "EDEKA", "NETTO", "PENNY", "NORMA", "TEGUT",
            "GLOBUS",
        ],
    ),
    (
        Category::Restaurant,
        &[
            "MCDONALD",
            "BURGER",
            "SUBWAY",
            "NORDSEE",
            "RESTAURANT",
            "PIZZA",
            "CAFE",
            "BISTRO",
            "IMBISS",
        ],
    ),
    (
        Category::Drogerie,
        &["ROSSMANN", "MUELLER", "APOTHEKE", "DROGERIE", "DM"],
    ),
    (
        Category::GasStation,
        &["ARAL", "SHELL", "ESSO", "OMV", "JET", "TANK"],
    ),
    (
        Category::Clothing,
        &[
            "DEICHMANN",
            "TK MAXX",
            "PRIMARK",
            "ZARA",
            "H&M",
            "C&A",
            "TEXTIL",
        ],
    ),
    (
        Category::Electronics,
        &["MEDIA MARKT", "SATURN", "CONRAD", "CYBERPORT", "ELEKTRO"],
    ),
    (Category::Other, &[]),
];

/// Read-only list of known merchant brand tokens. Built once at startup,
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct MerchantCatalog {
    tokens: Vec<String>,
}

#[derive(Deserialize)]
struct MerchantCatalogFile {
    merchants: Vec<String>,
}

impl MerchantCatalog {
    pub fn builtin() -> Self {
        Self::new(BUILTIN_MERCHANTS.iter().map(|t| t.to_string()).collect())
    }

    /// Tokens are stored uppercase; empty entries are dropped.
    pub fn new(tokens: Vec<String>) -> Self {
        let tokens = tokens
            .into_iter()
            .map(|t| t.trim().to_uppercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { tokens }
    }

    /// Load a replacement catalog, e.g.:
    ///
    /// ```toml
    /// merchants = ["KAUFLAND", "REWE", "ALDI"]
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let file: MerchantCatalogFile = toml::from_str(content)?;
        Ok(Self::new(file.merchants))
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Ordered category → keyword table. Iteration order is classification
/// priority; `Other` needs no keywords, it is the fallback.
#[derive(Debug, Clone)]
pub struct CategoryRules {
    rules: Vec<(Category, Vec<String>)>,
}

#[derive(Deserialize)]
struct CategoryRulesFile {
    rules: Vec<CategoryRuleEntry>,
}

#[derive(Deserialize)]
struct CategoryRuleEntry {
    category: Category,
    keywords: Vec<String>,
}

impl CategoryRules {
    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_RULES
                .iter()
                .map(|(cat, kws)| (*cat, kws.iter().map(|k| k.to_string()).collect()))
                .collect(),
        )
    }

    pub fn new(rules: Vec<(Category, Vec<String>)>) -> Self {
        let rules = rules
            .into_iter()
            .map(|(cat, kws)| {
                let kws = kws
                    .into_iter()
                    .map(|k| k.trim().to_uppercase())
                    .filter(|k| !k.is_empty())
                    .collect();
                (cat, kws)
            })
            .collect();
        Self { rules }
    }

    /// Load a replacement table, e.g.:
    ///
    /// ```toml
    /// [[rules]]
    /// category = "grocery"
    /// keywords = ["KAUFLAND", "REWE"]
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let file: CategoryRulesFile = toml::from_str(content)?;
        Ok(Self::new(
            file.rules
                .into_iter()
                .map(|e| (e.category, e.keywords))
                .collect(),
        ))
    }

    /// Map a merchant name to its spending category. Total function: an empty
    /// or unknown merchant classifies as `Other`.
    pub fn classify(&self, merchant: &str) -> Category {
        if merchant.is_empty() {
            return Category::Other;
        }
        let upper = merchant.to_uppercase();
        self.rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| upper.contains(k.as_str())))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Other)
    }
}
