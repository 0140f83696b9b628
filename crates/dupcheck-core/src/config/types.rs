//! Configuration type definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DupcheckError;

/// Similarity cutoff at or above which a project is reported as a duplicate
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Which terms span the vectors compared for one query/document pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermSpace {
    /// Union of the query's and the document's terms
    #[default]
    Union,
    /// Query terms only; document-only terms are ignored
    QueryTerms,
}

impl FromStr for TermSpace {
    type Err = DupcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "union" => Ok(TermSpace::Union),
            "query-terms" | "query" => Ok(TermSpace::QueryTerms),
            other => Err(DupcheckError::invalid_value("term space", other)),
        }
    }
}

impl fmt::Display for TermSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermSpace::Union => write!(f, "union"),
            TermSpace::QueryTerms => write!(f, "query-terms"),
        }
    }
}

/// Inverse document frequency weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdfFormula {
    /// `ln((N + 1) / (df + 1)) + 1`
    #[default]
    Smoothed,
    /// `1 + ln(N / (1 + df))`
    Classic,
}

impl IdfFormula {
    /// Weight for a term found in `df` of `total_docs` documents
    pub fn idf(&self, total_docs: usize, df: usize) -> f64 {
        let n = total_docs as f64;
        let df = df as f64;
        match self {
            IdfFormula::Smoothed => ((n + 1.0) / (df + 1.0)).ln() + 1.0,
            IdfFormula::Classic => 1.0 + (n / (1.0 + df)).ln(),
        }
    }
}

impl FromStr for IdfFormula {
    type Err = DupcheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smoothed" => Ok(IdfFormula::Smoothed),
            "classic" => Ok(IdfFormula::Classic),
            other => Err(DupcheckError::invalid_value("idf formula", other)),
        }
    }
}

impl fmt::Display for IdfFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdfFormula::Smoothed => write!(f, "smoothed"),
            IdfFormula::Classic => write!(f, "classic"),
        }
    }
}

/// Duplicate check configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Minimum similarity score reported as a duplicate (inclusive)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Term space used when comparing vectors
    #[serde(default)]
    pub term_space: TermSpace,

    /// IDF weighting formula
    #[serde(default)]
    pub idf: IdfFormula,

    /// Drop common English stop words before counting terms
    #[serde(default = "default_stop_words")]
    pub stop_words: bool,

    /// Reduce terms to their English stem
    #[serde(default)]
    pub stemming: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            term_space: TermSpace::default(),
            idf: IdfFormula::default(),
            stop_words: default_stop_words(),
            stemming: false,
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_stop_words() -> bool {
    true
}
