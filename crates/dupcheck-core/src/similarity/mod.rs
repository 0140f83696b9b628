//! Similarity engine for flagging likely duplicate projects
//!
//! Every check builds its own [`SimilarityEngine`] from a fresh corpus
//! snapshot. Nothing is cached or shared between checks.

mod tfidf;

mod duplicates;

pub use duplicates::filter_matches;
pub use tfidf::{cosine_similarity, project_onto, TermVector, TfIdfModel, QUERY_INDEX};

use crate::config::{IdfFormula, TermSpace};
use crate::text::{document_text, tokenize, TokenizerOptions};

/// Ordered tokens of one unit of text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    tokens: Vec<String>,
}

impl Document {
    pub fn new(tokens: Vec<String>) -> Self {
        Document { tokens }
    }

    /// Tokenize raw text
    pub fn from_text(text: &str, options: &TokenizerOptions) -> Self {
        Document::new(tokenize(text, options))
    }

    /// Tokenize a project's title and description as a single text
    pub fn from_project(title: &str, description: &str, options: &TokenizerOptions) -> Self {
        Document::from_text(&document_text(title, description), options)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Options that shape the TF-IDF model
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelOptions {
    pub term_space: TermSpace,
    pub idf: IdfFormula,
}

/// Similarity score for one corpus document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDocument {
    /// Position of the document in the corpus slice (0-based, query excluded)
    pub position: usize,
    /// Similarity score (0.0 to 1.0)
    pub score: f64,
}

/// Similarity Engine
pub struct SimilarityEngine {
    model: TfIdfModel,
}

impl SimilarityEngine {
    /// Build the engine for one query against one corpus snapshot
    pub fn new(query: &Document, corpus: &[Document], options: ModelOptions) -> Self {
        SimilarityEngine {
            model: TfIdfModel::build(query, corpus, options),
        }
    }

    pub fn model(&self) -> &TfIdfModel {
        &self.model
    }

    /// Cosine similarity between the query and the corpus document at `position`
    pub fn calculate_similarity(&self, position: usize) -> f64 {
        let score = self.model.score(position + 1);
        if score.is_finite() {
            score
        } else {
            tracing::warn!(position, score, "non-finite similarity score, using 0");
            0.0
        }
    }

    /// Scores for every corpus document, in corpus order
    pub fn score_all(&self) -> Vec<ScoredDocument> {
        (0..self.model.corpus_len())
            .map(|position| {
                let score = self.calculate_similarity(position);
                tracing::trace!(position, score, "scored document");
                ScoredDocument { position, score }
            })
            .collect()
    }

    /// Corpus documents scoring at or above `threshold`, best first
    pub fn find_similar(&self, threshold: f64) -> Vec<ScoredDocument> {
        filter_matches(&self.score_all(), threshold)
    }
}
