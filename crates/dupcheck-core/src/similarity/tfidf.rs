use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::TermSpace;
use crate::similarity::{Document, ModelOptions};

/// Sparse term → weight vector.
///
/// Ordered so that sums over a vector always run in the same order and
/// repeated checks produce bit-identical scores.
pub type TermVector = BTreeMap<String, f64>;

/// Index of the query in a model's document list
pub const QUERY_INDEX: usize = 0;

/// Raw term counts for one token sequence
pub fn term_frequencies(tokens: &[String]) -> HashMap<&str, f64> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}

pub fn cosine_similarity(vec_a: &TermVector, vec_b: &TermVector) -> f64 {
    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (term, weight) in vec_a {
        norm_a += weight * weight;
        if let Some(weight_b) = vec_b.get(term) {
            dot_product += weight * weight_b;
        }
    }

    for weight in vec_b.values() {
        norm_b += weight * weight;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Rounding can push identical vectors a hair above 1.0
    (dot_product / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}

/// Restrict `vector` to the terms present in `terms`
pub fn project_onto(vector: &TermVector, terms: &TermVector) -> TermVector {
    vector
        .iter()
        .filter(|(term, _)| terms.contains_key(*term))
        .map(|(term, weight)| (term.clone(), *weight))
        .collect()
}

/// TF-IDF statistics and vectors for one query and its comparison corpus.
///
/// Document 0 is the query; documents `1..=N` are the corpus entries in the
/// order given. All vectors are computed up front by [`TfIdfModel::build`].
#[derive(Debug, Clone)]
pub struct TfIdfModel {
    options: ModelOptions,
    doc_freq: HashMap<String, usize>,
    vectors: Vec<TermVector>,
}

impl TfIdfModel {
    /// Count terms, document frequencies and materialize every vector
    pub fn build(query: &Document, corpus: &[Document], options: ModelOptions) -> Self {
        let documents = std::iter::once(query).chain(corpus.iter());

        let term_freqs: Vec<HashMap<&str, f64>> = documents
            .map(|doc| term_frequencies(doc.tokens()))
            .collect();

        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        for freqs in &term_freqs {
            for term in freqs.keys() {
                *doc_freq.entry((*term).to_string()).or_insert(0) += 1;
            }
        }

        let total_docs = term_freqs.len();
        let vectors = term_freqs
            .iter()
            .map(|freqs| {
                freqs
                    .iter()
                    .map(|(term, tf)| {
                        let df = doc_freq.get(*term).copied().unwrap_or(1);
                        ((*term).to_string(), tf * options.idf.idf(total_docs, df))
                    })
                    .collect::<TermVector>()
            })
            .collect();

        TfIdfModel {
            options,
            doc_freq,
            vectors,
        }
    }

    /// Number of documents, query included
    pub fn total_docs(&self) -> usize {
        self.vectors.len()
    }

    /// Number of corpus documents, query excluded
    pub fn corpus_len(&self) -> usize {
        self.vectors.len().saturating_sub(1)
    }

    /// Number of distinct terms across all documents
    pub fn vocabulary_len(&self) -> usize {
        self.doc_freq.len()
    }

    /// Number of documents containing `term`
    pub fn document_frequency(&self, term: &str) -> usize {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// IDF weight of `term`, or `None` when no document contains it
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.doc_freq
            .get(term)
            .map(|&df| self.options.idf.idf(self.total_docs(), df))
    }

    /// TF-IDF vector of document `index` (0 = query)
    pub fn vector(&self, index: usize) -> Option<&TermVector> {
        self.vectors.get(index)
    }

    /// TF-IDF weight of `term` in document `index`; 0 when absent
    pub fn weight(&self, index: usize, term: &str) -> f64 {
        self.vectors
            .get(index)
            .and_then(|vector| vector.get(term))
            .copied()
            .unwrap_or(0.0)
    }

    /// Distinct terms of the query
    pub fn query_terms(&self) -> HashSet<&str> {
        self.vectors
            .get(QUERY_INDEX)
            .map(|v| v.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Cosine similarity between the query and document `index` (1-based)
    pub fn score(&self, index: usize) -> f64 {
        let (Some(query), Some(doc)) = (self.vectors.get(QUERY_INDEX), self.vectors.get(index))
        else {
            return 0.0;
        };
        if index == QUERY_INDEX {
            return cosine_similarity(query, query);
        }

        match self.options.term_space {
            TermSpace::Union => cosine_similarity(query, doc),
            TermSpace::QueryTerms => cosine_similarity(query, &project_onto(doc, query)),
        }
    }
}
