//! Text normalization and tokenization

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Common English stop words filtered out during tokenization
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Porter stemmer for English text
static STEMMER: OnceLock<Stemmer> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "a", "about", "above", "after", "again", "all", "am", "an", "and", "any", "are", "as",
            "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
            "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
            "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
            "him", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "me",
            "more", "most", "my", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
            "other", "our", "ours", "out", "over", "own", "same", "she", "should", "so", "some",
            "such", "than", "that", "the", "their", "them", "then", "there", "these", "they",
            "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "we",
            "were", "what", "when", "where", "which", "while", "who", "whom", "why", "will",
            "with", "you", "your",
        ]
        .iter()
        .copied()
        .collect()
    })
}

fn get_stemmer() -> &'static Stemmer {
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Tokenizer behavior switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Drop common English stop words
    pub stop_words: bool,
    /// Reduce each token to its English stem
    pub stemming: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            stop_words: true,
            stemming: false,
        }
    }
}

/// Word characters; everything else separates tokens
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Lowercase `text` and split it into word tokens.
///
/// Punctuation and whitespace never become tokens. Empty input yields an
/// empty vector.
pub fn tokenize(text: &str, options: &TokenizerOptions) -> Vec<String> {
    let stop_words = get_stop_words();
    let tokens = text
        .to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|s| !s.is_empty())
        .filter(|s| !options.stop_words || !stop_words.contains(s))
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    if !options.stemming {
        return tokens;
    }

    let stemmer = get_stemmer();
    tokens.iter().map(|t| stemmer.stem(t).to_string()).collect()
}

/// Text compared for one project: title and description joined by a space
pub fn document_text(title: &str, description: &str) -> String {
    format!("{} {}", title, description)
}
