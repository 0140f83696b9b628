use std::path::PathBuf;

use clap::Args;
use dupcheck_core::config::{CheckConfig, IdfFormula, TermSpace};

/// Settings that override the configuration file for one run
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Minimum similarity reported as a duplicate (0.0 - 1.0)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Terms compared: union (default) or query-terms
    #[arg(long)]
    pub term_space: Option<TermSpace>,

    /// IDF formula: smoothed (default) or classic
    #[arg(long)]
    pub idf: Option<IdfFormula>,

    /// Reduce words to their English stem before comparing
    #[arg(long)]
    pub stemming: bool,

    /// Keep common English stop words
    #[arg(long)]
    pub no_stop_words: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut CheckConfig) {
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(term_space) = self.term_space {
            config.term_space = term_space;
        }
        if let Some(idf) = self.idf {
            config.idf = idf;
        }
        if self.stemming {
            config.stemming = true;
        }
        if self.no_stop_words {
            config.stop_words = false;
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Proposed project title
    #[arg(long, short, default_value = "", conflicts_with = "request")]
    pub title: String,

    /// Proposed project description
    #[arg(long, short, default_value = "", conflicts_with = "request")]
    pub description: String,

    /// Read the request as JSON ({"title": ..., "description": ...}); `-` reads stdin
    #[arg(long)]
    pub request: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: ConfigOverrides,
}

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// JSON dump with `projects` and `users` arrays
    pub dump: PathBuf,
}
