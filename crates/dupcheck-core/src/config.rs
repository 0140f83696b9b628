//! Duplicate check configuration
//!
//! Configuration lives in a TOML file, by default
//! `<config dir>/dupcheck/config.toml`. Every field is optional.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DupcheckError, Result};
use crate::similarity::ModelOptions;
use crate::text::TokenizerOptions;

pub use types::{CheckConfig, IdfFormula, TermSpace, DEFAULT_THRESHOLD};

const CONFIG_DIR: &str = "dupcheck";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "DUPCHECK_CONFIG_DIR";
const THRESHOLD_ENV_VAR: &str = "DUPCHECK_THRESHOLD";

impl CheckConfig {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    DupcheckError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DupcheckError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: CheckConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. The default path is optional; when it is
    /// absent the built-in defaults apply. `DUPCHECK_THRESHOLD` overrides the
    /// file's threshold.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    tracing::debug!(path = %path.display(), "loading config");
                    Self::load(&path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Ok(raw) = std::env::var(THRESHOLD_ENV_VAR) {
            config.threshold = raw
                .trim()
                .parse()
                .map_err(|_| DupcheckError::invalid_value("threshold", &raw))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Render as TOML, in the same layout `load` reads
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| DupcheckError::Other(format!("failed to serialize config: {}", e)))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject thresholds outside `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            crate::bail_invalid!("threshold", self.threshold);
        }
        Ok(())
    }

    pub fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions {
            stop_words: self.stop_words,
            stemming: self.stemming,
        }
    }

    pub fn model_options(&self) -> ModelOptions {
        ModelOptions {
            term_space: self.term_space,
            idf: self.idf,
        }
    }
}
