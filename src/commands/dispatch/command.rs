//! Command trait and context for dispatching commands

use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::cli::{CheckArgs, Cli, ConfigOverrides};
use dupcheck_core::config::CheckConfig;
use dupcheck_core::error::{DupcheckError, Result};
use dupcheck_core::project::CheckRequest;
use dupcheck_core::store::{self, ProjectStore};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    pub fn store_path(&self) -> &Path {
        &self.cli.store
    }

    /// Open the configured store for reading
    pub fn open_store(&self) -> Result<Box<dyn ProjectStore>> {
        store::open(self.store_path())
    }

    /// Effective configuration: file, then environment, then flags
    pub fn load_config(&self, overrides: &ConfigOverrides) -> Result<CheckConfig> {
        let mut config = CheckConfig::resolve(self.cli.config.as_deref())?;
        overrides.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Build the request from flags or from a JSON document
    pub fn read_request(&self, args: &CheckArgs) -> Result<CheckRequest> {
        let Some(path) = &args.request else {
            return Ok(CheckRequest::new(&args.title, &args.description));
        };

        let content = if path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(path).map_err(|e| {
                DupcheckError::Other(format!("failed to read {}: {}", path.display(), e))
            })?
        };

        serde_json::from_str(&content)
            .map_err(|e| DupcheckError::UsageError(format!("invalid request JSON: {}", e)))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("dupcheck {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Duplicate project detection for the project-tracking portal.");
        println!();
        println!("Run `dupcheck --help` for usage information.");
        Ok(())
    }
}
