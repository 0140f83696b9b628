//! Command dispatch logic for dupcheck

use std::time::Instant;

use crate::cli::Cli;
use dupcheck_core::error::Result;
use tracing::debug;

pub mod command;
mod commands;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    debug!(store = %cli.store.display(), "resolve_store");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
