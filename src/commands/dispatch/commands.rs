//! Command implementations for all dupcheck commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{check, config, import, init, scores};
use dupcheck_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Check(args) => check::execute(ctx, args),
            Commands::Scores(args) => scores::execute(ctx, args),
            Commands::Init => init::execute(ctx),
            Commands::Import(args) => import::execute(ctx, args),
            Commands::Config { overrides } => config::execute(ctx, overrides),
        }
    }
}
