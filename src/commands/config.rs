//! `dupcheck config` command - show the effective configuration

use dupcheck_core::error::{DupcheckError, Result};

use crate::cli::ConfigOverrides;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;

/// Execute the config command
pub fn execute(ctx: &CommandContext, overrides: &ConfigOverrides) -> Result<()> {
    let config = ctx.load_config(overrides)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok::<(), DupcheckError>(())
        },
        human => {
            print!("{}", config.to_toml()?);
        }
    )
}
