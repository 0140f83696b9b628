//! `dupcheck init` command - create an empty store
//!
//! Idempotent: an existing store is left as it is.

use dupcheck_core::error::Result;
use dupcheck_core::store::{SqliteStore, StoreDump, StoreKind};

use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;

/// Execute the init command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let path = ctx.store_path();

    match StoreKind::for_path(path) {
        StoreKind::Sqlite => {
            SqliteStore::create(path)?;
        }
        StoreKind::Json => {
            if !path.exists() {
                StoreDump::default().save(path)?;
            }
        }
    }
    tracing::debug!(store = %path.display(), "init");

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "store": path.display().to_string(),
                "message": "Store initialized"
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), dupcheck_core::error::DupcheckError>(())
        },
        human => {
            if !ctx.cli.quiet {
                println!("Initialized store at {}", path.display());
            }
        }
    )
}
