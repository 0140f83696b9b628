//! `dupcheck import` command - load a JSON dump into the SQLite store

use dupcheck_core::bail_usage;
use dupcheck_core::error::Result;
use dupcheck_core::store::{SqliteStore, StoreDump, StoreKind};

use crate::cli::ImportArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;

/// Execute the import command
pub fn execute(ctx: &CommandContext, args: &ImportArgs) -> Result<()> {
    let path = ctx.store_path();
    if StoreKind::for_path(path) != StoreKind::Sqlite {
        bail_usage!("import needs a SQLite store; a .json store is already a dump");
    }

    let dump = StoreDump::load(&args.dump)?;
    let mut store = SqliteStore::create(path)?;
    let (projects, users) = store.import(&dump)?;
    tracing::debug!(projects, users, elapsed = ?ctx.start.elapsed(), "import");

    output_by_format_result!(ctx.cli.format,
        json => {
            let output = serde_json::json!({
                "status": "ok",
                "store": path.display().to_string(),
                "projects": projects,
                "users": users,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), dupcheck_core::error::DupcheckError>(())
        },
        human => {
            if !ctx.cli.quiet {
                println!(
                    "Imported {} project(s) and {} user(s) into {}",
                    projects,
                    users,
                    path.display()
                );
            }
        }
    )
}
