//! `dupcheck check` command - report likely duplicates of a proposed project
//!
//! Exits 0 whether or not duplicates are found; blocking registration is the
//! caller's decision.

use dupcheck_core::check::{CheckOutcome, DuplicateChecker};
use dupcheck_core::error::Result;
use tracing::debug;

use crate::cli::CheckArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;

/// Execute the check command
pub fn execute(ctx: &CommandContext, args: &CheckArgs) -> Result<()> {
    let request = ctx.read_request(args)?;
    // Reject incomplete input before touching the store
    request.validate()?;

    let config = ctx.load_config(&args.overrides)?;
    let store = ctx.open_store()?;
    let checker = DuplicateChecker::new(&*store, &*store, config);

    let outcome = checker.check(&request)?;
    debug!(
        elapsed = ?ctx.start.elapsed(),
        duplicate = outcome.is_duplicate(),
        "check"
    );

    output_by_format_result!(ctx.cli.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&outcome.to_json())?);
            Ok::<(), dupcheck_core::error::DupcheckError>(())
        },
        human => {
            print_human(&outcome, ctx.cli.quiet);
        }
    )
}

fn print_human(outcome: &CheckOutcome, quiet: bool) {
    match outcome {
        CheckOutcome::NoCorpus { .. } => {
            println!("No similar projects found (no registered projects yet).");
        }
        CheckOutcome::NoDuplicate { compared, .. } => {
            println!("{}", outcome.message());
            if !quiet {
                println!("Compared against {} registered project(s).", compared);
            }
        }
        CheckOutcome::Duplicates(report) => {
            println!("{}", outcome.message());
            println!();
            for matched in &report.projects {
                let owner = matched
                    .student_name
                    .as_deref()
                    .unwrap_or(matched.project.student_id.as_str());
                println!(
                    "  {:.3}  {} ({})",
                    matched.score, matched.project.title, matched.project.id
                );
                if !matched.project.description.is_empty() {
                    println!("         {}", matched.project.description);
                }
                println!("         student: {}", owner);
            }
            if !quiet && report.skipped > 0 {
                println!();
                println!("Skipped {} malformed project record(s).", report.skipped);
            }
        }
    }
}
