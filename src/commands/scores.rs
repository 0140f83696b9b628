//! `dupcheck scores` command - score every registered project

use dupcheck_core::check::DuplicateChecker;
use dupcheck_core::error::Result;

use crate::cli::CheckArgs;
use crate::commands::dispatch::CommandContext;
use crate::output_by_format_result;

/// Execute the scores command
pub fn execute(ctx: &CommandContext, args: &CheckArgs) -> Result<()> {
    let request = ctx.read_request(args)?;
    request.validate()?;

    let config = ctx.load_config(&args.overrides)?;
    let store = ctx.open_store()?;
    let checker = DuplicateChecker::new(&*store, &*store, config);
    let report = checker.score_report(&request)?;

    output_by_format_result!(ctx.cli.format,
        json => {
            let scores: Vec<_> = report
                .entries
                .iter()
                .map(|entry| {
                    serde_json::json!({
                        "_id": entry.project.id,
                        "title": entry.project.title,
                        "studentId": entry.project.student_id,
                        "score": entry.score,
                        "matched": entry.matched,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "threshold": report.threshold,
                "skipped": report.skipped,
                "scores": scores,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok::<(), dupcheck_core::error::DupcheckError>(())
        },
        human => {
            if report.entries.is_empty() {
                println!("No registered projects.");
            }
            for entry in &report.entries {
                let marker = if entry.matched { '*' } else { ' ' };
                println!(
                    "{:.4} {} {}  {}",
                    entry.score, marker, entry.project.id, entry.project.title
                );
            }
            if !ctx.cli.quiet {
                println!();
                println!("threshold {:.2}; * marks a match", report.threshold);
                if report.skipped > 0 {
                    println!("Skipped {} malformed project record(s).", report.skipped);
                }
            }
        }
    )
}
