//! Generate command handler.

use anyhow::Context;
use bulkgen_core::TableLayout;
use bulkgen_populate_csv::{CSVPopulateArgs, CSVPopulator, PopulateMetrics};

/// Run the generate command.
///
/// Returns `None` in dry-run mode, where nothing is written.
pub async fn run_generate(args: CSVPopulateArgs) -> anyhow::Result<Option<PopulateMetrics>> {
    let layout = TableLayout::for_variant(args.variant);
    let target_size = args.resolved_target_size();

    if args.dry_run {
        tracing::info!(
            "[DRY-RUN] Would generate {:?} up to {} bytes",
            args.output,
            target_size
        );
        tracing::info!(
            "[DRY-RUN] Layout: {} ({} columns): {:?}",
            layout.variant(),
            layout.len(),
            layout.column_names()
        );
        tracing::info!(
            "[DRY-RUN] Seed: {:?}, line ending: {:?}, size check: {:?}, header: {}",
            args.seed,
            args.line_ending,
            args.size_check,
            !args.no_header
        );
        if args.report_json {
            println!("{}", serde_json::to_string(layout.columns())?);
        }
        return Ok(None);
    }

    let mut populator = CSVPopulator::new(layout, args.seed)
        .with_header(!args.no_header)
        .with_line_ending(args.line_ending)
        .with_size_check(args.size_check);

    let output = args.output.clone();
    let metrics = tokio::task::spawn_blocking(move || populator.populate(&output, target_size))
        .await
        .context("CSV generation task failed")?
        .with_context(|| format!("Failed to generate CSV file {:?}", args.output))?;

    tracing::info!(
        "Generated {:?}: {} rows, {} bytes ({} over target) in {:?}",
        args.output,
        metrics.rows_written,
        metrics.file_size_bytes,
        metrics.overshoot_bytes(),
        metrics.total_duration
    );

    // Single JSON line for scripting
    if args.report_json {
        println!("{}", serde_json::to_string(&metrics)?);
    }

    Ok(Some(metrics))
}
