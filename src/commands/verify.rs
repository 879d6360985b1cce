//! Verify command handler.

use anyhow::Context;
use bulkgen_core::TableLayout;
use bulkgen_verify::{FileVerifier, VerificationReport, VerifyArgs};

/// Run the verify command.
///
/// Content problems are returned in the report; the caller decides how to
/// surface a failed verification.
pub async fn run_verify(args: VerifyArgs) -> anyhow::Result<VerificationReport> {
    let verifier = FileVerifier::new(TableLayout::for_variant(args.variant))
        .with_header(!args.no_header)
        .with_line_ending(args.line_ending)
        .with_max_issues(args.max_issues);

    let input = args.input.clone();
    let report = tokio::task::spawn_blocking(move || verifier.verify(&input))
        .await
        .context("CSV verification task failed")?
        .with_context(|| format!("Failed to verify CSV file {:?}", args.input))?;

    if args.report_json {
        println!("{}", serde_json::to_string(&report)?);
    }

    Ok(report)
}
