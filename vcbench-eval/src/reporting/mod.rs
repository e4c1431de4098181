//! Results reporting

use std::fmt::Write;

use crate::analysis::Results;
use crate::runner::SkipCounts;

/// Render the final report.
///
/// Overall accuracy as a percentage with two decimals, then one line per
/// category that received predictions, in category order.
pub fn render_report(results: &Results) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\nFinal Results:");
    let _ = writeln!(out, "Overall Accuracy: {:.2}%", results.overall_accuracy * 100.0);
    let _ = writeln!(out, "\nPer-Type Accuracy:");

    if results.type_accuracy.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for (category, accuracy) in &results.type_accuracy {
        let _ = writeln!(out, "  {:<12} {:.4}", category.as_str(), accuracy);
    }

    out
}

/// Print the final report to standard output
pub fn print_console_report(results: &Results, skipped: &SkipCounts) {
    print!("{}", render_report(results));

    if skipped.total() > 0 {
        println!(
            "\nSkipped {} prediction(s): {} malformed, {} out of range, {} unknown type, {} judge failures",
            skipped.total(),
            skipped.malformed,
            skipped.out_of_range,
            skipped.unknown_category,
            skipped.judge_failed
        );
    }
}
