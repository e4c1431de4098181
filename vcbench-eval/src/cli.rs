//! Shared command-line surface for the evaluation binaries

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::analysis::calculate_metrics;
use crate::config::{DEFAULT_GT_FILE, DEFAULT_PRED_FILE};
use crate::judge::Judge;
use crate::reporting::print_console_report;
use crate::runner::{EvalError, Evaluator};

/// Evaluate VCBench model predictions
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Path to predictions JSONL file
    #[arg(short = 'p', long = "pred_file", default_value = DEFAULT_PRED_FILE)]
    pub pred_file: PathBuf,

    /// Path to ground truth JSON file
    #[arg(short = 'g', long = "gt_file", default_value = DEFAULT_GT_FILE)]
    pub gt_file: PathBuf,
}

/// Initialize logging to stderr; `RUST_LOG` overrides the default filter
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vcbench_eval=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run one evaluation and print the report
pub async fn run<J: Judge>(evaluator: &Evaluator<J>, args: &Args) -> Result<(), EvalError> {
    println!("Evaluating predictions from: {}", args.pred_file.display());
    println!("Using ground truth from: {}", args.gt_file.display());

    let summary = evaluator
        .evaluate_predictions(&args.pred_file, &args.gt_file)
        .await?;
    let results = calculate_metrics(&summary.metrics)?;

    print_console_report(&results, &summary.skipped);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::try_parse_from(["vcbench-eval"]).unwrap();
        assert_eq!(args.pred_file, PathBuf::from("predictions.jsonl"));
        assert_eq!(args.gt_file, PathBuf::from("data/VCBench_with_answer.json"));
    }

    #[test]
    fn test_short_and_long_flags() {
        let args = Args::try_parse_from(["vcbench-eval", "-p", "out.jsonl", "--gt_file", "gt.json"])
            .unwrap();
        assert_eq!(args.pred_file, PathBuf::from("out.jsonl"));
        assert_eq!(args.gt_file, PathBuf::from("gt.json"));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["vcbench-eval", "--verbose"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
