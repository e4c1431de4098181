//! Answer evaluation for the VCBench visual reasoning benchmark
//!
//! Scores model predictions (a JSONL log of `{id, pred_answer}`) against the
//! benchmark ground truth (a JSON array of `{answer, question_type}`) and
//! reports overall and per-category accuracy.
//!
//! # Features
//!
//! - Exact string matching for canonical single-token answers
//! - LLM-judged matching through the DashScope API for free-text answers
//! - Per-record error isolation: bad lines, unknown ids and failed judge
//!   calls are logged and skipped
//!
//! # Example
//!
//! ```no_run
//! use vcbench_eval::{
//!     analysis::calculate_metrics,
//!     judge::ExactMatchJudge,
//!     runner::{Evaluator, EvaluatorConfig},
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let evaluator = Evaluator::new(ExactMatchJudge, EvaluatorConfig::exact_match());
//!     let summary = evaluator
//!         .evaluate_predictions("predictions.jsonl", "data/VCBench_with_answer.json")
//!         .await?;
//!     let results = calculate_metrics(&summary.metrics)?;
//!     println!("{:.2}%", results.overall_accuracy * 100.0);
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod judge;
pub mod providers;
pub mod reporting;
pub mod runner;

pub use config::{Config, JudgeConfig};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::analysis::{calculate_metrics, Metrics, MetricsError, Results};
    pub use crate::config::{Config, ConfigError, JudgeConfig};
    pub use crate::dataset::{
        Category, GroundTruth, GroundTruthRecord, LookupError, PredictionRecord, PredictionScanner,
    };
    pub use crate::judge::{ExactMatchJudge, Judge, JudgeError, Judgment, RemoteLLMJudge};
    pub use crate::providers::{
        CompletionRequest, CompletionResponse, DashScopeClient, LLMProvider, Message,
        ProviderError, ProviderResult,
    };
    pub use crate::reporting::{print_console_report, render_report};
    pub use crate::runner::{EvalError, Evaluator, EvaluatorConfig, RunSummary, SkipCounts};
}
