//! Sequential evaluation of a prediction log against ground truth

use std::io::BufRead;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::{Metrics, MetricsError};
use crate::config::ConfigError;
use crate::dataset::{load_ground_truth, GroundTruth, LoadError, LookupError, PredictionScanner};
use crate::judge::Judge;

/// Configuration for the evaluator
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Draw a progress spinner while scanning
    pub show_progress: bool,
    /// Log accuracy after every counted record
    pub report_running_accuracy: bool,
}

impl EvaluatorConfig {
    /// No spinner and no running accuracy
    pub fn exact_match() -> Self {
        Self {
            show_progress: false,
            report_running_accuracy: false,
        }
    }

    /// Spinner plus running accuracy after every counted record
    pub fn judged() -> Self {
        Self {
            show_progress: true,
            report_running_accuracy: true,
        }
    }
}

/// Per-reason counts of prediction lines left out of the metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipCounts {
    pub malformed: u64,
    pub out_of_range: u64,
    pub unknown_category: u64,
    pub judge_failed: u64,
}

impl SkipCounts {
    pub fn total(&self) -> u64 {
        self.malformed + self.out_of_range + self.unknown_category + self.judge_failed
    }
}

/// Counts produced by one pass over the prediction log
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub metrics: Metrics,
    pub skipped: SkipCounts,
}

/// Fatal run errors
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load ground truth from {path}: {source}")]
    GroundTruth {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("Failed to open predictions file {path}: {source}")]
    Predictions {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

/// Evaluator that scores every prediction with one judge, in file order
pub struct Evaluator<J> {
    judge: J,
    config: EvaluatorConfig,
}

impl<J: Judge> Evaluator<J> {
    /// Create a new evaluator
    pub fn new(judge: J, config: EvaluatorConfig) -> Self {
        Self { judge, config }
    }

    /// Load both files and evaluate every prediction
    pub async fn evaluate_predictions(
        &self,
        pred_file: impl AsRef<Path>,
        gt_file: impl AsRef<Path>,
    ) -> Result<RunSummary, EvalError> {
        let gt_file = gt_file.as_ref();
        let pred_file = pred_file.as_ref();

        let ground_truth = load_ground_truth(gt_file).map_err(|source| EvalError::GroundTruth {
            path: gt_file.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded {} ground truth items", ground_truth.len());

        let scanner = PredictionScanner::open(pred_file).map_err(|source| EvalError::Predictions {
            path: pred_file.to_path_buf(),
            source,
        })?;

        Ok(self.evaluate_scanner(scanner, &ground_truth).await)
    }

    /// Evaluate every record a scanner yields.
    ///
    /// Bad lines, unknown ids, items with an unrecognized question type and
    /// failed judge calls are logged and skipped; none of them stops the run.
    pub async fn evaluate_scanner<R: BufRead>(
        &self,
        mut scanner: PredictionScanner<R>,
        ground_truth: &GroundTruth,
    ) -> RunSummary {
        let mut metrics = Metrics::new();
        let mut skipped = SkipCounts::default();
        let progress = self.progress_bar();

        while let Some(item) = scanner.next() {
            progress.set_position(scanner.lines_read() as u64);

            let record = match item {
                Ok(record) => record,
                Err(e) => {
                    skipped.malformed += 1;
                    progress.suspend(|| tracing::warn!("Skipping malformed record: {}", e));
                    continue;
                }
            };

            let (answer, category) = match ground_truth.lookup(record.id) {
                Ok(found) => found,
                Err(e) => {
                    match e {
                        LookupError::OutOfRange { .. } => skipped.out_of_range += 1,
                        LookupError::UnknownCategory { .. } => skipped.unknown_category += 1,
                    }
                    progress.suspend(|| tracing::warn!("Skipping record: {}", e));
                    continue;
                }
            };

            let judgment = match self.judge.evaluate(&record.pred_answer, answer).await {
                Ok(judgment) => judgment,
                Err(e) => {
                    skipped.judge_failed += 1;
                    progress.suspend(|| {
                        tracing::warn!("Evaluation failed for ID {}: {}", record.id, e)
                    });
                    continue;
                }
            };

            metrics.record(category, judgment.is_correct());

            if self.config.report_running_accuracy {
                if let Some(accuracy) = metrics.running_accuracy() {
                    progress.set_message(format!("accuracy {:.2}", accuracy));
                    progress.suspend(|| tracing::info!("Current accuracy: {:.2}", accuracy));
                }
            }
        }

        progress.finish_and_clear();

        tracing::info!(
            judge = self.judge.name(),
            counted = metrics.total,
            skipped = skipped.total(),
            "Evaluation pass complete"
        );

        RunSummary { metrics, skipped }
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} Evaluating predictions: {pos} lines [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb
    }
}
