//! Accuracy metrics accumulation and calculation

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dataset::Category;

/// Running counts for one evaluation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub total: u64,
    pub correct: u64,
    pub type_counts: BTreeMap<Category, u64>,
    pub type_correct: BTreeMap<Category, u64>,
}

impl Metrics {
    /// Fresh accumulator with every category present at zero
    pub fn new() -> Self {
        let zeros: BTreeMap<Category, u64> = Category::all().into_iter().map(|c| (c, 0)).collect();
        Self {
            total: 0,
            correct: 0,
            type_counts: zeros.clone(),
            type_correct: zeros,
        }
    }

    /// Count one judged prediction
    pub fn record(&mut self, category: Category, correct: bool) {
        self.total += 1;
        *self.type_counts.entry(category).or_insert(0) += 1;

        if correct {
            self.correct += 1;
            *self.type_correct.entry(category).or_insert(0) += 1;
        }
    }

    /// Accuracy so far, `None` before anything is counted
    pub fn running_accuracy(&self) -> Option<f64> {
        (self.total > 0).then(|| self.correct as f64 / self.total as f64)
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Final accuracy ratios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Results {
    pub overall_accuracy: f64,
    /// Only categories that received at least one counted prediction
    pub type_accuracy: BTreeMap<Category, f64>,
}

/// Metrics calculation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    #[error("No valid predictions were evaluated; accuracy is undefined")]
    NoValidPredictions,
}

/// Convert counts into accuracy ratios
pub fn calculate_metrics(metrics: &Metrics) -> Result<Results, MetricsError> {
    if metrics.total == 0 {
        return Err(MetricsError::NoValidPredictions);
    }

    let type_accuracy = metrics
        .type_counts
        .iter()
        .filter(|(_, &count)| count > 0)
        .map(|(&category, &count)| {
            let correct = metrics.type_correct.get(&category).copied().unwrap_or(0);
            (category, correct as f64 / count as f64)
        })
        .collect();

    Ok(Results {
        overall_accuracy: metrics.correct as f64 / metrics.total as f64,
        type_accuracy,
    })
}
