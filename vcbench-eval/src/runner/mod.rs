//! Evaluation engine

pub mod evaluator;

pub use evaluator::{EvalError, Evaluator, EvaluatorConfig, RunSummary, SkipCounts};
