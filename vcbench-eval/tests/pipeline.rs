//! End-to-end evaluation runs over files on disk

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use vcbench_eval::prelude::*;

const GROUND_TRUTH: &str = r#"[
    {"answer": "B", "question_type": "cube"},
    {"answer": "A", "question_type": "shape"}
]"#;

fn write_inputs(predictions: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let gt_path = dir.path().join("VCBench_with_answer.json");
    let pred_path = dir.path().join("predictions.jsonl");
    std::fs::write(&gt_path, GROUND_TRUTH).unwrap();
    std::fs::write(&pred_path, predictions).unwrap();
    (dir, pred_path, gt_path)
}

fn quiet(running: bool) -> EvaluatorConfig {
    EvaluatorConfig {
        show_progress: false,
        report_running_accuracy: running,
    }
}

/// Judge provider that says "Yes" when the prompt's response mentions the answer letter
struct LetterProvider;

#[async_trait]
impl LLMProvider for LetterProvider {
    fn name(&self) -> &str {
        "letter"
    }

    fn default_model(&self) -> &str {
        "letter-1"
    }

    async fn complete(&self, request: &CompletionRequest) -> ProviderResult<CompletionResponse> {
        let prompt = &request.messages[0].content;
        let tail = prompt.rsplit("Now evaluate:").next().unwrap_or_default();
        let response = tail
            .lines()
            .find_map(|l| l.strip_prefix("Response: "))
            .unwrap_or_default();
        let answer = tail
            .lines()
            .find_map(|l| l.strip_prefix("Correct Answer: "))
            .unwrap_or_default();

        if response.contains("timeout") {
            return Err(ProviderError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }

        let content = if response.contains(&format!("{}.", answer)) {
            "Yes."
        } else if response.contains("maybe") {
            "I think yes, but..."
        } else {
            "no"
        };

        Ok(CompletionResponse {
            content: content.to_string(),
            model: "letter-1".to_string(),
            latency_ms: 0,
        })
    }
}

#[tokio::test]
async fn exact_match_run_produces_expected_accuracy() {
    let (_dir, pred_path, gt_path) = write_inputs(
        "{\"id\": 1, \"pred_answer\": \"B\"}\n\
         {\"id\": 2, \"pred_answer\": \"B\"}\n\
         {\"id\": 3, \"pred_answer\": \"X\"}\n",
    );

    let evaluator = Evaluator::new(ExactMatchJudge, quiet(false));
    let summary = evaluator
        .evaluate_predictions(&pred_path, &gt_path)
        .await
        .unwrap();

    assert_eq!(summary.metrics.total, 2);
    assert_eq!(summary.metrics.correct, 1);
    assert_eq!(summary.skipped.out_of_range, 1);

    let results = calculate_metrics(&summary.metrics).unwrap();
    assert_eq!(results.overall_accuracy, 0.5);
    assert_eq!(results.type_accuracy.len(), 2);
    assert_eq!(results.type_accuracy[&Category::Cube], 1.0);
    assert_eq!(results.type_accuracy[&Category::Shape], 0.0);

    let report = render_report(&results);
    assert!(report.contains("Overall Accuracy: 50.00%"));
}

#[tokio::test]
async fn malformed_lines_are_skipped_not_counted() {
    let (_dir, pred_path, gt_path) = write_inputs(
        "{\"id\": 1, \"pred_answer\": \"B\"}\n\
         this is not json\n\
         {\"id\": 2}\n",
    );

    let evaluator = Evaluator::new(ExactMatchJudge, quiet(false));
    let summary = evaluator
        .evaluate_predictions(&pred_path, &gt_path)
        .await
        .unwrap();

    assert_eq!(summary.metrics.total, 1);
    assert_eq!(summary.skipped.malformed, 2);
    assert_eq!(calculate_metrics(&summary.metrics).unwrap().overall_accuracy, 1.0);
}

#[tokio::test]
async fn no_valid_predictions_is_reported_error() {
    let (_dir, pred_path, gt_path) = write_inputs("{\"id\": 9, \"pred_answer\": \"B\"}\n");

    let evaluator = Evaluator::new(ExactMatchJudge, quiet(false));
    let summary = evaluator
        .evaluate_predictions(&pred_path, &gt_path)
        .await
        .unwrap();

    assert_eq!(
        calculate_metrics(&summary.metrics),
        Err(MetricsError::NoValidPredictions)
    );
}

#[tokio::test]
async fn judged_run_skips_failed_calls() {
    let (_dir, pred_path, gt_path) = write_inputs(
        "{\"id\": 1, \"pred_answer\": \"The unfolded shape of the cube is: B.\"}\n\
         {\"id\": 2, \"pred_answer\": \"It is maybe A\"}\n\
         {\"id\": 2, \"pred_answer\": \"timeout please\"}\n\
         {\"id\": 2, \"pred_answer\": \"Clearly A.\"}\n",
    );

    let judge = RemoteLLMJudge::new(Arc::new(LetterProvider)).with_model("letter-1");
    let evaluator = Evaluator::new(judge, quiet(true));
    let summary = evaluator
        .evaluate_predictions(&pred_path, &gt_path)
        .await
        .unwrap();

    assert_eq!(summary.metrics.total, 3);
    assert_eq!(summary.metrics.correct, 2);
    assert_eq!(summary.skipped.judge_failed, 1);

    let results = calculate_metrics(&summary.metrics).unwrap();
    assert_eq!(results.type_accuracy[&Category::Cube], 1.0);
    assert_eq!(results.type_accuracy[&Category::Shape], 0.5);
}
