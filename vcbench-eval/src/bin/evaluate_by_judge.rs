//! VCBench evaluation with an LLM judge deciding correctness

use clap::Parser;

use vcbench_eval::{
    cli::{self, Args},
    config::{Config, JudgeConfig},
    judge::RemoteLLMJudge,
    runner::{Evaluator, EvaluatorConfig},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    cli::init_logging();

    // Credential problems must surface before any record is read
    let config = Config::load_or_default()?;
    let judge_config = JudgeConfig::from_config(&config)?;
    tracing::info!("Judging with {} at {}", judge_config.model, judge_config.base_url);

    let evaluator = Evaluator::new(
        RemoteLLMJudge::from_config(&judge_config),
        EvaluatorConfig::judged(),
    );
    cli::run(&evaluator, &args).await?;

    Ok(())
}
