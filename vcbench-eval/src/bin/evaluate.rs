//! VCBench evaluation by exact answer match

use clap::Parser;

use vcbench_eval::{
    cli::{self, Args},
    judge::ExactMatchJudge,
    runner::{Evaluator, EvaluatorConfig},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    cli::init_logging();

    let evaluator = Evaluator::new(ExactMatchJudge, EvaluatorConfig::exact_match());
    cli::run(&evaluator, &args).await?;

    Ok(())
}
