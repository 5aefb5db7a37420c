//! Ask the configured model one benchmark question and optionally check the answer.
//!
//! Reads `OPENAI_API_KEY` and friends from the environment (or a `.env` file).

use clap::Parser;
use tracing_subscriber::EnvFilter;

use answerbench::core::AnswerbenchError;
use answerbench::eval::{ContainsEvaluator, Evaluator, Verdict};
use answerbench::pipeline::{AnswerPipeline, PipelineConfig, PromptRequest};

#[derive(Parser, Debug)]
#[command(name = "generate_answer")]
#[command(about = "Generate an answer to a benchmark question")]
struct Args {
    /// The question to answer
    #[arg(short, long)]
    question: String,

    /// Free-text context placed before the question
    #[arg(short, long, default_value = "")]
    context: String,

    /// `<bucket>/<object>` whose text is prepended to the context
    #[arg(short, long, value_name = "REF")]
    document: Option<String>,

    #[arg(long, default_value_t = 0.2)]
    temperature: f64,

    #[arg(long, default_value_t = 150)]
    max_tokens: u32,

    #[arg(long, default_value_t = 0.3)]
    top_p: f64,

    /// Expected answer; when given, the generated answer is checked against it
    #[arg(short, long)]
    expected: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), AnswerbenchError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = PipelineConfig::from_env()?;
    tracing::debug!(model = %config.model, capacity = config.cache_capacity, "pipeline config");
    let mut pipeline = AnswerPipeline::from_config(&config);

    let mut request = PromptRequest::new(args.question.as_str(), args.context)
        .with_temperature(args.temperature)
        .with_max_tokens(args.max_tokens)
        .with_top_p(args.top_p);
    if let Some(document) = args.document {
        request = request.with_document(document);
    }

    let answer = pipeline.generate_answer(&request).await?;
    println!("{answer}");

    if let Some(expected) = args.expected {
        let result = ContainsEvaluator::new()
            .evaluate(&answer, &expected, &args.question)
            .await?;
        let verdict = Verdict::for_question(result.passed);
        println!(
            "questionResult={} stepsResult={}",
            verdict.question_result, verdict.steps_result
        );
    }

    Ok(())
}
