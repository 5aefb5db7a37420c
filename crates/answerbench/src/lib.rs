//! Answerbench: cache-first answer generation and validation for reviewing
//! LLM answers to benchmark questions.
//!
//! This crate re-exports the answerbench sub-crates for single-import usage.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `default` | `pipeline`, `eval` |
//! | `cache` | `AnswerCache` trait and `FifoCache` |
//! | `model-utils` | `ProviderBackend`, `HttpBackend`, `FakeBackend`, `ScriptedChatModel` |
//! | `openai` | OpenAI chat-completion model |
//! | `tokenizers` | `TokenCounter`, tiktoken-backed counting |
//! | `blob` | `BlobStore` with Cloud Storage, local and in-memory backends |
//! | `pipeline` | `AnswerPipeline` plus everything it wires together |
//! | `eval` | Evaluators, result labels, tallies, warehouse records |
//! | `full` | All features enabled |
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use answerbench::eval::{ContainsEvaluator, Evaluator, Verdict};
//! use answerbench::pipeline::{AnswerPipeline, PipelineConfig, PromptRequest};
//!
//! let mut pipeline = AnswerPipeline::from_config(&PipelineConfig::from_env()?);
//! let answer = pipeline
//!     .generate_answer(&PromptRequest::new("How many legs does a spider have?", ""))
//!     .await?;
//! let result = ContainsEvaluator::new().evaluate(&answer, "8", "").await?;
//! let verdict = Verdict::for_question(result.passed);
//! ```

/// Core types: Message, ChatRequest, ChatModel, AnswerbenchError.
/// Always available.
pub use answerbench_core as core;

/// Bounded FIFO answer cache.
#[cfg(feature = "cache")]
pub use answerbench_cache as cache;

/// ProviderBackend abstraction and the ScriptedChatModel test double.
#[cfg(feature = "model-utils")]
pub use answerbench_models as models;

/// OpenAI ChatModel.
#[cfg(feature = "openai")]
pub use answerbench_openai as openai;

/// Token counting.
#[cfg(feature = "tokenizers")]
pub use answerbench_tokenizers as tokenizers;

/// Document fetching from blob storage.
#[cfg(feature = "blob")]
pub use answerbench_blob as blob;

/// The answer request pipeline.
#[cfg(feature = "pipeline")]
pub use answerbench_pipeline as pipeline;

/// Answer evaluation and benchmark records.
#[cfg(feature = "eval")]
pub use answerbench_eval as eval;
