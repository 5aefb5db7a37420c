//! The answer request pipeline.
//!
//! [`AnswerPipeline::generate_answer`] turns a question, free-text context and an
//! optional document reference into a generated answer:
//!
//! 1. image documents short-circuit to [`IMAGE_NOT_SUPPORTED`];
//! 2. other documents are fetched and prepended to the context;
//! 3. the prompt is assembled with [`assemble_prompt`];
//! 4. prompts over the token budget are rejected;
//! 5. the answer cache is consulted by exact prompt text;
//! 6. on a miss the chat model is called once and the trimmed answer cached.
//!
//! ```rust,ignore
//! use answerbench_pipeline::{AnswerPipeline, PipelineConfig, PromptRequest};
//!
//! let config = PipelineConfig::from_env()?;
//! let mut pipeline = AnswerPipeline::from_config(&config);
//! let answer = pipeline
//!     .generate_answer(&PromptRequest::new("Is it sunny?", "Weather"))
//!     .await?;
//! ```

mod config;
mod pipeline;
mod prompt;
mod request;

pub use config::PipelineConfig;
pub use pipeline::{AnswerPipeline, DEFAULT_SYSTEM_PROMPT, DEFAULT_TOKEN_LIMIT};
pub use prompt::{
    assemble_prompt, is_image_reference, question_context, steps_context, IMAGE_EXTENSIONS,
    IMAGE_NOT_SUPPORTED,
};
pub use request::{GenerationParams, PromptRequest};
