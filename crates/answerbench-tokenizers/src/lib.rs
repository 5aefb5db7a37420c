//! Token counting used to enforce prompt budgets.
//!
//! [`TiktokenCounter`] counts with the BPE encodings used by OpenAI models
//! (`cl100k_base` for GPT-4 / GPT-3.5-class models). [`FixedTokenCounter`]
//! returns a preset count and is meant for tests.

mod fixed;
mod tiktoken;

pub use fixed::FixedTokenCounter;
pub use tiktoken::TiktokenCounter;

use answerbench_core::AnswerbenchError;

/// Encoding used by GPT-4 and GPT-3.5-turbo.
pub const CL100K_BASE: &str = "cl100k_base";

/// Counts tokens of a text under a named encoding.
///
/// Failures are environmental (unknown encoding, tokenizer unavailable),
/// never caused by the content of `text`.
pub trait TokenCounter: Send + Sync {
    fn count_tokens(&self, text: &str, encoding: &str) -> Result<usize, AnswerbenchError>;
}
