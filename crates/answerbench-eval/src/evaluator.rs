use std::borrow::Cow;

use answerbench_core::AnswerbenchError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Result of a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalResult {
    /// Score between 0.0 and 1.0.
    pub score: f64,
    pub passed: bool,
    pub reasoning: Option<String>,
}

impl EvalResult {
    /// A passing result with score 1.0.
    pub fn pass() -> Self {
        Self {
            score: 1.0,
            passed: true,
            reasoning: None,
        }
    }

    /// A failing result with score 0.0.
    pub fn fail() -> Self {
        Self {
            score: 0.0,
            passed: false,
            reasoning: None,
        }
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }
}

/// Judges a generated answer (`prediction`) against the expected one (`reference`).
#[async_trait]
pub trait Evaluator: Send + Sync {
    async fn evaluate(
        &self,
        prediction: &str,
        reference: &str,
        input: &str,
    ) -> Result<EvalResult, AnswerbenchError>;
}

/// Trim `text` and, when `ignore_case` is set, lowercase it.
pub(crate) fn normalize(text: &str, ignore_case: bool) -> Cow<'_, str> {
    let trimmed = text.trim();
    if ignore_case {
        Cow::Owned(trimmed.to_lowercase())
    } else {
        Cow::Borrowed(trimmed)
    }
}
