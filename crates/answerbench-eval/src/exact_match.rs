use answerbench_core::AnswerbenchError;
use async_trait::async_trait;

use crate::evaluator::{normalize, EvalResult, Evaluator};

/// Passes only when the trimmed prediction equals the trimmed reference.
///
/// Stricter than [`crate::ContainsEvaluator`]: "The answer is 8" does not match "8".
pub struct ExactMatchEvaluator {
    ignore_case: bool,
}

impl ExactMatchEvaluator {
    pub fn new() -> Self {
        Self { ignore_case: false }
    }

    pub fn case_insensitive() -> Self {
        Self { ignore_case: true }
    }
}

impl Default for ExactMatchEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Evaluator for ExactMatchEvaluator {
    async fn evaluate(
        &self,
        prediction: &str,
        reference: &str,
        _input: &str,
    ) -> Result<EvalResult, AnswerbenchError> {
        let prediction = normalize(prediction, self.ignore_case);
        let reference = normalize(reference, self.ignore_case);

        if prediction == reference {
            return Ok(EvalResult::pass());
        }
        Ok(EvalResult::fail().with_reasoning(format!(
            "answer {prediction:?} differs from expected {reference:?}"
        )))
    }
}
