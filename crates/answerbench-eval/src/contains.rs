use answerbench_core::AnswerbenchError;
use async_trait::async_trait;

use crate::evaluator::{normalize, EvalResult, Evaluator};

/// Passes when the trimmed reference occurs anywhere in the trimmed prediction.
///
/// Case is ignored unless built with [`ContainsEvaluator::case_sensitive`]. An
/// empty reference never passes.
pub struct ContainsEvaluator {
    ignore_case: bool,
}

impl ContainsEvaluator {
    pub fn new() -> Self {
        Self { ignore_case: true }
    }

    pub fn case_sensitive() -> Self {
        Self { ignore_case: false }
    }
}

impl Default for ContainsEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Evaluator for ContainsEvaluator {
    async fn evaluate(
        &self,
        prediction: &str,
        reference: &str,
        _input: &str,
    ) -> Result<EvalResult, AnswerbenchError> {
        let prediction = normalize(prediction, self.ignore_case);
        let reference = normalize(reference, self.ignore_case);

        if reference.is_empty() {
            return Ok(EvalResult::fail().with_reasoning("no expected answer to compare against"));
        }

        if prediction.contains(reference.as_ref()) {
            Ok(EvalResult::pass())
        } else {
            Ok(EvalResult::fail().with_reasoning(format!(
                "Expected {:?} to appear in {:?}",
                reference, prediction
            )))
        }
    }
}
