//! Judging generated answers and reading the benchmark rows they are judged against.
//!
//! The comparison itself sits behind [`Evaluator`]; the default used by the
//! reviewer workflow is [`ContainsEvaluator`].

mod contains;
mod evaluator;
mod exact_match;
mod label;
mod records;
mod steps;
mod tally;

pub use contains::ContainsEvaluator;
pub use evaluator::{EvalResult, Evaluator};
pub use exact_match::ExactMatchEvaluator;
pub use label::{ResultLabel, Verdict};
pub use records::{AnnotatorMetadata, EnrichedResult, TestCase};
pub use steps::strip_final_answer;
pub use tally::ResultTally;
