use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome label stored in the `questionResult` and `stepsResult` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultLabel {
    True,
    False,
    Pending,
    Skipped,
}

impl ResultLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultLabel::True => "True",
            ResultLabel::False => "False",
            ResultLabel::Pending => "Pending",
            ResultLabel::Skipped => "Skipped",
        }
    }

    /// Parse a stored label. Matching is exact.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "True" => Some(ResultLabel::True),
            "False" => Some(ResultLabel::False),
            "Pending" => Some(ResultLabel::Pending),
            "Skipped" => Some(ResultLabel::Skipped),
            _ => None,
        }
    }

    pub fn from_passed(passed: bool) -> Self {
        if passed {
            ResultLabel::True
        } else {
            ResultLabel::False
        }
    }
}

impl fmt::Display for ResultLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pair of labels recorded for one reviewed test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub question_result: ResultLabel,
    pub steps_result: ResultLabel,
}

impl Verdict {
    /// State written right after an answer is generated, before review.
    pub fn pending() -> Self {
        Self {
            question_result: ResultLabel::Pending,
            steps_result: ResultLabel::Pending,
        }
    }

    /// Verdict for the direct answer. A correct answer needs no steps review.
    pub fn for_question(passed: bool) -> Self {
        Self {
            question_result: ResultLabel::from_passed(passed),
            steps_result: if passed {
                ResultLabel::Skipped
            } else {
                ResultLabel::Pending
            },
        }
    }

    /// Verdict after re-answering from the annotator's steps. Steps are only
    /// reviewed once the direct answer has failed.
    ///
    /// `question_result` is derived from that precondition, not a new outcome:
    /// when updating a stored row, write only `steps_result`.
    pub fn for_steps(passed: bool) -> Self {
        Self {
            question_result: ResultLabel::False,
            steps_result: ResultLabel::from_passed(passed),
        }
    }
}
