use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::label::ResultLabel;
use crate::records::EnrichedResult;

/// Aggregate counts over reviewed results.
///
/// `questions`, `steps` and `null` make up the overall outcome; the remaining
/// fields complete the per-column distributions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTally {
    /// Rows whose direct answer was marked correct (`questionResult == True`).
    pub questions: usize,
    /// Rows with `questionResult == False`.
    pub question_false: usize,
    /// Rows answered correctly from the annotator's steps.
    pub steps: usize,
    /// Rows that failed both ways (`stepsResult == False`).
    pub null: usize,
    /// Rows whose steps review was skipped because the direct answer passed.
    pub steps_skipped: usize,
}

impl ResultTally {
    /// Tally raw result rows by their `questionResult` and `stepsResult`
    /// columns. Missing or unrecognised labels are not counted.
    pub fn from_results(rows: &[Value]) -> Self {
        let label = |row: &Value, column: &str| {
            row.get(column)
                .and_then(Value::as_str)
                .and_then(ResultLabel::parse)
        };
        let mut tally = Self::default();
        for row in rows {
            tally.record(label(row, "questionResult"), label(row, "stepsResult"));
        }
        tally
    }

    pub fn from_records(records: &[EnrichedResult]) -> Self {
        let mut tally = Self::default();
        for record in records {
            tally.record(record.question_result, record.steps_result);
        }
        tally
    }

    /// Size of the overall outcome: `questions + steps + null`.
    pub fn total(&self) -> usize {
        self.questions + self.steps + self.null
    }

    /// `(True, False)` counts of `questionResult`.
    pub fn question_distribution(&self) -> (usize, usize) {
        (self.questions, self.question_false)
    }

    /// `(True, False, Skipped)` counts of `stepsResult`.
    pub fn steps_distribution(&self) -> (usize, usize, usize) {
        (self.steps, self.null, self.steps_skipped)
    }

    fn record(&mut self, question: Option<ResultLabel>, steps: Option<ResultLabel>) {
        match question {
            Some(ResultLabel::True) => self.questions += 1,
            Some(ResultLabel::False) => self.question_false += 1,
            _ => {}
        }
        match steps {
            Some(ResultLabel::True) => self.steps += 1,
            Some(ResultLabel::False) => self.null += 1,
            Some(ResultLabel::Skipped) => self.steps_skipped += 1,
            _ => {}
        }
    }
}
