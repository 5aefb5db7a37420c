use answerbench_core::AnswerbenchError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::label::ResultLabel;

/// A benchmark question with its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub task_id: String,
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Final answer")]
    pub final_answer: String,
    #[serde(rename = "extractedData", default)]
    pub extracted_data: Option<String>,
}

impl TestCase {
    pub fn from_row(row: &Value) -> Result<Self, AnswerbenchError> {
        let row = as_object(row)?;
        Ok(Self {
            task_id: required_text(row, "task_id")?,
            question: required_text(row, "Question")?,
            final_answer: required_text(row, "Final answer")?,
            extracted_data: optional_text(row, "extractedData")?,
        })
    }
}

/// How an annotator solved a test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatorMetadata {
    #[serde(rename = "Annotator_Metadata")]
    pub annotator_metadata: String,
    #[serde(rename = "Number_of_tools")]
    pub number_of_tools: u32,
    #[serde(rename = "Tools")]
    pub tools: String,
    #[serde(rename = "How_long_did_this_take")]
    pub time_taken: String,
    #[serde(rename = "Number_of_steps")]
    pub number_of_steps: u32,
    #[serde(rename = "Steps")]
    pub steps: String,
    #[serde(rename = "Final_answer")]
    pub final_answer: String,
    /// `<bucket>/<object>` of the attached document, if any.
    #[serde(default)]
    pub gcs_file_path: Option<String>,
}

impl AnnotatorMetadata {
    pub fn from_row(row: &Value) -> Result<Self, AnswerbenchError> {
        let row = as_object(row)?;
        Ok(Self {
            annotator_metadata: required_text(row, "Annotator_Metadata")?,
            number_of_tools: required_count(row, "Number_of_tools")?,
            tools: required_text(row, "Tools")?,
            time_taken: required_text(row, "How_long_did_this_take")?,
            number_of_steps: required_count(row, "Number_of_steps")?,
            steps: required_text(row, "Steps")?,
            final_answer: required_text(row, "Final_answer")?,
            gcs_file_path: optional_text(row, "gcs_file_path")?,
        })
    }

    /// The steps split into non-empty lines.
    pub fn step_lines(&self) -> Vec<&str> {
        self.steps
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// The row written back once an answer has been generated and reviewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedResult {
    pub task_id: String,
    #[serde(rename = "GeneratedAnswer")]
    pub generated_answer: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
    /// `None` while the column is still `NULL`.
    #[serde(rename = "questionResult", default)]
    pub question_result: Option<ResultLabel>,
    /// `None` right after a steps-based generation, before it is reviewed.
    #[serde(rename = "stepsResult", default)]
    pub steps_result: Option<ResultLabel>,
    #[serde(
        rename = "StepsGeneratedAnswer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub steps_generated_answer: Option<String>,
}

impl EnrichedResult {
    pub fn from_row(row: &Value) -> Result<Self, AnswerbenchError> {
        let row = as_object(row)?;
        Ok(Self {
            task_id: required_text(row, "task_id")?,
            generated_answer: required_text(row, "GeneratedAnswer")?,
            session_id: required_text(row, "sessionId")?,
            question_result: optional_label(row, "questionResult")?,
            steps_result: optional_label(row, "stepsResult")?,
            steps_generated_answer: optional_text(row, "StepsGeneratedAnswer")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Column helpers
// ---------------------------------------------------------------------------

fn as_object(row: &Value) -> Result<&Map<String, Value>, AnswerbenchError> {
    row.as_object()
        .ok_or_else(|| AnswerbenchError::Validation("row is not a JSON object".to_string()))
}

fn column<'a>(row: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    row.get(name).filter(|v| !v.is_null())
}

fn missing(name: &str) -> AnswerbenchError {
    AnswerbenchError::Validation(format!("missing column `{name}`"))
}

fn text(value: &Value, name: &str) -> Result<String, AnswerbenchError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(AnswerbenchError::Validation(format!(
            "column `{name}` is not text"
        ))),
    }
}

fn required_text(row: &Map<String, Value>, name: &str) -> Result<String, AnswerbenchError> {
    column(row, name)
        .ok_or_else(|| missing(name))
        .and_then(|v| text(v, name))
}

fn optional_text(row: &Map<String, Value>, name: &str) -> Result<Option<String>, AnswerbenchError> {
    column(row, name).map(|v| text(v, name)).transpose()
}

fn required_count(row: &Map<String, Value>, name: &str) -> Result<u32, AnswerbenchError> {
    let value = column(row, name).ok_or_else(|| missing(name))?;
    let invalid =
        || AnswerbenchError::Validation(format!("column `{name}` is not a count: {value}"));
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(invalid),
        Value::String(s) => s.trim().parse().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

fn optional_label(
    row: &Map<String, Value>,
    name: &str,
) -> Result<Option<ResultLabel>, AnswerbenchError> {
    let Some(raw) = optional_text(row, name)? else {
        return Ok(None);
    };
    ResultLabel::parse(&raw).map(Some).ok_or_else(|| {
        AnswerbenchError::Validation(format!("column `{name}` has unknown label {raw:?}"))
    })
}
