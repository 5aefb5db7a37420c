use serde::{Deserialize, Serialize};

/// Sampling parameters forwarded to the generation service on a cache miss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.2,
            max_tokens: 150,
            top_p: 0.3,
        }
    }
}

/// One call's worth of input to [`crate::AnswerPipeline::generate_answer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub question: String,
    pub context: String,
    /// `<container>/<object>` reference to a document whose text is prepended
    /// to the context. An empty reference means no document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(default)]
    pub params: GenerationParams,
}

impl PromptRequest {
    pub fn new(question: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            context: context.into(),
            document: None,
            params: GenerationParams::default(),
        }
    }

    pub fn with_document(mut self, reference: impl Into<String>) -> Self {
        self.document = Some(reference.into());
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.params.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.params.max_tokens = max_tokens;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.params.top_p = top_p;
        self
    }
}
