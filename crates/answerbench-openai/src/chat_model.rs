use std::sync::Arc;

use answerbench_core::{
    AnswerbenchError, ChatModel, ChatRequest, ChatResponse, Message, TokenUsage,
};
use answerbench_models::{ProviderBackend, ProviderRequest, ProviderResponse};
use async_trait::async_trait;
use serde_json::{json, Value};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: None,
            temperature: None,
            top_p: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

pub struct OpenAiChatModel {
    config: OpenAiConfig,
    backend: Arc<dyn ProviderBackend>,
}

impl OpenAiChatModel {
    pub fn new(config: OpenAiConfig, backend: Arc<dyn ProviderBackend>) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    /// Build the provider request. Per-request sampling parameters take precedence
    /// over the ones in [`OpenAiConfig`].
    pub fn build_request(&self, request: &ChatRequest) -> ProviderRequest {
        let messages: Vec<Value> = request.messages.iter().map(message_to_openai).collect();

        let mut body = json!({
            "model": self.config.model,
            "messages": messages,
        });

        if let Some(max_tokens) = request.max_tokens.or(self.config.max_tokens) {
            body["max_tokens"] = json!(max_tokens);
        }
        if let Some(temp) = request.temperature.or(self.config.temperature) {
            body["temperature"] = json!(temp);
        }
        if let Some(top_p) = request.top_p.or(self.config.top_p) {
            body["top_p"] = json!(top_p);
        }

        ProviderRequest {
            url: format!(
                "{}/chat/completions",
                self.config.base_url.trim_end_matches('/')
            ),
            headers: vec![
                (
                    "Authorization".to_string(),
                    format!("Bearer {}", self.config.api_key),
                ),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body,
        }
    }
}

fn message_to_openai(msg: &Message) -> Value {
    let role = match msg {
        Message::System { .. } => "system",
        Message::Human { .. } => "user",
        Message::AI { .. } => "assistant",
    };
    json!({
        "role": role,
        "content": msg.content(),
    })
}

fn parse_response(resp: &ProviderResponse) -> Result<ChatResponse, AnswerbenchError> {
    check_error_status(resp)?;

    let choice = resp.body["choices"]
        .get(0)
        .ok_or_else(|| AnswerbenchError::Parsing("response contained no choices".to_string()))?;
    let content = choice["message"]["content"]
        .as_str()
        .unwrap_or("")
        .to_string();

    let usage = parse_usage(&resp.body["usage"]);

    Ok(ChatResponse {
        message: Message::ai(content),
        usage,
    })
}

fn check_error_status(resp: &ProviderResponse) -> Result<(), AnswerbenchError> {
    if resp.status == 429 {
        let msg = resp.body["error"]["message"]
            .as_str()
            .unwrap_or("rate limited")
            .to_string();
        return Err(AnswerbenchError::RateLimit(msg));
    }
    if resp.status >= 400 {
        let msg = resp.body["error"]["message"]
            .as_str()
            .unwrap_or("unknown API error")
            .to_string();
        return Err(AnswerbenchError::Model(format!(
            "OpenAI API error ({}): {}",
            resp.status, msg
        )));
    }
    Ok(())
}

fn parse_usage(usage: &Value) -> Option<TokenUsage> {
    if usage.is_null() {
        return None;
    }
    Some(TokenUsage {
        input_tokens: usage["prompt_tokens"].as_u64().unwrap_or(0) as u32,
        output_tokens: usage["completion_tokens"].as_u64().unwrap_or(0) as u32,
        total_tokens: usage["total_tokens"].as_u64().unwrap_or(0) as u32,
    })
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, AnswerbenchError> {
        let provider_req = self.build_request(&request);
        tracing::debug!(
            model = %self.config.model,
            messages = request.messages.len(),
            "sending chat completion request"
        );
        let resp = self.backend.send(provider_req).await?;
        parse_response(&resp)
    }
}
