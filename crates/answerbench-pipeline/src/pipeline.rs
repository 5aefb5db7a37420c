use std::sync::Arc;

use answerbench_blob::BlobStore;
use answerbench_cache::{AnswerCache, FifoCache};
use answerbench_core::{AnswerbenchError, ChatModel, ChatRequest, Message};
use answerbench_tokenizers::{TokenCounter, CL100K_BASE};

use crate::prompt::{assemble_prompt, is_image_reference, IMAGE_NOT_SUPPORTED};
use crate::request::PromptRequest;

/// Largest accepted prompt, in tokens. A prompt of exactly this size is accepted.
pub const DEFAULT_TOKEN_LIMIT: usize = 8192;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Cache-first answer generation over a chat model.
///
/// The pipeline owns its answer cache. `generate_answer` takes `&mut self`, so
/// a pipeline shared between tasks must sit behind a mutex chosen by the caller.
///
/// The cache key is the assembled prompt text only. Two requests with the same
/// prompt but different sampling parameters share an entry, and parameters are
/// ignored on a hit.
pub struct AnswerPipeline {
    model: Arc<dyn ChatModel>,
    tokenizer: Arc<dyn TokenCounter>,
    blobs: Arc<dyn BlobStore>,
    cache: Box<dyn AnswerCache>,
    token_limit: usize,
    encoding: String,
    system_prompt: String,
}

impl AnswerPipeline {
    /// Create a pipeline with a default-capacity [`FifoCache`].
    pub fn new(
        model: Arc<dyn ChatModel>,
        tokenizer: Arc<dyn TokenCounter>,
        blobs: Arc<dyn BlobStore>,
    ) -> Self {
        Self {
            model,
            tokenizer,
            blobs,
            cache: Box::new(FifoCache::default()),
            token_limit: DEFAULT_TOKEN_LIMIT,
            encoding: CL100K_BASE.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    pub fn with_cache(mut self, cache: impl AnswerCache + 'static) -> Self {
        self.cache = Box::new(cache);
        self
    }

    pub fn with_cache_capacity(self, capacity: usize) -> Self {
        self.with_cache(FifoCache::new(capacity))
    }

    pub fn with_token_limit(mut self, limit: usize) -> Self {
        self.token_limit = limit;
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn cache(&self) -> &dyn AnswerCache {
        self.cache.as_ref()
    }

    pub fn token_limit(&self) -> usize {
        self.token_limit
    }

    /// Produce an answer for `request`, serving it from the cache when the
    /// assembled prompt has been answered before.
    ///
    /// Errors: `Fetch` when the document cannot be read, `TokenCount` when the
    /// tokenizer fails, `PromptTooLarge` over the token limit, `Generation`
    /// when the model call fails or returns no text. The cache is only written
    /// after a successful generation.
    pub async fn generate_answer(
        &mut self,
        request: &PromptRequest,
    ) -> Result<String, AnswerbenchError> {
        let mut context = request.context.clone();

        let document = request.document.as_deref().filter(|r| !r.is_empty());
        if let Some(reference) = document {
            if is_image_reference(reference) {
                tracing::debug!(document = reference, "skipping image document");
                return Ok(IMAGE_NOT_SUPPORTED.to_string());
            }
            let content = self.blobs.fetch_text(reference).await?;
            tracing::debug!(
                document = reference,
                bytes = content.len(),
                "fetched document"
            );
            context = format!("{content}\n{context}");
        }

        let prompt = assemble_prompt(&request.question, &context);

        let tokens = self.tokenizer.count_tokens(&prompt, &self.encoding)?;
        if tokens > self.token_limit {
            tracing::warn!(tokens, limit = self.token_limit, "prompt exceeds token limit");
            return Err(AnswerbenchError::PromptTooLarge {
                tokens,
                limit: self.token_limit,
            });
        }

        if let Some(answer) = self.cache.get(&prompt) {
            tracing::debug!(tokens, "answer cache hit");
            return Ok(answer);
        }
        tracing::debug!(tokens, "answer cache miss");

        let params = request.params;
        let chat_request = ChatRequest::new(vec![
            Message::system(self.system_prompt.as_str()),
            Message::human(prompt.as_str()),
        ])
        .with_temperature(params.temperature)
        .with_max_tokens(params.max_tokens)
        .with_top_p(params.top_p);

        tracing::info!(
            tokens,
            temperature = params.temperature,
            max_tokens = params.max_tokens,
            top_p = params.top_p,
            "requesting answer from generation service"
        );
        let response = self
            .model
            .chat(chat_request)
            .await
            .map_err(|e| AnswerbenchError::Generation(e.to_string()))?;

        let answer = response.message.content().trim().to_string();
        if answer.is_empty() {
            return Err(AnswerbenchError::Generation(
                "generation service returned no content".to_string(),
            ));
        }

        self.cache.put(prompt, answer.clone());
        Ok(answer)
    }
}
