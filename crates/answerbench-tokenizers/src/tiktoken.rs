use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use answerbench_core::AnswerbenchError;
use tiktoken_rs::CoreBPE;

use crate::TokenCounter;

/// Token counter backed by `tiktoken-rs`.
///
/// Encodings are loaded on first use and kept for the lifetime of the counter.
/// Supported ids: `cl100k_base`, `o200k_base`, `p50k_base`, `r50k_base`.
#[derive(Default)]
pub struct TiktokenCounter {
    loaded: Mutex<HashMap<String, Arc<CoreBPE>>>,
}

impl TiktokenCounter {
    pub fn new() -> Self {
        Self::default()
    }

    fn encoding(&self, id: &str) -> Result<Arc<CoreBPE>, AnswerbenchError> {
        let mut loaded = self
            .loaded
            .lock()
            .map_err(|_| AnswerbenchError::TokenCount("tokenizer state poisoned".to_string()))?;
        if let Some(bpe) = loaded.get(id) {
            return Ok(Arc::clone(bpe));
        }

        let bpe = match id {
            "cl100k_base" => tiktoken_rs::cl100k_base(),
            "o200k_base" => tiktoken_rs::o200k_base(),
            "p50k_base" => tiktoken_rs::p50k_base(),
            "r50k_base" => tiktoken_rs::r50k_base(),
            other => {
                return Err(AnswerbenchError::TokenCount(format!(
                    "unsupported encoding: {other}"
                )))
            }
        }
        .map_err(|e| AnswerbenchError::TokenCount(format!("failed to load {id}: {e}")))?;

        tracing::debug!(encoding = id, "loaded tokenizer encoding");
        let bpe = Arc::new(bpe);
        loaded.insert(id.to_string(), Arc::clone(&bpe));
        Ok(bpe)
    }
}

impl TokenCounter for TiktokenCounter {
    fn count_tokens(&self, text: &str, encoding: &str) -> Result<usize, AnswerbenchError> {
        let bpe = self.encoding(encoding)?;
        Ok(bpe.encode_with_special_tokens(text).len())
    }
}
