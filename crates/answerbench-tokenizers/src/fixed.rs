use std::sync::atomic::{AtomicUsize, Ordering};

use answerbench_core::AnswerbenchError;

use crate::TokenCounter;

/// Counter that reports a preset number of tokens for every text, or always fails.
pub struct FixedTokenCounter {
    count: Option<usize>,
    calls: AtomicUsize,
}

impl FixedTokenCounter {
    pub fn new(count: usize) -> Self {
        Self {
            count: Some(count),
            calls: AtomicUsize::new(0),
        }
    }

    /// A counter whose every call fails with `TokenCount`.
    pub fn failing() -> Self {
        Self {
            count: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `count_tokens` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TokenCounter for FixedTokenCounter {
    fn count_tokens(&self, _text: &str, _encoding: &str) -> Result<usize, AnswerbenchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.count
            .ok_or_else(|| AnswerbenchError::TokenCount("tokenizer unavailable".to_string()))
    }
}
