use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use answerbench_core::AnswerbenchError;
use async_trait::async_trait;

use crate::{BlobRef, BlobStore};

/// Fixed set of objects held in memory. Counts every fetch attempt.
#[derive(Default)]
pub struct InMemoryBlobStore {
    objects: HashMap<String, String>,
    fetches: AtomicUsize,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(mut self, reference: impl Into<String>, text: impl Into<String>) -> Self {
        self.objects.insert(reference.into(), text.into());
        self
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn fetch_text(&self, reference: &str) -> Result<String, AnswerbenchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let blob = BlobRef::parse(reference)?;
        self.objects
            .get(reference)
            .cloned()
            .ok_or_else(|| AnswerbenchError::Fetch(format!("object not found: {blob}")))
    }
}
