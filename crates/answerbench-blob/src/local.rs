use std::path::{Component, Path, PathBuf};

use answerbench_core::AnswerbenchError;
use async_trait::async_trait;

use crate::{BlobRef, BlobStore};

/// Serves `<container>/<object>` from `<root>/<container>/<object>` on disk.
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, blob: &BlobRef) -> Result<PathBuf, AnswerbenchError> {
        let relative = Path::new(&blob.container).join(&blob.object);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(AnswerbenchError::Fetch(format!(
                "blob reference escapes the store root: {blob}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn fetch_text(&self, reference: &str) -> Result<String, AnswerbenchError> {
        let blob = BlobRef::parse(reference)?;
        let path = self.resolve(&blob)?;
        tracing::debug!(path = %path.display(), "reading local blob");
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| AnswerbenchError::Fetch(format!("cannot read {}: {e}", path.display())))
    }
}
