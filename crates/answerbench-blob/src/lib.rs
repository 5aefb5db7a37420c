mod gcs;
mod local;
mod memory;

pub use gcs::{GcsBlobStore, DEFAULT_GCS_ENDPOINT};
pub use local::LocalBlobStore;
pub use memory::InMemoryBlobStore;

use answerbench_core::AnswerbenchError;
use async_trait::async_trait;

/// A reference to an object: `<container>/<object path>`, split on the first `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobRef {
    pub container: String,
    pub object: String,
}

impl BlobRef {
    pub fn parse(reference: &str) -> Result<Self, AnswerbenchError> {
        match reference.split_once('/') {
            Some((container, object)) if !container.is_empty() && !object.is_empty() => Ok(Self {
                container: container.to_string(),
                object: object.to_string(),
            }),
            _ => Err(AnswerbenchError::Fetch(format!(
                "invalid blob reference {reference:?}: expected <container>/<object>"
            ))),
        }
    }
}

impl std::fmt::Display for BlobRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.container, self.object)
    }
}

/// Read-only access to text objects in external storage.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Download the object named by `reference` as UTF-8 text.
    ///
    /// Fails with `Fetch` when the reference is malformed or the container or
    /// object cannot be read.
    async fn fetch_text(&self, reference: &str) -> Result<String, AnswerbenchError>;
}
