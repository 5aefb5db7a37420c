use answerbench_core::AnswerbenchError;
use async_trait::async_trait;

use crate::{BlobRef, BlobStore};

pub const DEFAULT_GCS_ENDPOINT: &str = "https://storage.googleapis.com";

/// Reads objects from Google Cloud Storage through the JSON API media download.
pub struct GcsBlobStore {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl GcsBlobStore {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: DEFAULT_GCS_ENDPOINT.to_string(),
            token: None,
        }
    }

    /// OAuth2 access token sent as a bearer token. Public buckets need none.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Point at a different endpoint, e.g. a local storage emulator.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// `{endpoint}/storage/v1/b/{bucket}/o/{object}?alt=media`, with the object
    /// name encoded as a single path segment.
    pub fn object_url(&self, blob: &BlobRef) -> Result<reqwest::Url, AnswerbenchError> {
        let mut url = reqwest::Url::parse(&self.endpoint).map_err(|e| {
            AnswerbenchError::Fetch(format!("invalid storage endpoint {}: {e}", self.endpoint))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                AnswerbenchError::Fetch(format!(
                    "storage endpoint cannot be a base: {}",
                    self.endpoint
                ))
            })?
            .pop_if_empty()
            .extend([
                "storage",
                "v1",
                "b",
                blob.container.as_str(),
                "o",
                blob.object.as_str(),
            ]);
        url.query_pairs_mut().append_pair("alt", "media");
        Ok(url)
    }
}

impl Default for GcsBlobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlobStore for GcsBlobStore {
    async fn fetch_text(&self, reference: &str) -> Result<String, AnswerbenchError> {
        let blob = BlobRef::parse(reference)?;
        let url = self.object_url(&blob)?;

        let mut req = self.client.get(url);
        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }
        tracing::debug!(blob = %blob, "downloading object from cloud storage");
        let resp = req
            .send()
            .await
            .map_err(|e| AnswerbenchError::Fetch(format!("GCS request for {blob}: {e}")))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(AnswerbenchError::Fetch(format!("object not found: {blob}")));
        }
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            return Err(AnswerbenchError::Fetch(format!(
                "GCS error ({}) for {blob}: {body}",
                status.as_u16()
            )));
        }

        resp.text()
            .await
            .map_err(|e| AnswerbenchError::Fetch(format!("GCS read {blob}: {e}")))
    }
}
