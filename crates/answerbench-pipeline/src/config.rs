use std::path::PathBuf;
use std::sync::Arc;

use answerbench_blob::{BlobStore, GcsBlobStore, LocalBlobStore};
use answerbench_cache::DEFAULT_CAPACITY;
use answerbench_core::AnswerbenchError;
use answerbench_models::HttpBackend;
use answerbench_openai::{OpenAiChatModel, OpenAiConfig, DEFAULT_MODEL};
use answerbench_tokenizers::TiktokenCounter;

use crate::pipeline::AnswerPipeline;

/// Settings needed to wire a production [`AnswerPipeline`].
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub openai_api_key: String,
    pub model: String,
    pub base_url: Option<String>,
    pub cache_capacity: usize,
    pub gcs_token: Option<String>,
    /// When set, documents are read from this directory instead of Cloud Storage.
    pub blob_root: Option<PathBuf>,
}

impl PipelineConfig {
    pub fn new(openai_api_key: impl Into<String>) -> Self {
        Self {
            openai_api_key: openai_api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            cache_capacity: DEFAULT_CAPACITY,
            gcs_token: None,
            blob_root: None,
        }
    }

    /// Read the configuration from process environment variables:
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `OPENAI_API_KEY` | required |
    /// | `OPENAI_MODEL` | `gpt-4` |
    /// | `OPENAI_BASE_URL` | OpenAI public endpoint |
    /// | `ANSWER_CACHE_CAPACITY` | `10` |
    /// | `GCS_ACCESS_TOKEN` | none |
    /// | `BLOB_ROOT` | none (use Cloud Storage) |
    pub fn from_env() -> Result<Self, AnswerbenchError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`PipelineConfig::from_env`] with a custom variable source.
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AnswerbenchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = get("OPENAI_API_KEY")
            .ok_or_else(|| AnswerbenchError::Config("OPENAI_API_KEY is not set".to_string()))?;
        let mut config = Self::new(api_key);

        if let Some(model) = get("OPENAI_MODEL") {
            config.model = model;
        }
        config.base_url = get("OPENAI_BASE_URL");
        if let Some(raw) = get("ANSWER_CACHE_CAPACITY") {
            config.cache_capacity = raw.trim().parse().map_err(|e| {
                AnswerbenchError::Config(format!("ANSWER_CACHE_CAPACITY={raw:?}: {e}"))
            })?;
        }
        config.gcs_token = get("GCS_ACCESS_TOKEN");
        config.blob_root = get("BLOB_ROOT").map(PathBuf::from);

        Ok(config)
    }
}

impl AnswerPipeline {
    /// Wire the OpenAI chat model over HTTP, the tiktoken counter and the
    /// configured blob store.
    pub fn from_config(config: &PipelineConfig) -> Self {
        let mut openai = OpenAiConfig::new(config.openai_api_key.as_str(), config.model.as_str());
        if let Some(ref url) = config.base_url {
            openai = openai.with_base_url(url.as_str());
        }
        let model = OpenAiChatModel::new(openai, Arc::new(HttpBackend::new()));

        let blobs: Arc<dyn BlobStore> = match config.blob_root {
            Some(ref root) => Arc::new(LocalBlobStore::new(root.clone())),
            None => {
                let mut gcs = GcsBlobStore::new();
                if let Some(ref token) = config.gcs_token {
                    gcs = gcs.with_token(token.as_str());
                }
                Arc::new(gcs)
            }
        };

        AnswerPipeline::new(Arc::new(model), Arc::new(TiktokenCounter::new()), blobs)
            .with_cache_capacity(config.cache_capacity)
    }
}
