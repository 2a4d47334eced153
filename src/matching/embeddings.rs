//! Embeddings generation using Model2Vec

use crate::config::Config;
use crate::error::{MatcherError, Result};
use async_trait::async_trait;
use log::info;
use model2vec_rs::model::StaticModel;
use std::time::Instant;

/// Source of fixed-dimension embedding vectors. The pipeline only depends on
/// this trait; the concrete model is constructed once at startup and handed
/// in.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Batch form of [`embed`](Self::embed). Output order matches input
    /// order and each vector equals what a per-item call would produce.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}

pub struct EmbeddingEngine {
    model: StaticModel,
    batch_size: usize,
}

impl EmbeddingEngine {
    pub fn new(model_name: &str, batch_size: usize) -> Result<Self> {
        let start_time = Instant::now();

        info!("Loading Model2Vec embedding model: {}", model_name);

        let model = StaticModel::from_pretrained(
            model_name,
            None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| MatcherError::Embedding(format!("Failed to load model: {}", e)))?;

        info!("Model loaded in {:.2?}", start_time.elapsed());

        Ok(Self { model, batch_size })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.models.embedding_model, config.matching.batch_size)
    }
}

#[async_trait]
impl EmbeddingProvider for EmbeddingEngine {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.model.encode_single(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for batch in texts.chunks(self.batch_size.max(1)) {
            embeddings.extend(self.model.encode(batch));
        }
        Ok(embeddings)
    }
}
