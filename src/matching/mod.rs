//! Matching module: similarity scoring, ranking, embeddings, and the
//! end-to-end matching pipeline

pub mod similarity;
pub mod ranker;
pub mod embeddings;
pub mod pipeline;

pub use embeddings::EmbeddingProvider;
pub use pipeline::{MatchOutcome, MatchPipeline, MatchRequest};
pub use ranker::ScoredCandidate;
