//! End-to-end matching pipeline
//!
//! One request walks extraction → validity filtering → embedding → ranking →
//! summarization → persistence and produces display rows. Input problems
//! (no files, nothing valid after filtering) reject the run with a status
//! message and empty rows; storage failures propagate as errors.

use crate::error::{MatcherError, Result};
use crate::input::{InputManager, ResumeFile};
use crate::matching::embeddings::EmbeddingProvider;
use crate::matching::ranker::rank_resumes;
use crate::output::formatter::{
    format_summary, round_similarity, score_label, session_rows, summary_label, ScoreRow,
};
use crate::storage::{SessionRecord, SessionResult, SessionStore};
use crate::summary::Summarizer;
use log::{info, warn};

/// Resumes shorter than this (in characters, after trimming) carry too
/// little signal to embed and are dropped before scoring.
pub const MIN_RESUME_CHARS: usize = 100;

/// One matching request as handed over by the UI layer.
#[derive(Debug, Clone)]
pub struct MatchRequest {
    pub session_name: String,
    pub job_description: String,
    pub files: Vec<ResumeFile>,
    pub top_k: usize,
}

/// Outcome of a matching run: a human-readable status plus two parallel
/// display sequences in ranked order.
#[derive(Debug, Clone)]
pub struct MatchOutcome {
    pub status: String,
    pub scores: Vec<ScoreRow>,
    pub summaries: Vec<String>,
}

impl MatchOutcome {
    fn rejected(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            scores: Vec::new(),
            summaries: Vec::new(),
        }
    }
}

/// A persisted session together with its re-rendered display rows.
#[derive(Debug, Clone)]
pub struct LoadedSession {
    pub record: SessionRecord,
    pub scores: Vec<ScoreRow>,
    pub summaries: Vec<String>,
}

struct RetainedResume {
    filename: String,
    text: String,
}

pub struct MatchPipeline {
    input_manager: InputManager,
    embedder: Box<dyn EmbeddingProvider>,
    summarizer: Box<dyn Summarizer>,
    store: SessionStore,
}

impl MatchPipeline {
    pub fn new(
        embedder: Box<dyn EmbeddingProvider>,
        summarizer: Box<dyn Summarizer>,
        store: SessionStore,
    ) -> Self {
        Self {
            input_manager: InputManager::new(),
            embedder,
            summarizer,
            store,
        }
    }

    /// Run one matching request end to end and persist the session.
    pub async fn run(&mut self, request: MatchRequest) -> Result<MatchOutcome> {
        if request.top_k == 0 {
            return Err(MatcherError::InvalidInput(
                "top_k must be at least 1".to_string(),
            ));
        }

        if request.files.is_empty() {
            return Ok(MatchOutcome::rejected("Please upload resume files."));
        }

        let retained = self.extract_and_filter(&request.files);
        info!(
            "Retained {} of {} uploaded resumes after filtering",
            retained.len(),
            request.files.len()
        );

        if retained.is_empty() {
            return Ok(MatchOutcome::rejected(
                "No valid resumes found after filtering.",
            ));
        }

        // Leading/trailing whitespace must not affect similarity.
        let job_clean = request.job_description.trim().to_string();
        let resume_texts: Vec<String> = retained.iter().map(|r| r.text.clone()).collect();

        let job_embedding = self.embedder.embed(&job_clean).await?;
        let resume_embeddings = self.embedder.embed_batch(&resume_texts).await?;

        let mut candidates = rank_resumes(
            &job_embedding,
            &resume_embeddings,
            &resume_texts,
            request.top_k,
        )?;

        for (rank, candidate) in candidates.iter_mut().enumerate() {
            let summary = self
                .summarizer
                .summarize(&request.job_description, &candidate.text)
                .await;
            let label = summary_label(
                retained.get(candidate.index).map(|r| r.filename.as_str()),
                rank + 1,
            );
            candidate.summary = Some(format_summary(&label, &summary));
        }

        let results: Vec<SessionResult> = candidates
            .iter()
            .map(|candidate| SessionResult {
                resume: candidate.text.clone(),
                similarity: round_similarity(candidate.score),
                summary: candidate.summary.clone().unwrap_or_default(),
            })
            .collect();

        self.store.save(
            &request.session_name,
            &request.job_description,
            &resume_texts,
            &results,
        )?;

        let scores = candidates
            .iter()
            .enumerate()
            .map(|(rank, candidate)| ScoreRow {
                label: score_label(
                    retained.get(candidate.index).map(|r| r.filename.as_str()),
                    rank + 1,
                ),
                similarity: round_similarity(candidate.score),
            })
            .collect();
        let summaries = candidates
            .into_iter()
            .filter_map(|candidate| candidate.summary)
            .collect();

        let status = format!(
            "Found {} best matches (requested {}).",
            results.len(),
            request.top_k
        );
        Ok(MatchOutcome {
            status,
            scores,
            summaries,
        })
    }

    /// Extract text from every uploaded file, dropping files that fail
    /// extraction or come out below the validity floor. Filenames travel
    /// with the surviving texts so ranked results can be labeled.
    fn extract_and_filter(&mut self, files: &[ResumeFile]) -> Vec<RetainedResume> {
        let mut retained = Vec::new();

        for file in files {
            let text = match self.input_manager.extract_text(file) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Skipping {}: {}", file.filename, e);
                    continue;
                }
            };

            let trimmed = text.trim();
            if trimmed.chars().count() < MIN_RESUME_CHARS {
                warn!(
                    "Skipping {}: only {} characters after trimming",
                    file.filename,
                    trimmed.chars().count()
                );
                continue;
            }

            retained.push(RetainedResume {
                filename: file.filename.clone(),
                text: trimmed.to_string(),
            });
        }

        retained
    }

    /// Load a saved session and rebuild its display rows.
    pub fn load_session(&self, session_name: &str) -> Result<Option<LoadedSession>> {
        let record = match self.store.load(session_name)? {
            Some(record) => record,
            None => return Ok(None),
        };

        let (scores, summaries) = session_rows(&record);
        Ok(Some(LoadedSession {
            record,
            scores,
            summaries,
        }))
    }

    pub fn list_sessions(&self) -> Result<Vec<String>> {
        self.store.list()
    }

    pub fn delete_session(&self, session_name: &str) -> Result<()> {
        self.store.delete(session_name)
    }
}
