//! Ranking resumes against a job description embedding

use crate::error::Result;
use crate::matching::similarity::cosine_similarity;
use std::cmp::Ordering;

/// One ranked candidate. `index` is the position in the filtered resume
/// list the ranker was given, so callers can map back to file metadata.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub index: usize,
    pub text: String,
    pub score: f32,
    pub summary: Option<String>,
}

/// Rank resumes by similarity to the job description embedding and keep the
/// top K.
///
/// Ordering is descending by score; equal scores fall back to ascending
/// original index so repeated runs produce identical output. The result is
/// truncated to `min(top_k, resumes)`.
pub fn rank_resumes(
    job_embedding: &[f32],
    resume_embeddings: &[Vec<f32>],
    resume_texts: &[String],
    top_k: usize,
) -> Result<Vec<ScoredCandidate>> {
    debug_assert_eq!(resume_embeddings.len(), resume_texts.len());

    let mut scores: Vec<(usize, f32)> = Vec::with_capacity(resume_embeddings.len());
    for (idx, embedding) in resume_embeddings.iter().enumerate() {
        let score = cosine_similarity(job_embedding, embedding)?;
        scores.push((idx, score));
    }

    scores.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    let top_results = scores
        .into_iter()
        .take(top_k)
        .map(|(idx, score)| ScoredCandidate {
            index: idx,
            text: resume_texts[idx].clone(),
            score,
            summary: None,
        })
        .collect();

    Ok(top_results)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("resume {}", i)).collect()
    }

    #[test]
    fn test_orders_by_descending_similarity() {
        let job = vec![1.0, 0.0];
        let resumes = vec![
            vec![0.0, 1.0], // orthogonal
            vec![1.0, 0.0], // identical
            vec![1.0, 1.0], // in between
        ];

        let ranked = rank_resumes(&job, &resumes, &texts(3), 3).unwrap();
        let order: Vec<usize> = ranked.iter().map(|c| c.index).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_truncates_to_top_k() {
        let job = vec![1.0, 0.0];
        let resumes = vec![vec![1.0, 0.0], vec![0.5, 0.5], vec![0.0, 1.0]];

        let ranked = rank_resumes(&job, &resumes, &texts(3), 2).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_top_k_larger_than_candidate_pool() {
        let job = vec![1.0, 0.0];
        let resumes = vec![vec![1.0, 0.0], vec![0.0, 1.0]];

        let ranked = rank_resumes(&job, &resumes, &texts(2), 10).unwrap();
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_ties_break_by_ascending_index() {
        let job = vec![1.0, 0.0];
        // Same direction, same score, three ways.
        let resumes = vec![vec![2.0, 0.0], vec![1.0, 0.0], vec![4.0, 0.0]];

        let ranked = rank_resumes(&job, &resumes, &texts(3), 3).unwrap();
        let order: Vec<usize> = ranked.iter().map(|c| c.index).collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_ranking_is_stable_across_runs() {
        let job = vec![0.4, 0.9, -0.1];
        let resumes = vec![
            vec![0.1, 0.8, 0.0],
            vec![0.5, 0.5, 0.5],
            vec![-0.2, 0.9, 0.3],
            vec![0.4, 0.9, -0.1],
        ];

        let first = rank_resumes(&job, &resumes, &texts(4), 4).unwrap();
        let second = rank_resumes(&job, &resumes, &texts(4), 4).unwrap();

        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.index, b.index);
            assert_eq!(a.score, b.score);
        }
    }

    #[test]
    fn test_preserves_candidate_text() {
        let job = vec![1.0, 0.0];
        let resumes = vec![vec![0.0, 1.0], vec![1.0, 0.0]];

        let ranked = rank_resumes(&job, &resumes, &texts(2), 1).unwrap();
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[0].text, "resume 1");
    }
}
