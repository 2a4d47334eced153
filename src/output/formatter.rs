//! Formatting of candidate labels, scores, and summaries

use crate::storage::SessionRecord;

/// One display row pairing a candidate label with its rounded score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub label: String,
    pub similarity: f32,
}

impl ScoreRow {
    pub fn display_line(&self) -> String {
        format!("{} : {}", self.label, self.similarity)
    }
}

/// Round a similarity score to 4 decimal places for display and persistence.
pub fn round_similarity(score: f32) -> f32 {
    (score * 10_000.0).round() / 10_000.0
}

fn basename(filename: &str) -> &str {
    filename
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or(filename)
}

/// Label used in score rows: the bare file name, or `Resume N` (1-based rank
/// position) when no filename is known.
pub fn score_label(filename: Option<&str>, rank_position: usize) -> String {
    match filename {
        Some(name) => basename(name).to_string(),
        None => format!("Resume {}", rank_position),
    }
}

/// Label used in summary headers: the file name stripped of directories and
/// extension, with the same positional fallback.
pub fn summary_label(filename: Option<&str>, rank_position: usize) -> String {
    match filename {
        Some(name) => {
            let base = basename(name);
            base.split('.').next().unwrap_or(base).to_string()
        }
        None => format!("Resume {}", rank_position),
    }
}

/// Wrap a generated summary with its candidate header.
pub fn format_summary(label: &str, summary: &str) -> String {
    format!("**📄 {}**\n\n{}\n\n---", label, summary)
}

/// Rebuild display rows from a persisted session. Filenames are not stored,
/// so loaded sessions always use positional labels.
pub fn session_rows(record: &SessionRecord) -> (Vec<ScoreRow>, Vec<String>) {
    let mut scores = Vec::with_capacity(record.results.len());
    let mut summaries = Vec::with_capacity(record.results.len());

    for (i, result) in record.results.iter().enumerate() {
        scores.push(ScoreRow {
            label: format!("Resume {}", i + 1),
            similarity: result.similarity,
        });
        summaries.push(result.summary.clone());
    }

    (scores, summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::SessionResult;

    #[test]
    fn test_round_similarity_to_four_decimals() {
        assert_eq!(round_similarity(0.123_456_7), 0.1235);
        assert_eq!(round_similarity(-0.000_04), -0.0);
        assert_eq!(round_similarity(1.0), 1.0);
    }

    #[test]
    fn test_score_label_keeps_extension() {
        assert_eq!(score_label(Some("uploads/jane_doe.pdf"), 1), "jane_doe.pdf");
        assert_eq!(score_label(Some("jane_doe.pdf"), 1), "jane_doe.pdf");
        assert_eq!(score_label(None, 3), "Resume 3");
    }

    #[test]
    fn test_summary_label_strips_path_and_extension() {
        assert_eq!(summary_label(Some("uploads/jane_doe.pdf"), 1), "jane_doe");
        assert_eq!(summary_label(Some(r"C:\cv\sam.md"), 1), "sam");
        assert_eq!(summary_label(None, 2), "Resume 2");
    }

    #[test]
    fn test_format_summary_shape() {
        let formatted = format_summary("jane_doe", "Great Python background.");
        assert!(formatted.starts_with("**📄 jane_doe**"));
        assert!(formatted.contains("Great Python background."));
        assert!(formatted.ends_with("---"));
    }

    #[test]
    fn test_session_rows_use_positional_labels() {
        let record = SessionRecord {
            session_name: "s".to_string(),
            job_description: "job".to_string(),
            resumes: vec!["a".to_string(), "b".to_string()],
            results: vec![
                SessionResult {
                    resume: "a".to_string(),
                    similarity: 0.9,
                    summary: "summary a".to_string(),
                },
                SessionResult {
                    resume: "b".to_string(),
                    similarity: 0.5,
                    summary: "summary b".to_string(),
                },
            ],
            created_at: "2026-01-01T00:00:00Z".to_string(),
            updated_at: "2026-01-01T00:00:00Z".to_string(),
        };

        let (scores, summaries) = session_rows(&record);
        assert_eq!(scores[0].label, "Resume 1");
        assert_eq!(scores[1].label, "Resume 2");
        assert_eq!(summaries, vec!["summary a", "summary b"]);
    }
}
