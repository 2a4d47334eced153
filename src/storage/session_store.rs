//! Durable session store for matching runs
//!
//! One row per session, keyed by the operator-chosen session name. Saving an
//! existing name overwrites the whole row (last write wins); resume texts and
//! ranked results are kept as structured JSON so a load reconstructs the same
//! shapes that were saved.

use crate::error::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::path::Path;

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS sessions (
    session_name    TEXT PRIMARY KEY,
    job_description TEXT NOT NULL,
    resumes         TEXT NOT NULL,
    results         TEXT NOT NULL,
    created_at      TEXT NOT NULL,
    updated_at      TEXT NOT NULL
);
";

/// One persisted ranked result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub resume: String,
    pub similarity: f32,
    pub summary: String,
}

/// Full saved state of one matching run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub session_name: String,
    pub job_description: String,
    pub resumes: Vec<String>,
    pub results: Vec<SessionResult>,
    pub created_at: String,
    pub updated_at: String,
}

pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    /// Open or create the store at the provided sqlite path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    /// In-memory store, handy for tests.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    /// Insert or fully replace the session stored under `session_name`.
    pub fn save(
        &self,
        session_name: &str,
        job_description: &str,
        resumes: &[String],
        results: &[SessionResult],
    ) -> Result<()> {
        let resumes_json = serde_json::to_string(resumes)?;
        let results_json = serde_json::to_string(results)?;
        let now = Utc::now().to_rfc3339();

        self.conn.execute(
            "INSERT INTO sessions (
                session_name, job_description, resumes, results, created_at, updated_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?5)
             ON CONFLICT(session_name) DO UPDATE SET
                job_description = excluded.job_description,
                resumes = excluded.resumes,
                results = excluded.results,
                updated_at = excluded.updated_at",
            params![session_name, job_description, resumes_json, results_json, now],
        )?;
        Ok(())
    }

    /// Fetch a session by name. A name that was never saved is `None`, not
    /// an error.
    pub fn load(&self, session_name: &str) -> Result<Option<SessionRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT session_name, job_description, resumes, results, created_at, updated_at
                 FROM sessions
                 WHERE session_name = ?1",
                params![session_name],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                        row.get::<_, String>(5)?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((session_name, job_description, resumes_json, results_json, created_at, updated_at)) => {
                let resumes: Vec<String> = serde_json::from_str(&resumes_json)?;
                let results: Vec<SessionResult> = serde_json::from_str(&results_json)?;
                Ok(Some(SessionRecord {
                    session_name,
                    job_description,
                    resumes,
                    results,
                    created_at,
                    updated_at,
                }))
            }
            None => Ok(None),
        }
    }

    /// All known session names in insertion order.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT session_name FROM sessions ORDER BY rowid")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(names)
    }

    /// Remove a session if present; deleting an unknown name is a no-op.
    pub fn delete(&self, session_name: &str) -> Result<()> {
        self.conn.execute(
            "DELETE FROM sessions WHERE session_name = ?1",
            params![session_name],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_results() -> Vec<SessionResult> {
        vec![
            SessionResult {
                resume: "Backend engineer with Python and SQL".to_string(),
                similarity: 0.8123,
                summary: "**📄 jane**\n\nStrong backend background.\n\n---".to_string(),
            },
            SessionResult {
                resume: "Data analyst with dashboarding focus".to_string(),
                similarity: 0.4312,
                summary: "**📄 sam**\n\nAdjacent skills.\n\n---".to_string(),
            },
        ]
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = SessionStore::open_in_memory().unwrap();
        let resumes = vec!["resume one".to_string(), "resume two".to_string()];
        let results = sample_results();

        store
            .save("hiring-april", "Backend engineer role", &resumes, &results)
            .unwrap();

        let record = store.load("hiring-april").unwrap().unwrap();
        assert_eq!(record.session_name, "hiring-april");
        assert_eq!(record.job_description, "Backend engineer role");
        assert_eq!(record.resumes, resumes);
        assert_eq!(record.results, results);
    }

    #[test]
    fn test_load_missing_session_is_none() {
        let store = SessionStore::open_in_memory().unwrap();
        assert!(store.load("never-saved").unwrap().is_none());
    }

    #[test]
    fn test_upsert_keeps_only_last_save() {
        let store = SessionStore::open_in_memory().unwrap();
        let resumes = vec!["resume".to_string()];

        store.save("A", "first description", &resumes, &[]).unwrap();
        store.save("A", "second description", &resumes, &sample_results()).unwrap();

        let record = store.load("A").unwrap().unwrap();
        assert_eq!(record.job_description, "second description");
        assert_eq!(record.results.len(), 2);
        assert_eq!(store.list().unwrap(), vec!["A".to_string()]);
    }

    #[test]
    fn test_list_preserves_insertion_order_across_overwrites() {
        let store = SessionStore::open_in_memory().unwrap();
        store.save("first", "job", &[], &[]).unwrap();
        store.save("second", "job", &[], &[]).unwrap();
        store.save("first", "job again", &[], &[]).unwrap();

        assert_eq!(
            store.list().unwrap(),
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn test_delete_then_load_is_none_and_delete_missing_is_noop() {
        let store = SessionStore::open_in_memory().unwrap();
        store.save("temp", "job", &[], &[]).unwrap();

        store.delete("temp").unwrap();
        assert!(store.load("temp").unwrap().is_none());

        // Deleting again must not error.
        store.delete("temp").unwrap();
        store.delete("never-existed").unwrap();
    }

    #[test]
    fn test_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("sessions.db");

        {
            let store = SessionStore::open(&db_path).unwrap();
            store
                .save("durable", "job text", &["resume text".to_string()], &sample_results())
                .unwrap();
        }

        let reopened = SessionStore::open(&db_path).unwrap();
        let record = reopened.load("durable").unwrap().unwrap();
        assert_eq!(record.resumes, vec!["resume text".to_string()]);
        assert_eq!(record.results, sample_results());
    }
}
