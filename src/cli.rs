//! CLI interface for the resume matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Rank candidate resumes against a job description")]
#[command(long_about = "Rank candidate resumes against a job description using semantic similarity, with AI-generated fit summaries for the top matches")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank resumes against a job description and save the session
    Match {
        /// Session name to save results under
        #[arg(short, long)]
        session: String,

        /// Path to the job description file (TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Number of top candidates to keep
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Resume files to rank (PDF, TXT, MD)
        #[arg(required = true)]
        resumes: Vec<PathBuf>,
    },

    /// Saved session commands
    Sessions {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// List saved session names
    List,

    /// Show a saved session
    Show {
        /// Session name
        name: String,
    },

    /// Delete a saved session
    Delete {
        /// Session name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
