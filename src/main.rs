//! Resume matcher: rank candidate resumes against a job description

use clap::Parser;
use colored::Colorize;
use log::error;
use resume_matcher::cli::{self, Cli, Commands, ConfigAction, SessionAction};
use resume_matcher::config::Config;
use resume_matcher::error::{MatcherError, Result};
use resume_matcher::input::ResumeFile;
use resume_matcher::matching::embeddings::EmbeddingEngine;
use resume_matcher::matching::pipeline::{MatchPipeline, MatchRequest};
use resume_matcher::storage::SessionStore;
use resume_matcher::summary::OpenAiSummarizer;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            session,
            job,
            top_k,
            resumes,
        } => {
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| MatcherError::InvalidInput(format!("Job description file: {}", e)))?;

            let job_description = std::fs::read_to_string(&job)?;

            let mut files = Vec::with_capacity(resumes.len());
            for path in &resumes {
                let bytes = std::fs::read(path)?;
                files.push(ResumeFile::new(path.to_string_lossy(), bytes));
            }

            println!("🎯 Matching {} resumes against {}", files.len(), job.display());

            let embedder = EmbeddingEngine::from_config(&config)?;
            let summarizer = OpenAiSummarizer::from_env(&config);
            let store = SessionStore::open(config.database_path())?;
            let mut pipeline = MatchPipeline::new(Box::new(embedder), summarizer, store);

            let outcome = pipeline
                .run(MatchRequest {
                    session_name: session,
                    job_description,
                    files,
                    top_k: top_k.unwrap_or(config.matching.default_top_k),
                })
                .await?;

            println!("\n{}", outcome.status.bold());

            if !outcome.scores.is_empty() {
                println!("\n{}", "Candidate Scores".bold().underline());
                for row in &outcome.scores {
                    println!("  {}", row.display_line().green());
                }

                println!("\n{}", "AI Summaries".bold().underline());
                for summary in &outcome.summaries {
                    println!("{}\n", summary);
                }
            }
        }

        Commands::Sessions { action } => {
            let store = SessionStore::open(config.database_path())?;

            match action {
                SessionAction::List => {
                    let names = store.list()?;
                    if names.is_empty() {
                        println!("No saved sessions.");
                    } else {
                        println!("{}", "Saved Sessions".bold().underline());
                        for name in names {
                            println!("  {}", name);
                        }
                    }
                }

                SessionAction::Show { name } => {
                    match store.load(&name)? {
                        Some(record) => {
                            println!("{}", format!("Session '{}'", record.session_name).bold());
                            println!("Saved: {}", record.updated_at);
                            println!("\n{}", "Job Description".bold().underline());
                            println!("{}", record.job_description.trim());

                            let (scores, summaries) =
                                resume_matcher::output::formatter::session_rows(&record);

                            println!("\n{}", "Candidate Scores".bold().underline());
                            for row in &scores {
                                println!("  {}", row.display_line().green());
                            }

                            println!("\n{}", "AI Summaries".bold().underline());
                            for summary in &summaries {
                                println!("{}\n", summary);
                            }
                        }
                        None => println!("No session '{}' found.", name),
                    }
                }

                SessionAction::Delete { name } => {
                    store.delete(&name)?;
                    println!("Deleted session '{}'.", name);
                }
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("{}", "Current Configuration".bold().underline());
                println!("Embedding Model: {}", config.models.embedding_model);
                println!("Summary Model: {}", config.models.summary_model);
                println!("Default Top K: {}", config.matching.default_top_k);
                println!("Batch Size: {}", config.matching.batch_size);
                println!("Database: {}", config.database_path().display());
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
