//! Fit summary generation

pub mod prompts;
pub mod generator;

pub use generator::{DisabledSummarizer, OpenAiSummarizer, Summarizer};
