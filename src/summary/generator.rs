//! Summary generation against a hosted chat-completions API

use crate::config::Config;
use crate::summary::prompts::SummaryPrompt;
use async_trait::async_trait;
use log::warn;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

pub const SUMMARY_UNCONFIGURED: &str = "Summary not available - API key not configured.";
pub const SUMMARY_FAILED: &str = "Summary not available due to an error.";

/// Produces a short justification for why a resume fits a job description.
///
/// Infallible by contract: implementations return a placeholder string when
/// the capability is unconfigured or the request fails, never an error.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, job_description: &str, resume: &str) -> String;
}

pub struct OpenAiSummarizer {
    client: Client,
    api_key: String,
    model: String,
    max_tokens: usize,
    prompt: SummaryPrompt,
}

impl OpenAiSummarizer {
    pub fn new(api_key: String, model: String, max_tokens: usize) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            max_tokens,
            prompt: SummaryPrompt::default(),
        }
    }

    /// Build a summarizer from `OPENAI_API_KEY` when it is set, otherwise
    /// fall back to the disabled placeholder implementation.
    pub fn from_env(config: &Config) -> Box<dyn Summarizer> {
        match std::env::var("OPENAI_API_KEY") {
            Ok(api_key) if !api_key.is_empty() => Box::new(Self::new(
                api_key,
                config.models.summary_model.clone(),
                config.models.summary_max_tokens,
            )),
            _ => Box::new(DisabledSummarizer),
        }
    }

    async fn request_summary(
        &self,
        job_description: &str,
        resume: &str,
    ) -> std::result::Result<String, String> {
        let request_body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "user",
                    "content": self.prompt.render(job_description, resume)
                }
            ],
            "max_tokens": self.max_tokens,
            "temperature": 0.7
        });

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(format!("API returned status {}: {}", status, error_text));
        }

        let api_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| format!("invalid response body: {}", e))?;

        api_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| "no choices in response".to_string())
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, job_description: &str, resume: &str) -> String {
        match self.request_summary(job_description, resume).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Summary generation failed: {}", e);
                SUMMARY_FAILED.to_string()
            }
        }
    }
}

/// Used when no API key is configured; every candidate gets the same
/// placeholder so ranking output still renders.
pub struct DisabledSummarizer;

#[async_trait]
impl Summarizer for DisabledSummarizer {
    async fn summarize(&self, _job_description: &str, _resume: &str) -> String {
        SUMMARY_UNCONFIGURED.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}
