//! Prompt template for candidate fit summaries

/// Prompt sent to the summary model for one (job, resume) pair.
#[derive(Debug, Clone)]
pub struct SummaryPrompt {
    template: String,
}

impl Default for SummaryPrompt {
    fn default() -> Self {
        Self {
            template: FIT_SUMMARY_TEMPLATE.to_string(),
        }
    }
}

impl SummaryPrompt {
    pub fn render(&self, job_description: &str, resume: &str) -> String {
        self.template
            .replace("{job}", job_description)
            .replace("{resume}", resume)
    }
}

const FIT_SUMMARY_TEMPLATE: &str = r#"Job Description:
{job}

Candidate Resume:
{resume}

In 2-3 sentences, explain why this candidate is a good fit for the job."#;
