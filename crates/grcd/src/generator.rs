//! Outbound text-generation collaborator.
//!
//! The pipeline only sees the `Generator` trait, so it can be tested with a
//! fake instead of a live provider. The real implementation talks to an
//! OpenAI-compatible chat completions API (Groq) with a fixed temperature and
//! output-length ceiling, as a single attempt with no retry.

use async_trait::async_trait;
use grc_common::GeneratorConfig;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum GeneratorError {
    #[error("No API key configured for the generation provider")]
    MissingApiKey,

    #[error("Request failed: {0}")]
    Http(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("HTTP {0} from generation provider")]
    Status(u16),

    #[error("Generation provider returned an empty response")]
    EmptyResponse,
}

/// Capability port for the external generator.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Produce raw recommendation text for a task under a resolved standard.
    async fn generate(&self, task: &str, standard: &str) -> Result<String, GeneratorError>;
}

/// Build the recommendation prompt: exactly five tools in the block template
/// that `parser::parse_tools` understands.
fn build_prompt(task: &str, standard: &str) -> String {
    format!(
        "You are a cybersecurity AI assistant. A company follows {standard} standards.\n\
The task is: \"{task}\"\n\
\n\
Provide a list of exactly top 5 tools that help perform this task. For each tool, respond in this format:\n\
\n\
### Tool: <tool name>\n\
Steps:\n\
1. Step one\n\
2. Step two\n\
3. Step three\n\
4. Step four\n\
5. Step five\n\
---\n\
End of response.\n"
    )
}

/// Groq-backed generator over the OpenAI-compatible chat completions API.
pub struct GroqGenerator {
    config: GeneratorConfig,
    client: reqwest::Client,
}

impl GroqGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeneratorError::Http(e.to_string()))?;
        Ok(Self { config, client })
    }
}

#[async_trait]
impl Generator for GroqGenerator {
    async fn generate(&self, task: &str, standard: &str) -> Result<String, GeneratorError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GeneratorError::MissingApiKey)?;

        let url = format!("{}/v1/chat/completions", self.config.endpoint);
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [{"role": "user", "content": build_prompt(task, standard)}],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout(self.config.timeout_secs)
                } else {
                    GeneratorError::Http(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GeneratorError::Status(response.status().as_u16()));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GeneratorError::Http(e.to_string()))?;

        let text = json
            .get("choices")
            .and_then(|v| v.get(0))
            .and_then(|v| v.get("message"))
            .and_then(|v| v.get("content"))
            .and_then(|v| v.as_str())
            .ok_or(GeneratorError::EmptyResponse)?;

        Ok(text.trim().to_string())
    }
}

/// Fake generator for tests: canned output or canned error, with a call count.
pub struct FakeGenerator {
    response: Result<String, GeneratorError>,
    calls: std::sync::Mutex<usize>,
}

impl FakeGenerator {
    pub fn returning(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            calls: std::sync::Mutex::new(0),
        }
    }

    pub fn failing(error: GeneratorError) -> Self {
        Self {
            response: Err(error),
            calls: std::sync::Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl Generator for FakeGenerator {
    async fn generate(&self, _task: &str, _standard: &str) -> Result<String, GeneratorError> {
        *self.calls.lock().unwrap() += 1;
        self.response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_standard_and_task() {
        let prompt = build_prompt("Ensure servers are patched monthly", "ISO/IEC 27001");
        assert!(prompt.contains("follows ISO/IEC 27001 standards"));
        assert!(prompt.contains("The task is: \"Ensure servers are patched monthly\""));
        assert!(prompt.contains("exactly top 5 tools"));
        assert!(prompt.contains("### Tool: <tool name>"));
    }

    #[tokio::test]
    async fn test_fake_generator_counts_calls() {
        let fake = FakeGenerator::returning("### Tool: X\nSteps:\n1. Go.");
        assert_eq!(fake.call_count(), 0);
        let _ = fake.generate("t", "s").await.unwrap();
        assert_eq!(fake.call_count(), 1);
    }

    #[test]
    fn test_groq_generator_requires_no_key_until_called() {
        let generator = GroqGenerator::new(GeneratorConfig::default());
        assert!(generator.is_ok());
    }
}
