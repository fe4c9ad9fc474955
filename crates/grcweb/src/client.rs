//! HTTP client for the backend lookup API.

use grc_common::ToolRecommendation;
use tracing::warn;

/// What the relay shows the user: either recommendations or one or more
/// flash-style error messages. Transport failures become messages too - the
/// form page is the only surface this service has.
pub enum RelayOutcome {
    Tools(Vec<ToolRecommendation>),
    Errors(Vec<String>),
}

pub struct EngineClient {
    client: reqwest::Client,
    api_url: String,
}

impl EngineClient {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Forward one form submission to the backend.
    pub async fn lookup(&self, task: &str, compliance: &str, token: &str) -> RelayOutcome {
        let payload = serde_json::json!({ "task": task, "compliance": compliance });

        let response = match self
            .client
            .post(&self.api_url)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Backend request failed: {}", e);
                return RelayOutcome::Errors(vec![format!("Request failed: {}", e)]);
            }
        };

        if response.status().is_success() {
            match response.json::<Vec<ToolRecommendation>>().await {
                Ok(tools) => RelayOutcome::Tools(tools),
                Err(_) => RelayOutcome::Errors(vec![
                    "An error occurred and the response could not be parsed.".to_string(),
                ]),
            }
        } else {
            match response.json::<serde_json::Value>().await {
                Ok(body) => RelayOutcome::Errors(extract_error_messages(&body)),
                Err(_) => RelayOutcome::Errors(vec![
                    "An error occurred and the response could not be parsed.".to_string(),
                ]),
            }
        }
    }
}

/// Pull human-readable messages out of a backend error body. The backend
/// answers `{"detail": "..."}`, but validation layers elsewhere answer with
/// message lists, so both shapes are tolerated.
fn extract_error_messages(body: &serde_json::Value) -> Vec<String> {
    fn clean(msg: &str) -> String {
        msg.replace("Value error, ", "")
    }

    if let Some(detail) = body.get("detail") {
        if let Some(msg) = detail.as_str() {
            return vec![clean(msg)];
        }
        if let Some(items) = detail.as_array() {
            let msgs: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .map(clean)
                .collect();
            if !msgs.is_empty() {
                return msgs;
            }
        }
    }

    if let Some(items) = body.as_array() {
        let msgs: Vec<String> = items
            .iter()
            .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
            .map(clean)
            .collect();
        if !msgs.is_empty() {
            return msgs;
        }
    }

    vec!["An unknown error occurred.".to_string()]
}
