//! Wire types shared between grcd and grcweb.

use serde::{Deserialize, Serialize};

/// A lookup submitted to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupRequest {
    /// Free-text compliance task description.
    pub task: String,
    /// Standard name or alias, e.g. "iso27001".
    pub compliance: String,
}

/// One recommended tool with its ordered usage steps.
///
/// The steps field serializes as `Steps` (capitalized) - that is the wire
/// contract the frontend and pre-authored knowledge entries were built against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecommendation {
    pub tool: String,
    #[serde(rename = "Steps")]
    pub steps: String,
}

impl ToolRecommendation {
    pub fn new(tool: impl Into<String>, steps: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            steps: steps.into(),
        }
    }

    /// Sentinel record returned when generation produced nothing parseable.
    pub fn none_found() -> Self {
        Self::new("No tools found", "No steps available")
    }
}

/// Health probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

/// Error body returned by the backend on any failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_recommendation_wire_field_is_capitalized() {
        let rec = ToolRecommendation::new("Okta MFA", "1. Enroll\n2. Verify");
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["tool"], "Okta MFA");
        assert_eq!(json["Steps"], "1. Enroll\n2. Verify");
        assert!(json.get("steps").is_none());
    }

    #[test]
    fn test_sentinel_record() {
        let rec = ToolRecommendation::none_found();
        assert_eq!(rec.tool, "No tools found");
        assert_eq!(rec.steps, "No steps available");
    }
}
