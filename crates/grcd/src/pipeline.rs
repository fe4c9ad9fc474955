//! Lookup orchestration: validate -> resolve -> knowledge base -> generate.

use crate::auth::Claims;
use crate::generator::Generator;
use crate::{knowledge, parser, standards, validate};
use grc_common::{LookupError, LookupRequest, ToolRecommendation};
use std::sync::Arc;
use tracing::{info, warn};

/// A response never carries more than five recommendations.
const MAX_TOOLS: usize = 5;

pub struct RecommendationPipeline {
    generator: Arc<dyn Generator>,
}

impl RecommendationPipeline {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    /// Handle one already-authenticated lookup.
    ///
    /// Steps short-circuit in order: task validation, standard resolution,
    /// exact knowledge-base lookup, then generation on a miss. The generation
    /// path never returns an empty sequence - a sentinel record substitutes
    /// when nothing parseable came back.
    pub async fn handle(
        &self,
        request: &LookupRequest,
        identity: &Claims,
    ) -> Result<Vec<ToolRecommendation>, LookupError> {
        validate_task_and_log(request, identity)?;
        let standard = standards::resolve(&request.compliance)?;

        if let Some(tools) = knowledge::lookup(&request.task, standard) {
            info!("Knowledge base hit for '{}' under {}", request.task.trim(), standard);
            return Ok(tools);
        }

        info!("Knowledge base miss, generating recommendations under {}", standard);
        let raw = self
            .generator
            .generate(request.task.trim(), standard)
            .await
            .map_err(|e| LookupError::GenerationFailed(e.to_string()))?;

        let mut tools = parser::parse_tools(&raw);
        tools.truncate(MAX_TOOLS);
        if tools.is_empty() {
            warn!("Generator output had no recognizable tool blocks");
            tools.push(ToolRecommendation::none_found());
        }
        Ok(tools)
    }
}

fn validate_task_and_log(request: &LookupRequest, identity: &Claims) -> Result<(), LookupError> {
    info!("Lookup from '{}': {}", identity.sub, request.task.trim());
    validate::validate_task(&request.task)
}
