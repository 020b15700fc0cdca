//! Insight generation orchestration.

use bia_core::analysis::model::AnalysisRequest;
use bia_core::insight::model::InsightResult;
use tracing::{debug, warn};

use crate::client::GroqClient;
use crate::config::EngineConfig;
use crate::error::EngineError;

/// System-role instruction sent with every completion request.
const SYSTEM_PROMPT: &str =
    "You are a professional business analyst providing strategic insights.";

/// Closing instruction enumerating the required output subsections.
const OUTPUT_INSTRUCTIONS: &str = r#"Please provide a comprehensive analysis that includes:
1. Executive Summary
2. Detailed Analysis
3. Key Insights and Recommendations
4. Action Items
5. Potential Risks and Mitigation Strategies

Format the response in a clear, professional structure using markdown formatting."#;

/// Generates business insights through the completion API.
pub struct InsightEngine {
    client: GroqClient,
}

impl InsightEngine {
    /// Create an engine from a configuration.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            client: GroqClient::new(config),
        }
    }

    /// The model this engine sends requests to.
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Generate insights for a request.
    ///
    /// Sends exactly one completion request; there is no retry. The
    /// caller decides how a failure is surfaced.
    pub async fn generate(
        &self,
        request: &AnalysisRequest,
    ) -> Result<InsightResult, EngineError> {
        let prompt = build_prompt(request);
        debug!(category = request.category.label(), "Requesting insights");

        let reply = self.client.complete(SYSTEM_PROMPT, &prompt).await?;

        Ok(InsightResult::from_reply(&reply))
    }

    /// Generate insights, folding any failure into a displayable
    /// result.
    ///
    /// Never fails: errors become the error-shaped `InsightResult`,
    /// so a form surface always has something to render.
    pub async fn generate_insights(&self, request: &AnalysisRequest) -> InsightResult {
        match self.generate(request).await {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, "Insight generation failed");
                InsightResult::failure(&err)
            }
        }
    }
}

/// Assemble the composite prompt: persona preamble, request fields,
/// category template, and the fixed output instructions.
fn build_prompt(request: &AnalysisRequest) -> String {
    format!(
        "You are an expert business analyst and strategic advisor.\n\
         Analysis Type: {}\n\
         Business Query: {}\n\
         Additional Context: {}\n\n\
         {}\n\n\
         {}",
        request.category.label(),
        request.query,
        request.context.as_deref().unwrap_or(""),
        request.category.template(),
        OUTPUT_INSTRUCTIONS,
    )
}
