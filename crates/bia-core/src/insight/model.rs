//! Insight result model.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::splitter;

/// Canonical section labels the engine asks the model to emit.
pub const SECTION_EXECUTIVE_SUMMARY: &str = "Executive Summary";
pub const SECTION_DETAILED_ANALYSIS: &str = "Detailed Analysis";
pub const SECTION_KEY_INSIGHTS: &str = "Key Insights and Recommendations";
pub const SECTION_ACTION_ITEMS: &str = "Action Items";
pub const SECTION_RISKS: &str = "Potential Risks and Mitigation Strategies";

/// Structured insight output for one analysis request.
///
/// Every field is always present; a section the model did not produce
/// is an empty string, never a missing key. Lives only for the UI
/// render cycle and report generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightResult {
    pub summary: String,
    pub detailed_analysis: String,
    pub key_insights: String,
    pub action_items: String,
    pub risks: String,
}

impl InsightResult {
    /// Shape a raw model reply into an insight result.
    ///
    /// `detailed_analysis` always carries the entire reply verbatim,
    /// regardless of how the sections were split; the remaining fields
    /// come from the parsed section mapping.
    pub fn from_reply(reply: &str) -> Self {
        let mut sections = splitter::split_sections(reply);
        debug!(sections = sections.len(), "Parsed reply sections");

        InsightResult {
            summary: sections
                .remove(SECTION_EXECUTIVE_SUMMARY)
                .unwrap_or_default(),
            detailed_analysis: reply.to_string(),
            key_insights: sections.remove(SECTION_KEY_INSIGHTS).unwrap_or_default(),
            action_items: sections.remove(SECTION_ACTION_ITEMS).unwrap_or_default(),
            risks: sections.remove(SECTION_RISKS).unwrap_or_default(),
        }
    }

    /// The error-shaped result shown when generation fails.
    pub fn failure(detail: impl std::fmt::Display) -> Self {
        InsightResult {
            summary: format!("Error generating insights: {}", detail),
            detailed_analysis: "An error occurred while processing your request.".to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detailed_analysis_is_the_whole_reply() {
        let reply = "Preamble\n# Executive Summary\nGrowth is strong.\n# Action Items\nShip it.";
        let result = InsightResult::from_reply(reply);
        assert_eq!(result.detailed_analysis, reply);
        assert_eq!(result.summary, "Growth is strong.");
        assert_eq!(result.action_items, "Ship it.");
        assert_eq!(result.key_insights, "");
        assert_eq!(result.risks, "");
    }

    #[test]
    fn test_canonical_labels_are_extracted() {
        let reply = "\
# Executive Summary\nS\n\
# Key Insights and Recommendations\nK\n\
# Action Items\nA\n\
# Potential Risks and Mitigation Strategies\nR";
        let result = InsightResult::from_reply(reply);
        assert_eq!(result.summary, "S");
        assert_eq!(result.key_insights, "K");
        assert_eq!(result.action_items, "A");
        assert_eq!(result.risks, "R");
    }

    #[test]
    fn test_empty_reply() {
        let result = InsightResult::from_reply("");
        assert_eq!(result.detailed_analysis, "");
        assert_eq!(result.summary, "");
    }

    #[test]
    fn test_failure_shape() {
        let result = InsightResult::failure("connection refused");
        assert_eq!(
            result.summary,
            "Error generating insights: connection refused"
        );
        assert_eq!(
            result.detailed_analysis,
            "An error occurred while processing your request."
        );
        assert!(result.key_insights.is_empty());
        assert!(result.action_items.is_empty());
        assert!(result.risks.is_empty());
    }
}
