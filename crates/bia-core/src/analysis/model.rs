//! Analysis domain models.

use serde::{Deserialize, Serialize};

/// The four fixed business-analysis modes selectable by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisCategory {
    #[serde(rename = "Competitive Analysis")]
    CompetitiveAnalysis,
    #[serde(rename = "Trend Forecasting")]
    TrendForecasting,
    #[serde(rename = "Market Research")]
    MarketResearch,
    #[serde(rename = "Strategic Planning")]
    StrategicPlanning,
}

impl AnalysisCategory {
    /// All categories in display order.
    pub fn all() -> [AnalysisCategory; 4] {
        [
            AnalysisCategory::CompetitiveAnalysis,
            AnalysisCategory::TrendForecasting,
            AnalysisCategory::MarketResearch,
            AnalysisCategory::StrategicPlanning,
        ]
    }

    /// Human-readable label, as shown in the UI and in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            AnalysisCategory::CompetitiveAnalysis => "Competitive Analysis",
            AnalysisCategory::TrendForecasting => "Trend Forecasting",
            AnalysisCategory::MarketResearch => "Market Research",
            AnalysisCategory::StrategicPlanning => "Strategic Planning",
        }
    }

    /// Parse a label or slug form ("Market Research", "market_research",
    /// "market-research"), case-insensitive.
    pub fn parse(input: &str) -> Option<AnalysisCategory> {
        let normalized = input.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "competitive analysis" => Some(AnalysisCategory::CompetitiveAnalysis),
            "trend forecasting" => Some(AnalysisCategory::TrendForecasting),
            "market research" => Some(AnalysisCategory::MarketResearch),
            "strategic planning" => Some(AnalysisCategory::StrategicPlanning),
            _ => None,
        }
    }

    /// The instruction template appended to queries in this category.
    pub fn template(&self) -> &'static str {
        crate::prompt::lookup(self.label())
    }
}

impl std::fmt::Display for AnalysisCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single analysis submission. Immutable once built, discarded after
/// the request completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub query: String,
    pub category: AnalysisCategory,
    pub context: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_and_slug_forms() {
        assert_eq!(
            AnalysisCategory::parse("Market Research"),
            Some(AnalysisCategory::MarketResearch)
        );
        assert_eq!(
            AnalysisCategory::parse("market_research"),
            Some(AnalysisCategory::MarketResearch)
        );
        assert_eq!(
            AnalysisCategory::parse("trend-forecasting"),
            Some(AnalysisCategory::TrendForecasting)
        );
        assert_eq!(AnalysisCategory::parse("swot"), None);
    }

    #[test]
    fn test_labels_round_trip() {
        for category in AnalysisCategory::all() {
            assert_eq!(AnalysisCategory::parse(category.label()), Some(category));
        }
    }
}
