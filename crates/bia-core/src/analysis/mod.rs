//! Analysis request handling (categories, validated submissions).

pub mod model;

use crate::error::{BiaError, BiaResult};
use model::{AnalysisCategory, AnalysisRequest};

/// Build a validated analysis request.
///
/// An empty or whitespace-only query is rejected here, before any
/// external call is made. Blank context collapses to `None`.
pub fn new_request(
    query: &str,
    category: AnalysisCategory,
    context: Option<&str>,
) -> BiaResult<AnalysisRequest> {
    if query.trim().is_empty() {
        return Err(BiaError::EmptyQuery);
    }

    Ok(AnalysisRequest {
        query: query.to_string(),
        category,
        context: context
            .map(|c| c.to_string())
            .filter(|c| !c.trim().is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request() {
        let request = new_request(
            "Analyze the EV market",
            AnalysisCategory::MarketResearch,
            Some("Focus on Europe"),
        )
        .unwrap();
        assert_eq!(request.query, "Analyze the EV market");
        assert_eq!(request.category, AnalysisCategory::MarketResearch);
        assert_eq!(request.context, Some("Focus on Europe".to_string()));
    }

    #[test]
    fn test_empty_query_rejected() {
        let err = new_request("   ", AnalysisCategory::MarketResearch, None).unwrap_err();
        assert!(matches!(err, BiaError::EmptyQuery));
    }

    #[test]
    fn test_blank_context_collapses_to_none() {
        let request =
            new_request("query", AnalysisCategory::StrategicPlanning, Some("  ")).unwrap();
        assert_eq!(request.context, None);
    }
}
