//! Prompt template table.
//!
//! Fixed instruction blocks appended to the user's query, one per
//! analysis category, with a generic fallback for anything else.

const COMPETITIVE_ANALYSIS: &str = r#"Please conduct a thorough competitive analysis that includes:
1. Industry Overview
2. Key Competitors Analysis
   - Market share
   - Strengths and weaknesses
   - Unique value propositions
3. Competitive Advantages and Disadvantages
4. Market Positioning
5. Strategic Recommendations

Focus on actionable insights and data-driven conclusions."#;

const TREND_FORECASTING: &str = r#"Please provide a comprehensive trend forecast that covers:
1. Current Market Trends
2. Emerging Technologies and Innovations
3. Consumer Behavior Shifts
4. Market Growth Projections
5. Industry Disruption Potential
6. Future Scenarios and Their Implications

Base predictions on current data and historical patterns where applicable."#;

const MARKET_RESEARCH: &str = r#"Please conduct detailed market research that includes:
1. Market Size and Growth Potential
2. Target Customer Segments
3. Market Drivers and Restraints
4. Distribution Channels
5. Pricing Analysis
6. Market Entry Barriers
7. Regulatory Environment

Provide specific, actionable insights for business decision-making."#;

const STRATEGIC_PLANNING: &str = r#"Please develop a strategic plan that addresses:
1. Current Position Analysis
2. Strategic Objectives
3. Resource Requirements
4. Implementation Timeline
5. Success Metrics
6. Risk Assessment
7. Contingency Plans

Focus on practical, achievable recommendations with clear implementation steps."#;

const GENERAL: &str = r#"Please provide a comprehensive business analysis that includes:
1. Situation Overview
2. Key Findings
3. Recommendations
4. Implementation Steps
5. Risk Assessment

Focus on providing actionable insights and clear recommendations."#;

/// Look up the instruction template for a category label.
///
/// Unknown labels fall back to the generic template; this is not an
/// error.
pub fn lookup(category: &str) -> &'static str {
    match category {
        "Competitive Analysis" => COMPETITIVE_ANALYSIS,
        "Trend Forecasting" => TREND_FORECASTING,
        "Market Research" => MARKET_RESEARCH,
        "Strategic Planning" => STRATEGIC_PLANNING,
        _ => GENERAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::model::AnalysisCategory;

    #[test]
    fn test_each_category_has_its_own_template() {
        let templates: Vec<&str> = AnalysisCategory::all()
            .iter()
            .map(|c| lookup(c.label()))
            .collect();

        for template in &templates {
            assert!(!template.is_empty());
            assert_ne!(*template, GENERAL);
        }

        // All four are distinct.
        for (i, a) in templates.iter().enumerate() {
            for b in &templates[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_unknown_category_falls_back() {
        assert_eq!(lookup("SWOT Analysis"), GENERAL);
        assert_eq!(lookup(""), GENERAL);
    }
}
