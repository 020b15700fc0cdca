//! BIA Report Assembly
//!
//! Renders an insight result into a Word document, serialized to an
//! in-memory byte stream for download. Paragraphs and headings only.

use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};
use thiserror::Error;
use tracing::debug;

use bia_core::insight::model::InsightResult;

/// MIME type of the generated document.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Document-wide body font.
const BODY_FONT: &str = "Calibri";

/// Body size in half-points (11pt).
const BODY_SIZE: usize = 22;

/// Heading size in half-points (14pt).
const HEADING_SIZE: usize = 28;

/// Report assembly errors.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to assemble report document: {0}")]
    Docx(#[from] docx_rs::DocxError),
    #[error("Failed to pack report archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Download filename for a category label.
pub fn report_filename(category: &str) -> String {
    format!(
        "business_insights_{}.docx",
        category.to_lowercase().replace(' ', "_")
    )
}

/// Report headings paired with their content, in the fixed document
/// order. Fields with empty content are dropped entirely, so no empty
/// heading is ever emitted.
pub fn report_sections(insights: &InsightResult) -> Vec<(&'static str, &str)> {
    [
        ("Executive Summary", insights.summary.as_str()),
        ("Detailed Analysis", insights.detailed_analysis.as_str()),
        (
            "Key Insights and Recommendations",
            insights.key_insights.as_str(),
        ),
        ("Action Items", insights.action_items.as_str()),
        ("Risks and Mitigation Strategies", insights.risks.as_str()),
    ]
    .into_iter()
    .filter(|(_, content)| !content.is_empty())
    .collect()
}

/// Build the report document and serialize it to bytes in memory.
pub fn build_report(
    category: &str,
    query: &str,
    insights: &InsightResult,
) -> Result<Vec<u8>, ReportError> {
    let mut docx = Docx::new()
        .default_fonts(RunFonts::new().ascii(BODY_FONT))
        .default_size(BODY_SIZE)
        .add_style(heading_style("Title", "Title"))
        .add_style(heading_style("Heading1", "Heading 1"))
        .add_style(heading_style("Heading2", "Heading 2"))
        .add_style(heading_style("Heading3", "Heading 3"))
        .add_paragraph(
            Paragraph::new()
                .style("Title")
                .align(AlignmentType::Center)
                .add_run(
                    Run::new().add_text(format!("Business Insights Report: {}", category)),
                ),
        )
        .add_paragraph(heading("Business Query"))
        .add_paragraph(body_paragraph(query));

    for (label, content) in report_sections(insights) {
        docx = docx
            .add_paragraph(heading(label))
            .add_paragraph(body_paragraph(content));
    }

    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor)?;

    let bytes = cursor.into_inner();
    debug!(bytes = bytes.len(), "Assembled report document");

    Ok(bytes)
}

fn heading_style(id: &str, name: &str) -> Style {
    Style::new(id, StyleType::Paragraph)
        .name(name)
        .size(HEADING_SIZE)
        .bold()
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new()
        .style("Heading1")
        .add_run(Run::new().add_text(text))
}

/// One paragraph per field; newlines in the content become soft line
/// breaks within the paragraph.
fn body_paragraph(text: &str) -> Paragraph {
    let mut run = Run::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    Paragraph::new().add_run(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InsightResult {
        InsightResult {
            summary: "Growth is strong.".to_string(),
            detailed_analysis: "Line one\nLine two".to_string(),
            key_insights: String::new(),
            action_items: "Ship it.".to_string(),
            risks: String::new(),
        }
    }

    #[test]
    fn test_filename_from_category() {
        assert_eq!(
            report_filename("Market Research"),
            "business_insights_market_research.docx"
        );
        assert_eq!(
            report_filename("Competitive Analysis"),
            "business_insights_competitive_analysis.docx"
        );
    }

    #[test]
    fn test_sections_drop_empty_fields_and_keep_order() {
        let binding = sample();
        let sections = report_sections(&binding);
        let labels: Vec<&str> = sections.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec!["Executive Summary", "Detailed Analysis", "Action Items"]
        );
    }

    #[test]
    fn test_all_fields_empty_yields_no_sections() {
        assert!(report_sections(&InsightResult::default()).is_empty());
    }

    #[test]
    fn test_report_is_a_zip_container() {
        let bytes = build_report("Market Research", "How big is the EV market?", &sample())
            .unwrap();
        assert!(bytes.starts_with(b"PK"));
    }
}
