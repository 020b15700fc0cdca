//! Report download route handler.

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Form,
};
use serde::Deserialize;

use bia_core::insight::model::InsightResult;
use bia_report::DOCX_MIME;

/// Hidden-field round trip of one generated result. Keeps the download
/// stateless: nothing is held between the render and the download.
#[derive(Deserialize)]
pub struct ReportForm {
    pub category: String,
    pub query: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub detailed_analysis: String,
    #[serde(default)]
    pub key_insights: String,
    #[serde(default)]
    pub action_items: String,
    #[serde(default)]
    pub risks: String,
}

/// POST /report - Assemble the document and return it as a download.
pub async fn download(
    Form(form): Form<ReportForm>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let insights = InsightResult {
        summary: form.summary,
        detailed_analysis: form.detailed_analysis,
        key_insights: form.key_insights,
        action_items: form.action_items,
        risks: form.risks,
    };

    let bytes = bia_report::build_report(&form.category, &form.query, &insights)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        bia_report::report_filename(&form.category)
    );

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}
