//! Insight generation route handlers.
//!
//! The HTML handler returns a fragment for HTMX partial page updates;
//! the JSON handler serves the REST surface.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form, Json,
};
use serde::Deserialize;

use bia_core::analysis::{self, model::AnalysisCategory};
use bia_core::insight::model::InsightResult;
use bia_core::BiaError;

use crate::state::AppState;

#[derive(Template)]
#[template(path = "insights.html")]
struct InsightsTemplate {
    category: String,
    query: String,
    filename: String,
    insights: InsightResult,
}

#[derive(Template)]
#[template(path = "warning.html")]
struct WarningTemplate {
    message: String,
}

#[derive(Deserialize)]
pub struct InsightForm {
    pub query: String,
    pub category: String,
    #[serde(default)]
    pub context: String,
}

/// POST /insights - Generate insights and render the result fragment.
///
/// Engine failures render as displayable content; the form page never
/// breaks on a failed generation.
pub async fn generate(
    State(state): State<AppState>,
    Form(form): Form<InsightForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let Some(category) = AnalysisCategory::parse(&form.category) else {
        return warning(format!("Unknown analysis category: {}", form.category));
    };

    let request = match analysis::new_request(&form.query, category, Some(form.context.as_str())) {
        Ok(request) => request,
        Err(BiaError::EmptyQuery) => {
            return warning("Please enter a business query to analyze.".to_string());
        }
        Err(err) => return warning(err.to_string()),
    };

    let request_id = uuid::Uuid::new_v4();
    tracing::info!(%request_id, category = category.label(), "Generating insights");

    let insights = state.engine.generate_insights(&request).await;

    render(InsightsTemplate {
        category: category.label().to_string(),
        query: request.query.clone(),
        filename: bia_report::report_filename(category.label()),
        insights,
    })
}

#[derive(Deserialize)]
pub struct InsightRequestBody {
    pub query: String,
    pub category: String,
    pub context: Option<String>,
}

/// POST /api/insights - Generate insights as JSON.
///
/// Unlike the HTML surface, failures map to status codes with the
/// structured error text.
pub async fn generate_json(
    State(state): State<AppState>,
    Json(body): Json<InsightRequestBody>,
) -> Result<Json<InsightResult>, (StatusCode, String)> {
    let category = AnalysisCategory::parse(&body.category).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            format!("Unknown analysis category: {}", body.category),
        )
    })?;

    let request = analysis::new_request(&body.query, category, body.context.as_deref())
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let insights = state
        .engine
        .generate(&request)
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok(Json(insights))
}

fn render<T: Template>(template: T) -> Result<Html<String>, (StatusCode, String)> {
    template
        .render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

fn warning(message: String) -> Result<Html<String>, (StatusCode, String)> {
    render(WarningTemplate { message })
}
