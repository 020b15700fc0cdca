//! BIA Web Server
//!
//! Axum-based web UI for the business insights assistant: a query
//! form, an HTMX result fragment, a report download, and a small JSON
//! API.

pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use bia_engine::InsightEngine;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/insights", post(routes::insights::generate_json))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::home::index))
        .route("/insights", post(routes::insights::generate))
        .route("/report", post(routes::report::download))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(engine: Arc<InsightEngine>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(engine);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
