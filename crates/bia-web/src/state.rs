//! Application state.

use std::sync::Arc;

use bia_engine::InsightEngine;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<InsightEngine>,
}

impl AppState {
    pub fn new(engine: Arc<InsightEngine>) -> Self {
        Self { engine }
    }
}
