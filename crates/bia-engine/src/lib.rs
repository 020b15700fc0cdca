//! BIA Insight Engine
//!
//! Builds analyst prompts, calls the hosted completion API, and shapes
//! replies into structured insight results.

pub mod client;
pub mod config;
pub mod engine;
pub mod error;

pub use client::GroqClient;
pub use config::EngineConfig;
pub use engine::InsightEngine;
pub use error::EngineError;
