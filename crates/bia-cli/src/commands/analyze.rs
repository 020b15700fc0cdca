//! One-shot analysis command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use dialoguer::{Input, Select};
use indicatif::ProgressBar;

use bia_core::analysis::{self, model::AnalysisCategory};
use bia_engine::{EngineConfig, InsightEngine};

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Business question to analyze (prompts interactively when omitted)
    pub query: Option<String>,

    /// Analysis category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Additional context, industry focus, or constraints
    #[arg(long)]
    pub context: Option<String>,

    /// Write the formatted report to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Completion model override
    #[arg(long)]
    pub model: Option<String>,
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let interactive = args.query.is_none();

    let query = match args.query {
        Some(query) => query,
        None => Input::new()
            .with_prompt("Business query")
            .interact_text()
            .context("Failed to read query")?,
    };

    let category = resolve_category(args.category.as_deref(), interactive)?;

    let context = match args.context {
        Some(context) => Some(context),
        None if interactive => {
            let context: String = Input::new()
                .with_prompt("Additional context (optional)")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read context")?;
            (!context.trim().is_empty()).then_some(context)
        }
        None => None,
    };

    let request = match analysis::new_request(&query, category, context.as_deref()) {
        Ok(request) => request,
        Err(bia_core::BiaError::EmptyQuery) => {
            println!(
                "{} Please enter a business query to analyze.",
                "!".yellow().bold()
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let mut config = EngineConfig::from_env();
    if let Some(model) = args.model {
        config = config.with_model(&model);
    }
    let engine = InsightEngine::new(&config);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Analyzing your request...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = engine.generate(&request).await;
    spinner.finish_and_clear();

    let insights = result.context("Insight generation failed")?;

    output::print_insights(category.label(), &insights);

    if let Some(path) = args.output {
        let bytes = bia_report::build_report(category.label(), &request.query, &insights)?;
        std::fs::write(&path, bytes)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!();
        println!("{} Report written: {}", "✓".green().bold(), path.display());
    }

    Ok(())
}

fn resolve_category(flag: Option<&str>, interactive: bool) -> Result<AnalysisCategory> {
    if let Some(raw) = flag {
        return AnalysisCategory::parse(raw).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown analysis category '{}'. Valid categories: {}",
                raw,
                labels().join(", ")
            )
        });
    }

    if interactive {
        let categories = AnalysisCategory::all();
        let index = Select::new()
            .with_prompt("Analysis category")
            .items(&labels())
            .default(0)
            .interact()
            .context("Failed to read category")?;
        return Ok(categories[index]);
    }

    Ok(AnalysisCategory::CompetitiveAnalysis)
}

fn labels() -> Vec<&'static str> {
    AnalysisCategory::all().iter().map(|c| c.label()).collect()
}
