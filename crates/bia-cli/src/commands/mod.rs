//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod serve;
pub mod templates;

/// Business Insights Assistant
#[derive(Parser)]
#[command(name = "bia")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate business insights for a query
    Analyze(analyze::AnalyzeArgs),

    /// Show the prompt template for each analysis category
    Templates,

    /// Start the web UI
    Serve(serve::ServeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Analyze(args) => analyze::execute(args).await,
            Commands::Templates => templates::execute(),
            Commands::Serve(args) => serve::execute(args).await,
        }
    }
}
