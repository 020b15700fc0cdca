//! Web server command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use bia_engine::{EngineConfig, InsightEngine};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to .bia/serve.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = EngineConfig::from_env();
    if config.api_key.is_none() {
        println!(
            "{} GROQ_API_KEY is not set; insight requests will fail until it is exported.",
            "!".yellow().bold()
        );
    }
    let engine = Arc::new(InsightEngine::new(&config));

    println!();
    println!("  {} {}", "BIA".cyan().bold(), "Web Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}",
        "Dashboard".green(),
        args.host,
        args.port
    );
    println!(
        "  {}        http://{}:{}/api",
        "API".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    bia_web::run_server(engine, &args.host, args.port).await?;

    Ok(())
}
