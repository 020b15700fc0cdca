//! Prompt template inspection command.

use anyhow::Result;
use colored::Colorize;

use bia_core::analysis::model::AnalysisCategory;
use bia_core::prompt;

use crate::output;

pub fn execute() -> Result<()> {
    for category in AnalysisCategory::all() {
        println!("{}", category.label().cyan().bold());
        println!("{}", output::rule());
        println!("{}", prompt::lookup(category.label()));
        println!();
    }
    Ok(())
}
