//! Terminal output formatting.

use colored::Colorize;

use bia_core::insight::model::InsightResult;

/// Print a generated insight result, one bold heading per non-empty
/// section.
pub fn print_insights(category: &str, insights: &InsightResult) {
    println!();
    println!(
        "{} {}",
        "Business Insights".cyan().bold(),
        format!("({})", category).dimmed()
    );
    println!("{}", rule());

    section("Executive Summary", &insights.summary);
    section("Detailed Analysis", &insights.detailed_analysis);
    section("Key Insights and Recommendations", &insights.key_insights);
    section("Action Items", &insights.action_items);
    section(
        "Potential Risks and Mitigation Strategies",
        &insights.risks,
    );
}

fn section(label: &str, content: &str) {
    if content.is_empty() {
        return;
    }
    println!();
    println!("{}", label.bold());
    println!("{}", content.trim_matches('\n'));
}

/// A horizontal rule sized to the terminal.
pub fn rule() -> String {
    "─".repeat(term_width().min(90))
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}
