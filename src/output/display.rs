//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{AnalysisResult, CheckReport};
use colored::Colorize;

/// Print the result of analysing a guess
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let max_entropy = (result.total_targets.max(1) as f64).log2();
    let bar = create_progress_bar(metrics.entropy, max_entropy, 30);

    println!("\n📊 Against {} possible targets:", result.total_targets);
    if result.in_catalog {
        println!("   (this guess is itself a possible target)");
    }
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!("   Feedbacks:   {} distinct", metrics.distinct_feedbacks);
    println!(
        "   Expected:    {:.1} targets remain",
        metrics.expected_remaining
    );
    println!("   Worst case:  {} targets remain", metrics.max_partition);
}

/// Print the result of checking a catalog
pub fn print_check_report(report: &CheckReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CATALOG CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Entries checked:  {}", report.total);
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());

    if report.is_empty() {
        println!("\n{}", "❌ The catalog has no equations".red().bold());
        return;
    }

    if report.is_clean() {
        println!(
            "\n{}",
            format!("✅ All {} equations are valid targets", report.total)
                .green()
                .bold()
        );
        return;
    }

    if !report.invalid.is_empty() {
        println!(
            "\n{}",
            format!("❌ {} invalid entries:", report.invalid.len())
                .red()
                .bold()
        );
        for entry in &report.invalid {
            println!(
                "   line {:>5}: {:<12} {}",
                entry.line,
                entry.entry,
                entry.error.to_string().bright_black()
            );
        }
    }

    if !report.duplicates.is_empty() {
        println!(
            "\n{}",
            format!("⚠️  {} duplicate entries:", report.duplicates.len())
                .yellow()
                .bold()
        );
        for (line, entry) in &report.duplicates {
            println!("   line {line:>5}: {entry}");
        }
    }
}
