//! Fuzz command - Cross-check both algorithms on random inputs

use anyhow::{bail, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pair_finder::{config::FuzzSettings, runner::cross_check};

use crate::commands::print_rule;

fn progress_bar(len: u64) -> Result<ProgressBar> {
    if !console::Term::stdout().is_term() {
        return Ok(ProgressBar::hidden());
    }
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {per_sec}")?
            .progress_chars("=> "),
    );
    Ok(bar)
}

/// Cross-check both algorithms and fail on any disagreement
pub async fn execute(settings: &FuzzSettings, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(rand::random);
    println!(
        "{}",
        format!(
            "Cross-checking brute and indexed on {} random inputs (seed {seed})...",
            settings.trials
        )
        .cyan()
    );

    let bar = progress_bar(settings.trials as u64)?;
    let report = cross_check(settings, seed, &bar).await?;
    bar.finish_and_clear();

    print_rule("─");
    println!("{} {}", "Trials:".bold(), report.trials);
    println!("{} {}", "With a pair:".bold(), report.found);
    println!(
        "{} {}",
        "Without a pair:".bold(),
        report.trials - report.found
    );

    if report.is_clean() {
        println!("{}", "✓ Both algorithms agree on every input!".green().bold());
        return Ok(());
    }

    println!(
        "{}",
        format!(
            "✗ {} disagreements, {} invalid pairs",
            report.disagreement_count, report.invalid_count
        )
        .red()
        .bold()
    );
    for d in &report.disagreements {
        println!(
            "  nums={:?} target={} brute={:?} indexed={:?}",
            d.nums, d.target, d.brute, d.indexed
        );
    }
    println!("  Re-run with --seed {seed} to reproduce.");

    bail!("algorithms disagree on {} input(s)", report.disagreement_count + report.invalid_count)
}
