//! Command modules for pair-finder
//!
//! Each submodule handles a specific CLI subcommand.

pub mod check;
pub mod configure;
pub mod fuzz;
pub mod solve;

use colored::{ColoredString, Colorize};
use pair_finder::runner::{CaseOutcome, Verdict};

/// Width of separator rules, capped to the terminal when there is one.
pub fn rule_width() -> usize {
    let term = console::Term::stdout();
    if term.is_term() {
        let (_, cols) = term.size();
        usize::from(cols).clamp(20, 80)
    } else {
        80
    }
}

pub fn print_rule(ch: &str) {
    println!("{}", ch.repeat(rule_width()).cyan());
}

pub fn verdict_label(verdict: &Verdict) -> ColoredString {
    match verdict {
        Verdict::Passed => "✓ passed".green(),
        Verdict::Mismatch { .. } => "~ mismatch".yellow(),
        other => format!("✗ {}", other.label()).red(),
    }
}

/// Print one line per case
pub fn print_outcome(outcome: &CaseOutcome) {
    let result = outcome
        .result
        .map(|pair| pair.to_string())
        .unwrap_or_else(|| "none".to_string());

    println!(
        "  {:<24} {:<12} {} {}",
        outcome.name,
        result,
        verdict_label(&outcome.verdict),
        format!("({:?})", outcome.elapsed).dimmed()
    );

    if let Verdict::Mismatch { expected } = outcome.verdict {
        println!("  {:<24} expected {}", "", expected.to_string().yellow());
    }
}
