//! Check command - Run a suite of cases against one algorithm

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use colored::Colorize;
use pair_finder::{
    case::{builtin_cases, CaseFile},
    report,
    runner::CaseRunner,
    Algorithm,
};

use crate::commands::{print_outcome, print_rule};

/// Run the built-in cases, or the cases in `file`
pub async fn execute(
    file: Option<PathBuf>,
    algorithm: Algorithm,
    report_path: Option<PathBuf>,
) -> Result<()> {
    let (title, cases) = match file {
        Some(ref path) => {
            let case_file = CaseFile::load(path).await?;
            (case_file.problem_title, case_file.test_cases)
        }
        None => ("Two Sum".to_string(), builtin_cases()),
    };

    println!(
        "{}",
        format!("Running {} cases with {algorithm}...", cases.len()).cyan()
    );
    print_rule("═");
    println!("{} {}", "Problem:".bold(), title);
    println!("{} {}", "Complexity:".bold(), algorithm.complexity());
    print_rule("─");

    let summary = CaseRunner::new(algorithm).run_all(&cases)?;
    for outcome in &summary.outcomes {
        print_outcome(outcome);
    }
    print_rule("─");

    if let Some(ref path) = report_path {
        report::write_summary(path, &summary)?;
        println!("  Report: {}", path.display());
    }

    if summary.all_passed() {
        println!(
            "{}",
            format!("✓ All {} cases passed!", summary.passed()).green().bold()
        );
        Ok(())
    } else {
        println!(
            "{}",
            format!("✗ {} of {} cases failed", summary.failed(), summary.outcomes.len())
                .red()
                .bold()
        );
        bail!("{} case(s) failed", summary.failed());
    }
}

/// Write the built-in cases as a case file to start from
pub async fn save_builtin(path: &Path) -> Result<()> {
    CaseFile::new(builtin_cases()).save(path).await?;
    println!(
        "{}",
        format!("✓ Built-in cases written to: {}", path.display()).green()
    );
    Ok(())
}
