//! Solve command - Find a pair for ad-hoc input

use anyhow::Result;
use colored::Colorize;
use pair_finder::{case::parse_nums, Algorithm, Pair};

/// Run the given algorithms on one input and print what each returns
pub async fn execute(nums: &str, target: i32, algorithms: &[Algorithm], json: bool) -> Result<()> {
    let nums = parse_nums(nums)?;

    let results: Vec<(Algorithm, Option<Pair>)> = algorithms
        .iter()
        .map(|&algorithm| (algorithm, algorithm.find(&nums, target)))
        .collect();

    if json {
        for (_, result) in &results {
            let indices: Vec<usize> = result
                .map(|pair| pair.indices().to_vec())
                .unwrap_or_default();
            println!("{}", serde_json::to_string(&indices)?);
        }
        return Ok(());
    }

    for (algorithm, result) in &results {
        match result {
            Some(pair) => println!(
                "{} {} → {} + {} = {}",
                format!("[{algorithm}]").cyan(),
                pair.to_string().green().bold(),
                nums[pair.first],
                nums[pair.second],
                target
            ),
            None => println!(
                "{} {}",
                format!("[{algorithm}]").cyan(),
                format!("No pair sums to {target}.").red()
            ),
        }
    }

    if results.len() > 1 && results.windows(2).any(|w| w[0].1 != w[1].1) {
        println!(
            "{}",
            "Algorithms returned different pairs; both are valid.".yellow()
        );
    }

    Ok(())
}
