use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

mod commands;

use pair_finder::{config::Config, Algorithm};

#[derive(Parser)]
#[command(name = "pair-finder")]
#[command(about = "Find two numbers that add up to a target, and check the solvers")]
#[command(version = "0.1.0")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a pair of indices whose values sum to the target
    Solve {
        /// Comma separated numbers, e.g. "2,7,11,15" or "[2,7,11,15]"
        #[arg(short, long, allow_hyphen_values = true)]
        nums: String,
        /// Target sum
        #[arg(short, long, allow_hyphen_values = true)]
        target: i32,
        /// Algorithm to use (brute or brute-force, indexed or hash)
        #[arg(short, long, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,
        /// Run every algorithm and compare
        #[arg(long, conflicts_with = "algorithm")]
        both: bool,
        /// Print the result as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in cases or a case file
    Check {
        /// JSON case file
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Algorithm to use (brute or brute-force, indexed or hash)
        #[arg(short, long, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,
        /// Write a markdown summary to this path
        #[arg(short, long)]
        report: Option<PathBuf>,
        /// Write the built-in cases to this path and exit
        #[arg(long, conflicts_with = "file")]
        save: Option<PathBuf>,
    },
    /// Cross-check both algorithms on random inputs
    Fuzz {
        /// Number of random inputs
        #[arg(short, long)]
        trials: Option<usize>,
        /// Seed for reproducible runs (random if not specified)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Number of worker tasks
        #[arg(short, long)]
        workers: Option<usize>,
        /// Maximum sequence length
        #[arg(long)]
        max_len: Option<usize>,
    },
    /// Show or update stored settings
    Config {
        /// Default algorithm (brute or brute-force, indexed or hash)
        #[arg(short, long, value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,
        /// Default number of fuzz trials
        #[arg(short, long)]
        trials: Option<usize>,
        /// Enable or disable colored output
        #[arg(long)]
        color: Option<bool>,
        /// Restore the defaults
        #[arg(long)]
        reset: bool,
    },
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

fn init_logging() {
    if std::env::var("PAIR_FINDER_LOG").is_ok() {
        let env = env_logger::Env::new()
            .filter("PAIR_FINDER_LOG")
            .write_style("PAIR_FINDER_LOG_STYLE");
        env_logger::init_from_env(env);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    // A config that failed to load is never saved back over the user's file.
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => {
            eprintln!(
                "{}",
                format!("Warning: could not read settings, using defaults: {e}").yellow()
            );
            (Config::default(), Some(e))
        }
    };
    log::debug!("loaded settings: {:?}", config);

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Solve {
            nums,
            target,
            algorithm,
            both,
            json,
        } => {
            let algorithms = if both {
                Algorithm::ALL.to_vec()
            } else {
                vec![algorithm.unwrap_or(config.default_algorithm)]
            };
            commands::solve::execute(&nums, target, &algorithms, json).await?;
        }
        Commands::Check {
            file,
            algorithm,
            report,
            save,
        } => {
            if let Some(path) = save {
                commands::check::save_builtin(&path).await?;
            } else {
                let algorithm = algorithm.unwrap_or(config.default_algorithm);
                commands::check::execute(file, algorithm, report).await?;
            }
        }
        Commands::Fuzz {
            trials,
            seed,
            workers,
            max_len,
        } => {
            let mut settings = config.fuzz.clone();
            if let Some(trials) = trials {
                settings.trials = trials;
            }
            if let Some(workers) = workers {
                settings.workers = workers;
            }
            if let Some(max_len) = max_len {
                settings.max_len = max_len;
            }
            commands::fuzz::execute(&settings, seed).await?;
        }
        Commands::Config {
            algorithm,
            trials,
            color,
            reset,
        } => {
            commands::configure::execute(config, load_error, algorithm, trials, color, reset)
                .await?;
        }
    }

    Ok(())
}
