//! Config command - Show or update stored settings

use anyhow::{bail, Result};
use colored::Colorize;
use pair_finder::{
    config::{get_config_path, reset_config, Config},
    Algorithm,
};

/// Print the current settings, applying any changes first
pub async fn execute(
    mut config: Config,
    load_error: Option<anyhow::Error>,
    algorithm: Option<Algorithm>,
    trials: Option<usize>,
    color: Option<bool>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = reset_config()?;
        println!("{}", "✓ Settings restored to defaults.".green());
    } else if algorithm.is_some() || trials.is_some() || color.is_some() {
        if let Some(e) = load_error {
            bail!(
                "refusing to overwrite a config file that could not be read ({e}); \
                 fix it by hand or run `config --reset`"
            );
        }
        if let Some(a) = algorithm {
            config.default_algorithm = a;
        }
        if let Some(t) = trials {
            config.fuzz.trials = t;
        }
        if let Some(c) = color {
            config.color = c;
        }
        config.save()?;
        println!("{}", "✓ Settings saved successfully!".green());
    }

    if let Ok(path) = get_config_path() {
        println!("{} {}", "Config file:".bold(), path.display());
    }
    println!("{} {}", "Default algorithm:".bold(), config.default_algorithm);
    println!("{} {}", "Color:".bold(), config.color);
    println!("{}", "Fuzz:".bold());
    println!("  trials:  {}", config.fuzz.trials);
    println!("  max_len: {}", config.fuzz.max_len);
    println!(
        "  values:  {}..={}",
        config.fuzz.min_value, config.fuzz.max_value
    );
    println!("  workers: {}", config.fuzz.workers);

    Ok(())
}
