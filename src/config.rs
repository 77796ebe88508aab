use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::pair_finder::Algorithm;

const APP_NAME: &str = "pair-finder";

/// Missing keys take their default, so a hand-edited file keeps the values it
/// does set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_algorithm: Algorithm,
    pub color: bool,
    pub fuzz: FuzzSettings,
}

/// Shape of the random inputs used when cross-checking algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzSettings {
    pub trials: usize,
    pub max_len: usize,
    pub min_value: i32,
    pub max_value: i32,
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::Indexed,
            color: true,
            fuzz: FuzzSettings::default(),
        }
    }
}

impl Default for FuzzSettings {
    fn default() -> Self {
        Self {
            trials: 10_000,
            max_len: 64,
            min_value: -50,
            max_value: 50,
            workers: 4,
        }
    }
}

impl FuzzSettings {
    /// `(min, max)` with the bounds in order.
    pub fn value_range(&self) -> (i32, i32) {
        if self.min_value <= self.max_value {
            (self.min_value, self.max_value)
        } else {
            (self.max_value, self.min_value)
        }
    }

    /// Clamp nonsensical values so a hand-edited config cannot stall a run.
    pub fn normalized(&self) -> Self {
        let (min_value, max_value) = self.value_range();
        Self {
            trials: self.trials,
            max_len: self.max_len,
            min_value,
            max_value,
            workers: self.workers.max(1),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config: Config = confy::load(APP_NAME, None)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        confy::store(APP_NAME, None, self)?;
        Ok(())
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let config_path = confy::get_configuration_file_path(APP_NAME, None)?;
    Ok(config_path)
}

pub fn reset_config() -> Result<Config> {
    let config = Config::default();
    config.save()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_algorithm, Algorithm::Indexed);
        assert!(config.color);
        assert_eq!(config.fuzz.trials, 10_000);
        assert_eq!(config.fuzz.workers, 4);
    }

    #[test]
    fn test_normalized_swaps_inverted_range() {
        let settings = FuzzSettings {
            min_value: 10,
            max_value: -10,
            workers: 0,
            ..Default::default()
        };
        let normalized = settings.normalized();
        assert_eq!(normalized.min_value, -10);
        assert_eq!(normalized.max_value, 10);
        assert_eq!(normalized.workers, 1);
    }

    #[test]
    fn test_normalized_keeps_valid_settings() {
        let settings = FuzzSettings::default();
        assert_eq!(settings.normalized(), settings);
    }

    #[test]
    #[serial_test::serial]
    fn test_save_and_load_in_isolated_home() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let original_home = env::var("HOME").ok();
        let original_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("HOME", temp_dir.path());
        env::set_var("XDG_CONFIG_HOME", temp_dir.path().join(".config"));

        let config = Config {
            default_algorithm: Algorithm::Brute,
            ..Default::default()
        };
        config.save().unwrap();
        let loaded = Config::load().unwrap();
        let path = get_config_path().unwrap();

        let reset = reset_config().unwrap();
        let after_reset = Config::load().unwrap();

        for (key, value) in [("HOME", original_home), ("XDG_CONFIG_HOME", original_xdg)] {
            match value {
                Some(val) => env::set_var(key, val),
                None => env::remove_var(key),
            }
        }

        assert_eq!(loaded.default_algorithm, Algorithm::Brute);
        assert!(path.starts_with(temp_dir.path()));
        assert_eq!(reset.default_algorithm, Algorithm::Indexed);
        assert_eq!(after_reset.default_algorithm, Algorithm::Indexed);
    }

    #[test]
    fn test_partial_config_keeps_given_values() {
        let config: Config =
            serde_json::from_str(r#"{"default_algorithm": "brute", "fuzz": {"trials": 77, "max_len": 5}}"#)
                .unwrap();
        assert_eq!(config.default_algorithm, Algorithm::Brute);
        assert!(config.color);
        assert_eq!(config.fuzz.trials, 77);
        assert_eq!(config.fuzz.max_len, 5);
        assert_eq!(config.fuzz.workers, FuzzSettings::default().workers);

        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.default_algorithm, Algorithm::Indexed);
    }

    #[test]
    fn test_value_range_orders_bounds() {
        let settings = FuzzSettings {
            min_value: 3,
            max_value: -3,
            ..Default::default()
        };
        assert_eq!(settings.value_range(), (-3, 3));
        assert_eq!(FuzzSettings::default().value_range(), (-50, 50));
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = Config {
            default_algorithm: Algorithm::Brute,
            color: false,
            fuzz: FuzzSettings {
                trials: 7,
                ..Default::default()
            },
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"brute\""));
        let deserialized: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.default_algorithm, config.default_algorithm);
        assert_eq!(deserialized.color, config.color);
        assert_eq!(deserialized.fuzz, config.fuzz);
    }
}
