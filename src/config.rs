use std::env;
use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ENV: &str = "GYM_TRACKER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "gym_tracker.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub defaults: FormDefaults,
    pub minimums: FormMinimums,
}

/// Values the log form is prefilled with, and reset to after a submit.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct FormDefaults {
    pub time_spent: u32,
    pub sets: u32,
    pub reps: u32,
    pub weight_lifted: f64,
    pub body_weight: f64,
}

/// Lowest values the form accepts; anything below is raised to these.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct FormMinimums {
    pub time_spent: u32,
    pub sets: u32,
    pub reps: u32,
    pub weight_lifted: f64,
    pub body_weight: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_width: 1280.0,
            window_height: 800.0,
            defaults: FormDefaults::default(),
            minimums: FormMinimums::default(),
        }
    }
}

impl Default for FormDefaults {
    fn default() -> Self {
        FormDefaults {
            time_spent: 60,
            sets: 3,
            reps: 10,
            weight_lifted: 20.0,
            body_weight: 70.0,
        }
    }
}

impl Default for FormMinimums {
    fn default() -> Self {
        FormMinimums {
            time_spent: 1,
            sets: 1,
            reps: 1,
            weight_lifted: 0.0,
            body_weight: 0.0,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        AppConfig::from_json(&json)
    }

    /// Reads the file named by `GYM_TRACKER_CONFIG` (or `gym_tracker.json`).
    /// A missing file or a broken one both yield the defaults.
    pub fn load() -> Self {
        let path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match AppConfig::from_path(Path::new(&path)) {
            Ok(config) => {
                info!("loaded config from {}", path);
                config
            }
            Err(ConfigError::Read(err)) if err.kind() == io::ErrorKind::NotFound => {
                info!("no config at {}, using defaults", path);
                AppConfig::default()
            }
            Err(err) => {
                warn!("{} ({}), using defaults", err, path);
                AppConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.defaults.time_spent, 60);
        assert_eq!(config.minimums.sets, 1);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(
            r#"{"window_width": 800.0, "defaults": {"body_weight": 82.5}}"#,
        )
        .unwrap();
        assert_eq!(config.window_width, 800.0);
        assert_eq!(config.window_height, 800.0);
        assert_eq!(config.defaults.body_weight, 82.5);
        assert_eq!(config.defaults.reps, 10);
    }

    #[test]
    fn test_partial_minimums_keep_other_minimums() {
        let config = AppConfig::from_json(r#"{"minimums": {"sets": 2}}"#).unwrap();
        assert_eq!(config.minimums.sets, 2);
        assert_eq!(config.minimums.reps, 1);
        assert_eq!(config.minimums.body_weight, 0.0);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = AppConfig::from_json("{ window_width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = AppConfig::from_path(Path::new("/nonexistent/gym_tracker.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read(ref e) if e.kind() == io::ErrorKind::NotFound));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let path = env::temp_dir().join(format!("gym_tracker_{}.json", std::process::id()));
        fs::write(&path, "{ \"window_width\": ").unwrap();

        env::set_var(CONFIG_ENV, &path);
        assert_eq!(AppConfig::load(), AppConfig::default());

        fs::remove_file(&path).unwrap();
        assert_eq!(AppConfig::load(), AppConfig::default());

        env::set_var(CONFIG_ENV, "/nonexistent/gym_tracker.json");
        assert_eq!(AppConfig::load(), AppConfig::default());
        env::remove_var(CONFIG_ENV);
    }

    #[test]
    fn test_from_path_reads_file() {
        let path = env::temp_dir().join(format!("gym_tracker_custom_{}.json", std::process::id()));
        fs::write(&path, r#"{"defaults": {"sets": 5}}"#).unwrap();

        let config = AppConfig::from_path(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.defaults.sets, 5);
        assert_eq!(config.minimums, FormMinimums::default());
    }
}
