//! Configuration management

use crate::domain::route::DEFAULT_MATCH_THRESHOLD;
use crate::domain::{Climber, ClimberRegistry};
use crate::error::{ClimbError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Minimum similarity for a fuzzy route match to be accepted
    #[serde(default = "default_threshold")]
    pub match_threshold: f64,
    /// Only rows whose place mentions this text are imported (empty: all rows)
    #[serde(default = "default_place_filter")]
    pub place_filter: String,
    pub created: DateTime<Utc>,
    #[serde(default = "default_climbers")]
    pub climbers: Vec<Climber>,
}

fn default_threshold() -> f64 {
    DEFAULT_MATCH_THRESHOLD
}

fn default_place_filter() -> String {
    "rumney".to_string()
}

fn default_climbers() -> Vec<Climber> {
    ClimberRegistry::default()
        .codes()
        .map(Climber::new)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            match_threshold: default_threshold(),
            place_filter: default_place_filter(),
            created: Utc::now(),
            climbers: default_climbers(),
        }
    }

    /// Load config from .climblog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".climblog").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ClimbError::NotClimblogDirectory(path.to_path_buf())
            } else {
                ClimbError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| ClimbError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .climblog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let climblog_dir = path.join(".climblog");
        let config_path = climblog_dir.join("config.toml");

        // Ensure .climblog directory exists
        if !climblog_dir.exists() {
            fs::create_dir(&climblog_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| ClimbError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(ClimbError::Config(format!(
                "match_threshold must be within 0.0..=1.0, got {}",
                self.match_threshold
            )));
        }
        if self.climbers.iter().any(|c| c.code.trim().is_empty()) {
            return Err(ClimbError::Config("Climber codes cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn climber_registry(&self) -> ClimberRegistry {
        ClimberRegistry::new(self.climbers.clone())
    }
}
