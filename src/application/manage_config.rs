//! Config management use case

use crate::domain::Climber;
use crate::error::{ClimbError, Result};
use crate::infrastructure::{ClimbRepository, Config, FileSystemRepository};

const KEYS: &str = "match_threshold, place_filter, climbers, created";

/// Service for managing log configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "match_threshold" => Ok(config.match_threshold.to_string()),
            "place_filter" => Ok(config.place_filter.clone()),
            "climbers" => Ok(climber_codes(&config)),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(ClimbError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "match_threshold" => {
                config.match_threshold = value.trim().parse().map_err(|_| {
                    ClimbError::Config(format!("match_threshold must be a number, got '{}'", value))
                })?;
            }
            "place_filter" => {
                config.place_filter = value.trim().to_string();
            }
            "climbers" => {
                config.climbers = replace_climbers(&config.climbers, value)?;
            }
            "created" => {
                return Err(ClimbError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(ClimbError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: match_threshold, place_filter, climbers",
                    key
                )));
            }
        }

        config.validate()?;
        self.repository.save_config(&config)?;
        tracing::info!(key, value, "updated config");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

pub fn climber_codes(config: &Config) -> String {
    config
        .climbers
        .iter()
        .map(|c| c.code.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// New climber list from comma-separated codes; known climbers keep their variants.
fn replace_climbers(current: &[Climber], value: &str) -> Result<Vec<Climber>> {
    let mut climbers: Vec<Climber> = Vec::new();

    for code in value.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        if climbers.iter().any(|c| c.code == code) {
            continue;
        }
        let climber = current
            .iter()
            .find(|c| c.code == code)
            .cloned()
            .unwrap_or_else(|| Climber::new(code));
        climbers.push(climber);
    }

    if climbers.is_empty() {
        return Err(ClimbError::Config("At least one climber code is required".to_string()));
    }
    Ok(climbers)
}
