//! Main application configuration
//!
//! This module defines the top-level configuration for the rating run,
//! including environment variable loading, TOML files and validation.

use crate::config::league::LeagueSettings;
use crate::config::rating::RatingConfig;
use crate::types::DivisionTier;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub league: LeagueSettings,
    pub rating: RatingConfig,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Service name for logging and metrics
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "league-ratings".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, then apply environment overrides
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let mut config: AppConfig = toml::from_str(&contents)
            .map_err(|e| anyhow!("Invalid config file {}: {}", path.display(), e))?;

        config.apply_env()?;
        validate_config(&config)?;
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            self.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            self.service.log_level = log_level;
        }

        // League settings
        if let Ok(season) = env::var("LEAGUE_SEASON") {
            self.league.season = season
                .parse()
                .map_err(|_| anyhow!("Invalid LEAGUE_SEASON value: {}", season))?;
        }
        if let Ok(division) = env::var("LEAGUE_DIVISION") {
            let tier: u8 = division
                .parse()
                .map_err(|_| anyhow!("Invalid LEAGUE_DIVISION value: {}", division))?;
            self.league.division = DivisionTier::try_from(tier)?;
        }
        if let Ok(teams) = env::var("LEAGUE_TEAMS") {
            self.league.teams = teams
                .parse()
                .map_err(|_| anyhow!("Invalid LEAGUE_TEAMS value: {}", teams))?;
        }

        // Rating settings
        if let Ok(k_factor) = env::var("ELO_K_FACTOR") {
            self.rating.k_factor = k_factor
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_K_FACTOR value: {}", k_factor))?;
        }
        if let Ok(default_rating) = env::var("ELO_DEFAULT_RATING") {
            self.rating.default_rating = default_rating
                .parse()
                .map_err(|_| anyhow!("Invalid ELO_DEFAULT_RATING value: {}", default_rating))?;
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    // Validate league settings
    if config.league.season == 0 {
        return Err(anyhow!("Season must be greater than 0"));
    }
    if config.league.teams < 2 {
        return Err(anyhow!("A league needs at least 2 teams"));
    }
    if config.league.teams % 2 != 0 {
        return Err(anyhow!(
            "Team count must be even to derive schedule days, got {}",
            config.league.teams
        ));
    }

    config.rating.validate()?;

    Ok(())
}
