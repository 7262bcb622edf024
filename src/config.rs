//! Game configuration
//!
//! Loaded from JSON (every field optional, missing fields fall back to the
//! classic constants) and validated before a session is built from it.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::inside_inner_ring;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(std::io::Error),
    /// Config text is not valid JSON for this schema
    Parse(serde_json::Error),
    /// Values parsed but describe an unplayable board
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "I/O error: {}", err),
            ConfigError::Parse(err) => write!(f, "Parse error: {}", err),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Board geometry, spawn tuning and channel periods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid
    pub grid_size: i32,
    /// Fixed ship cell as (row, column)
    pub ship_cell: IVec2,
    /// Asteroids created when a round starts
    pub initial_asteroids: usize,

    // === Channel periods ===
    /// Asteroid advance period (ms)
    pub asteroid_period_ms: u64,
    /// Projectile advance period (ms), must be faster than asteroids
    pub projectile_period_ms: u64,
    /// One extra asteroid every this many ms
    pub escalation_period_ms: u64,

    /// Std-dev of the along-edge spawn coordinate
    pub spawn_spread: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            ship_cell: IVec2::new(SHIP_ROW, SHIP_COL),
            initial_asteroids: INITIAL_ASTEROIDS,

            asteroid_period_ms: ASTEROID_PERIOD_MS,
            projectile_period_ms: PROJECTILE_PERIOD_MS,
            escalation_period_ms: ESCALATION_PERIOD_MS,

            spawn_spread: SPAWN_SPREAD,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize as pretty JSON (the shape `from_json` accepts)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 3 {
            return Err(ConfigError::Invalid(format!(
                "grid_size must be at least 3, got {}",
                self.grid_size
            )));
        }
        if !inside_inner_ring(self.ship_cell, self.grid_size) {
            return Err(ConfigError::Invalid(format!(
                "ship_cell ({}, {}) must lie inside the outer ring of a {}x{} grid",
                self.ship_cell.x, self.ship_cell.y, self.grid_size, self.grid_size
            )));
        }
        if self.asteroid_period_ms == 0
            || self.projectile_period_ms == 0
            || self.escalation_period_ms == 0
        {
            return Err(ConfigError::Invalid("channel periods must be non-zero".into()));
        }
        if self.projectile_period_ms >= self.asteroid_period_ms {
            return Err(ConfigError::Invalid(format!(
                "projectile period ({} ms) must be shorter than asteroid period ({} ms)",
                self.projectile_period_ms, self.asteroid_period_ms
            )));
        }
        if !self.spawn_spread.is_finite() || self.spawn_spread <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "spawn_spread must be positive, got {}",
                self.spawn_spread
            )));
        }
        Ok(())
    }

    pub fn asteroid_period(&self) -> Duration {
        Duration::from_millis(self.asteroid_period_ms)
    }

    pub fn projectile_period(&self) -> Duration {
        Duration::from_millis(self.projectile_period_ms)
    }

    pub fn escalation_period(&self) -> Duration {
        Duration::from_millis(self.escalation_period_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_board() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 23);
        assert_eq!(config.ship_cell, IVec2::new(11, 11));
        assert_eq!(config.initial_asteroids, 3);
        assert_eq!(config.asteroid_period(), Duration::from_millis(600));
        assert_eq!(config.projectile_period(), Duration::from_millis(50));
        assert_eq!(config.escalation_period(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "initial_asteroids": 5 }"#).unwrap();
        assert_eq!(config.initial_asteroids, 5);
        assert_eq!(config.grid_size, 23);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = GameConfig {
            grid_size: 15,
            ship_cell: IVec2::new(7, 7),
            ..Default::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_ship_on_edge() {
        let err = GameConfig::from_json(r#"{ "ship_cell": [0, 11] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_slow_projectile() {
        let err = GameConfig::from_json(
            r#"{ "asteroid_period_ms": 100, "projectile_period_ms": 100 }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GameConfig::from_json("{ grid_size: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
