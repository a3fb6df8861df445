//! Runtime game configuration.
//!
//! [`GameConfig`] mirrors the defaults in [`crate::constants`]. A TOML file
//! can override any subset of fields; missing keys keep their defaults:
//!
//! ```toml
//! starting_money = 250
//! end_on_defeat = true
//!
//! [tower_costs]
//! sniper = 120
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::TowerKind;
use crate::error::ConfigError;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub starting_money: i64,
    pub starting_lives: i64,
    pub field_width: f64,
    pub field_height: f64,
    /// Waypoints every enemy walks, first to last.
    pub path: Vec<Position>,
    pub spawn_interval_ms: f64,
    pub tower_costs: TowerCosts,
    /// Stop the simulation once lives run out. Off by default: the game
    /// keeps running with zero or negative lives.
    pub end_on_defeat: bool,
}

/// Purchase price per tower kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerCosts {
    pub basic: i64,
    pub sniper: i64,
    pub splash: i64,
}

impl Default for TowerCosts {
    fn default() -> Self {
        Self {
            basic: BASIC_TOWER_COST,
            sniper: SNIPER_TOWER_COST,
            splash: SPLASH_TOWER_COST,
        }
    }
}

impl TowerCosts {
    pub fn cost(&self, kind: TowerKind) -> i64 {
        match kind {
            TowerKind::Basic => self.basic,
            TowerKind::Sniper => self.sniper,
            TowerKind::Splash => self.splash,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_money: STARTING_MONEY,
            starting_lives: STARTING_LIVES,
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            path: default_path(),
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            tower_costs: TowerCosts::default(),
            end_on_defeat: false,
        }
    }
}

/// The stock S-bend across the 800x600 field.
pub fn default_path() -> Vec<Position> {
    vec![
        Position::new(0.0, 100.0),
        Position::new(200.0, 100.0),
        Position::new(200.0, 300.0),
        Position::new(600.0, 300.0),
        Position::new(600.0, 100.0),
        Position::new(800.0, 100.0),
    ]
}

impl GameConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path.len() < 2 {
            return Err(ConfigError::PathTooShort(self.path.len()));
        }
        for (name, value) in [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("spawn_interval_ms", self.spawn_interval_ms),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.path.len(), 6);
        assert_eq!(config.starting_money, 100);
        assert_eq!(config.starting_lives, 20);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            starting_money = 250
            end_on_defeat = true

            [tower_costs]
            sniper = 120
            "#,
        )
        .unwrap();
        assert_eq!(config.starting_money, 250);
        assert!(config.end_on_defeat);
        assert_eq!(config.tower_costs.cost(TowerKind::Sniper), 120);
        assert_eq!(config.tower_costs.cost(TowerKind::Basic), BASIC_TOWER_COST);
        assert_eq!(config.field_width, FIELD_WIDTH);
    }

    #[test]
    fn custom_path_is_parsed() {
        let config = GameConfig::from_toml_str(
            r#"
            path = [{ x = 0.0, y = 0.0 }, { x = 50.0, y = 0.0 }]
            "#,
        )
        .unwrap();
        assert_eq!(config.path, vec![Position::new(0.0, 0.0), Position::new(50.0, 0.0)]);
    }

    #[test]
    fn single_waypoint_path_is_rejected() {
        let err = GameConfig::from_toml_str("path = [{ x = 0.0, y = 0.0 }]").unwrap_err();
        assert!(matches!(err, ConfigError::PathTooShort(1)));
    }

    #[test]
    fn zero_spawn_interval_is_rejected() {
        let err = GameConfig::from_toml_str("spawn_interval_ms = 0.0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                name: "spawn_interval_ms",
                ..
            }
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = GameConfig::from_toml_str("starting_money = \"lots\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GameConfig::load("/definitely/not/here.toml").unwrap_err();
        match err {
            ConfigError::Read { path, .. } => {
                assert!(path.ends_with("here.toml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
