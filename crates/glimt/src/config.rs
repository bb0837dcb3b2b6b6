//! Game configuration.
//!
//! Every gameplay tunable lives here with defaults matching the shipped
//! balance. Configs deserialize from JSON with serde, and any omitted section
//! or field falls back to its default, so a config file only needs to name
//! what it changes.

use serde::{Deserialize, Serialize};

/// Errors raised while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level configuration: world size plus per-entity-class tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// World (canvas) width in world units.
    pub width: f32,
    /// World (canvas) height in world units.
    pub height: f32,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub bullet: BulletConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Movement speed in units per frame.
    pub speed: f32,
    pub health: i32,
    pub damage: i32,
    pub sprite_width: f32,
    pub sprite_height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Homing speed in units per frame.
    pub speed: f32,
    /// Polygon radius, also the collision radius.
    pub radius: f32,
    /// Milliseconds between spawns.
    pub spawn_interval_ms: u64,
    /// Distance from the world corners at which enemies appear.
    pub spawn_inset: f32,
    /// Radians of visual spin added per frame.
    pub spin: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    /// Speed in units per frame.
    pub speed: f32,
    /// Drawn disc radius, also the wall-kill margin.
    pub radius: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            player: PlayerConfig::default(),
            enemy: EnemyConfig::default(),
            bullet: BulletConfig::default(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speed: 10.0,
            health: 10,
            damage: 1,
            sprite_width: 100.0,
            sprite_height: 100.0,
        }
    }
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            speed: 7.0,
            radius: 50.0,
            spawn_interval_ms: 1500,
            spawn_inset: 100.0,
            spin: 0.05,
        }
    }
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            speed: 50.0,
            radius: 10.0,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_balance() {
        let c = GameConfig::default();
        assert_eq!(c.width, 1920.0);
        assert_eq!(c.height, 1080.0);
        assert_eq!(c.player.speed, 10.0);
        assert_eq!(c.player.health, 10);
        assert_eq!(c.enemy.speed, 7.0);
        assert_eq!(c.enemy.radius, 50.0);
        assert_eq!(c.enemy.spawn_interval_ms, 1500);
        assert_eq!(c.bullet.speed, 50.0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let c = GameConfig::from_json(r#"{ "enemy": { "speed": 3.0 } }"#).unwrap();
        assert_eq!(c.enemy.speed, 3.0);
        // Untouched fields keep their defaults.
        assert_eq!(c.enemy.radius, 50.0);
        assert_eq!(c.player.health, 10);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
