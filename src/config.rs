//! Game tuning constants.
//!
//! Every value has a default matching the classic game.  A JSON file can
//! override any subset of fields; the result is validated before use.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "FRESH_CATCH_CONFIG";

/// Upper bound for the millisecond timers.
pub const MAX_TIMER_MS: u64 = 60_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Play field (logical pixels) ===
    pub field_width: f32,
    pub field_height: f32,

    // === Basket ===
    pub basket_width: f32,
    pub basket_height: f32,
    /// Space between the basket's bottom edge and the field's bottom edge
    pub basket_bottom_gap: f32,
    pub basket_speed: f32,
    /// Shrinks the catch zone on both sides of the basket
    pub catch_margin: f32,

    // === Produce ===
    pub item_size: f32,
    pub item_speed: f32,
    pub spawn_interval_ms: u64,
    /// Chance that a spawned item is fresh (0.0 - 1.0)
    pub fresh_probability: f64,

    // === Scoring ===
    pub fresh_bonus: i32,
    /// Magnitude subtracted on a spoiled catch
    pub spoiled_penalty: i32,
    pub win_score: i32,
    pub lose_score: i32,
    /// Delay before the basket cheers up and the catch message clears
    pub feedback_reset_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 600.0,

            basket_width: 100.0,
            basket_height: 60.0,
            basket_bottom_gap: 20.0,
            basket_speed: 10.0,
            catch_margin: 10.0,

            item_size: 40.0,
            item_speed: 3.0,
            spawn_interval_ms: 1000,
            fresh_probability: 0.7,

            fresh_bonus: 10,
            spoiled_penalty: 20,
            win_score: 200,
            lose_score: -100,
            feedback_reset_ms: 500,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load from `FRESH_CATCH_CONFIG` if set, falling back to defaults on
    /// any error.
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            log::info!("Using default config");
            return Self::default();
        };
        let path = Path::new(&path);
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{} ({}); using defaults", err, path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("basket_width", self.basket_width),
            ("basket_height", self.basket_height),
            ("basket_speed", self.basket_speed),
            ("item_size", self.item_size),
            ("item_speed", self.item_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.basket_width > self.field_width {
            return Err(invalid("basket_width exceeds field_width".into()));
        }
        if self.item_size > self.field_width {
            return Err(invalid("item_size exceeds field_width".into()));
        }
        if !(self.basket_bottom_gap.is_finite() && self.basket_bottom_gap >= 0.0) {
            return Err(invalid(format!(
                "basket_bottom_gap must be non-negative, got {}",
                self.basket_bottom_gap
            )));
        }
        if self.basket_height + self.basket_bottom_gap > self.field_height {
            return Err(invalid("basket does not fit vertically in the field".into()));
        }
        if !self.catch_margin.is_finite()
            || self.catch_margin < 0.0
            || self.catch_margin * 2.0 >= self.basket_width
        {
            return Err(invalid(format!(
                "catch_margin must be in [0, basket_width / 2), got {}",
                self.catch_margin
            )));
        }
        if self.spawn_interval_ms == 0 || self.spawn_interval_ms > MAX_TIMER_MS {
            return Err(invalid(format!(
                "spawn_interval_ms must be in 1..={MAX_TIMER_MS}, got {}",
                self.spawn_interval_ms
            )));
        }
        if self.feedback_reset_ms > MAX_TIMER_MS {
            return Err(invalid(format!(
                "feedback_reset_ms must be at most {MAX_TIMER_MS}, got {}",
                self.feedback_reset_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.fresh_probability) {
            return Err(invalid(format!(
                "fresh_probability must be in [0, 1], got {}",
                self.fresh_probability
            )));
        }
        if self.fresh_bonus < 0 || self.spoiled_penalty < 0 {
            return Err(invalid("fresh_bonus and spoiled_penalty are magnitudes".into()));
        }
        if self.win_score <= 0 {
            return Err(invalid(format!("win_score must be positive, got {}", self.win_score)));
        }
        if self.lose_score >= 0 {
            return Err(invalid(format!("lose_score must be negative, got {}", self.lose_score)));
        }
        Ok(())
    }

    /// Leftmost x the basket may occupy on the right side.
    pub fn basket_max_x(&self) -> f32 {
        self.field_width - self.basket_width
    }

    pub fn basket_start_x(&self) -> f32 {
        self.field_width / 2.0 - self.basket_width / 2.0
    }

    pub fn basket_y(&self) -> f32 {
        self.field_height - self.basket_height - self.basket_bottom_gap
    }
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::Invalid(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let c = GameConfig::from_json_str(r#"{ "win_score": 50 }"#).unwrap();
        assert_eq!(c.win_score, 50);
        assert_eq!(c.lose_score, -100);
        assert_eq!(c.spawn_interval_ms, 1000);
    }

    #[test]
    fn basket_geometry_from_defaults() {
        let c = GameConfig::default();
        assert_eq!(c.basket_start_x(), 350.0);
        assert_eq!(c.basket_y(), 520.0);
        assert_eq!(c.basket_max_x(), 700.0);
    }
}
