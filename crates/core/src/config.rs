//! Engine configuration
//!
//! Board size, drop speed curve and scoring policy. Every field has a default,
//! so a JSON config only needs to name what it changes:
//!
//! ```
//! use blockfall_core::config::{EngineConfig, LineScoreRule};
//!
//! let config = EngineConfig::from_json_str(r#"{ "line_score": "square", "height": 22 }"#).unwrap();
//! assert_eq!(config.line_score, LineScoreRule::Square);
//! assert_eq!(config.height, 22);
//! assert_eq!(config.width, 10);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    BASE_DROP_MS, BOARD_HEIGHT, BOARD_WIDTH, DROP_STEP_MS, LINES_PER_LEVEL, MAX_BOARD_HEIGHT,
    MAX_BOARD_WIDTH, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH, MIN_DROP_MS,
};

/// Errors produced while loading or validating an [`EngineConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board {axis} {value} is outside {min}..={max}")]
    InvalidDimension {
        axis: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("drop timing invalid: min {min_ms}ms must be between 1 and base {base_ms}ms")]
    InvalidDropTiming { base_ms: u32, min_ms: u32 },

    #[error("lines_per_level must be at least 1")]
    InvalidLinesPerLevel,

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How a multi-line clear of `n` lines is scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineScoreRule {
    /// `n * 100 * level`
    #[default]
    Level,
    /// `n * n * 100`, independent of level
    Square,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub width: u8,
    pub height: u8,
    /// Drop interval at level 1
    pub base_drop_ms: u32,
    /// Drop interval reduction per level
    pub drop_step_ms: u32,
    /// Drop interval floor
    pub min_drop_ms: u32,
    pub lines_per_level: u32,
    pub line_score: LineScoreRule,
    /// Points per row for a manual soft drop
    pub soft_drop_points: u32,
    /// Points per row travelled by a hard drop
    pub hard_drop_points: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            base_drop_ms: BASE_DROP_MS,
            drop_step_ms: DROP_STEP_MS,
            min_drop_ms: MIN_DROP_MS,
            lines_per_level: LINES_PER_LEVEL,
            line_score: LineScoreRule::Level,
            soft_drop_points: 0,
            hard_drop_points: 0,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_line_score(mut self, rule: LineScoreRule) -> Self {
        self.line_score = rule;
        self
    }

    pub fn with_drop_points(mut self, soft: u32, hard: u32) -> Self {
        self.soft_drop_points = soft;
        self.hard_drop_points = hard;
        self
    }

    pub fn with_drop_curve(mut self, base_ms: u32, step_ms: u32, min_ms: u32) -> Self {
        self.base_drop_ms = base_ms;
        self.drop_step_ms = step_ms;
        self.min_drop_ms = min_ms;
        self
    }

    /// Parse a JSON document and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_WIDTH..=MAX_BOARD_WIDTH).contains(&self.width) {
            return Err(ConfigError::InvalidDimension {
                axis: "width",
                value: self.width,
                min: MIN_BOARD_WIDTH,
                max: MAX_BOARD_WIDTH,
            });
        }
        if !(MIN_BOARD_HEIGHT..=MAX_BOARD_HEIGHT).contains(&self.height) {
            return Err(ConfigError::InvalidDimension {
                axis: "height",
                value: self.height,
                min: MIN_BOARD_HEIGHT,
                max: MAX_BOARD_HEIGHT,
            });
        }
        if self.min_drop_ms == 0 || self.min_drop_ms > self.base_drop_ms {
            return Err(ConfigError::InvalidDropTiming {
                base_ms: self.base_drop_ms,
                min_ms: self.min_drop_ms,
            });
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::InvalidLinesPerLevel);
        }
        Ok(())
    }
}
