//! Host configuration resolved from `BLOCKFALL_*` environment variables.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::core::EngineConfig;
use crate::types::DEFAULT_FRAME_MS;

pub const ENV_CONFIG: &str = "BLOCKFALL_CONFIG";
pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_FRAME_MS: &str = "BLOCKFALL_FRAME_MS";
pub const ENV_LOG_PATH: &str = "BLOCKFALL_LOG_PATH";
pub const ENV_LOG: &str = "BLOCKFALL_LOG";

const MAX_FRAME_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub engine: EngineConfig,
    /// Bag seed; `None` means pick one at random
    pub seed: Option<u64>,
    pub frame_ms: u32,
    /// Log file; logging is off without one
    pub log_path: Option<PathBuf>,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            seed: None,
            frame_ms: DEFAULT_FRAME_MS,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut config = Self::default();

        if let Some(path) = get(ENV_CONFIG) {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("reading engine config {}", path))?;
            config.engine = EngineConfig::from_json_str(&json)
                .with_context(|| format!("loading engine config {}", path))?;
        }

        if let Some(seed) = get(ENV_SEED) {
            config.seed = Some(
                seed.parse::<u64>()
                    .with_context(|| format!("{} must be an unsigned integer, got {:?}", ENV_SEED, seed))?,
            );
        }

        if let Some(frame) = get(ENV_FRAME_MS) {
            let frame_ms: u32 = frame
                .parse()
                .with_context(|| format!("{} must be an unsigned integer, got {:?}", ENV_FRAME_MS, frame))?;
            if !(1..=MAX_FRAME_MS).contains(&frame_ms) {
                bail!("{} must be within 1..={}, got {}", ENV_FRAME_MS, MAX_FRAME_MS, frame_ms);
            }
            config.frame_ms = frame_ms;
        }

        config.log_path = get(ENV_LOG_PATH).map(PathBuf::from);
        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
