//! Runtime configuration for the `synthwave` binary.
//!
//! # Environment Variables
//!
//! - `SYNTHWAVE_CONFIG`: path to a JSON grid config (fields default when missing)
//! - `SYNTHWAVE_SEED`: u64 seed for a reproducible terrain
//! - `SYNTHWAVE_FPS`: target frame rate (default 60, clamped to 1..=240)
//! - `SYNTHWAVE_LOG_PATH`: write logs to this file (no logging when unset)
//! - `SYNTHWAVE_LOG`: log filter directives (default `info`)
//!
//! ```text
//! SYNTHWAVE_CONFIG=grid.json SYNTHWAVE_SEED=7 synthwave
//! ```

use std::fs;

use anyhow::{Context, Result};

use crate::types::GridConfig;

pub const ENV_CONFIG: &str = "SYNTHWAVE_CONFIG";
pub const ENV_SEED: &str = "SYNTHWAVE_SEED";
pub const ENV_FPS: &str = "SYNTHWAVE_FPS";
pub const ENV_LOG_PATH: &str = "SYNTHWAVE_LOG_PATH";
pub const ENV_LOG_FILTER: &str = "SYNTHWAVE_LOG";

pub const DEFAULT_FPS: u64 = 60;
pub const MAX_FPS: u64 = 240;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub seed: Option<u64>,
    pub frame_interval_ms: u64,
    pub log_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            seed: None,
            frame_interval_ms: frame_interval_ms(DEFAULT_FPS),
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Build from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    ///
    /// Unparseable numbers fall back to defaults; an unreadable or malformed config
    /// file, or a grid config that fails validation, is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let grid = match non_empty(ENV_CONFIG) {
            Some(path) => {
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("reading grid config {path}"))?;
                GridConfig::from_json_str(&raw)
                    .with_context(|| format!("parsing grid config {path}"))?
            }
            None => GridConfig::default(),
        };
        grid.validate().context("invalid grid config")?;

        let seed = non_empty(ENV_SEED).and_then(|s| s.parse().ok());
        let fps = non_empty(ENV_FPS)
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_FPS);

        Ok(Self {
            grid,
            seed,
            frame_interval_ms: frame_interval_ms(fps),
            log_path: non_empty(ENV_LOG_PATH),
        })
    }
}

/// Milliseconds per frame for `fps`, clamped to `1..=MAX_FPS`.
pub fn frame_interval_ms(fps: u64) -> u64 {
    1000 / fps.clamp(1, MAX_FPS)
}
