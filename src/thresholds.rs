//! thresholds.rs — Comfort thresholds for the scoring engine.
//!
//! The penalty bands are deliberately small and explicit: an upper acceptable
//! AQI and a temperature comfort band. They load from a TOML file (partial
//! files are fine, missing file means defaults) with per-field environment
//! overrides, so they can be tuned without recompiling.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// --- env defaults & names ---
pub const DEFAULT_THRESHOLDS_PATH: &str = "config/thresholds.toml";

pub const ENV_THRESHOLDS_PATH: &str = "ADVISOR_THRESHOLDS_PATH";
pub const ENV_AQI_MAX: &str = "ADVISOR_AQI_MAX";
pub const ENV_TEMP_MIN_C: &str = "ADVISOR_TEMP_MIN_C";
pub const ENV_TEMP_MAX_C: &str = "ADVISOR_TEMP_MAX_C";

/// Upper acceptable AQI; readings above this are penalized.
pub const DEFAULT_AQI_MAX: f64 = 75.0;
/// Lower bound of the temperature comfort band, °C.
pub const DEFAULT_TEMP_MIN_C: f64 = 5.0;
/// Upper bound of the temperature comfort band, °C.
pub const DEFAULT_TEMP_MAX_C: f64 = 28.0;

/// Named, injectable scoring thresholds with documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Upper acceptable AQI.
    #[serde(default = "default_aqi_max")]
    pub aqi_max: f64,
    /// Comfort band lower bound, °C.
    #[serde(default = "default_temp_min_c")]
    pub temp_min_c: f64,
    /// Comfort band upper bound, °C.
    #[serde(default = "default_temp_max_c")]
    pub temp_max_c: f64,
}

fn default_aqi_max() -> f64 {
    DEFAULT_AQI_MAX
}
fn default_temp_min_c() -> f64 {
    DEFAULT_TEMP_MIN_C
}
fn default_temp_max_c() -> f64 {
    DEFAULT_TEMP_MAX_C
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            aqi_max: DEFAULT_AQI_MAX,
            temp_min_c: DEFAULT_TEMP_MIN_C,
            temp_max_c: DEFAULT_TEMP_MAX_C,
        }
    }
}

impl Thresholds {
    /// Load thresholds for the current process.
    ///
    /// Order: TOML file at `ADVISOR_THRESHOLDS_PATH` (default
    /// `config/thresholds.toml`; a missing file is not an error), then
    /// per-field env overrides, then hardening of odd values.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var(ENV_THRESHOLDS_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_THRESHOLDS_PATH));
        let mut t = Self::load_from_path(&path)?;
        t.apply_env_overrides();
        t.harden();
        info!(
            aqi_max = t.aqi_max,
            temp_min_c = t.temp_min_c,
            temp_max_c = t.temp_max_c,
            "thresholds loaded"
        );
        Ok(t)
    }

    /// Load from a specific TOML file. Missing file → defaults; malformed
    /// TOML is a real error and propagates.
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        match fs::read_to_string(path) {
            Ok(s) => Self::from_toml_str(&s)
                .with_context(|| format!("invalid thresholds TOML at {}", path.display())),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let t: Thresholds = toml::from_str(toml_str)?;
        Ok(t)
    }

    /// Apply `ADVISOR_AQI_MAX` / `ADVISOR_TEMP_MIN_C` / `ADVISOR_TEMP_MAX_C`
    /// on top of whatever the file provided. Unparseable or non-finite
    /// values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = parse_f64_env(std::env::var(ENV_AQI_MAX).ok()) {
            self.aqi_max = v;
        }
        if let Some(v) = parse_f64_env(std::env::var(ENV_TEMP_MIN_C).ok()) {
            self.temp_min_c = v;
        }
        if let Some(v) = parse_f64_env(std::env::var(ENV_TEMP_MAX_C).ok()) {
            self.temp_max_c = v;
        }
    }

    /// Ensure sane values even if the TOML or env was odd: non-finite fields
    /// fall back to defaults, and an inverted comfort band resets both ends.
    pub fn harden(&mut self) {
        if !self.aqi_max.is_finite() {
            warn!(aqi_max = ?self.aqi_max, "non-finite aqi_max, using default");
            self.aqi_max = DEFAULT_AQI_MAX;
        }
        if !self.temp_min_c.is_finite() {
            warn!(temp_min_c = ?self.temp_min_c, "non-finite temp_min_c, using default");
            self.temp_min_c = DEFAULT_TEMP_MIN_C;
        }
        if !self.temp_max_c.is_finite() {
            warn!(temp_max_c = ?self.temp_max_c, "non-finite temp_max_c, using default");
            self.temp_max_c = DEFAULT_TEMP_MAX_C;
        }
        if self.temp_min_c > self.temp_max_c {
            warn!(
                temp_min_c = self.temp_min_c,
                temp_max_c = self.temp_max_c,
                "inverted comfort band, using defaults"
            );
            self.temp_min_c = DEFAULT_TEMP_MIN_C;
            self.temp_max_c = DEFAULT_TEMP_MAX_C;
        }
    }
}

// parse optional float env; reject non-finite
fn parse_f64_env(raw: Option<String>) -> Option<f64> {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
