//! Game settings and preferences
//!
//! Loaded from an optional JSON file named by `NEON_DRIFT_SETTINGS`.
//! Missing fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the settings file path
pub const SETTINGS_ENV: &str = "NEON_DRIFT_SETTINGS";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    Medium,
    #[default]
    High,
}

impl QualityPreset {
    /// Particle pool size for this preset
    pub fn max_particles(&self) -> usize {
        match self {
            QualityPreset::Low => 500,
            QualityPreset::Medium => 1000,
            QualityPreset::High => 2000,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Particle effects (drift trails, speed lines)
    pub particles: bool,
    /// Screen shake on impacts
    pub screen_shake: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (no shake)
    pub reduced_motion: bool,

    /// Fixed RNG seed for reproducible runs (entropy when unset)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::High,
            particles: true,
            screen_shake: true,
            show_fps: false,
            reduced_motion: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Effective particle pool size
    pub fn max_particles(&self) -> usize {
        if !self.particles {
            0
        } else {
            self.quality.max_particles()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Settings from `NEON_DRIFT_SETTINGS`, or defaults when unset or unreadable
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(Path::new(&path)) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Path::new(&path).display());
                settings
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
