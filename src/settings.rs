//! Game settings and tier tables
//!
//! The simulation core takes already-resolved numeric values; index/tier
//! bookkeeping stays out here with the rest of the configuration layer.
//! Persisted as JSON at a caller-supplied path.

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

use crate::sim::{MatchConfig, OpponentAi};

/// Selectable base serve speeds, slowest to fastest
pub const BALL_SPEED_LEVELS: [f32; 6] = [6.0, 8.0, 10.0, 12.0, 14.0, 16.0];

/// Selectable normal-mode AI difficulties
pub const DIFFICULTY_LEVELS: [f32; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// User preferences, cycled through by the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Index into `BALL_SPEED_LEVELS`
    pub ball_speed_index: usize,
    /// Index into `DIFFICULTY_LEVELS`
    pub difficulty_index: usize,
    /// Boss mode: predictive opponent, faster serves
    pub boss_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_speed_index: 4,
            difficulty_index: 0,
            boss_mode: false,
        }
    }
}

impl Settings {
    /// Base serve speed for the selected tier. Out-of-range indices (e.g.
    /// from a hand-edited settings file) clamp to the fastest tier.
    pub fn ball_speed(&self) -> f32 {
        BALL_SPEED_LEVELS[self.ball_speed_index.min(BALL_SPEED_LEVELS.len() - 1)]
    }

    /// Normal-mode AI difficulty for the selected tier
    pub fn ai_difficulty(&self) -> f32 {
        DIFFICULTY_LEVELS[self.difficulty_index.min(DIFFICULTY_LEVELS.len() - 1)]
    }

    /// Cycle to the next serve speed tier, wrapping around
    pub fn cycle_ball_speed(&mut self) {
        self.ball_speed_index = (self.ball_speed_index + 1) % BALL_SPEED_LEVELS.len();
    }

    /// Cycle to the next difficulty tier, wrapping around
    pub fn cycle_difficulty(&mut self) {
        self.difficulty_index = (self.difficulty_index + 1) % DIFFICULTY_LEVELS.len();
    }

    /// Resolve tiers into the concrete match configuration the core consumes
    pub fn resolve(&self) -> MatchConfig {
        let ai = if self.boss_mode {
            OpponentAi::Boss
        } else {
            OpponentAi::Normal {
                difficulty: self.ai_difficulty(),
            }
        };
        MatchConfig {
            serve_speed: self.ball_speed(),
            ai,
            boss_mode: self.boss_mode,
            ..Default::default()
        }
    }

    /// Load settings from a JSON file, falling back to defaults if the file
    /// is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("invalid settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as JSON.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("settings saved to {}", path.display());
        Ok(())
    }
}
