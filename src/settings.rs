//! Arena tuning and difficulty presets
//!
//! Starting stats for a new game. Fixed rules (surprise effects, scoring,
//! hazard multipliers) live in `consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Enemies on the field at the start
    pub fn enemy_count(&self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Normal => INITIAL_ENEMY_COUNT,
            Difficulty::Hard => 8,
        }
    }

    /// Starting enemy speed (units/s)
    pub fn enemy_speed(&self) -> f64 {
        match self {
            Difficulty::Easy => 50.0,
            Difficulty::Normal => ENEMY_SPEED,
            Difficulty::Hard => 70.0,
        }
    }

    /// Starting player speed (units/s)
    pub fn player_speed(&self) -> f64 {
        match self {
            Difficulty::Easy => 130.0,
            Difficulty::Normal => PLAYER_START_SPEED,
            Difficulty::Hard => 110.0,
        }
    }
}

/// New-game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,

    // === Player ===
    pub player_speed: f64,
    pub player_radius: f64,

    // === Enemies ===
    pub enemy_count: usize,
    pub enemy_speed: f64,
    pub enemy_radius: f64,

    // === Rounds ===
    /// Length of one round in milliseconds
    pub round_duration_ms: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(Difficulty::Normal)
    }
}

impl Settings {
    /// Create settings from a difficulty preset
    pub fn from_preset(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            player_speed: difficulty.player_speed(),
            player_radius: PLAYER_RADIUS,
            enemy_count: difficulty.enemy_count(),
            enemy_speed: difficulty.enemy_speed(),
            enemy_radius: ENEMY_RADIUS,
            round_duration_ms: ROUND_DURATION_MS,
        }
    }

    /// Apply a difficulty preset (updates preset-dependent settings)
    pub fn apply_preset(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.player_speed = difficulty.player_speed();
        self.enemy_count = difficulty.enemy_count();
        self.enemy_speed = difficulty.enemy_speed();
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let settings: Self = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse settings, falling back to defaults on absent or invalid input
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings ({})", settings.difficulty.as_str());
                settings
            }
            Some(Err(e)) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Keep values inside the ranges the simulation expects
    pub fn sanitized(mut self) -> Self {
        self.player_speed = self.player_speed.max(PLAYER_MIN_SPEED);
        self.player_radius = self.player_radius.max(1.0);
        self.enemy_count = self.enemy_count.min(MAX_INITIAL_ENEMIES);
        self.enemy_speed = self.enemy_speed.max(0.0);
        self.enemy_radius = self.enemy_radius.max(1.0);
        self.round_duration_ms = self.round_duration_ms.max(1.0);
        self
    }
}
