//! Triskaidek Arena - survive 13 rounds of pursuing Jasons
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, hazards, merging, surprises, game state)
//! - `highscores`: In-memory leaderboard carried through the game state
//! - `settings`: Data-driven arena tuning and difficulty presets

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::{Difficulty, Settings};
pub use sim::{GameState, advance, create_initial_state, create_initial_state_with};

/// Game configuration constants
pub mod consts {
    /// Length of one round in milliseconds
    pub const ROUND_DURATION_MS: f64 = 13_000.0;
    /// Last playable round index; surviving past it wins the game
    pub const LAST_ROUND: u32 = 12;
    /// One surprise per round boundary
    pub const SURPRISE_COUNT: usize = 13;

    /// Player defaults
    pub const PLAYER_ID: &str = "Player0";
    pub const PLAYER_RADIUS: f64 = 5.0;
    pub const PLAYER_START_SPEED: f64 = 120.0;
    /// Player Slow Down never goes below this
    pub const PLAYER_MIN_SPEED: f64 = 40.0;

    /// Enemy defaults
    pub const INITIAL_ENEMY_COUNT: usize = 5;
    /// Upper bound on starting enemies (`Jason0` .. `Jason999`)
    pub const MAX_INITIAL_ENEMIES: usize = 1000;
    /// First id `SequentialIds` hands out by default
    pub const FIRST_SPAWNED_ID: u64 = MAX_INITIAL_ENEMIES as u64;
    pub const ENEMY_RADIUS: f64 = 5.0;
    pub const ENEMY_SPEED: f64 = 60.0;
    pub const SUPER_ENEMY_RADIUS: f64 = 15.0;
    pub const SUPER_ENEMY_SPEED: f64 = 90.0;
    /// Enemies spawned by "4 New Jasons"
    pub const NEW_ENEMY_BATCH: usize = 4;

    /// Spawns are pushed at least this far from the player on each axis
    pub const SAFE_DISTANCE: f64 = 100.0;
    /// Width of the near-miss band outside the collision boundary
    pub const DODGE_MARGIN: f64 = 5.0;

    /// Speed change applied by the speed surprises
    pub const SPEED_STEP: f64 = 10.0;
    /// Speed gained per absorbed enemy when merging
    pub const MERGE_SPEED_BONUS: f64 = 10.0;

    /// Special area movement multipliers
    pub const SLIPPERY_MULTIPLIER: f64 = 2.0;
    pub const STICKY_MULTIPLIER: f64 = 0.2;
    /// Special areas per hazard surprise
    pub const AREAS_PER_SURPRISE: usize = 3;
    pub const AREA_MIN_RADIUS: f64 = 10.0;
    pub const AREA_RADIUS_SPREAD: f64 = 20.0;

    /// Scoring
    pub const ROUND_BONUS: u64 = 100;
    pub const WIN_BONUS: u64 = 1000;
    /// Points for a hole swallowing an enemy of `ENEMY_RADIUS`, scaled by radius
    pub const HOLE_BONUS: f64 = 100.0;
    pub const DODGE_BONUS: u64 = 13;
    pub const SPECIAL_AREA_BONUS: u64 = 13;

    /// Touch joystick zone in the bottom-right corner
    pub const JOYSTICK_ZONE_SIZE: f64 = 100.0;
    pub const JOYSTICK_MARGIN: f64 = 20.0;
}

/// Clamp `value` into `[min, max]`, favouring `max` when the range is inverted
///
/// Unlike `f64::clamp` this never panics, so an arena smaller than an entity
/// still yields a defined position.
#[inline]
pub fn clamp_range(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
