//! Game state and core simulation types
//!
//! Everything a renderer or input adapter needs to read lives here. The state
//! is a plain value: `advance` consumes one and hands back the next, so a
//! caller that keeps an old snapshot never sees it change.

use std::collections::VecDeque;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::Body;
use super::menu::MenuState;
use super::source::RandomSource;
use super::spawn::safe_position;
use super::surprise::{Surprise, shuffled_surprises};
use crate::consts::*;
use crate::highscores::HighScores;
use crate::settings::Settings;

/// Arena bounds; the playable area is `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// A bare circle (touch zones, test fixtures)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub pos: DVec2,
    pub radius: f64,
}

/// The player-controlled circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub pos: DVec2,
    pub radius: f64,
    /// Units per second
    pub speed: f64,
}

impl Player {
    pub fn new(pos: DVec2, radius: f64, speed: f64) -> Self {
        Self {
            id: PLAYER_ID.to_string(),
            pos,
            radius,
            speed,
        }
    }
}

/// A pursuing enemy ("Jason")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: String,
    pub pos: DVec2,
    pub radius: f64,
    /// Units per second
    pub speed: f64,
}

/// Special area behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaKind {
    /// Swallows enemies, ends the game for the player
    Hole,
    /// Doubles movement
    Slippery,
    /// Slows movement to a fifth
    Sticky,
}

/// A persistent circular hazard. Never moves or expires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecialArea {
    pub pos: DVec2,
    pub radius: f64,
    pub kind: AreaKind,
}

impl Body for Circle {
    fn pos(&self) -> DVec2 {
        self.pos
    }
    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Body for Player {
    fn pos(&self) -> DVec2 {
        self.pos
    }
    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Body for Enemy {
    fn pos(&self) -> DVec2 {
        self.pos
    }
    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Body for SpecialArea {
    fn pos(&self) -> DVec2 {
        self.pos
    }
    fn radius(&self) -> f64 {
        self.radius
    }
}

/// One movement axis key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Held direction keys, written by input adapters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Directions {
    /// Directions after applying the Controls Reversed surprise
    pub fn effective(self, reversed: bool) -> Self {
        if reversed {
            Self {
                up: self.down,
                down: self.up,
                left: self.right,
                right: self.left,
            }
        } else {
            self
        }
    }

    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Up => self.up = pressed,
            Direction::Down => self.down = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }
}

/// Round timer and surprise queue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventState {
    pub round_duration: f64,
    /// Completed rounds; the HUD shows `round + 1`
    pub round: u32,
    /// Total elapsed game time in milliseconds
    pub timer: f64,
    /// Surprises still to fire, head first
    pub surprises: VecDeque<Surprise>,
    /// Last dispatched surprise
    pub current_surprise: Option<Surprise>,
}

impl EventState {
    pub fn new(round_duration: f64, surprises: VecDeque<Surprise>) -> Self {
        Self {
            round_duration,
            round: 0,
            timer: 0.0,
            surprises,
            current_surprise: None,
        }
    }
}

/// Score plus the edge flags used for one-shot bonuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub current: u64,
    /// Player was inside a slippery/sticky area last tick
    pub enter_special_area: bool,
    /// Player was in an enemy's near-miss band last tick
    pub enter_dodge_area: bool,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub canvas: Canvas,
    pub player: Player,
    /// Live enemies in stable iteration order
    pub enemies: Vec<Enemy>,
    /// Append-only hazard list
    pub special_areas: Vec<SpecialArea>,
    pub directions: Directions,
    pub controls_reversed: bool,
    pub event: EventState,
    pub score: Score,
    pub game_over: bool,
    pub you_win: bool,
    pub menu: MenuState,
    pub high_scores: HighScores,
    /// Touch joystick zone for touch input adapters
    pub joystick: Circle,
}

impl GameState {
    /// Record a key press or release from an input adapter
    pub fn set_direction(&mut self, direction: Direction, pressed: bool) {
        self.directions.set(direction, pressed);
    }

    /// Whether the simulation is running (not frozen by a menu or the end screen)
    pub fn is_running(&self) -> bool {
        !self.game_over && self.menu.is_playing()
    }

    /// Build an enemy at a safe position away from the player
    pub(crate) fn spawn_enemy(
        &self,
        id: String,
        radius: f64,
        speed: f64,
        random: &mut dyn RandomSource,
    ) -> Enemy {
        Enemy {
            id,
            pos: safe_position(&self.canvas, self.player.pos, random),
            radius,
            speed,
        }
    }

    /// Put the final result on the leaderboard
    pub(crate) fn record_final_score(&mut self) {
        let round = self.event.round;
        if let Some(rank) = self.high_scores.add_score(self.score.current, round) {
            log::info!("New high score #{}: {} (round {})", rank, self.score.current, round + 1);
        }
    }
}

/// Create a fresh game with the default settings
pub fn create_initial_state(
    canvas_width: f64,
    canvas_height: f64,
    high_scores: HighScores,
    random: &mut impl RandomSource,
    show_main_menu: bool,
) -> GameState {
    create_initial_state_with(
        &Settings::default(),
        canvas_width,
        canvas_height,
        high_scores,
        random,
        show_main_menu,
    )
}

/// Create a fresh game from explicit settings
///
/// Random draws happen in a fixed order: two per starting enemy (x then y),
/// then the surprise shuffle.
pub fn create_initial_state_with(
    settings: &Settings,
    canvas_width: f64,
    canvas_height: f64,
    high_scores: HighScores,
    random: &mut impl RandomSource,
    show_main_menu: bool,
) -> GameState {
    let canvas = Canvas::new(canvas_width, canvas_height);
    let player = Player::new(canvas.center(), settings.player_radius, settings.player_speed);

    let enemies = (0..settings.enemy_count.min(MAX_INITIAL_ENEMIES))
        .map(|i| Enemy {
            id: format!("Jason{}", i),
            pos: safe_position(&canvas, player.pos, random),
            radius: settings.enemy_radius,
            speed: settings.enemy_speed,
        })
        .collect();

    let surprises = shuffled_surprises(random);

    let half_zone = JOYSTICK_ZONE_SIZE / 2.0;
    let joystick = Circle {
        pos: DVec2::new(
            canvas_width - half_zone - JOYSTICK_MARGIN,
            canvas_height - half_zone - JOYSTICK_MARGIN,
        ),
        radius: half_zone,
    };

    log::debug!(
        "New game {}x{} ({} enemies, {:?})",
        canvas_width,
        canvas_height,
        settings.enemy_count,
        settings.difficulty
    );

    GameState {
        canvas,
        player,
        enemies,
        special_areas: Vec::new(),
        directions: Directions::default(),
        controls_reversed: false,
        event: EventState::new(settings.round_duration_ms, surprises),
        score: Score::default(),
        game_over: false,
        you_win: false,
        menu: MenuState::new(show_main_menu),
        high_scores,
        joystick,
    }
}
