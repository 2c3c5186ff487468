//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied elapsed time only
//! - Injected random and id sources only
//! - Stable iteration order (enemy array order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod event;
pub mod hazard;
pub mod menu;
pub mod merge;
pub mod movement;
pub mod source;
pub mod spawn;
pub mod state;
pub mod surprise;
pub mod tick;

pub use collision::{Body, is_colliding, is_dodging};
pub use event::{RoundOutcome, update_event};
pub use hazard::{find_special_area, generate_special_areas};
pub use menu::{MenuKey, MenuOption, MenuState, Screen, navigate, validate};
pub use merge::merge_overlapping_enemies;
pub use source::{IdSource, RandomSource, SeededRandom, SequentialIds};
pub use spawn::safe_position;
pub use state::{
    AreaKind, Canvas, Direction, Directions, Enemy, EventState, GameState, Player, Score,
    SpecialArea, create_initial_state, create_initial_state_with,
};
pub use surprise::Surprise;
pub use tick::advance;
