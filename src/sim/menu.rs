//! Menu navigation sub-state
//!
//! The simulation is frozen whenever a menu screen is showing. Navigation is
//! expressed as pure state transforms so input adapters only translate keys.

use serde::{Deserialize, Serialize};

use super::source::RandomSource;
use super::state::{GameState, create_initial_state};

/// Credits screen lines
pub const CREDITS: [&str; 4] = [
    "TRISKAIDEK ARENA",
    "A MicroGame by Maeevick",
    "Made for JS13K 2024",
    "13 rounds, 13 surprises",
];

/// Which screen is up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    MainMenu,
    HighScores,
    Credits,
    /// In game (including the end-of-game overlay)
    Playing,
}

/// Main menu entries, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuOption {
    Start,
    HighScores,
    Credits,
}

impl MenuOption {
    pub const ALL: [MenuOption; 3] = [MenuOption::Start, MenuOption::HighScores, MenuOption::Credits];

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Start => "START",
            MenuOption::HighScores => "HIGH SCORES",
            MenuOption::Credits => "CREDITS",
        }
    }

    fn next(self) -> Self {
        match self {
            MenuOption::Start => MenuOption::HighScores,
            MenuOption::HighScores => MenuOption::Credits,
            MenuOption::Credits => MenuOption::Start,
        }
    }

    fn previous(self) -> Self {
        match self {
            MenuOption::Start => MenuOption::Credits,
            MenuOption::HighScores => MenuOption::Start,
            MenuOption::Credits => MenuOption::HighScores,
        }
    }
}

/// Menu keys an adapter can forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    pub screen: Screen,
    pub selected: MenuOption,
}

impl MenuState {
    pub fn new(show_main_menu: bool) -> Self {
        Self {
            screen: if show_main_menu {
                Screen::MainMenu
            } else {
                Screen::Playing
            },
            selected: MenuOption::Start,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.screen == Screen::Playing
    }
}

/// Move the main menu cursor (wrapping). Ignored outside the main menu.
pub fn navigate(mut state: GameState, key: MenuKey) -> GameState {
    if state.menu.screen == Screen::MainMenu {
        state.menu.selected = match key {
            MenuKey::Up => state.menu.selected.previous(),
            MenuKey::Down => state.menu.selected.next(),
        };
    }
    state
}

/// Confirm (Enter)
///
/// - main menu: open the selected entry; START un-freezes the game
/// - high scores / credits, or a won game: back to a fresh main menu
/// - a lost game: restart immediately, keeping the leaderboard
/// - a running game: no effect
pub fn validate(mut state: GameState, random: &mut impl RandomSource) -> GameState {
    match state.menu.screen {
        Screen::MainMenu => {
            state.menu.screen = match state.menu.selected {
                MenuOption::Start => Screen::Playing,
                MenuOption::HighScores => Screen::HighScores,
                MenuOption::Credits => Screen::Credits,
            };
            state
        }
        Screen::HighScores | Screen::Credits => {
            state.menu.screen = Screen::MainMenu;
            state
        }
        Screen::Playing if state.you_win => restart(state, random, true),
        Screen::Playing if state.game_over => restart(state, random, false),
        Screen::Playing => state,
    }
}

fn restart(state: GameState, random: &mut impl RandomSource, show_main_menu: bool) -> GameState {
    log::info!("Restarting game");
    create_initial_state(
        state.canvas.width,
        state.canvas.height,
        state.high_scores,
        random,
        show_main_menu,
    )
}
