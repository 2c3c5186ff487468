//! Round timer and surprise scheduling
//!
//! The round advances by at most one per tick. A long tick that crosses
//! several round boundaries is caught up one boundary per following tick, so
//! every surprise still fires in queue order and none is skipped.

use super::source::{IdSource, RandomSource};
use super::state::GameState;
use super::surprise::Surprise;
use crate::consts::{LAST_ROUND, ROUND_BONUS, WIN_BONUS};

/// What the scheduler did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Still inside the current round
    Unchanged,
    /// Entered a new round, firing the surprise if the queue had one
    Advanced(Option<Surprise>),
    /// Survived the last round
    Won,
}

/// Advance the round timer, firing at most one surprise
pub fn update_event(
    state: &mut GameState,
    delta_ms: f64,
    random: &mut dyn RandomSource,
    unique: &mut dyn IdSource,
) -> RoundOutcome {
    state.event.timer += delta_ms;

    let duration = state.event.round_duration.max(1.0);
    let due_round = (state.event.timer / duration).floor() as u32;
    if due_round <= state.event.round {
        return RoundOutcome::Unchanged;
    }

    state.event.round += 1;
    let round = state.event.round;

    if round > LAST_ROUND {
        state.you_win = true;
        state.game_over = true;
        state.score.current += WIN_BONUS;
        log::info!("All rounds survived! Final score: {}", state.score.current);
        return RoundOutcome::Won;
    }

    let surprise = state.event.surprises.pop_front();
    if let Some(surprise) = surprise {
        log::info!("Round {}: {}", round + 1, surprise.name());
        surprise.apply(state, random, unique);
        state.event.current_surprise = Some(surprise);
        state.score.current += ROUND_BONUS * u64::from(round);
    } else {
        log::info!("Round {}: no surprise left", round + 1);
    }

    RoundOutcome::Advanced(surprise)
}
