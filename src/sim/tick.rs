//! Per-tick simulation step
//!
//! Composes the simulation stages in a fixed order:
//! scheduler, enemy movement, merge pass, player movement, terminal
//! collisions, then the one-shot bonus edges. The winning tick still moves
//! everything but skips collisions and bonuses.

use super::collision::{is_colliding, is_dodging};
use super::event::{RoundOutcome, update_event};
use super::merge::merge_overlapping_enemies;
use super::movement::{update_enemy_positions, update_player_position};
use super::source::{IdSource, RandomSource};
use super::state::{AreaKind, GameState};
use crate::consts::{DODGE_BONUS, SPECIAL_AREA_BONUS};

/// Advance the game by `delta_ms` milliseconds
///
/// A finished game, or one sitting in a menu, is returned unchanged. Negative
/// or NaN deltas are treated as zero.
pub fn advance(
    state: GameState,
    delta_ms: f64,
    random: &mut impl RandomSource,
    unique: &mut impl IdSource,
) -> GameState {
    if !state.is_running() {
        return state;
    }

    let mut state = state;
    step(&mut state, delta_ms.max(0.0), random, unique);

    if state.game_over {
        if !state.you_win {
            log::info!(
                "Game over in round {} with {} points",
                state.event.round + 1,
                state.score.current
            );
        }
        state.record_final_score();
    }

    state
}

fn step(
    state: &mut GameState,
    delta_ms: f64,
    random: &mut dyn RandomSource,
    unique: &mut dyn IdSource,
) {
    let outcome = update_event(state, delta_ms, random, unique);

    update_enemy_positions(state, delta_ms);
    state.enemies = merge_overlapping_enemies(&state.enemies, unique);
    update_player_position(state, delta_ms);

    // A won game cannot turn into a loss on its final frame
    if outcome == RoundOutcome::Won {
        return;
    }

    if state.enemies.iter().any(|enemy| is_colliding(&state.player, enemy)) {
        state.game_over = true;
    }

    if !state.game_over {
        award_bonus_edges(state);
    }
}

/// One-shot bonuses for entering a near miss or a slippery/sticky area
fn award_bonus_edges(state: &mut GameState) {
    let player = &state.player;

    let dodging = state.enemies.iter().any(|enemy| is_dodging(player, enemy));
    if dodging && !state.score.enter_dodge_area {
        state.score.current += DODGE_BONUS;
    }

    let in_area = state
        .special_areas
        .iter()
        .any(|area| area.kind != AreaKind::Hole && is_colliding(player, area));
    if in_area && !state.score.enter_special_area {
        state.score.current += SPECIAL_AREA_BONUS;
    }

    state.score.enter_dodge_area = dodging;
    state.score.enter_special_area = in_area;
}
