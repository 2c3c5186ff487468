//! Player and enemy movement integration
//!
//! Both steps consult the special areas the entity overlaps *before* moving.

use super::hazard::{AreaEffect, area_effect};
use super::state::GameState;
use crate::clamp_range;
use crate::consts::{ENEMY_RADIUS, HOLE_BONUS};

/// Move every enemy straight toward the player's current position
///
/// Enemies standing in a hole are removed and award points in proportion to
/// their radius. An enemy exactly on the player has no defined heading and
/// stays put for the tick.
pub fn update_enemy_positions(state: &mut GameState, delta_ms: f64) {
    let target = state.player.pos;
    let canvas = state.canvas;
    let areas = &state.special_areas;
    let mut swallowed_points = 0.0;

    state.enemies.retain_mut(|enemy| {
        let multiplier = match area_effect(areas, &*enemy) {
            AreaEffect::Swallow => {
                log::debug!("{} fell into a hole", enemy.id);
                swallowed_points += HOLE_BONUS * enemy.radius / ENEMY_RADIUS;
                return false;
            }
            AreaEffect::Scale(factor) => factor,
        };

        let to_player = target - enemy.pos;
        let distance = to_player.length();
        if distance > 0.0 {
            let step = enemy.speed * (delta_ms / 1000.0) * multiplier;
            enemy.pos += to_player * (step / distance);
        }

        enemy.pos.x = clamp_range(enemy.pos.x, 0.0, canvas.width);
        enemy.pos.y = clamp_range(enemy.pos.y, 0.0, canvas.height);
        true
    });

    state.score.current += swallowed_points.round() as u64;
}

/// Move the player along each held axis, honouring reversed controls
///
/// Left wins over right and up over down when both are held. Each axis moves
/// the full step, so diagonals are not normalised. A player starting the tick
/// in a hole does not move and the game ends.
pub fn update_player_position(state: &mut GameState, delta_ms: f64) {
    let multiplier = match area_effect(&state.special_areas, &state.player) {
        AreaEffect::Swallow => {
            log::info!("Player fell into a hole");
            state.game_over = true;
            return;
        }
        AreaEffect::Scale(factor) => factor,
    };

    let directions = state.directions.effective(state.controls_reversed);
    let player = &mut state.player;
    let step = player.speed * (delta_ms / 1000.0) * multiplier;

    let mut x = player.pos.x;
    if directions.left {
        x -= step;
    } else if directions.right {
        x += step;
    }

    let mut y = player.pos.y;
    if directions.up {
        y -= step;
    } else if directions.down {
        y += step;
    }

    player.pos.x = clamp_range(x, player.radius, state.canvas.width - player.radius);
    player.pos.y = clamp_range(y, player.radius, state.canvas.height - player.radius);
}
