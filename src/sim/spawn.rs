//! Spawn placement away from the player

use glam::DVec2;

use super::source::RandomSource;
use super::state::Canvas;
use crate::clamp_range;
use crate::consts::SAFE_DISTANCE;

/// Draw a uniform position in the arena, pushed away from the player
///
/// Each axis is handled independently: a coordinate within `SAFE_DISTANCE`
/// of the player's is moved to exactly `SAFE_DISTANCE` on the same side
/// (a coordinate equal to the player's goes to the positive side), then
/// clamped to the arena.
pub fn safe_position(canvas: &Canvas, player: DVec2, random: &mut dyn RandomSource) -> DVec2 {
    let x = random.next_f64() * canvas.width;
    let y = random.next_f64() * canvas.height;

    DVec2::new(
        push_away(x, player.x, canvas.width),
        push_away(y, player.y, canvas.height),
    )
}

fn push_away(value: f64, player: f64, max: f64) -> f64 {
    let delta = value - player;
    if delta.abs() >= SAFE_DISTANCE {
        return value;
    }
    let delta = if delta == 0.0 { 1.0 } else { delta };
    clamp_range(player + delta.abs() * (SAFE_DISTANCE / delta), 0.0, max)
}
