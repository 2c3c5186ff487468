//! Special areas: holes, slippery and sticky floors
//!
//! Areas are looked up with a linear first-match scan. Only the first area
//! overlapping an entity affects it in a given tick; overlapping areas never
//! combine.

use super::collision::{Body, is_colliding};
use super::source::RandomSource;
use super::spawn::safe_position;
use super::state::{AreaKind, GameState, SpecialArea};
use crate::consts::*;

/// How a special area affects something standing in it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaEffect {
    /// Swallowed: enemies vanish, the player loses
    Swallow,
    /// Movement scaled by the factor
    Scale(f64),
}

impl AreaKind {
    pub fn effect(self) -> AreaEffect {
        match self {
            AreaKind::Hole => AreaEffect::Swallow,
            AreaKind::Slippery => AreaEffect::Scale(SLIPPERY_MULTIPLIER),
            AreaKind::Sticky => AreaEffect::Scale(STICKY_MULTIPLIER),
        }
    }
}

/// First special area overlapping `body`, in creation order
pub fn find_special_area<'a>(areas: &'a [SpecialArea], body: &impl Body) -> Option<&'a SpecialArea> {
    areas.iter().find(|area| is_colliding(*area, body))
}

/// Effect of the first area overlapping `body`, or plain movement
pub fn area_effect(areas: &[SpecialArea], body: &impl Body) -> AreaEffect {
    find_special_area(areas, body)
        .map(|area| area.kind.effect())
        .unwrap_or(AreaEffect::Scale(1.0))
}

/// Create `count` areas of `kind` at safe positions around the player
pub fn generate_special_areas(
    count: usize,
    kind: AreaKind,
    state: &GameState,
    random: &mut dyn RandomSource,
) -> Vec<SpecialArea> {
    (0..count)
        .map(|_| {
            let pos = safe_position(&state.canvas, state.player.pos, random);
            let radius = random.next_f64() * AREA_RADIUS_SPREAD + AREA_MIN_RADIUS;
            SpecialArea { pos, radius, kind }
        })
        .collect()
}
