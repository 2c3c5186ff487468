//! Round-boundary surprises
//!
//! Thirteen scripted effects, one fired at each round boundary from a queue
//! shuffled when the game is created.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::hazard::generate_special_areas;
use super::source::{IdSource, RandomSource};
use super::state::{AreaKind, GameState};
use crate::consts::*;

/// The surprise catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surprise {
    HolesAppear,
    JasonSpeedUp,
    PlayerSpeedUp,
    PlayerSlowDown,
    ControlsReversed,
    SlipperyFloor,
    StickyFloor,
    ArenaShapeChange,
    JasonsToEdges,
    SuperJasonAppears,
    FourNewJasons,
    DoubleJasons,
    OnlyBiggestJason,
}

impl Surprise {
    /// Catalog order (by id)
    pub const ALL: [Surprise; SURPRISE_COUNT] = [
        Surprise::HolesAppear,
        Surprise::JasonSpeedUp,
        Surprise::PlayerSpeedUp,
        Surprise::PlayerSlowDown,
        Surprise::ControlsReversed,
        Surprise::SlipperyFloor,
        Surprise::StickyFloor,
        Surprise::ArenaShapeChange,
        Surprise::JasonsToEdges,
        Surprise::SuperJasonAppears,
        Surprise::FourNewJasons,
        Surprise::DoubleJasons,
        Surprise::OnlyBiggestJason,
    ];

    /// Stable numeric id, 1 to 13
    pub fn id(self) -> u8 {
        match self {
            Surprise::HolesAppear => 1,
            Surprise::JasonSpeedUp => 2,
            Surprise::PlayerSpeedUp => 3,
            Surprise::PlayerSlowDown => 4,
            Surprise::ControlsReversed => 5,
            Surprise::SlipperyFloor => 6,
            Surprise::StickyFloor => 7,
            Surprise::ArenaShapeChange => 8,
            Surprise::JasonsToEdges => 9,
            Surprise::SuperJasonAppears => 10,
            Surprise::FourNewJasons => 11,
            Surprise::DoubleJasons => 12,
            Surprise::OnlyBiggestJason => 13,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.id() == id)
    }

    /// Display name for the HUD
    pub fn name(self) -> &'static str {
        match self {
            Surprise::HolesAppear => "Holes Appear",
            Surprise::JasonSpeedUp => "Jason Speed Up",
            Surprise::PlayerSpeedUp => "Player Speed Up",
            Surprise::PlayerSlowDown => "Player Slow Down",
            Surprise::ControlsReversed => "Controls Reversed",
            Surprise::SlipperyFloor => "Slippery Floor",
            Surprise::StickyFloor => "Sticky Floor",
            Surprise::ArenaShapeChange => "Arena Shape Change",
            Surprise::JasonsToEdges => "Jasons to Edges",
            Surprise::SuperJasonAppears => "Super-Jason Appears",
            Surprise::FourNewJasons => "4 New Jasons",
            Surprise::DoubleJasons => "Double Jasons",
            Surprise::OnlyBiggestJason => "Only Biggest Jason",
        }
    }

    /// Apply this surprise to the state
    pub fn apply(self, state: &mut GameState, random: &mut dyn RandomSource, unique: &mut dyn IdSource) {
        match self {
            Surprise::HolesAppear => add_areas(state, AreaKind::Hole, random),
            Surprise::JasonSpeedUp => {
                for enemy in &mut state.enemies {
                    enemy.speed += SPEED_STEP;
                }
            }
            Surprise::PlayerSpeedUp => state.player.speed += SPEED_STEP,
            Surprise::PlayerSlowDown => {
                state.player.speed = (state.player.speed - SPEED_STEP).max(PLAYER_MIN_SPEED);
            }
            Surprise::ControlsReversed => state.controls_reversed = !state.controls_reversed,
            Surprise::SlipperyFloor => add_areas(state, AreaKind::Slippery, random),
            Surprise::StickyFloor => add_areas(state, AreaKind::Sticky, random),
            Surprise::ArenaShapeChange => {
                // Arena is always the full canvas rectangle; nothing to reshape yet
                log::debug!("Arena Shape Change has no effect");
            }
            Surprise::JasonsToEdges => {
                let canvas = state.canvas;
                for enemy in &mut state.enemies {
                    enemy.pos.x = nearest_edge(enemy.pos.x, canvas.width);
                    enemy.pos.y = nearest_edge(enemy.pos.y, canvas.height);
                }
            }
            Surprise::SuperJasonAppears => {
                let id = format!("Jason{}", unique.next_id());
                let enemy = state.spawn_enemy(id, SUPER_ENEMY_RADIUS, SUPER_ENEMY_SPEED, random);
                state.enemies.push(enemy);
            }
            Surprise::FourNewJasons => spawn_batch(state, NEW_ENEMY_BATCH, random, unique),
            Surprise::DoubleJasons => {
                let count = state.enemies.len();
                spawn_batch(state, count, random, unique);
            }
            Surprise::OnlyBiggestJason => {
                let biggest = state
                    .enemies
                    .iter()
                    .reduce(|prev, cur| if prev.radius >= cur.radius { prev } else { cur })
                    .cloned();
                if let Some(biggest) = biggest {
                    state.enemies = vec![biggest];
                }
            }
        }
    }
}

/// Catalog shuffled with the injected random source (Fisher-Yates)
pub fn shuffled_surprises(random: &mut dyn RandomSource) -> VecDeque<Surprise> {
    let mut surprises = Surprise::ALL;
    for i in (1..surprises.len()).rev() {
        let j = ((random.next_f64() * (i + 1) as f64) as usize).min(i);
        surprises.swap(i, j);
    }
    surprises.into_iter().collect()
}

fn add_areas(state: &mut GameState, kind: AreaKind, random: &mut dyn RandomSource) {
    let areas = generate_special_areas(AREAS_PER_SURPRISE, kind, state, random);
    state.special_areas.extend(areas);
}

/// Snap a coordinate to 0 or `max`, whichever is closer (ties go to `max`)
fn nearest_edge(value: f64, max: f64) -> f64 {
    if value < max - value { 0.0 } else { max }
}

/// Spawn `count` regular enemies with consecutive ids reserved in one go
fn spawn_batch(
    state: &mut GameState,
    count: usize,
    random: &mut dyn RandomSource,
    unique: &mut dyn IdSource,
) {
    let base = unique.reserve(count as u64);
    let spawned: Vec<_> = (0..count as u64)
        .map(|i| {
            let id = format!("Jason{}", base.wrapping_add(i));
            state.spawn_enemy(id, ENEMY_RADIUS, ENEMY_SPEED, random)
        })
        .collect();
    state.enemies.extend(spawned);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HighScores;
    use crate::sim::state::{Enemy, create_initial_state};
    use glam::DVec2;

    fn arena(width: f64, player: DVec2, enemies: Vec<Enemy>) -> GameState {
        let mut random = || 0.0_f64;
        let mut state = create_initial_state(width, width, HighScores::new(), &mut random, false);
        state.player.pos = player;
        state.enemies = enemies;
        state
    }

    fn enemy(id: &str, x: f64, y: f64, radius: f64) -> Enemy {
        Enemy {
            id: id.to_string(),
            pos: DVec2::new(x, y),
            radius,
            speed: 100.0,
        }
    }

    fn fire(state: &mut GameState, surprise: Surprise, random_value: f64) {
        let mut random = move || random_value;
        let mut unique = || 42_u64;
        surprise.apply(state, &mut random, &mut unique);
    }

    #[test]
    fn test_ids_round_trip_catalog() {
        for (i, surprise) in Surprise::ALL.iter().enumerate() {
            assert_eq!(surprise.id() as usize, i + 1);
            assert_eq!(Surprise::from_id(surprise.id()), Some(*surprise));
        }
        assert_eq!(Surprise::from_id(0), None);
        assert_eq!(Surprise::from_id(14), None);
        assert_eq!(Surprise::SuperJasonAppears.name(), "Super-Jason Appears");
    }

    #[test]
    fn test_shuffle_with_constant_source() {
        // random() == 0 always swaps with index 0
        let mut random = || 0.0_f64;
        let queue = shuffled_surprises(&mut random);
        assert_eq!(queue.len(), SURPRISE_COUNT);
        assert_eq!(queue.front(), Some(&Surprise::JasonSpeedUp));
        assert_eq!(queue.back(), Some(&Surprise::HolesAppear));
    }

    #[test]
    fn test_speed_surprises() {
        let mut state = arena(100.0, DVec2::new(50.0, 50.0), vec![enemy("Jason0", 0.0, 0.0, 5.0)]);
        fire(&mut state, Surprise::JasonSpeedUp, 0.42);
        assert_eq!(state.enemies[0].speed, 110.0);

        fire(&mut state, Surprise::PlayerSpeedUp, 0.42);
        assert_eq!(state.player.speed, 130.0);

        state.player.speed = 45.0;
        fire(&mut state, Surprise::PlayerSlowDown, 0.42);
        assert_eq!(state.player.speed, PLAYER_MIN_SPEED);
    }

    #[test]
    fn test_controls_reversed_toggles() {
        let mut state = arena(100.0, DVec2::new(50.0, 50.0), Vec::new());
        fire(&mut state, Surprise::ControlsReversed, 0.42);
        assert!(state.controls_reversed);
        fire(&mut state, Surprise::ControlsReversed, 0.42);
        assert!(!state.controls_reversed);
    }

    #[test]
    fn test_holes_appear_away_from_player() {
        let mut state = arena(1000.0, DVec2::new(500.0, 500.0), Vec::new());
        fire(&mut state, Surprise::HolesAppear, 0.5);
        assert_eq!(state.special_areas.len(), 3);
        for area in &state.special_areas {
            assert_eq!(area.pos, DVec2::new(600.0, 600.0));
            assert_eq!(area.radius, 20.0);
            assert_eq!(area.kind, AreaKind::Hole);
        }
    }

    #[test]
    fn test_sticky_and_slippery_floors_append() {
        let mut state = arena(1000.0, DVec2::new(500.0, 500.0), Vec::new());
        fire(&mut state, Surprise::SlipperyFloor, 0.4);
        fire(&mut state, Surprise::StickyFloor, 0.4);
        let kinds: Vec<AreaKind> = state.special_areas.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                AreaKind::Slippery,
                AreaKind::Slippery,
                AreaKind::Slippery,
                AreaKind::Sticky,
                AreaKind::Sticky,
                AreaKind::Sticky,
            ]
        );
    }

    #[test]
    fn test_arena_shape_change_is_inert() {
        let mut state = arena(100.0, DVec2::new(50.0, 50.0), vec![enemy("Jason0", 0.0, 0.0, 5.0)]);
        let before = state.clone();
        fire(&mut state, Surprise::ArenaShapeChange, 0.42);
        assert_eq!(state, before);
    }

    #[test]
    fn test_jasons_to_edges() {
        let mut state = arena(
            100.0,
            DVec2::new(50.0, 50.0),
            vec![enemy("Jason0", 10.0, 70.0, 5.0), enemy("Jason1", 60.0, 40.0, 5.0)],
        );
        fire(&mut state, Surprise::JasonsToEdges, 0.42);
        assert_eq!(state.enemies[0].pos, DVec2::new(0.0, 100.0));
        assert_eq!(state.enemies[1].pos, DVec2::new(100.0, 0.0));
    }

    #[test]
    fn test_super_jason_appears() {
        let mut state = arena(100.0, DVec2::new(50.0, 50.0), Vec::new());
        fire(&mut state, Surprise::SuperJasonAppears, 0.42);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].id, "Jason42");
        assert_eq!(state.enemies[0].radius, SUPER_ENEMY_RADIUS);
        assert_eq!(state.enemies[0].speed, SUPER_ENEMY_SPEED);
        assert_eq!(state.enemies[0].pos, DVec2::ZERO);
    }

    #[test]
    fn test_four_new_jasons_have_consecutive_ids() {
        let mut state = arena(100.0, DVec2::new(50.0, 50.0), Vec::new());
        fire(&mut state, Surprise::FourNewJasons, 0.42);
        let ids: Vec<&str> = state.enemies.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["Jason42", "Jason43", "Jason44", "Jason45"]);
        assert!(state.enemies.iter().all(|e| e.radius == ENEMY_RADIUS && e.speed == ENEMY_SPEED));
    }

    #[test]
    fn test_spawned_ids_never_repeat_live_ones() {
        let mut random = || 0.42_f64;
        let mut ids = crate::sim::source::SequentialIds::default();
        let mut state = create_initial_state(1000.0, 1000.0, HighScores::new(), &mut random, false);

        Surprise::FourNewJasons.apply(&mut state, &mut random, &mut ids);
        Surprise::SuperJasonAppears.apply(&mut state, &mut random, &mut ids);
        Surprise::DoubleJasons.apply(&mut state, &mut random, &mut ids);

        assert_eq!(state.enemies.len(), 20);
        let unique: std::collections::HashSet<&str> =
            state.enemies.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(unique.len(), state.enemies.len());
    }

    #[test]
    fn test_double_jasons() {
        let mut state = arena(
            100.0,
            DVec2::new(50.0, 50.0),
            vec![enemy("Jason0", 0.0, 0.0, 5.0), enemy("Jason1", 100.0, 0.0, 5.0)],
        );
        fire(&mut state, Surprise::DoubleJasons, 0.42);
        assert_eq!(state.enemies.len(), 4);
        assert_eq!(state.enemies[2].id, "Jason42");
        assert_eq!(state.enemies[3].id, "Jason43");
    }

    #[test]
    fn test_only_biggest_jason() {
        let mut state = arena(
            100.0,
            DVec2::new(50.0, 50.0),
            vec![
                enemy("Jason0", 0.0, 0.0, 5.0),
                enemy("Jason1", 100.0, 100.0, 20.0),
                enemy("Jason2", 100.0, 0.0, 5.0),
                enemy("Jason3", 0.0, 100.0, 5.0),
            ],
        );
        fire(&mut state, Surprise::OnlyBiggestJason, 0.42);
        assert_eq!(state.enemies, vec![enemy("Jason1", 100.0, 100.0, 20.0)]);
    }

    #[test]
    fn test_only_biggest_jason_tie_keeps_first() {
        let mut state = arena(
            100.0,
            DVec2::new(50.0, 50.0),
            vec![enemy("Jason0", 0.0, 0.0, 5.0), enemy("Jason1", 100.0, 100.0, 5.0)],
        );
        fire(&mut state, Surprise::OnlyBiggestJason, 0.42);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].id, "Jason0");
    }

    #[test]
    fn test_only_biggest_jason_without_enemies() {
        let mut state = arena(100.0, DVec2::new(50.0, 50.0), Vec::new());
        fire(&mut state, Surprise::OnlyBiggestJason, 0.42);
        assert!(state.enemies.is_empty());
    }
}
