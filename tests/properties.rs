//! Property tests over whole games driven by seeded sources

use std::collections::HashSet;

use glam::DVec2;
use proptest::prelude::*;
use triskaidek_arena::HighScores;
use triskaidek_arena::consts::*;
use triskaidek_arena::sim::{
    Directions, Enemy, GameState, SeededRandom, SequentialIds, advance, create_initial_state,
    merge_overlapping_enemies,
};

/// Tick lengths from a fast frame up to several rounds at once
fn arb_delta() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 1.0f64..50.0,
        1 => 0.0f64..(4.0 * ROUND_DURATION_MS),
    ]
}

fn arb_directions() -> impl Strategy<Value = Directions> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(up, down, left, right)| {
        Directions {
            up,
            down,
            left,
            right,
        }
    })
}

fn arb_steps() -> impl Strategy<Value = Vec<(f64, Directions)>> {
    proptest::collection::vec((arb_delta(), arb_directions()), 1..120)
}

fn arb_enemies() -> impl Strategy<Value = Vec<Enemy>> {
    proptest::collection::vec((0.0f64..200.0, 0.0f64..200.0, 1.0f64..20.0), 0..30).prop_map(|discs| {
        discs
            .into_iter()
            .enumerate()
            .map(|(i, (x, y, radius))| Enemy {
                id: format!("Jason{}", i),
                pos: DVec2::new(x, y),
                radius,
                speed: ENEMY_SPEED,
            })
            .collect()
    })
}

fn in_bounds(state: &GameState) -> bool {
    let canvas = state.canvas;
    let player = &state.player;
    let player_ok = player.pos.x >= player.radius
        && player.pos.x <= canvas.width - player.radius
        && player.pos.y >= player.radius
        && player.pos.y <= canvas.height - player.radius;
    let enemies_ok = state.enemies.iter().all(|e| {
        e.pos.x >= 0.0 && e.pos.x <= canvas.width && e.pos.y >= 0.0 && e.pos.y <= canvas.height
    });
    player_ok && enemies_ok
}

fn ids_unique(state: &GameState) -> bool {
    let ids: HashSet<&str> = state.enemies.iter().map(|e| e.id.as_str()).collect();
    ids.len() == state.enemies.len()
}

proptest! {
    #[test]
    fn prop_positions_stay_in_arena(seed in any::<u64>(), steps in arb_steps()) {
        let mut random = SeededRandom::new(seed);
        let mut ids = SequentialIds::default();
        let mut state = create_initial_state(320.0, 320.0, HighScores::new(), &mut random, false);

        for (delta, directions) in steps {
            state.directions = directions;
            state = advance(state, delta, &mut random, &mut ids);
            prop_assert!(in_bounds(&state));
            prop_assert!(ids_unique(&state));
        }
    }

    #[test]
    fn prop_round_advances_at_most_one_per_tick(seed in any::<u64>(), steps in arb_steps()) {
        let mut random = SeededRandom::new(seed);
        let mut ids = SequentialIds::default();
        let mut state = create_initial_state(320.0, 320.0, HighScores::new(), &mut random, false);

        for (delta, directions) in steps {
            let before = state.event.round;
            let queued = state.event.surprises.len();
            state.directions = directions;
            state = advance(state, delta, &mut random, &mut ids);
            let after = state.event.round;
            prop_assert!(after == before || after == before + 1);
            prop_assert!(ids_unique(&state));
            if after == before {
                prop_assert_eq!(state.event.surprises.len(), queued);
            }
            prop_assert!(!state.you_win || (state.game_over && after > LAST_ROUND));
        }
    }

    #[test]
    fn prop_game_over_is_a_fixed_point(seed in any::<u64>(), steps in arb_steps(), delta in arb_delta()) {
        let mut random = SeededRandom::new(seed);
        let mut ids = SequentialIds::default();
        let mut state = create_initial_state(320.0, 320.0, HighScores::new(), &mut random, false);
        for (d, directions) in steps {
            state.directions = directions;
            state = advance(state, d, &mut random, &mut ids);
        }
        state.game_over = true;

        let mut other_random = SeededRandom::new(seed ^ 0xdead_beef);
        let frozen = advance(state.clone(), delta, &mut other_random, &mut ids);
        prop_assert_eq!(frozen, state);
    }

    #[test]
    fn prop_merge_conserves_total_radius(enemies in arb_enemies()) {
        let mut ids = SequentialIds::new(1000);
        let before: f64 = enemies.iter().map(|e| e.radius).sum();
        let merged = merge_overlapping_enemies(&enemies, &mut ids);
        let after: f64 = merged.iter().map(|e| e.radius).sum();

        prop_assert!(merged.len() <= enemies.len());
        prop_assert!((after - before).abs() < 1e-6);
    }

    #[test]
    fn prop_advance_is_reproducible(seed in any::<u64>(), steps in arb_steps()) {
        let play = || {
            let mut random = SeededRandom::new(seed);
            let mut ids = SequentialIds::default();
            let mut state = create_initial_state(320.0, 320.0, HighScores::new(), &mut random, false);
            for (delta, directions) in &steps {
                state.directions = *directions;
                state = advance(state, *delta, &mut random, &mut ids);
            }
            state
        };
        prop_assert_eq!(play(), play());
    }
}

#[test]
fn last_round_tick_wins() {
    let mut random = SeededRandom::new(1);
    let mut ids = SequentialIds::default();
    let mut state = create_initial_state(1000.0, 1000.0, HighScores::new(), &mut random, false);
    state.enemies.clear();
    state.event.round = LAST_ROUND;
    state.event.timer = LAST_ROUND as f64 * ROUND_DURATION_MS;

    let state = advance(state, ROUND_DURATION_MS, &mut random, &mut ids);
    assert!(state.you_win);
    assert!(state.game_over);
}

#[test]
fn initial_state_with_constant_random() {
    let mut random = || 0.32_f64;
    let state = create_initial_state(1000.0, 1000.0, HighScores::new(), &mut random, false);
    assert_eq!(state.player.pos, DVec2::new(500.0, 500.0));
    assert_eq!(state.enemies.len(), 5);
    assert!(
        state
            .enemies
            .iter()
            .all(|e| (e.pos - DVec2::new(320.0, 320.0)).length() < 1e-9)
    );
}
