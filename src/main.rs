//! Triskaidek Arena headless runner
//!
//! Plays one seeded game with a scripted evasive pilot at a fixed timestep
//! and logs how it went. Usage: `triskaidek-arena [seed] [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
use triskaidek_arena::sim::{Direction, GameState, SeededRandom, SequentialIds};
#[cfg(not(target_arch = "wasm32"))]
use triskaidek_arena::{HighScores, Settings, advance, create_initial_state_with};

/// Fixed simulation timestep (60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const SIM_DT_MS: f64 = 1000.0 / 60.0;
/// Square arena edge length
#[cfg(not(target_arch = "wasm32"))]
const ARENA_SIZE: f64 = 320.0;
/// Games played back to back
#[cfg(not(target_arch = "wasm32"))]
const GAMES: u32 = 3;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(13);
    let settings_json = args.next().and_then(|path| match std::fs::read_to_string(&path) {
        Ok(json) => Some(json),
        Err(e) => {
            log::warn!("Could not read {}: {}", path, e);
            None
        }
    });
    let settings = Settings::load_or_default(settings_json.as_deref());

    log::info!("Triskaidek Arena (headless) starting with seed {}", seed);

    let mut random = SeededRandom::new(seed);
    let mut ids = SequentialIds::default();
    let mut high_scores = HighScores::new();

    for game in 1..=GAMES {
        let mut state =
            create_initial_state_with(&settings, ARENA_SIZE, ARENA_SIZE, high_scores, &mut random, false);

        let max_ticks = ((triskaidek_arena::consts::LAST_ROUND + 2) as f64
            * settings.round_duration_ms
            / SIM_DT_MS) as u64;
        let mut ticks = 0;
        while !state.game_over && ticks < max_ticks {
            steer(&mut state);
            state = advance(state, SIM_DT_MS, &mut random, &mut ids);
            ticks += 1;
        }

        println!(
            "Game {}: {} after round {} with {} points ({} enemies, {} areas)",
            game,
            if state.you_win { "WIN" } else { "LOSS" },
            state.event.round + 1,
            state.score.current,
            state.enemies.len(),
            state.special_areas.len()
        );
        high_scores = state.high_scores;
    }

    if let Some(best) = high_scores.top_score() {
        println!("Best score: {}", best);
    }

    match serde_json::to_string_pretty(&high_scores) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize high scores: {}", e),
    }
}

/// Flee from the nearest enemy, sliding along walls instead of pinning on them
#[cfg(not(target_arch = "wasm32"))]
fn steer(state: &mut GameState) {
    let player = state.player.pos;
    let Some(nearest) = state
        .enemies
        .iter()
        .map(|e| e.pos)
        .min_by(|a, b| {
            a.distance_squared(player)
                .partial_cmp(&b.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    else {
        return;
    };

    let mut away = player - nearest;
    let margin = state.player.radius * 4.0;
    let center = state.canvas.center();
    if player.x < margin || player.x > state.canvas.width - margin {
        away.x = center.x - player.x;
    }
    if player.y < margin || player.y > state.canvas.height - margin {
        away.y = center.y - player.y;
    }

    // The pilot knows when controls are reversed
    let flip = if state.controls_reversed { -1.0 } else { 1.0 };
    let away = away * flip;
    state.set_direction(Direction::Left, away.x < 0.0);
    state.set_direction(Direction::Right, away.x > 0.0);
    state.set_direction(Direction::Up, away.y < 0.0);
    state.set_direction(Direction::Down, away.y > 0.0);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives the simulation through the library
}
