//! Merge Arena entry point
//!
//! Headless demo host: runs the simulation without a renderer, wandering
//! the player around, restarting after deaths, and persisting the best
//! score the way a real front end would.
//!
//! Usage: `merge-arena [seed] [ticks]`

use std::path::PathBuf;

use merge_arena::sim::{GameEvent, TickInput, World, tick};
use merge_arena::{BestScore, normalize_angle};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3600);

    let best_path = PathBuf::from("merge_arena_best.json");
    let mut best = BestScore::load(&best_path);
    log::info!("best score so far: {}", best.value);

    let mut world = World::new(seed, "You");
    world.start(None);

    for t in 0..ticks {
        // A slowly swinging heading stands in for pointer input
        let input = TickInput {
            player_heading: Some(normalize_angle((t as f32 * 0.002).sin() * std::f32::consts::PI)),
        };
        for event in tick(&mut world, &input) {
            match event {
                GameEvent::PlayerDied { score } => {
                    log::info!("died at tick {} with score {}", world.ticks, score);
                    if best.record(score) {
                        log::info!("new best score: {}", score);
                        if let Err(err) = best.save(&best_path) {
                            log::warn!("could not save best score: {err}");
                        }
                    }
                    world.start(None);
                }
            }
        }
        if t % 600 == 0 {
            log_leaderboard(&world);
        }
    }

    log_leaderboard(&world);
    log::info!("done after {} ticks", world.ticks);
}

/// Top bodies by head value, the way an overlay leaderboard would show them
fn log_leaderboard(world: &World) {
    let mut bodies = world.snapshot().bodies;
    bodies.sort_by(|a, b| b.head_value().cmp(&a.head_value()));
    log::info!("tick {} leaderboard:", world.ticks);
    for (rank, body) in bodies.iter().take(10).enumerate() {
        log::info!("  {}. {} - {}", rank + 1, body.name, body.head_value());
    }
}
