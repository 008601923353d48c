//! Headless demo driver
//!
//! Runs a scripted session at a fixed frame rate with the pointer wandering
//! a slow Lissajous path, logging progress and dumping the final snapshot as
//! JSON. Useful for balance tuning and soak-testing without a frontend.

use orbivore::Session;

const DT_MS: f32 = 16.0;
const FRAMES: u32 = 3600; // about a minute of play

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    log::info!("orbivore headless demo, seed {seed}");

    let mut session = Session::new(seed);
    session.resize(640.0, 480.0);

    for frame in 0..FRAMES {
        let t = frame as f32 * DT_MS / 1000.0;
        session.set_target_position(
            0.5 + 0.25 * (t * 0.6).sin(),
            0.5 + 0.25 * (t * 0.4).cos(),
        );
        let snapshot = session.advance(DT_MS);

        if frame % 600 == 0 {
            log::info!(
                "t={:>5.1}s score={:>8.1} radius={:>7.2} scale={:.4} entities={}",
                t,
                snapshot.score,
                snapshot.player.radius,
                snapshot.scale,
                snapshot.entities.len()
            );
        }
        if session.is_game_over() {
            log::info!(
                "eliminated at t={:.1}s with score {:.1}",
                t,
                session.current_score()
            );
            break;
        }
    }

    match serde_json::to_string_pretty(&session.snapshot().player) {
        Ok(json) => println!("{json}"),
        Err(err) => log::warn!("snapshot dump failed: {err}"),
    }
}
