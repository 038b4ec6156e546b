//! Island Pong entry point
//!
//! Headless demo driver: runs the simulation at a fixed cadence with a
//! scripted paddle sweep, logs progress, and dumps the final frame as JSON.
//! Pass a JSON config path as the first argument to override the defaults.

use std::path::Path;
use std::time::{Duration, Instant};

use island_pong::SimConfig;
use island_pong::consts::TICK_DT;
use island_pong::sim::Simulation;

/// Ten seconds of play at 60 Hz
const DEMO_TICKS: u32 = 600;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match SimConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("failed to load config {path}: {err}; using defaults");
                SimConfig::default()
            }
        },
        None => SimConfig::default(),
    };

    let mut sim = Simulation::new(&config);
    let mut frame = sim.frame();

    let mut last = Instant::now();
    let mut accumulator = 0.0_f32;
    let mut ticks = 0_u32;

    while ticks < DEMO_TICKS {
        let now = Instant::now();
        accumulator += (now - last).as_secs_f32().min(0.1);
        last = now;

        while accumulator >= TICK_DT && ticks < DEMO_TICKS {
            // Scripted input: sweep the paddle slowly across the arena
            let t = ticks as f32 * TICK_DT;
            let sweep = (t * 0.5).sin() * 0.5 + 0.5;
            sim.set_paddle_target(sweep * config.arena_width);

            frame = sim.tick();
            accumulator -= TICK_DT;
            ticks += 1;

            if ticks % 60 == 0 {
                log::info!(
                    "t={:.1}s ball=({:.1},{:.1}) paddle_x={:.1} score={}",
                    t,
                    frame.ball_pos.x,
                    frame.ball_pos.y,
                    frame.paddle_pos.x,
                    frame.score
                );
            }
        }

        std::thread::sleep(Duration::from_secs_f32(TICK_DT / 4.0));
    }

    match serde_json::to_string_pretty(&frame) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to encode final frame: {err}"),
    }
}
