//! Frog Crossing headless driver
//!
//! Runs a demo round with the autopilot at the fixed tick and reports the
//! result. Usage: `frog-crossing [config.json] [--realtime]`

use std::time::Duration;

use frog_crossing::GameConfig;
use frog_crossing::render::{hud_lines, sprites};
use frog_crossing::sim::{GameEvent, Round, TickInput, tick};

/// Stop after this many simulated seconds even if frogs remain
const MAX_SECONDS: u64 = 10 * 60;

fn main() {
    env_logger::init();

    let mut config_path = None;
    let mut realtime = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--realtime" => realtime = true,
            _ => config_path = Some(arg),
        }
    }

    let config = match config_path {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };
    log::debug!("Config: {}", config.to_json());
    let (width, height) = config.world_size();
    log::info!(
        "Playfield {width}x{height} world units, {:?} collision",
        config.collision
    );
    let frame = Duration::from_secs(1) / config.ticks_per_second;
    let max_ticks = MAX_SECONDS * u64::from(config.ticks_per_second);

    let mut round = Round::new(config.clone());
    log::info!(
        "Frog Crossing (demo) starting: seed {} lanes {} frogs {}",
        round.seed(),
        round.lanes.len(),
        round.lives
    );

    let demo = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    // Quit once the round ends or the tick cap is hit
    while !round.is_game_over() && round.tick_count < max_ticks {
        tick(&mut round, &demo);

        for event in &round.events {
            match event {
                GameEvent::Squashed => log::info!("Squashed, {} frogs left", round.lives),
                GameEvent::ReachedGoal => log::info!("Home! score {}", round.score),
                other => log::debug!("{other:?} at tick {}", round.tick_count),
            }
        }

        if realtime {
            std::thread::sleep(frame);
        }
    }

    let snapshot = round.snapshot();
    log::debug!("Final draw list: {} sprites", sprites(&snapshot, &config).len());

    for line in hud_lines(&snapshot) {
        println!("{line}");
    }
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}
