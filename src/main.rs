//! Blitz entry point
//!
//! Loads settings and assets, then runs the tick loop. There is no window
//! backend yet, so the binary runs headless with the demo pilot at the stick
//! and a recording renderer in place of the display.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use blitz::assets::Assets;
use blitz::audio::{AudioManager, LogSink};
use blitz::platform::{DemoPilot, SystemClock};
use blitz::renderer::CommandRecorder;
use blitz::sim::GameState;
use blitz::{SetupError, Settings, TickDriver};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Blitz starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), SetupError> {
    let settings = Settings::load()?;
    let assets = Assets::load(&settings.assets)?;

    if settings.fullscreen {
        log::warn!("Fullscreen requested, but running headless");
    }

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Seed {}", seed);

    let mut state = GameState::new(seed);
    state.muted = settings.mute;

    let audio = AudioManager::new(LogSink, assets.explosion, settings.mute);
    let mut driver = TickDriver::new(
        state,
        CommandRecorder::new(),
        audio,
        DemoPilot::new(settings.demo_ticks),
        SystemClock::new(),
    );
    let summary = driver.run();

    println!(
        "Reached level {} with {} points in {} ticks ({} explosions heard)",
        summary.level,
        summary.score,
        summary.ticks,
        driver.audio().played()
    );
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
