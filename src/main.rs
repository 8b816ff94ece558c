//! Snowball Arena entry point
//!
//! Headless session: no window is opened. A scripted player sweeps the view
//! back and forth with the trigger held while enemies spawn around them.
//!
//! Usage: `snowball-arena [--realtime] [settings.json]`
//!
//! By default the session runs on a fixed 60 Hz clock as fast as possible.
//! `--realtime` reads the wall clock and sleeps between frames instead.

use std::time::Duration;

use glam::Vec2;

use snowball_arena::platform::{Clock, FixedStepClock, InputFrame, MonotonicClock, ScriptedInput};
use snowball_arena::renderer::{Frame, FrameSink, FrameStats};
use snowball_arena::sim::{EntityKind, cube_mesh, run};
use snowball_arena::{AssetLibrary, Settings, Simulation, StartupError};

/// Frame length of the scripted session (60 Hz)
const FRAME_DT: f64 = 1.0 / 60.0;
/// Scripted session length in frames
const SESSION_FRAMES: usize = 60 * 30;
/// Horizontal cursor pixels per frame while sweeping
const SWEEP_SPEED: f32 = 8.0;

/// Command line options
#[derive(Debug, Default)]
struct Options {
    realtime: bool,
    settings_path: Option<String>,
}

impl Options {
    fn from_args() -> Self {
        let mut options = Self::default();
        for arg in std::env::args().skip(1) {
            if arg == "--realtime" {
                options.realtime = true;
            } else {
                options.settings_path = Some(arg);
            }
        }
        options
    }
}

/// Counts frames and holds the loop to the wall-clock frame rate
struct PacedSink<'a> {
    clock: &'a MonotonicClock,
    next_frame: f64,
    stats: FrameStats,
}

impl FrameSink for PacedSink<'_> {
    fn submit(&mut self, frame: &Frame<'_>) {
        self.stats.submit(frame);
        self.next_frame += FRAME_DT;
        let wait = self.next_frame - self.clock.now();
        if wait > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(wait));
        }
    }
}

fn load_settings(path: Option<&str>) -> Result<Settings, StartupError> {
    match path {
        Some(path) => Ok(Settings::load(path)?),
        None => {
            let settings = Settings {
                seed: rand::random(),
                ..Default::default()
            };
            log::info!("Using default settings");
            Ok(settings)
        }
    }
}

/// Stand-ins for decoded asset files
fn build_assets(settings: &Settings) -> Result<AssetLibrary, StartupError> {
    let mut assets = AssetLibrary::new();
    assets.insert_mesh(&settings.spawner.mesh, cube_mesh(1.0))?;
    assets.insert_texture(&settings.spawner.texture);
    assets.insert_texture(&settings.projectile.texture);
    Ok(assets)
}

/// Sweep right for two seconds, then left, trigger always held
fn scripted_session() -> ScriptedInput {
    ScriptedInput::new((0..SESSION_FRAMES).map(|frame| {
        let direction = if (frame / 120) % 2 == 0 { 1.0 } else { -1.0 };
        InputFrame {
            cursor_delta: Vec2::new(direction * SWEEP_SPEED, 0.0),
            trigger_held: true,
        }
    }))
}

fn start() -> Result<(), StartupError> {
    let options = Options::from_args();
    let settings = load_settings(options.settings_path.as_deref())?;
    let assets = build_assets(&settings)?;
    let mut sim = Simulation::new(&settings, &assets)?;

    let mut input = scripted_session();
    let (stats, frames) = if options.realtime {
        log::info!("Running in real time");
        let clock = MonotonicClock::new();
        let mut sink = PacedSink {
            clock: &clock,
            next_frame: clock.now(),
            stats: FrameStats::default(),
        };
        let stats = run(&mut sim, &mut input, &clock, &mut sink);
        (stats, sink.stats)
    } else {
        let clock = FixedStepClock::new(0.0, FRAME_DT);
        let mut frames = FrameStats::default();
        let stats = run(&mut sim, &mut input, &clock, &mut frames);
        (stats, frames)
    };

    log::info!(
        "Session over: {} ticks, {} snowballs fired, {} enemies spawned, {} entities destroyed",
        stats.ticks,
        stats.projectiles_fired,
        stats.obstacles_spawned,
        stats.destroyed
    );
    log::info!(
        "Still alive: {} enemies, {} snowballs; {} draw calls submitted ({} vertices)",
        sim.count(EntityKind::Obstacle),
        sim.count(EntityKind::Projectile),
        frames.draws,
        frames.vertices
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Snowball Arena (headless) starting...");

    if let Err(e) = start() {
        log::error!("Startup failed: {e}");
        std::process::exit(1);
    }
}
