//! Per-tick simulation step and the frame loop
//!
//! Each tick runs, in order: integrate motion, resolve collisions, launch a
//! snowball, spawn an enemy. The surviving collection is rebuilt rather than
//! edited in place.

use glam::Vec2;

use super::collision::{CollisionReport, detect_collisions, retain_survivors};
use super::entity::Entity;
use super::state::{SessionStats, Simulation};
use crate::platform::{Clock, InputSource};
use crate::renderer::FrameSink;

/// Input for a single tick, sampled once so every cooldown check in the tick
/// sees the same clock reading
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Monotonic time in seconds
    pub now: f64,
    /// Cursor movement since the previous tick
    pub cursor_delta: Vec2,
    /// Fire button held
    pub trigger_held: bool,
}

impl TickInput {
    pub fn sample(input: &mut impl InputSource, clock: &impl Clock) -> Self {
        Self {
            now: clock.now(),
            cursor_delta: input.cursor_delta(),
            trigger_held: input.trigger_held(),
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub collisions: CollisionReport,
    /// ID of the snowball launched this tick
    pub projectile: Option<u64>,
    /// ID of the enemy spawned this tick
    pub obstacle: Option<u64>,
}

/// Move every entity along its heading
pub fn integrate(entities: &mut [Entity], dt: f32) {
    for entity in entities.iter_mut() {
        entity.shift(dt);
    }
}

/// Integrate then resolve collisions, returning the survivors
pub fn advance_entities(mut entities: Vec<Entity>, dt: f32) -> (Vec<Entity>, CollisionReport) {
    integrate(&mut entities, dt);
    let report = detect_collisions(&entities);
    let survivors = if report.removed.is_empty() {
        entities
    } else {
        retain_survivors(entities, &report.removed)
    };
    (survivors, report)
}

/// Advance the simulation by one tick
pub fn tick(sim: &mut Simulation, input: &TickInput) -> TickOutcome {
    // Elapsed wall time; a clock that steps backwards counts as no time
    let dt = match sim.prev_time {
        Some(prev) => (input.now - prev).max(0.0) as f32,
        None => 0.0,
    };
    sim.prev_time = Some(input.now);
    sim.stats.ticks += 1;

    let entities = std::mem::take(&mut sim.entities);
    let (survivors, collisions) = advance_entities(entities, dt);
    sim.entities = survivors;
    if !collisions.removed.is_empty() {
        log::debug!(
            "{} collisions destroyed {} entities",
            collisions.pairs.len(),
            collisions.removed.len()
        );
        sim.stats.destroyed += collisions.removed.len() as u64;
    }

    sim.player.update_orientation(input.cursor_delta);
    let projectile = sim
        .player
        .try_create_projectile(input.trigger_held, input.now)
        .map(|snowball| {
            sim.stats.projectiles_fired += 1;
            sim.insert(snowball)
        });

    let reference = sim.player_position();
    let obstacle = sim
        .spawner
        .try_create_obstacle(reference, input.now)
        .map(|enemy| {
            sim.stats.obstacles_spawned += 1;
            sim.insert(enemy)
        });

    log::trace!(
        "tick {} dt={:.4} live={}",
        sim.stats.ticks,
        dt,
        sim.entities.len()
    );

    TickOutcome {
        collisions,
        projectile,
        obstacle,
    }
}

/// Run ticks until the input source asks to exit, handing each tick's frame
/// to `sink`
pub fn run(
    sim: &mut Simulation,
    input: &mut impl InputSource,
    clock: &impl Clock,
    sink: &mut impl FrameSink,
) -> SessionStats {
    sim.start(clock.now());
    log::info!("Simulation loop started");

    while !input.exit_requested() {
        let tick_input = TickInput::sample(input, clock);
        tick(sim, &tick_input);
        sink.submit(&sim.frame());
    }

    let stats = sim.stats();
    log::info!(
        "Simulation loop stopped after {} ticks ({} live entities)",
        stats.ticks,
        sim.entities().len()
    );
    stats
}
