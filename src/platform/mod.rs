//! Platform abstraction layer
//!
//! The simulation never touches a window. It reads input and time through
//! these ports:
//! - [`InputSource`]: cursor deltas, trigger and exit state
//! - [`Clock`]: monotonic seconds
//!
//! Scripted input and a fixed-step clock drive headless runs and tests;
//! [`MonotonicClock`] paces real-time runs.

use std::cell::Cell;
use std::collections::VecDeque;
use std::time::Instant;

use glam::Vec2;

/// Per-frame input as seen by the simulation
pub trait InputSource {
    /// Cursor movement since the previous call (consumes it)
    fn cursor_delta(&mut self) -> Vec2;
    /// Whether the fire button is currently down
    fn trigger_held(&self) -> bool;
    /// Window close or exit key; checked between ticks
    fn exit_requested(&self) -> bool;
}

/// Monotonic time source in seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock measured from construction
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Clock that advances by a fixed step each time it is read
#[derive(Debug)]
pub struct FixedStepClock {
    time: Cell<f64>,
    step: f64,
}

impl FixedStepClock {
    pub fn new(start: f64, step: f64) -> Self {
        Self {
            time: Cell::new(start),
            step,
        }
    }
}

impl Clock for FixedStepClock {
    fn now(&self) -> f64 {
        let now = self.time.get();
        self.time.set(now + self.step);
        now
    }
}

/// One frame of recorded input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    pub cursor_delta: Vec2,
    pub trigger_held: bool,
}

/// Replays a queue of input frames, one per tick, then requests exit
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
    current: Option<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            current: None,
        }
    }
}

impl InputSource for ScriptedInput {
    fn cursor_delta(&mut self) -> Vec2 {
        // The cursor query is the first thing read each tick, so it advances
        // the script
        self.current = self.frames.pop_front();
        self.current.map(|f| f.cursor_delta).unwrap_or(Vec2::ZERO)
    }

    fn trigger_held(&self) -> bool {
        self.current.is_some_and(|f| f.trigger_held)
    }

    fn exit_requested(&self) -> bool {
        self.frames.is_empty()
    }
}
