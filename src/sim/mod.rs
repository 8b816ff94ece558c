//! Simulation core
//!
//! All gameplay logic lives here. This module has no window, GPU or OS
//! dependencies:
//! - Time and input arrive through [`TickInput`]
//! - Seeded RNG only
//! - Entity collection rebuilt each tick, never mutated mid-scan

pub mod camera;
pub mod collision;
pub mod entity;
pub mod geometry;
pub mod player;
pub mod spawner;
pub mod state;
pub mod tick;

pub use camera::Camera;
pub use collision::{CollisionReport, annihilates, detect_collisions, retain_survivors};
pub use entity::{Entity, EntityKind, Geometry};
pub use geometry::{SphereMesh, cube_mesh, generate_sphere};
pub use player::Player;
pub use spawner::Spawner;
pub use state::{SessionStats, Simulation, StartupError};
pub use tick::{TickInput, TickOutcome, advance_entities, integrate, run, tick};
