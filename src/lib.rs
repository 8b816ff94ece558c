//! Snowball Arena - a first-person snowball shooter
//!
//! Core modules:
//! - `sim`: Simulation core (motion, collisions, spawning, frame loop)
//! - `renderer`: Frame assembly for an external GPU renderer
//! - `platform`: Input and clock ports
//! - `assets`: Named mesh/texture lookup
//! - `settings`: Data-driven tunables

pub mod assets;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetError, AssetLibrary, AssetLoader, MeshAsset, TextureHandle};
pub use settings::{ConfigError, Settings};
pub use sim::{Simulation, StartupError};

/// Game configuration constants
pub mod consts {
    /// Player defaults
    pub const PLAYER_COLLIDER_RADIUS: f32 = 1.0;
    pub const MOUSE_SENSITIVITY: f32 = 0.005;
    /// Seconds between snowballs while the trigger is held
    pub const PROJECTILE_COOLDOWN: f64 = 0.2;
    /// Distance in front of the camera where a snowball appears
    pub const LAUNCH_OFFSET: f32 = 1.5;

    /// Snowball defaults
    pub const PROJECTILE_RADIUS: f32 = 0.75;
    pub const PROJECTILE_SPEED: f32 = 13.0;
    pub const PROJECTILE_SECTORS: u32 = 15;
    pub const PROJECTILE_STACKS: u32 = 15;

    /// Enemy spawner defaults
    pub const SPAWN_COOLDOWN: f64 = 3.0;
    pub const SPAWN_MIN_RADIUS: f32 = 5.0;
    pub const SPAWN_MAX_RADIUS: f32 = 50.0;
    pub const SPAWN_MIN_SIZE: f32 = 0.5;
    pub const SPAWN_MAX_SIZE: f32 = 4.0;
    /// Collider radius of an unscaled enemy cube
    pub const OBSTACLE_BASE_RADIUS: f32 = 2.0;

    /// Camera defaults
    pub const FIELD_OF_VIEW: f32 = 45.0; // degrees
    pub const ASPECT_RATIO: f32 = 4.0 / 3.0;
    pub const FAR_PLANE: f32 = 300.0;

    /// Asset names
    pub const OBSTACLE_MESH: &str = "cube.obj";
    pub const OBSTACLE_TEXTURE: &str = "enemy_texture.bmp";
    pub const PROJECTILE_TEXTURE: &str = "ice_texture.bmp";
}
