//! Game settings and tunables
//!
//! Loaded from JSON (or defaulted) and validated once before the simulation
//! starts. Nothing here is re-checked per tick.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A value that must be strictly positive was not
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    /// A value that must not be negative was
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    /// A value that must be finite was NaN or infinite
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },

    /// A random range with min > max
    #[error("{field} range is inverted: {min} > {max}")]
    InvertedRange {
        field: &'static str,
        min: f32,
        max: f32,
    },

    /// Sphere tessellation that would produce an empty mesh
    #[error("degenerate tessellation: {sectors} sectors x {stacks} stacks")]
    DegenerateTessellation { sectors: u32, stacks: u32 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub(crate) fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

/// Finite and >= 0
pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

fn ordered(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedRange { field, min, max });
    }
    Ok(())
}

/// Player / camera controller tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    pub position: [f32; 3],
    /// Also the near clipping plane
    pub collider_radius: f32,
    /// Radians per cursor pixel
    pub mouse_sensitivity: f32,
    /// Seconds between snowballs
    pub projectile_cooldown: f64,
    pub launch_offset: f32,
    /// Starting orientation (radians)
    pub horizontal_angle: f32,
    pub vertical_angle: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            collider_radius: PLAYER_COLLIDER_RADIUS,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            projectile_cooldown: PROJECTILE_COOLDOWN,
            launch_offset: LAUNCH_OFFSET,
            horizontal_angle: 0.0,
            vertical_angle: 0.0,
        }
    }
}

/// Snowball tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileSettings {
    pub radius: f32,
    pub speed: f32,
    pub sector_count: u32,
    pub stack_count: u32,
    pub texture: String,
}

impl Default for ProjectileSettings {
    fn default() -> Self {
        Self {
            radius: PROJECTILE_RADIUS,
            speed: PROJECTILE_SPEED,
            sector_count: PROJECTILE_SECTORS,
            stack_count: PROJECTILE_STACKS,
            texture: PROJECTILE_TEXTURE.to_string(),
        }
    }
}

/// Enemy spawner tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerSettings {
    /// Seconds between spawns
    pub cooldown: f64,
    pub min_radius: f32,
    pub max_radius: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Collider radius at size 1.0
    pub base_collider_radius: f32,
    pub mesh: String,
    pub texture: String,
}

impl Default for SpawnerSettings {
    fn default() -> Self {
        Self {
            cooldown: SPAWN_COOLDOWN,
            min_radius: SPAWN_MIN_RADIUS,
            max_radius: SPAWN_MAX_RADIUS,
            min_size: SPAWN_MIN_SIZE,
            max_size: SPAWN_MAX_SIZE,
            base_collider_radius: OBSTACLE_BASE_RADIUS,
            mesh: OBSTACLE_MESH.to_string(),
            texture: OBSTACLE_TEXTURE.to_string(),
        }
    }
}

/// Projection tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Vertical field of view in degrees
    pub field_of_view: f32,
    pub aspect_ratio: f32,
    pub far_plane: f32,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            field_of_view: FIELD_OF_VIEW,
            aspect_ratio: ASPECT_RATIO,
            far_plane: FAR_PLANE,
        }
    }
}

/// All game settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Spawner RNG seed
    pub seed: u64,
    pub player: PlayerSettings,
    pub projectile: ProjectileSettings,
    pub spawner: SpawnerSettings,
    pub view: ViewSettings,
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values that would produce empty meshes, instant spawning or
    /// unbounded growth.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.player.validate()?;
        self.projectile.validate()?;
        self.spawner.validate()?;
        self.view.validate()
    }
}

impl PlayerSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.position.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::NotFinite {
                field: "player.position",
            });
        }
        positive("player.collider_radius", self.collider_radius.into())?;
        if !self.mouse_sensitivity.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "player.mouse_sensitivity",
            });
        }
        positive("player.projectile_cooldown", self.projectile_cooldown)?;
        if !self.launch_offset.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "player.launch_offset",
            });
        }
        Ok(())
    }
}

impl ProjectileSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("projectile.radius", self.radius.into())?;
        non_negative("projectile.speed", self.speed.into())?;
        // A single stack only has pole triangles, which are skipped
        if self.sector_count < 1 || self.stack_count < 2 {
            return Err(ConfigError::DegenerateTessellation {
                sectors: self.sector_count,
                stacks: self.stack_count,
            });
        }
        Ok(())
    }
}

impl SpawnerSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("spawner.cooldown", self.cooldown)?;
        positive("spawner.min_radius", self.min_radius.into())?;
        positive("spawner.max_radius", self.max_radius.into())?;
        ordered("spawner.radius", self.min_radius, self.max_radius)?;
        positive("spawner.min_size", self.min_size.into())?;
        positive("spawner.max_size", self.max_size.into())?;
        ordered("spawner.size", self.min_size, self.max_size)?;
        positive("spawner.base_collider_radius", self.base_collider_radius.into())
    }
}

impl ViewSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("view.field_of_view", self.field_of_view.into())?;
        positive("view.aspect_ratio", self.aspect_ratio.into())?;
        positive("view.far_plane", self.far_plane.into())
    }
}
