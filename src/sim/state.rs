//! Simulation state
//!
//! [`Simulation`] owns the live entity collection together with the player
//! and the spawner. It is built once from validated settings and assets;
//! after that nothing in it can fail.

use glam::Vec3;
use thiserror::Error;

use super::entity::{Entity, EntityKind};
use super::player::Player;
use super::spawner::Spawner;
use crate::assets::{AssetError, AssetLoader};
use crate::renderer::{DrawCall, Frame};
use crate::settings::{ConfigError, Settings, ViewSettings};

/// Reasons the simulation cannot start
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("invalid settings: {0}")]
    Config(#[from] ConfigError),
    #[error("asset load failed: {0}")]
    Asset(#[from] AssetError),
}

/// Running totals for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub ticks: u64,
    pub projectiles_fired: u64,
    pub obstacles_spawned: u64,
    pub destroyed: u64,
}

pub struct Simulation {
    pub player: Player,
    pub spawner: Spawner,
    /// Live entities; rebuilt from the survivors every tick
    pub(crate) entities: Vec<Entity>,
    /// Clock reading of the previous tick
    pub(crate) prev_time: Option<f64>,
    pub(crate) stats: SessionStats,
    view: ViewSettings,
    /// Never reused within a session
    next_id: u64,
}

impl Simulation {
    /// Validate settings and load every asset up front
    pub fn new(settings: &Settings, assets: &dyn AssetLoader) -> Result<Self, StartupError> {
        settings.validate()?;

        let projectile_texture = assets.load_texture(&settings.projectile.texture)?;
        let obstacle_mesh = assets.load_mesh(&settings.spawner.mesh)?;
        let obstacle_texture = assets.load_texture(&settings.spawner.texture)?;

        log::info!(
            "Simulation ready: seed {}, enemy mesh {} ({} vertices)",
            settings.seed,
            settings.spawner.mesh,
            obstacle_mesh.vertices.len()
        );

        Ok(Self {
            player: Player::new(settings, projectile_texture)?,
            spawner: Spawner::new(
                &settings.spawner,
                settings.seed,
                obstacle_mesh,
                obstacle_texture,
            )?,
            entities: Vec::new(),
            prev_time: None,
            stats: SessionStats::default(),
            view: settings.view.clone(),
            next_id: 1,
        })
    }

    /// Set the time reference the first tick measures its delta from
    pub fn start(&mut self, now: f64) {
        self.prev_time = Some(now);
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind == kind).count()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    fn next_entity_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an entity, assigning it a fresh ID
    pub fn insert(&mut self, mut entity: Entity) -> u64 {
        let id = self.next_entity_id();
        entity.id = id;
        self.entities.push(entity);
        id
    }

    pub fn player_position(&self) -> Vec3 {
        self.player.position
    }

    /// Matrices and draw calls for the current entity set
    pub fn frame(&self) -> Frame<'_> {
        let camera = &self.player.camera;
        Frame {
            projection: camera.projection_matrix(
                self.view.aspect_ratio,
                self.player.collider_radius,
                self.view.far_plane,
            ),
            view: camera.view_matrix(self.player.position),
            draws: self.entities.iter().map(DrawCall::from_entity).collect(),
        }
    }
}
