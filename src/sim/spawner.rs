//! Enemy spawner
//!
//! Places a randomly sized and rotated obstacle on a horizontal ring around a
//! reference point, at most once per cooldown.

use glam::{Mat4, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use super::entity::{Entity, EntityKind, Geometry};
use crate::assets::{MeshAsset, TextureHandle};
use crate::settings::{ConfigError, SpawnerSettings};

#[derive(Debug, Clone)]
pub struct Spawner {
    /// Seconds between spawns
    pub cooldown: f64,
    /// Spawns are allowed once the clock is strictly past this
    pub next_spawn_time: f64,
    min_radius: f32,
    max_radius: f32,
    min_size: f32,
    max_size: f32,
    base_collider_radius: f32,
    mesh: MeshAsset,
    texture: TextureHandle,
    rng: Pcg32,
}

impl Spawner {
    /// Rejects a non-positive cooldown and empty or inverted ranges, which
    /// would spawn every tick or fail to sample.
    pub fn new(
        settings: &SpawnerSettings,
        seed: u64,
        mesh: MeshAsset,
        texture: TextureHandle,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            cooldown: settings.cooldown,
            next_spawn_time: f64::NEG_INFINITY,
            min_radius: settings.min_radius,
            max_radius: settings.max_radius,
            min_size: settings.min_size,
            max_size: settings.max_size,
            base_collider_radius: settings.base_collider_radius,
            mesh,
            texture,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Spawn an obstacle around `reference` if the cooldown has expired
    pub fn try_create_obstacle(&mut self, reference: Vec3, now: f64) -> Option<Entity> {
        if now <= self.next_spawn_time {
            return None;
        }
        self.next_spawn_time = now + self.cooldown;

        let rotation_angle = self.rng.random_range(0.0..TAU);
        let phi = self.rng.random_range(0.0..TAU);
        let theta = self.rng.random_range(0.0..TAU);
        let placement_angle = self.rng.random_range(0.0..TAU);
        let radius = self.rng.random_range(self.min_radius..=self.max_radius);
        let size = self.rng.random_range(self.min_size..=self.max_size);

        let axis = Vec3::new(phi.cos() * theta.sin(), phi.sin(), phi.cos() * theta.cos());
        let placement = Vec3::new(placement_angle.sin(), 0.0, placement_angle.cos());
        let position = reference + placement * radius;

        let mut geometry = Geometry::new(self.mesh.clone(), self.texture);
        geometry.transform(
            Mat4::from_scale(Vec3::splat(size)) * Mat4::from_axis_angle(axis, rotation_angle),
        );

        log::debug!(
            "Spawning obstacle at ({:.1}, {:.1}, {:.1}) size {:.2}",
            position.x,
            position.y,
            position.z,
            size
        );

        Some(Entity::new(
            EntityKind::Obstacle,
            position,
            Vec3::ZERO,
            0.0,
            self.base_collider_radius * size,
            geometry,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::cube_mesh;

    fn spawner(cooldown: f64, seed: u64) -> Spawner {
        let settings = SpawnerSettings {
            cooldown,
            ..Default::default()
        };
        Spawner::new(&settings, seed, cube_mesh(1.0), TextureHandle(2)).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let build = |settings: SpawnerSettings| {
            Spawner::new(&settings, 1, cube_mesh(1.0), TextureHandle(2))
        };
        assert!(matches!(
            build(SpawnerSettings {
                cooldown: 0.0,
                ..Default::default()
            }),
            Err(ConfigError::NotPositive {
                field: "spawner.cooldown",
                ..
            })
        ));
        assert!(matches!(
            build(SpawnerSettings {
                min_radius: 60.0,
                max_radius: 50.0,
                ..Default::default()
            }),
            Err(ConfigError::InvertedRange { .. })
        ));
        assert!(matches!(
            build(SpawnerSettings {
                min_size: 3.0,
                max_size: 1.0,
                ..Default::default()
            }),
            Err(ConfigError::InvertedRange { .. })
        ));
    }

    #[test]
    fn test_spawn_schedule() {
        let mut spawner = spawner(3.0, 1);
        let spawned: Vec<bool> = [0.0, 1.0, 3.1]
            .iter()
            .map(|&t| spawner.try_create_obstacle(Vec3::ZERO, t).is_some())
            .collect();
        assert_eq!(spawned, vec![true, false, true]);
    }

    #[test]
    fn test_deadline_is_exclusive() {
        let mut spawner = spawner(3.0, 1);
        assert!(spawner.try_create_obstacle(Vec3::ZERO, 0.0).is_some());
        assert!(spawner.try_create_obstacle(Vec3::ZERO, 3.0).is_none());
        assert!(spawner.try_create_obstacle(Vec3::ZERO, 3.0001).is_some());
    }

    #[test]
    fn test_placement_ranges() {
        let defaults = SpawnerSettings::default();
        let mut spawner = spawner(1.0, 99);
        let reference = Vec3::new(10.0, 2.0, -4.0);
        for i in 0..200 {
            let obstacle = spawner
                .try_create_obstacle(reference, i as f64 * 2.0)
                .unwrap();
            assert_eq!(obstacle.kind, EntityKind::Obstacle);
            assert_eq!(obstacle.speed, 0.0);

            let offset = obstacle.position - reference;
            // Horizontal ring only
            assert!(offset.y.abs() < 1e-6);
            let radius = offset.length();
            assert!(radius >= defaults.min_radius - 1e-3 && radius <= defaults.max_radius + 1e-3);

            let size = obstacle.collider_radius / defaults.base_collider_radius;
            assert!(size >= defaults.min_size - 1e-5 && size <= defaults.max_size + 1e-5);

            // Rotation preserves distance from the mesh origin, scale multiplies it
            let corner = 3.0f32.sqrt();
            for v in &obstacle.geometry.vertices {
                assert!((v.length() - corner * size).abs() < 1e-3 * size.max(1.0));
            }
            assert_eq!(obstacle.geometry.texture, TextureHandle(2));
        }
    }

    #[test]
    fn test_mesh_is_rotated_then_scaled() {
        let seed = 7;
        let defaults = SpawnerSettings::default();
        let cube = cube_mesh(1.0);
        let mut spawner = spawner(1.0, seed);
        // Replay the spawner's draws to rebuild each expected transform
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut turned = 0;

        for i in 0..5 {
            let obstacle = spawner
                .try_create_obstacle(Vec3::ZERO, i as f64 * 2.0)
                .unwrap();

            let angle: f32 = rng.random_range(0.0..TAU);
            let phi: f32 = rng.random_range(0.0..TAU);
            let theta: f32 = rng.random_range(0.0..TAU);
            let _placement: f32 = rng.random_range(0.0..TAU);
            let _radius: f32 = rng.random_range(defaults.min_radius..=defaults.max_radius);
            let size: f32 = rng.random_range(defaults.min_size..=defaults.max_size);
            let axis = Vec3::new(phi.cos() * theta.sin(), phi.sin(), phi.cos() * theta.cos());
            let expected =
                Mat4::from_scale(Vec3::splat(size)) * Mat4::from_axis_angle(axis, angle);

            assert_eq!(obstacle.geometry.vertices.len(), cube.vertices.len());
            for (spawned, local) in obstacle.geometry.vertices.iter().zip(&cube.vertices) {
                assert!((*spawned - expected.transform_point3(*local)).length() < 1e-3);
                // Scaling alone would keep every corner on its original ray
                if spawned.normalize().dot(local.normalize()) < 0.999 {
                    turned += 1;
                }
            }
        }
        assert!(turned > 0);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = spawner(1.0, 42);
        let mut b = spawner(1.0, 42);
        for i in 0..10 {
            let t = i as f64 * 1.5;
            assert_eq!(
                a.try_create_obstacle(Vec3::ZERO, t),
                b.try_create_obstacle(Vec3::ZERO, t)
            );
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = spawner(1.0, 1);
        let mut b = spawner(1.0, 2);
        let ea = a.try_create_obstacle(Vec3::ZERO, 0.0).unwrap();
        let eb = b.try_create_obstacle(Vec3::ZERO, 0.0).unwrap();
        assert_ne!(ea.position, eb.position);
    }
}
