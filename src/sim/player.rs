//! The player: view orientation plus a cooldown-gated snowball launcher

use glam::{Vec2, Vec3};

use super::camera::Camera;
use super::entity::{Entity, EntityKind, Geometry};
use super::geometry::generate_sphere;
use crate::assets::TextureHandle;
use crate::settings::{ConfigError, Settings};

/// Snowball parameters shared by every launch
#[derive(Debug, Clone)]
struct ProjectileTemplate {
    radius: f32,
    speed: f32,
    /// Sphere mesh around the local origin, built once
    geometry: Geometry,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec3,
    /// Also used as the near clipping plane
    pub collider_radius: f32,
    pub camera: Camera,
    pub mouse_sensitivity: f32,
    /// Seconds between launches
    pub projectile_cooldown: f64,
    /// Launches are allowed once the clock is strictly past this
    pub next_projectile_time: f64,
    pub launch_offset: f32,
    projectile: ProjectileTemplate,
}

impl Player {
    /// Rejects player and snowball settings that would fire every tick or
    /// launch an empty mesh.
    pub fn new(
        settings: &Settings,
        projectile_texture: TextureHandle,
    ) -> Result<Self, ConfigError> {
        let p = &settings.player;
        let b = &settings.projectile;
        p.validate()?;
        b.validate()?;
        let mesh = generate_sphere(b.radius, b.sector_count, b.stack_count, Vec3::ZERO);
        Ok(Self {
            position: Vec3::from_array(p.position),
            collider_radius: p.collider_radius,
            camera: Camera::new(
                p.horizontal_angle,
                p.vertical_angle,
                settings.view.field_of_view,
            ),
            mouse_sensitivity: p.mouse_sensitivity,
            projectile_cooldown: p.projectile_cooldown,
            next_projectile_time: f64::NEG_INFINITY,
            launch_offset: p.launch_offset,
            projectile: ProjectileTemplate {
                radius: b.radius,
                speed: b.speed,
                geometry: Geometry::new(mesh.into_mesh(), projectile_texture),
            },
        })
    }

    /// Turn the view by a cursor delta
    pub fn update_orientation(&mut self, cursor_delta: Vec2) {
        self.camera
            .rotate(cursor_delta.x, cursor_delta.y, self.mouse_sensitivity);
    }

    /// Launch a snowball if the trigger is held and the cooldown has expired.
    ///
    /// On success the cooldown restarts from `now`. `None` is the normal
    /// no-launch outcome.
    pub fn try_create_projectile(&mut self, trigger_held: bool, now: f64) -> Option<Entity> {
        if !trigger_held || now <= self.next_projectile_time {
            return None;
        }
        self.next_projectile_time = now + self.projectile_cooldown;

        let direction = self.camera.direction();
        let template = &self.projectile;
        Some(Entity::new(
            EntityKind::Projectile,
            self.position + direction * self.launch_offset,
            direction,
            template.speed,
            template.radius,
            template.geometry.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn player() -> Player {
        Player::new(&Settings::default(), TextureHandle(1)).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let mut settings = Settings::default();
        settings.projectile.stack_count = 1;
        assert!(matches!(
            Player::new(&settings, TextureHandle(1)),
            Err(ConfigError::DegenerateTessellation { .. })
        ));

        let mut settings = Settings::default();
        settings.player.projectile_cooldown = 0.0;
        assert!(matches!(
            Player::new(&settings, TextureHandle(1)),
            Err(ConfigError::NotPositive {
                field: "player.projectile_cooldown",
                ..
            })
        ));

        let mut settings = Settings::default();
        settings.projectile.radius = -0.75;
        assert!(Player::new(&settings, TextureHandle(1)).is_err());
    }

    #[test]
    fn test_no_launch_without_trigger() {
        let mut player = player();
        assert!(player.try_create_projectile(false, 10.0).is_none());
        // A refused launch leaves the cooldown untouched
        assert!(player.try_create_projectile(true, 10.0).is_some());
    }

    #[test]
    fn test_launch_cooldown() {
        let mut player = player();
        assert!(player.try_create_projectile(true, 1.0).is_some());
        assert_eq!(player.next_projectile_time, 1.0 + PROJECTILE_COOLDOWN);
        assert!(player.try_create_projectile(true, 1.1).is_none());
        // Strictly past the deadline only
        assert!(player.try_create_projectile(true, 1.0 + PROJECTILE_COOLDOWN).is_none());
        assert!(player.try_create_projectile(true, 1.25).is_some());
    }

    #[test]
    fn test_two_calls_within_cooldown_spawn_at_most_once() {
        let mut player = player();
        let spawned = [0.0, 0.15]
            .iter()
            .filter(|&&t| player.try_create_projectile(true, t).is_some())
            .count();
        assert_eq!(spawned, 1);
    }

    #[test]
    fn test_projectile_launch_geometry() {
        let mut player = player();
        player.position = Vec3::new(0.0, 1.0, 0.0);
        player.update_orientation(Vec2::new(std::f32::consts::FRAC_PI_2 / MOUSE_SENSITIVITY, 0.0));

        let snowball = player.try_create_projectile(true, 0.0).unwrap();
        assert_eq!(snowball.kind, EntityKind::Projectile);
        // Yawed a quarter turn: looking down +X
        assert!((snowball.direction - Vec3::X).length() < 1e-4);
        assert!((snowball.position - Vec3::new(LAUNCH_OFFSET, 1.0, 0.0)).length() < 1e-4);
        assert_eq!(snowball.speed, PROJECTILE_SPEED);
        assert_eq!(snowball.collider_radius, PROJECTILE_RADIUS);
        assert_eq!(snowball.geometry.texture, TextureHandle(1));
        assert_eq!(
            snowball.geometry.vertices.len(),
            3 * PROJECTILE_SECTORS as usize * (2 * PROJECTILE_STACKS as usize - 2)
        );
        // Mesh is local to the snowball
        for v in &snowball.geometry.vertices {
            assert!((v.length() - PROJECTILE_RADIUS).abs() < 1e-4);
        }
    }

    #[test]
    fn test_update_orientation_uses_sensitivity() {
        let mut player = player();
        player.update_orientation(Vec2::new(10.0, -4.0));
        assert!((player.camera.horizontal_angle - 10.0 * MOUSE_SENSITIVITY).abs() < 1e-7);
        assert!((player.camera.vertical_angle + 4.0 * MOUSE_SENSITIVITY).abs() < 1e-7);
    }
}
