//! Moving, collidable, drawable entities

use glam::{Mat4, Vec2, Vec3};

use crate::assets::{MeshAsset, TextureHandle};
use crate::settings::{ConfigError, non_negative, positive};

/// Entity kinds. Collisions only resolve between different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Enemy placed around the player by the spawner
    Obstacle,
    /// Snowball launched by the player
    Projectile,
}

/// Render payload: local-space triangle list plus texture
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub vertices: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub texture: TextureHandle,
}

impl Geometry {
    pub fn new(mesh: MeshAsset, texture: TextureHandle) -> Self {
        Self {
            vertices: mesh.vertices,
            uvs: mesh.uvs,
            texture,
        }
    }

    /// Apply `transform` to every vertex in place
    pub fn transform(&mut self, transform: Mat4) {
        for vertex in &mut self.vertices {
            *vertex = transform.transform_point3(*vertex);
        }
    }
}

/// A live simulation entity
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Assigned on insertion into a [`Simulation`](super::Simulation); 0 until then
    pub id: u64,
    pub kind: EntityKind,
    pub position: Vec3,
    pub direction: Vec3,
    /// Units per second along `direction`, never negative
    pub speed: f32,
    /// Always positive
    pub collider_radius: f32,
    pub geometry: Geometry,
}

impl Entity {
    /// Callers guarantee `speed >= 0` and `collider_radius > 0`; both come
    /// from validated [`Settings`](crate::Settings).
    pub(crate) fn new(
        kind: EntityKind,
        position: Vec3,
        direction: Vec3,
        speed: f32,
        collider_radius: f32,
        geometry: Geometry,
    ) -> Self {
        debug_assert!(speed >= 0.0);
        debug_assert!(collider_radius > 0.0);
        Self {
            id: 0,
            kind,
            position,
            direction,
            speed,
            collider_radius,
            geometry,
        }
    }

    /// A stationary enemy
    pub fn obstacle(
        position: Vec3,
        collider_radius: f32,
        geometry: Geometry,
    ) -> Result<Self, ConfigError> {
        positive("obstacle.collider_radius", collider_radius.into())?;
        Ok(Self::new(
            EntityKind::Obstacle,
            position,
            Vec3::ZERO,
            0.0,
            collider_radius,
            geometry,
        ))
    }

    /// A snowball moving along `direction`
    pub fn projectile(
        position: Vec3,
        direction: Vec3,
        speed: f32,
        collider_radius: f32,
        geometry: Geometry,
    ) -> Result<Self, ConfigError> {
        non_negative("projectile.speed", speed.into())?;
        positive("projectile.collider_radius", collider_radius.into())?;
        Ok(Self::new(
            EntityKind::Projectile,
            position,
            direction,
            speed,
            collider_radius,
            geometry,
        ))
    }

    #[inline]
    pub fn is_projectile(&self) -> bool {
        self.kind == EntityKind::Projectile
    }

    /// Sphere overlap test. Touching spheres (distance exactly equal to the
    /// sum of radii) do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Entity) -> bool {
        self.position.distance(other.position) < self.collider_radius + other.collider_radius
    }

    /// Advance along the fixed heading
    #[inline]
    pub fn shift(&mut self, dt: f32) {
        self.position += self.direction * self.speed * dt;
    }

    /// Model matrix for drawing (translation only; rotation and scale are
    /// baked into the vertices)
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    pub(crate) fn empty_geometry() -> Geometry {
        Geometry {
            vertices: Vec::new(),
            uvs: Vec::new(),
            texture: TextureHandle(0),
        }
    }

    pub(crate) fn obstacle_at(position: Vec3, radius: f32) -> Entity {
        Entity::obstacle(position, radius, empty_geometry()).unwrap()
    }

    pub(crate) fn projectile_at(position: Vec3, radius: f32) -> Entity {
        Entity::projectile(position, Vec3::X, 0.0, radius, empty_geometry()).unwrap()
    }

    #[test]
    fn test_intersects_overlap() {
        let a = obstacle_at(Vec3::ZERO, 2.0);
        let b = projectile_at(Vec3::new(2.5, 0.0, 0.0), 0.75);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_is_not_intersecting() {
        let a = obstacle_at(Vec3::ZERO, 2.0);
        let b = projectile_at(Vec3::new(3.0, 0.0, 0.0), 1.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_shift() {
        let mut e = Entity::projectile(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::NEG_Z,
            13.0,
            0.75,
            empty_geometry(),
        )
        .unwrap();
        e.shift(0.5);
        assert!((e.position - Vec3::new(1.0, 2.0, -3.5)).length() < 1e-6);
        assert_eq!(e.direction, Vec3::NEG_Z);
        assert_eq!(e.speed, 13.0);
    }

    #[test]
    fn test_obstacle_does_not_move() {
        let mut e = obstacle_at(Vec3::new(4.0, 0.0, 0.0), 2.0);
        e.shift(10.0);
        assert_eq!(e.position, Vec3::new(4.0, 0.0, 0.0));
    }

    #[test]
    fn test_constructors_reject_invalid() {
        assert!(Entity::obstacle(Vec3::ZERO, 0.0, empty_geometry()).is_err());
        assert!(Entity::projectile(Vec3::ZERO, Vec3::X, -1.0, 1.0, empty_geometry()).is_err());
        assert!(Entity::projectile(Vec3::ZERO, Vec3::X, 1.0, -1.0, empty_geometry()).is_err());
    }

    #[test]
    fn test_geometry_transform() {
        let mut geometry = empty_geometry();
        geometry.vertices = vec![Vec3::X, Vec3::Y];
        geometry.transform(Mat4::from_scale(Vec3::splat(2.0)));
        assert_eq!(geometry.vertices, vec![Vec3::X * 2.0, Vec3::Y * 2.0]);
    }

    proptest! {
        #[test]
        fn prop_intersects_symmetric(
            ax in -50.0f32..50.0, ay in -50.0f32..50.0, az in -50.0f32..50.0,
            bx in -50.0f32..50.0, by in -50.0f32..50.0, bz in -50.0f32..50.0,
            ra in 0.01f32..10.0, rb in 0.01f32..10.0,
        ) {
            let a = obstacle_at(Vec3::new(ax, ay, az), ra);
            let b = projectile_at(Vec3::new(bx, by, bz), rb);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn prop_motion_is_frame_rate_independent(
            dx in -1.0f32..1.0, dy in -1.0f32..1.0, dz in -1.0f32..1.0,
            speed in 0.0f32..50.0,
        ) {
            let direction = Vec3::new(dx, dy, dz);
            let mut coarse =
                Entity::projectile(Vec3::ZERO, direction, speed, 1.0, empty_geometry()).unwrap();
            let mut fine = coarse.clone();
            coarse.shift(1.0);
            for _ in 0..10 {
                fine.shift(0.1);
            }
            prop_assert!(coarse.position.distance(fine.position) < 1e-3);
        }
    }
}
