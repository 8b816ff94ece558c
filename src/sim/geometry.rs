//! Procedural mesh generation
//!
//! Meshes are flat triangle lists (no index buffer) with parallel
//! position/normal/uv arrays.

use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::assets::MeshAsset;

/// Parallel arrays for a sphere triangle list
#[derive(Debug, Clone, Default)]
pub struct SphereMesh {
    pub vertices: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
}

impl SphereMesh {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Drop the normals (the renderer only takes positions and uvs)
    pub fn into_mesh(self) -> MeshAsset {
        MeshAsset::new(self.vertices, self.uvs)
    }
}

/// Generate a UV sphere centered at `center`
///
/// Stacks sweep the polar angle from +π/2 down to -π/2, sectors sweep the
/// azimuth from 0 to 2π. Each stack emits two triangles per sector except the
/// first and last, whose pole triangles would be degenerate and are skipped.
/// Zero sectors or stacks yield an empty mesh.
pub fn generate_sphere(radius: f32, sector_count: u32, stack_count: u32, center: Vec3) -> SphereMesh {
    if sector_count < 1 || stack_count < 1 {
        return SphereMesh::default();
    }

    let sector_step = TAU / sector_count as f32;
    let stack_step = PI / stack_count as f32;
    let row = sector_count as usize + 1;

    // Grid of (stack_count + 1) x (sector_count + 1) points; the seam column
    // repeats the first one with s = 1.0
    let mut grid_normals = Vec::with_capacity((stack_count as usize + 1) * row);
    let mut grid_uvs = Vec::with_capacity(grid_normals.capacity());
    for i in 0..=stack_count {
        let stack_angle = FRAC_PI_2 - i as f32 * stack_step;
        let (z, xy) = stack_angle.sin_cos();
        for j in 0..=sector_count {
            let sector_angle = j as f32 * sector_step;
            let (sin, cos) = sector_angle.sin_cos();
            grid_normals.push(Vec3::new(xy * cos, xy * sin, z));
            grid_uvs.push(Vec2::new(
                j as f32 / sector_count as f32,
                i as f32 / stack_count as f32,
            ));
        }
    }

    let triangles = 2 * sector_count as usize * (stack_count as usize).saturating_sub(1);
    let mut mesh = SphereMesh {
        vertices: Vec::with_capacity(triangles * 3),
        normals: Vec::with_capacity(triangles * 3),
        uvs: Vec::with_capacity(triangles * 3),
    };
    let mut emit = |k: usize| {
        let normal = grid_normals[k];
        mesh.vertices.push(center + normal * radius);
        mesh.normals.push(normal);
        mesh.uvs.push(grid_uvs[k]);
    };

    for i in 0..stack_count as usize {
        let mut k1 = i * row;
        let mut k2 = k1 + row;
        for _ in 0..sector_count {
            if i != 0 {
                emit(k1);
                emit(k2);
                emit(k1 + 1);
            }
            if i != stack_count as usize - 1 {
                emit(k1 + 1);
                emit(k2);
                emit(k2 + 1);
            }
            k1 += 1;
            k2 += 1;
        }
    }

    mesh
}

/// Axis-aligned cube centered at the origin, 36 vertices with per-face uvs
pub fn cube_mesh(half_extent: f32) -> MeshAsset {
    // (normal, u, v) with u x v == normal so faces wind counter-clockwise
    // when seen from outside
    const FACES: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    const CORNERS: [(f32, f32); 6] = [
        (-1.0, -1.0),
        (1.0, -1.0),
        (1.0, 1.0),
        (-1.0, -1.0),
        (1.0, 1.0),
        (-1.0, 1.0),
    ];

    let mut vertices = Vec::with_capacity(36);
    let mut uvs = Vec::with_capacity(36);
    for (normal, u, v) in FACES {
        for (a, b) in CORNERS {
            vertices.push((normal + u * a + v * b) * half_extent);
            uvs.push(Vec2::new((a + 1.0) / 2.0, (b + 1.0) / 2.0));
        }
    }
    MeshAsset::new(vertices, uvs)
}
