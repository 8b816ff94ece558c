//! Per-tick render payload handed to the external renderer

use glam::{Mat4, Vec2, Vec3};

use super::vertex::{DrawUniforms, Vertex, interleave};
use crate::assets::TextureHandle;
use crate::sim::{Entity, EntityKind};

/// One entity's draw call
#[derive(Debug, Clone, Copy)]
pub struct DrawCall<'a> {
    pub entity_id: u64,
    pub kind: EntityKind,
    /// Translation only
    pub model: Mat4,
    pub vertices: &'a [Vec3],
    pub uvs: &'a [Vec2],
    pub texture: TextureHandle,
}

impl<'a> DrawCall<'a> {
    pub fn from_entity(entity: &'a Entity) -> Self {
        Self {
            entity_id: entity.id,
            kind: entity.kind,
            model: entity.model_matrix(),
            vertices: &entity.geometry.vertices,
            uvs: &entity.geometry.uvs,
            texture: entity.geometry.texture,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Interleaved vertex buffer contents
    pub fn vertex_data(&self) -> Vec<Vertex> {
        interleave(self.vertices, self.uvs)
    }
}

/// Everything needed to draw one tick
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub projection: Mat4,
    pub view: Mat4,
    pub draws: Vec<DrawCall<'a>>,
}

impl Frame<'_> {
    /// Uniform block for a single draw call
    pub fn uniforms(&self, draw: &DrawCall<'_>) -> DrawUniforms {
        DrawUniforms::new(self.projection, self.view, draw.model)
    }
}

/// The external renderer
pub trait FrameSink {
    fn submit(&mut self, frame: &Frame<'_>);
}

/// Sink that records what it was given; used for headless runs
#[derive(Debug, Default, Clone)]
pub struct FrameStats {
    pub frames: u64,
    pub draws: u64,
    pub vertices: u64,
    pub last_draw_count: usize,
}

impl FrameSink for FrameStats {
    fn submit(&mut self, frame: &Frame<'_>) {
        self.frames += 1;
        self.draws += frame.draws.len() as u64;
        self.vertices += frame
            .draws
            .iter()
            .map(|d| u64::from(d.vertex_count()))
            .sum::<u64>();
        self.last_draw_count = frame.draws.len();
    }
}
