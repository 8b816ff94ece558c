//! Named mesh and texture lookup
//!
//! The simulation only needs vertex/uv arrays and an opaque texture handle.
//! Decoding files is the caller's job: whatever does it registers the results
//! with an [`AssetLibrary`] (or implements [`AssetLoader`] directly) before
//! the simulation starts.

use std::collections::HashMap;

use glam::{Vec2, Vec3};
use thiserror::Error;

/// Opaque texture handle issued by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Vertex and texture-coordinate arrays for a non-indexed triangle list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshAsset {
    pub vertices: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
}

impl MeshAsset {
    pub fn new(vertices: Vec<Vec3>, uvs: Vec<Vec2>) -> Self {
        Self { vertices, uvs }
    }
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("mesh not found: {0}")]
    MeshNotFound(String),
    #[error("texture not found: {0}")]
    TextureNotFound(String),
    #[error("mesh {name} is empty")]
    EmptyMesh { name: String },
    #[error("mesh {name} has {vertices} vertices but {uvs} uvs")]
    MismatchedMesh {
        name: String,
        vertices: usize,
        uvs: usize,
    },
}

/// Supplies geometry and textures by name
pub trait AssetLoader {
    fn load_mesh(&self, name: &str) -> Result<MeshAsset, AssetError>;
    fn load_texture(&self, name: &str) -> Result<TextureHandle, AssetError>;
}

/// In-memory asset registry
#[derive(Debug, Default)]
pub struct AssetLibrary {
    meshes: HashMap<String, MeshAsset>,
    textures: HashMap<String, TextureHandle>,
    next_texture: u32,
}

impl AssetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mesh, rejecting empty or mismatched arrays
    pub fn insert_mesh(&mut self, name: &str, mesh: MeshAsset) -> Result<(), AssetError> {
        if mesh.vertices.is_empty() {
            return Err(AssetError::EmptyMesh {
                name: name.to_string(),
            });
        }
        if mesh.vertices.len() != mesh.uvs.len() {
            return Err(AssetError::MismatchedMesh {
                name: name.to_string(),
                vertices: mesh.vertices.len(),
                uvs: mesh.uvs.len(),
            });
        }
        log::debug!("Registered mesh {} ({} vertices)", name, mesh.vertices.len());
        self.meshes.insert(name.to_string(), mesh);
        Ok(())
    }

    /// Register a texture and return its handle; re-registering a name
    /// returns the existing handle
    pub fn insert_texture(&mut self, name: &str) -> TextureHandle {
        if let Some(handle) = self.textures.get(name) {
            return *handle;
        }
        self.next_texture += 1;
        let handle = TextureHandle(self.next_texture);
        self.textures.insert(name.to_string(), handle);
        handle
    }
}

impl AssetLoader for AssetLibrary {
    fn load_mesh(&self, name: &str) -> Result<MeshAsset, AssetError> {
        self.meshes
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::MeshNotFound(name.to_string()))
    }

    fn load_texture(&self, name: &str) -> Result<TextureHandle, AssetError> {
        self.textures
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::TextureNotFound(name.to_string()))
    }
}
