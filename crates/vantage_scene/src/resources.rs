//! Shared and owned render resources.
//!
//! Geometry is reference-counted and shared between an object and its
//! duplicates. Materials and textures are owned per object: duplication
//! copies them and raises their dirty flag so the renderer re-uploads.

use std::sync::Arc;

use uuid::Uuid;

/// Immutable mesh data, shared by reference between clones.
#[derive(Debug)]
pub struct Geometry {
    pub name: String,
}

impl Geometry {
    pub fn new(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self { name: name.into() })
    }
}

/// Backing pixel data for a texture.
///
/// Stays shared across duplicates; copying the source is the expensive path
/// the editor deliberately does not take by default.
#[derive(Debug)]
pub struct TextureSource {
    pub label: String,
}

impl TextureSource {
    pub fn new(label: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            label: label.into(),
        })
    }
}

/// A texture binding owned by a material.
#[derive(Clone, Debug)]
pub struct Texture {
    pub id: Uuid,
    pub source: Arc<TextureSource>,
    /// Set when the texture must be re-uploaded to the GPU.
    pub needs_update: bool,
}

impl Texture {
    pub fn new(source: Arc<TextureSource>) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            needs_update: false,
        }
    }

    /// Copy for a duplicated object: fresh identity, shared source, dirty.
    pub fn clone_for_duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            source: Arc::clone(&self.source),
            needs_update: true,
        }
    }
}

/// A material owned by a scene object.
#[derive(Clone, Debug)]
pub struct Material {
    pub id: Uuid,
    pub color: [f32; 3],
    pub map: Option<Texture>,
    /// Set when the material must be re-uploaded to the GPU.
    pub needs_update: bool,
}

impl Material {
    pub fn new(color: [f32; 3]) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            map: None,
            needs_update: false,
        }
    }

    pub fn with_map(mut self, map: Texture) -> Self {
        self.map = Some(map);
        self
    }

    /// Copy for a duplicated object.
    ///
    /// The material and its texture binding get fresh identities and dirty
    /// flags; mutating the copy never affects the original.
    pub fn clone_for_duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            color: self.color,
            map: self.map.as_ref().map(Texture::clone_for_duplicate),
            needs_update: true,
        }
    }
}
