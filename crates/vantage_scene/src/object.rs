//! Scene object nodes and transforms.

use std::sync::Arc;

use glam::Vec3;
use serde::Serialize;
use uuid::Uuid;

use crate::resources::{Geometry, Material};

/// Stable identifier for a scene object.
///
/// The nil id is reserved as the "no object" sentinel used by the editor's
/// explicit deselect-all path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectId(pub Uuid);

impl ObjectId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The empty-identifier sentinel.
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Check whether this is the sentinel id.
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self.0)
    }
}

/// Kind of node, used for default display names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Mesh,
    Group,
    Light,
    Empty,
}

impl ObjectKind {
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Mesh => "Mesh",
            ObjectKind::Group => "Group",
            ObjectKind::Light => "Light",
            ObjectKind::Empty => "Object",
        }
    }
}

/// Local transform of a scene object, relative to its parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Reset rotation and scale to identity, keeping position.
    pub fn reset_orientation(&mut self) {
        self.rotation = Vec3::ZERO;
        self.scale = Vec3::ONE;
    }
}

/// A node in the scene graph.
///
/// Parent/child links are by id; the [`Scene`](crate::Scene) arena owns the
/// nodes themselves. `parent_previous` remembers where a node was attached
/// before its last reparent, so deselecting (or pasting) can put it back.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub kind: ObjectKind,
    pub selectable: bool,
    pub selected: bool,
    pub transform: Transform,
    pub geometry: Option<Arc<Geometry>>,
    pub material: Option<Material>,
    pub parent: Option<ObjectId>,
    pub parent_previous: Option<ObjectId>,
    pub children: Vec<ObjectId>,
}

impl SceneObject {
    pub fn new(kind: ObjectKind, name: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            name: name.into(),
            kind,
            selectable: true,
            selected: false,
            transform: Transform::default(),
            geometry: None,
            material: None,
            parent: None,
            parent_previous: None,
            children: Vec::new(),
        }
    }

    /// A mesh node with shared geometry and an owned material.
    pub fn mesh(name: impl Into<String>, geometry: Arc<Geometry>, material: Material) -> Self {
        let mut object = Self::new(ObjectKind::Mesh, name);
        object.geometry = Some(geometry);
        object.material = Some(material);
        object
    }

    /// A group node. Groups are containers and not directly selectable.
    pub fn group(name: impl Into<String>) -> Self {
        let mut object = Self::new(ObjectKind::Group, name);
        object.selectable = false;
        object
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Display name, falling back to the kind name when unset.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            self.kind.name()
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nil_sentinel() {
        assert!(ObjectId::nil().is_nil());
        assert!(!ObjectId::new().is_nil());
        assert_eq!(ObjectId::nil(), ObjectId::nil());
    }

    #[test]
    fn test_display_name_fallback() {
        let unnamed = SceneObject::new(ObjectKind::Mesh, "");
        assert_eq!(unnamed.display_name(), "Mesh");

        let named = SceneObject::new(ObjectKind::Mesh, "Crate");
        assert_eq!(named.display_name(), "Crate");
    }

    #[test]
    fn test_transform_reset_orientation() {
        let mut transform = Transform::new()
            .with_position(Vec3::new(1.0, 2.0, 3.0))
            .with_scale(2.0);
        transform.rotation = Vec3::new(0.5, 0.0, 0.0);

        transform.reset_orientation();
        assert_eq!(transform.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform.rotation, Vec3::ZERO);
        assert_eq!(transform.scale, Vec3::ONE);
    }
}
