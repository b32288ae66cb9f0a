//! The scene arena and hierarchy operations.
//!
//! Nodes live in an id-keyed arena; the scene tree is defined by the root
//! list plus parent/child links. Detaching a node removes it from the tree
//! but keeps it alive in the arena; cut/paste depends on detached-but-alive
//! nodes.

use std::collections::HashMap;

use glam::Vec3;
use thiserror::Error;

use crate::object::{ObjectId, SceneObject};

/// Scene-graph errors.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    /// Operation targets an object that is not in the arena.
    #[error("invalid object reference: {0}")]
    InvalidReference(ObjectId),

    /// Attaching would make a node its own ancestor.
    #[error("hierarchy cycle: cannot attach {child} under {parent}")]
    HierarchyCycle { parent: ObjectId, child: ObjectId },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// The object graph.
#[derive(Debug, Default)]
pub struct Scene {
    objects: HashMap<ObjectId, SceneObject>,
    root: Vec<ObjectId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object under the scene root. Empty names get the kind name so
    /// the object list never shows blank entries.
    pub fn insert(&mut self, mut object: SceneObject) -> ObjectId {
        if object.name.is_empty() {
            object.name = object.kind.name().to_string();
        }
        object.parent = None;
        let id = object.id;
        self.objects.insert(id, object);
        self.root.push(id);
        id
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn get(&self, id: ObjectId) -> SceneResult<&SceneObject> {
        self.objects.get(&id).ok_or(SceneError::InvalidReference(id))
    }

    pub fn get_mut(&mut self, id: ObjectId) -> SceneResult<&mut SceneObject> {
        self.objects
            .get_mut(&id)
            .ok_or(SceneError::InvalidReference(id))
    }

    /// Direct children of the scene root, in insertion order.
    pub fn root_children(&self) -> &[ObjectId] {
        &self.root
    }

    /// World-space position of a node (sum of positions up the parent
    /// chain; ancestors carry no rotation or scale by editor invariant).
    pub fn world_position(&self, id: ObjectId) -> SceneResult<Vec3> {
        let mut position = self.get(id)?.transform.position;
        let mut current = self.get(id)?.parent;
        while let Some(parent_id) = current {
            let parent = self.get(parent_id)?;
            position += parent.transform.position;
            current = parent.parent;
        }
        Ok(position)
    }

    /// Whether a node is reachable from the scene root.
    pub fn is_in_scene(&self, id: ObjectId) -> bool {
        let mut current = id;
        loop {
            let Some(object) = self.objects.get(&current) else {
                return false;
            };
            match object.parent {
                Some(parent) => current = parent,
                None => return self.root.contains(&current),
            }
        }
    }

    /// Reparent `child` under `parent`, preserving the child's world
    /// position. The previous parent is recorded in `parent_previous`.
    ///
    /// The new parent must carry identity rotation/scale when attaching;
    /// the editor resets its pivot group before populating it.
    pub fn attach(&mut self, parent_id: ObjectId, child_id: ObjectId) -> SceneResult<()> {
        if !self.contains(parent_id) {
            return Err(SceneError::InvalidReference(parent_id));
        }
        if parent_id == child_id || self.is_ancestor(child_id, parent_id)? {
            return Err(SceneError::HierarchyCycle {
                parent: parent_id,
                child: child_id,
            });
        }

        let child_world = self.world_position(child_id)?;
        let parent_world = self.world_position(parent_id)?;
        let old_parent = self.get(child_id)?.parent;

        self.unlink(child_id)?;

        let child = self.get_mut(child_id)?;
        child.parent = Some(parent_id);
        child.parent_previous = old_parent;
        child.transform.position = child_world - parent_world;

        self.get_mut(parent_id)?.children.push(child_id);
        Ok(())
    }

    /// Remove a node from its parent (or the root list). The node stays in
    /// the arena and keeps its children.
    pub fn detach(&mut self, id: ObjectId) -> SceneResult<()> {
        let world = if self.is_in_scene(id) {
            Some(self.world_position(id)?)
        } else {
            None
        };
        self.unlink(id)?;
        let object = self.get_mut(id)?;
        object.parent = None;
        if let Some(world) = world {
            object.transform.position = world;
        }
        Ok(())
    }

    /// Put a node directly under the scene root, preserving world position.
    pub fn place_at_root(&mut self, id: ObjectId) -> SceneResult<()> {
        self.detach(id)?;
        if !self.root.contains(&id) {
            self.root.push(id);
        }
        Ok(())
    }

    /// Return a node to its recorded previous parent, falling back to the
    /// scene root when that parent is gone.
    pub fn restore_parent(&mut self, id: ObjectId) -> SceneResult<()> {
        let previous = self.get(id)?.parent_previous;
        match previous {
            Some(parent) if self.contains(parent) && self.is_in_scene(parent) => {
                self.attach(parent, id)
            }
            _ => self.place_at_root(id),
        }
    }

    /// Deep-clone an object subtree per the resource ownership policy:
    /// geometry shared, materials and textures copied and marked dirty.
    ///
    /// The clone is left unattached (not in the tree); the caller decides
    /// where it goes.
    pub fn duplicate(&mut self, id: ObjectId) -> SceneResult<ObjectId> {
        let source = self.get(id)?;
        let mut copy = source.clone();
        copy.id = ObjectId::new();
        copy.selected = false;
        copy.parent = None;
        copy.parent_previous = None;
        copy.material = source.material.as_ref().map(|m| m.clone_for_duplicate());

        let source_children = std::mem::take(&mut copy.children);
        let copy_id = copy.id;
        self.objects.insert(copy_id, copy);

        for child in source_children {
            let child_copy = self.duplicate(child)?;
            self.get_mut(child_copy)?.parent = Some(copy_id);
            self.get_mut(copy_id)?.children.push(child_copy);
        }

        log::debug!("duplicated {} -> {}", id, copy_id);
        Ok(copy_id)
    }

    /// Whether `ancestor` appears on `id`'s parent chain.
    fn is_ancestor(&self, ancestor: ObjectId, id: ObjectId) -> SceneResult<bool> {
        let mut current = self.get(id)?.parent;
        while let Some(parent) = current {
            if parent == ancestor {
                return Ok(true);
            }
            current = self.get(parent)?.parent;
        }
        Ok(false)
    }

    /// Remove a node from whichever container currently holds it.
    fn unlink(&mut self, id: ObjectId) -> SceneResult<()> {
        let parent = self.get(id)?.parent;
        match parent {
            Some(parent_id) => {
                self.get_mut(parent_id)?.children.retain(|&c| c != id);
            }
            None => {
                self.root.retain(|&c| c != id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ObjectKind;
    use crate::resources::{Geometry, Material};

    fn mesh_at(name: &str, position: Vec3) -> SceneObject {
        SceneObject::mesh(name, Geometry::new("cube"), Material::new([0.8; 3]))
            .with_position(position)
    }

    #[test]
    fn test_attach_preserves_world_position() {
        let mut scene = Scene::new();
        let group = scene.insert(SceneObject::group("pivot").with_position(Vec3::new(5.0, 0.0, 0.0)));
        let mesh = scene.insert(mesh_at("a", Vec3::new(2.0, 1.0, 0.0)));

        scene.attach(group, mesh).unwrap();

        assert_eq!(scene.get(mesh).unwrap().parent, Some(group));
        assert_eq!(
            scene.world_position(mesh).unwrap(),
            Vec3::new(2.0, 1.0, 0.0)
        );
        assert_eq!(
            scene.get(mesh).unwrap().transform.position,
            Vec3::new(-3.0, 1.0, 0.0)
        );
    }

    #[test]
    fn test_detach_keeps_node_alive_but_out_of_scene() {
        let mut scene = Scene::new();
        let mesh = scene.insert(mesh_at("a", Vec3::ONE));

        scene.detach(mesh).unwrap();

        assert!(scene.contains(mesh));
        assert!(!scene.is_in_scene(mesh));
        assert!(scene.root_children().is_empty());
    }

    #[test]
    fn test_restore_parent_round_trip() {
        let mut scene = Scene::new();
        let group = scene.insert(SceneObject::group("g"));
        let pivot = scene.insert(SceneObject::group("pivot"));
        let mesh = scene.insert(mesh_at("a", Vec3::ZERO));
        scene.attach(group, mesh).unwrap();

        scene.attach(pivot, mesh).unwrap();
        assert_eq!(scene.get(mesh).unwrap().parent_previous, Some(group));

        scene.restore_parent(mesh).unwrap();
        assert_eq!(scene.get(mesh).unwrap().parent, Some(group));
    }

    #[test]
    fn test_restore_parent_falls_back_to_root() {
        let mut scene = Scene::new();
        let group = scene.insert(SceneObject::group("g"));
        let pivot = scene.insert(SceneObject::group("pivot"));
        let mesh = scene.insert(mesh_at("a", Vec3::ZERO));
        scene.attach(group, mesh).unwrap();
        scene.attach(pivot, mesh).unwrap();

        // Previous parent leaves the scene, so restore goes to the root.
        scene.detach(group).unwrap();
        scene.restore_parent(mesh).unwrap();
        assert!(scene.is_in_scene(mesh));
        assert_eq!(scene.get(mesh).unwrap().parent, None);
    }

    #[test]
    fn test_duplicate_deep_clones_material() {
        let mut scene = Scene::new();
        let mesh = scene.insert(mesh_at("a", Vec3::ONE));

        let copy = scene.duplicate(mesh).unwrap();

        let source_mat = scene.get(mesh).unwrap().material.clone().unwrap();
        let copy_mat = scene.get(copy).unwrap().material.clone().unwrap();
        assert_ne!(source_mat.id, copy_mat.id);
        assert!(copy_mat.needs_update);
        assert!(!scene.is_in_scene(copy));

        // Geometry is shared by reference.
        let source_geo = scene.get(mesh).unwrap().geometry.clone().unwrap();
        let copy_geo = scene.get(copy).unwrap().geometry.clone().unwrap();
        assert!(std::sync::Arc::ptr_eq(&source_geo, &copy_geo));
    }

    #[test]
    fn test_duplicate_clones_subtree() {
        let mut scene = Scene::new();
        let group = scene.insert(SceneObject::new(ObjectKind::Group, "g"));
        let mesh = scene.insert(mesh_at("child", Vec3::ZERO));
        scene.attach(group, mesh).unwrap();

        let copy = scene.duplicate(group).unwrap();
        let copied_children = scene.get(copy).unwrap().children.clone();
        assert_eq!(copied_children.len(), 1);
        assert_ne!(copied_children[0], mesh);
        assert_eq!(scene.get(copied_children[0]).unwrap().name, "child");
    }

    #[test]
    fn test_cycle_rejected() {
        let mut scene = Scene::new();
        let a = scene.insert(SceneObject::group("a"));
        let b = scene.insert(SceneObject::group("b"));
        scene.attach(a, b).unwrap();

        let err = scene.attach(b, a).unwrap_err();
        assert!(matches!(err, SceneError::HierarchyCycle { .. }));
    }

    #[test]
    fn test_invalid_reference() {
        let scene = Scene::new();
        let missing = ObjectId::new();
        assert_eq!(
            scene.get(missing).unwrap_err(),
            SceneError::InvalidReference(missing)
        );
    }
}
