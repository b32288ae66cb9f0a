//! Selection management: ordered collection plus the pivot group.
//!
//! Selected objects are reparented under a synthetic pivot node so group
//! transforms apply uniformly; deselecting returns each object to the
//! parent it came from. The pivot sits at the centroid of the members'
//! world positions.

use glam::{Vec2, Vec3};
use vantage_scene::{ObjectId, Scene, SceneObject, SceneResult};

use crate::controls::CameraRig;

/// Drag distance (px) before a pointer-down becomes a box selection.
const BOX_DRAG_THRESHOLD: f32 = 5.0;

/// Tracks which scene objects are selected and maintains the pivot
/// grouping invariant.
pub struct SelectionManager {
    /// Selected objects, in selection order.
    collection: Vec<ObjectId>,
    /// The synthetic pivot group, a permanent scene child.
    pivot: ObjectId,

    // Box-selection gesture state
    box_start: Option<Vec2>,
    box_current: Vec2,
    is_box_selecting: bool,
    /// Objects intersected by the finished box, awaiting commit.
    candidates: Vec<ObjectId>,
}

impl SelectionManager {
    /// Create the manager and its pivot group inside the scene.
    pub fn new(scene: &mut Scene) -> Self {
        let pivot = scene.insert(SceneObject::group("selection_pivot"));
        Self {
            collection: Vec::new(),
            pivot,
            box_start: None,
            box_current: Vec2::ZERO,
            is_box_selecting: false,
            candidates: Vec::new(),
        }
    }

    pub fn pivot(&self) -> ObjectId {
        self.pivot
    }

    /// Selected objects in selection order.
    pub fn collection(&self) -> &[ObjectId] {
        &self.collection
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn count(&self) -> usize {
        self.collection.len()
    }

    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.collection.contains(&id)
    }

    // ------------------------------------------------------------------
    // Box-selection gesture
    // ------------------------------------------------------------------

    pub fn pointer_down(&mut self, position: Vec2) {
        self.box_start = Some(position);
        self.box_current = position;
        self.is_box_selecting = false;
        self.candidates.clear();
    }

    pub fn pointer_move(&mut self, position: Vec2) {
        self.box_current = position;
        if let Some(start) = self.box_start {
            let delta = (position - start).abs();
            if delta.x > BOX_DRAG_THRESHOLD || delta.y > BOX_DRAG_THRESHOLD {
                self.is_box_selecting = true;
            }
        }
    }

    /// Finish the gesture and accumulate candidates: every selectable
    /// object whose projected position falls inside the dragged box. A
    /// plain click (no drag) yields no candidates, so committing it with
    /// `additive == false` clears the selection.
    pub fn pointer_up(&mut self, scene: &Scene, camera: &dyn CameraRig) {
        if !self.is_box_selecting {
            self.box_start = None;
            return;
        }

        let Some(start) = self.box_start.take() else {
            return;
        };
        let min = start.min(self.box_current);
        let max = start.max(self.box_current);

        self.candidates = self
            .hit_testable(scene)
            .into_iter()
            .filter(|&id| {
                let Ok(world) = scene.world_position(id) else {
                    return false;
                };
                match camera.project(world) {
                    Some(screen) => {
                        screen.x >= min.x
                            && screen.x <= max.x
                            && screen.y >= min.y
                            && screen.y <= max.y
                    }
                    None => false,
                }
            })
            .collect();

        self.is_box_selecting = false;
        log::debug!("box selection accumulated {} candidates", self.candidates.len());
    }

    /// Box candidates awaiting commit.
    pub fn candidates(&self) -> &[ObjectId] {
        &self.candidates
    }

    // ------------------------------------------------------------------
    // Selection commits
    // ------------------------------------------------------------------

    /// Commit a selection.
    ///
    /// - `None` commits the accumulated box candidates.
    /// - The nil sentinel id is the explicit deselect-all.
    /// - A concrete id sets (or, when `additive`, toggles) that object.
    ///
    /// When `additive` is false, previously selected objects outside the
    /// new set are deselected first.
    pub fn select(
        &mut self,
        scene: &mut Scene,
        object: Option<ObjectId>,
        additive: bool,
    ) -> SceneResult<()> {
        match object {
            None => {
                let new_set = std::mem::take(&mut self.candidates);
                if !additive {
                    for id in self.collection.clone() {
                        if !new_set.contains(&id) {
                            self.deselect_object(scene, id)?;
                        }
                    }
                }
                for id in new_set {
                    self.add_to_collection(scene, id)?;
                }
            }
            Some(id) if id.is_nil() => {
                if !additive {
                    self.deselect_all(scene)?;
                }
            }
            Some(id) => {
                // Surface dangling references instead of selecting thin air.
                scene.get(id)?;
                if additive {
                    if self.is_selected(id) {
                        self.deselect_object(scene, id)?;
                    } else {
                        self.add_to_collection(scene, id)?;
                    }
                } else {
                    for other in self.collection.clone() {
                        if other != id {
                            self.deselect_object(scene, other)?;
                        }
                    }
                    self.add_to_collection(scene, id)?;
                }
            }
        }
        self.update_center_position(scene)
    }

    /// Append one object to the selection and reparent it under the pivot,
    /// leaving other members untouched.
    pub fn add_to_collection(&mut self, scene: &mut Scene, id: ObjectId) -> SceneResult<()> {
        if self.is_selected(id) {
            return Ok(());
        }
        scene.attach(self.pivot, id)?;
        scene.get_mut(id)?.selected = true;
        self.collection.push(id);
        Ok(())
    }

    /// Replace the working collection without touching the scene (used by
    /// paste, which attaches the objects itself).
    pub fn set_collection(&mut self, ids: Vec<ObjectId>) {
        self.collection = ids;
    }

    /// Re-derive pivot membership from the current collection: every
    /// member ends up attached to the pivot and marked selected.
    pub fn select_from_collection(&mut self, scene: &mut Scene) -> SceneResult<()> {
        for id in self.collection.clone() {
            if scene.get(id)?.parent != Some(self.pivot) {
                scene.attach(self.pivot, id)?;
            }
            scene.get_mut(id)?.selected = true;
        }
        self.update_center_position(scene)
    }

    /// Deselect one object, returning it to its previous parent.
    pub fn deselect_object(&mut self, scene: &mut Scene, id: ObjectId) -> SceneResult<()> {
        let object = scene.get_mut(id)?;
        object.selected = false;
        if object.parent == Some(self.pivot) {
            scene.restore_parent(id)?;
        }
        self.collection.retain(|&c| c != id);
        Ok(())
    }

    /// Deselect everything. No-op on an empty selection.
    pub fn deselect_all(&mut self, scene: &mut Scene) -> SceneResult<()> {
        for id in self.collection.clone() {
            self.deselect_object(scene, id)?;
        }
        Ok(())
    }

    /// Move the pivot to the centroid of member world positions, shifting
    /// children so their world positions are unchanged.
    pub fn update_center_position(&mut self, scene: &mut Scene) -> SceneResult<()> {
        if self.collection.is_empty() {
            return Ok(());
        }

        let mut centroid = Vec3::ZERO;
        for &id in &self.collection {
            centroid += scene.world_position(id)?;
        }
        centroid /= self.collection.len() as f32;

        let delta = centroid - scene.get(self.pivot)?.transform.position;
        scene.get_mut(self.pivot)?.transform.position = centroid;
        for child in scene.get(self.pivot)?.children.clone() {
            scene.get_mut(child)?.transform.position -= delta;
        }
        Ok(())
    }
}

impl SelectionManager {
    /// Objects eligible for box selection: selectable scene roots plus
    /// current pivot members (so an additive box can re-hit them).
    fn hit_testable(&self, scene: &Scene) -> Vec<ObjectId> {
        let mut ids = Vec::new();
        for &id in scene.root_children() {
            if id == self.pivot {
                if let Ok(pivot) = scene.get(id) {
                    ids.extend(pivot.children.iter().copied());
                }
            } else if scene.get(id).map(|o| o.selectable).unwrap_or(false) {
                ids.push(id);
            }
        }
        ids
    }
}
