//! Clipboard and duplication over the scene graph.
//!
//! Deep-clone semantics come from the scene crate's ownership policy:
//! geometry stays shared, materials and textures are copied per duplicate.
//! Cut works on detached-but-alive nodes; copy snapshots references and
//! clones them at paste time, so every paste of a copy is independent.
//!
//! The operations take the scene, selection, and clipboard directly so
//! they unit-test without the facade; the facade wraps them and owns the
//! UI notifications.

use vantage_scene::{ObjectId, Scene, SceneResult};

use super::selection::SelectionManager;

/// Ordered clipboard of object references (copy) or detached handles (cut).
#[derive(Clone, Debug, Default)]
pub struct Clipboard {
    entries: Vec<ObjectId>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ObjectId] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn set(&mut self, entries: Vec<ObjectId>) {
        self.entries = entries;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Duplicate every selected object in one batch; the new clones become the
/// selection. Returns the clone ids; empty when nothing was selected (the
/// caller must not notify the UI in that case).
pub fn duplicate_selected(
    scene: &mut Scene,
    selection: &mut SelectionManager,
) -> SceneResult<Vec<ObjectId>> {
    let collection = selection.collection().to_vec();
    if collection.is_empty() {
        return Ok(Vec::new());
    }

    selection.deselect_all(scene)?;

    let mut clones = Vec::with_capacity(collection.len());
    for id in collection {
        let clone = scene.duplicate(id)?;
        scene.place_at_root(clone)?;
        selection.add_to_collection(scene, clone)?;
        clones.push(clone);
    }

    selection.select_from_collection(scene)?;
    log::info!("duplicated {} object(s)", clones.len());
    Ok(clones)
}

/// Deselect and detach every selected object, returning the detached
/// collection (cut builds its clipboard from it). The caller notifies the
/// UI even when the collection is empty.
pub fn delete_selected(
    scene: &mut Scene,
    selection: &mut SelectionManager,
) -> SceneResult<Vec<ObjectId>> {
    let collection = selection.collection().to_vec();
    for &id in &collection {
        selection.deselect_object(scene, id)?;
        scene.detach(id)?;
    }
    if !collection.is_empty() {
        log::info!("deleted {} object(s)", collection.len());
    }
    Ok(collection)
}

/// Snapshot the current selection into the clipboard. No cloning happens
/// at copy time.
pub fn copy_selected(selection: &SelectionManager, clipboard: &mut Clipboard) {
    clipboard.set(selection.collection().to_vec());
}

/// Cut: the clipboard becomes the detached result of a delete.
pub fn cut_selected(
    scene: &mut Scene,
    selection: &mut SelectionManager,
    clipboard: &mut Clipboard,
) -> SceneResult<()> {
    let detached = delete_selected(scene, selection)?;
    clipboard.set(detached);
    Ok(())
}

/// Paste the clipboard as the new selection. No-op when empty.
///
/// Entries still attached to the scene were copies: they are cloned (the
/// clone remembers the source's parent as `parent_previous`) and stay in
/// the clipboard so a repeated paste stamps further independent clones.
/// Detached entries were cut: they are reinserted as-is, exactly once.
pub fn paste(
    scene: &mut Scene,
    selection: &mut SelectionManager,
    clipboard: &mut Clipboard,
) -> SceneResult<Vec<ObjectId>> {
    if clipboard.is_empty() {
        return Ok(Vec::new());
    }

    selection.deselect_all(scene)?;

    let entries = clipboard.entries().to_vec();
    selection.set_collection(entries.clone());
    selection.update_center_position(scene)?;

    let mut pasted = Vec::with_capacity(entries.len());
    let mut retained = Vec::new();
    for id in entries {
        let object = if scene.is_in_scene(id) {
            let source_parent = scene.get(id)?.parent;
            let clone = scene.duplicate(id)?;
            scene.attach(selection.pivot(), clone)?;
            scene.get_mut(clone)?.parent_previous = source_parent;
            retained.push(id);
            clone
        } else {
            scene.attach(selection.pivot(), id)?;
            id
        };
        scene.get_mut(object)?.selected = true;
        pasted.push(object);
    }

    selection.set_collection(pasted.clone());
    selection.update_center_position(scene)?;
    clipboard.set(retained);

    log::info!("pasted {} object(s)", pasted.len());
    Ok(pasted)
}
