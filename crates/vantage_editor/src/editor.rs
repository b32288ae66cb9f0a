//! The editor facade: input routing, modal state, and UI notifications.
//!
//! Owns the scene, selection, clipboard, and intent resolver, plus boxed
//! collaborator controls. Raw input comes in through the `handle_*`
//! methods; state snapshots go out through the subscriber registry.

use glam::Vec2;
use thiserror::Error;
use vantage_scene::{ObjectId, Scene, SceneError};

use crate::controls::{CameraRig, GizmoAxis, GizmoPointer, TransformGizmo};
use crate::core::{
    self, Clipboard, EditorMode, Intent, IntentResolver, SelectionManager, SnapSettings,
    TransformTool,
};
use crate::events::{EditorEvent, EditorSnapshot, ObjectInfo, SubscriberId, Subscribers};
use crate::input::{EventTarget, HeldModifiers, Key, KeyEvent, PointerButton, PointerEvent};

/// Editor-level errors.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Scene(#[from] SceneError),
}

pub type EditorResult<T> = Result<T, EditorError>;

/// Pan speed applied while camera panning is allowed.
const PAN_SPEED_ACTIVE: f32 = 1.0;

/// The interaction core's entry point.
pub struct Editor {
    scene: Scene,
    selection: SelectionManager,
    clipboard: Clipboard,
    intent: IntentResolver,

    gizmo: Box<dyn TransformGizmo>,
    camera: Box<dyn CameraRig>,
    subscribers: Subscribers,

    mode: EditorMode,
    tool: TransformTool,
    snap: SnapSettings,
    held: HeldModifiers,

    /// Last pointer position, fed to the gizmo for synthetic drags.
    pointer: Vec2,
    /// Master input gate; nothing routes while inactive.
    active: bool,
}

impl Editor {
    pub fn new(gizmo: Box<dyn TransformGizmo>, camera: Box<dyn CameraRig>) -> Self {
        let mut scene = Scene::new();
        let selection = SelectionManager::new(&mut scene);

        let mut editor = Self {
            scene,
            selection,
            clipboard: Clipboard::new(),
            intent: IntentResolver::new(),
            gizmo,
            camera,
            subscribers: Subscribers::new(),
            mode: EditorMode::Object,
            tool: TransformTool::Translate,
            snap: SnapSettings::disabled(),
            held: HeldModifiers::default(),
            pointer: Vec2::ZERO,
            active: true,
        };
        editor.gizmo.set_mode(editor.tool);
        editor
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn intent(&self) -> Intent {
        self.intent.intent()
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    pub fn tool(&self) -> TransformTool {
        self.tool
    }

    pub fn snap(&self) -> SnapSettings {
        self.snap
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn subscribe<F>(&mut self, handler: F) -> SubscriberId
    where
        F: FnMut(&EditorEvent) + 'static,
    {
        self.subscribers.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // ------------------------------------------------------------------
    // Pointer routing
    // ------------------------------------------------------------------

    pub fn handle_pointer_down(&mut self, event: &PointerEvent) {
        if !self.accepts_pointer(event) {
            return;
        }

        let intent = self.intent.pointer_down(event.button, self.gizmo.is_dragging());
        match intent {
            Intent::Select => {
                self.selection.pointer_down(event.position);
                self.camera.set_pan_speed(0.0);
            }
            Intent::Transform => {
                self.gizmo.set_enabled(true);
                self.camera.set_pan_speed(0.0);
            }
            Intent::PanCamera => {
                self.gizmo.set_enabled(false);
                self.camera.set_pan_speed(PAN_SPEED_ACTIVE);
            }
            // Entered only via the grab shortcut, never at pointer-down.
            Intent::TransformHover => {}
        }
    }

    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        if !self.accepts_pointer(event) {
            return;
        }
        self.pointer = event.position;

        match self.intent.intent() {
            Intent::Select => self.selection.pointer_move(event.position),
            Intent::TransformHover => self.gizmo.pointer_move(GizmoPointer {
                position: event.position,
                button: None,
            }),
            _ => {}
        }
    }

    pub fn handle_pointer_up(&mut self, event: &PointerEvent) {
        if !self.accepts_pointer(event) {
            return;
        }

        match self.intent.intent() {
            Intent::Select => {
                self.selection.pointer_up(&self.scene, self.camera.as_ref());
                let additive = self.held.shift;
                if let Err(e) = self.selection.select(&mut self.scene, None, additive) {
                    log::warn!("box selection commit failed: {e}");
                }
                self.intent.settle_select();
                self.attach_controls();
                self.notify_state();
            }
            Intent::PanCamera => {
                self.gizmo.set_enabled(true);
                self.intent.reset_after_pan();
            }
            _ => {}
        }
    }

    fn accepts_pointer(&self, event: &PointerEvent) -> bool {
        self.active && event.target == EventTarget::RenderSurface
    }

    // ------------------------------------------------------------------
    // Keyboard routing
    // ------------------------------------------------------------------

    pub fn handle_key_down(&mut self, event: &KeyEvent) {
        if !self.accepts_key(event) || event.repeat {
            return;
        }

        let shift = event.modifiers.shift;
        let ctrl = event.modifiers.ctrl;
        match event.key {
            Key::G => self.begin_grab(),
            Key::E => self.set_tool(TransformTool::Rotate),
            Key::W => self.set_tool(TransformTool::Scale),
            Key::Q => self.set_tool(TransformTool::Translate),
            Key::A if shift => self.set_snap(SnapSettings::standard()),
            Key::A if ctrl => self.set_snap(SnapSettings::disabled()),
            Key::D if shift => self.duplicate_selected(),
            Key::B if shift => {
                self.duplicate_selected();
                self.begin_grab();
            }
            Key::Delete => {
                self.delete_selected();
            }
            Key::C if ctrl => self.copy_selected(),
            Key::X if ctrl => self.cut_selected(),
            Key::V if ctrl => self.paste_selected(),
            _ => {}
        }
        self.held.press(event.key);
    }

    pub fn handle_key_up(&mut self, event: &KeyEvent) {
        if !self.accepts_key(event) {
            return;
        }
        self.held.release(event.key);

        // Releasing left control drops snapping, even though Shift+A
        // enabled it. Asymmetric on purpose.
        if event.key == Key::ControlLeft {
            self.set_snap(SnapSettings::disabled());
        }
    }

    fn accepts_key(&self, event: &KeyEvent) -> bool {
        self.active && event.target != EventTarget::TextInput
    }

    // ------------------------------------------------------------------
    // Inbound picking events
    // ------------------------------------------------------------------

    /// A picking collaborator reported a click-selected object. The nil id
    /// is the explicit deselect-all sentinel; an unknown id is an error.
    pub fn select_object(&mut self, id: ObjectId, additive: bool) -> EditorResult<()> {
        if !id.is_nil() && !self.scene.contains(id) {
            return Err(SceneError::InvalidReference(id).into());
        }
        self.selection.select(&mut self.scene, Some(id), additive)?;
        self.notify_state();
        Ok(())
    }

    // ------------------------------------------------------------------
    // Clipboard operations
    // ------------------------------------------------------------------

    /// Duplicate the selection; the clones become the new selection.
    /// Silent no-op (no notification) when nothing is selected.
    pub fn duplicate_selected(&mut self) {
        match core::duplicate_selected(&mut self.scene, &mut self.selection) {
            Ok(clones) if clones.is_empty() => {}
            Ok(_) => self.notify_state(),
            Err(e) => log::error!("duplicate failed: {e}"),
        }
    }

    /// Delete the selection, returning the detached collection.
    /// Notifies the UI even when the selection was empty.
    pub fn delete_selected(&mut self) -> Vec<ObjectId> {
        let detached = match core::delete_selected(&mut self.scene, &mut self.selection) {
            Ok(detached) => detached,
            Err(e) => {
                log::error!("delete failed: {e}");
                Vec::new()
            }
        };
        self.gizmo.detach();
        self.notify_state();
        detached
    }

    pub fn copy_selected(&mut self) {
        core::copy_selected(&self.selection, &mut self.clipboard);
    }

    pub fn cut_selected(&mut self) {
        let detached = self.delete_selected();
        self.clipboard.set(detached);
    }

    /// Paste the clipboard as the new selection. No-op when empty.
    pub fn paste_selected(&mut self) {
        if self.clipboard.is_empty() {
            return;
        }
        match core::paste(&mut self.scene, &mut self.selection, &mut self.clipboard) {
            Ok(_) => {
                self.attach_controls();
                self.notify_state();
            }
            Err(e) => log::error!("paste failed: {e}"),
        }
    }

    // ------------------------------------------------------------------
    // Tools, snapping, grab
    // ------------------------------------------------------------------

    /// Switch the active transform tool and mirror it onto the gizmo.
    pub fn set_tool(&mut self, tool: TransformTool) {
        self.tool = tool;
        self.gizmo.set_mode(tool);
        self.notify_controls();
    }

    pub fn set_snap(&mut self, snap: SnapSettings) {
        self.snap = snap;
        self.gizmo.set_translation_snap(snap.translate);
        self.gizmo
            .set_rotation_snap(snap.rotate_degrees.map(f32::to_radians));
        self.gizmo.set_scale_snap(snap.scale);
    }

    /// Begin a grab: translate tool, transform-hover intent, and a
    /// synthetic gizmo drag on the view plane so the selection follows
    /// the pointer without a held button.
    pub fn begin_grab(&mut self) {
        self.set_tool(TransformTool::Translate);
        self.intent.begin_transform_hover();
        self.gizmo.set_axis(GizmoAxis::XY);
        self.gizmo.pointer_down(GizmoPointer {
            position: self.pointer,
            button: Some(PointerButton::Left),
        });
    }

    /// Attach the gizmo to the pivot while it has members; otherwise reset
    /// the pivot's orientation and detach.
    fn attach_controls(&mut self) {
        let pivot = self.selection.pivot();
        let has_members = self
            .scene
            .get(pivot)
            .map(|p| !p.children.is_empty())
            .unwrap_or(false);

        if has_members {
            self.gizmo.attach(pivot);
        } else {
            if let Ok(pivot_object) = self.scene.get_mut(pivot) {
                pivot_object.transform.reset_orientation();
            }
            self.gizmo.detach();
        }
    }

    // ------------------------------------------------------------------
    // Snapshots and notifications
    // ------------------------------------------------------------------

    /// Selectable objects for the UI list: scene roots with pivot members
    /// flattened in, sorted by name then id.
    pub fn scene_children(&self) -> Vec<ObjectId> {
        let pivot = self.selection.pivot();
        let mut ids: Vec<ObjectId> = Vec::new();

        for &id in self.scene.root_children() {
            if id == pivot {
                if let Ok(pivot_object) = self.scene.get(id) {
                    ids.extend(pivot_object.children.iter().copied());
                }
            } else if self
                .scene
                .get(id)
                .map(|o| o.selectable)
                .unwrap_or(false)
            {
                ids.push(id);
            }
        }

        ids.sort_by(|&a, &b| {
            let name_a = self.scene.get(a).map(|o| o.display_name()).unwrap_or("");
            let name_b = self.scene.get(b).map(|o| o.display_name()).unwrap_or("");
            name_a.cmp(name_b).then_with(|| a.0.cmp(&b.0))
        });
        ids
    }

    /// Build the full state snapshot delivered with every notification.
    pub fn snapshot(&self) -> EditorSnapshot {
        let objects = self
            .scene_children()
            .into_iter()
            .filter_map(|id| {
                let object = self.scene.get(id).ok()?;
                let position = self.scene.world_position(id).ok()?;
                Some(ObjectInfo {
                    id,
                    name: object.display_name().to_string(),
                    selected: object.selected,
                    position: position.to_array(),
                })
            })
            .collect();

        EditorSnapshot {
            mode: self.mode,
            tool: self.tool,
            snap: self.snap,
            selected: self.selection.collection().to_vec(),
            objects,
        }
    }

    fn notify_state(&mut self) {
        let event = EditorEvent::StateChanged(self.snapshot());
        self.subscribers.emit(&event);
    }

    fn notify_controls(&mut self) {
        let event = EditorEvent::ControlsChanged(self.snapshot());
        self.subscribers.emit(&event);
    }
}
