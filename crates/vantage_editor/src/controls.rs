//! Collaborator seams for the transform gizmo and the orbit camera.
//!
//! The concrete widgets live outside the core; these traits describe the
//! exact surface the core drives. Tests substitute recording doubles.

use glam::{Vec2, Vec3};
use vantage_scene::ObjectId;

use crate::core::TransformTool;
use crate::input::PointerButton;

/// Axis constraint for a gizmo drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GizmoAxis {
    X,
    Y,
    Z,
    XY,
    XZ,
    YZ,
    Free,
}

/// Pointer sample forwarded to the gizmo.
///
/// `button: None` marks a synthetic sample: the grab shortcut simulates a
/// drag without a physical button held.
#[derive(Clone, Copy, Debug)]
pub struct GizmoPointer {
    pub position: Vec2,
    pub button: Option<PointerButton>,
}

/// The on-screen manipulation handle.
pub trait TransformGizmo {
    /// Switch between translate/rotate/scale handles.
    fn set_mode(&mut self, tool: TransformTool);

    /// Constrain the next drag to an axis or plane.
    fn set_axis(&mut self, axis: GizmoAxis);

    /// Snap increments; `None` disables snapping for that channel.
    fn set_translation_snap(&mut self, snap: Option<f32>);
    /// Rotation snap in radians.
    fn set_rotation_snap(&mut self, snap: Option<f32>);
    fn set_scale_snap(&mut self, snap: Option<f32>);

    fn set_enabled(&mut self, enabled: bool);

    /// Whether a handle drag is in progress. Queried at pointer-down to
    /// route the gesture to transformation instead of selection.
    fn is_dragging(&self) -> bool;

    /// Bind the gizmo to a target object (the selection pivot).
    fn attach(&mut self, target: ObjectId);
    fn detach(&mut self);

    /// Pointer protocol, used to feed both real and synthetic drags.
    fn pointer_down(&mut self, pointer: GizmoPointer);
    fn pointer_move(&mut self, pointer: GizmoPointer);
}

/// The orbit/pan camera controller.
pub trait CameraRig {
    /// Pan speed; the intent resolver zeroes it while box-selecting or
    /// transforming so a drag cannot also pan.
    fn set_pan_speed(&mut self, speed: f32);

    /// Project a world position to screen coordinates; `None` when the
    /// point is behind the camera.
    fn project(&self, world: Vec3) -> Option<Vec2>;
}
