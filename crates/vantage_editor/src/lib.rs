//! Vantage Editor Interaction Core
//!
//! The input-routing and object-graph mutation layer of a 3D scene editor.
//! Per pointer or keyboard event it decides which manipulation mode is
//! active (box selection, gizmo transform, camera panning, or a keyboard
//! shortcut) and performs the selection, duplication, and clipboard
//! mutations those modes require.
//!
//! ## Architecture
//!
//! ```text
//! Input event → Editor (facade) → IntentResolver
//!                               → SelectionManager / gizmo / camera
//!                               → outbound EditorEvent to subscribers
//! ```
//!
//! Rendering, the concrete transform gizmo, and the orbit camera are
//! collaborators behind the [`TransformGizmo`] and [`CameraRig`] traits;
//! the UI layer consumes [`EditorEvent`] snapshots and has no compile-time
//! coupling to this crate's internals.
//!
//! Everything runs synchronously on one thread. Operations that touch the
//! scene in several steps (duplicate-then-select, paste) notify subscribers
//! only after the whole operation has completed.

pub mod controls;
pub mod core;
pub mod events;
pub mod input;

mod editor;

// Re-export commonly used types
pub use controls::{CameraRig, GizmoAxis, GizmoPointer, TransformGizmo};
pub use core::{
    Clipboard, EditorMode, Intent, IntentResolver, SelectionManager, SnapSettings, TransformTool,
};
pub use editor::{Editor, EditorError, EditorResult};
pub use events::{EditorEvent, EditorSnapshot, ObjectInfo, SubscriberId, Subscribers};
pub use input::{EventTarget, Key, KeyEvent, Modifiers, PointerButton, PointerEvent};

/// Editor core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
