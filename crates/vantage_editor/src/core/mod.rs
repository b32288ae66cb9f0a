//! Core interaction state: intent resolution, selection, clipboard.

mod clipboard;
mod intent;
mod selection;

pub use clipboard::{
    copy_selected, cut_selected, delete_selected, duplicate_selected, paste, Clipboard,
};
pub use intent::{Intent, IntentResolver};
pub use selection::SelectionManager;

use serde::Serialize;

/// Global editor mode. Only object mode carries behavior; edit mode is a
/// stored state reported to the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum EditorMode {
    #[default]
    Object,
    Edit,
}

/// Active transform tool, mirrored onto the gizmo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum TransformTool {
    #[default]
    Translate,
    Rotate,
    Scale,
}

impl TransformTool {
    pub fn name(&self) -> &'static str {
        match self {
            TransformTool::Translate => "translate",
            TransformTool::Rotate => "rotate",
            TransformTool::Scale => "scale",
        }
    }
}

/// Snap increments for gizmo operations; `None` means free movement on
/// that channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SnapSettings {
    /// Translation snap in world units.
    pub translate: Option<f32>,
    /// Rotation snap in degrees.
    pub rotate_degrees: Option<f32>,
    /// Scale snap step.
    pub scale: Option<f32>,
}

impl SnapSettings {
    /// The defaults applied by the enable-snapping shortcut.
    pub fn standard() -> Self {
        Self {
            translate: Some(15.0),
            rotate_degrees: Some(15.0),
            scale: Some(1.0),
        }
    }

    /// No snapping on any channel.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.translate.is_some() || self.rotate_degrees.is_some() || self.scale.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_settings() {
        assert!(!SnapSettings::disabled().is_enabled());

        let snap = SnapSettings::standard();
        assert!(snap.is_enabled());
        assert_eq!(snap.translate, Some(15.0));
        assert_eq!(snap.rotate_degrees, Some(15.0));
        assert_eq!(snap.scale, Some(1.0));
    }
}
