//! Pointer intent resolution.
//!
//! A small state machine deciding, per pointer gesture, whether input goes
//! to selection, the transform gizmo, or camera panning. All transitions
//! happen in [`IntentResolver::pointer_down`] or through the explicit grab
//! shortcut; camera panning is the one transient state, restored from the
//! previous slot at pointer-up.

use crate::input::PointerButton;

/// The active interpretation of an in-progress pointer gesture.
///
/// Exactly one intent is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Intent {
    /// Box or click selection.
    #[default]
    Select,
    /// A gizmo handle drag.
    Transform,
    /// Simulated gizmo drag without a held button (grab shortcut).
    TransformHover,
    /// Middle/right-button camera pan. Transient: never recorded as the
    /// restore target.
    PanCamera,
}

/// Resolves pointer-downs to an intent and tracks the restore slot for
/// transient pans.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntentResolver {
    intent: Intent,
    previous: Intent,
}

impl IntentResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn previous(&self) -> Intent {
        self.previous
    }

    /// Resolve a pointer-down. Strict priority order:
    ///
    /// 1. default-reset to `Select` (soft: restore slot untouched),
    /// 2. an active gizmo drag wins and becomes `Transform`,
    /// 3. otherwise middle/right button becomes a transient `PanCamera`.
    ///
    /// The order makes a simultaneous gizmo drag and pan button
    /// unambiguous: transformation always wins.
    pub fn pointer_down(&mut self, button: Option<PointerButton>, gizmo_dragging: bool) -> Intent {
        let before = self.intent;
        self.intent = Intent::Select;

        if gizmo_dragging {
            self.intent = Intent::Transform;
            self.previous = Intent::Transform;
        } else if matches!(
            button,
            Some(PointerButton::Middle) | Some(PointerButton::Right)
        ) {
            self.intent = Intent::PanCamera;
            // Record the pre-pan intent so pointer-up can restore it; a pan
            // chained onto a pan keeps the earlier restore target.
            if before != Intent::PanCamera {
                self.previous = before;
            }
        }

        self.intent
    }

    /// Enter the simulated-drag state via the grab shortcut.
    pub fn begin_transform_hover(&mut self) {
        self.intent = Intent::TransformHover;
        self.previous = Intent::TransformHover;
    }

    /// Restore the pre-pan intent at pointer-up. Only valid while panning;
    /// any other call is a routing bug.
    pub fn reset_after_pan(&mut self) {
        debug_assert_eq!(
            self.intent,
            Intent::PanCamera,
            "reset_after_pan outside a pan gesture"
        );
        self.intent = self.previous;
    }

    /// Hard-set after a committed selection so later pans restore to it.
    pub fn settle_select(&mut self) {
        self.intent = Intent::Select;
        self.previous = Intent::Select;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_select() {
        let mut resolver = IntentResolver::new();
        assert_eq!(resolver.pointer_down(Some(PointerButton::Left), false), Intent::Select);
    }

    #[test]
    fn test_gizmo_drag_wins_over_pan_button() {
        let mut resolver = IntentResolver::new();
        // Both conditions at once: the priority order picks Transform.
        let intent = resolver.pointer_down(Some(PointerButton::Middle), true);
        assert_eq!(intent, Intent::Transform);
    }

    #[test]
    fn test_middle_and_right_buttons_pan() {
        let mut resolver = IntentResolver::new();
        assert_eq!(
            resolver.pointer_down(Some(PointerButton::Middle), false),
            Intent::PanCamera
        );
        resolver.reset_after_pan();
        assert_eq!(
            resolver.pointer_down(Some(PointerButton::Right), false),
            Intent::PanCamera
        );
    }

    #[test]
    fn test_pan_round_trip_restores_pre_pan_intent() {
        for (setup, expected) in [
            (Intent::Select, Intent::Select),
            (Intent::Transform, Intent::Transform),
            (Intent::TransformHover, Intent::TransformHover),
        ] {
            let mut resolver = IntentResolver::new();
            match setup {
                Intent::Transform => {
                    resolver.pointer_down(Some(PointerButton::Left), true);
                }
                Intent::TransformHover => resolver.begin_transform_hover(),
                _ => resolver.settle_select(),
            }
            assert_eq!(resolver.intent(), setup);

            resolver.pointer_down(Some(PointerButton::Middle), false);
            assert_eq!(resolver.intent(), Intent::PanCamera);

            resolver.reset_after_pan();
            assert_eq!(resolver.intent(), expected);
        }
    }

    #[test]
    fn test_chained_pan_keeps_restore_target() {
        let mut resolver = IntentResolver::new();
        resolver.begin_transform_hover();

        resolver.pointer_down(Some(PointerButton::Middle), false);
        // Second pan before the first reset (e.g. button switch mid-pan).
        resolver.pointer_down(Some(PointerButton::Right), false);
        resolver.reset_after_pan();

        assert_eq!(resolver.intent(), Intent::TransformHover);
    }
}
