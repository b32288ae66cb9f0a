//! Typed input events delivered by the host shell.
//!
//! The host (windowing layer, DOM bridge, test harness) translates its raw
//! events into these types; the core never sees stringly-typed key codes.

use glam::Vec2;

/// Pointer button involved in an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

/// Modifier flags carried on an individual event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }
}

/// Where an event was aimed.
///
/// Pointer events are only routed when aimed at the rendering surface; key
/// events are dropped while a text input has focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventTarget {
    #[default]
    RenderSurface,
    TextInput,
    Other,
}

/// Keys the editor core reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    G,
    Q,
    V,
    W,
    X,
    Delete,
    ShiftLeft,
    ControlLeft,
    /// Any key the shortcut table does not care about.
    Other,
}

/// A pointer event (down, move, or up; the facade method carries the phase).
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub target: EventTarget,
    pub button: Option<PointerButton>,
    pub position: Vec2,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(button: Option<PointerButton>, position: Vec2) -> Self {
        Self {
            target: EventTarget::RenderSurface,
            button,
            position,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with_target(mut self, target: EventTarget) -> Self {
        self.target = target;
        self
    }
}

/// A keyboard event.
#[derive(Clone, Copy, Debug)]
pub struct KeyEvent {
    pub target: EventTarget,
    pub key: Key,
    pub modifiers: Modifiers,
    /// OS auto-repeat; one-shot shortcuts ignore repeats.
    pub repeat: bool,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self {
            target: EventTarget::Other,
            key,
            modifiers,
            repeat: false,
        }
    }

    pub fn with_target(mut self, target: EventTarget) -> Self {
        self.target = target;
        self
    }

    pub fn with_repeat(mut self) -> Self {
        self.repeat = true;
        self
    }
}

/// Modifier keys currently held, tracked across events.
///
/// Replaces a raw key-code→bool map: the only cross-event lookups the core
/// performs are for the left shift and left control keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeldModifiers {
    pub shift: bool,
    pub control: bool,
}

impl HeldModifiers {
    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    fn set(&mut self, key: Key, held: bool) {
        match key {
            Key::ShiftLeft => self.shift = held,
            Key::ControlLeft => self.control = held,
            _ => {}
        }
    }
}
