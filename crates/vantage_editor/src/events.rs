//! Outbound notifications to the UI collaborator.
//!
//! The core publishes typed state snapshots; the UI subscribes with a
//! closure and mirrors whatever the snapshot says. Dispatch is synchronous
//! and single-threaded: a snapshot is only built after the operation that
//! triggered it has fully completed.

use serde::Serialize;
use vantage_scene::ObjectId;

use crate::core::{EditorMode, SnapSettings, TransformTool};

/// Summary of one scene object, as shown in the UI's object list.
#[derive(Clone, Debug, Serialize)]
pub struct ObjectInfo {
    pub id: ObjectId,
    pub name: String,
    pub selected: bool,
    pub position: [f32; 3],
}

/// Full editor state snapshot carried on every notification.
#[derive(Clone, Debug, Serialize)]
pub struct EditorSnapshot {
    pub mode: EditorMode,
    pub tool: TransformTool,
    pub snap: SnapSettings,
    pub selected: Vec<ObjectId>,
    /// Selectable objects sorted by name then id, with selected-group
    /// members flattened out of the pivot node.
    pub objects: Vec<ObjectInfo>,
}

/// Events published to the UI layer.
#[derive(Clone, Debug, Serialize)]
pub enum EditorEvent {
    /// Selection, delete, duplicate, or paste changed the scene.
    StateChanged(EditorSnapshot),
    /// The active transform tool changed.
    ControlsChanged(EditorSnapshot),
}

impl EditorEvent {
    pub fn snapshot(&self) -> &EditorSnapshot {
        match self {
            EditorEvent::StateChanged(s) | EditorEvent::ControlsChanged(s) => s,
        }
    }
}

/// Handle for removing a subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

type Handler = Box<dyn FnMut(&EditorEvent)>;

/// Synchronous subscriber registry.
#[derive(Default)]
pub struct Subscribers {
    handlers: Vec<(SubscriberId, Handler)>,
    next_id: u64,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler; returns a handle for [`unsubscribe`](Self::unsubscribe).
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriberId
    where
        F: FnMut(&EditorEvent) + 'static,
    {
        self.next_id += 1;
        let id = SubscriberId(self.next_id);
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Remove a handler. Returns whether it was present.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != id);
        self.handlers.len() != before
    }

    /// Deliver an event to every subscriber, in subscription order.
    pub fn emit(&mut self, event: &EditorEvent) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn empty_snapshot() -> EditorSnapshot {
        EditorSnapshot {
            mode: EditorMode::Object,
            tool: TransformTool::Translate,
            snap: SnapSettings::disabled(),
            selected: Vec::new(),
            objects: Vec::new(),
        }
    }

    #[test]
    fn test_subscribe_and_emit() {
        let seen = Rc::new(RefCell::new(0));
        let mut subs = Subscribers::new();

        let counter = Rc::clone(&seen);
        subs.subscribe(move |_| *counter.borrow_mut() += 1);

        subs.emit(&EditorEvent::StateChanged(empty_snapshot()));
        subs.emit(&EditorEvent::ControlsChanged(empty_snapshot()));
        assert_eq!(*seen.borrow(), 2);
    }

    #[test]
    fn test_unsubscribe() {
        let seen = Rc::new(RefCell::new(0));
        let mut subs = Subscribers::new();

        let counter = Rc::clone(&seen);
        let id = subs.subscribe(move |_| *counter.borrow_mut() += 1);
        assert!(subs.unsubscribe(id));
        assert!(!subs.unsubscribe(id));

        subs.emit(&EditorEvent::StateChanged(empty_snapshot()));
        assert_eq!(*seen.borrow(), 0);
    }
}
