//! Listener registry and dispatch order.
//!
//! Dispatch only computes *which* listeners an event reaches; invoking them is
//! the host's job. Targeted events bubble from the target through its
//! ancestors and finish at document-level listeners. Keyboard and pointer-move
//! events go to document-level listeners only.

use crate::{Document, Id, ListenerId};
use core_types::{EventKind, Key};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    Click { target: Id },
    KeyDown { key: Key },
    PointerDown { target: Id, x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Click { .. } => EventKind::Click,
            Event::KeyDown { .. } => EventKind::KeyDown,
            Event::PointerDown { .. } => EventKind::PointerDown,
            Event::PointerMove { .. } => EventKind::PointerMove,
        }
    }

    pub fn target(&self) -> Option<Id> {
        match self {
            Event::Click { target } | Event::PointerDown { target, .. } => Some(*target),
            Event::KeyDown { .. } | Event::PointerMove { .. } => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Document,
    Element(Id),
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Listener {
    pub id: ListenerId,
    pub target: ListenerTarget,
    pub kind: EventKind,
}

impl Document {
    pub fn add_event_listener(&mut self, target: ListenerTarget, kind: EventKind) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener = self.next_listener.wrapping_add(1);
        self.listeners.push(Listener { id, target, kind });
        log::trace!(target: "dom", "add listener {id:?} {kind:?} on {target:?}");
        id
    }

    /// Returns `false` if the listener was not registered.
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        let removed = self.listeners.len() != before;
        if removed {
            log::trace!(target: "dom", "remove listener {id:?}");
        }
        removed
    }

    pub fn is_listener_live(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|l| l.id == id)
    }

    pub fn has_listener(&self, target: ListenerTarget, kind: EventKind) -> bool {
        self.listeners
            .iter()
            .any(|l| l.target == target && l.kind == kind)
    }

    /// Elements currently carrying at least one listener of `kind`.
    pub fn listener_elements(&self, kind: EventKind) -> Vec<Id> {
        let mut out: Vec<Id> = self
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .filter_map(|l| match l.target {
                ListenerTarget::Element(id) => Some(id),
                ListenerTarget::Document => None,
            })
            .collect();
        out.sort();
        out.dedup();
        out
    }

    /// Listeners `event` reaches, in invocation order. An event aimed at an
    /// element this document never issued reaches nothing.
    pub fn dispatch(&self, event: &Event) -> Vec<ListenerId> {
        if let Some(target) = event.target()
            && !self.is_valid(target)
        {
            log::trace!(target: "dom", "dispatch to unknown {target:?} dropped");
            return Vec::new();
        }
        let kind = event.kind();
        let mut path: Vec<ListenerTarget> = event
            .target()
            .map(|t| {
                self.ancestors_inclusive(t)
                    .into_iter()
                    .map(ListenerTarget::Element)
                    .collect()
            })
            .unwrap_or_default();
        path.push(ListenerTarget::Document);

        let mut out = Vec::new();
        for target in path {
            out.extend(
                self.listeners
                    .iter()
                    .filter(|l| l.kind == kind && l.target == target)
                    .map(|l| l.id),
            );
        }
        out
    }
}
