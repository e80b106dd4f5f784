//! Input routing: which listener or timer maps to which transition.

use crate::controller::{Carousel, Ctx};
use crate::layout::{TapZone, is_mobile_layout};
use core_types::{EventKind, Key};
use dom::{Document, Event, ListenerId, ListenerTarget};
use timers::TimerId;

/// What a registered listener does when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Binding {
    Next,
    Prev,
    TogglePlay,
    ToggleFullscreen,
    ToggleHelp,
    ToggleCaptions,
    Keyboard,
    PointerMove,
    MobileTap,
}

/// Keyboard shortcut of the desktop profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    Next,
    Prev,
    TogglePlay,
    ToggleFullscreen,
    ToggleHelp,
    ToggleCaptions,
}

impl Shortcut {
    /// `i` only maps to captions when a captions control exists.
    pub fn from_key(key: Key, captions_available: bool) -> Option<Self> {
        match key {
            Key::ArrowRight => Some(Shortcut::Next),
            Key::ArrowLeft => Some(Shortcut::Prev),
            Key::Space => Some(Shortcut::TogglePlay),
            Key::Char('f') => Some(Shortcut::ToggleFullscreen),
            Key::Char('h') => Some(Shortcut::ToggleHelp),
            Key::Char('i') if captions_available => Some(Shortcut::ToggleCaptions),
            _ => None,
        }
    }
}

impl Carousel {
    /// Button clicks, document keydown and document pointer-move. Only wired
    /// when a controls bar exists.
    pub(crate) fn wire_desktop(&mut self, doc: &mut Document) {
        let Some(handles) = self.controls.handles().copied() else {
            return;
        };

        let clicks = [
            (handles.next, Binding::Next),
            (handles.prev, Binding::Prev),
            (handles.start, Binding::TogglePlay),
            (handles.fullscreen, Binding::ToggleFullscreen),
            (handles.help, Binding::ToggleHelp),
        ];
        for (button, binding) in clicks {
            self.bind(doc, ListenerTarget::Element(button), EventKind::Click, binding);
        }
        if let Some(captions) = handles.captions {
            self.bind(
                doc,
                ListenerTarget::Element(captions),
                EventKind::Click,
                Binding::ToggleCaptions,
            );
        }

        self.bind(doc, ListenerTarget::Document, EventKind::KeyDown, Binding::Keyboard);
        self.bind(
            doc,
            ListenerTarget::Document,
            EventKind::PointerMove,
            Binding::PointerMove,
        );
    }

    pub(crate) fn bind(
        &mut self,
        doc: &mut Document,
        target: ListenerTarget,
        kind: EventKind,
        binding: Binding,
    ) -> ListenerId {
        let listener = doc.add_event_listener(target, kind);
        self.bindings.push((listener, binding));
        listener
    }

    pub(crate) fn unbind(&mut self, doc: &mut Document, listener: ListenerId) {
        doc.remove_event_listener(listener);
        self.bindings.retain(|(id, _)| *id != listener);
    }

    pub fn owns_listener(&self, listener: ListenerId) -> bool {
        self.bindings.iter().any(|(id, _)| *id == listener)
    }

    pub fn owns_timer(&self, timer: TimerId) -> bool {
        self.state.playback.holds(timer) || self.state.controls_hide.holds(timer)
    }

    /// Run the transition bound to `listener`. Returns `false` if the listener
    /// is not ours.
    pub(crate) fn handle_listener(
        &mut self,
        listener: ListenerId,
        event: &Event,
        cx: &mut Ctx<'_>,
    ) -> bool {
        let Some(binding) = self
            .bindings
            .iter()
            .find(|(id, _)| *id == listener)
            .map(|(_, binding)| *binding)
        else {
            return false;
        };

        match (binding, event) {
            (Binding::Next, _) => self.next(cx),
            (Binding::Prev, _) => self.prev(cx),
            (Binding::TogglePlay, _) => self.toggle_play(cx),
            (Binding::ToggleFullscreen, _) => self.toggle_fullscreen(cx),
            (Binding::ToggleHelp, _) => self.toggle_help(cx),
            (Binding::ToggleCaptions, _) => self.toggle_captions(cx),
            (Binding::Keyboard, Event::KeyDown { key }) => self.on_key(*key, cx),
            (Binding::PointerMove, _) => self.reveal_controls(cx),
            (Binding::MobileTap, Event::PointerDown { x, .. }) => self.on_tap(*x, cx),
            (binding, event) => {
                log::trace!(target: "carousel", "{binding:?} ignores {event:?}");
            }
        }
        true
    }

    /// Run the transition for a timer that just fired. Returns `false` if the
    /// timer is not ours.
    pub(crate) fn handle_timer(&mut self, timer: TimerId, cx: &mut Ctx<'_>) -> bool {
        if self.state.playback.holds(timer) {
            self.on_playback_tick(cx);
            true
        } else if self.state.controls_hide.take_fired(timer) {
            self.on_controls_hide(cx);
            true
        } else {
            false
        }
    }

    fn on_key(&mut self, key: Key, cx: &mut Ctx<'_>) {
        self.reveal_controls(cx);
        match Shortcut::from_key(key, self.controls.has_captions()) {
            Some(Shortcut::Next) => self.next(cx),
            Some(Shortcut::Prev) => self.prev(cx),
            Some(Shortcut::TogglePlay) => self.toggle_play(cx),
            Some(Shortcut::ToggleFullscreen) => self.toggle_fullscreen(cx),
            Some(Shortcut::ToggleHelp) => self.toggle_help(cx),
            Some(Shortcut::ToggleCaptions) => self.toggle_captions(cx),
            None => {}
        }
    }

    fn on_tap(&mut self, x: f32, cx: &mut Ctx<'_>) {
        if !is_mobile_layout(cx.viewport_width) {
            return;
        }
        match TapZone::classify(x, cx.viewport_width) {
            TapZone::Prev => self.prev(cx),
            TapZone::Next => self.next(cx),
            TapZone::Center => self.toggle_fullscreen(cx),
        }
    }
}
