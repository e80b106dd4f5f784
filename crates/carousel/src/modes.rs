use crate::config::CONTROLS_HIDE_DELAY_MS;
use crate::controller::{Carousel, Ctx};
use crate::controls::set_label;
use crate::names::{class, label};

impl Carousel {
    pub(crate) fn toggle_fullscreen(&mut self, cx: &mut Ctx<'_>) {
        cx.doc.toggle_class(self.gallery, class::FULLSCREEN);
        self.state.fullscreen = !self.state.fullscreen;
        if let Some(button) = self.controls.handles().map(|h| h.fullscreen) {
            let text = if self.state.fullscreen {
                label::FULLSCREEN_EXIT
            } else {
                label::FULLSCREEN
            };
            set_label(cx.doc, button, text);
        }
    }

    /// No-op unless the controls bar has a captions button.
    pub(crate) fn toggle_captions(&mut self, cx: &mut Ctx<'_>) {
        if !self.controls.has_captions() {
            return;
        }
        cx.doc.toggle_class(self.region, class::SHOW_CAPTIONS);
        self.state.captions = !self.state.captions;
    }

    pub(crate) fn toggle_help(&mut self, cx: &mut Ctx<'_>) {
        cx.doc.toggle_class(self.gallery, class::SHOW_HELP);
        self.state.help = !self.state.help;
    }

    /// Show the controls and restart the single hide countdown.
    pub(crate) fn reveal_controls(&mut self, cx: &mut Ctx<'_>) {
        if self.controls.handles().is_none() {
            return;
        }
        cx.doc.add_class(self.gallery, class::SHOW_CONTROLS);
        self.state
            .controls_hide
            .arm_timeout(cx.timers, CONTROLS_HIDE_DELAY_MS);
    }

    /// Hiding the controls also hides help, so `is_help` is cleared to keep
    /// mirroring the `show-help` class.
    pub(crate) fn on_controls_hide(&mut self, cx: &mut Ctx<'_>) {
        cx.doc.remove_class(self.gallery, class::SHOW_CONTROLS);
        cx.doc.remove_class(self.gallery, class::SHOW_HELP);
        self.state.help = false;
        log::trace!(target: "carousel", "{:?}: controls hidden", self.id);
    }
}
