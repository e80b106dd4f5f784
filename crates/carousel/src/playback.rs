use crate::controller::{Carousel, Ctx};
use crate::controls::set_label;
use crate::names::label;

impl Carousel {
    /// Launch (or resume) auto-advance.
    ///
    /// The first call initializes the gallery in place; later calls advance one
    /// slide immediately. Either way the interval is (re)armed, replacing any
    /// interval already running.
    pub fn start(&mut self, cx: &mut Ctx<'_>) {
        if self.state.first_play {
            self.init(cx);
        } else {
            let index = self.next_index();
            self.set_image(index, cx);
        }

        self.state
            .playback
            .arm_interval(cx.timers, self.config.interval);
        if let Some(start) = self.controls.handles().map(|h| h.start) {
            set_label(cx.doc, start, label::STOP);
        }
        self.reveal_controls(cx);
        log::debug!(
            target: "carousel",
            "{:?}: playing every {}ms from slide {}",
            self.id,
            self.config.interval,
            self.state.cur_index
        );
    }

    fn init(&mut self, cx: &mut Ctx<'_>) {
        self.state.first_play = false;
        self.mark_current(cx.doc, self.state.cur_index, true);
        self.sync_tap_listener(cx.doc);
        self.update_image_counter(cx.doc);
    }

    pub(crate) fn stop(&mut self, cx: &mut Ctx<'_>) {
        if self.state.playback.cancel(cx.timers) {
            log::debug!(target: "carousel", "{:?}: stopped at slide {}", self.id, self.state.cur_index);
        }
        if let Some(start) = self.controls.handles().map(|h| h.start) {
            set_label(cx.doc, start, label::PLAY);
        }
    }

    pub(crate) fn toggle_play(&mut self, cx: &mut Ctx<'_>) {
        if self.state.is_playing() {
            self.stop(cx);
        } else {
            self.start(cx);
        }
    }

    pub(crate) fn on_playback_tick(&mut self, cx: &mut Ctx<'_>) {
        let index = self.next_index();
        self.set_image(index, cx);
        if self.config.play_once && self.state.cur_index == self.slides.len() - 1 {
            log::debug!(target: "carousel", "{:?}: reached last slide, play-once ends", self.id);
            self.stop(cx);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::GalleryMarkup;
    use crate::names::label;
    use crate::test_support::Harness;

    fn start_label(h: &Harness) -> String {
        let start = h.nodes.controls.expect("controls").start;
        let icon = h.doc().first_child(start).expect("icon");
        h.doc().text(icon).to_string()
    }

    #[test]
    fn first_start_initializes_without_advancing() {
        let mut h = Harness::new(GalleryMarkup::new("gallery", 3), 1280.0);
        assert!(h.current_slides().is_empty());

        h.with_cx(|c, cx| c.start(cx));
        assert!(!h.carousel().is_first_play());
        assert!(h.carousel().is_playing());
        assert_eq!(h.carousel().current_index(), 0);
        assert_eq!(h.current_slides(), vec![0]);
        assert_eq!(start_label(&h), label::STOP);
    }

    #[test]
    fn restart_advances_immediately() {
        let mut h = Harness::new(GalleryMarkup::new("gallery", 3), 1280.0);
        h.with_cx(|c, cx| c.start(cx));
        h.with_cx(|c, cx| c.toggle_play(cx));
        assert!(!h.carousel().is_playing());
        assert_eq!(start_label(&h), label::PLAY);

        h.with_cx(|c, cx| c.toggle_play(cx));
        assert!(h.carousel().is_playing());
        assert_eq!(h.carousel().current_index(), 1);
    }

    #[test]
    fn ticks_advance_and_wrap() {
        let mut h = Harness::new(
            GalleryMarkup::new("gallery", 3).with_data("interval", "1000"),
            1280.0,
        );
        h.with_cx(|c, cx| c.start(cx));

        h.advance(999);
        assert_eq!(h.carousel().current_index(), 0);
        h.advance(1);
        assert_eq!(h.carousel().current_index(), 1);
        h.advance(2000);
        assert_eq!(h.carousel().current_index(), 0);
        assert!(h.carousel().is_playing());
    }

    #[test]
    fn play_once_stops_on_the_last_slide() {
        let mut h = Harness::new(
            GalleryMarkup::new("gallery", 3).with_data("playOnce", "true"),
            1280.0,
        );
        h.with_cx(|c, cx| c.start(cx));

        h.advance(5000);
        assert_eq!(h.carousel().current_index(), 1);
        assert!(h.carousel().is_playing());

        h.advance(5000);
        assert_eq!(h.carousel().current_index(), 2);
        assert!(!h.carousel().is_playing());

        h.advance(20_000);
        assert_eq!(h.carousel().current_index(), 2);
    }

    #[test]
    fn starting_twice_keeps_one_interval() {
        let mut h = Harness::new(GalleryMarkup::new("gallery", 5), 1280.0);
        h.with_cx(|c, cx| c.start(cx));
        h.with_cx(|c, cx| c.start(cx));
        assert_eq!(h.carousel().current_index(), 1);

        h.advance(5000);
        assert_eq!(h.carousel().current_index(), 2);
    }

    #[test]
    fn stop_without_controls_only_clears_the_timer() {
        let mut h = Harness::new(
            GalleryMarkup::new("gallery", 2).with_controls(false),
            1280.0,
        );
        h.with_cx(|c, cx| c.start(cx));
        assert_eq!(h.pending_timers(), 1);
        h.with_cx(|c, cx| c.stop(cx));
        assert_eq!(h.pending_timers(), 0);
        assert!(!h.carousel().is_playing());
    }
}
