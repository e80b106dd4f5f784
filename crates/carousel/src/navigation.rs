use crate::controller::{Carousel, Ctx};
use crate::names::class;
use crate::router::Binding;
use crate::state::MobileTap;
use core_types::EventKind;
use dom::{Document, ListenerTarget};

impl Carousel {
    /// Move the `current` flag (slide and link) to `new_index`, then follow
    /// with the tap listener and the counter.
    pub(crate) fn set_image(&mut self, new_index: usize, cx: &mut Ctx<'_>) {
        debug_assert!(
            new_index < self.slides.len(),
            "slide index {new_index} out of range for {} slides",
            self.slides.len()
        );
        let old_index = self.state.cur_index;
        self.mark_current(cx.doc, old_index, false);
        self.state.cur_index = new_index;
        self.mark_current(cx.doc, new_index, true);
        log::debug!(target: "carousel", "{:?}: slide {old_index} -> {new_index}", self.id);

        self.sync_tap_listener(cx.doc);
        self.update_image_counter(cx.doc);
    }

    pub(crate) fn next(&mut self, cx: &mut Ctx<'_>) {
        self.stop(cx);
        let index = self.next_index();
        self.set_image(index, cx);
    }

    pub(crate) fn prev(&mut self, cx: &mut Ctx<'_>) {
        self.stop(cx);
        let index = self.prev_index();
        self.set_image(index, cx);
    }

    pub(crate) fn mark_current(&self, doc: &mut Document, index: usize, current: bool) {
        let slide = self.slides.get(index).copied();
        let link = self
            .links
            .as_ref()
            .and_then(|links| links.get(index).copied());
        for id in slide.into_iter().chain(link) {
            if current {
                doc.add_class(id, class::CURRENT);
            } else {
                doc.remove_class(id, class::CURRENT);
            }
        }
    }

    /// Prepend `"n / total"` to the current slide's counter region (its first
    /// `figure`, else the slide). Never creates a second counter.
    pub(crate) fn update_image_counter(&self, doc: &mut Document) {
        if !self.config.image_counter {
            return;
        }
        let slide = self.slides[self.state.cur_index];
        let holder = doc.query_tag(slide, "figure").unwrap_or(slide);
        if doc.query_class(holder, class::IMAGE_COUNTER).is_some() {
            return;
        }

        let counter = doc.create_element("div");
        doc.add_class(counter, class::IMAGE_COUNTER);
        doc.set_text(
            counter,
            &format!("{} / {}", self.state.cur_index + 1, self.slides.len()),
        );
        doc.prepend_child(holder, counter);
    }

    /// Keep exactly one pointer-down listener, on the current slide's image.
    pub(crate) fn sync_tap_listener(&mut self, doc: &mut Document) {
        let image = doc.query_tag(self.slides[self.state.cur_index], "img");
        if let Some(bound) = self.state.mobile_tap {
            if Some(bound.image) == image {
                return;
            }
            self.unbind(doc, bound.listener);
            self.state.mobile_tap = None;
        }

        match image {
            Some(image) => {
                let listener = self.bind(
                    doc,
                    ListenerTarget::Element(image),
                    EventKind::PointerDown,
                    Binding::MobileTap,
                );
                self.state.mobile_tap = Some(MobileTap { image, listener });
            }
            None => {
                log::trace!(
                    target: "carousel",
                    "{:?}: slide {} has no img; taps disabled on it",
                    self.id,
                    self.state.cur_index
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::GalleryMarkup;
    use crate::names::class;
    use crate::test_support::Harness;
    use core_types::EventKind;

    #[test]
    fn set_image_moves_current_on_slides_and_links() {
        let mut h = Harness::new(GalleryMarkup::new("gallery", 4).with_links("thumbs"), 1280.0);
        h.with_cx(|c, cx| c.set_image(2, cx));

        assert_eq!(h.carousel().current_index(), 2);
        assert_eq!(h.current_slides(), vec![2]);
        assert_eq!(h.current_links(), vec![2]);

        h.with_cx(|c, cx| c.set_image(3, cx));
        assert_eq!(h.current_slides(), vec![3]);
        assert_eq!(h.current_links(), vec![3]);
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let mut h = Harness::new(GalleryMarkup::new("gallery", 3), 1280.0);
        h.with_cx(|c, cx| c.start(cx));

        h.with_cx(|c, cx| c.prev(cx));
        assert_eq!(h.carousel().current_index(), 2);
        h.with_cx(|c, cx| c.next(cx));
        assert_eq!(h.carousel().current_index(), 0);
        assert_eq!(h.current_slides(), vec![0]);
    }

    #[test]
    fn manual_navigation_stops_playback() {
        let mut h = Harness::new(GalleryMarkup::new("gallery", 3), 1280.0);
        h.with_cx(|c, cx| c.start(cx));
        assert!(h.carousel().is_playing());

        h.with_cx(|c, cx| c.next(cx));
        assert!(!h.carousel().is_playing());
        assert_eq!(h.pending_timers(), 1, "only the controls hide remains");
        assert!(h.carousel().controls_hide_pending());
    }

    #[test]
    fn counter_is_created_once_per_slide() {
        let mut h = Harness::new(GalleryMarkup::new("gallery", 3), 1280.0);
        h.with_cx(|c, cx| c.start(cx));
        h.with_cx(|c, cx| c.update_image_counter(cx.doc));
        h.with_cx(|c, cx| c.update_image_counter(cx.doc));

        let slide = h.carousel().slides()[0];
        let counters = h.doc().query_all_class(slide, class::IMAGE_COUNTER);
        assert_eq!(counters.len(), 1);
        assert_eq!(h.doc().text(counters[0]), "1 / 3");

        let figure = h.doc().query_tag(slide, "figure").expect("figure");
        assert_eq!(h.doc().first_child(figure), Some(counters[0]));
    }

    #[test]
    fn counter_goes_into_slide_without_figure() {
        let mut h = Harness::new(
            GalleryMarkup::new("gallery", 2).with_figures(false),
            1280.0,
        );
        h.with_cx(|c, cx| c.set_image(1, cx));

        let slide = h.carousel().slides()[1];
        let counter = h.doc().first_child(slide).expect("counter");
        assert!(h.doc().has_class(counter, class::IMAGE_COUNTER));
        assert_eq!(h.doc().text(counter), "2 / 2");
    }

    #[test]
    fn disabled_counter_creates_nothing() {
        let mut h = Harness::new(
            GalleryMarkup::new("gallery", 2).with_data("imageCounter", "false"),
            1280.0,
        );
        h.with_cx(|c, cx| c.start(cx));
        h.with_cx(|c, cx| c.next(cx));
        assert!(h.doc().query_all_class(h.carousel().region(), class::IMAGE_COUNTER).is_empty());
    }

    #[test]
    fn tap_listener_follows_the_current_image() {
        let mut h = Harness::new(GalleryMarkup::new("gallery", 3), 600.0);
        h.with_cx(|c, cx| c.start(cx));
        assert_eq!(h.doc().listener_elements(EventKind::PointerDown), vec![h.nodes.images[0]]);

        h.with_cx(|c, cx| c.set_image(1, cx));
        assert_eq!(h.doc().listener_elements(EventKind::PointerDown), vec![h.nodes.images[1]]);
        assert_eq!(h.carousel().tap_target(), Some(h.nodes.images[1]));

        h.with_cx(|c, cx| c.prev(cx));
        h.with_cx(|c, cx| c.prev(cx));
        assert_eq!(h.doc().listener_elements(EventKind::PointerDown), vec![h.nodes.images[2]]);
    }
}
