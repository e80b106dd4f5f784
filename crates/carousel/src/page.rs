use crate::controller::{Carousel, Ctx, InstanceId};
use crate::error::MountError;
use core_types::Millis;
use dom::{Document, Event};
use timers::TimerQueue;

/// Host for carousels sharing one document, one clock and one viewport.
///
/// The page plays the part of the browser event loop: events and timer
/// firings are delivered one at a time, each running to completion.
#[derive(Debug)]
pub struct Page {
    pub(crate) doc: Document,
    pub(crate) timers: TimerQueue,
    pub(crate) viewport_width: f32,
    pub(crate) carousels: Vec<Carousel>,
}

impl Page {
    pub fn new(doc: Document, viewport_width: f32) -> Self {
        Self {
            doc,
            timers: TimerQueue::new(),
            viewport_width,
            carousels: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn now(&self) -> Millis {
        self.timers.now()
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    /// Layout is re-evaluated on every event, so resizing takes effect on the
    /// next tap.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    pub fn mount(
        &mut self,
        gallery_class: &str,
        links_class: Option<&str>,
    ) -> Result<InstanceId, MountError> {
        let id = InstanceId(self.carousels.len() as u32);
        let carousel = Carousel::mount(id, &mut self.doc, gallery_class, links_class)?;
        self.carousels.push(carousel);
        Ok(id)
    }

    pub fn carousel(&self, id: InstanceId) -> Option<&Carousel> {
        self.carousels.get(id.0 as usize)
    }

    pub fn carousels(&self) -> &[Carousel] {
        &self.carousels
    }

    /// Launch a mounted carousel. Returns `false` for an unknown instance.
    pub fn start(&mut self, id: InstanceId) -> bool {
        self.with_carousel(id, |carousel, cx| carousel.start(cx))
            .is_some()
    }

    pub(crate) fn with_carousel<R>(
        &mut self,
        id: InstanceId,
        f: impl FnOnce(&mut Carousel, &mut Ctx<'_>) -> R,
    ) -> Option<R> {
        let Page {
            doc,
            timers,
            viewport_width,
            carousels,
        } = self;
        let carousel = carousels.get_mut(id.0 as usize)?;
        let mut cx = Ctx::new(doc, timers, *viewport_width);
        Some(f(carousel, &mut cx))
    }

    /// Deliver `event` to every listener it reaches. Listeners removed by an
    /// earlier handler in the same dispatch are skipped. Returns the number of
    /// listeners that ran.
    pub fn dispatch(&mut self, event: Event) -> usize {
        let reached = self.doc.dispatch(&event);
        let mut handled = 0;
        for listener in reached {
            if !self.doc.is_listener_live(listener) {
                continue;
            }
            let Page {
                doc,
                timers,
                viewport_width,
                carousels,
            } = self;
            let Some(carousel) = carousels.iter_mut().find(|c| c.owns_listener(listener)) else {
                continue;
            };
            let mut cx = Ctx::new(doc, timers, *viewport_width);
            if carousel.handle_listener(listener, &event, &mut cx) {
                handled += 1;
            }
        }
        handled
    }

    /// Move the clock forward by `ms`, firing due timers in order. Returns the
    /// number of timers that fired.
    pub fn advance(&mut self, ms: Millis) -> usize {
        let until = self.timers.now().saturating_add(ms);
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(until) {
            fired += 1;
            let Page {
                doc,
                timers,
                viewport_width,
                carousels,
            } = self;
            match carousels.iter_mut().find(|c| c.owns_timer(timer)) {
                Some(carousel) => {
                    let mut cx = Ctx::new(doc, timers, *viewport_width);
                    carousel.handle_timer(timer, &mut cx);
                }
                None => log::trace!(target: "carousel.timers", "{timer:?} has no owner"),
            }
        }
        self.timers.settle(until);
        fired
    }
}
