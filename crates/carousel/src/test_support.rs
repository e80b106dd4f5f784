use crate::controller::{Carousel, Ctx, InstanceId};
use crate::names::class;
use crate::{GalleryMarkup, GalleryNodes, Page};
use core_types::Millis;
use dom::{Document, Event};

/// One gallery mounted on a fresh page. Links are mounted when the markup
/// emitted a `thumbs` list.
pub(crate) struct Harness {
    pub page: Page,
    pub id: InstanceId,
    pub nodes: GalleryNodes,
}

impl Harness {
    pub fn new(markup: GalleryMarkup, viewport_width: f32) -> Self {
        let mut doc = Document::new();
        let nodes = markup.build(&mut doc);
        let mut page = Page::new(doc, viewport_width);
        let id = page
            .mount("gallery", Some("thumbs"))
            .expect("fixture markup mounts");
        Self { page, id, nodes }
    }

    pub fn carousel(&self) -> &Carousel {
        self.page.carousel(self.id).expect("mounted")
    }

    pub fn doc(&self) -> &Document {
        self.page.document()
    }

    pub fn pending_timers(&self) -> usize {
        self.page.timers().pending_count()
    }

    pub fn with_cx<R>(&mut self, f: impl FnOnce(&mut Carousel, &mut Ctx<'_>) -> R) -> R {
        self.page.with_carousel(self.id, f).expect("mounted")
    }

    pub fn advance(&mut self, ms: Millis) -> usize {
        self.page.advance(ms)
    }

    pub fn dispatch(&mut self, event: Event) -> usize {
        self.page.dispatch(event)
    }

    pub fn current_slides(&self) -> Vec<usize> {
        flagged(self.doc(), self.carousel().slides())
    }

    pub fn current_links(&self) -> Vec<usize> {
        flagged(self.doc(), self.carousel().links().unwrap_or_default())
    }
}

fn flagged(doc: &Document, ids: &[dom::Id]) -> Vec<usize> {
    ids.iter()
        .enumerate()
        .filter(|(_, id)| doc.has_class(**id, class::CURRENT))
        .map(|(i, _)| i)
        .collect()
}
