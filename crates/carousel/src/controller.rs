use crate::config::CarouselConfig;
use crate::controls::Controls;
use crate::error::MountError;
use crate::names::class;
use crate::router::Binding;
use crate::state::CarouselState;
use dom::{Document, Id, ListenerId};
use timers::TimerQueue;

/// Index of a carousel within its [`Page`](crate::Page).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InstanceId(pub u32);

/// Everything a transition may touch outside the carousel itself.
pub struct Ctx<'a> {
    pub doc: &'a mut Document,
    pub timers: &'a mut TimerQueue,
    pub viewport_width: f32,
}

impl<'a> Ctx<'a> {
    pub fn new(doc: &'a mut Document, timers: &'a mut TimerQueue, viewport_width: f32) -> Self {
        Self {
            doc,
            timers,
            viewport_width,
        }
    }
}

/// One gallery's controller.
///
/// Created by [`Carousel::mount`], launched by [`Carousel::start`]. Every other
/// transition is reached through the listeners and timers it registers.
#[derive(Debug)]
pub struct Carousel {
    pub(crate) id: InstanceId,
    pub(crate) config: CarouselConfig,
    pub(crate) gallery: Id,
    pub(crate) region: Id,
    pub(crate) slides: Vec<Id>,
    pub(crate) links: Option<Vec<Id>>,
    pub(crate) controls: Controls,
    pub(crate) state: CarouselState,
    pub(crate) bindings: Vec<(ListenerId, Binding)>,
}

impl Carousel {
    /// Resolve the gallery markup and wire the desktop profile.
    ///
    /// Fails without touching the document when the gallery container, its
    /// `.js-image-carousel` region or any slide is missing. Missing optional
    /// pieces (links list, controls bar, captions button) just disable the
    /// features that need them.
    pub fn mount(
        id: InstanceId,
        doc: &mut Document,
        gallery_class: &str,
        links_class: Option<&str>,
    ) -> Result<Self, MountError> {
        let root = doc.root();
        let gallery =
            doc.query_class(root, gallery_class)
                .ok_or_else(|| MountError::MissingGallery {
                    class: gallery_class.to_string(),
                })?;
        let region = doc
            .query_class(gallery, class::CAROUSEL_REGION)
            .ok_or(MountError::MissingCarouselRegion)?;
        let slides = doc.children(region).to_vec();
        if slides.is_empty() {
            return Err(MountError::NoSlides);
        }

        let links = links_class.and_then(|name| match doc.query_class(root, name) {
            Some(list) => Some(doc.children(list).to_vec()),
            None => {
                log::debug!(target: "carousel", "links container {name:?} not found; links disabled");
                None
            }
        });
        if let Some(links) = &links
            && links.len() != slides.len()
        {
            log::warn!(
                target: "carousel",
                "links list has {} entries for {} slides",
                links.len(),
                slides.len()
            );
        }

        let config = CarouselConfig::from_dataset(|key| doc.dataset(region, key));
        let controls = Controls::resolve(doc, gallery);

        let mut carousel = Self {
            id,
            config,
            gallery,
            region,
            slides,
            links,
            controls,
            state: CarouselState::default(),
            bindings: Vec::new(),
        };
        carousel.wire_desktop(doc);

        log::debug!(
            target: "carousel",
            "{id:?}: mounted {} slides, interval={}ms play_once={} counter={} controls={}",
            carousel.slides.len(),
            carousel.config.interval,
            carousel.config.play_once,
            carousel.config.image_counter,
            carousel.has_controls()
        );
        Ok(carousel)
    }

    // -- Read-only accessors ---

    pub fn instance(&self) -> InstanceId {
        self.id
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn gallery(&self) -> Id {
        self.gallery
    }

    pub fn region(&self) -> Id {
        self.region
    }

    pub fn slides(&self) -> &[Id] {
        &self.slides
    }

    pub fn links(&self) -> Option<&[Id]> {
        self.links.as_deref()
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn current_index(&self) -> usize {
        self.state.cur_index
    }

    pub fn is_first_play(&self) -> bool {
        self.state.first_play
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.state.fullscreen
    }

    pub fn is_captions(&self) -> bool {
        self.state.captions
    }

    pub fn is_help(&self) -> bool {
        self.state.help
    }

    pub fn has_controls(&self) -> bool {
        self.controls.handles().is_some()
    }

    /// `true` while the controls are shown with a hide pending.
    pub fn controls_hide_pending(&self) -> bool {
        self.state.controls_hide.is_armed()
    }

    /// Image currently carrying the zoned-tap listener.
    pub fn tap_target(&self) -> Option<Id> {
        self.state.mobile_tap.map(|tap| tap.image)
    }

    pub(crate) fn next_index(&self) -> usize {
        (self.state.cur_index + 1) % self.slides.len()
    }

    pub(crate) fn prev_index(&self) -> usize {
        let n = self.slides.len();
        (self.state.cur_index + n - 1) % n
    }
}
