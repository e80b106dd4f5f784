//! Builder for the gallery markup the controller expects.
//!
//! ```text
//! div.<gallery>
//!   div.js-image-carousel[data-*]
//!     div.slide > figure > (img, figcaption)      one per slide
//!   div.js-gallery-controls
//!     button.js-prev-button > span.icon
//!     button.js-next-button > span.icon
//!     button.js-start-button > span.icon
//!     button.js-fullscreen > span.icon
//!     button.js-display-captions > span.icon      optional
//!     button.js-display-help > span.icon
//! ul.<links> > li                                 optional, one per slide
//! ```

use crate::names::{class, label};
use dom::{Document, Id};

#[derive(Clone, Debug)]
pub struct GalleryMarkup {
    gallery_class: String,
    slides: usize,
    figures: bool,
    controls: bool,
    captions_button: bool,
    links_class: Option<String>,
    data: Vec<(String, String)>,
}

#[derive(Clone, Debug)]
pub struct GalleryNodes {
    pub gallery: Id,
    pub region: Id,
    pub slides: Vec<Id>,
    pub images: Vec<Id>,
    pub links: Vec<Id>,
    pub controls: Option<ControlNodes>,
}

#[derive(Clone, Copy, Debug)]
pub struct ControlNodes {
    pub container: Id,
    pub prev: Id,
    pub next: Id,
    pub start: Id,
    pub fullscreen: Id,
    pub captions: Option<Id>,
    pub help: Id,
}

impl GalleryMarkup {
    pub fn new(gallery_class: &str, slides: usize) -> Self {
        Self {
            gallery_class: gallery_class.to_string(),
            slides,
            figures: true,
            controls: true,
            captions_button: true,
            links_class: None,
            data: Vec::new(),
        }
    }

    /// Wrap each image in a `figure` with a caption (default) or place the
    /// `img` directly in the slide.
    pub fn with_figures(mut self, figures: bool) -> Self {
        self.figures = figures;
        self
    }

    pub fn with_controls(mut self, controls: bool) -> Self {
        self.controls = controls;
        self
    }

    pub fn with_captions_button(mut self, captions: bool) -> Self {
        self.captions_button = captions;
        self
    }

    /// Emit a parallel link list with this container class.
    pub fn with_links(mut self, links_class: &str) -> Self {
        self.links_class = Some(links_class.to_string());
        self
    }

    /// Set a dataset entry on the carousel region (`playOnce`, `interval`, ...).
    pub fn with_data(mut self, key: &str, value: &str) -> Self {
        self.data.push((key.to_string(), value.to_string()));
        self
    }

    pub fn build(&self, doc: &mut Document) -> GalleryNodes {
        let root = doc.root();
        let gallery = element(doc, root, "div", &self.gallery_class);
        let region = element(doc, gallery, "div", class::CAROUSEL_REGION);
        for (key, value) in &self.data {
            doc.set_data(region, key, value);
        }

        let mut slides = Vec::with_capacity(self.slides);
        let mut images = Vec::with_capacity(self.slides);
        for i in 0..self.slides {
            let slide = element(doc, region, "div", "slide");
            let holder = if self.figures {
                element(doc, slide, "figure", "")
            } else {
                slide
            };
            let img = element(doc, holder, "img", "");
            doc.set_attr(img, "src", Some(&format!("images/{:02}.jpg", i + 1)));
            if self.figures {
                let caption = element(doc, holder, "figcaption", "");
                doc.set_text(caption, &format!("Image {}", i + 1));
            }
            slides.push(slide);
            images.push(img);
        }

        let controls = self.controls.then(|| {
            let container = element(doc, gallery, "div", class::CONTROLS);
            let prev = button(doc, container, class::PREV_BUTTON, "chevron_left");
            let next = button(doc, container, class::NEXT_BUTTON, "chevron_right");
            let start = button(doc, container, class::START_BUTTON, label::PLAY);
            let fullscreen = button(doc, container, class::FULLSCREEN_BUTTON, label::FULLSCREEN);
            let captions = self
                .captions_button
                .then(|| button(doc, container, class::CAPTIONS_BUTTON, "subtitles"));
            let help = button(doc, container, class::HELP_BUTTON, "help");
            ControlNodes {
                container,
                prev,
                next,
                start,
                fullscreen,
                captions,
                help,
            }
        });

        let links = match &self.links_class {
            Some(links_class) => {
                let list = element(doc, root, "ul", links_class);
                (0..self.slides)
                    .map(|i| {
                        let item = element(doc, list, "li", "");
                        doc.set_text(item, &format!("{}", i + 1));
                        item
                    })
                    .collect()
            }
            None => Vec::new(),
        };

        GalleryNodes {
            gallery,
            region,
            slides,
            images,
            links,
            controls,
        }
    }
}

fn element(doc: &mut Document, parent: Id, tag: &str, class_attr: &str) -> Id {
    let id = doc.create_element(tag);
    if !class_attr.is_empty() {
        doc.set_attr(id, "class", Some(class_attr));
    }
    doc.append_child(parent, id);
    id
}

fn button(doc: &mut Document, parent: Id, class_attr: &str, icon_label: &str) -> Id {
    let id = element(doc, parent, "button", class_attr);
    let icon = element(doc, id, "span", "icon");
    doc.set_text(icon, icon_label);
    id
}
