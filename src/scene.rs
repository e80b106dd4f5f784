//! Scripted headless sessions.
//!
//! A scene describes one gallery and a list of input steps. Running it mounts
//! the gallery on a fresh [`Page`] and replays the steps in order, logging the
//! carousel state after each one.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use carousel::{Carousel, GalleryMarkup, InstanceId, MountError, Page};
use core_types::{Key, Millis};
use dom::{Document, Event, Id};
use serde::Deserialize;

const GALLERY_CLASS: &str = "gallery";
const LINKS_CLASS: &str = "thumbs";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    pub gallery: GallerySpec,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GallerySpec {
    pub slides: usize,
    #[serde(default = "yes")]
    pub controls: bool,
    #[serde(default = "yes")]
    pub captions: bool,
    #[serde(default = "yes")]
    pub figures: bool,
    #[serde(default)]
    pub links: bool,
    /// Dataset entries for the carousel region, keyed in camelCase.
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Start,
    Advance { ms: Millis },
    Key { key: String },
    Click { button: Button },
    /// Press on the image currently listening for taps.
    Tap { x: f32 },
    PointerMove,
    Resize { width: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Button {
    Next,
    Prev,
    Start,
    Fullscreen,
    Captions,
    Help,
}

fn default_viewport_width() -> f32 {
    1280.0
}

fn yes() -> bool {
    true
}

#[derive(Debug)]
pub enum SceneError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Mount(MountError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Io { path, source } => {
                write!(f, "cannot read scene {}: {source}", path.display())
            }
            SceneError::Parse(err) => write!(f, "invalid scene: {err}"),
            SceneError::Mount(err) => write!(f, "cannot mount gallery: {err}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Io { source, .. } => Some(source),
            SceneError::Parse(err) => Some(err),
            SceneError::Mount(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for SceneError {
    fn from(err: toml::de::Error) -> Self {
        SceneError::Parse(err)
    }
}

impl From<MountError> for SceneError {
    fn from(err: MountError) -> Self {
        SceneError::Mount(err)
    }
}

impl Scene {
    pub fn parse(text: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let text = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    fn markup(&self) -> GalleryMarkup {
        let spec = &self.gallery;
        let mut markup = GalleryMarkup::new(GALLERY_CLASS, spec.slides)
            .with_controls(spec.controls)
            .with_captions_button(spec.captions)
            .with_figures(spec.figures);
        if spec.links {
            markup = markup.with_links(LINKS_CLASS);
        }
        for (key, value) in &spec.data {
            markup = markup.with_data(key, value);
        }
        markup
    }

    /// Mount the gallery and replay every step. The page is returned for
    /// inspection.
    pub fn run(&self) -> Result<Session, SceneError> {
        let mut doc = Document::new();
        self.markup().build(&mut doc);
        let mut page = Page::new(doc, self.viewport_width);
        let id = page.mount(GALLERY_CLASS, Some(LINKS_CLASS))?;

        let mut session = Session { page, id };
        for (n, step) in self.steps.iter().enumerate() {
            session.apply(step);
            log::info!(target: "slideshow", "step {n} {step:?}: {}", session.summary());
        }
        Ok(session)
    }
}

#[derive(Debug)]
pub struct Session {
    pub page: Page,
    pub id: InstanceId,
}

impl Session {
    pub fn carousel(&self) -> Option<&Carousel> {
        self.page.carousel(self.id)
    }

    fn apply(&mut self, step: &Step) {
        match step {
            Step::Start => {
                self.page.start(self.id);
            }
            Step::Advance { ms } => {
                let fired = self.page.advance(*ms);
                log::debug!(target: "slideshow", "{fired} timer(s) fired");
            }
            Step::Key { key } => {
                self.page.dispatch(Event::KeyDown {
                    key: Key::from_dom_key(key),
                });
            }
            Step::Click { button } => match self.button(*button) {
                Some(target) => {
                    self.page.dispatch(Event::Click { target });
                }
                None => log::warn!(target: "slideshow", "no {button:?} button in this gallery"),
            },
            Step::Tap { x } => match self.carousel().and_then(Carousel::tap_target) {
                Some(target) => {
                    self.page.dispatch(Event::PointerDown { target, x: *x, y: 0.0 });
                }
                None => log::warn!(target: "slideshow", "nothing listens for taps yet"),
            },
            Step::PointerMove => {
                self.page.dispatch(Event::PointerMove { x: 0.0, y: 0.0 });
            }
            Step::Resize { width } => self.page.set_viewport_width(*width),
        }
    }

    fn button(&self, button: Button) -> Option<Id> {
        use carousel::names::class;

        let name = match button {
            Button::Next => class::NEXT_BUTTON,
            Button::Prev => class::PREV_BUTTON,
            Button::Start => class::START_BUTTON,
            Button::Fullscreen => class::FULLSCREEN_BUTTON,
            Button::Captions => class::CAPTIONS_BUTTON,
            Button::Help => class::HELP_BUTTON,
        };
        let gallery = self.carousel()?.gallery();
        self.page.document().query_class(gallery, name)
    }

    pub fn summary(&self) -> String {
        let Some(c) = self.carousel() else {
            return "unmounted".to_string();
        };
        format!(
            "t={}ms slide {}/{} playing={} fullscreen={} captions={} help={}",
            self.page.now(),
            c.current_index() + 1,
            c.slide_count(),
            c.is_playing(),
            c.is_fullscreen(),
            c.is_captions(),
            c.is_help()
        )
    }
}
