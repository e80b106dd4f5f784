//! # carousel
//!
//! Controller for an image carousel living inside a [`dom::Document`].
//!
//! A [`Carousel`] owns the state of one gallery: the current slide, the
//! playback interval, the controls auto-hide timeout, and the fullscreen /
//! captions / help flags. It is driven from the outside by two things only:
//! events reaching one of its listeners, and its own timers firing.
//! [`Page`] is the host that does both routing jobs for any number of
//! independent carousels sharing one document and one virtual clock.
//!
//! ## Interaction profiles
//!
//! - With a controls bar, buttons, keyboard shortcuts and pointer movement
//!   are wired at mount time.
//! - Without one, only [`Carousel::start`] and taps on the current image work.
//!   Taps are zoned by viewport width, see [`TapZone`].
//!
//! ```
//! use carousel::{GalleryMarkup, Page};
//! use dom::Document;
//!
//! let mut doc = Document::new();
//! GalleryMarkup::new("gallery", 3).build(&mut doc);
//!
//! let mut page = Page::new(doc, 1280.0);
//! let id = page.mount("gallery", None).expect("gallery markup present");
//! page.start(id);
//! page.advance(5000);
//!
//! assert_eq!(page.carousel(id).map(|c| c.current_index()), Some(1));
//! ```

mod config;
mod controller;
mod controls;
mod error;
mod layout;
mod markup;
mod modes;
pub mod names;
mod navigation;
mod page;
mod playback;
mod router;
mod state;

#[cfg(test)]
mod test_support;

pub use config::{CONTROLS_HIDE_DELAY_MS, CarouselConfig, ConfigError, DEFAULT_INTERVAL_MS};
pub use controller::{Carousel, Ctx, InstanceId};
pub use error::MountError;
pub use layout::{MOBILE_BREAKPOINT, TapZone, is_mobile_layout};
pub use markup::{ControlNodes, GalleryMarkup, GalleryNodes};
pub use page::Page;
pub use router::Shortcut;
