//! # dom
//!
//! A small, deterministic element tree standing in for a browser document.
//!
//! It models exactly what widget controllers need from a page:
//! - ordered element children with parent links
//! - class lists (`add`/`remove`/`toggle`/`contains`)
//! - attributes and `data-*` lookups through [`Document::dataset`]
//! - descendant queries by class or tag
//! - an event listener registry with bubbling dispatch
//!
//! There is no parser and no layout. Trees are built programmatically.

mod document;
mod events;
mod traverse;
mod types;

pub use document::Document;
pub use events::{Event, ListenerTarget};
pub use traverse::Descendants;
pub use types::{Id, ListenerId, NodeId};
