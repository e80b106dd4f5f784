#![allow(dead_code)]

use carousel::{GalleryMarkup, GalleryNodes, InstanceId, Page};
use dom::{Document, Id};

pub const WIDE: f32 = 1280.0;
pub const NARROW: f32 = 600.0;

pub fn page_with(markup: GalleryMarkup, viewport_width: f32) -> (Page, InstanceId, GalleryNodes) {
    let mut doc = Document::new();
    let nodes = markup.build(&mut doc);
    let mut page = Page::new(doc, viewport_width);
    let id = page.mount("gallery", Some("thumbs")).expect("gallery mounts");
    (page, id, nodes)
}

pub fn current_index(page: &Page, id: InstanceId) -> usize {
    page.carousel(id).expect("mounted").current_index()
}

pub fn flagged(page: &Page, ids: &[Id]) -> Vec<usize> {
    ids.iter()
        .enumerate()
        .filter(|(_, id)| page.document().has_class(**id, "current"))
        .map(|(i, _)| i)
        .collect()
}

pub fn icon_label(page: &Page, button: Id) -> String {
    let doc = page.document();
    let icon = doc.first_child(button).expect("icon");
    doc.text(icon).to_string()
}
