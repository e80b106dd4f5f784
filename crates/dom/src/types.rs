pub type NodeId = u32;

/// Handle to an element inside a [`Document`](crate::Document).
///
/// Handles are only meaningful for the document that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(pub NodeId);

/// Handle to a registered event listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

#[derive(Clone, Debug)]
pub(crate) struct Element {
    pub tag: String,
    pub parent: Option<Id>,
    pub children: Vec<Id>,
    pub attributes: Vec<(String, Option<String>)>,
    pub classes: Vec<String>,
    pub text: String,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            parent: None,
            children: Vec::new(),
            attributes: Vec::new(),
            classes: Vec::new(),
            text: String::new(),
        }
    }
}
