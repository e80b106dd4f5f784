use crate::events::Listener;
use crate::types::{Element, Id};

/// An element arena rooted at a synthetic `#document` node.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Element>,
    pub(crate) listeners: Vec<Listener>,
    pub(crate) next_listener: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("#document")],
            listeners: Vec::new(),
            next_listener: 1,
        }
    }

    pub fn root(&self) -> Id {
        Id(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Whether `id` was issued by this document.
    pub fn is_valid(&self, id: Id) -> bool {
        (id.0 as usize) < self.nodes.len()
    }

    pub(crate) fn node(&self, id: Id) -> &Element {
        &self.nodes[id.0 as usize]
    }

    fn node_mut(&mut self, id: Id) -> &mut Element {
        &mut self.nodes[id.0 as usize]
    }

    // -- Tree construction ---

    /// Create a detached element. Attach it with [`append_child`](Self::append_child)
    /// or [`prepend_child`](Self::prepend_child).
    pub fn create_element(&mut self, tag: &str) -> Id {
        let id = Id(self.nodes.len() as u32);
        self.nodes.push(Element::new(tag));
        id
    }

    pub fn append_child(&mut self, parent: Id, child: Id) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    pub fn prepend_child(&mut self, parent: Id, child: Id) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.insert(0, child);
    }

    /// Remove `id` from its parent's child list. The element stays in the arena.
    pub fn detach(&mut self, id: Id) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != id);
        }
    }

    // -- Structure ---

    pub fn tag(&self, id: Id) -> &str {
        &self.node(id).tag
    }

    pub fn parent(&self, id: Id) -> Option<Id> {
        self.node(id).parent
    }

    pub fn children(&self, id: Id) -> &[Id] {
        &self.node(id).children
    }

    pub fn first_child(&self, id: Id) -> Option<Id> {
        self.node(id).children.first().copied()
    }

    // -- Text ---

    pub fn text(&self, id: Id) -> &str {
        &self.node(id).text
    }

    pub fn set_text(&mut self, id: Id, text: &str) {
        let node = self.node_mut(id);
        node.text.clear();
        node.text.push_str(text);
    }

    // -- Attributes ---

    /// Set an attribute. `class` is split into the element's class list.
    pub fn set_attr(&mut self, id: Id, name: &str, value: Option<&str>) {
        let node = self.node_mut(id);
        if name.eq_ignore_ascii_case("class") {
            node.classes.clear();
            for class in value.unwrap_or_default().split_whitespace() {
                if !node.classes.iter().any(|c| c == class) {
                    node.classes.push(class.to_string());
                }
            }
            return;
        }

        let value = value.map(str::to_string);
        match node
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = value,
            None => node.attributes.push((name.to_ascii_lowercase(), value)),
        }
    }

    /// Attribute lookup. Value-less attributes read as `""`.
    pub fn attr(&self, id: Id, name: &str) -> Option<&str> {
        self.node(id)
            .attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    /// `element.dataset[key]`: `playOnce` reads `data-play-once`.
    pub fn dataset(&self, id: Id, key: &str) -> Option<&str> {
        self.attr(id, &dataset_attr_name(key))
    }

    pub fn set_data(&mut self, id: Id, key: &str, value: &str) {
        let name = dataset_attr_name(key);
        self.set_attr(id, &name, Some(value));
    }

    // -- Class list ---

    pub fn has_class(&self, id: Id, class: &str) -> bool {
        self.node(id).classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, id: Id, class: &str) {
        if !self.has_class(id, class) {
            self.node_mut(id).classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: Id, class: &str) {
        self.node_mut(id).classes.retain(|c| c != class);
    }

    /// Returns `true` when the class is present after the call.
    pub fn toggle_class(&mut self, id: Id, class: &str) -> bool {
        if self.has_class(id, class) {
            self.remove_class(id, class);
            false
        } else {
            self.node_mut(id).classes.push(class.to_string());
            true
        }
    }

    pub fn class_name(&self, id: Id) -> String {
        self.node(id).classes.join(" ")
    }
}

fn dataset_attr_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 8);
    out.push_str("data-");
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
