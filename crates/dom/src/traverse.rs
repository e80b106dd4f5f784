use crate::{Document, Id};

/// Pre-order iterator over the descendants of a scope element, excluding the
/// scope itself.
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<Id>,
}

impl Iterator for Descendants<'_> {
    type Item = Id;

    fn next(&mut self) -> Option<Id> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}

impl Document {
    pub fn descendants(&self, scope: Id) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: self.children(scope).iter().rev().copied().collect(),
        }
    }

    /// First descendant of `scope` in document order carrying `class`.
    pub fn query_class(&self, scope: Id, class: &str) -> Option<Id> {
        self.descendants(scope).find(|id| self.has_class(*id, class))
    }

    /// First descendant of `scope` in document order with tag `tag`.
    pub fn query_tag(&self, scope: Id, tag: &str) -> Option<Id> {
        self.descendants(scope)
            .find(|id| self.tag(*id).eq_ignore_ascii_case(tag))
    }

    pub fn query_all_class(&self, scope: Id, class: &str) -> Vec<Id> {
        self.descendants(scope)
            .filter(|id| self.has_class(*id, class))
            .collect()
    }

    /// `id` followed by each of its ancestors up to the root.
    pub fn ancestors_inclusive(&self, id: Id) -> Vec<Id> {
        let mut out = vec![id];
        let mut cur = id;
        while let Some(parent) = self.parent(cur) {
            out.push(parent);
            cur = parent;
        }
        out
    }

    pub fn contains(&self, ancestor: Id, node: Id) -> bool {
        self.ancestors_inclusive(node).contains(&ancestor)
    }
}

#[cfg(test)]
mod tests {
    use crate::Document;

    #[test]
    fn queries_follow_document_order() {
        let mut doc = Document::new();
        let root = doc.root();
        let outer = doc.create_element("section");
        let first = doc.create_element("div");
        let nested = doc.create_element("div");
        let second = doc.create_element("div");
        doc.append_child(root, outer);
        doc.append_child(outer, first);
        doc.append_child(first, nested);
        doc.append_child(outer, second);
        for id in [first, nested, second] {
            doc.add_class(id, "slide");
        }
        let img = doc.create_element("img");
        doc.append_child(second, img);

        assert_eq!(doc.query_class(root, "slide"), Some(first));
        assert_eq!(doc.query_all_class(root, "slide"), vec![first, nested, second]);
        assert_eq!(doc.query_tag(outer, "IMG"), Some(img));
        assert_eq!(doc.query_tag(first, "img"), None);
    }

    #[test]
    fn query_excludes_the_scope_itself() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.append_child(doc.root(), div);
        doc.add_class(div, "current");

        assert_eq!(doc.query_class(div, "current"), None);
        assert_eq!(doc.query_class(doc.root(), "current"), Some(div));
    }

    #[test]
    fn ancestors_walk_up_to_root() {
        let mut doc = Document::new();
        let a = doc.create_element("div");
        let b = doc.create_element("span");
        doc.append_child(doc.root(), a);
        doc.append_child(a, b);

        assert_eq!(doc.ancestors_inclusive(b), vec![b, a, doc.root()]);
        assert!(doc.contains(a, b));
        assert!(!doc.contains(b, a));
    }
}
