//! Memoized host queries.
//!
//! One inspection asks the host for the same computed values many times:
//! the aggregator, the inheritance filter, the variable resolver and the
//! motion extractor all read overlapping properties. [`CachedDocument`]
//! answers repeats from a per-element memo.

use std::cell::RefCell;
use std::collections::HashMap;

use cssscan::{Document, ScanError, Stylesheet};

type Key<N> = (N, String);

/// A [`Document`] wrapper caching `computed_value` and `matches` results.
///
/// Entries stay valid only while the page is unchanged; the owner calls
/// [`clear`](Self::clear) when the inspected element changes or the
/// viewport is resized.
#[derive(Debug)]
pub struct CachedDocument<D: Document> {
    inner: D,
    computed: RefCell<HashMap<Key<D::Node>, Option<String>>>,
    matched: RefCell<HashMap<Key<D::Node>, bool>>,
}

impl<D: Document> CachedDocument<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            computed: RefCell::new(HashMap::new()),
            matched: RefCell::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }

    /// Mutable access to the host. Clears the memo, since the caller may
    /// change what the host reports.
    pub fn inner_mut(&mut self) -> &mut D {
        self.clear();
        &mut self.inner
    }

    pub fn into_inner(self) -> D {
        self.inner
    }

    pub fn clear(&self) {
        self.computed.borrow_mut().clear();
        self.matched.borrow_mut().clear();
    }

    /// Number of memoized computed values.
    pub fn len(&self) -> usize {
        self.computed.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<D: Document> Document for CachedDocument<D> {
    type Node = D::Node;

    fn stylesheets(&self) -> Vec<Stylesheet> {
        self.inner.stylesheets()
    }

    fn matches(&self, node: &D::Node, selector: &str) -> Result<bool, ScanError> {
        let key = (node.clone(), selector.to_string());
        if let Some(hit) = self.matched.borrow().get(&key) {
            return Ok(*hit);
        }
        // Errors are not cached; the matcher logs and drops them.
        let result = self.inner.matches(node, selector)?;
        self.matched.borrow_mut().insert(key, result);
        Ok(result)
    }

    fn computed_value(&self, node: &D::Node, property: &str) -> Option<String> {
        let key = (node.clone(), property.to_string());
        if let Some(hit) = self.computed.borrow().get(&key) {
            return hit.clone();
        }
        let value = self.inner.computed_value(node, property);
        self.computed.borrow_mut().insert(key, value.clone());
        value
    }

    fn inline_style(&self, node: &D::Node) -> Vec<(String, String)> {
        self.inner.inline_style(node)
    }

    fn parent(&self, node: &D::Node) -> Option<D::Node> {
        self.inner.parent(node)
    }

    fn children(&self, node: &D::Node) -> Vec<D::Node> {
        self.inner.children(node)
    }

    fn tag_name(&self, node: &D::Node) -> String {
        self.inner.tag_name(node)
    }

    fn id(&self, node: &D::Node) -> Option<String> {
        self.inner.id(node)
    }

    fn classes(&self, node: &D::Node) -> Vec<String> {
        self.inner.classes(node)
    }

    fn condition_matches(&self, condition_text: &str) -> bool {
        self.inner.condition_matches(condition_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssscan::testing::FixtureDocument;

    #[test]
    fn repeats_are_served_from_the_memo() {
        let mut doc = FixtureDocument::new();
        doc.add_css("p { color: red; }");
        let para = doc.append(doc.root(), "p");
        let cached = CachedDocument::new(doc);

        assert_eq!(cached.computed_value(&para, "color").as_deref(), Some("red"));
        assert_eq!(cached.len(), 1);
        assert_eq!(cached.computed_value(&para, "color").as_deref(), Some("red"));
        assert_eq!(cached.len(), 1);

        cached.clear();
        assert!(cached.is_empty());
    }

    #[test]
    fn inner_mut_invalidates() {
        let mut doc = FixtureDocument::new();
        let para = doc.append(doc.root(), "p");
        let mut cached = CachedDocument::new(doc);

        assert_eq!(cached.computed_value(&para, "opacity").as_deref(), Some("1"));
        cached.inner_mut().set_computed(para, "opacity", "0.5");
        assert_eq!(cached.computed_value(&para, "opacity").as_deref(), Some("0.5"));
    }
}
