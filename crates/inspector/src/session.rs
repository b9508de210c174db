//! The inspection session.
//!
//! An [`Inspector`] is the explicit context for one scanner session: the
//! host document (behind a [`CachedDocument`] memo), the current
//! [`StylesheetIndex`], the user's [`Settings`] and the pointer
//! [`FrameThrottle`]. Nothing is global; two sessions never share state.

use std::sync::Arc;

use cssscan::report::format_block;
use cssscan::{Document, Inspection, StylesheetIndex, collect, inspect};

use crate::memo::CachedDocument;
use crate::settings::Settings;
use crate::throttle::FrameThrottle;

/// The result of inspecting one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<N> {
    pub node: N,
    pub inspection: Inspection,
    /// Descendants in document order, when children were requested.
    pub children: Vec<Inspection>,
    /// Descendants left out because of the child limit.
    pub truncated: usize,
    /// Whether [`block`](Self::block) renders optimized declarations.
    pub optimized: bool,
}

impl<N> Report<N> {
    /// The element's block followed by one block per inspected descendant.
    pub fn block(&self) -> String {
        let mut blocks = vec![self.inspection.block(self.optimized)];
        blocks.extend(
            self.children
                .iter()
                .filter(|child| !child.properties.is_empty())
                .map(|child| child.block(self.optimized)),
        );
        blocks.join("\n\n")
    }

    /// Renders only the given properties of the element, e.g. a single
    /// copied row.
    pub fn block_for(&self, properties: &[&str]) -> String {
        let source = if self.optimized {
            &self.inspection.optimized
        } else {
            &self.inspection.properties
        };
        let picked: Vec<_> = source
            .iter()
            .filter(|p| properties.contains(&p.prop.as_str()))
            .cloned()
            .collect();
        format_block(&self.inspection.selector, &picked)
    }
}

/// A scanner session over one document.
pub struct Inspector<D: Document> {
    document: CachedDocument<D>,
    index: Arc<StylesheetIndex>,
    settings: Settings,
    current: Option<D::Node>,
    throttle: FrameThrottle<D::Node>,
}

impl<D: Document> Inspector<D> {
    /// Starts a session and builds the first index.
    pub fn new(document: D, settings: Settings) -> Self {
        let document = CachedDocument::new(document);
        let index = Arc::new(collect(&document));
        Self {
            document,
            index,
            settings,
            current: None,
            throttle: FrameThrottle::new(),
        }
    }

    pub fn document(&self) -> &D {
        self.document.inner()
    }

    /// Mutable access to the host document. Cached values are dropped; call
    /// [`rebuild_index`](Self::rebuild_index) after changing stylesheets.
    pub fn document_mut(&mut self) -> &mut D {
        self.document.inner_mut()
    }

    /// Ends the session and hands the host document back.
    pub fn into_document(self) -> D {
        self.document.into_inner()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// The current index snapshot. A later rebuild does not affect it.
    pub fn index(&self) -> Arc<StylesheetIndex> {
        Arc::clone(&self.index)
    }

    /// Re-reads every stylesheet into a fresh index.
    pub fn rebuild_index(&mut self) {
        self.document.clear();
        self.index = Arc::new(collect(&self.document));
        log::debug!(
            "inspector: index rebuilt with {} rules ({} unreadable sheets)",
            self.index.rules.len(),
            self.index.unreadable.len()
        );
    }

    /// Media conditions may have flipped; results from the old index are stale.
    pub fn on_viewport_resize(&mut self) {
        self.rebuild_index();
    }

    /// The element last inspected.
    pub fn current(&self) -> Option<&D::Node> {
        self.current.as_ref()
    }

    /// Records a pointer target. Returns `true` when the host must request
    /// an animation frame.
    pub fn hover(&mut self, node: D::Node) -> bool {
        self.throttle.schedule(node)
    }

    /// Runs the inspection for the latest hovered target, if any arrived
    /// since the last frame.
    pub fn on_frame(&mut self) -> Option<Report<D::Node>> {
        let node = self.throttle.take_frame()?;
        Some(self.inspect(&node))
    }

    /// Drops any pending hover target.
    pub fn pause(&mut self) {
        self.throttle.cancel();
    }

    pub fn throttle(&self) -> &FrameThrottle<D::Node> {
        &self.throttle
    }

    /// Inspects `node` immediately, bypassing the throttle.
    pub fn inspect(&mut self, node: &D::Node) -> Report<D::Node> {
        if self.current.as_ref() != Some(node) {
            self.document.clear();
            self.current = Some(node.clone());
        }

        let filters = self.settings.filters;
        let inspection = inspect(&self.document, node, &self.index, filters);

        let (children, truncated) = if self.settings.include_children {
            let (descendants, truncated) = self.descendants(node);
            let children = descendants
                .iter()
                .map(|child| inspect(&self.document, child, &self.index, filters))
                .collect();
            (children, truncated)
        } else {
            (Vec::new(), 0)
        };

        if truncated > 0 {
            log::debug!(
                "inspector: {} descendants of {} omitted (limit {})",
                truncated,
                inspection.selector,
                self.settings.child_limit
            );
        }

        Report {
            node: node.clone(),
            inspection,
            children,
            truncated,
            optimized: self.settings.optimize,
        }
    }

    /// Pre-order descendants of `node` up to the child limit, plus how many
    /// were left out.
    fn descendants(&self, node: &D::Node) -> (Vec<D::Node>, usize) {
        let limit = self.settings.child_limit;
        let mut visited = Vec::new();
        let mut omitted = 0;

        let mut stack: Vec<D::Node> = self.document.children(node).into_iter().rev().collect();
        while let Some(next) = stack.pop() {
            if visited.len() < limit {
                visited.push(next.clone());
            } else {
                omitted += 1;
            }
            stack.extend(self.document.children(&next).into_iter().rev());
        }

        (visited, omitted)
    }
}
