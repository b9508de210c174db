//! The host abstraction the engine runs against.
//!
//! The engine never parses page CSS into a layout model of its own. It asks a
//! [`Document`] for the stylesheet snapshot, for selector membership and for
//! final computed values. A browser binding implements this trait over the
//! live DOM; tests implement it with [`FixtureDocument`](crate::testing::FixtureDocument).

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{ScanError, SheetAccessError};

/// The kind of conditional grouping rule wrapping nested style rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Media,
    Supports,
    Container,
    /// `@layer` and other blocks that group without a condition.
    Other,
}

impl GroupKind {
    /// The at-keyword used when the condition is rendered back to CSS.
    pub fn keyword(self) -> &'static str {
        match self {
            GroupKind::Media => "@media",
            GroupKind::Supports => "@supports",
            GroupKind::Container => "@container",
            GroupKind::Other => "@layer",
        }
    }
}

/// One block inside a `@keyframes` rule, e.g. `50% { opacity: 0.5; }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyframe {
    pub key_text: String,
    pub declarations: Vec<(String, String)>,
}

/// A rule as exposed by the host's object model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssRule {
    /// A plain style rule: `selector { declarations }`.
    Style {
        selector_text: String,
        declarations: Vec<(String, String)>,
    },
    /// A conditional group (`@media`, `@supports`, ...) with nested rules.
    Group {
        kind: GroupKind,
        condition_text: String,
        rules: Vec<CssRule>,
    },
    /// A `@keyframes name { ... }` rule.
    Keyframes { name: String, frames: Vec<Keyframe> },
    /// Anything the engine does not inspect (`@font-face`, `@import`, ...).
    Other,
}

impl CssRule {
    /// Shorthand for building a style rule from string slices.
    pub fn style(selector_text: &str, declarations: &[(&str, &str)]) -> Self {
        CssRule::Style {
            selector_text: selector_text.to_string(),
            declarations: declarations
                .iter()
                .map(|(p, v)| (p.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Shorthand for building an `@media` group.
    pub fn media(condition_text: &str, rules: Vec<CssRule>) -> Self {
        CssRule::Group {
            kind: GroupKind::Media,
            condition_text: condition_text.to_string(),
            rules,
        }
    }
}

/// A stylesheet as enumerated by the host.
///
/// `rules` is an `Err` when the host refused access, which for a browser
/// means a cross-origin sheet without CORS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    /// `None` for inline `<style>` elements.
    pub href: Option<String>,
    pub rules: Result<Vec<CssRule>, SheetAccessError>,
}

impl Stylesheet {
    pub fn inline(rules: Vec<CssRule>) -> Self {
        Self { href: None, rules: Ok(rules) }
    }

    pub fn external(href: &str, rules: Vec<CssRule>) -> Self {
        Self {
            href: Some(href.to_string()),
            rules: Ok(rules),
        }
    }

    /// The sheet's rules, or the reason the host refused to expose them.
    pub fn readable_rules(&self) -> Result<&[CssRule], ScanError> {
        match &self.rules {
            Ok(rules) => Ok(rules.as_slice()),
            Err(err) => Err(ScanError::from(err.clone())),
        }
    }

    pub fn cross_origin(href: &str) -> Self {
        Self {
            href: Some(href.to_string()),
            rules: Err(SheetAccessError::CrossOrigin {
                href: href.to_string(),
            }),
        }
    }
}

/// The capabilities the engine needs from a rendering environment.
pub trait Document {
    /// A cheap handle to an element in the host tree.
    type Node: Clone + Eq + Hash + Debug;

    /// Every stylesheet attached to the document, in document order.
    fn stylesheets(&self) -> Vec<Stylesheet>;

    /// Tests whether `node` matches a single selector branch (no top-level commas).
    fn matches(&self, node: &Self::Node, selector: &str) -> Result<bool, ScanError>;

    /// The final computed value of `property` on `node`, if any.
    fn computed_value(&self, node: &Self::Node, property: &str) -> Option<String>;

    /// Declarations from the element's `style` attribute.
    fn inline_style(&self, node: &Self::Node) -> Vec<(String, String)>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    fn children(&self, node: &Self::Node) -> Vec<Self::Node>;

    fn tag_name(&self, node: &Self::Node) -> String;

    fn id(&self, node: &Self::Node) -> Option<String>;

    fn classes(&self, node: &Self::Node) -> Vec<String>;

    /// Whether a grouping condition (media query, supports test) currently holds.
    fn condition_matches(&self, _condition_text: &str) -> bool {
        true
    }
}
