use crate::document::Keyframe;
use crate::types::Specificity;

/// Identifies the stylesheet a rule came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetRef {
    /// Position of the sheet in the host's enumeration.
    pub index: usize,
    /// `None` for inline `<style>` sheets.
    pub href: Option<String>,
}

impl SheetRef {
    /// A label suitable for a "where did this come from" listing.
    pub fn label(&self) -> &str {
        self.href.as_deref().unwrap_or("inline")
    }
}

/// Immutable snapshot of one style rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector_text: String,
    /// Declarations in source order.
    pub declarations: Vec<(String, String)>,
    /// Condition of the nearest enclosing `@media`/`@supports`/`@container`.
    pub condition_text: Option<String>,
    /// Whether that condition held when the index was built.
    pub condition_matches: bool,
    pub sheet: SheetRef,
    /// Position in the flattened index; later rules win ties.
    pub source_order: usize,
}

impl Rule {
    /// Looks up a declared (not computed) value.
    pub fn declared(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }
}

/// A sheet whose rules the host refused to expose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreadableSheet {
    pub sheet: SheetRef,
    pub cross_origin: bool,
}

/// A `@keyframes` rule captured during collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyframesRule {
    pub name: String,
    pub frames: Vec<Keyframe>,
    pub sheet: SheetRef,
}

/// Flat index of every reachable style rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylesheetIndex {
    pub rules: Vec<Rule>,
    pub unreadable: Vec<UnreadableSheet>,
    pub keyframes: Vec<KeyframesRule>,
}

impl StylesheetIndex {
    /// Finds the last `@keyframes` rule with the given name (later sheets win).
    pub fn keyframes_named(&self, name: &str) -> Option<&KeyframesRule> {
        self.keyframes.iter().rev().find(|k| k.name == name)
    }
}

/// A rule that matched an element, with the specificity used to rank it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRule<'a> {
    pub rule: &'a Rule,
    /// Highest specificity among the branches that matched.
    pub specificity: Specificity,
    /// The selector branches that matched, in source order.
    pub branches: Vec<String>,
}
