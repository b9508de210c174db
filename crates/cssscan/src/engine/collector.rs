//! Stylesheet collection.
//!
//! Flattens every readable stylesheet into a [`StylesheetIndex`]. Rules nested
//! in `@media`/`@supports`/`@container` record the text of their nearest
//! enclosing group, but they only apply when every enclosing condition
//! holds. Inside `@media print { @supports (display: grid) { ... } }` the
//! recorded text is `(display: grid)` and the rule is excluded whenever
//! `print` fails. `@layer` blocks carry no condition of their own and pass
//! the enclosing one through.
//!
//! The index is a snapshot. Media-dependent results go stale on viewport
//! resize, so callers rebuild it then; DOM mutations are not tracked.

use crate::document::{CssRule, Document, GroupKind};
use crate::error::{ScanError, SheetAccessError};
use crate::types::{KeyframesRule, Rule, SheetRef, StylesheetIndex, UnreadableSheet};

struct Condition<'a> {
    text: &'a str,
    matches: bool,
}

fn walk_rules(
    document: &impl Document,
    rules: &[CssRule],
    sheet: &SheetRef,
    condition: Option<&Condition<'_>>,
    index: &mut StylesheetIndex,
) {
    for rule in rules {
        match rule {
            CssRule::Style {
                selector_text,
                declarations,
            } => {
                let source_order = index.rules.len();
                index.rules.push(Rule {
                    selector_text: selector_text.trim().to_string(),
                    declarations: declarations.clone(),
                    condition_text: condition.map(|c| c.text.to_string()),
                    condition_matches: condition.is_none_or(|c| c.matches),
                    sheet: sheet.clone(),
                    source_order,
                });
            }
            CssRule::Group {
                kind: GroupKind::Other,
                rules,
                ..
            } => walk_rules(document, rules, sheet, condition, index),
            CssRule::Group {
                condition_text,
                rules,
                ..
            } => {
                let nested = Condition {
                    text: condition_text,
                    matches: condition.is_none_or(|outer| outer.matches)
                        && document.condition_matches(condition_text),
                };
                walk_rules(document, rules, sheet, Some(&nested), index);
            }
            CssRule::Keyframes { name, frames } => {
                index.keyframes.push(KeyframesRule {
                    name: name.clone(),
                    frames: frames.clone(),
                    sheet: sheet.clone(),
                });
            }
            CssRule::Other => {}
        }
    }
}

/// Builds the flat rule index for `document`.
///
/// Sheets the host refuses to expose are recorded in
/// [`StylesheetIndex::unreadable`] and contribute no rules.
pub fn collect(document: &impl Document) -> StylesheetIndex {
    let mut index = StylesheetIndex::default();

    for (position, stylesheet) in document.stylesheets().into_iter().enumerate() {
        let sheet = SheetRef {
            index: position,
            href: stylesheet.href.clone(),
        };

        match stylesheet.readable_rules() {
            Ok(rules) => walk_rules(document, rules, &sheet, None, &mut index),
            Err(err) => {
                log::debug!("collect: skipping sheet {}: {}", sheet.label(), err);
                let cross_origin = matches!(
                    err,
                    ScanError::SheetAccess(SheetAccessError::CrossOrigin { .. })
                );
                index.unreadable.push(UnreadableSheet {
                    sheet,
                    cross_origin,
                });
            }
        }
    }

    log::debug!(
        "collect: {} rules, {} keyframes, {} unreadable sheets",
        index.rules.len(),
        index.keyframes.len(),
        index.unreadable.len()
    );
    index
}
