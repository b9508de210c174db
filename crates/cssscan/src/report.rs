//! Plain-text and plain-data output for the UI layer.

use std::collections::BTreeMap;

use crate::document::Document;
use crate::types::{MatchedRule, PropertyValue, SheetRef, Specificity, StylesheetIndex};

/// Renders a declaration block ready for the clipboard.
///
/// ```
/// use cssscan::{PropertyValue, report::format_block};
///
/// let block = format_block(".card", &[PropertyValue::new("margin", "4px")]);
/// assert_eq!(block, ".card {\n  margin: 4px;\n}");
/// ```
pub fn format_block(selector: &str, properties: &[PropertyValue]) -> String {
    let mut block = format!("{selector} {{\n");
    for property in properties {
        block.push_str("  ");
        block.push_str(&property.prop);
        block.push_str(": ");
        block.push_str(&property.value);
        block.push_str(";\n");
    }
    block.push('}');
    block
}

fn escape_identifier(ident: &str) -> String {
    let mut escaped = String::with_capacity(ident.len());
    for (i, c) in ident.chars().enumerate() {
        if i == 0 && c.is_ascii_digit() {
            // A leading digit must use the code point form: `2col` -> `\32 col`.
            escaped.push_str(&format!("\\{:x} ", c as u32));
            continue;
        }
        let plain = c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii();
        if !plain {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Builds a `tag#id.class` selector naming `node`.
pub fn element_selector<D: Document>(document: &D, node: &D::Node) -> String {
    let mut selector = document.tag_name(node).to_ascii_lowercase();
    if let Some(id) = document.id(node).filter(|id| !id.is_empty()) {
        selector.push('#');
        selector.push_str(&escape_identifier(&id));
    }
    for class in document.classes(node) {
        if class.is_empty() {
            continue;
        }
        selector.push('.');
        selector.push_str(&escape_identifier(&class));
    }
    selector
}

/// One matched rule in a source listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRule {
    pub selector: String,
    pub specificity: Specificity,
    pub condition_text: Option<String>,
}

/// The matched rules contributed by one stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// The sheet's URL, or `inline`.
    pub url: String,
    pub rule_count: usize,
    pub rules: Vec<SourceRule>,
    /// Set for sheets the host refused to expose; they never have rules.
    pub unreadable: bool,
}

/// Groups matched rules by stylesheet for a "where did this come from" view.
///
/// Sheets appear in document order; inside a sheet the winning rule comes
/// first. Unreadable sheets are listed with no rules so the user can see
/// that something was not inspected.
pub fn source_report(index: &StylesheetIndex, matched: &[MatchedRule<'_>]) -> Vec<SourceFile> {
    let mut by_sheet: BTreeMap<usize, (&SheetRef, Vec<&MatchedRule<'_>>)> = BTreeMap::new();
    for m in matched {
        by_sheet
            .entry(m.rule.sheet.index)
            .or_insert_with(|| (&m.rule.sheet, Vec::new()))
            .1
            .push(m);
    }

    let mut files: Vec<(usize, SourceFile)> = by_sheet
        .into_iter()
        .map(|(position, (sheet, mut rules))| {
            rules.sort_by(|a, b| {
                b.specificity
                    .cmp(&a.specificity)
                    .then(b.rule.source_order.cmp(&a.rule.source_order))
            });
            let rules: Vec<SourceRule> = rules
                .into_iter()
                .map(|m| SourceRule {
                    selector: m.rule.selector_text.clone(),
                    specificity: m.specificity,
                    condition_text: m.rule.condition_text.clone(),
                })
                .collect();
            (
                position,
                SourceFile {
                    url: sheet.label().to_string(),
                    rule_count: rules.len(),
                    rules,
                    unreadable: false,
                },
            )
        })
        .collect();

    files.extend(index.unreadable.iter().map(|stub| {
        (
            stub.sheet.index,
            SourceFile {
                url: stub.sheet.label().to_string(),
                rule_count: 0,
                rules: Vec::new(),
                unreadable: true,
            },
        )
    }));

    files.sort_by_key(|(position, _)| *position);
    files.into_iter().map(|(_, file)| file).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block() {
        assert_eq!(format_block("p", &[]), "p {\n}");
    }

    #[test]
    fn identifiers_are_escaped() {
        assert_eq!(escape_identifier("md:flex"), "md\\:flex");
        assert_eq!(escape_identifier("2col"), "\\32 col");
        assert_eq!(escape_identifier("card-body"), "card-body");
    }
}
