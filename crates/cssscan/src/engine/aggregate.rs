//! Property aggregation.
//!
//! Collects every property touched by the matched rules and the inline style,
//! then reads each one back as the element's computed value. Reporting the
//! computed value instead of the declared one means an overridden declaration
//! never shows up with its losing value.

use std::collections::HashSet;

use bitflags::bitflags;

use crate::document::Document;
use crate::engine::shorthand::longhands_of;
use crate::types::{MatchedRule, PropertyValue};

bitflags! {
    /// Properties to leave out of an aggregated list.
    ///
    /// # Example
    ///
    /// ```
    /// use cssscan::PropertyFilters;
    ///
    /// let filters = PropertyFilters::default();
    /// assert!(filters.contains(PropertyFilters::VENDOR_PREFIXED));
    /// assert!(!filters.contains(PropertyFilters::INHERITED));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PropertyFilters: u8 {
        /// Drop `-webkit-`, `-moz-`, `-ms-` and `-o-` properties.
        const VENDOR_PREFIXED = 0b0000_0001;
        /// Drop `box-sizing`, which resets usually set globally.
        const BOX_SIZING      = 0b0000_0010;
        /// Drop properties whose value equals the parent's computed value.
        /// A heuristic, not real inheritance detection.
        const INHERITED       = 0b0000_0100;
    }
}

impl Default for PropertyFilters {
    fn default() -> Self {
        PropertyFilters::VENDOR_PREFIXED | PropertyFilters::BOX_SIZING
    }
}

const VENDOR_PREFIXES: [&str; 4] = ["-webkit-", "-moz-", "-ms-", "-o-"];

pub fn is_vendor_prefixed(property: &str) -> bool {
    VENDOR_PREFIXES.iter().any(|prefix| property.starts_with(prefix))
}

fn normalize_name(property: &str) -> String {
    let property = property.trim();
    if property.starts_with("--") {
        property.to_string()
    } else {
        property.to_ascii_lowercase()
    }
}

/// Property names in first-seen order, shorthands replaced by their longhands.
fn touched_properties<D: Document>(
    document: &D,
    node: &D::Node,
    matched: &[MatchedRule<'_>],
) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    let declared = matched
        .iter()
        .flat_map(|m| m.rule.declarations.iter().map(|(prop, _)| normalize_name(prop)))
        .chain(
            document
                .inline_style(node)
                .into_iter()
                .map(|(prop, _)| normalize_name(&prop)),
        );

    for property in declared {
        match longhands_of(&property) {
            Some(longhands) => {
                for longhand in longhands {
                    if seen.insert(longhand.to_string()) {
                        names.push(longhand.to_string());
                    }
                }
            }
            None => {
                if seen.insert(property.clone()) {
                    names.push(property);
                }
            }
        }
    }

    names
}

/// Aggregates the computed value of every property the matched rules or the
/// inline style declare.
///
/// `matched` should be in cascade order (see
/// [`matched_rules`](crate::engine::matcher::matched_rules)); it decides the
/// output order, not the values. Properties with an empty computed value are
/// omitted. The result never holds two entries for one property.
pub fn aggregate<D: Document>(
    document: &D,
    node: &D::Node,
    matched: &[MatchedRule<'_>],
    filters: PropertyFilters,
) -> Vec<PropertyValue> {
    let parent = document.parent(node);

    touched_properties(document, node, matched)
        .into_iter()
        .filter(|prop| {
            !(filters.contains(PropertyFilters::VENDOR_PREFIXED) && is_vendor_prefixed(prop))
        })
        .filter(|prop| !(filters.contains(PropertyFilters::BOX_SIZING) && prop == "box-sizing"))
        .filter_map(|prop| {
            let value = document.computed_value(node, &prop)?.trim().to_string();
            if value.is_empty() {
                return None;
            }

            if filters.contains(PropertyFilters::INHERITED) {
                let parent_value = parent
                    .as_ref()
                    .and_then(|p| document.computed_value(p, &prop));
                if parent_value.as_deref().map(str::trim) == Some(value.as_str()) {
                    return None;
                }
            }

            Some(PropertyValue { prop, value })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_prefixes() {
        assert!(is_vendor_prefixed("-webkit-appearance"));
        assert!(is_vendor_prefixed("-o-transition"));
        assert!(!is_vendor_prefixed("appearance"));
        assert!(!is_vendor_prefixed("--webkit-like"));
    }

    #[test]
    fn custom_property_names_keep_case() {
        assert_eq!(normalize_name(" --Brand "), "--Brand");
        assert_eq!(normalize_name("COLOR"), "color");
    }
}
