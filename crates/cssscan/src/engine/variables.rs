//! Custom property reporting.

use std::collections::{HashMap, HashSet};

use crate::document::Document;
use crate::parser::values::var_references;
use crate::types::{
    DefinedVariable, MatchedRule, PropertyValue, Rule, StylesheetIndex, UsedVariable,
    VariableReport,
};

const UNSET: &str = "unset";

fn is_root_selector(selector_text: &str) -> bool {
    let selector = selector_text.trim();
    selector == ":root" || selector.eq_ignore_ascii_case("html")
}

fn computed<D: Document>(document: &D, node: &D::Node, name: &str) -> Option<String> {
    document
        .computed_value(node, name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Custom properties declared by rules reaching `node`, in source order.
fn defined_variables<D: Document>(
    document: &D,
    node: &D::Node,
    index: &StylesheetIndex,
    matched: &[MatchedRule<'_>],
) -> Vec<DefinedVariable> {
    let matched_orders: HashSet<usize> = matched.iter().map(|m| m.rule.source_order).collect();

    let reaching = index.rules.iter().filter(|rule: &&Rule| {
        matched_orders.contains(&rule.source_order)
            || (rule.condition_matches && is_root_selector(&rule.selector_text))
    });

    let mut defined = Vec::new();
    for rule in reaching {
        for (name, declared) in &rule.declarations {
            let name = name.trim();
            if !name.starts_with("--") {
                continue;
            }
            let declared_value = declared.trim().to_string();
            defined.push(DefinedVariable {
                name: name.to_string(),
                resolved_value: computed(document, node, name)
                    .unwrap_or_else(|| declared_value.clone()),
                declared_value,
                source: rule.selector_text.clone(),
            });
        }
    }
    defined
}

/// `var()` references in the given `(property, value)` pairs.
fn used_variables<'v, D: Document>(
    document: &D,
    node: &D::Node,
    values: impl Iterator<Item = (&'v str, &'v str)>,
) -> Vec<UsedVariable> {
    let mut seen = HashSet::new();
    let mut used = Vec::new();

    for (property, value) in values {
        let references = match var_references(value) {
            Ok(references) => references,
            Err(err) => {
                log::trace!("variables: skipping {}: {}", property, err);
                continue;
            }
        };

        for reference in references {
            if !seen.insert((reference.name.clone(), property.to_string())) {
                continue;
            }
            let resolved = computed(document, node, &reference.name)
                .or_else(|| reference.fallback.clone())
                .unwrap_or_else(|| UNSET.to_string());
            used.push(UsedVariable {
                name: reference.name,
                used_in: property.to_string(),
                fallback: reference.fallback,
                resolved,
            });
        }
    }
    used
}

/// The declared value that wins the cascade for each property, in the order
/// properties are first declared. Inline declarations come last.
fn winning_declarations<'v>(
    matched: &'v [MatchedRule<'_>],
    inline: &'v [(String, String)],
) -> Vec<(&'v str, &'v str)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut winners: Vec<(&str, &str)> = Vec::new();

    let declared = matched
        .iter()
        .flat_map(|m| m.rule.declarations.iter())
        .chain(inline.iter());
    for (property, value) in declared {
        let property = property.trim();
        match positions.get(property) {
            Some(&at) => winners[at].1 = value.as_str(),
            None => {
                positions.insert(property, winners.len());
                winners.push((property, value.as_str()));
            }
        }
    }
    winners
}

/// Reports the custom properties defined for and used by `node`.
///
/// `defined` covers every custom property declared by a matched rule or by a
/// `:root`/`html` rule. `used` scans the aggregated values, then the winning
/// declared value of each property, since hosts usually substitute `var()`
/// before reporting a computed value. Declarations that lost the cascade are
/// not scanned.
pub fn resolve<D: Document>(
    document: &D,
    node: &D::Node,
    index: &StylesheetIndex,
    matched: &[MatchedRule<'_>],
    aggregated: &[PropertyValue],
) -> VariableReport {
    let inline = document.inline_style(node);

    let values = aggregated
        .iter()
        .map(|pv| (pv.prop.as_str(), pv.value.as_str()))
        .chain(winning_declarations(matched, &inline));

    VariableReport {
        defined: defined_variables(document, node, index, matched),
        used: used_variables(document, node, values),
    }
}
