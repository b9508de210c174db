//! Selector matching against the host tree.
//!
//! Branches are split on top-level commas and tested one by one through
//! [`Document::matches`]. A branch the host rejects as invalid is a
//! non-match; it never aborts the surrounding scan.

use crate::document::Document;
use crate::engine::specificity::calculate;
use crate::parser::split_top_level;
use crate::types::{MatchedRule, Rule, StylesheetIndex};

fn branch_matches<D: Document>(document: &D, node: &D::Node, branch: &str) -> bool {
    match document.matches(node, branch) {
        Ok(matched) => matched,
        Err(err) => {
            log::trace!("matcher: ignoring '{}': {}", branch, err);
            false
        }
    }
}

/// The branches of `rule` that match `node`, in source order.
pub fn matching_branches<'r, D: Document>(
    document: &D,
    node: &D::Node,
    rule: &'r Rule,
) -> Vec<&'r str> {
    if !rule.condition_matches {
        return Vec::new();
    }

    split_top_level(&rule.selector_text, ',')
        .into_iter()
        .filter(|branch| branch_matches(document, node, branch))
        .collect()
}

/// Tests `node` against a selector list such as `a:not(.x, .y), p`.
///
/// Malformed branches count as non-matches.
pub fn matches_selector<D: Document>(document: &D, node: &D::Node, selector_text: &str) -> bool {
    split_top_level(selector_text, ',')
        .into_iter()
        .any(|branch| branch_matches(document, node, branch))
}

/// Whether any branch of `rule` matches `node`.
pub fn matches<D: Document>(document: &D, node: &D::Node, rule: &Rule) -> bool {
    rule.condition_matches && matches_selector(document, node, &rule.selector_text)
}

/// Every rule in `index` matching `node`, in cascade order.
///
/// Rules are sorted by specificity ascending, then source order ascending,
/// so the last entry is the one that wins. Each rule's specificity is the
/// highest among its matching branches.
pub fn matched_rules<'a, D: Document>(
    document: &D,
    node: &D::Node,
    index: &'a StylesheetIndex,
) -> Vec<MatchedRule<'a>> {
    let mut matched: Vec<MatchedRule<'a>> = index
        .rules
        .iter()
        .filter_map(|rule| {
            let branches = matching_branches(document, node, rule);
            let specificity = branches.iter().map(|b| calculate(b)).max()?;
            Some(MatchedRule {
                rule,
                specificity,
                branches: branches.into_iter().map(str::to_string).collect(),
            })
        })
        .collect();

    matched.sort_by(|a, b| {
        a.specificity
            .cmp(&b.specificity)
            .then(a.rule.source_order.cmp(&b.rule.source_order))
    });
    matched
}
