//! The extraction pipeline.
//!
//! ```text
//! collector -> matcher -> { specificity, aggregate } -> shorthand
//!                      \-> variables, animation
//! ```
//!
//! - [`collector`]: flattens stylesheets into a [`StylesheetIndex`]
//! - [`matcher`]: finds the rules matching an element, in cascade order
//! - [`specificity`]: (ids, classes, elements) counting
//! - [`aggregate`]: computed values for every touched property
//! - [`shorthand`]: default elision and shorthand folding
//! - [`variables`]: custom property report
//! - [`animation`]: transition/animation report
//!
//! [`inspect`] runs the whole pipeline for one element.

pub mod aggregate;
pub mod animation;
pub mod collector;
pub mod defaults;
pub mod matcher;
pub mod shorthand;
pub mod specificity;
pub mod variables;

use crate::document::Document;
use crate::report::{SourceFile, element_selector, format_block, source_report};
use crate::types::{MotionReport, PropertyValue, StylesheetIndex, VariableReport};

use aggregate::PropertyFilters;

/// Everything the scanner shows for one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    /// `tag#id.class` naming the element.
    pub selector: String,
    /// Computed values of every touched property, one entry per property.
    pub properties: Vec<PropertyValue>,
    /// `properties` with defaults elided and shorthands folded.
    pub optimized: Vec<PropertyValue>,
    pub sources: Vec<SourceFile>,
    pub variables: VariableReport,
    pub motion: MotionReport,
}

impl Inspection {
    /// The declaration block for the clipboard.
    pub fn block(&self, optimized: bool) -> String {
        let properties = if optimized {
            &self.optimized
        } else {
            &self.properties
        };
        format_block(&self.selector, properties)
    }
}

/// Runs the full pipeline for `node` against a prebuilt index.
pub fn inspect<D: Document>(
    document: &D,
    node: &D::Node,
    index: &StylesheetIndex,
    filters: PropertyFilters,
) -> Inspection {
    let matched = matcher::matched_rules(document, node, index);
    let properties = aggregate::aggregate(document, node, &matched, filters);
    let optimized = shorthand::optimize(&properties);
    let variables = variables::resolve(document, node, index, &matched, &properties);
    let motion = animation::extract(document, node, index);

    log::trace!(
        "inspect: {:?} matched {} rules, {} properties ({} optimized)",
        node,
        matched.len(),
        properties.len(),
        optimized.len()
    );

    Inspection {
        selector: element_selector(document, node),
        sources: source_report(index, &matched),
        properties,
        optimized,
        variables,
        motion,
    }
}
