//! # cssscan - matched CSS for an inspected element
//!
//! Given an element and the page's stylesheets, this crate answers "which CSS
//! applies here, and what is the shortest way to write it down?":
//!
//! - **Collection**: flatten readable stylesheets into a
//!   [`StylesheetIndex`], threading `@media`/`@supports` conditions onto rules
//! - **Matching**: find every rule whose selector matches the element
//! - **Specificity**: (ids, classes, elements) tuples for ranking and display
//! - **Aggregation**: the computed value of every property the cascade touched
//! - **Optimization**: drop browser defaults and fold longhands into
//!   `margin`, `padding`, `border`, `border-radius` and `background`
//! - **Variables and motion**: custom property and transition/animation reports
//!
//! The crate does not compute styles itself. A host (a browser binding, or
//! [`testing::FixtureDocument`] in tests) implements [`Document`] and answers
//! selector-membership and computed-value queries.
//!
//! ## Quick Start
//!
//! ```rust
//! use cssscan::testing::FixtureDocument;
//! use cssscan::{PropertyFilters, collect, inspect};
//!
//! let mut doc = FixtureDocument::new();
//! doc.add_css(".card { margin: 0 10px; } .card { margin-top: 4px; }");
//! let card = doc.append(doc.root(), "div.card");
//!
//! let index = collect(&doc);
//! let inspection = inspect(&doc, &card, &index, PropertyFilters::default());
//! assert_eq!(
//!     inspection.block(true),
//!     "div.card {\n  margin: 4px 10px 0px;\n}"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`document`]: the host abstraction and its stylesheet model
//! - [`engine`]: the extraction pipeline
//! - [`parser`]: selector tokenizer and value scanners
//! - [`types`]: plain data returned to the UI
//! - [`report`]: declaration blocks and source listings
//! - [`testing`]: a headless [`Document`] for tests
//! - [`error`]: error types (all recovered locally)

pub mod document;
pub mod engine;
pub mod error;
pub mod parser;
pub mod report;
pub mod testing;
pub mod types;

pub use document::{CssRule, Document, GroupKind, Keyframe, Stylesheet};
pub use engine::aggregate::{PropertyFilters, aggregate};
pub use engine::collector::collect;
pub use engine::defaults::is_default_value;
pub use engine::matcher::{matched_rules, matches, matches_selector};
pub use engine::shorthand::{combine_four, optimize};
pub use engine::specificity::{calculate, try_calculate};
pub use engine::{Inspection, inspect};
pub use error::{ScanError, SheetAccessError};
pub use types::{
    MatchedRule, MotionReport, PropertyValue, Rule, Specificity, StylesheetIndex, VariableReport,
};
