//! Plain data produced and consumed by the engine.
//!
//! Everything here is created fresh per inspection (or per session for the
//! [`StylesheetIndex`]) and carries no reference back to the host.

pub mod records;
pub mod rule;
pub mod specificity;

pub use records::{
    AnimationRecord, DefinedVariable, KeyframeRecord, MotionReport, PropertyValue,
    TransitionRecord, UsedVariable, VariableReport,
};
pub use rule::{KeyframesRule, MatchedRule, Rule, SheetRef, StylesheetIndex, UnreadableSheet};
pub use specificity::Specificity;
