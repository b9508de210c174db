//! Error types for rule extraction and selector processing.
//!
//! None of these errors is fatal to an inspection. Each one is recovered at
//! the point it is raised: a bad selector becomes a non-match (or a zero
//! specificity), an unreadable stylesheet becomes a stub in the index.

use thiserror::Error;

/// Errors that can occur while scanning stylesheets for an element.
///
/// # Examples
///
/// ```rust
/// use cssscan::ScanError;
/// use cssscan::parser::selectors::tokenize;
///
/// let result = tokenize("a[href");
/// assert!(matches!(result, Err(ScanError::InvalidSelector(_))));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A selector branch could not be tokenized or was rejected by the host.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// A stylesheet's rules could not be read.
    #[error("stylesheet unreadable: {0}")]
    SheetAccess(#[from] SheetAccessError),

    /// A functional value such as `var(` was opened but never closed.
    #[error("unterminated function in value: {0}")]
    UnterminatedFunction(String),
}

/// Why the host refused to expose a stylesheet's rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SheetAccessError {
    /// The sheet was loaded from another origin without CORS headers.
    #[error("cross-origin stylesheet {href}")]
    CrossOrigin { href: String },

    /// The sheet is not available for any other reason (still loading, disabled).
    #[error("stylesheet unavailable: {reason}")]
    Unavailable { reason: String },
}
