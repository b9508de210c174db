//! # css-scanner
//!
//! Point at an element, get its matched CSS as a minimal declaration block.
//!
//! This crate re-exports the engine ([`cssscan`]) and the session layer
//! ([`inspector`]). Most hosts only need the [`prelude`].
//!
//! ```
//! use css_scanner::prelude::*;
//! use css_scanner::testing::FixtureDocument;
//!
//! # fn main() -> css_scanner::Result<()> {
//! let mut doc = FixtureDocument::new();
//! doc.add_css("#save.primary { padding: 6px; border-radius: 3px; }");
//! let button = doc.append(doc.root(), "button#save.primary");
//!
//! // Specificity of a user-typed selector; invalid input is an error here
//! assert_eq!(try_calculate("#save.primary")?.to_string(), "(1,1,0)");
//!
//! let mut session = Inspector::new(doc, Settings::default());
//! let report = session.inspect(&button);
//! assert_eq!(
//!     report.block(),
//!     "button#save.primary {\n  padding: 6px;\n  border-radius: 3px;\n}"
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;

pub use cssscan::{self, document, engine, parser, report, testing, types};
pub use error::{Result, ScannerError};
pub use inspector::{self, log_init};

pub mod prelude {
    pub use cssscan::{
        Document, Inspection, MotionReport, PropertyFilters, PropertyValue, ScanError,
        Specificity, StylesheetIndex, VariableReport, calculate, collect, inspect, optimize,
        try_calculate,
    };
    pub use inspector::{Inspector, Report, Settings};
}

/// Installs the file logger, mapping failure into [`ScannerError`].
pub fn init_logging(path: impl AsRef<std::path::Path>) -> Result<()> {
    let path = path.as_ref();
    log_init::init_logger(path)?;
    log::debug!("css-scanner: logging to {}", path.display());
    Ok(())
}
