//! # inspector - scanner sessions over `cssscan`
//!
//! Wraps the engine in an explicit session object:
//!
//! - [`Inspector`]: owns the document, the shared [`StylesheetIndex`]
//!   snapshot and the [`Settings`]; rebuilds the index on viewport resize
//! - [`CachedDocument`]: memoizes host queries for the element being inspected
//! - [`FrameThrottle`]: collapses pointer moves into one inspection per frame
//! - [`log_init`]: a file logger for hosts without one
//!
//! ```
//! use cssscan::testing::FixtureDocument;
//! use inspector::{Inspector, Settings};
//!
//! let mut doc = FixtureDocument::new();
//! doc.add_css("button { padding: 4px 8px; }");
//! let button = doc.append(doc.root(), "button");
//!
//! let mut session = Inspector::new(doc, Settings::default());
//! assert!(session.hover(button));
//! let report = session.on_frame().unwrap();
//! assert_eq!(report.block(), "button {\n  padding: 4px 8px;\n}");
//! ```
//!
//! [`StylesheetIndex`]: cssscan::StylesheetIndex

pub mod log_init;
pub mod memo;
pub mod session;
pub mod settings;
pub mod throttle;

pub use memo::CachedDocument;
pub use session::{Inspector, Report};
pub use settings::{DEFAULT_CHILD_LIMIT, Settings};
pub use throttle::FrameThrottle;
