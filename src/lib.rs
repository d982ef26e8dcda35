//! Paginated tabular PDF reports.
//!
//! The [report] module is the entry point: configure a [report::Report], feed it
//! tables and summary blocks, and write the result. Everything else is the
//! drawing surface underneath it: buffered [Page]s inside a [Document], the
//! base-14 [StandardFont]s, and [layout] helpers for measuring and positioning.

mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout objects (most text) on pages
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

pub mod report;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
