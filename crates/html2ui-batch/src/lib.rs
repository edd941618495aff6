//! Batch conversion for html2ui.
//!
//! Walks a directory of HTML (and optionally Markdown) pages and writes one
//! JSON component tree per page.

pub mod builder;

pub use builder::{BatchBuilder, BatchConfig, BatchError, BatchResult};
