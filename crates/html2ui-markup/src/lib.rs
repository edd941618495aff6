//! Markup front-end for html2ui.
//!
//! This crate turns HTML fragments (and Markdown, by way of HTML) into a small
//! tree of element, text, and comment nodes that the converter walks.

pub mod markdown;
pub mod node;
pub mod parser;

pub use markdown::markdown_to_html;
pub use node::{AttrValue, Attributes, Element, MarkupNode};
pub use parser::{parse_fragment, ParseError, ROOT_TAG};
