//! Block-level parser for Markdown.
//!
//! The block parser is line-oriented and handles:
//! - `#` headings
//! - `-` unordered lists
//! - `*` ordered lists
//! - Paragraphs

mod event;
mod parser;

pub use event::{BlockEvent, ListKind};
pub use parser::BlockParser;
