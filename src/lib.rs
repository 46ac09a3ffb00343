//! markdown2html: line-oriented Markdown subset to HTML converter
//!
//! Recognizes a deliberately small subset of Markdown:
//! - `#` headings (any depth: `#######` gives `<h7>`)
//! - `-` unordered list items
//! - `*` ordered list items
//! - plain paragraphs, with `<br/>` between consecutive lines
//!
//! # Design Principles
//! - No AST: one forward pass emitting block events
//! - No backtracking: each line is classified from three open-block flags
//! - Total: every input up to [`MAX_INPUT_LEN`] converts, nothing here
//!   returns an error
//!
//! Output is a list of fragments joined by `\n` with no document wrapper.

pub mod block;
pub mod cli;
pub mod error;
pub mod range;
pub mod render;

// Re-export primary types
pub use block::{BlockEvent, BlockParser, ListKind};
pub use error::Error;
pub use range::Range;
pub use render::HtmlWriter;

/// Largest input the translator accepts, in bytes.
///
/// Block events store offsets as `u32`, so documents are limited to 4 GiB.
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;

/// Rendering options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// HTML-escape `&`, `<` and `>` in text content.
    ///
    /// Off by default: text passes through untouched, so inline HTML in
    /// the source reaches the output as written.
    pub escape_html: bool,
}

/// Convert Markdown to HTML.
///
/// This is the primary API for simple use cases. Every input up to
/// [`MAX_INPUT_LEN`] bytes converts; there is no error path.
///
/// # Panics
/// Panics if `input` is longer than [`MAX_INPUT_LEN`]. The same holds for
/// the other `to_html*` functions.
///
/// # Example
/// ```
/// let html = markdown2html::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>\nWorld\n</p>");
/// ```
pub fn to_html(input: &str) -> String {
    to_html_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
pub fn to_html_with_options(input: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    render_to_writer(input, &mut writer, options);
    writer.into_string()
}

/// Convert Markdown to HTML, writing into a provided buffer.
///
/// The buffer is cleared first; its capacity is reused.
pub fn to_html_into(input: &str, out: &mut Vec<u8>) {
    to_html_into_with_options(input, out, &Options::default());
}

/// Convert Markdown to HTML into a provided buffer with options.
pub fn to_html_into_with_options(input: &str, out: &mut Vec<u8>, options: &Options) {
    let mut writer = HtmlWriter::from_buffer(std::mem::take(out));
    render_to_writer(input, &mut writer, options);
    *out = writer.into_vec();
}

/// Render Markdown to an HtmlWriter.
fn render_to_writer(input: &str, writer: &mut HtmlWriter, options: &Options) {
    assert!(
        input.len() <= MAX_INPUT_LEN,
        "input of {} bytes exceeds MAX_INPUT_LEN",
        input.len()
    );

    let mut parser = BlockParser::new(input);
    let mut events = Vec::with_capacity((input.len() / 16).max(16));
    parser.parse(&mut events);

    log::debug!(
        "parsed {} bytes into {} block events",
        input.len(),
        events.len()
    );

    for event in &events {
        render_block_event(input, event, writer, options);
    }
}

/// Render a single block event to HTML.
fn render_block_event(input: &str, event: &BlockEvent, writer: &mut HtmlWriter, options: &Options) {
    let escape = options.escape_html;

    match event {
        BlockEvent::ListStart { kind } => writer.open_tag(kind.tag()),
        BlockEvent::ListEnd { kind } => writer.close_tag(kind.tag()),
        BlockEvent::ListItem(range) => writer.list_item(range.slice_str(input), escape),
        BlockEvent::Heading { level, content } => {
            writer.heading(*level, content.slice_str(input), escape)
        }
        BlockEvent::ParagraphStart => writer.open_tag("p"),
        BlockEvent::ParagraphText(range) => writer.text_range(input, *range, escape),
        BlockEvent::LineBreak => writer.line_break(),
        BlockEvent::ParagraphEnd => writer.close_tag("p"),
    }
}
