//! HTML output writer.
//!
//! Output is a sequence of fragments joined by `\n`, with no trailing
//! newline. Every write method below emits exactly one fragment.

use crate::Range;

/// HTML output writer with pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use markdown2html::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(1000);
/// writer.open_tag("ul");
/// writer.list_item("Hello", false);
/// writer.close_tag("ul");
///
/// let html = writer.into_string();
/// assert_eq!(html, "<ul>\n<li>Hello</li>\n</ul>");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
    /// Fragments written so far.
    fragments: usize,
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Tags add roughly a quarter on top of typical input.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            fragments: 0,
        }
    }

    /// Wrap an existing buffer, clearing it but keeping its capacity.
    pub fn from_buffer(mut out: Vec<u8>) -> Self {
        out.clear();
        Self { out, fragments: 0 }
    }

    /// Separator before every fragment but the first.
    #[inline]
    fn begin_fragment(&mut self) {
        if self.fragments > 0 {
            self.out.push(b'\n');
        }
        self.fragments += 1;
    }

    #[inline]
    fn write_str(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write text, HTML-escaping `&`, `<` and `>` when `escape` is set.
    #[inline]
    fn write_text(&mut self, text: &str, escape: bool) {
        if escape {
            let escaped = html_escape::encode_text(text);
            self.write_str(&escaped);
        } else {
            self.write_str(text);
        }
    }

    /// Write a decimal number without allocating.
    fn write_u32(&mut self, mut value: u32) {
        let mut digits = [0u8; 10];
        let mut len = 0;
        loop {
            digits[len] = b'0' + (value % 10) as u8;
            len += 1;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        self.out.extend(digits[..len].iter().rev());
    }

    // --- Fragments ---

    /// Opening tag fragment: `<tag>`
    pub fn open_tag(&mut self, tag: &str) {
        self.begin_fragment();
        self.out.push(b'<');
        self.write_str(tag);
        self.out.push(b'>');
    }

    /// Closing tag fragment: `</tag>`
    pub fn close_tag(&mut self, tag: &str) {
        self.begin_fragment();
        self.write_str("</");
        self.write_str(tag);
        self.out.push(b'>');
    }

    /// List item fragment: `<li>text</li>`
    pub fn list_item(&mut self, text: &str, escape: bool) {
        self.begin_fragment();
        self.write_str("<li>");
        self.write_text(text, escape);
        self.write_str("</li>");
    }

    /// Heading fragment: `<hN>text</hN>`, for any `N`.
    pub fn heading(&mut self, level: u32, text: &str, escape: bool) {
        self.begin_fragment();
        self.write_str("<h");
        self.write_u32(level);
        self.out.push(b'>');
        self.write_text(text, escape);
        self.write_str("</h");
        self.write_u32(level);
        self.out.push(b'>');
    }

    /// Line break fragment: `<br/>`
    pub fn line_break(&mut self) {
        self.begin_fragment();
        self.write_str("<br/>");
    }

    /// Bare text fragment.
    pub fn text(&mut self, text: &str, escape: bool) {
        self.begin_fragment();
        self.write_text(text, escape);
    }

    /// Bare text fragment taken from a range of `input`.
    #[inline]
    pub fn text_range(&mut self, input: &str, range: Range, escape: bool) {
        self.text(range.slice_str(input), escape);
    }

    // --- Buffer access ---

    /// Take ownership of output buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.out
    }

    /// Take ownership as String.
    ///
    /// Only `&str` content and ASCII tags are ever written, so the buffer
    /// is valid UTF-8; the fallback path is unreachable in practice.
    pub fn into_string(self) -> String {
        match String::from_utf8(self.out) {
            Ok(s) => s,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}
