//! Compact range representation for zero-copy text references.
//!
//! Uses `u32` offsets to save memory (8 bytes vs 16 for usize pair).
//! Supports documents up to 4GB in size.

/// Compact range into an input buffer.
///
/// # Example
/// ```
/// use markdown2html::Range;
///
/// let input = "Hello, World!";
/// let range = Range::new(0, 5);
/// assert_eq!(range.slice_str(input), "Hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

// Compile-time size verification
const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize values.
    ///
    /// # Panics
    /// Panics in debug mode if values exceed u32::MAX.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= u32::MAX as usize);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// Get the byte slice this range refers to.
    #[inline]
    pub fn slice<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[self.start_usize()..self.end_usize()]
    }

    /// Get the text this range refers to.
    ///
    /// # Panics
    /// Panics if the range does not fall on char boundaries of `input`.
    /// Ranges produced by the block parser always do.
    #[inline]
    pub fn slice_str<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start_usize()..self.end_usize()]
    }

    /// Shrink the range so it excludes surrounding whitespace in `input`.
    ///
    /// Whitespace follows `char::is_whitespace`, so `\r` and Unicode
    /// spaces are trimmed as well.
    pub fn trim(&self, input: &str) -> Self {
        let text = self.slice_str(input);
        let lead = text.len() - text.trim_start().len();
        let start = self.start_usize() + lead;
        Self::from_usize(start, start + text.trim().len())
    }

    /// Drop the first `n` bytes of the range.
    #[inline]
    pub fn skip(&self, n: u32) -> Self {
        debug_assert!(n <= self.len());
        Self {
            start: self.start + n,
            end: self.end,
        }
    }

    /// Length of the range in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Check if the range is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Start position as usize.
    #[inline]
    pub const fn start_usize(&self) -> usize {
        self.start as usize
    }

    /// End position as usize.
    #[inline]
    pub const fn end_usize(&self) -> usize {
        self.end as usize
    }
}
