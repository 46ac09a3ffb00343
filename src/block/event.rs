//! Block-level event types.

use crate::Range;

/// Events emitted by the block parser.
///
/// Every event renders to exactly one output fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent {
    /// Start of a list.
    ListStart {
        /// List type (ordered or unordered).
        kind: ListKind,
    },
    /// End of a list.
    ListEnd {
        /// List type (ordered or unordered).
        kind: ListKind,
    },
    /// A list item with its content, marker and whitespace stripped.
    ListItem(Range),

    /// A heading line.
    Heading {
        /// Number of leading `#` characters. Not clamped to 6.
        level: u32,
        /// Heading text with markers and whitespace stripped.
        content: Range,
    },

    /// Start of a paragraph.
    ParagraphStart,
    /// One trimmed line of paragraph text.
    ParagraphText(Range),
    /// Hard break between two lines of the same paragraph.
    LineBreak,
    /// End of a paragraph.
    ParagraphEnd,
}

/// Type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Unordered list, items marked with `-`.
    Unordered,
    /// Ordered list, items marked with `*`.
    Ordered,
}

impl ListKind {
    /// The line prefix that introduces an item of this kind.
    pub const fn marker(self) -> u8 {
        match self {
            Self::Unordered => b'-',
            Self::Ordered => b'*',
        }
    }

    /// HTML tag name for the list container.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}
