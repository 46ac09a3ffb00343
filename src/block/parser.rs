//! Block parser implementation.

use memchr::memchr;

use crate::Range;

use super::event::{BlockEvent, ListKind};

/// Open-block flags carried from one line to the next.
///
/// The three flags are independent: a paragraph stays open across list
/// and heading lines, and only a blank line or end of input closes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct BlockState {
    in_unordered_list: bool,
    in_ordered_list: bool,
    in_paragraph: bool,
}

impl BlockState {
    fn list_flag(&mut self, kind: ListKind) -> &mut bool {
        match kind {
            ListKind::Unordered => &mut self.in_unordered_list,
            ListKind::Ordered => &mut self.in_ordered_list,
        }
    }
}

/// Block parser state.
pub struct BlockParser<'a> {
    /// Input text.
    input: &'a str,
    /// Open-block flags.
    state: BlockState,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            state: BlockState::default(),
        }
    }

    /// Parse all lines and collect events.
    ///
    /// Lines are split on `\n`; a trailing newline yields a final empty
    /// line, which is harmless since end of input closes every block.
    pub fn parse(&mut self, events: &mut Vec<BlockEvent>) {
        let bytes = self.input.as_bytes();
        let mut line_start = 0;
        let mut line_no = 0usize;

        loop {
            let line_end = memchr(b'\n', &bytes[line_start..])
                .map_or(bytes.len(), |pos| line_start + pos);

            line_no += 1;
            self.parse_line(line_no, Range::from_usize(line_start, line_end), events);

            if line_end == bytes.len() {
                break;
            }
            line_start = line_end + 1;
        }

        self.close_blocks(events);
    }

    /// Classify one raw line and emit its events.
    fn parse_line(&mut self, line_no: usize, raw: Range, events: &mut Vec<BlockEvent>) {
        let line = raw.trim(self.input);
        let first = line.slice(self.input.as_bytes()).first().copied();

        log::trace!("line {line_no}: {:?}", line.slice_str(self.input));

        // Both list checks run on every line; at most one can match.
        self.list_line(ListKind::Unordered, first, line, events);
        self.list_line(ListKind::Ordered, first, line, events);

        if first == Some(b'#') {
            self.heading_line(line, events);
        }

        self.paragraph_line(first, line, events);
    }

    /// Open, continue or close a list of `kind` for this line.
    fn list_line(
        &mut self,
        kind: ListKind,
        first: Option<u8>,
        line: Range,
        events: &mut Vec<BlockEvent>,
    ) {
        let open = self.state.list_flag(kind);

        if first == Some(kind.marker()) {
            if !*open {
                *open = true;
                events.push(BlockEvent::ListStart { kind });
            }
            let content = line.skip(1).trim(self.input);
            events.push(BlockEvent::ListItem(content));
        } else if *open {
            *open = false;
            events.push(BlockEvent::ListEnd { kind });
        }
    }

    /// Emit a heading; the level is the full run of leading `#`.
    fn heading_line(&mut self, line: Range, events: &mut Vec<BlockEvent>) {
        let text = line.slice(self.input.as_bytes());
        let hashes = text.iter().take_while(|&&b| b == b'#').count();

        events.push(BlockEvent::Heading {
            level: hashes as u32,
            content: line.skip(hashes as u32).trim(self.input),
        });
    }

    /// Paragraph handling: plain text opens or continues, blank closes.
    fn paragraph_line(&mut self, first: Option<u8>, line: Range, events: &mut Vec<BlockEvent>) {
        match first {
            None => {
                if self.state.in_paragraph {
                    self.state.in_paragraph = false;
                    events.push(BlockEvent::ParagraphEnd);
                }
            }
            Some(b'-' | b'*' | b'#') => {}
            Some(_) => {
                if self.state.in_paragraph {
                    events.push(BlockEvent::LineBreak);
                } else {
                    self.state.in_paragraph = true;
                    events.push(BlockEvent::ParagraphStart);
                }
                events.push(BlockEvent::ParagraphText(line));
            }
        }
    }

    /// Close whatever is still open, in fixed order: `ul`, `ol`, `p`.
    fn close_blocks(&mut self, events: &mut Vec<BlockEvent>) {
        for kind in [ListKind::Unordered, ListKind::Ordered] {
            let open = self.state.list_flag(kind);
            if *open {
                *open = false;
                events.push(BlockEvent::ListEnd { kind });
            }
        }
        if self.state.in_paragraph {
            self.state.in_paragraph = false;
            events.push(BlockEvent::ParagraphEnd);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Vec<BlockEvent> {
        let mut parser = BlockParser::new(input);
        let mut events = Vec::new();
        parser.parse(&mut events);
        events
    }

    fn get_text<'a>(input: &'a str, event: &BlockEvent) -> &'a str {
        match event {
            BlockEvent::ListItem(range) | BlockEvent::ParagraphText(range) => {
                range.slice_str(input)
            }
            BlockEvent::Heading { content, .. } => content.slice_str(input),
            _ => panic!("Expected text-carrying event, got {event:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_blank_lines() {
        assert!(parse("\n\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_simple_paragraph() {
        let input = "Hello, world!";
        let events = parse(input);

        assert_eq!(events.len(), 3);
        assert_eq!(events[0], BlockEvent::ParagraphStart);
        assert_eq!(get_text(input, &events[1]), "Hello, world!");
        assert_eq!(events[2], BlockEvent::ParagraphEnd);
    }

    #[test]
    fn test_paragraph_continuation_breaks() {
        let input = "one\n  two  \nthree";
        let events = parse(input);

        assert_eq!(events.len(), 7);
        assert_eq!(events[0], BlockEvent::ParagraphStart);
        assert_eq!(get_text(input, &events[1]), "one");
        assert_eq!(events[2], BlockEvent::LineBreak);
        assert_eq!(get_text(input, &events[3]), "two");
        assert_eq!(events[4], BlockEvent::LineBreak);
        assert_eq!(get_text(input, &events[5]), "three");
        assert_eq!(events[6], BlockEvent::ParagraphEnd);
    }

    #[test]
    fn test_blank_line_splits_paragraphs() {
        let events = parse("a\n\nb");
        assert_eq!(
            events
                .iter()
                .filter(|e| **e == BlockEvent::ParagraphStart)
                .count(),
            2
        );
        assert_eq!(events[2], BlockEvent::ParagraphEnd);
    }

    #[test]
    fn test_whitespace_line_closes_paragraph() {
        let events = parse("a\n   \nb");
        assert_eq!(events[2], BlockEvent::ParagraphEnd);
        assert_eq!(events[3], BlockEvent::ParagraphStart);
    }

    #[test]
    fn test_heading_levels() {
        let input = "# One\n### Three\n####### Seven";
        let events = parse(input);

        assert_eq!(events.len(), 3);
        for (event, (level, text)) in events.iter().zip([(1, "One"), (3, "Three"), (7, "Seven")]) {
            match event {
                BlockEvent::Heading { level: l, .. } => assert_eq!(*l, level),
                other => panic!("Expected heading, got {other:?}"),
            }
            assert_eq!(get_text(input, event), text);
        }
    }

    #[test]
    fn test_heading_without_space() {
        let input = "##Tight";
        let events = parse(input);
        assert!(matches!(events[0], BlockEvent::Heading { level: 2, .. }));
        assert_eq!(get_text(input, &events[0]), "Tight");
    }

    #[test]
    fn test_heading_only_hashes() {
        let input = "###";
        let events = parse(input);
        assert_eq!(events.len(), 1);
        assert_eq!(get_text(input, &events[0]), "");
    }

    #[test]
    fn test_unordered_list() {
        let input = "- a\n-b\n  -   c  ";
        let events = parse(input);

        assert_eq!(events.len(), 5);
        assert_eq!(
            events[0],
            BlockEvent::ListStart {
                kind: ListKind::Unordered
            }
        );
        assert_eq!(get_text(input, &events[1]), "a");
        assert_eq!(get_text(input, &events[2]), "b");
        assert_eq!(get_text(input, &events[3]), "c");
        assert_eq!(
            events[4],
            BlockEvent::ListEnd {
                kind: ListKind::Unordered
            }
        );
    }

    #[test]
    fn test_ordered_list() {
        let input = "* a\n* b";
        let events = parse(input);

        assert_eq!(events.len(), 4);
        assert_eq!(
            events[0],
            BlockEvent::ListStart {
                kind: ListKind::Ordered
            }
        );
        assert_eq!(
            events[3],
            BlockEvent::ListEnd {
                kind: ListKind::Ordered
            }
        );
    }

    #[test]
    fn test_switching_list_kinds() {
        let events = parse("- a\n* b");
        assert_eq!(
            events,
            vec![
                BlockEvent::ListStart {
                    kind: ListKind::Unordered
                },
                BlockEvent::ListItem(Range::new(2, 3)),
                BlockEvent::ListEnd {
                    kind: ListKind::Unordered
                },
                BlockEvent::ListStart {
                    kind: ListKind::Ordered
                },
                BlockEvent::ListItem(Range::new(6, 7)),
                BlockEvent::ListEnd {
                    kind: ListKind::Ordered
                },
            ]
        );
    }

    #[test]
    fn test_list_closed_before_heading() {
        let input = "- item\n# Head";
        let events = parse(input);

        assert_eq!(events.len(), 4);
        assert_eq!(
            events[2],
            BlockEvent::ListEnd {
                kind: ListKind::Unordered
            }
        );
        assert!(matches!(events[3], BlockEvent::Heading { level: 1, .. }));
    }

    #[test]
    fn test_paragraph_survives_list_and_heading() {
        let input = "text\n- item\n# Head\nmore";
        let events = parse(input);

        assert_eq!(events[0], BlockEvent::ParagraphStart);
        assert!(!events[..events.len() - 1].contains(&BlockEvent::ParagraphEnd));
        assert_eq!(events[events.len() - 3], BlockEvent::LineBreak);
        assert_eq!(get_text(input, &events[events.len() - 2]), "more");
        assert_eq!(events[events.len() - 1], BlockEvent::ParagraphEnd);
    }

    #[test]
    fn test_close_order_at_end_of_input() {
        let events = parse("text\n- item");
        let tail = &events[events.len() - 2..];
        assert_eq!(
            tail,
            [
                BlockEvent::ListEnd {
                    kind: ListKind::Unordered
                },
                BlockEvent::ParagraphEnd,
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let input = "- a\r\n- b\r\n";
        let events = parse(input);
        assert_eq!(get_text(input, &events[1]), "a");
        assert_eq!(get_text(input, &events[2]), "b");
        assert_eq!(events.len(), 4);
    }
}
