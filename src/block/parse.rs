use crate::block::anchor::anchor_for;
use crate::block::elem::*;
use crate::block::{Block, Document};

/// Headings with more `#`s than this are clamped to it.
const MAX_HEADING_LEVEL: usize = 6;

/// Minimum number of dashes in a horizontal rule.
const MIN_RULE_DASHES: usize = 3;

/// What a single line of input is, before any list reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    Blank,
    Heading { level: u8, label: &'a str },
    Blockquote(&'a str),
    HorizontalRule,
    ListItem { indent: usize, content: &'a str },
    Paragraph(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classifies a line. The first matching rule wins: heading, blockquote, horizontal rule, list item, and finally
    /// paragraph.
    pub(crate) fn classify(line: &'a str) -> Self {
        if line.trim().is_empty() {
            return Self::Blank;
        }
        if let Some((level, label)) = try_heading(line) {
            return Self::Heading { level, label };
        }
        if let Some(text) = line.strip_prefix('>') {
            return Self::Blockquote(text.trim());
        }
        if is_horizontal_rule(line) {
            return Self::HorizontalRule;
        }
        if let Some((indent, content)) = try_list_item(line) {
            return Self::ListItem { indent, content };
        }
        Self::Paragraph(line)
    }
}

fn try_heading(line: &str) -> Option<(u8, &str)> {
    let markers = line.bytes().take_while(|b| *b == b'#').count();
    if markers == 0 {
        return None;
    }
    let rest = &line[markers..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    // min() keeps this within u8
    let level = markers.min(MAX_HEADING_LEVEL) as u8;
    Some((level, rest.trim()))
}

fn is_horizontal_rule(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= MIN_RULE_DASHES && trimmed.bytes().all(|b| b == b'-')
}

fn try_list_item(line: &str) -> Option<(usize, &str)> {
    let indent = line.bytes().take_while(|b| *b == b' ').count();
    let content = line[indent..].strip_prefix("- ")?;
    Some((indent, content.trim()))
}

/// Turns lines into [Block]s, one line at a time.
pub(crate) struct BlockParser {
    blocks: Vec<Block>,
    /// The list currently being built, if the last non-blank line was a list item.
    list: Option<ListBuilder>,
}

impl BlockParser {
    pub(crate) fn new() -> Self {
        Self {
            blocks: Vec::new(),
            list: None,
        }
    }

    pub(crate) fn parse(mut self, text: &str) -> Document {
        log::debug!("Starting quake parse");
        for (idx, line) in text.lines().enumerate() {
            let kind = LineKind::classify(line);
            log::debug!("Parsed line {}: {:?}", idx + 1, kind);
            self.accept(kind);
        }
        self.close_list();
        log::debug!("Finished quake parse with {} blocks", self.blocks.len());
        Document { blocks: self.blocks }
    }

    fn accept(&mut self, kind: LineKind) {
        let block = match kind {
            LineKind::Blank => return,
            LineKind::ListItem { indent, content } => {
                self.list
                    .get_or_insert_with(ListBuilder::new)
                    .push_item(indent, content.to_string());
                return;
            }
            LineKind::Heading { level, label } => Block::Heading(Heading {
                level,
                text: label.to_string(),
                anchor: anchor_for(label),
            }),
            LineKind::Blockquote(text) => Block::Blockquote(Blockquote { text: text.to_string() }),
            LineKind::HorizontalRule => Block::HorizontalRule,
            LineKind::Paragraph(text) => Block::Paragraph(Paragraph { text: text.to_string() }),
        };
        self.close_list();
        self.blocks.push(block);
    }

    fn close_list(&mut self) {
        if let Some(list) = self.list.take().and_then(ListBuilder::finish) {
            self.blocks.push(Block::List(list));
        }
    }
}

/// A list under construction, at one indentation width.
#[derive(Debug)]
struct Frame {
    indent: usize,
    items: Vec<ListItem>,
}

impl Frame {
    fn new(indent: usize) -> Self {
        Self {
            indent,
            items: Vec::new(),
        }
    }
}

/// Rebuilds a nested list from indented list-item lines.
///
/// The root frame (indent 0) becomes the top-level [List]. Each nested frame belongs to the last item of the frame
/// below it; it gets attached as that item's `children` when it's closed. Until then, that item's `children` stays
/// `None`, which is also how we know whether a deeper line should open a new level.
#[derive(Debug)]
struct ListBuilder {
    root: Frame,
    nested: Vec<Frame>,
}

impl ListBuilder {
    fn new() -> Self {
        Self {
            root: Frame::new(0),
            nested: Vec::new(),
        }
    }

    fn top(&mut self) -> &mut Frame {
        match self.nested.last_mut() {
            Some(frame) => frame,
            None => &mut self.root,
        }
    }

    fn push_item(&mut self, indent: usize, text: String) {
        while self.nested.last().is_some_and(|frame| frame.indent >= indent) {
            self.close_top();
        }

        let top = self.top();
        let opens_level = top.indent < indent && top.items.last().is_some_and(|item| item.children.is_none());
        if opens_level {
            log::trace!("opening list level at indent {indent}");
            self.nested.push(Frame::new(indent));
        }

        self.top().items.push(ListItem { text, children: None });
    }

    fn close_top(&mut self) {
        let Some(frame) = self.nested.pop() else {
            return;
        };
        log::trace!("closing list level at indent {}", frame.indent);
        // A frame is only ever opened under an existing item, and that item can't have gotten children any other way.
        if let Some(owner) = self.top().items.last_mut() {
            owner.children = Some(List { items: frame.items });
        }
    }

    fn finish(mut self) -> Option<List> {
        while !self.nested.is_empty() {
            self.close_top();
        }
        if self.root.items.is_empty() {
            None
        } else {
            Some(List { items: self.root.items })
        }
    }
}
