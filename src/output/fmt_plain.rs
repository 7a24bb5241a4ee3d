use crate::block::elem::*;
use crate::block::{strip_inline_links, Block};
use std::borrow::Cow;
use std::io::{self, Write};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlainWriterOptions {
    /// Whether to put a blank line between blocks.
    pub include_breaks: bool,
}

/// Writes blocks as plain text.
///
/// Each block's text goes on its own line. Headings lose their link syntax (just the link labels are kept), paragraphs
/// are trimmed, and each list item goes on its own line regardless of how deeply it's nested. Horizontal rules have no
/// text, so they produce nothing at all.
///
/// ```
/// use quake_gen::block::Document;
/// use quake_gen::output::{PlainWriter, PlainWriterOptions};
///
/// let doc = Document::gen("# [Quake](https://quake.inherd.org)\n---\n- a\n  - b");
/// let mut out = Vec::new();
/// PlainWriter::with_options(PlainWriterOptions::default())
///     .write(&doc.blocks, &mut out)
///     .unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Quake\na\nb\n");
/// ```
pub struct PlainWriter {
    options: PlainWriterOptions,
}

impl PlainWriter {
    pub fn with_options(options: PlainWriterOptions) -> Self {
        Self { options }
    }

    pub fn write<'a, I, W>(&self, blocks: I, out: &mut W) -> io::Result<()>
    where
        I: IntoIterator<Item = &'a Block>,
        W: Write,
    {
        let mut wrote_any = false;
        for block in blocks {
            let lines = block_lines(block);
            if lines.is_empty() {
                continue;
            }
            if wrote_any && self.options.include_breaks {
                writeln!(out)?;
            }
            for line in lines {
                writeln!(out, "{line}")?;
            }
            wrote_any = true;
        }
        out.flush()
    }
}

fn block_lines(block: &Block) -> Vec<Cow<'_, str>> {
    match block {
        Block::Heading(Heading { text, .. }) => vec![strip_inline_links(text)],
        Block::Blockquote(Blockquote { text }) => vec![Cow::Borrowed(text.as_str())],
        Block::HorizontalRule => Vec::new(),
        Block::List(list) => list.walk().map(|(_, item)| Cow::Borrowed(item.text.as_str())).collect(),
        Block::Paragraph(Paragraph { text }) => vec![Cow::Borrowed(text.trim())],
    }
}
