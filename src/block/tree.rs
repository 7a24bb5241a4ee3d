use crate::block::parse::BlockParser;
use elem::*;

/// A fully parsed quake document.
///
/// This is just the ordered top-level [Block]s. There's no additional context to carry around: unlike full Markdown,
/// quake has no reference-style links or footnotes, so every block stands on its own.
///
/// See [`Document::gen`] for how to create one.
#[derive(Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Parse some quake text.
    ///
    /// This never fails: any line that isn't a heading, blockquote, horizontal rule or list item becomes a
    /// [`Block::Paragraph`], and blank lines are skipped.
    ///
    /// See the various examples in [`elem`] for examples of this parsing in action.
    pub fn gen(text: &str) -> Self {
        BlockParser::new().parse(text)
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Parse some quake text into a [Document].
///
/// This is the same as [`Document::gen`].
///
/// ```
/// use quake_gen::block::{*, elem::*};
///
/// let doc = gen("> quoted");
/// assert_eq!(doc.blocks, vec![Block::Blockquote(Blockquote{text: "quoted".to_string()})]);
/// ```
pub fn gen(text: &str) -> Document {
    Document::gen(text)
}

/// A single top-level node of a parsed quake document.
///
/// Each variant corresponds to one kind of line (or, for [`Block::List`], one contiguous run of list-item lines).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Block {
    Heading(Heading),
    Blockquote(Blockquote),
    /// A horizontal rule:
    ///
    /// ```text
    /// ---
    /// ```
    ///
    /// Any number of dashes (at least three) with nothing else on the line produces the same block.
    HorizontalRule,
    List(List),
    Paragraph(Paragraph),
}

/// Inner details of the [Block] variants.
pub mod elem {
    use super::*;

    /// A heading line.
    ///
    /// ```text
    /// ## Some title
    /// ```
    ///
    /// [`Heading::text`] is the label exactly as written (after trimming), including any inline link syntax, so that a
    /// renderer can still render the link. [`Heading::anchor`] is computed from the label with links reduced to their
    /// display text; see [`anchor_for`](crate::block::anchor_for).
    ///
    /// # Examples
    ///
    /// ```
    /// use quake_gen::block::{*, elem::*};
    /// let parsed = Document::gen("## [Quake](https://quake.inherd.org) Docs");
    ///
    /// let expected = vec![
    ///     Block::Heading(Heading{
    ///         level: 2,
    ///         text: "[Quake](https://quake.inherd.org) Docs".to_string(),
    ///         anchor: "quake-docs".to_string(),
    ///     }),
    /// ];
    /// assert_eq!(parsed.blocks, expected);
    /// ```
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Heading {
        /// Always between 1 and 6, inclusive.
        pub level: u8,
        pub text: String,
        pub anchor: String,
    }

    /// A block-quoted line.
    ///
    /// The text is whatever follows the `>`, trimmed.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Blockquote {
        pub text: String,
    }

    /// A plain line of text that didn't match any other rule.
    ///
    /// Unlike the other blocks, the paragraph's text is the raw line, including any leading whitespace.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Paragraph {
        pub text: String,
    }

    /// A list, possibly with nested sub-lists.
    ///
    /// Nesting comes from indentation: an item indented deeper than the item before it starts a sub-list owned by
    /// that earlier item. Any increase in leading spaces counts as deeper, and each line opens at most one new level.
    ///
    /// # Examples
    ///
    /// ```
    /// use quake_gen::block::{*, elem::*};
    /// let md_text = "- alpha\n  - bravo\n- charlie";
    /// let parsed = Document::gen(md_text);
    ///
    /// let expected = vec![
    ///     Block::List(List{
    ///         items: vec![
    ///             ListItem{
    ///                 text: "alpha".to_string(),
    ///                 children: Some(List{
    ///                     items: vec![ListItem{text: "bravo".to_string(), children: None}],
    ///                 }),
    ///             },
    ///             ListItem{text: "charlie".to_string(), children: None},
    ///         ],
    ///     }),
    /// ];
    /// assert_eq!(parsed.blocks, expected);
    /// ```
    #[derive(Clone, Default, Debug, PartialEq, Eq, Hash)]
    pub struct List {
        pub items: Vec<ListItem>,
    }

    /// An item within a [List].
    ///
    /// If `children` is `Some`, it always has at least one item.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ListItem {
        pub text: String,
        pub children: Option<List>,
    }

    impl List {
        /// Iterates over this list's items and all of their descendants, depth-first, along with each item's depth
        /// (0 for this list's own items).
        pub fn walk(&self) -> impl Iterator<Item = (usize, &ListItem)> {
            let mut stack: Vec<(usize, std::slice::Iter<'_, ListItem>)> = vec![(0, self.items.iter())];
            std::iter::from_fn(move || loop {
                let (depth, iter) = stack.last_mut()?;
                let depth = *depth;
                match iter.next() {
                    Some(item) => {
                        if let Some(children) = &item.children {
                            stack.push((depth + 1, children.items.iter()));
                        }
                        return Some((depth, item));
                    }
                    None => {
                        stack.pop();
                    }
                }
            })
        }
    }

    macro_rules! from_for_block {
        ($elem:ident => $variant:ident) => {
            impl From<$elem> for Block {
                fn from(value: $elem) -> Self {
                    Block::$variant(value)
                }
            }
        };
    }

    from_for_block!(Heading => Heading);
    from_for_block!(Blockquote => Blockquote);
    from_for_block!(List => List);
    from_for_block!(Paragraph => Paragraph);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::tree_test_utils::*;

    #[test]
    fn empty_doc() {
        let doc = Document::gen("");
        assert!(doc.is_empty());
        assert_eq!(doc, Document::default());
    }

    #[test]
    fn free_fn_matches_method() {
        let text = "# title\n- a\n  - b\n> q\n---\nplain";
        assert_eq!(gen(text), Document::gen(text));
    }

    #[test]
    fn from_impls() {
        let block: Block = Paragraph {
            text: "hi".to_string(),
        }
        .into();
        assert_eq!(block, blocks!["hi"][0]);
    }

    mod walk {
        use super::*;

        #[test]
        fn flat() {
            let list = list![item!("a"), item!("b")];
            let walked: Vec<_> = list.walk().map(|(depth, item)| (depth, item.text.as_str())).collect();
            assert_eq!(walked, vec![(0, "a"), (0, "b")]);
        }

        #[test]
        fn nested() {
            let list = list![
                item!("a" => [item!("a1" => [item!("a1x")]), item!("a2")]),
                item!("b"),
            ];
            let walked: Vec<_> = list.walk().map(|(depth, item)| (depth, item.text.as_str())).collect();
            assert_eq!(
                walked,
                vec![(0, "a"), (1, "a1"), (2, "a1x"), (1, "a2"), (0, "b")]
            );
        }

        #[test]
        fn empty() {
            let list = List::default();
            assert_eq!(list.walk().count(), 0);
        }
    }
}
