//! Parsing quake text into [Block]s.
//!
//! The entry point is [`gen`] (or [`Document::gen`], which is the same thing). Parsing is total: every input produces
//! a [Document], even if every line ends up as a [`Block::Paragraph`].
mod anchor;
mod parse;
mod tree;

pub use anchor::{anchor_for, strip_inline_links};
pub use tree::*;

#[cfg(test)]
mod tree_test_utils;
