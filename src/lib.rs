//! Parse quake-flavored text markup into blocks.
//!
//! Quake markup is a small, line-oriented subset of Markdown: `#` headings, `>` blockquotes, `---` horizontal rules,
//! `-` lists (nested by indentation), and plain paragraphs. Parsing produces a [`block::Document`] of typed
//! [`block::Block`]s; turning those into HTML (or anything else) is left to the caller.
//!
//! ```
//! use quake_gen::block::{gen, Block};
//!
//! let doc = gen("# heading+\n> quoted\n---");
//! assert_eq!(doc.blocks.len(), 3);
//! assert!(matches!(doc.blocks[2], Block::HorizontalRule));
//! ```
pub mod block;
pub mod output;
pub mod run;
