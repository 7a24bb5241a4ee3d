//! Writing parsed [`Document`](crate::block::Document)s out.
//!
//! There are two formats: a JSON representation of the blocks (see [`SerializableDoc`]), and plain text (see
//! [`PlainWriter`]). Neither renders HTML; that's up to whatever consumes the blocks.
mod block_serde;
mod fmt_plain;

pub use block_serde::*;
pub use fmt_plain::*;
