#[cfg(test)]
pub(crate) use test_utils::*;

#[cfg(test)]
mod test_utils {
    use crate::block::elem::Paragraph;
    use crate::block::Block;

    /// A `Vec<Block>` from anything that converts into a [Block]. String literals become paragraphs.
    macro_rules! blocks {
        [$($block:expr),* $(,)?] => {
            {
                #[allow(unused_mut)]
                let mut result: Vec<crate::block::Block> = Vec::new();
                $(result.push(crate::block::Block::from($block));)*
                result
            }
        };
    }
    pub(crate) use blocks;

    macro_rules! heading {
        ($level:literal, $text:literal, $anchor:literal) => {
            crate::block::elem::Heading {
                level: $level,
                text: $text.to_string(),
                anchor: $anchor.to_string(),
            }
        };
    }
    pub(crate) use heading;

    macro_rules! blockquote {
        ($text:literal) => {
            crate::block::elem::Blockquote {
                text: $text.to_string(),
            }
        };
    }
    pub(crate) use blockquote;

    macro_rules! list {
        [$($item:expr),* $(,)?] => {
            crate::block::elem::List {
                items: vec![$($item),*],
            }
        };
    }
    pub(crate) use list;

    /// A list item, optionally with children: `item!("a")` or `item!("a" => [item!("b")])`.
    macro_rules! item {
        ($text:literal) => {
            crate::block::elem::ListItem {
                text: $text.to_string(),
                children: None,
            }
        };
        ($text:literal => [$($child:expr),* $(,)?]) => {
            crate::block::elem::ListItem {
                text: $text.to_string(),
                children: Some(crate::block::elem::List {
                    items: vec![$($child),*],
                }),
            }
        };
    }
    pub(crate) use item;

    impl From<&str> for Block {
        fn from(value: &str) -> Self {
            Block::Paragraph(Paragraph {
                text: value.to_string(),
            })
        }
    }
}
