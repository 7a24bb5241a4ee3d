use crate::block::elem::*;
use crate::block::{Block, Document};
use serde::{Serialize, Serializer};

/// A serializable view of a [Document].
///
/// Each block is externally tagged by its kind, in snake case:
///
/// ```
/// use quake_gen::block::Document;
/// use quake_gen::output::SerializableDoc;
///
/// let doc = Document::gen("# Hello World\n---\n- a\n  - b");
/// let json = serde_json::to_string(&SerializableDoc::new(&doc)).unwrap();
/// assert_eq!(
///     json,
///     r#"{"blocks":[{"heading":{"level":1,"text":"Hello World","anchor":"hello-world"}},{"horizontal_rule":null},{"list":[{"text":"a","children":[{"text":"b"}]}]}]}"#
/// );
/// ```
#[derive(Serialize)]
pub struct SerializableDoc<'a> {
    blocks: Vec<SerdeBlock<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum SerdeBlock<'a> {
    Heading {
        level: u8,
        text: &'a str,
        anchor: &'a str,
    },
    Blockquote(&'a str),
    #[serde(serialize_with = "serialize_horizontal_rule")]
    HorizontalRule,
    List(Vec<SerdeListItem<'a>>),
    Paragraph(&'a str),
}

fn serialize_horizontal_rule<S: Serializer>(ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_none()
}

#[derive(Serialize)]
struct SerdeListItem<'a> {
    text: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<SerdeListItem<'a>>>,
}

impl<'a> SerializableDoc<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self {
            blocks: doc.blocks.iter().map(SerdeBlock::from).collect(),
        }
    }
}

impl<'a> From<&'a Document> for SerializableDoc<'a> {
    fn from(doc: &'a Document) -> Self {
        Self::new(doc)
    }
}

impl<'a> From<&'a Block> for SerdeBlock<'a> {
    fn from(block: &'a Block) -> Self {
        match block {
            Block::Heading(Heading { level, text, anchor }) => Self::Heading {
                level: *level,
                text,
                anchor,
            },
            Block::Blockquote(Blockquote { text }) => Self::Blockquote(text),
            Block::HorizontalRule => Self::HorizontalRule,
            Block::List(list) => Self::List(SerdeListItem::all_from(list)),
            Block::Paragraph(Paragraph { text }) => Self::Paragraph(text),
        }
    }
}

impl<'a> SerdeListItem<'a> {
    fn all_from(list: &'a List) -> Vec<Self> {
        list.items
            .iter()
            .map(|item| Self {
                text: &item.text,
                children: item.children.as_ref().map(Self::all_from),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::utils_for_test::*;
    use indoc::indoc;

    /// One of each kind of block.
    const ALL_KINDS: &str = "# title\n> quote\n---\n- item\n  - sub\nbody";

    variants_checker!(all_kinds_sample_covers_every_block = Block {
        Heading(_),
        Blockquote(_),
        HorizontalRule,
        List(_),
        Paragraph(_),
    } in Document::gen(ALL_KINDS).blocks.iter());

    #[test]
    fn heading() {
        check("## [Docs](https://quake.inherd.org) page", |json| {
            assert_eq!(
                json,
                serde_json::json!({"blocks": [
                    {"heading": {
                        "level": 2,
                        "text": "[Docs](https://quake.inherd.org) page",
                        "anchor": "docs-page",
                    }}
                ]})
            );
        });
    }

    #[test]
    fn blockquote() {
        check("> quoted", |json| {
            assert_eq!(json, serde_json::json!({"blocks": [{"blockquote": "quoted"}]}));
        });
    }

    #[test]
    fn horizontal_rule() {
        check("---", |json| {
            assert_eq!(json, serde_json::json!({"blocks": [{"horizontal_rule": null}]}));
        });
    }

    #[test]
    fn paragraph() {
        check("  raw text", |json| {
            assert_eq!(json, serde_json::json!({"blocks": [{"paragraph": "  raw text"}]}));
        });
    }

    #[test]
    fn nested_list() {
        check(
            indoc! {r#"
                - one
                  - one.a
                    - one.a.i
                - two"#},
            |json| {
                assert_eq!(
                    json,
                    serde_json::json!({"blocks": [{"list": [
                        {"text": "one", "children": [
                            {"text": "one.a", "children": [{"text": "one.a.i"}]}
                        ]},
                        {"text": "two"},
                    ]}]})
                );
            },
        );
    }

    #[test]
    fn all_kinds() {
        check(ALL_KINDS, |json| {
            assert_eq!(
                json,
                serde_json::json!({"blocks": [
                    {"heading": {"level": 1, "text": "title", "anchor": "title"}},
                    {"blockquote": "quote"},
                    {"horizontal_rule": null},
                    {"list": [{"text": "item", "children": [{"text": "sub"}]}]},
                    {"paragraph": "body"},
                ]})
            );
        });
    }

    #[test]
    fn empty_doc() {
        let doc = Document::default();
        let json = serde_json::to_value(SerializableDoc::from(&doc)).unwrap();
        assert_eq!(json, serde_json::json!({"blocks": []}));
    }

    fn check<F>(text: &str, verify: F)
    where
        F: FnOnce(serde_json::Value),
    {
        let doc = Document::gen(text);
        let json = serde_json::to_value(SerializableDoc::new(&doc)).unwrap();
        verify(json);
    }
}
