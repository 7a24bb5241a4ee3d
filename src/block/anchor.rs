use fancy_regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

/// Matches an inline link, `[label](url)`. The label is capture group 1.
///
/// Labels can't contain `]`, and urls can't contain whitespace or `)`. There's no support for titles or nested
/// brackets; anything that doesn't fit the pattern is left as plain text.
const INLINE_LINK: &str = r"\[([^\]]*)\]\(([^)\s]*)\)";

fn inline_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(INLINE_LINK).expect("invalid inline link pattern"))
}

/// Replaces every inline link `[label](url)` in the text with just its `label`.
///
/// Text without links is returned as-is, without allocating.
pub fn strip_inline_links(text: &str) -> Cow<'_, str> {
    inline_link_re().replace_all(text, |caps: &Captures| caps[1].to_string())
}

/// Computes a heading's anchor from its raw label.
///
/// Inline links are reduced to their labels first. After that, a label with no whitespace and no uppercase characters
/// is used verbatim (so `heading+` stays `heading+`). Anything else gets normalized: lowercased, whitespace runs
/// replaced by a single `-`, and every character other than `a-z`, `0-9` and `-` dropped.
///
/// ```
/// use quake_gen::block::anchor_for;
///
/// assert_eq!(anchor_for("heading+"), "heading+");
/// assert_eq!(anchor_for("[heading+](https://quake.inherd.org)"), "heading+");
/// assert_eq!(anchor_for("Hello, World!"), "hello-world");
/// ```
pub fn anchor_for(raw_label: &str) -> String {
    let plain = strip_inline_links(raw_label);
    let plain = plain.trim();
    if !plain.chars().any(|ch| ch.is_whitespace() || ch.is_uppercase()) {
        return plain.to_string();
    }
    slugify(plain)
}

fn slugify(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for (idx, word) in text.split_whitespace().enumerate() {
        if idx > 0 {
            result.push('-');
        }
        for ch in word.chars().flat_map(char::to_lowercase) {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
                result.push(ch);
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_compiles() {
        let _ = inline_link_re();
    }

    mod stripping {
        use super::*;

        #[test]
        fn no_links() {
            let stripped = strip_inline_links("just text");
            assert!(matches!(stripped, Cow::Borrowed(_)));
            assert_eq!(stripped, "just text");
        }

        #[test]
        fn whole_label_is_link() {
            assert_eq!(strip_inline_links("[heading+](https://quake.inherd.org)"), "heading+");
        }

        #[test]
        fn surrounding_text() {
            assert_eq!(
                strip_inline_links("see [the docs](https://example.com) first"),
                "see the docs first"
            );
        }

        #[test]
        fn multiple_links() {
            assert_eq!(
                strip_inline_links("[a](https://a.example) and [b](https://b.example)"),
                "a and b"
            );
        }

        #[test]
        fn empty_label() {
            assert_eq!(strip_inline_links("x [](https://example.com) y"), "x  y");
        }

        #[test]
        fn brackets_without_url_are_kept() {
            assert_eq!(strip_inline_links("[not a link] (nope)"), "[not a link] (nope)");
        }

        #[test]
        fn url_with_whitespace_is_not_a_link() {
            assert_eq!(strip_inline_links("[a](not a url)"), "[a](not a url)");
        }
    }

    mod anchors {
        use super::*;

        #[test]
        fn verbatim_when_simple() {
            assert_eq!(anchor_for("heading+"), "heading+");
            assert_eq!(anchor_for("h1"), "h1");
            assert_eq!(anchor_for("already-slugged"), "already-slugged");
        }

        #[test]
        fn surrounding_whitespace_is_trimmed() {
            assert_eq!(anchor_for("  h1 "), "h1");
        }

        #[test]
        fn link_label_used_for_anchor() {
            assert_eq!(anchor_for("[heading+](https://quake.inherd.org)"), "heading+");
        }

        #[test]
        fn spaces_become_hyphens() {
            assert_eq!(anchor_for("hello world"), "hello-world");
            assert_eq!(anchor_for("hello \t  world"), "hello-world");
        }

        #[test]
        fn uppercase_is_lowered() {
            assert_eq!(anchor_for("Quake"), "quake");
        }

        #[test]
        fn punctuation_dropped_when_normalizing() {
            assert_eq!(anchor_for("What's New?"), "whats-new");
            assert_eq!(anchor_for("C++ and Rust"), "c-and-rust");
        }

        #[test]
        fn non_ascii_dropped_when_normalizing() {
            assert_eq!(anchor_for("Über alles"), "ber-alles");
        }

        #[test]
        fn empty() {
            assert_eq!(anchor_for(""), "");
            assert_eq!(anchor_for("   "), "");
        }

        #[test]
        fn deterministic() {
            assert_eq!(anchor_for("Same Title"), anchor_for("Same Title"));
        }
    }
}
