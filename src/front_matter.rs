//! Front-matter extraction.
//!
//! A document may start with a metadata block fenced by two `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-01-01
//! ---
//! Body text
//! ```
//!
//! Each line inside the block is `key: value`. The first colon separates the
//! key from the value; any further colons belong to the value, so timestamps
//! like `published: 2024-01-01T10:00:00` survive intact. There is no quoting,
//! escaping, or nesting — every key and value is a plain string.
//!
//! Parsing never fails. A document without the fenced block is all body, and
//! lines that don't look like `key: value` are dropped.

use std::collections::BTreeMap;

/// Key/value metadata from the front-matter block.
pub type FrontMatter = BTreeMap<String, String>;

const OPEN: &str = "---\n";
const CLOSE: &str = "\n---\n";

/// A document split into its metadata and Markdown body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    pub front_matter: FrontMatter,
    pub body: String,
}

impl ParsedDocument {
    /// Look up a front-matter value, treating an empty value as absent.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.front_matter
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Split `raw` into front matter and body.
pub fn parse(raw: &str) -> ParsedDocument {
    match split_block(raw) {
        Some((block, body)) => ParsedDocument {
            front_matter: parse_block(block),
            body: body.to_string(),
        },
        None => ParsedDocument {
            front_matter: FrontMatter::new(),
            body: raw.to_string(),
        },
    }
}

/// Locate the fenced block, returning `(inner, body)`.
///
/// The inner region is the shortest one that is followed by a closing fence.
fn split_block(raw: &str) -> Option<(&str, &str)> {
    let rest = raw.strip_prefix(OPEN)?;
    if let Some(body) = rest.strip_prefix(OPEN) {
        return Some(("", body));
    }
    let end = rest.find(CLOSE)?;
    Some((&rest[..end], &rest[end + CLOSE.len()..]))
}

fn parse_block(block: &str) -> FrontMatter {
    block
        .lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.trim().to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_block_returns_input_as_body() {
        let raw = "# Hello\n\nJust markdown.";
        let doc = parse(raw);
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, raw);
    }

    #[test]
    fn empty_document() {
        let doc = parse("");
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, "");
    }

    #[test]
    fn basic_block() {
        let doc = parse("---\ntitle: Hello\ndate: 2024-01-01\n---\nBody text");
        assert_eq!(doc.front_matter["title"], "Hello");
        assert_eq!(doc.front_matter["date"], "2024-01-01");
        assert_eq!(doc.body, "Body text");
    }

    #[test]
    fn value_keeps_extra_colons() {
        let doc = parse("---\ntime: 10:30: late\n---\n");
        assert_eq!(doc.front_matter["time"], "10:30: late");
    }

    #[test]
    fn keys_and_values_are_trimmed() {
        let doc = parse("---\n  title  :   Spaced Out   \n---\nx");
        assert_eq!(doc.front_matter["title"], "Spaced Out");
    }

    #[test]
    fn lines_without_colon_are_skipped() {
        let doc = parse("---\njust text\ntitle: Kept\n---\nbody");
        assert_eq!(doc.front_matter.len(), 1);
        assert_eq!(doc.front_matter["title"], "Kept");
    }

    #[test]
    fn empty_key_is_skipped() {
        let doc = parse("---\n: orphan\ntitle: Kept\n---\nbody");
        assert_eq!(doc.front_matter.len(), 1);
        assert!(!doc.front_matter.contains_key(""));
    }

    #[test]
    fn empty_value_is_recorded() {
        let doc = parse("---\ndescription:\n---\nbody");
        assert_eq!(doc.front_matter["description"], "");
        assert_eq!(doc.field("description"), None);
    }

    #[test]
    fn later_duplicate_key_wins() {
        let doc = parse("---\ntitle: First\ntitle: Second\n---\nbody");
        assert_eq!(doc.front_matter["title"], "Second");
    }

    #[test]
    fn empty_block() {
        let doc = parse("---\n---\nbody");
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn empty_block_closes_at_second_fence() {
        let doc = parse("---\n---\n---\nbody");
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, "---\nbody");
    }

    #[test]
    fn blank_line_block() {
        let doc = parse("---\n\n---\nbody");
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, "body");
    }

    #[test]
    fn unclosed_block_is_body() {
        let raw = "---\ntitle: Hello\nno closing fence";
        let doc = parse(raw);
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, raw);
    }

    #[test]
    fn closing_fence_needs_trailing_newline() {
        let raw = "---\ntitle: Hello\n---";
        let doc = parse(raw);
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, raw);
    }

    #[test]
    fn block_must_start_the_document() {
        let raw = "intro\n---\ntitle: Hello\n---\nbody";
        let doc = parse(raw);
        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, raw);
    }

    #[test]
    fn body_keeps_later_horizontal_rules() {
        let doc = parse("---\ntitle: T\n---\nabove\n---\nbelow\n");
        assert_eq!(doc.front_matter["title"], "T");
        assert_eq!(doc.body, "above\n---\nbelow\n");
    }
}
