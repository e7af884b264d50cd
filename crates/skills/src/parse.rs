//! Parser for the restricted two-level frontmatter dialect used in `SKILL.md`.
//!
//! ```text
//! ---
//! name: my-skill
//! description: "Quoted values lose their quotes"
//! tags: ["json", "arrays", "are", "parsed"]
//! metadata:
//!   version: "1.0.0"
//!   keywords: a, b, c
//! ---
//! ```
//!
//! A top-level key with an empty value opens a nested map; deeper-indented
//! lines that follow belong to it. There is no further nesting, no block
//! scalars and no flow maps.

use std::{collections::BTreeMap, ops::Range};

/// A single parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    /// A `[...]` value that parsed as JSON.
    Json(serde_json::Value),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Json(_) => None,
        }
    }

    fn is_empty_text(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

/// A top-level frontmatter entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Value(Value),
    Nested(BTreeMap<String, Value>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrontmatterError {
    #[error("SKILL.md must start with a frontmatter block delimited by ---")]
    Missing,
    #[error("SKILL.md is missing the closing --- of its frontmatter")]
    Unclosed,
}

/// Parsed frontmatter of a descriptor file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    fields: BTreeMap<String, Field>,
}

impl Frontmatter {
    pub fn parse(content: &str) -> Result<Self, FrontmatterError> {
        let range = locate(content)?;
        Ok(Self::parse_block(&content[range]))
    }

    fn parse_block(block: &str) -> Self {
        let mut fields = BTreeMap::new();
        // Key and indentation of the nested map currently being filled.
        let mut open: Option<(String, usize)> = None;

        for line in block.lines() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some(colon) = line.find(':') else {
                continue;
            };

            let indent = line.len() - trimmed.len();
            let key = line[..colon].trim().to_string();
            let value = parse_value(&line[colon + 1..]);

            if let Some((parent, parent_indent)) = &open
                && indent > *parent_indent
            {
                if !value.is_empty_text()
                    && let Some(Field::Nested(map)) = fields.get_mut(parent)
                {
                    map.insert(key, value);
                }
                continue;
            }

            if value.is_empty_text() {
                fields.insert(key.clone(), Field::Nested(BTreeMap::new()));
                open = Some((key, indent));
            } else {
                fields.insert(key, Field::Value(value));
                open = None;
            }
        }

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.get(key)
    }

    /// Top-level text value, if present and non-empty.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.fields.get(key) {
            Some(Field::Value(v)) => v.as_text().filter(|s| !s.is_empty()),
            _ => None,
        }
    }

    pub fn nested(&self, key: &str) -> Option<&BTreeMap<String, Value>> {
        match self.fields.get(key) {
            Some(Field::Nested(map)) => Some(map),
            _ => None,
        }
    }

    /// Text value of `key.sub`, if present and non-empty.
    pub fn nested_text(&self, key: &str, sub: &str) -> Option<&str> {
        self.nested(key)?
            .get(sub)?
            .as_text()
            .filter(|s| !s.is_empty())
    }
}

/// Byte range of the frontmatter body (between the `---` lines).
///
/// The opening delimiter must be the first line of the file; the block ends
/// at the first following line that is exactly `---`.
pub fn locate(content: &str) -> Result<Range<usize>, FrontmatterError> {
    let mut offset = 0;
    let mut lines = content.split_inclusive('\n');

    let first = lines.next().ok_or(FrontmatterError::Missing)?;
    if first.trim_end() != "---" {
        return Err(FrontmatterError::Missing);
    }
    offset += first.len();
    let start = offset;

    for line in lines {
        if line.trim_end() == "---" {
            return Ok(start..offset);
        }
        offset += line.len();
    }
    Err(FrontmatterError::Unclosed)
}

fn parse_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        return match serde_json::from_str(trimmed) {
            Ok(json) => Value::Json(json),
            Err(_) => Value::Text(trimmed.to_string()),
        };
    }
    let quoted = trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')));
    if quoted {
        return Value::Text(trimmed[1..trimmed.len() - 1].to_string());
    }
    Value::Text(trimmed.to_string())
}

/// Split a comma-separated keyword string, trimming pieces and dropping
/// empty ones.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "---\nname: pdf-tools\ndescription: \"Work with PDFs: split, merge\"\nlicense: 'Apache-2.0'\nmetadata:\n  author: Jane\n  version: \"2.1.0\"\n  keywords: pdf, docs , ,merge\n---\n\n# PDF tools\n\nname: not-frontmatter\n";

    #[test]
    fn parses_top_level_and_nested_fields() {
        let fm = Frontmatter::parse(SAMPLE).unwrap();
        assert_eq!(fm.text("name"), Some("pdf-tools"));
        assert_eq!(fm.text("description"), Some("Work with PDFs: split, merge"));
        assert_eq!(fm.text("license"), Some("Apache-2.0"));
        assert_eq!(fm.nested_text("metadata", "author"), Some("Jane"));
        assert_eq!(fm.nested_text("metadata", "version"), Some("2.1.0"));
        assert_eq!(
            fm.nested_text("metadata", "keywords"),
            Some("pdf, docs , ,merge")
        );
    }

    #[test]
    fn body_is_not_parsed() {
        let fm = Frontmatter::parse(SAMPLE).unwrap();
        assert_eq!(fm.text("name"), Some("pdf-tools"));
        assert!(fm.get("# PDF tools").is_none());
    }

    #[test]
    fn json_arrays_are_parsed() {
        let fm = Frontmatter::parse("---\ntags: [\"a\", \"b\"]\nbad: [not json]\n---\n").unwrap();
        assert_eq!(
            fm.get("tags"),
            Some(&Field::Value(Value::Json(serde_json::json!(["a", "b"]))))
        );
        assert_eq!(fm.text("bad"), Some("[not json]"));
    }

    #[test]
    fn nested_block_closes_on_dedent() {
        let fm =
            Frontmatter::parse("---\nmetadata:\n  version: 1.0.0\nname: after\n---\n").unwrap();
        assert_eq!(fm.nested_text("metadata", "version"), Some("1.0.0"));
        assert_eq!(fm.text("name"), Some("after"));
        assert!(fm.nested("metadata").unwrap().get("name").is_none());
    }

    #[test]
    fn indented_line_without_open_block_is_top_level() {
        let fm = Frontmatter::parse("---\nname: x\n  stray: value\n---\n").unwrap();
        assert_eq!(fm.text("stray"), Some("value"));
    }

    #[test]
    fn empty_nested_values_are_dropped() {
        let fm = Frontmatter::parse("---\nmetadata:\n  author:\n  version: 1\n---\n").unwrap();
        let meta = fm.nested("metadata").unwrap();
        assert!(meta.get("author").is_none());
        assert_eq!(fm.nested_text("metadata", "version"), Some("1"));
    }

    #[test]
    fn lines_without_colon_and_comments_are_ignored() {
        let fm = Frontmatter::parse("---\njust words\n# note: ignored\nname: ok\n---\n").unwrap();
        assert_eq!(fm.text("name"), Some("ok"));
        assert!(fm.get("# note").is_none());
    }

    #[test]
    fn crlf_line_endings() {
        let fm = Frontmatter::parse("---\r\nname: win\r\nmetadata:\r\n  version: 3\r\n---\r\n").unwrap();
        assert_eq!(fm.text("name"), Some("win"));
        assert_eq!(fm.nested_text("metadata", "version"), Some("3"));
    }

    #[test]
    fn missing_and_unclosed_blocks_are_errors() {
        assert_eq!(
            Frontmatter::parse("# No frontmatter\n"),
            Err(FrontmatterError::Missing)
        );
        assert_eq!(
            Frontmatter::parse("\n---\nname: x\n---\n"),
            Err(FrontmatterError::Missing)
        );
        assert_eq!(
            Frontmatter::parse("---\nname: x\nno closing\n"),
            Err(FrontmatterError::Unclosed)
        );
        assert_eq!(Frontmatter::parse(""), Err(FrontmatterError::Missing));
    }

    #[test]
    fn locate_returns_inner_range() {
        let content = "---\na: 1\n---\nbody";
        let range = locate(content).unwrap();
        assert_eq!(&content[range], "a: 1\n");
    }

    #[test]
    fn single_quote_character_is_not_stripped() {
        assert_eq!(parse_value(" \" "), Value::Text("\"".into()));
        assert_eq!(parse_value("''"), Value::Text(String::new()));
    }

    #[test]
    fn keywords_are_split_and_trimmed() {
        assert_eq!(split_keywords("a, b , c"), vec!["a", "b", "c"]);
        assert_eq!(split_keywords(" , ,"), Vec::<String>::new());
    }
}
