//! In-place textual updates of `SKILL.md` frontmatter fields.
//!
//! Only the targeted lines change; the rest of the file stays byte-identical.

use std::{borrow::Cow, sync::LazyLock};

use regex::{Captures, Regex};

use crate::parse::locate;

/// Values propagated from the manifest into each descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorFields<'a> {
    pub author: Option<&'a str>,
    pub repository: Option<&'a str>,
}

/// Rewrites descriptor fields without reparsing the file.
pub trait DescriptorPatcher {
    /// Return the patched content, borrowing the input when nothing changes.
    fn patch<'c>(&self, content: &'c str, fields: &DescriptorFields<'_>) -> Cow<'c, str>;
}

#[allow(clippy::expect_used)]
static AUTHOR_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^( {2}author:) [^\r\n]+$").expect("valid author pattern"));

#[allow(clippy::expect_used)]
static AUTHOR_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^( {2}author: [^\r\n]+)$").expect("valid author pattern"));

#[allow(clippy::expect_used)]
static REPOSITORY_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?mR)^( {2}repository:) [^\r\n]+$").expect("valid repository pattern")
});

/// Line-anchored patcher for the two-space-indented `metadata` fields
/// `author` and `repository`.
///
/// `author` is replaced only if already present. `repository` is replaced if
/// present, otherwise inserted on the line after `author`. Values are written
/// double-quoted. Only the frontmatter block is considered.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinePatcher;

impl DescriptorPatcher for LinePatcher {
    fn patch<'c>(&self, content: &'c str, fields: &DescriptorFields<'_>) -> Cow<'c, str> {
        let Ok(range) = locate(content) else {
            return Cow::Borrowed(content);
        };
        let block = &content[range.clone()];
        let mut patched = Cow::Borrowed(block);

        if let Some(author) = fields.author.filter(|a| !a.is_empty()) {
            patched = replace_first(patched, &AUTHOR_VALUE, |caps| {
                format!("{} \"{author}\"", &caps[1])
            });
        }

        if let Some(repository) = fields.repository.filter(|r| !r.is_empty()) {
            patched = if REPOSITORY_VALUE.is_match(&patched) {
                replace_first(patched, &REPOSITORY_VALUE, |caps| {
                    format!("{} \"{repository}\"", &caps[1])
                })
            } else {
                let line_ending = if block.contains("\r\n") { "\r\n" } else { "\n" };
                replace_first(patched, &AUTHOR_LINE, |caps| {
                    format!("{}{line_ending}  repository: \"{repository}\"", &caps[1])
                })
            };
        }

        match patched {
            Cow::Borrowed(_) => Cow::Borrowed(content),
            Cow::Owned(block) => Cow::Owned(format!(
                "{}{block}{}",
                &content[..range.start],
                &content[range.end..]
            )),
        }
    }
}

fn replace_first<'a>(
    text: Cow<'a, str>,
    pattern: &Regex,
    rep: impl Fn(&Captures<'_>) -> String,
) -> Cow<'a, str> {
    let replaced = match pattern.replacen(&text, 1, |caps: &Captures<'_>| rep(caps)) {
        Cow::Borrowed(_) => None,
        Cow::Owned(s) => Some(s),
    };
    match replaced {
        Some(s) if s != *text => Cow::Owned(s),
        _ => text,
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    const SKILL: &str = "---\nname: demo\nmetadata:\n  author: Your Name\n  version: \"1.0.0\"\n---\n\n# Demo\n  author: body text stays\n";

    fn fields<'a>(author: Option<&'a str>, repository: Option<&'a str>) -> DescriptorFields<'a> {
        DescriptorFields { author, repository }
    }

    #[test]
    fn replaces_author_and_inserts_repository() {
        let out = LinePatcher.patch(SKILL, &fields(Some("Ada"), Some("acme/skills")));
        assert_eq!(
            out,
            "---\nname: demo\nmetadata:\n  author: \"Ada\"\n  repository: \"acme/skills\"\n  version: \"1.0.0\"\n---\n\n# Demo\n  author: body text stays\n"
        );
    }

    #[test]
    fn updates_existing_repository_in_place() {
        let content = "---\nmetadata:\n  author: \"Ada\"\n  version: 1\n  repository: old/repo\n---\n";
        let out = LinePatcher.patch(content, &fields(None, Some("new/repo")));
        assert_eq!(
            out,
            "---\nmetadata:\n  author: \"Ada\"\n  version: 1\n  repository: \"new/repo\"\n---\n"
        );
    }

    #[test]
    fn unchanged_content_is_borrowed() {
        let content = "---\nmetadata:\n  author: \"Ada\"\n  repository: \"acme/skills\"\n---\n";
        let out = LinePatcher.patch(content, &fields(Some("Ada"), Some("acme/skills")));
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn patching_is_idempotent() {
        let f = fields(Some("Ada"), Some("acme/skills"));
        let once = LinePatcher.patch(SKILL, &f).into_owned();
        let twice = LinePatcher.patch(&once, &f);
        assert_eq!(twice, once);
        assert!(matches!(twice, Cow::Borrowed(_)));
    }

    #[test]
    fn no_author_line_means_no_repository_insert() {
        let content = "---\nname: demo\nmetadata:\n  version: 1\n---\n";
        let out = LinePatcher.patch(content, &fields(Some("Ada"), Some("acme/skills")));
        assert_eq!(out, content);
    }

    #[test]
    fn empty_fields_change_nothing() {
        let out = LinePatcher.patch(SKILL, &fields(Some(""), None));
        assert_eq!(out, SKILL);
    }

    #[test]
    fn values_with_dollar_signs_are_literal() {
        let out = LinePatcher.patch(SKILL, &fields(Some("$1 Corp"), None));
        assert!(out.contains("  author: \"$1 Corp\"\n"));
    }

    #[test]
    fn crlf_descriptor_keeps_line_endings() {
        let content = "---\r\nmetadata:\r\n  author: x\r\n---\r\n";
        let out = LinePatcher.patch(content, &fields(Some("Ada"), Some("a/b")));
        assert_eq!(
            out,
            "---\r\nmetadata:\r\n  author: \"Ada\"\r\n  repository: \"a/b\"\r\n---\r\n"
        );
    }

    #[test]
    fn content_without_frontmatter_is_untouched() {
        let content = "  author: someone\n";
        let out = LinePatcher.patch(content, &fields(Some("Ada"), None));
        assert_eq!(out, content);
    }
}
