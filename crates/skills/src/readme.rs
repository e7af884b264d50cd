//! The generated skills table in `README.md`.

use std::path::Path;

use crate::{error::Result, types::SkillRecord};

pub const START_MARKER: &str = "<!-- START:Available-Skills -->";
pub const END_MARKER: &str = "<!-- END:Available-Skills -->";

/// Descriptions longer than this are cut and suffixed with `...`.
const MAX_DESCRIPTION_CHARS: usize = 80;

const EMPTY_PLACEHOLDER: &str = "\n*No skills available yet.*\n";

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_DESCRIPTION_CHARS {
        return text.to_string();
    }
    let kept: String = text.chars().take(MAX_DESCRIPTION_CHARS - 3).collect();
    format!("{kept}...")
}

/// Render the markdown that goes between the markers.
pub fn render_skills_table(skills: &[SkillRecord]) -> String {
    if skills.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let mut lines = vec![
        String::new(),
        "| Skill | Description |".to_string(),
        "| ----- | ----------- |".to_string(),
    ];
    for skill in skills {
        let description = truncate(&skill.description).replace('|', "\\|");
        lines.push(format!(
            "| [{}]({}) | {description} |",
            skill.name,
            skill.source()
        ));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Replace everything between the markers with `section`.
///
/// Returns `None` if either marker is missing or the end marker precedes the
/// start marker.
pub fn replace_section(content: &str, section: &str) -> Option<String> {
    let start = content.find(START_MARKER)? + START_MARKER.len();
    let end = content.find(END_MARKER)?;
    if end < start {
        return None;
    }
    Some(format!("{}{section}{}", &content[..start], &content[end..]))
}

/// Regenerate the README section. `Ok(false)` means the markers were absent
/// and nothing was written.
pub fn update_readme(path: &Path, skills: &[SkillRecord]) -> Result<bool> {
    let content = std::fs::read_to_string(path)?;
    let Some(updated) = replace_section(&content, &render_skills_table(skills)) else {
        tracing::warn!(?path, "skill markers not found in README");
        return Ok(false);
    };
    if updated != content {
        std::fs::write(path, updated)?;
    }
    Ok(true)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, dir: &str, description: &str) -> SkillRecord {
        SkillRecord {
            dir_name: dir.into(),
            name: name.into(),
            description: description.into(),
            license: "MIT".into(),
            version: "1.0.0".into(),
            keywords: vec![],
        }
    }

    #[test]
    fn renders_rows_with_escaped_pipes() {
        let table = render_skills_table(&[skill("PDF", "pdf", "read | write")]);
        assert_eq!(
            table,
            "\n| Skill | Description |\n| ----- | ----------- |\n| [PDF](./skills/pdf) | read \\| write |\n"
        );
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let exact = "a".repeat(80);
        assert_eq!(truncate(&exact), exact);

        let long = "é".repeat(81);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), 80);
        assert!(cut.ends_with("..."));
        assert!(cut.starts_with(&"é".repeat(77)));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(render_skills_table(&[]), "\n*No skills available yet.*\n");
    }

    #[test]
    fn section_is_replaced_between_markers() {
        let content = format!("# Title\n{START_MARKER}\nold table\n{END_MARKER}\nfooter\n");
        let out = replace_section(&content, "\nnew\n").unwrap();
        assert_eq!(out, format!("# Title\n{START_MARKER}\nnew\n{END_MARKER}\nfooter\n"));
    }

    #[test]
    fn missing_or_reversed_markers_are_rejected() {
        assert!(replace_section("no markers", "x").is_none());
        assert!(replace_section(START_MARKER, "x").is_none());
        let reversed = format!("{END_MARKER}\n{START_MARKER}");
        assert!(replace_section(&reversed, "x").is_none());
    }

    #[test]
    fn update_readme_skips_without_markers() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("README.md");
        std::fs::write(&path, "# Plain\n").unwrap();
        assert!(!update_readme(&path, &[]).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Plain\n");
    }

    #[test]
    fn update_readme_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("README.md");
        std::fs::write(&path, format!("{START_MARKER}{END_MARKER}\n")).unwrap();
        let skills = [skill("a", "a", "first")];

        assert!(update_readme(&path, &skills).unwrap());
        let once = std::fs::read_to_string(&path).unwrap();
        assert!(update_readme(&path, &skills).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), once);
    }
}
