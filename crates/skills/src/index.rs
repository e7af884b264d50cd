//! The machine-readable discovery index, `skills/index.json`.

use std::path::Path;

use {serde::Serialize, walkdir::WalkDir};

use crate::{SKILL_FILE, error::Result, manifest::write_json, types::SkillRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// Directory name, not the display name.
    pub name: String,
    pub description: String,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SkillIndex {
    pub skills: Vec<IndexEntry>,
}

/// Every regular file under `skill_dir`, as `/`-separated relative paths.
///
/// `SKILL.md` comes first; the rest are sorted lexicographically.
pub fn list_skill_files(skill_dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(skill_dir).min_depth(1) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let relative = entry.path().strip_prefix(skill_dir).unwrap_or(entry.path());
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect();
        files.push(parts.join("/"));
    }

    files.sort_by(|a, b| {
        (a != SKILL_FILE)
            .cmp(&(b != SKILL_FILE))
            .then_with(|| a.cmp(b))
    });
    Ok(files)
}

pub fn build_index(skills_dir: &Path, skills: &[SkillRecord]) -> Result<SkillIndex> {
    let skills = skills
        .iter()
        .map(|skill| {
            Ok(IndexEntry {
                name: skill.dir_name.clone(),
                description: skill.description.clone(),
                files: list_skill_files(&skills_dir.join(&skill.dir_name))?,
            })
        })
        .collect::<Result<_>>()?;
    Ok(SkillIndex { skills })
}

/// Regenerate the index file at `path`.
pub fn write_index(path: &Path, skills_dir: &Path, skills: &[SkillRecord]) -> Result<()> {
    let index = build_index(skills_dir, skills)?;
    write_json(path, &serde_json::to_value(index)?)
}
