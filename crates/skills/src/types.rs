use serde::Serialize;

/// Metadata for one discovered skill, derived from its `SKILL.md`.
///
/// Recomputed on every sync run and never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRecord {
    /// Directory name under `skills/`.
    pub dir_name: String,
    /// Display name: frontmatter `name`, or the directory name.
    pub name: String,
    pub description: String,
    pub license: String,
    pub version: String,
    pub keywords: Vec<String>,
}

impl SkillRecord {
    /// Repository-relative source path, e.g. `./skills/my-skill`.
    pub fn source(&self) -> String {
        format!("./skills/{}", self.dir_name)
    }
}
