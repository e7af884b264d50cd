//! Add a new skill to an existing repository and resync.

use std::path::{Path, PathBuf};

use {
    build_skill_config::SyncDefaults,
    build_skill_scaffold::input::{validate_description, validate_name},
};

use crate::{
    SKILL_FILE,
    error::{Context, Error, Result},
    manifest::ManifestStore,
    sync::{SyncPaths, SyncReport, sync},
};

const DEFAULT_AUTHOR: &str = "Your Name";
const DEFAULT_LICENSE: &str = "MIT";
const DEFAULT_KEYWORDS: &str = "ai, agent, skill";

#[derive(Debug, Clone)]
pub struct AddedSkill {
    /// Normalized skill name, also the directory name.
    pub name: String,
    /// Path of the new `SKILL.md`.
    pub path: PathBuf,
    pub report: SyncReport,
}

/// Render the initial `SKILL.md` for a new skill.
pub fn render_skill_file(name: &str, description: &str, author: &str, license: &str) -> String {
    format!(
        "---\nname: {name}\ndescription: {description}\nlicense: {license}\nmetadata:\n  author: {author}\n  version: \"1.0.0\"\n  keywords: \"{DEFAULT_KEYWORDS}\"\n---\n"
    )
}

/// Create `skills/<name>/SKILL.md` under `root` and run a full sync.
///
/// The name is normalized first. Fails without touching disk if the name is
/// empty after normalization, the description is empty or too long, the skill
/// already exists, or the manifest cannot be read.
pub fn add_skill(
    root: &Path,
    raw_name: &str,
    description: &str,
    defaults: &SyncDefaults,
) -> Result<AddedSkill> {
    let name = validate_name(raw_name, "skill name")?;
    validate_description(description)?;

    let paths = SyncPaths::for_root(root);
    let skill_dir = paths.skills_dir.join(&name);
    let path = skill_dir.join(SKILL_FILE);
    if path.exists() {
        return Err(Error::SkillExists { name });
    }

    let manifest = ManifestStore::new(&paths.manifest).load()?;
    let author = manifest.author_name().unwrap_or(DEFAULT_AUTHOR);
    let license = manifest
        .text("license")
        .filter(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LICENSE);

    std::fs::create_dir_all(&skill_dir)
        .and_then(|()| std::fs::write(&path, render_skill_file(&name, description, author, license)))
        .with_context(|| format!("could not create {}", path.display()))?;
    tracing::info!(skill = %name, ?path, "created skill");

    let report = sync(&paths, defaults)?;
    Ok(AddedSkill { name, path, report })
}
