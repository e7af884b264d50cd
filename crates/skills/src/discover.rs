use std::path::{Path, PathBuf};

use build_skill_config::SyncDefaults;

use crate::{
    SKILL_FILE,
    error::Result,
    parse::{Frontmatter, split_keywords},
    types::SkillRecord,
};

/// Outcome of a discovery run: the skills found plus any soft failures.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Sorted by display name, ignoring case.
    pub skills: Vec<SkillRecord>,
    pub warnings: Vec<String>,
}

/// Discovers skills in a repository.
pub trait SkillDiscoverer {
    /// Scan for skills. Problems with individual skills are reported as
    /// warnings, never as errors.
    fn discover(&self) -> Discovery;
}

/// Scans the immediate subdirectories of a skills root for `SKILL.md` files.
pub struct FsSkillDiscoverer {
    skills_dir: PathBuf,
    defaults: SyncDefaults,
}

impl FsSkillDiscoverer {
    pub fn new(skills_dir: impl Into<PathBuf>, defaults: SyncDefaults) -> Self {
        Self {
            skills_dir: skills_dir.into(),
            defaults,
        }
    }
}

impl SkillDiscoverer for FsSkillDiscoverer {
    fn discover(&self) -> Discovery {
        let mut discovery = Discovery::default();

        let entries = match std::fs::read_dir(&self.skills_dir) {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = ?self.skills_dir, %e, "no skills directory found");
                discovery.warnings.push(format!(
                    "no skills directory found at {}",
                    self.skills_dir.display()
                ));
                return discovery;
            },
        };

        for entry in entries.flatten() {
            let skill_dir = entry.path();
            if !skill_dir.is_dir() {
                continue;
            }
            let dir_name = entry.file_name().to_string_lossy().into_owned();

            match read_skill(&skill_dir, &dir_name, &self.defaults) {
                Ok(record) => discovery.skills.push(record),
                Err(e) => {
                    tracing::warn!(?skill_dir, %e, "could not read skill");
                    discovery
                        .warnings
                        .push(format!("could not read skill at {dir_name}: {e}"));
                },
            }
        }

        discovery.skills.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.dir_name.cmp(&b.dir_name))
        });
        discovery
    }
}

/// Read and parse one skill directory's `SKILL.md`.
fn read_skill(skill_dir: &Path, dir_name: &str, defaults: &SyncDefaults) -> Result<SkillRecord> {
    let content = std::fs::read_to_string(skill_dir.join(SKILL_FILE))?;
    let frontmatter = Frontmatter::parse(&content)?;
    Ok(record_from_frontmatter(&frontmatter, dir_name, defaults))
}

pub fn record_from_frontmatter(
    frontmatter: &Frontmatter,
    dir_name: &str,
    defaults: &SyncDefaults,
) -> SkillRecord {
    let keywords = frontmatter
        .nested("metadata")
        .and_then(|m| m.get("keywords"))
        .and_then(|k| k.as_text())
        .map(split_keywords)
        .unwrap_or_default();

    SkillRecord {
        dir_name: dir_name.to_string(),
        name: frontmatter.text("name").unwrap_or(dir_name).to_string(),
        description: frontmatter.text("description").unwrap_or_default().to_string(),
        license: frontmatter
            .text("license")
            .unwrap_or(&defaults.default_license)
            .to_string(),
        version: frontmatter
            .nested_text("metadata", "version")
            .unwrap_or(&defaults.default_version)
            .to_string(),
        keywords,
    }
}
