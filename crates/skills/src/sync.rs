//! Metadata sync: regenerate every derived artifact from the skill
//! directories on disk plus the manifest.
//!
//! Each step after the manifest load is independent. A failing step is
//! logged, recorded in the report, and the remaining steps still run. Nothing
//! is rolled back; the next run regenerates everything from the same sources.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use {build_skill_config::SyncDefaults, tracing::info};

use crate::{
    SKILL_FILE,
    discover::{FsSkillDiscoverer, SkillDiscoverer},
    error::Result,
    index::write_index,
    manifest::{Manifest, ManifestStore},
    patch::{DescriptorFields, DescriptorPatcher, LinePatcher},
    plugin::{PluginTarget, update_marketplace, write_plugin},
    readme::update_readme,
    types::SkillRecord,
};

/// File locations touched by a sync run.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncPaths {
    pub skills_dir: PathBuf,
    pub manifest: PathBuf,
    pub readme: PathBuf,
    pub plugins: Vec<PluginTarget>,
    pub marketplace: PathBuf,
    pub index: PathBuf,
}

impl SyncPaths {
    /// The standard layout of a generated repository rooted at `root`.
    pub fn for_root(root: &Path) -> Self {
        Self {
            skills_dir: root.join("skills"),
            manifest: root.join("manifest.json"),
            readme: root.join("README.md"),
            plugins: vec![
                PluginTarget::new(root.join(".claude-plugin").join("plugin.json")),
                PluginTarget::new(root.join(".cursor-plugin").join("plugin.json")),
            ],
            marketplace: root.join(".claude-plugin").join("marketplace.json"),
            index: root.join("skills").join("index.json"),
        }
    }
}

/// What a sync run changed, and what it had to skip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncReport {
    /// Display names of the discovered skills, in sync order.
    pub skills: Vec<String>,
    /// Number of `SKILL.md` files whose text changed.
    pub descriptors_updated: usize,
    pub manifest_updated: bool,
    pub plugins_updated: Vec<PathBuf>,
    pub marketplace_updated: bool,
    pub index_updated: bool,
    pub readme_updated: bool,
    pub warnings: Vec<String>,
}

impl SyncReport {
    fn warn(&mut self, step: &str, error: impl fmt::Display) {
        tracing::warn!(step, %error, "sync step skipped");
        self.warnings.push(format!("{step}: {error}"));
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = |done: bool| if done { "updated" } else { "skipped" };

        writeln!(f, "Found {} skill(s)", self.skills.len())?;
        for name in &self.skills {
            writeln!(f, "  - {name}")?;
        }
        writeln!(f, "SKILL.md frontmatter: {} updated", self.descriptors_updated)?;
        writeln!(f, "manifest.json: {}", mark(self.manifest_updated))?;
        for path in &self.plugins_updated {
            writeln!(f, "{}: updated", path.display())?;
        }
        writeln!(f, "marketplace.json: {}", mark(self.marketplace_updated))?;
        writeln!(f, "skills/index.json: {}", mark(self.index_updated))?;
        write!(f, "README.md: {}", mark(self.readme_updated))?;
        for warning in &self.warnings {
            write!(f, "\nwarning: {warning}")?;
        }
        Ok(())
    }
}

/// Run a full sync with the filesystem discoverer and the line patcher.
///
/// Fails only if the manifest cannot be read.
pub fn sync(paths: &SyncPaths, defaults: &SyncDefaults) -> Result<SyncReport> {
    let discoverer = FsSkillDiscoverer::new(&paths.skills_dir, defaults.clone());
    sync_with(paths, &discoverer, &LinePatcher)
}

pub fn sync_with(
    paths: &SyncPaths,
    discoverer: &dyn SkillDiscoverer,
    patcher: &dyn DescriptorPatcher,
) -> Result<SyncReport> {
    let mut report = SyncReport::default();

    let discovery = discoverer.discover();
    for warning in discovery.warnings {
        report.warnings.push(warning);
    }
    let skills = discovery.skills;
    report.skills = skills.iter().map(|s| s.name.clone()).collect();
    info!(count = skills.len(), "discovered skills");

    let store = ManifestStore::new(&paths.manifest);
    let mut manifest = store.load()?;

    patch_descriptors(&paths.skills_dir, &skills, &manifest, patcher, &mut report);

    manifest.set_skills(&skills);
    match store.save(&manifest) {
        Ok(()) => report.manifest_updated = true,
        Err(e) => report.warn("manifest", e),
    }

    for target in &paths.plugins {
        match write_plugin(&manifest, target) {
            Ok(()) => report.plugins_updated.push(target.path.clone()),
            Err(e) => report.warn("plugin", format!("{}: {e}", target.path.display())),
        }
    }

    match update_marketplace(&manifest, &paths.marketplace) {
        Ok(true) => report.marketplace_updated = true,
        Ok(false) => report
            .warnings
            .push(format!("could not read {}", paths.marketplace.display())),
        Err(e) => report.warn("marketplace", e),
    }

    match write_index(&paths.index, &paths.skills_dir, &skills) {
        Ok(()) => report.index_updated = true,
        Err(e) => report.warn("index", e),
    }

    match update_readme(&paths.readme, &skills) {
        Ok(true) => report.readme_updated = true,
        Ok(false) => report.warnings.push(format!(
            "could not find skill markers in {}",
            paths.readme.display()
        )),
        Err(e) => report.warn("readme", e),
    }

    info!(
        skills = report.skills.len(),
        descriptors = report.descriptors_updated,
        warnings = report.warnings.len(),
        "sync complete"
    );
    Ok(report)
}

/// Push the manifest author and repository into every skill's `SKILL.md`,
/// counting changed files in `report.descriptors_updated`.
fn patch_descriptors(
    skills_dir: &Path,
    skills: &[SkillRecord],
    manifest: &Manifest,
    patcher: &dyn DescriptorPatcher,
    report: &mut SyncReport,
) {
    let fields = DescriptorFields {
        author: manifest.author_name(),
        repository: manifest.repository(),
    };
    if fields.author.is_none_or(str::is_empty) && fields.repository.is_none_or(str::is_empty) {
        return;
    }

    for skill in skills {
        let path = skills_dir.join(&skill.dir_name).join(SKILL_FILE);
        let result = std::fs::read_to_string(&path).and_then(|content| {
            let patched = patcher.patch(&content, &fields);
            if *patched == *content {
                return Ok(false);
            }
            std::fs::write(&path, patched.as_bytes()).map(|()| true)
        });
        match result {
            Ok(true) => {
                tracing::debug!(?path, "updated descriptor");
                report.descriptors_updated += 1;
            },
            Ok(false) => {},
            Err(e) => report.warn("descriptor", format!("{}: {e}", path.display())),
        }
    }
}
