//! Config schema types for scaffolding defaults and sync fallbacks.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the template directory.
pub const TEMPLATE_DIR_ENV: &str = "BUILD_SKILL_TEMPLATE_DIR";

/// Root configuration for the `build-skill` binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSkillConfig {
    /// Template tree to materialize. `None` uses the bundled template.
    pub template_dir: Option<PathBuf>,
    pub defaults: ScaffoldDefaults,
    pub sync: SyncDefaults,
}

impl BuildSkillConfig {
    /// Resolve the template directory: explicit override, then
    /// `BUILD_SKILL_TEMPLATE_DIR`, then the config file, then `bundled`.
    pub fn resolve_template_dir(&self, cli: Option<PathBuf>, bundled: PathBuf) -> PathBuf {
        cli.or_else(|| std::env::var_os(TEMPLATE_DIR_ENV).map(PathBuf::from))
            .or_else(|| self.template_dir.clone())
            .unwrap_or(bundled)
    }
}

/// Values used when the user does not supply one on the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldDefaults {
    /// Directory in which `<brand>-skills/` is created.
    pub output_dir: PathBuf,
    /// SPDX license identifier.
    pub license: String,
    pub homepage: String,
    /// Comma-separated keyword list.
    pub keywords: String,
    pub category: String,
    /// Used when `git config user.name` is unavailable.
    pub creator_name: String,
    /// Used when `git config user.email` is unavailable.
    pub creator_email: String,
}

impl Default for ScaffoldDefaults {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            license: "MIT".into(),
            homepage: "https://example.com".into(),
            keywords: "ai, agent, skill".into(),
            category: "general".into(),
            creator_name: "Your Name".into(),
            creator_email: "your.email@example.com".into(),
        }
    }
}

/// Fallbacks applied by skill discovery when a SKILL.md omits a field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncDefaults {
    pub default_license: String,
    pub default_version: String,
}

impl Default for SyncDefaults {
    fn default() -> Self {
        Self {
            default_license: "MIT".into(),
            default_version: "1.0.0".into(),
        }
    }
}
