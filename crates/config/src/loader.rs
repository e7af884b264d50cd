use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::schema::BuildSkillConfig;

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &[
    "build-skill.toml",
    "build-skill.yaml",
    "build-skill.yml",
    "build-skill.json",
];

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<BuildSkillConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    parse_config(&raw, path)
}

/// Discover and load config from standard locations relative to the process
/// working directory.
///
/// Returns `BuildSkillConfig::default()` if no config file is found.
pub fn discover_and_load() -> BuildSkillConfig {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    discover_and_load_from(&cwd, config_dir().as_deref())
}

/// Discover and load config.
///
/// Search order:
/// 1. `<cwd>/build-skill.{toml,yaml,yml,json}` (project-local)
/// 2. `<user_dir>/build-skill.{toml,yaml,yml,json}` (user-global)
pub fn discover_and_load_from(cwd: &Path, user_dir: Option<&Path>) -> BuildSkillConfig {
    if let Some(path) = find_config_file(cwd, user_dir) {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    BuildSkillConfig::default()
}

fn find_config_file(cwd: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
    let dirs = std::iter::once(cwd).chain(user_dir);
    for dir in dirs {
        for name in CONFIG_FILENAMES {
            let p = dir.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
    }
    None
}

/// Returns the user-global config directory (`~/.config/build-skill/`).
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "build-skill").map(|d| d.config_dir().to_path_buf())
}

fn parse_config(raw: &str, path: &Path) -> anyhow::Result<BuildSkillConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}
