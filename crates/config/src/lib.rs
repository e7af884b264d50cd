//! Configuration loading for build-skill.
//!
//! Config files: `build-skill.toml`, `build-skill.yaml`, or `build-skill.json`
//! Searched in `./` then `~/.config/build-skill/`.

pub mod loader;
pub mod schema;

pub use {
    loader::{config_dir, discover_and_load, discover_and_load_from, load_config},
    schema::{BuildSkillConfig, ScaffoldDefaults, SyncDefaults, TEMPLATE_DIR_ENV},
};
