//! Skills in a generated repository: discovery, parsing, and metadata sync.
//!
//! Skills are directories under `skills/` containing a `SKILL.md` file with a
//! frontmatter block. The set of skill directories on disk is the single
//! source of truth; the manifest skill list, plugin descriptors, marketplace
//! entry, discovery index and README table are all regenerated from it.

pub mod add;
pub mod discover;
pub mod error;
pub mod index;
pub mod manifest;
pub mod parse;
pub mod patch;
pub mod plugin;
pub mod readme;
pub mod sync;
pub mod types;

pub use {
    add::{AddedSkill, add_skill},
    discover::{FsSkillDiscoverer, SkillDiscoverer},
    error::{Error, Result},
    sync::{SyncPaths, SyncReport, sync},
    types::SkillRecord,
};

/// Descriptor file name inside every skill directory.
pub const SKILL_FILE: &str = "SKILL.md";
