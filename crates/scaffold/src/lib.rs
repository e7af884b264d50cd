//! Scaffolding of agent skill repositories from a template tree.
//!
//! A template is an ordinary directory. Building a repository copies it
//! verbatim, replaces `{Placeholder}` tokens in every file with the supplied
//! [`TemplateValues`], and renames the `{Skill_Name}` directory to the
//! concrete skill name. A failed build never leaves a partial tree behind.

pub mod builder;
pub mod copy;
pub mod error;
pub mod git;
pub mod input;
pub mod materialize;
pub mod normalize;
pub mod values;

pub use {
    builder::{build, target_dir_for},
    error::{Error, Result},
    input::SkillInput,
    normalize::normalize_name,
    values::{SKILL_NAME_PLACEHOLDER, TemplateValues, ValueOverrides, substitute},
};
