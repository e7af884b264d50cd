use std::path::PathBuf;

use build_skill_common::FromMessage;

use crate::parse::FrontmatterError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Walkdir(#[from] walkdir::Error),
    #[error(transparent)]
    Frontmatter(#[from] FrontmatterError),
    #[error(transparent)]
    Input(#[from] build_skill_scaffold::Error),
    #[error("could not read manifest {path}: {reason}")]
    ManifestRead { path: PathBuf, reason: String },
    #[error("skill \"{name}\" already exists")]
    SkillExists { name: String },
    #[error("{message}")]
    Message { message: String },
}

impl FromMessage for Error {
    fn from_message(message: String) -> Self {
        Self::Message { message }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

build_skill_common::impl_context!();
