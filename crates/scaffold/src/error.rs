use std::path::{Path, PathBuf};

use build_skill_common::{IoFailure, classify_io_error};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{field} is required")]
    MissingField { field: &'static str },
    #[error("{field} must contain at least one letter or number")]
    EmptyName { field: &'static str },
    #[error("description must be under {max} characters")]
    DescriptionTooLong { max: usize },
    #[error("template directory not found: {path}. Please reinstall build-skill.")]
    TemplateNotFound { path: PathBuf },
    #[error("directory already exists: {path}")]
    AlreadyExists { path: PathBuf },
    #[error("permission denied. Check write permissions for {path}.")]
    PermissionDenied { path: PathBuf },
    #[error("no space left on device")]
    NoSpace,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{message}")]
    Message { message: String },
}

impl Error {
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message {
            message: message.into(),
        }
    }

    /// Rewrite a raw I/O failure from a build into the category a user can act
    /// on. Errors that are already categorized pass through.
    #[must_use]
    pub fn humanize(self, template_dir: &Path, target_dir: &Path) -> Self {
        let Self::Io(err) = self else {
            return self;
        };
        match classify_io_error(&err) {
            IoFailure::NotFound => Self::TemplateNotFound {
                path: template_dir.to_path_buf(),
            },
            IoFailure::PermissionDenied => Self::PermissionDenied {
                path: target_dir.to_path_buf(),
            },
            IoFailure::NoSpace => Self::NoSpace,
            IoFailure::Other => Self::Io(err),
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let message = err.to_string();
        match err.into_io_error() {
            Some(io) => Self::Io(io),
            None => Self::Message { message },
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
