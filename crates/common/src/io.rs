//! Classification of filesystem errors into the few categories users act on.

use std::io;

/// Coarse category of an I/O failure, used to pick a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IoFailure {
    #[error("not found")]
    NotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("no space left on device")]
    NoSpace,
    #[error("i/o error")]
    Other,
}

/// Map an [`io::Error`] onto an [`IoFailure`] category.
pub fn classify_io_error(err: &io::Error) -> IoFailure {
    match err.kind() {
        io::ErrorKind::NotFound => IoFailure::NotFound,
        io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
            IoFailure::PermissionDenied
        },
        io::ErrorKind::StorageFull => IoFailure::NoSpace,
        _ => IoFailure::Other,
    }
}
