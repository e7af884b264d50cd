use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    copy::copy_dir,
    error::{Error, Result},
    materialize::materialize,
    values::TemplateValues,
};

/// Directory that a new repository for `brand` is created in.
pub fn target_dir_for(output_dir: &Path, brand: &str) -> PathBuf {
    output_dir.join(format!("{brand}-skills"))
}

/// Materialize `template_dir` into `target_dir` with `values` applied.
///
/// Fails before touching anything when the template is missing, or when the
/// target exists and `force` is not set. With `force`, an existing target is
/// deleted first. If copying or substitution fails, the partially written
/// target is removed and a humanized error is returned.
pub fn build(
    template_dir: &Path,
    target_dir: &Path,
    values: &TemplateValues,
    force: bool,
) -> Result<()> {
    if !template_dir.is_dir() {
        return Err(Error::TemplateNotFound {
            path: template_dir.to_path_buf(),
        });
    }

    if std::fs::symlink_metadata(target_dir).is_ok() {
        if !force {
            return Err(Error::AlreadyExists {
                path: target_dir.to_path_buf(),
            });
        }
        remove_existing(target_dir).map_err(|e| e.humanize(template_dir, target_dir))?;
        debug!(target = %target_dir.display(), "removed existing target");
    }

    guarded(target_dir, || {
        copy_dir(template_dir, target_dir)
            .and_then(|()| materialize(target_dir, values))
            .map_err(|e| e.humanize(template_dir, target_dir))
    })?;

    info!(target = %target_dir.display(), brand = %values.brand_name, "created skills repository");
    Ok(())
}

fn remove_existing(path: &Path) -> Result<()> {
    let meta = std::fs::symlink_metadata(path)?;
    if meta.is_dir() {
        std::fs::remove_dir_all(path)?;
    } else {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

/// Run `body` while holding a [`TargetGuard`] on `path`, committing only on
/// success. The error from `body` is returned as is, even if cleanup fails.
fn guarded<T>(path: &Path, body: impl FnOnce() -> Result<T>) -> Result<T> {
    let guard = TargetGuard::acquire(path);
    let value = body()?;
    guard.commit();
    Ok(value)
}

/// Owns a target directory for the duration of a build. Dropping the guard
/// without [`TargetGuard::commit`] deletes the directory; a failed delete is
/// logged and never replaces the build error.
struct TargetGuard<'a> {
    path: &'a Path,
    committed: bool,
}

impl<'a> TargetGuard<'a> {
    fn acquire(path: &'a Path) -> Self {
        Self {
            path,
            committed: false,
        }
    }

    fn commit(mut self) {
        self.committed = true;
    }
}

impl TargetGuard<'_> {
    /// Delete the target directory if it exists.
    fn cleanup(&self) -> std::io::Result<()> {
        if std::fs::symlink_metadata(self.path).is_err() {
            return Ok(());
        }
        std::fs::remove_dir_all(self.path)
    }
}

impl Drop for TargetGuard<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        match self.cleanup() {
            Ok(()) => debug!(target = %self.path.display(), "removed partial target"),
            Err(e) => {
                warn!(target = %self.path.display(), error = %e, "failed to clean up partial target");
            },
        }
    }
}
