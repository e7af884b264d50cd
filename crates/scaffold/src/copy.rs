use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Recursively copy `src` into `dest`, creating `dest` and every intermediate
/// directory. File bytes are copied unchanged and empty directories are kept.
pub fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    std::fs::create_dir_all(dest)?;

    for entry in walkdir::WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| crate::Error::message(e.to_string()))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &target)?;
            debug!(file = %relative.display(), "copied");
        }
    }

    Ok(())
}
