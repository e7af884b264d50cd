use std::path::Path;

use tracing::debug;

use crate::{
    error::Result,
    values::{SKILL_NAME_PLACEHOLDER, TemplateValues},
};

/// Apply `values` to a copied template tree in place.
///
/// Every file has its placeholders substituted. A directory named exactly
/// `{Skill_Name}` is renamed to the skill name before its contents are
/// processed; no other directory or file name is touched.
pub fn materialize(root: &Path, values: &TemplateValues) -> Result<()> {
    // Snapshot the listing so a renamed directory is never visited twice.
    let entries = std::fs::read_dir(root)?.collect::<std::io::Result<Vec<_>>>()?;

    for entry in entries {
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            if entry.file_name() == SKILL_NAME_PLACEHOLDER {
                let renamed = root.join(&values.skill_name);
                std::fs::rename(&path, &renamed)?;
                debug!(from = %path.display(), to = %renamed.display(), "renamed skill directory");
                materialize(&renamed, values)?;
            } else {
                materialize(&path, values)?;
            }
        } else {
            substitute_file(&path, values)?;
        }
    }

    Ok(())
}

/// Rewrite one file with its placeholders substituted. Files that are not
/// valid UTF-8 are left byte-for-byte untouched.
fn substitute_file(path: &Path, values: &TemplateValues) -> Result<()> {
    let bytes = std::fs::read(path)?;
    let Ok(content) = String::from_utf8(bytes) else {
        debug!(file = %path.display(), "skipping non-UTF-8 file");
        return Ok(());
    };

    let rendered = values.substitute(&content);
    if rendered != content {
        std::fs::write(path, rendered)?;
    }
    Ok(())
}
