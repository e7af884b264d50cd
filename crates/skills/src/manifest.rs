use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::{
    error::{Error, Result},
    types::SkillRecord,
};

/// The repository manifest: an arbitrary JSON object of which only a few
/// fields are interpreted. Unknown fields survive a load/save cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// A top-level string field.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// `author.name`, or `author` itself when it is a plain string.
    pub fn author_name(&self) -> Option<&str> {
        match self.fields.get("author")? {
            Value::Object(author) => author.get("name").and_then(Value::as_str),
            Value::String(name) => Some(name),
            _ => None,
        }
    }

    pub fn repository(&self) -> Option<&str> {
        self.text("repository")
    }

    /// `keywords` as stored, or an empty array.
    pub fn keywords(&self) -> Value {
        self.fields
            .get("keywords")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()))
    }

    /// Replace the `skills` array with one entry per record.
    pub fn set_skills(&mut self, skills: &[SkillRecord]) {
        let entries = skills.iter().map(skill_entry).collect();
        self.fields.insert("skills".into(), Value::Array(entries));
    }
}

fn skill_entry(skill: &SkillRecord) -> Value {
    serde_json::json!({
        "name": skill.name,
        "description": skill.description,
        "version": skill.version,
        "source": skill.source(),
        "license": skill.license,
        "keywords": skill.keywords,
    })
}

/// Manifest persistence with atomic writes.
pub struct ManifestStore {
    path: PathBuf,
}

impl ManifestStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the manifest. A missing, unreadable or non-object file is an error:
    /// the manifest is never fabricated.
    pub fn load(&self) -> Result<Manifest> {
        let read_error = |reason: String| Error::ManifestRead {
            path: self.path.clone(),
            reason,
        };
        let data = std::fs::read_to_string(&self.path).map_err(|e| read_error(e.to_string()))?;
        match serde_json::from_str::<Value>(&data).map_err(|e| read_error(e.to_string()))? {
            Value::Object(fields) => Ok(Manifest::from_map(fields)),
            _ => Err(read_error("top-level value is not an object".into())),
        }
    }

    /// Save the manifest atomically via temp file + rename.
    pub fn save(&self, manifest: &Manifest) -> Result<()> {
        write_json(&self.path, &Value::Object(manifest.fields.clone()))
    }
}

/// Write `value` as two-space-indented JSON with a trailing newline,
/// replacing `path` atomically.
pub(crate) fn write_json(path: &Path, value: &Value) -> Result<()> {
    let mut data = serde_json::to_string_pretty(value)?;
    data.push('\n');
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, data)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}
