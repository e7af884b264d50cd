//! Plugin and marketplace descriptors derived from the manifest.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::{
    error::Result,
    manifest::{Manifest, write_json},
};

/// Manifest fields copied into every plugin descriptor, in output order.
const PLUGIN_FIELDS: [&str; 7] = [
    "name",
    "description",
    "version",
    "author",
    "homepage",
    "repository",
    "license",
];

/// A plugin descriptor location plus platform-specific fields merged over
/// the common projection.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginTarget {
    pub path: PathBuf,
    pub extra_fields: Map<String, Value>,
}

impl PluginTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            extra_fields: Map::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra_fields.insert(key.into(), value);
        self
    }
}

/// Project the manifest into a plugin descriptor.
///
/// Fields absent from the manifest are omitted; `keywords` defaults to `[]`.
pub fn plugin_descriptor(manifest: &Manifest, extra_fields: &Map<String, Value>) -> Value {
    let mut descriptor = project(manifest, &PLUGIN_FIELDS);
    descriptor.insert("keywords".into(), manifest.keywords());
    descriptor.insert("skills".into(), Value::String("./skills/".into()));
    for (key, value) in extra_fields {
        descriptor.insert(key.clone(), value.clone());
    }
    Value::Object(descriptor)
}

/// The single `plugins` entry written into the marketplace descriptor.
pub fn marketplace_entry(manifest: &Manifest) -> Value {
    let mut entry = project(manifest, &["name", "description", "version", "author"]);
    entry.insert("source".into(), Value::String("./".into()));
    entry.extend(project(manifest, &["homepage", "repository", "license"]));
    entry.insert("keywords".into(), manifest.keywords());
    Value::Object(entry)
}

fn project(manifest: &Manifest, keys: &[&str]) -> Map<String, Value> {
    keys.iter()
        .filter_map(|&key| Some((key.to_string(), manifest.get(key)?.clone())))
        .collect()
}

/// Overwrite the descriptor at `target.path`, creating its directory if needed.
pub fn write_plugin(manifest: &Manifest, target: &PluginTarget) -> Result<()> {
    if let Some(parent) = target.path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    write_json(
        &target.path,
        &plugin_descriptor(manifest, &target.extra_fields),
    )
}

/// Replace the `plugins` array of an existing marketplace descriptor.
///
/// Returns `Ok(false)` without touching anything when the file is missing,
/// unparsable, or not a JSON object.
pub fn update_marketplace(manifest: &Manifest, path: &Path) -> Result<bool> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(?path, %e, "could not read marketplace descriptor");
            return Ok(false);
        },
    };
    let mut marketplace = match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            tracing::warn!(?path, "marketplace descriptor is not a JSON object");
            return Ok(false);
        },
        Err(e) => {
            tracing::warn!(?path, %e, "could not parse marketplace descriptor");
            return Ok(false);
        },
    };

    marketplace.insert(
        "plugins".into(),
        Value::Array(vec![marketplace_entry(manifest)]),
    );
    write_json(path, &Value::Object(marketplace))?;
    Ok(true)
}
