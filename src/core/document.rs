//! Translation document loading, key enumeration and pruning.
//!
//! The document is kept as a `serde_json::Value` with `preserve_order`, so a
//! rewrite keeps the author's key order.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct TranslationDocument {
    root: Value,
}

impl TranslationDocument {
    /// Read and parse a translation file. The root value must be an object.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read translation file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse translation file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content).context("Invalid JSON")?;
        if !root.is_object() {
            bail!("Root value must be a JSON object");
        }
        Ok(Self { root })
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// All leaf key paths, depth-first in document order.
    ///
    /// A leaf is any value that is not an object; arrays are leaves.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_leaf_keys(&self.root, "", &mut keys);
        keys
    }

    /// Remove the leaf at `key_path`.
    ///
    /// Ancestors left empty by the removal are removed too, as far up as the
    /// emptiness propagates. The root object itself is never removed.
    pub fn delete(&mut self, key_path: &str) -> bool {
        let parts: Vec<&str> = key_path.split('.').collect();
        match self.root.as_object_mut() {
            Some(map) => delete_nested(map, &parts),
            None => false,
        }
    }

    /// Remove every empty object at any depth below the root.
    pub fn prune_empty(&mut self) {
        remove_empty_objects(&mut self.root);
    }

    /// Delete each key, then prune empty objects once.
    ///
    /// Returns the keys that were actually present and removed.
    pub fn remove_keys<S: AsRef<str>>(&mut self, key_paths: &[S]) -> Vec<String> {
        let mut deleted = Vec::new();
        for key in key_paths {
            let key: &str = key.as_ref();
            if self.delete(key) {
                deleted.push(key.to_string());
            }
        }
        self.prune_empty();
        deleted
    }

    /// Pretty-printed JSON with 2-space indentation and a trailing newline.
    /// Non-ASCII characters are written as-is.
    pub fn to_pretty_string(&self) -> Result<String> {
        let mut content =
            serde_json::to_string_pretty(&self.root).context("Failed to serialize JSON")?;
        content.push('\n');
        Ok(content)
    }

    /// Write the document to `path` through a temporary sibling file that is
    /// renamed over the target, so a failed write leaves the original intact.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_pretty_string()?;
        let tmp_path = temp_sibling(path);

        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write file: {}", tmp_path.display()))?;
        if let Err(err) = replace_file(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            let message = format!("Failed to replace file: {}", path.display());
            return Err(err).context(message);
        }

        Ok(())
    }
}

/// Copy `source` byte for byte to `backup`.
pub fn backup_file(source: &Path, backup: &Path) -> Result<()> {
    fs::copy(source, backup).with_context(|| {
        format!(
            "Failed to back up {} to {}",
            source.display(),
            backup.display()
        )
    })?;
    Ok(())
}

/// Rename `tmp` over `target`, keeping the permissions of an existing target.
fn replace_file(tmp: &Path, target: &Path) -> io::Result<()> {
    if let Ok(metadata) = fs::metadata(target) {
        fs::set_permissions(tmp, metadata.permissions())?;
    }
    fs::rename(tmp, target)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn collect_leaf_keys(value: &Value, prefix: &str, keys: &mut Vec<String>) {
    let Value::Object(map) = value else {
        keys.push(prefix.to_string());
        return;
    };

    for (key, child) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        collect_leaf_keys(child, &path, keys);
    }
}

fn delete_nested(map: &mut Map<String, Value>, parts: &[&str]) -> bool {
    let Some((first, rest)) = parts.split_first() else {
        return false;
    };

    if rest.is_empty() {
        return map.shift_remove(*first).is_some();
    }

    let Some(Value::Object(child)) = map.get_mut(*first) else {
        return false;
    };
    let deleted = delete_nested(child, rest);
    if deleted && child.is_empty() {
        map.shift_remove(*first);
    }
    deleted
}

fn remove_empty_objects(value: &mut Value) {
    if let Value::Object(map) = value {
        for child in map.values_mut() {
            remove_empty_objects(child);
        }

        map.retain(|_, v| !matches!(v, Value::Object(m) if m.is_empty()));
    }
}
