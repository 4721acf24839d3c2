//! Record source backed by a directory of JSON documents

use anyhow::{anyhow, Context, Result};
use grindmatch_core::{GrinderRecord, Manifest, RecordSource};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Reads `<root>/<manifest_file>` and `<root>/<file_name>` from disk
///
/// Layout:
/// ```text
/// grinders/
///   index.json          {"files": ["comandante-c40.json", ...]}
///   comandante-c40.json
/// ```
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    manifest_file: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_manifest(root, "index.json")
    }

    pub fn with_manifest(root: impl Into<PathBuf>, manifest_file: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            manifest_file: manifest_file.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a file name inside the root, refusing anything that could escape it
    fn resolve(&self, file_name: &str) -> Result<PathBuf> {
        let escapes = file_name.is_empty()
            || file_name.contains('/')
            || file_name.contains('\\')
            || file_name == "."
            || file_name == "..";
        if escapes {
            return Err(anyhow!("Invalid record file name: {:?}", file_name));
        }
        Ok(self.root.join(file_name))
    }

    fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T> {
        let path = self.resolve(file_name)?;
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(value)
    }
}

impl RecordSource for DirectorySource {
    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn fetch_manifest(&self) -> Result<Manifest> {
        self.read_json(&self.manifest_file)
    }

    fn fetch_record(&self, file_name: &str) -> Result<GrinderRecord> {
        self.read_json(file_name)
    }
}
