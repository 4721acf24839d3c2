//! In-memory cache for the manifest and loaded grinders

use crate::grinder::Grinder;
use grindmatch_types::Manifest;
use std::collections::HashMap;
use std::sync::Arc;

/// Cache of fetched records
///
/// Holds one manifest slot and validated grinders keyed by the file name
/// they were fetched from. Entries live until [`RecordCache::clear`].
#[derive(Debug, Default)]
pub struct RecordCache {
    manifest: Option<Manifest>,
    grinders: HashMap<String, Arc<Grinder>>,
}

impl RecordCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached manifest, if one has been stored
    pub fn manifest(&self) -> Option<&Manifest> {
        self.manifest.as_ref()
    }

    /// Store the manifest, replacing any previous one
    pub fn set_manifest(&mut self, manifest: Manifest) {
        self.manifest = Some(manifest);
    }

    /// Get a cached grinder by file name
    pub fn get(&self, file_name: &str) -> Option<Arc<Grinder>> {
        self.grinders.get(file_name).cloned()
    }

    /// Cache a grinder under its file name and return the shared handle
    pub fn insert(&mut self, file_name: &str, grinder: Grinder) -> Arc<Grinder> {
        let grinder = Arc::new(grinder);
        self.grinders.insert(file_name.to_string(), Arc::clone(&grinder));
        grinder
    }

    /// Number of cached grinders
    pub fn len(&self) -> usize {
        self.grinders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grinders.is_empty()
    }

    /// Drop the manifest and every cached grinder
    pub fn clear(&mut self) {
        self.manifest = None;
        self.grinders.clear();
    }
}
