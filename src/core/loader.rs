//! Cached loading of the manifest and grinder records

use anyhow::{anyhow, Context, Result};
use grindmatch_core::{Grinder, Manifest, RecordCache, RecordSource};
use std::sync::{Arc, Mutex, MutexGuard};

/// A validated grinder together with the file it was loaded from
#[derive(Debug, Clone)]
pub struct LoadedGrinder {
    pub file_name: String,
    pub grinder: Arc<Grinder>,
}

/// Loads records from a source and keeps them for the life of the loader
///
/// The first request for the manifest or a record fetches it; later
/// requests are served from the cache until [`RecordLoader::clear_cache`].
/// The cache lock is held while fetching, so a record is never fetched
/// twice concurrently.
pub struct RecordLoader<S: RecordSource> {
    source: S,
    cache: Mutex<RecordCache>,
}

impl<S: RecordSource> RecordLoader<S> {
    /// Create a loader with an empty cache
    pub fn new(source: S) -> Self {
        Self::with_cache(source, RecordCache::new())
    }

    /// Create a loader around an existing cache
    pub fn with_cache(source: S, cache: RecordCache) -> Self {
        Self {
            source,
            cache: Mutex::new(cache),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn cache(&self) -> MutexGuard<'_, RecordCache> {
        // Use unwrap_or_else to recover from poisoned mutex - cached records are immutable
        self.cache.lock().unwrap_or_else(|poisoned| {
            log::warn!("Record cache mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Get the manifest, fetching it on first use
    pub fn load_manifest(&self) -> Result<Manifest> {
        let mut cache = self.cache();
        if let Some(manifest) = cache.manifest() {
            return Ok(manifest.clone());
        }

        let manifest = self
            .source
            .fetch_manifest()
            .context("Failed to load manifest")?;
        log::info!(
            "Loaded manifest from {}: {} grinders",
            self.source.describe(),
            manifest.files.len()
        );
        cache.set_manifest(manifest.clone());
        Ok(manifest)
    }

    /// Get a grinder by file name, fetching and validating it on first use
    pub fn load_grinder(&self, file_name: &str) -> Result<Arc<Grinder>> {
        let mut cache = self.cache();
        if let Some(grinder) = cache.get(file_name) {
            return Ok(grinder);
        }

        let record = self
            .source
            .fetch_record(file_name)
            .with_context(|| format!("Failed to load grinder: {}", file_name))?;
        let grinder = Grinder::from_record(&record)
            .with_context(|| format!("Failed to load grinder: {}", file_name))?;
        log::debug!(
            "Loaded grinder '{}' ({} calibration points) from {}",
            grinder.id(),
            grinder.pairs().len(),
            file_name
        );
        Ok(cache.insert(file_name, grinder))
    }

    /// Load every grinder listed in the manifest, in manifest order
    pub fn load_all(&self) -> Result<Vec<LoadedGrinder>> {
        let manifest = self.load_manifest()?;
        manifest
            .files
            .into_iter()
            .map(|file_name| -> Result<LoadedGrinder> {
                let grinder = self.load_grinder(&file_name)?;
                Ok(LoadedGrinder { file_name, grinder })
            })
            .collect()
    }

    /// Resolve a user-supplied name to a grinder
    ///
    /// Accepts the record's file name, the file name without its `.json`
    /// extension, or the record's `grinder_id`.
    pub fn find(&self, name: &str) -> Result<LoadedGrinder> {
        let all = self.load_all()?;
        let stem = |file: &str| file.strip_suffix(".json").unwrap_or(file).to_string();

        let found = all
            .iter()
            .find(|g| g.file_name == name)
            .or_else(|| all.iter().find(|g| stem(&g.file_name) == name))
            .or_else(|| all.iter().find(|g| g.grinder.id() == name));

        match found {
            Some(loaded) => Ok(loaded.clone()),
            None => {
                let known: Vec<String> = all.iter().map(|g| stem(&g.file_name)).collect();
                Err(anyhow!(
                    "Unknown grinder: {} (available: {})",
                    name,
                    known.join(", ")
                ))
            }
        }
    }

    /// Number of grinders currently cached
    pub fn cached_count(&self) -> usize {
        self.cache().len()
    }

    /// Drop the cached manifest and all cached grinders
    pub fn clear_cache(&self) {
        log::debug!("Clearing record cache");
        self.cache().clear();
    }
}
