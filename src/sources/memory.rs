//! Record source holding already-parsed records

use anyhow::{anyhow, Result};
use grindmatch_core::{GrinderRecord, Manifest, RecordSource};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory source for callers that parse records themselves
///
/// The manifest lists records in insertion order. Fetches are counted so
/// callers can observe caching behaviour.
#[derive(Debug, Default)]
pub struct MemorySource {
    order: Vec<String>,
    records: HashMap<String, GrinderRecord>,
    fetches: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record under `file_name`
    pub fn with_record(mut self, file_name: impl Into<String>, record: GrinderRecord) -> Self {
        let file_name = file_name.into();
        if !self.records.contains_key(&file_name) {
            self.order.push(file_name.clone());
        }
        self.records.insert(file_name, record);
        self
    }

    /// Total number of manifest and record fetches served
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl RecordSource for MemorySource {
    fn describe(&self) -> String {
        format!("memory ({} records)", self.records.len())
    }

    fn fetch_manifest(&self) -> Result<Manifest> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        Ok(Manifest {
            files: self.order.clone(),
        })
    }

    fn fetch_record(&self, file_name: &str) -> Result<GrinderRecord> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        self.records
            .get(file_name)
            .cloned()
            .ok_or_else(|| anyhow!("No such record: {}", file_name))
    }
}
