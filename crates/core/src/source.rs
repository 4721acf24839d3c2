//! Record source trait

use anyhow::Result;
use grindmatch_types::{GrinderRecord, Manifest};

/// Trait for anything that can supply grinder records
///
/// Sources only fetch and parse; validation and caching are done by the
/// loader that owns them.
pub trait RecordSource: Send + Sync {
    /// Short description for log messages (e.g. a directory path)
    fn describe(&self) -> String;

    /// Fetch the list of available record file names
    fn fetch_manifest(&self) -> Result<Manifest>;

    /// Fetch a single record by file name
    fn fetch_record(&self, file_name: &str) -> Result<GrinderRecord>;
}

/// Type-erased record source for dynamic dispatch
pub type BoxedRecordSource = Box<dyn RecordSource>;

impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch_manifest(&self) -> Result<Manifest> {
        (**self).fetch_manifest()
    }

    fn fetch_record(&self, file_name: &str) -> Result<GrinderRecord> {
        (**self).fetch_record(file_name)
    }
}
