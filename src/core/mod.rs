//! Loader and views for grindmatch

mod loader;
pub mod report;

pub use loader::{LoadedGrinder, RecordLoader};
pub use report::{micron_table, range_overview, ConversionReport, GrinderRange, RangeOverview, TableRow};
