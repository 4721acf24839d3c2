//! Built-in record sources
//!
//! Each source knows how to fetch the manifest and individual grinder
//! records; caching and validation happen in the loader.

mod directory;
mod memory;

pub use directory::DirectorySource;
pub use memory::MemorySource;
