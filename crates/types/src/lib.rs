//! grindmatch-types: Shared data types for the grindmatch converter.
//!
//! This crate contains pure data types (grinder records as stored on disk,
//! the record manifest, setting enums and grind categories) shared by the
//! core engine and the command-line application.

pub mod category;
pub mod grinder;

pub use category::GrindCategory;
pub use grinder::{GrinderRecord, Manifest, SettingConstraints, SettingFormat, SettingType};
