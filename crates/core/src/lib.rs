//! grindmatch-core: Conversion and validation engine for grindmatch.
//!
//! Converts a setting on one coffee grinder into the equivalent setting on
//! another by matching the median particle size each produces. Everything
//! here is synchronous and free of I/O apart from the [`RecordSource`]
//! trait, which the application implements.

mod cache;
pub mod category;
pub mod constants;
mod error;
mod grinder;
pub mod interpolate;
pub mod rounding;
mod source;
pub mod validation;

pub use cache::RecordCache;
pub use category::{categorize_grind, grind_category_label};
pub use constants::{CLAMP_WARNING, ROUND_DECIMALS, STEP_TOLERANCE};
pub use error::{InterpolationError, RecordError, ValidationError};
pub use grinder::Grinder;
pub use interpolate::{
    convert_between_grinders, convert_microns_to_setting, inv_lerp, lerp, Conversion, InvLerp, Lerp,
};
pub use rounding::round_to_step;
pub use source::{BoxedRecordSource, RecordSource};
pub use validation::{parse_input, read_setting, validate_range_and_step};

// Re-export types used in public signatures for convenience
pub use grindmatch_types::{
    GrindCategory, GrinderRecord, Manifest, SettingConstraints, SettingFormat, SettingType,
};
