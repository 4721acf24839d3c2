//! Error types for the conversion engine

use thiserror::Error;

/// Failure of an interpolation over a calibration table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InterpolationError {
    /// The table has no calibration pairs at all
    #[error("No calibration data")]
    EmptyTable,
}

/// Rejected user input
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Non-empty text that is not a valid setting for the grinder's format
    #[error("Invalid value")]
    Unparseable,

    #[error("Value {value} is out of range for {grinder} (allowed: {min}–{max}, step {step}).")]
    OutOfRange {
        value: f64,
        grinder: String,
        min: f64,
        max: f64,
        step: f64,
    },

    /// In range but not on the `min + k*step` lattice
    #[error("Value must align to step {step} starting from {min}.")]
    Misaligned { value: f64, min: f64, step: f64 },
}

/// Malformed grinder record
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("{grinder}: mapping key {key:?} is not a number")]
    InvalidSettingKey { grinder: String, key: String },

    #[error("{grinder}: micrometer value for setting {setting} is not finite")]
    InvalidMicrometer { grinder: String, setting: f64 },

    #[error("{grinder}: setting {setting} appears more than once in the mapping")]
    DuplicateSetting { grinder: String, setting: f64 },

    #[error("{grinder}: invalid setting constraints (min {min}, max {max}, step {step})")]
    InvalidConstraints {
        grinder: String,
        min: f64,
        max: f64,
        step: f64,
    },

    /// Particle size decreases while the setting increases
    #[error(
        "{grinder}: mapping is not monotonic ({micrometer} µm at setting {setting} is below {previous} µm at the previous setting)"
    )]
    NonMonotonic {
        grinder: String,
        setting: f64,
        micrometer: f64,
        previous: f64,
    },
}
