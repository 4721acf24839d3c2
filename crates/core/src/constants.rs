//! Shared numeric constants for the conversion engine

/// Tolerance when checking that `(n - min) / step` is a whole number.
/// Absorbs float representation error in the division without letting
/// neighbouring lattice points become ambiguous.
pub const STEP_TOLERANCE: f64 = 1e-9;

/// Number of decimal places kept after snapping to the step lattice
pub const ROUND_DECIMALS: i32 = 6;

/// Lower bounds (µm) of the grind bands, checked coarsest first
pub const EXTRA_COARSE_MIN_UM: f64 = 1200.0;
pub const COARSE_MIN_UM: f64 = 800.0;
pub const MEDIUM_COARSE_MIN_UM: f64 = 700.0;
pub const MEDIUM_MIN_UM: f64 = 500.0;
pub const MEDIUM_FINE_MIN_UM: f64 = 300.0;
pub const FINE_BAND_MIN_UM: f64 = 100.0;

/// Inside the `[100, 300)` band, values below this are extra-fine
pub const FINE_SPLIT_UM: f64 = 130.0;

/// Warning shown when a conversion had to clamp to the target's calibrated range
pub const CLAMP_WARNING: &str = "Warning: result outside target range, clamped to nearest setting.";
