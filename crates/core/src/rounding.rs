//! Snapping continuous settings onto a grinder's step lattice

use crate::constants::ROUND_DECIMALS;
use crate::grinder::Grinder;
use grindmatch_types::SettingFormat;

/// Snap `n` to the nearest point `min + k*step` of the grinder's lattice
///
/// Ties round half away from zero. Integer-format grinders additionally get
/// a whole number, and the result is trimmed to six decimal places so float
/// noise such as `3.9999999999` never reaches the user.
pub fn round_to_step(n: f64, grinder: &Grinder) -> f64 {
    let constraints = grinder.constraints();
    let k = ((n - constraints.min) / constraints.step).round();
    let mut r = constraints.min + k * constraints.step;
    if grinder.setting_format() == SettingFormat::Integer {
        r = r.round();
    }
    round_decimals(r, ROUND_DECIMALS)
}

fn round_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // Avoid handing out -0 for tiny negative noise
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
