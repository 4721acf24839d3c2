//! Piecewise-linear interpolation over calibration tables
//!
//! Outside the calibrated range the nearest endpoint is returned and the
//! result is flagged as clamped. The setting/particle-size relationship of a
//! grinder is not reliably linear past its measured points, so the line is
//! never extended.

use crate::constants::CLAMP_WARNING;
use crate::error::InterpolationError;
use crate::grinder::Grinder;

/// Result of [`lerp`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lerp {
    pub y: f64,
    pub clamped: bool,
}

/// Result of [`inv_lerp`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvLerp {
    pub x: f64,
    pub clamped: bool,
}

/// Result of [`convert_between_grinders`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    /// Median particle size the source setting produces
    pub micrometer: f64,
    /// Equivalent target setting, not yet snapped to the step lattice
    pub setting: f64,
    /// The equivalent lies outside the target's calibrated range
    pub clamped: bool,
}

impl Conversion {
    /// Warning to surface alongside a clamped result
    pub fn warning(&self) -> Option<&'static str> {
        self.clamped.then_some(CLAMP_WARNING)
    }
}

/// Interpolate y for `x` over pairs sorted ascending by x
///
/// Segments are scanned in order and the first one bracketing `x` wins,
/// so a value sitting on an interior calibration point resolves to the
/// earlier segment.
pub fn lerp(pairs: &[(f64, f64)], x: f64) -> Result<Lerp, InterpolationError> {
    let (first, last) = match (pairs.first(), pairs.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(InterpolationError::EmptyTable),
    };

    if x <= first.0 {
        return Ok(Lerp { y: first.1, clamped: true });
    }
    if x >= last.0 {
        return Ok(Lerp { y: last.1, clamped: true });
    }

    for segment in pairs.windows(2) {
        let (x0, y0) = segment[0];
        let (x1, y1) = segment[1];
        if x >= x0 && x <= x1 {
            let t = (x - x0) / (x1 - x0);
            return Ok(Lerp {
                y: y0 + t * (y1 - y0),
                clamped: false,
            });
        }
    }

    // Only reachable with NaN input or unsorted pairs
    Ok(Lerp { y: last.1, clamped: true })
}

/// Interpolate x for `y`, treating the y column as the independent axis
///
/// Pairs are expected in the same order [`lerp`] takes them (ascending x,
/// hence ascending y for a monotonic table).
pub fn inv_lerp(pairs: &[(f64, f64)], y: f64) -> Result<InvLerp, InterpolationError> {
    let (first, last) = match (pairs.first(), pairs.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return Err(InterpolationError::EmptyTable),
    };

    if y <= first.1 {
        return Ok(InvLerp { x: first.0, clamped: true });
    }
    if y >= last.1 {
        return Ok(InvLerp { x: last.0, clamped: true });
    }

    for segment in pairs.windows(2) {
        let (x0, y0) = segment[0];
        let (x1, y1) = segment[1];
        if y >= y0 && y <= y1 {
            let t = (y - y0) / (y1 - y0);
            return Ok(InvLerp {
                x: x0 + t * (x1 - x0),
                clamped: false,
            });
        }
    }

    Ok(InvLerp { x: last.0, clamped: true })
}

/// Convert a setting on `source` to the equivalent setting on `target`
///
/// The source setting is expected to have passed range/step validation.
/// Calibration points are looked up exactly before falling back to
/// interpolation; only the target side reports clamping.
pub fn convert_between_grinders(
    source: &Grinder,
    target: &Grinder,
    source_setting: f64,
) -> Result<Conversion, InterpolationError> {
    let micrometer = match source.micrometer_at(source_setting) {
        Some(um) => um,
        None => lerp(source.pairs(), source_setting)?.y,
    };

    let inverse = inv_lerp(target.pairs(), micrometer)?;

    log::debug!(
        "{} @ {} -> {:.1} µm -> {} @ {} (clamped: {})",
        source.id(),
        source_setting,
        micrometer,
        target.id(),
        inverse.x,
        inverse.clamped
    );

    Ok(Conversion {
        micrometer,
        setting: inverse.x,
        clamped: inverse.clamped,
    })
}

/// Setting on `grinder` that produces `micrometer`, not yet snapped to the lattice
pub fn convert_microns_to_setting(grinder: &Grinder, micrometer: f64) -> Result<InvLerp, InterpolationError> {
    inv_lerp(grinder.pairs(), micrometer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use grindmatch_types::{GrinderRecord, SettingConstraints, SettingFormat};

    const PAIRS: [(f64, f64); 3] = [(0.0, 100.0), (5.0, 200.0), (10.0, 300.0)];

    fn grinder(id: &str, format: SettingFormat, min: f64, max: f64, step: f64, points: &[(&str, f64)]) -> Grinder {
        let record = GrinderRecord::new(id, id, format, SettingConstraints { min, max, step })
            .with_points(points.iter().copied());
        Grinder::from_record(&record).unwrap()
    }

    #[test]
    fn test_lerp_inside_range() {
        let res = lerp(&PAIRS, 2.5).unwrap();
        assert_relative_eq!(res.y, 150.0);
        assert!(!res.clamped);
    }

    #[test]
    fn test_lerp_clamps_low_and_high() {
        let pairs = [(0.0, 100.0), (10.0, 300.0)];
        assert_eq!(lerp(&pairs, -1.0).unwrap(), Lerp { y: 100.0, clamped: true });
        assert_eq!(lerp(&pairs, 11.0).unwrap(), Lerp { y: 300.0, clamped: true });
        // Endpoints themselves count as clamped
        assert!(lerp(&pairs, 0.0).unwrap().clamped);
        assert!(lerp(&pairs, 10.0).unwrap().clamped);
    }

    #[test]
    fn test_lerp_interior_point_not_clamped() {
        let res = lerp(&PAIRS, 5.0).unwrap();
        assert_relative_eq!(res.y, 200.0);
        assert!(!res.clamped);
    }

    #[test]
    fn test_lerp_single_pair_always_clamps() {
        let pairs = [(3.0, 250.0)];
        for x in [-5.0, 3.0, 7.0] {
            assert_eq!(lerp(&pairs, x).unwrap(), Lerp { y: 250.0, clamped: true });
        }
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(lerp(&[], 1.0), Err(InterpolationError::EmptyTable));
        assert_eq!(inv_lerp(&[], 1.0), Err(InterpolationError::EmptyTable));
    }

    #[test]
    fn test_inv_lerp_inside_range() {
        let res = inv_lerp(&PAIRS, 250.0).unwrap();
        assert_relative_eq!(res.x, 7.5);
        assert!(!res.clamped);
    }

    #[test]
    fn test_inv_lerp_clamps() {
        assert_eq!(inv_lerp(&PAIRS, 50.0).unwrap(), InvLerp { x: 0.0, clamped: true });
        assert_eq!(inv_lerp(&PAIRS, 900.0).unwrap(), InvLerp { x: 10.0, clamped: true });
    }

    #[test]
    fn test_inv_lerp_flat_segment_takes_first() {
        let pairs = [(0.0, 100.0), (2.0, 200.0), (4.0, 200.0), (6.0, 300.0)];
        let res = inv_lerp(&pairs, 200.0).unwrap();
        assert_relative_eq!(res.x, 2.0);
    }

    #[test]
    fn test_convert_clicks_to_dial() {
        let from = grinder("from", SettingFormat::Integer, 6.0, 35.0, 1.0, &[("6", 200.0), ("20", 400.0), ("35", 700.0)]);
        let to = grinder("to", SettingFormat::Decimal, 0.0, 10.0, 0.1, &[("1.0", 200.0), ("2.5", 400.0), ("5.0", 700.0)]);

        let res = convert_between_grinders(&from, &to, 20.0).unwrap();
        assert_relative_eq!(res.micrometer, 400.0);
        assert_relative_eq!(res.setting, 2.5);
        assert!(!res.clamped);
        assert_eq!(res.warning(), None);
    }

    #[test]
    fn test_convert_interpolates_source() {
        let from = grinder("from", SettingFormat::Integer, 6.0, 35.0, 1.0, &[("6", 200.0), ("20", 400.0), ("35", 700.0)]);
        let to = grinder("to", SettingFormat::Decimal, 0.0, 10.0, 0.1, &[("1.0", 200.0), ("2.5", 400.0), ("5.0", 700.0)]);

        // 13 clicks sits halfway between 6 and 20
        let res = convert_between_grinders(&from, &to, 13.0).unwrap();
        assert_relative_eq!(res.micrometer, 300.0);
        assert_relative_eq!(res.setting, 1.75);
    }

    #[test]
    fn test_convert_clamps_to_target_range() {
        let a = grinder("A", SettingFormat::Integer, 0.0, 10.0, 1.0, &[("0", 100.0), ("5", 200.0), ("10", 300.0)]);
        let b = grinder("B", SettingFormat::Decimal, 0.0, 10.0, 0.5, &[("1", 100.0), ("9", 300.0)]);

        let res = convert_between_grinders(&a, &b, 10.0).unwrap();
        assert_relative_eq!(res.micrometer, 300.0);
        assert_relative_eq!(res.setting, 9.0);
        assert!(res.clamped);
        assert_eq!(res.warning(), Some(CLAMP_WARNING));
    }

    #[test]
    fn test_convert_with_empty_target_fails() {
        let a = grinder("A", SettingFormat::Integer, 0.0, 10.0, 1.0, &[("0", 100.0), ("10", 300.0)]);
        let empty = grinder("E", SettingFormat::Integer, 0.0, 10.0, 1.0, &[]);

        assert_eq!(convert_between_grinders(&a, &empty, 5.0), Err(InterpolationError::EmptyTable));
        assert_eq!(convert_between_grinders(&empty, &a, 5.0), Err(InterpolationError::EmptyTable));
    }

    #[test]
    fn test_convert_microns_to_setting() {
        let b = grinder("B", SettingFormat::Decimal, 0.0, 10.0, 0.5, &[("1", 100.0), ("9", 300.0)]);
        let res = convert_microns_to_setting(&b, 200.0).unwrap();
        assert_relative_eq!(res.x, 5.0);
        assert!(!res.clamped);
    }
}
