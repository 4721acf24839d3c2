//! Views built on top of the conversion engine
//!
//! - table: one particle size expressed as a setting on every grinder
//! - ranges: the calibrated particle size span of each grinder
//! - conversion: the full convert/round/categorize result for one input

use grindmatch_core::{
    categorize_grind, convert_between_grinders, convert_microns_to_setting, round_to_step,
    GrindCategory, Grinder, InterpolationError, CLAMP_WARNING,
};
use std::fmt;

/// Chart scale granularity for the range overview (µm)
pub const CHART_ROUNDING_UM: f64 = 100.0;

/// Chart scale used when no grinders are loaded
pub const DEFAULT_CHART_MAX_UM: f64 = 1000.0;

/// One grinder's setting for the requested particle size
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub name: String,
    /// Setting snapped to the grinder's step lattice
    pub setting: f64,
    pub clamped: bool,
}

/// Express `micrometer` as a setting on each grinder
///
/// Grinders without calibration data are skipped.
pub fn micron_table<'a, I>(grinders: I, micrometer: f64) -> Vec<TableRow>
where
    I: IntoIterator<Item = &'a Grinder>,
{
    grinders
        .into_iter()
        .filter_map(|grinder| match convert_microns_to_setting(grinder, micrometer) {
            Ok(result) => Some(TableRow {
                name: grinder.display_name().to_string(),
                setting: round_to_step(result.x, grinder),
                clamped: result.clamped,
            }),
            Err(e) => {
                log::warn!("Skipping {} in table: {}", grinder.id(), e);
                None
            }
        })
        .collect()
}

/// Calibrated particle size span of one grinder
#[derive(Debug, Clone, PartialEq)]
pub struct GrinderRange {
    pub name: String,
    pub min: f64,
    pub max: f64,
}

/// Particle size spans of all grinders on a shared scale
#[derive(Debug, Clone, PartialEq)]
pub struct RangeOverview {
    /// Spans sorted by their lower bound
    pub ranges: Vec<GrinderRange>,
    pub chart_min: f64,
    pub chart_max: f64,
}

impl RangeOverview {
    /// Width of the chart scale, never zero
    pub fn span(&self) -> f64 {
        let span = self.chart_max - self.chart_min;
        if span > 0.0 {
            span
        } else {
            1.0
        }
    }

    /// Midpoint label of the scale
    pub fn chart_mid(&self) -> f64 {
        ((self.chart_min + self.chart_max) / 2.0).round()
    }

    /// Left offset and width of `range` as fractions of the scale
    pub fn position(&self, range: &GrinderRange) -> (f64, f64) {
        let span = self.span();
        (
            (range.min - self.chart_min) / span,
            (range.max - range.min) / span,
        )
    }
}

/// Build the range overview for a set of grinders
///
/// Grinders without calibration data are shown as `0..0`. The scale runs
/// from the smallest lower bound floored to 100 µm to the largest upper
/// bound ceiled to 100 µm.
pub fn range_overview<'a, I>(grinders: I) -> RangeOverview
where
    I: IntoIterator<Item = &'a Grinder>,
{
    let mut ranges: Vec<GrinderRange> = grinders
        .into_iter()
        .map(|grinder| {
            let (min, max) = grinder.micrometer_range().unwrap_or((0.0, 0.0));
            GrinderRange {
                name: grinder.display_name().to_string(),
                min,
                max,
            }
        })
        .collect();
    ranges.sort_by(|a, b| a.min.total_cmp(&b.min));

    let (global_min, global_max) = if ranges.is_empty() {
        (0.0, DEFAULT_CHART_MAX_UM)
    } else {
        (
            ranges.iter().map(|r| r.min).fold(f64::INFINITY, f64::min),
            ranges.iter().map(|r| r.max).fold(f64::NEG_INFINITY, f64::max),
        )
    };

    RangeOverview {
        ranges,
        chart_min: (global_min / CHART_ROUNDING_UM).floor() * CHART_ROUNDING_UM,
        chart_max: (global_max / CHART_ROUNDING_UM).ceil() * CHART_ROUNDING_UM,
    }
}

/// Outcome of converting one setting between two grinders
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub target_name: String,
    pub micrometer: f64,
    /// Target setting before snapping to the lattice
    pub setting: f64,
    /// Target setting snapped to the lattice
    pub rounded: f64,
    pub clamped: bool,
    pub category: GrindCategory,
}

impl ConversionReport {
    /// Convert a validated `setting` on `source` to `target`
    pub fn build(source: &Grinder, target: &Grinder, setting: f64) -> Result<Self, InterpolationError> {
        let conversion = convert_between_grinders(source, target, setting)?;
        Ok(Self {
            target_name: target.display_name().to_string(),
            micrometer: conversion.micrometer,
            setting: conversion.setting,
            rounded: round_to_step(conversion.setting, target),
            clamped: conversion.clamped,
            category: categorize_grind(conversion.micrometer),
        })
    }
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} setting ≈ {}", self.target_name, self.rounded)?;
        write!(
            f,
            "~ {:.1} µm (median match, {})",
            self.micrometer,
            self.category.label().to_lowercase()
        )?;
        if self.clamped {
            write!(f, "\n{}", CLAMP_WARNING)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use grindmatch_core::{GrinderRecord, SettingConstraints, SettingFormat};

    fn grinder(
        name: &str,
        format: SettingFormat,
        constraints: (f64, f64, f64),
        points: &[(&str, f64)],
    ) -> Grinder {
        let (min, max, step) = constraints;
        let record = GrinderRecord::new(name, name, format, SettingConstraints { min, max, step })
            .with_points(points.iter().copied());
        Grinder::from_record(&record).unwrap()
    }

    fn clicks() -> Grinder {
        grinder(
            "Clicks",
            SettingFormat::Integer,
            (6.0, 35.0, 1.0),
            &[("6", 200.0), ("20", 400.0), ("35", 700.0)],
        )
    }

    fn dial() -> Grinder {
        grinder(
            "Dial",
            SettingFormat::Decimal,
            (0.0, 10.0, 0.1),
            &[("1.0", 200.0), ("2.5", 400.0), ("5.0", 700.0)],
        )
    }

    #[test]
    fn test_conversion_report() {
        let report = ConversionReport::build(&clicks(), &dial(), 20.0).unwrap();
        assert_relative_eq!(report.micrometer, 400.0);
        assert_relative_eq!(report.setting, 2.5);
        assert_relative_eq!(report.rounded, 2.5);
        assert!(!report.clamped);
        assert_eq!(report.category, GrindCategory::MediumFine);

        let text = report.to_string();
        assert!(text.contains("Dial setting ≈ 2.5"));
        assert!(text.contains("~ 400.0 µm"));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn test_conversion_report_rounds_to_clicks() {
        // 1.7 on the dial -> 293.3 µm -> 12.53 clicks -> 13
        let report = ConversionReport::build(&dial(), &clicks(), 1.7).unwrap();
        assert_relative_eq!(report.micrometer, 293.333333, epsilon = 1e-3);
        assert_relative_eq!(report.setting, 12.533333, epsilon = 1e-3);
        assert_eq!(report.rounded, 13.0);
    }

    #[test]
    fn test_conversion_report_clamped_warning() {
        let report = ConversionReport::build(&dial(), &clicks(), 9.0).unwrap();
        assert!(report.clamped);
        assert_eq!(report.rounded, 35.0);
        assert!(report.to_string().contains(CLAMP_WARNING));
    }

    #[test]
    fn test_micron_table() {
        let empty = grinder("Empty", SettingFormat::Integer, (0.0, 10.0, 1.0), &[]);
        let grinders = [clicks(), dial(), empty];
        let rows = micron_table(grinders.iter(), 320.0);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Clicks");
        assert_eq!(rows[0].setting, 14.0);
        assert!(!rows[0].clamped);
        assert_eq!(rows[1].name, "Dial");
        assert_relative_eq!(rows[1].setting, 1.9);
    }

    #[test]
    fn test_micron_table_flags_clamped_rows() {
        let grinders = [clicks()];
        let rows = micron_table(grinders.iter(), 1500.0);
        assert_eq!(rows[0].setting, 35.0);
        assert!(rows[0].clamped);
    }

    #[test]
    fn test_micron_table_accepts_negative_size() {
        let grinders = [clicks(), dial()];
        let rows = micron_table(grinders.iter(), -50.0);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].setting, 6.0);
        assert_relative_eq!(rows[1].setting, 1.0);
        assert!(rows.iter().all(|r| r.clamped));
        assert_eq!(categorize_grind(-50.0), GrindCategory::ExtraFine);
    }

    #[test]
    fn test_range_overview() {
        let coarse = grinder(
            "Coarse",
            SettingFormat::Integer,
            (0.0, 40.0, 1.0),
            &[("10", 450.0), ("40", 1250.0)],
        );
        let grinders = [coarse, clicks()];
        let overview = range_overview(grinders.iter());

        assert_eq!(overview.ranges[0].name, "Clicks");
        assert_eq!(overview.ranges[1].name, "Coarse");
        assert_eq!(overview.chart_min, 200.0);
        assert_eq!(overview.chart_max, 1300.0);
        assert_eq!(overview.chart_mid(), 750.0);

        let (left, width) = overview.position(&overview.ranges[1]);
        assert_relative_eq!(left, 250.0 / 1100.0);
        assert_relative_eq!(width, 800.0 / 1100.0);
    }

    #[test]
    fn test_range_overview_without_grinders() {
        let overview = range_overview(std::iter::empty());
        assert!(overview.ranges.is_empty());
        assert_eq!(overview.chart_min, 0.0);
        assert_eq!(overview.chart_max, DEFAULT_CHART_MAX_UM);
    }

    #[test]
    fn test_empty_grinder_range_is_zero() {
        let empty = grinder("Empty", SettingFormat::Integer, (0.0, 10.0, 1.0), &[]);
        let grinders = [empty];
        let overview = range_overview(grinders.iter());
        assert_eq!(overview.ranges[0].min, 0.0);
        assert_eq!(overview.ranges[0].max, 0.0);
        assert_eq!(overview.span(), 1.0);
    }
}
