//! Validated grinder calibration profile

use crate::error::RecordError;
use grindmatch_types::{GrinderRecord, SettingConstraints, SettingFormat, SettingType};

/// A grinder whose calibration table has been parsed and checked
///
/// Built once from a [`GrinderRecord`] and immutable afterwards. The
/// calibration pairs are stored as `(setting, micrometer)` sorted by
/// setting, with micrometers non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct Grinder {
    id: String,
    display_name: String,
    setting_type: SettingType,
    setting_format: SettingFormat,
    constraints: SettingConstraints,
    pairs: Vec<(f64, f64)>,
}

impl Grinder {
    /// Parse and validate a record
    ///
    /// Rejects records whose setting keys are not numbers, whose constraints
    /// do not describe a lattice, or whose particle size shrinks as the
    /// setting grows. An empty mapping is accepted; conversions involving
    /// such a grinder fail with `EmptyTable`.
    pub fn from_record(record: &GrinderRecord) -> Result<Self, RecordError> {
        let name = &record.display_name;
        let SettingConstraints { min, max, step } = record.setting_constraints;

        if !(min.is_finite() && max.is_finite() && step.is_finite()) || step <= 0.0 || min > max {
            return Err(RecordError::InvalidConstraints {
                grinder: name.clone(),
                min,
                max,
                step,
            });
        }

        let mut pairs = Vec::with_capacity(record.mapping.len());
        for (key, &um) in &record.mapping {
            let setting = key
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|s| s.is_finite())
                .ok_or_else(|| RecordError::InvalidSettingKey {
                    grinder: name.clone(),
                    key: key.clone(),
                })?;
            if !um.is_finite() {
                return Err(RecordError::InvalidMicrometer {
                    grinder: name.clone(),
                    setting,
                });
            }
            pairs.push((setting, um));
        }

        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

        for window in pairs.windows(2) {
            let (prev_setting, prev_um) = window[0];
            let (setting, um) = window[1];
            if setting == prev_setting {
                return Err(RecordError::DuplicateSetting {
                    grinder: name.clone(),
                    setting,
                });
            }
            if um < prev_um {
                return Err(RecordError::NonMonotonic {
                    grinder: name.clone(),
                    setting,
                    micrometer: um,
                    previous: prev_um,
                });
            }
        }

        if pairs.is_empty() {
            log::warn!("Grinder '{}' has no calibration points", record.grinder_id);
        } else if pairs.len() == 1 {
            log::debug!(
                "Grinder '{}' has a single calibration point, every conversion will clamp",
                record.grinder_id
            );
        }

        Ok(Self {
            id: record.grinder_id.clone(),
            display_name: record.display_name.clone(),
            setting_type: record.setting_type,
            setting_format: record.setting_format,
            constraints: record.setting_constraints,
            pairs,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn setting_type(&self) -> SettingType {
        self.setting_type
    }

    pub fn setting_format(&self) -> SettingFormat {
        self.setting_format
    }

    pub fn constraints(&self) -> SettingConstraints {
        self.constraints
    }

    /// Calibration pairs `(setting, micrometer)`, ascending by setting
    pub fn pairs(&self) -> &[(f64, f64)] {
        &self.pairs
    }

    /// Micrometer value recorded for exactly this setting, if any
    ///
    /// Matches by numeric equality so `2.5` finds a key written as `"2.50"`.
    pub fn micrometer_at(&self, setting: f64) -> Option<f64> {
        self.pairs
            .iter()
            .find(|(s, _)| *s == setting)
            .map(|&(_, um)| um)
    }

    /// Smallest and largest calibrated particle size
    pub fn micrometer_range(&self) -> Option<(f64, f64)> {
        let first = self.pairs.first()?;
        let last = self.pairs.last()?;
        Some((first.1, last.1))
    }
}
