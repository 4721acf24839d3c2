//! Grinder record types as stored on disk

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// How a grinder's setting is physically adjusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SettingType {
    /// Discrete clicks counted from zero point
    #[serde(rename = "clicks")]
    #[default]
    Clicks,
    /// Continuous dial read off a scale
    #[serde(rename = "dial")]
    Dial,
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingType::Clicks => write!(f, "clicks"),
            SettingType::Dial => write!(f, "dial"),
        }
    }
}

/// Numeric format of a setting value
///
/// Governs how strictly user input is parsed and whether rounded
/// results are forced to whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SettingFormat {
    #[serde(rename = "integer")]
    #[default]
    Integer,
    #[serde(rename = "decimal")]
    Decimal,
}

impl fmt::Display for SettingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingFormat::Integer => write!(f, "integer"),
            SettingFormat::Decimal => write!(f, "decimal"),
        }
    }
}

/// Valid setting lattice: `min, min + step, min + 2*step, ... <= max`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettingConstraints {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SettingConstraints {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 40.0,
            step: 1.0,
        }
    }
}

/// Calibration profile for one physical grinder
///
/// This mirrors the JSON document layout exactly. The `mapping` keys are
/// settings written as strings (e.g. `"2.5"`), the values are the median
/// particle size in micrometers that setting produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrinderRecord {
    /// Stable identifier
    pub grinder_id: String,
    /// Human-readable label
    pub display_name: String,
    #[serde(default)]
    pub setting_type: SettingType,
    #[serde(default)]
    pub setting_format: SettingFormat,
    pub setting_constraints: SettingConstraints,
    /// Setting (as string) -> median particle size in µm
    #[serde(default)]
    pub mapping: BTreeMap<String, f64>,
}

impl GrinderRecord {
    /// Create a record with an empty mapping
    pub fn new(
        grinder_id: impl Into<String>,
        display_name: impl Into<String>,
        setting_format: SettingFormat,
        setting_constraints: SettingConstraints,
    ) -> Self {
        Self {
            grinder_id: grinder_id.into(),
            display_name: display_name.into(),
            setting_type: match setting_format {
                SettingFormat::Integer => SettingType::Clicks,
                SettingFormat::Decimal => SettingType::Dial,
            },
            setting_format,
            setting_constraints,
            mapping: BTreeMap::new(),
        }
    }

    /// Builder-style helper to add calibration points
    pub fn with_points<K: ToString>(mut self, points: impl IntoIterator<Item = (K, f64)>) -> Self {
        for (setting, um) in points {
            self.mapping.insert(setting.to_string(), um);
        }
        self
    }
}

/// List of grinder record file names available to the loader
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "grinder_id": "comandante-c40",
            "display_name": "Comandante C40",
            "setting_type": "clicks",
            "setting_format": "integer",
            "setting_constraints": { "min": 0, "max": 40, "step": 1 },
            "mapping": { "10": 350, "20": 600, "30": 900 }
        }"#;

        let record: GrinderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.grinder_id, "comandante-c40");
        assert_eq!(record.setting_type, SettingType::Clicks);
        assert_eq!(record.setting_format, SettingFormat::Integer);
        assert_eq!(record.setting_constraints.max, 40.0);
        assert_eq!(record.mapping.get("20"), Some(&600.0));
    }

    #[test]
    fn test_dial_record_keeps_key_text() {
        let json = r#"{
            "grinder_id": "dial",
            "display_name": "Dial",
            "setting_type": "dial",
            "setting_format": "decimal",
            "setting_constraints": { "min": 0, "max": 10, "step": 0.1 },
            "mapping": { "1.0": 200, "2.5": 400 }
        }"#;

        let record: GrinderRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.setting_format, SettingFormat::Decimal);
        assert!(record.mapping.contains_key("1.0"));
    }

    #[test]
    fn test_manifest_serialization() {
        let manifest = Manifest {
            files: vec!["a.json".to_string(), "b.json".to_string()],
        };
        let json = serde_json::to_string(&manifest).unwrap();
        assert_eq!(json, r#"{"files":["a.json","b.json"]}"#);
    }

    #[test]
    fn test_with_points() {
        let record = GrinderRecord::new("g", "G", SettingFormat::Decimal, SettingConstraints::default())
            .with_points([("1.5", 300.0), ("3", 500.0)]);
        assert_eq!(record.setting_type, SettingType::Dial);
        assert_eq!(record.mapping.len(), 2);
    }
}
