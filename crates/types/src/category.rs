//! Descriptive grind size bands

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grind size category, ordered from finest to coarsest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GrindCategory {
    #[serde(rename = "grindExtraFine")]
    ExtraFine,
    #[serde(rename = "grindFine")]
    Fine,
    #[serde(rename = "grindMediumFine")]
    MediumFine,
    #[serde(rename = "grindMedium")]
    Medium,
    #[serde(rename = "grindMediumCoarse")]
    MediumCoarse,
    #[serde(rename = "grindCoarse")]
    Coarse,
    #[serde(rename = "grindExtraCoarse")]
    ExtraCoarse,
}

impl GrindCategory {
    /// All categories, finest first
    pub const ALL: [GrindCategory; 7] = [
        GrindCategory::ExtraFine,
        GrindCategory::Fine,
        GrindCategory::MediumFine,
        GrindCategory::Medium,
        GrindCategory::MediumCoarse,
        GrindCategory::Coarse,
        GrindCategory::ExtraCoarse,
    ];

    /// Message key handed to the external translation lookup
    pub fn message_key(&self) -> &'static str {
        match self {
            GrindCategory::ExtraFine => "grindExtraFine",
            GrindCategory::Fine => "grindFine",
            GrindCategory::MediumFine => "grindMediumFine",
            GrindCategory::Medium => "grindMedium",
            GrindCategory::MediumCoarse => "grindMediumCoarse",
            GrindCategory::Coarse => "grindCoarse",
            GrindCategory::ExtraCoarse => "grindExtraCoarse",
        }
    }

    /// English label
    pub fn label(&self) -> &'static str {
        match self {
            GrindCategory::ExtraFine => "Extra fine",
            GrindCategory::Fine => "Fine",
            GrindCategory::MediumFine => "Medium-fine",
            GrindCategory::Medium => "Medium",
            GrindCategory::MediumCoarse => "Medium-coarse",
            GrindCategory::Coarse => "Coarse",
            GrindCategory::ExtraCoarse => "Extra coarse",
        }
    }
}

impl fmt::Display for GrindCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
