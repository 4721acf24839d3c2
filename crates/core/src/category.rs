//! Grind size classification from median particle size

use crate::constants::{
    COARSE_MIN_UM, EXTRA_COARSE_MIN_UM, FINE_BAND_MIN_UM, FINE_SPLIT_UM, MEDIUM_COARSE_MIN_UM,
    MEDIUM_FINE_MIN_UM, MEDIUM_MIN_UM,
};
use grindmatch_types::GrindCategory;

/// Classify a median particle size (µm) into a descriptive band
///
/// Checks run coarsest first and the first match wins. Medium-coarse takes
/// the 700–800 overlap from medium, and the `[100, 300)` band is split at
/// 130 into extra-fine and fine. Anything not finite or negative falls back
/// to extra-fine.
pub fn categorize_grind(um: f64) -> GrindCategory {
    if !um.is_finite() || um < 0.0 {
        return GrindCategory::ExtraFine;
    }
    if um >= EXTRA_COARSE_MIN_UM {
        return GrindCategory::ExtraCoarse;
    }
    if um >= COARSE_MIN_UM {
        return GrindCategory::Coarse;
    }
    if um >= MEDIUM_COARSE_MIN_UM {
        return GrindCategory::MediumCoarse;
    }
    if um >= MEDIUM_MIN_UM {
        return GrindCategory::Medium;
    }
    if um >= MEDIUM_FINE_MIN_UM {
        return GrindCategory::MediumFine;
    }
    if um >= FINE_BAND_MIN_UM {
        return if um < FINE_SPLIT_UM {
            GrindCategory::ExtraFine
        } else {
            GrindCategory::Fine
        };
    }
    GrindCategory::ExtraFine
}

/// Localized label for the band `um` falls into
///
/// `lookup` receives the category's message key (e.g. `grindMedium`).
pub fn grind_category_label<F>(lookup: F, um: f64) -> String
where
    F: Fn(&str) -> String,
{
    lookup(categorize_grind(um).message_key())
}
