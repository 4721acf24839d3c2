//! Parsing and validating user-entered settings

use crate::constants::STEP_TOLERANCE;
use crate::error::ValidationError;
use crate::grinder::Grinder;
use grindmatch_types::SettingFormat;

/// Parse raw text into a setting value
///
/// Returns `None` for empty or whitespace-only text, for text that is not a
/// finite number, and for fractional values when `format` is integer.
/// Callers that need to tell "nothing typed yet" from "invalid" should
/// check the text themselves or use [`read_setting`].
pub fn parse_input(text: &str, format: SettingFormat) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let n = trimmed.parse::<f64>().ok().filter(|n| n.is_finite())?;
    if format == SettingFormat::Integer && n.fract() != 0.0 {
        return None;
    }
    Some(n)
}

/// Check that `n` lies within the grinder's bounds and on its step lattice
pub fn validate_range_and_step(n: f64, grinder: &Grinder) -> Result<(), ValidationError> {
    let constraints = grinder.constraints();
    if !n.is_finite() || n < constraints.min || n > constraints.max {
        return Err(ValidationError::OutOfRange {
            value: n,
            grinder: grinder.display_name().to_string(),
            min: constraints.min,
            max: constraints.max,
            step: constraints.step,
        });
    }

    let k = (n - constraints.min) / constraints.step;
    if (k - k.round()).abs() > STEP_TOLERANCE {
        return Err(ValidationError::Misaligned {
            value: n,
            min: constraints.min,
            step: constraints.step,
        });
    }

    Ok(())
}

/// Full input pipeline for a source setting
///
/// `Ok(None)` means nothing has been entered yet and no error should be
/// shown. Non-empty text that does not parse is `Unparseable`; parsed
/// values are then checked against range and step.
pub fn read_setting(text: &str, grinder: &Grinder) -> Result<Option<f64>, ValidationError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let n = parse_input(text, grinder.setting_format()).ok_or(ValidationError::Unparseable)?;
    validate_range_and_step(n, grinder)?;
    Ok(Some(n))
}
