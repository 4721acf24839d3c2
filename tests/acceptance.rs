//! End-to-end conversion against the bundled sample records

use approx::assert_relative_eq;
use grindmatch::core::{micron_table, ConversionReport, RecordLoader};
use grindmatch::engine::{read_setting, round_to_step, validate_range_and_step, ValidationError};
use grindmatch::sources::DirectorySource;
use std::path::PathBuf;

fn loader() -> RecordLoader<DirectorySource> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join("grinders");
    RecordLoader::new(DirectorySource::new(dir))
}

#[test]
fn validates_converts_and_rounds() {
    let loader = loader();
    let from = loader.find("sample-clicks").unwrap();
    let to = loader.find("sample-dial").unwrap();

    assert!(validate_range_and_step(20.0, &from.grinder).is_ok());

    let report = ConversionReport::build(&from.grinder, &to.grinder, 20.0).unwrap();
    assert_relative_eq!(report.micrometer, 400.0);
    assert_relative_eq!(report.setting, 2.5);
    assert_relative_eq!(report.rounded, 2.5);
    assert!(!report.clamped);
    assert_relative_eq!(round_to_step(report.setting, &to.grinder), report.rounded);
}

#[test]
fn rejects_input_outside_source_lattice() {
    let loader = loader();
    let from = loader.find("sample-clicks").unwrap();

    assert_eq!(read_setting("", &from.grinder), Ok(None));
    assert_eq!(read_setting("12.5", &from.grinder), Err(ValidationError::Unparseable));
    let err = read_setting("40", &from.grinder).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Value 40 is out of range for Sample Clicks Grinder (allowed: 6–35, step 1)."
    );
}

#[test]
fn dial_to_clicks_clamps_past_calibration() {
    let loader = loader();
    let from = loader.find("sample-dial").unwrap();
    let to = loader.find("sample-clicks").unwrap();

    let setting = read_setting("8.0", &from.grinder).unwrap().unwrap();
    let report = ConversionReport::build(&from.grinder, &to.grinder, setting).unwrap();
    assert!(report.clamped);
    assert_eq!(report.rounded, 35.0);
}

#[test]
fn table_covers_every_manifest_entry() {
    let loader = loader();
    let grinders = loader.load_all().unwrap();
    let rows = micron_table(grinders.iter().map(|g| g.grinder.as_ref()), 580.0);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "Sample Clicks Grinder");
    assert_eq!(rows[0].setting, 29.0);
    assert_relative_eq!(rows[1].setting, 4.0);
}
