use pdf_jigs::*;

#[test]
fn test_defaults_are_valid() {
    let options = JigOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.unit, Unit::Inch);
    assert!((options.hole_diameter - 5.0 / 25.4).abs() < 1e-12);
}

#[test]
fn test_validation_rejects_non_positive_lengths() {
    let mut options = JigOptions::default();
    options.hole_diameter = -1.0;
    match options.validate() {
        Err(JigError::InvalidDimension { name, value }) => {
            assert_eq!(name, "hole_diameter");
            assert_eq!(value, -1.0);
        }
        _ => panic!("Expected InvalidDimension error"),
    }

    let mut options = JigOptions::default();
    options.hole_interval = 0.0;
    assert!(options.validate().is_err());

    let mut options = JigOptions::default();
    options.sheet_width = f64::NAN;
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_first_hole_must_fit() {
    let mut options = JigOptions::default();
    options.first_hole_at = 4.0;
    match options.validate() {
        Err(JigError::Config(msg)) => assert!(msg.contains("does not fit")),
        _ => panic!("Expected Config error"),
    }

    // Exactly half the sheet still fits
    options.first_hole_at = 3.0;
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_sweep_step() {
    let mut options = JigOptions::default();
    options.sweep.step = 0.0;
    match options.validate() {
        Err(JigError::Config(msg)) => assert!(msg.contains("sweep step")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_label_font() {
    let mut options = JigOptions::default();
    options.label_font_family = "Papyrus".to_string();
    assert!(matches!(options.validate(), Err(JigError::AssetMissing(_))));

    options.label_font_family = "arial".to_string();
    assert!(options.validate().is_ok());
}

#[test]
fn test_sweep_sizes() {
    assert_eq!(
        SizeSweep::default().sizes(),
        vec![0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0]
    );

    let sweep = SizeSweep {
        start: 0.0,
        step: 0.1,
        end: 0.5,
    };
    assert_eq!(sweep.sizes().len(), 5);

    let empty = SizeSweep {
        start: 2.0,
        step: 0.25,
        end: 1.0,
    };
    assert!(empty.sizes().is_empty());

    let invalid = SizeSweep {
        start: 0.0,
        step: -0.25,
        end: 1.0,
    };
    assert!(invalid.sizes().is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn test_save_load_options() {
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    let path = temp_file.path();

    let mut options = JigOptions::default();
    options.unit = Unit::Centimeter;
    options.sheet_width = 15.0;
    options.hole_diameter = 0.5;
    options.label_font_family = "Arial".to_string();
    options.sweep = SizeSweep {
        start: 1.0,
        step: 0.5,
        end: 5.0,
    };

    options.save(path).unwrap();
    let loaded = JigOptions::load(path).unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[test]
fn test_load_partial_options() {
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "sheet_width": 8.0, "unit": "inch" }"#).unwrap();

    let loaded = JigOptions::load(temp_file.path()).unwrap();
    assert_eq!(loaded.sheet_width, 8.0);
    assert_eq!(loaded.first_hole_at, JigOptions::default().first_hole_at);
    assert_eq!(loaded.sweep, SizeSweep::default());
}

#[cfg(feature = "serde")]
#[test]
fn test_load_malformed_options() {
    let temp_file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "{ not json").unwrap();

    match JigOptions::load(temp_file.path()) {
        Err(JigError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        _ => panic!("Expected Config error"),
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        JigOptions::load(dir.path().join("missing.json")),
        Err(JigError::Io(_))
    ));
}
