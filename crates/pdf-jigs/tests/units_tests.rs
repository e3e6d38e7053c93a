use pdf_jigs::*;

#[test]
fn test_round_trip_every_unit_pair() {
    for from in Unit::ALL {
        for to in Unit::ALL {
            for value in [0.0, 0.125, 1.0, 5.0, 72.0, 1234.5] {
                let there = convert(value, from, to);
                let back = convert(there, to, from);
                assert!(
                    (back - value).abs() <= 1e-9 * value.abs().max(1.0),
                    "{} {} -> {} -> {}",
                    value,
                    from,
                    to,
                    back
                );
            }
        }
    }
}

#[test]
fn test_standard_factors() {
    assert_eq!(convert(2.0, Unit::Inch, Unit::Point), 144.0);
    assert!((convert(25.4, Unit::Millimeter, Unit::Inch) - 1.0).abs() < 1e-12);
    assert_eq!(convert(10.0, Unit::Millimeter, Unit::Centimeter), 1.0);
    assert!((convert(1.0, Unit::Centimeter, Unit::Point) - 72.0 / 2.54).abs() < 1e-12);
}

#[test]
fn test_convert_named() {
    assert_eq!(convert_named(1.0, "in", "mm").unwrap(), 25.4);
    assert_eq!(convert_named(72.0, "points", "inches").unwrap(), 1.0);
}

#[test]
fn test_convert_named_invalid_unit() {
    match convert_named(1.0, "cubit", "mm") {
        Err(JigError::InvalidUnit(name)) => assert_eq!(name, "cubit"),
        other => panic!("Expected InvalidUnit error, got {:?}", other),
    }
    assert!(matches!(
        convert_named(1.0, "mm", "parsec"),
        Err(JigError::InvalidUnit(_))
    ));
}

#[test]
fn test_measurement() {
    let hole = Measurement::millimeters(5.0);
    assert!((hole.to(Unit::Inch) - 0.196850393700787).abs() < 1e-12);
    assert_eq!(hole.convert(Unit::Centimeter), Measurement::new(0.5, Unit::Centimeter));
    assert_eq!(Measurement::inches(1.5).to_string(), "1.5in");
}
