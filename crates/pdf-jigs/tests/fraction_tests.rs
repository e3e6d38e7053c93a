use pdf_jigs::fraction::format;

const DENOMINATIONS: [(f64, &str); 11] = [
    (0.125, "\u{215B}"),
    (0.2, "\u{2155}"),
    (0.25, "\u{00BC}"),
    (0.375, "\u{215C}"),
    (0.4, "\u{2156}"),
    (0.5, "\u{00BD}"),
    (0.6, "\u{2157}"),
    (0.625, "\u{215D}"),
    (0.75, "\u{00BE}"),
    (0.8, "\u{2158}"),
    (0.875, "\u{215E}"),
];

#[test]
fn test_whole_numbers() {
    assert_eq!(format(0.0), "0");
    assert_eq!(format(1.0), "1");
    assert_eq!(format(12.0), "12");
    assert_eq!(format(250.0), "250");
}

#[test]
fn test_glyph_alone_below_one() {
    for (fraction, glyph) in DENOMINATIONS {
        assert_eq!(format(fraction), glyph);
    }
}

#[test]
fn test_whole_prefix_without_separator() {
    for whole in [1.0, 2.0, 7.0] {
        for (fraction, glyph) in DENOMINATIONS {
            assert_eq!(format(whole + fraction), format!("{}{}", whole as i64, glyph));
        }
    }
}

#[test]
fn test_one_decimal_fallback() {
    assert_eq!(format(0.3), "0.3");
    assert_eq!(format(0.7), "0.7");
    assert_eq!(format(1.9), "1.9");
    assert_eq!(format(2.33), "2.3");
}

#[test]
fn test_computed_values_keep_their_glyph() {
    // Sizes produced by repeated addition drift away from the exact value
    let mut size = 0.0;
    for _ in 0..8 {
        size += 0.1;
    }
    assert_ne!(size, 0.8);
    assert_eq!(format(size), "\u{2158}");
    assert_eq!(format(1.0 + 0.1 + 0.1), "1\u{2155}");
}

#[test]
fn test_negative_values() {
    assert_eq!(format(-1.5), "-1\u{00BD}");
    assert_eq!(format(-2.0), "-2");
    assert_eq!(format(-0.0), "0");
}

#[test]
fn test_large_whole_numbers() {
    assert_eq!(format(1e19), "10000000000000000000");
    assert_eq!(format(1e19 + 0.5), "10000000000000000000");
    assert_eq!(format(4_294_967_296.5), "4294967296\u{00BD}");
}
