use pdf_jigs::*;

fn hole_diameter() -> f64 {
    convert(5.0, Unit::Millimeter, Unit::Inch)
}

#[test]
fn test_layout_holes_toward_the_middle() {
    let holes = layout_holes(0.5, 0.25, 0.2, 0.25, 10);
    assert_eq!(holes.len(), 10);
    assert_eq!(holes[0].center, (0.5, 0.25));
    assert_eq!(holes[9].center, (2.75, 0.25));
    assert!(holes.iter().all(|hole| hole.diameter == 0.2));
}

#[test]
fn test_layout_holes_negative_spacing() {
    let holes = layout_holes(5.5, 0.5, 0.2, -0.25, 10);
    assert_eq!(holes[0].center.0, 5.5);
    assert_eq!(holes[9].center.0, 3.25);
    for pair in holes.windows(2) {
        assert!((pair[0].center.0 - pair[1].center.0 - 0.25).abs() < 1e-12);
    }
}

#[test]
fn test_layout_holes_stay_within_the_row() {
    for (anchor, spacing, count) in [(0.5, 0.25, 10), (5.5, -0.25, 10), (1.0, 0.2, 7)] {
        let holes = layout_holes(anchor, 1.0, 0.2, spacing, count);
        let end = anchor + (count - 1) as f64 * spacing;
        let (low, high) = (anchor.min(end), anchor.max(end));

        assert_eq!(holes.len(), count);
        for pair in holes.windows(2) {
            let gap = (pair[1].center.0 - pair[0].center.0).abs();
            assert!((gap - f64::abs(spacing)).abs() < 1e-9);
        }
        assert!(
            holes
                .iter()
                .all(|hole| hole.center.0 >= low - 1e-9 && hole.center.0 <= high + 1e-9)
        );
    }
}

#[test]
fn test_layout_holes_empty() {
    assert!(layout_holes(0.5, 0.5, 0.2, 0.25, 0).is_empty());
}

#[test]
fn test_hole_count() {
    assert_eq!(hole_count(3.0, 0.5, 0.25), 10);
    assert_eq!(hole_count(3.0, 0.5, -0.25), 10);
    assert_eq!(hole_count(0.4, 0.5, 0.25), 0);
}

#[test]
fn test_slice_rows() {
    assert_eq!(slice_rows(6.0, 3), vec![2.0, 4.0]);
    assert_eq!(slice_rows(1.0, 4), vec![0.25, 0.5, 0.75]);
    assert_eq!(slice_rows(1.0, 2), vec![0.5]);
    assert!(slice_rows(1.0, 1).is_empty());
    assert!(slice_rows(1.0, 0).is_empty());
}

#[test]
fn test_staggered_bands() {
    let policy = StaggeredBands::default();
    let d = hole_diameter();

    assert_eq!(policy.choose(0.5, d), BandChoice { left: 2, right: 2 });
    assert_eq!(policy.choose(0.75, d), BandChoice { left: 3, right: 2 });
    assert_eq!(policy.choose(1.0, d), BandChoice { left: 4, right: 3 });
    assert_eq!(policy.choose(2.0, d), BandChoice { left: 4, right: 3 });
}

#[test]
fn test_uniform_bands() {
    let policy = UniformBands { max: 4 };
    let d = hole_diameter();

    assert_eq!(policy.choose(0.75, d), BandChoice { left: 3, right: 3 });
    assert_eq!(policy.choose(0.25, d), BandChoice { left: 2, right: 2 });
}

#[test]
fn test_bands_stay_taller_than_a_hole() {
    let policy = StaggeredBands::default();
    let d = hole_diameter();
    for height in [0.75, 1.0, 1.25, 1.5] {
        let choice = policy.choose(height, d);
        for bands in [choice.left, choice.right] {
            if bands > 2 {
                assert!(height / bands as f64 > d);
            }
        }
    }
}
