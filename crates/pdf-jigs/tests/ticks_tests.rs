use pdf_jigs::*;

fn positions(row: &TickRow) -> Vec<f64> {
    row.ticks.iter().map(|tick| tick.position).collect()
}

#[test]
fn test_unmargined_row_covers_both_edges() {
    let row = layout_ticks(&TickOptions::new(6.0), &NoEmphasis);
    let positions = positions(&row);

    assert_eq!(slot_count(6.0, 0.25, 0.0), 26);
    assert_eq!(positions.len(), 25);
    assert_eq!(positions[0], 0.0);
    assert_eq!(positions[24], 6.0);
    assert_eq!(row.edge, Edge::Near);
}

#[test]
fn test_margined_row() {
    let options = TickOptions::new(6.0).margin(0.5).inverted(true);
    let row = layout_ticks(&options, &NoEmphasis);
    let positions = positions(&row);

    assert_eq!(slot_count(6.0, 0.25, 0.5), 22);
    assert_eq!(positions.len(), 21);
    assert_eq!(positions[0], 0.5);
    assert_eq!(positions[20], 5.5);
    assert_eq!(row.edge, Edge::Far);
}

#[test]
fn test_positions_step_by_interval() {
    for options in [
        TickOptions::new(6.0),
        TickOptions::new(6.0).margin(0.5),
        TickOptions::new(5.0).interval(0.2),
    ] {
        let row = layout_ticks(&options, &NoEmphasis);
        for pair in row.ticks.windows(2) {
            let step = pair[1].position - pair[0].position;
            assert!((step - options.interval).abs() < 1e-9);
        }
    }
}

#[test]
fn test_weights_follow_offset_from_row_start() {
    let row = layout_ticks(&TickOptions::new(6.0), &NoEmphasis);
    assert_eq!(row.ticks[0].weight, TickWeight::Major);
    assert_eq!(row.ticks[1].weight, TickWeight::Minor);
    assert_eq!(row.ticks[2].weight, TickWeight::Medium);
    assert_eq!(row.ticks[4].weight, TickWeight::Major);

    // Offsets are measured from the margin, not the page edge
    let row = layout_ticks(&TickOptions::new(6.0).margin(0.5), &NoEmphasis);
    assert_eq!(row.ticks[0].weight, TickWeight::Major);
    assert_eq!(row.ticks[2].weight, TickWeight::Medium);
}

#[test]
fn test_tick_length() {
    let row = layout_ticks(&TickOptions::new(6.0).max_length(0.2), &NoEmphasis);
    assert!((row.ticks[0].length(row.max_length) - 0.2).abs() < 1e-12);
    assert!((row.ticks[1].length(row.max_length) - 0.08).abs() < 1e-12);
}

#[test]
fn test_rivet_spacing_unmargined() {
    let options = TickOptions::new(6.0).mark_special(true);
    let row = layout_ticks(&options, &RivetSpacing::default());

    assert_eq!(row.emphasized_indices(), vec![2, 10, 14, 22]);
    let bold: Vec<f64> = row
        .ticks
        .iter()
        .filter(|tick| tick.emphasized)
        .map(|tick| tick.position)
        .collect();
    assert_eq!(bold, vec![0.5, 2.5, 3.5, 5.5]);
}

#[test]
fn test_rivet_spacing_margined() {
    let options = TickOptions::new(6.0).margin(0.5).mark_special(true);
    let row = layout_ticks(&options, &RivetSpacing::default());

    assert_eq!(row.emphasized_indices(), vec![0, 8, 12, 20]);
    assert_eq!(row.ticks[8].position, 2.5);
}

#[test]
fn test_rivet_spacing_on_short_row() {
    let context = TickContext {
        slots: 3,
        interval: 0.25,
        margined: true,
    };
    assert_eq!(RivetSpacing::default().special_indices(&context), vec![0, 1, 8]);
}

#[test]
fn test_mark_special_off() {
    let row = layout_ticks(&TickOptions::new(6.0), &RivetSpacing::default());
    assert!(row.emphasized_indices().is_empty());
}

#[test]
fn test_closure_emphasis_rule() {
    let every_inch = |index: usize, _context: &TickContext| index % 4 == 0;
    let options = TickOptions::new(6.0).mark_special(true);
    let row = layout_ticks(&options, &every_inch);

    assert_eq!(row.emphasized_indices(), vec![0, 4, 8, 12, 16, 20, 24]);
}

#[test]
fn test_imperial_graduation() {
    let row = layout_graduated(12.0, Graduation::Imperial, Edge::Near, 0.25);
    assert_eq!(row.ticks.len(), 95);
    assert_eq!(row.ticks[0].position, 0.125);

    let majors: Vec<f64> = row
        .ticks
        .iter()
        .filter(|tick| tick.weight == TickWeight::Major)
        .map(|tick| tick.position)
        .collect();
    assert_eq!(majors, (1..12).map(f64::from).collect::<Vec<_>>());
    assert!(row.ticks.iter().all(|tick| tick.emphasized == (tick.weight == TickWeight::Major)));

    assert_eq!(Graduation::Imperial.weight(4), TickWeight::Medium);
    assert_eq!(Graduation::Imperial.weight(2), TickWeight::Short);
    assert_eq!(Graduation::Imperial.weight(3), TickWeight::Minor);
}

#[test]
fn test_metric_graduation() {
    let graduation = Graduation::for_unit(Unit::Centimeter).unwrap();
    let row = layout_graduated(30.0, graduation, Edge::Far, 0.75);

    assert_eq!(row.ticks.len(), 299);
    let majors = row
        .ticks
        .iter()
        .filter(|tick| tick.weight == TickWeight::Major)
        .count();
    assert_eq!(majors, 29);
    assert_eq!(graduation.weight(5), TickWeight::Medium);
    assert_eq!(graduation.weight(7), TickWeight::Minor);
}

#[test]
fn test_point_has_no_graduation() {
    assert!(matches!(
        Graduation::for_unit(Unit::Point),
        Err(JigError::InvalidUnit(_))
    ));
}
