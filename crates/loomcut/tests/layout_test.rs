use loomcut::*;

#[test]
fn test_width_and_height_formulas() {
    for teeth in 1..=32 {
        let template = compute_layout(teeth).expect("layout");
        assert_eq!(template.params.width, teeth as f64 * 15.0 + 40.0);
        assert_eq!(template.params.height, 2.0 * template.params.width);
    }
}

#[test]
fn test_sixteen_tooth_loom_is_280_by_560() {
    let template = compute_layout(16).expect("layout");
    assert_eq!(template.params.width, 280.0);
    assert_eq!(template.params.height, 560.0);
    assert_eq!(template.params.physical_width_in(), 3.5);
}

#[test]
fn test_zero_and_negative_counts_rejected() {
    assert_eq!(
        compute_layout(0).unwrap_err(),
        LoomError::InvalidToothCount { value: 0 }
    );
    assert_eq!(
        compute_layout(-5).unwrap_err(),
        LoomError::InvalidToothCount { value: -5 }
    );
}

#[test]
fn test_layout_idempotence() {
    let first = compute_layout(16).expect("layout");
    let second = compute_layout(16).expect("layout");
    let first_d: Vec<String> = first.shapes.iter().map(|s| s.path.to_svg()).collect();
    let second_d: Vec<String> = second.shapes.iter().map(|s| s.path.to_svg()).collect();
    assert_eq!(first_d, second_d, "identical inputs yield identical paths");
}

#[test]
fn test_anchor_positions_follow_width() {
    let template = compute_layout(20).expect("layout");
    let width = template.params.width;
    let height = template.params.height;

    let border = &template.rectangles[0];
    assert_eq!((border.x, border.y), (20.0, 50.0));
    assert_eq!(border.width, width - 40.0);
    assert_eq!(border.height, height - 100.0);
    assert_eq!(border.stroke, "red");

    let slot = &template.rectangles[1];
    assert_eq!((slot.x, slot.y), (55.0, height - 100.0));
    assert_eq!((slot.width, slot.height), (width - 120.0, 14.0));

    let top_label = template.label("text1").expect("text1");
    assert_eq!(top_label.anchor, Point::new(width / 2.0, 30.0));
    let bottom_label = template.label("text2").expect("text2");
    assert_eq!(bottom_label.anchor, Point::new(width / 2.0, height - 30.0));
}

#[test]
fn test_realized_outer_frame_width_matches_prediction() {
    // The verifier's scenario: a 12-tooth frame must measure 220 regardless
    // of the height it is drawn at.
    let shape = outer_frame(Point::new(0.0, 0.0), 12, 400.0).expect("compose");
    let measured = shape.path.bounding_box().expect("measure").width();
    assert!(
        verify_width(220.0, measured).is_ok(),
        "measured {} expected 220",
        measured
    );
}

#[test]
fn test_dimension_mismatch_reports_expected_width() {
    let err = verify_width(220.0, 235.0).unwrap_err();
    match err {
        LoomError::DimensionMismatch { expected, actual } => {
            assert_eq!(expected, 220.0);
            assert_eq!(actual, 235.0);
        }
        other => panic!("expected DimensionMismatch, got {:?}", other),
    }
}

#[test]
fn test_small_count_warns_but_builds() {
    // Below the structural minimum the layout still succeeds.
    let template = compute_layout(STRUCTURAL_MINIMUM_TEETH - 1).expect("layout");
    assert_eq!(template.params.tooth_count, 7);
}

#[test]
fn test_comb_is_fixed_size_across_presets() {
    for preset in [SizePreset::Small, SizePreset::Medium, SizePreset::Large] {
        let template = compute_layout(preset.tooth_count()).expect("layout");
        let comb_shape = template
            .shapes
            .iter()
            .find(|s| s.label == COMB_LABEL)
            .expect("comb present");
        let bbox = comb_shape.path.bounding_box().expect("measure");
        let expected_height = comb_height(COMB_TOOTH_COUNT);
        assert!(
            (bbox.height() - expected_height).abs() < 1.0,
            "comb height {} for {:?}",
            bbox.height(),
            preset
        );
    }
}
