use loomcut::*;

fn displacements(segments: &[PathSegment]) -> Vec<(f64, f64)> {
    segments
        .iter()
        .map(|segment| match *segment {
            PathSegment::LineTo { dx, dy }
            | PathSegment::ArcTo { dx, dy, .. }
            | PathSegment::MoveBy { dx, dy } => (dx, dy),
            PathSegment::MoveTo { .. } | PathSegment::Close => (0.0, 0.0),
        })
        .collect()
}

#[test]
fn test_direction_sign_is_validated() {
    assert!(Dir::new(1).is_ok());
    assert!(Dir::new(-1).is_ok());
    for bad in [0i8, 2, -2, 100] {
        assert_eq!(
            Dir::new(bad).unwrap_err(),
            LoomError::InvalidDirection { value: bad },
            "sign {} must be rejected",
            bad
        );
    }
}

#[test]
fn test_rounded_notch_mirror_property() {
    let pos = rounded_notch(Dir::POS);
    let neg = rounded_notch(Dir::NEG);
    assert_eq!(pos.len(), neg.len(), "mirrored notches keep segment count");

    let pos_d = displacements(&pos);
    let neg_d = displacements(&neg);
    for ((pdx, pdy), (ndx, ndy)) in pos_d.iter().zip(neg_d.iter()) {
        assert_eq!(*pdx, -*ndx, "x displacements negate under mirroring");
        assert_eq!(*pdy, -*ndy, "y displacements negate under mirroring");
    }
}

#[test]
fn test_lock_tab_mirror_property() {
    let pos = lock_tab(Dir::POS);
    let neg = lock_tab(Dir::NEG);
    assert_eq!(pos.len(), neg.len());
    for ((pdx, pdy), (ndx, ndy)) in displacements(&pos).iter().zip(displacements(&neg).iter()) {
        assert_eq!(*pdx, -*ndx);
        assert_eq!(*pdy, -*ndy);
    }
}

#[test]
fn test_notch_pitch_matches_width_formula_constant() {
    // The sheet-width formula counts this derived pitch; it must agree with
    // the notch geometry itself.
    assert_eq!(notch_pitch(), 15.0);
}

#[test]
fn test_notch_advances_exactly_one_pitch() {
    let (dx, dy) = displacements(&rounded_notch(Dir::POS))
        .iter()
        .fold((0.0, 0.0), |(x, y), (dx, dy)| (x + dx, y + dy));
    assert_eq!(dx, notch_pitch());
    assert_eq!(dy, 0.0, "a notch returns to its edge");
}

#[test]
fn test_outer_frame_single_tooth_is_closed() {
    let shape = outer_frame(Point::new(0.0, 0.0), 1, 110.0).expect("compose");
    assert!(shape.path.is_closed());
    let bbox = shape.path.bounding_box().expect("measure");
    assert!(
        (bbox.width() - 55.0).abs() < 1e-9,
        "one tooth spans pitch + both corners, got {}",
        bbox.width()
    );
}

#[test]
fn test_path_description_round_trips_through_svg() {
    let shape = outer_frame(Point::new(0.0, 0.0), 4, 200.0).expect("compose");
    let d = shape.path.to_svg();
    // The d-string must be parseable back into realized geometry.
    let bez = shape.path.to_bezpath().expect("realize");
    assert!(!bez.elements().is_empty());
    assert!(d.starts_with("M0 20"));
    assert!(d.ends_with('z'));
}
