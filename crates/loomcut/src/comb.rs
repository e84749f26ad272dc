//! Comb composer: a rounded cap, a column of slotted teeth, and a closing
//! vertical spine.

use crate::error::LoomError;
use crate::geometry::primitives::{quarter_arc, straight_run, tooth_slot, Axis};
use crate::geometry::{Dir, PathDescription, PathSegment, Point, Sweep};
use crate::template::{Shape, BREAKAWAY};

pub const COMB_LABEL: &str = "Comb";

/// Straight length of one comb tooth.
pub const COMB_TOOTH_LENGTH: f64 = 60.0;
/// Radius of the connector arc between adjacent teeth.
const SLOT_CONNECTOR_RADIUS: f64 = 5.0;

/// Height of a comb body for a given tooth count: each tooth advances one
/// slot width plus one connector, minus the final connector.
pub fn comb_height(tooth_count: i32) -> f64 {
    tooth_count as f64 * 20.0 - 10.0
}

/// Compose the comb. The cap arc is followed by a breakaway gap, then
/// `tooth_count` teeth joined by concave connector arcs, a second breakaway,
/// and the spine running back up to the start.
pub fn comb(origin: Point, tooth_count: i32, radius: f64) -> Result<Shape, LoomError> {
    if tooth_count < 1 {
        return Err(LoomError::InvalidToothCount { value: tooth_count });
    }
    let height = comb_height(tooth_count);

    let mut path = PathDescription::begin_at(Point::new(origin.x, origin.y + radius));
    path.push(quarter_arc(radius, Dir::POS, Dir::NEG, Sweep::Positive));
    path.push(PathSegment::MoveBy {
        dx: BREAKAWAY,
        dy: 0.0,
    });
    for i in 0..tooth_count {
        path.extend(tooth_slot(COMB_TOOTH_LENGTH));
        if i + 1 < tooth_count {
            path.push(PathSegment::ArcTo {
                radius: SLOT_CONNECTOR_RADIUS,
                large_arc: false,
                sweep: Sweep::Negative,
                dx: 0.0,
                dy: SLOT_CONNECTOR_RADIUS * 2.0,
            });
        }
    }
    path.push(PathSegment::MoveBy {
        dx: -BREAKAWAY,
        dy: 0.0,
    });
    path.push(quarter_arc(radius, Dir::NEG, Dir::NEG, Sweep::Positive));
    path.push(straight_run(Axis::Y, height - radius * 2.0, Dir::NEG));

    Ok(Shape::new(COMB_LABEL, path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comb_rejects_zero_teeth() {
        assert_eq!(
            comb(Point::new(100.0, 150.0), 0, 30.0).unwrap_err(),
            LoomError::InvalidToothCount { value: 0 }
        );
    }

    #[test]
    fn test_comb_height_formula() {
        assert_eq!(comb_height(13), 250.0);
        assert_eq!(comb_height(1), 10.0);
    }

    #[test]
    fn test_comb_outline_returns_to_start() {
        let shape = comb(Point::new(100.0, 150.0), 13, 30.0).expect("compose");
        let (dx, dy) = shape.path.segments().iter().fold((0.0, 0.0), |(x, y), s| {
            match *s {
                PathSegment::LineTo { dx, dy }
                | PathSegment::ArcTo { dx, dy, .. }
                | PathSegment::MoveBy { dx, dy } => (x + dx, y + dy),
                _ => (x, y),
            }
        });
        assert!(dx.abs() < 1e-9 && dy.abs() < 1e-9, "net ({}, {})", dx, dy);
    }

    #[test]
    fn test_comb_tooth_reach() {
        let shape = comb(Point::new(0.0, 0.0), 5, 30.0).expect("compose");
        let bbox = shape.path.bounding_box().expect("measure");
        // Spine plus cap radius plus tooth length, each tooth reaching 55
        // units past the breakaway before its turn.
        assert!(bbox.width() > COMB_TOOTH_LENGTH, "width {}", bbox.width());
    }
}
