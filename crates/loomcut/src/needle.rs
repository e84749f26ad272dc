//! Needle composer: a tapered open outline plus the small oval eye accent
//! offset from the needle origin.

use crate::geometry::primitives::{straight_run, Axis};
use crate::geometry::{Dir, PathDescription, PathSegment, Point, Sweep};
use crate::template::{Shape, BREAKAWAY};

pub const NEEDLE_LABEL: &str = "Needle";
pub const NEEDLE_EYE_LABEL: &str = "Needle eye";

/// Offset of the eye accent from the needle origin.
const EYE_OFFSET: Point = Point { x: 6.0, y: 4.0 };
/// Straight length of the eye slot.
const EYE_LENGTH: f64 = 20.0;

/// Compose one needle. The outline tapers from a top cap of radius `r1` to a
/// bottom cap of radius `r2`, the diagonal runs split 30%/70% of `height`
/// with a breakaway gap at the split. The realized width is `2 * r1`.
///
/// Returns the needle outline and its separate eye accent shape.
pub fn needle(origin: Point, height: f64, r1: f64, r2: f64) -> (Shape, Shape) {
    let taper = r1 - r2;

    let mut path = PathDescription::begin_at(origin);
    path.push(PathSegment::ArcTo {
        radius: r1,
        large_arc: false,
        sweep: Sweep::Positive,
        dx: r1 * 2.0,
        dy: 0.0,
    });
    path.push(PathSegment::LineTo {
        dx: -taper * 0.3,
        dy: height * 0.3 - BREAKAWAY,
    });
    path.push(PathSegment::MoveBy {
        dx: 0.0,
        dy: BREAKAWAY,
    });
    path.push(PathSegment::LineTo {
        dx: -taper * 0.7,
        dy: height * 0.7,
    });
    path.push(PathSegment::ArcTo {
        radius: r2,
        large_arc: false,
        sweep: Sweep::Positive,
        dx: -r2 * 2.0,
        dy: 0.0,
    });
    path.push(PathSegment::LineTo {
        dx: -taper * 0.3,
        dy: -(height * 0.3 - BREAKAWAY),
    });
    path.push(PathSegment::MoveBy {
        dx: 0.0,
        dy: -BREAKAWAY,
    });
    path.push(PathSegment::LineTo {
        dx: -taper * 0.7,
        dy: -(height * 0.7),
    });

    // Caps of the eye are half circles, drawn as one arc each.
    let mut eye = PathDescription::begin_at(Point::new(
        origin.x + EYE_OFFSET.x,
        origin.y + EYE_OFFSET.y,
    ));
    eye.push(PathSegment::ArcTo {
        radius: r2,
        large_arc: false,
        sweep: Sweep::Positive,
        dx: r2 * 2.0,
        dy: 0.0,
    });
    eye.push(straight_run(Axis::Y, EYE_LENGTH, Dir::POS));
    eye.push(PathSegment::ArcTo {
        radius: r2,
        large_arc: false,
        sweep: Sweep::Positive,
        dx: -r2 * 2.0,
        dy: 0.0,
    });
    eye.push(PathSegment::Close);

    (
        Shape::new(NEEDLE_LABEL, path),
        Shape::new(NEEDLE_EYE_LABEL, eye),
    )
}
