//! The two frame composers: the toothed outer loom body and the inner prop
//! frame that holds the comb and needles upright.

use crate::error::LoomError;
use crate::geometry::primitives::{
    lock_tab, quarter_arc, rounded_notch, straight_run, Axis,
};
use crate::geometry::{Dir, PathDescription, PathSegment, Point, Sweep};
use crate::template::{Shape, BREAKAWAY};

/// Corner radius of the outer frame.
pub const FRAME_CORNER_RADIUS: f64 = 20.0;

pub const OUTER_FRAME_LABEL: &str =
    "The outer frame of the loom with teeth and locks for yarn";
pub const INNER_FRAME_LABEL: &str =
    "The inner frame, used to prop up the loom and to hold the needles and comb";

/// Compose the closed boundary of the loom sheet: a lock tab and rounded
/// corner at each end of both toothed edges, `tooth_count` notches per edge,
/// and a straight vertical run down the right side (the left side is drawn
/// by the closing segment).
pub fn outer_frame(origin: Point, tooth_count: i32, height: f64) -> Result<Shape, LoomError> {
    if tooth_count < 1 {
        return Err(LoomError::InvalidToothCount { value: tooth_count });
    }

    let r = FRAME_CORNER_RADIUS;
    let mut path = PathDescription::begin_at(Point::new(origin.x, origin.y + r));

    // Top edge, left to right.
    path.extend(lock_tab(Dir::POS));
    path.push(quarter_arc(r, Dir::POS, Dir::NEG, Sweep::Positive));
    for _ in 0..tooth_count {
        path.extend(rounded_notch(Dir::POS));
    }
    path.push(quarter_arc(r, Dir::POS, Dir::POS, Sweep::Positive));
    path.extend(lock_tab(Dir::NEG));

    // Right edge.
    path.push(straight_run(Axis::Y, height - 2.0 * r, Dir::POS));

    // Bottom edge, right to left, mirrored.
    path.extend(lock_tab(Dir::NEG));
    path.push(quarter_arc(r, Dir::NEG, Dir::POS, Sweep::Positive));
    for _ in 0..tooth_count {
        path.extend(rounded_notch(Dir::NEG));
    }
    path.push(quarter_arc(r, Dir::NEG, Dir::NEG, Sweep::Positive));
    path.extend(lock_tab(Dir::POS));

    // Closing segment draws the left edge back up to the start.
    path.push(PathSegment::Close);

    Ok(Shape::new(OUTER_FRAME_LABEL, path))
}

/// Compose the inner prop frame: an asymmetric rounded trapezoid profile
/// (each top corner uses two radii, the full radius and 2/3 of it) with both
/// vertical runs split by a breakaway gap at 30% of the height.
pub fn inner_frame(origin: Point, width: f64, height: f64, radius: f64) -> Shape {
    let radius2 = radius * 2.0 / 3.0;
    // Combined spans consumed by the corner arcs.
    let top_span = 2.0 * (radius + radius2);
    let bottom_span = 2.0 * radius;
    let lower_run = height * 0.7 - (2.0 * radius + radius2);

    let mut path =
        PathDescription::begin_at(Point::new(origin.x, origin.y + radius + radius2));

    path.push(quarter_arc(radius, Dir::POS, Dir::NEG, Sweep::Positive));
    path.push(quarter_arc(radius2, Dir::POS, Dir::NEG, Sweep::Positive));
    path.push(straight_run(Axis::X, width - top_span, Dir::POS));
    path.push(quarter_arc(radius2, Dir::POS, Dir::POS, Sweep::Positive));
    path.push(quarter_arc(radius, Dir::POS, Dir::POS, Sweep::Positive));

    path.push(straight_run(Axis::Y, height * 0.3 - BREAKAWAY, Dir::POS));
    path.push(PathSegment::MoveBy {
        dx: 0.0,
        dy: BREAKAWAY,
    });
    path.push(straight_run(Axis::Y, lower_run, Dir::POS));

    path.push(quarter_arc(radius, Dir::NEG, Dir::POS, Sweep::Positive));
    path.push(straight_run(Axis::X, width - bottom_span, Dir::NEG));
    path.push(quarter_arc(radius, Dir::NEG, Dir::NEG, Sweep::Positive));

    path.push(straight_run(Axis::Y, height * 0.3 - BREAKAWAY, Dir::NEG));
    path.push(PathSegment::MoveBy {
        dx: 0.0,
        dy: -BREAKAWAY,
    });
    path.push(straight_run(Axis::Y, lower_run, Dir::NEG));

    Shape::new(INNER_FRAME_LABEL, path)
}
