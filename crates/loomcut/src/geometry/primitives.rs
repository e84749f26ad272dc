//! Directional segment builders.
//!
//! Each builder is a pure function of its numeric parameters; the `Dir`
//! arguments mirror a feature across an axis so one formula serves both long
//! edges of a shape. All displacements are in sheet units (1/80 inch).

use crate::geometry::{Dir, PathSegment, Sweep};

/// Straight lead into and out of a notch bump.
const NOTCH_LEAD: f64 = 1.0;
/// Radius of the convex shoulders on either side of a notch.
const NOTCH_SHOULDER_RADIUS: f64 = 2.0;
/// Radius of the concave cup at the bottom of a notch.
const NOTCH_CUP_RADIUS: f64 = 4.5;
/// Depth of the straight walls of a notch.
const NOTCH_DEPTH: f64 = 7.0;
/// Horizontal reach of a lock tab's diagonal lead.
const LOCK_REACH: f64 = 15.0;
/// Radius of a lock tab's loop.
const LOCK_LOOP_RADIUS: f64 = 3.0;
/// Radius of the turn at the tip of a comb tooth.
const TOOTH_TURN_RADIUS: f64 = 5.0;

/// Principal axis for a straight run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// A straight line of `length * dir` along the given axis.
pub fn straight_run(axis: Axis, length: f64, dir: Dir) -> PathSegment {
    match axis {
        Axis::X => PathSegment::LineTo {
            dx: dir.apply(length),
            dy: 0.0,
        },
        Axis::Y => PathSegment::LineTo {
            dx: 0.0,
            dy: dir.apply(length),
        },
    }
}

/// A 90° circular turn with displacement `(radius * x_dir, radius * y_dir)`.
///
/// Frame corners need all four sign combinations, so the x and y signs are
/// independent; the sweep flag picks the convex or concave side of the turn.
pub fn quarter_arc(radius: f64, x_dir: Dir, y_dir: Dir, sweep: Sweep) -> PathSegment {
    PathSegment::ArcTo {
        radius,
        large_arc: false,
        sweep,
        dx: x_dir.apply(radius),
        dy: y_dir.apply(radius),
    }
}

/// One yarn-holding notch along a toothed edge: lead-in, convex shoulder,
/// straight wall down, concave cup, straight wall back up, convex shoulder,
/// lead-out. `dir = +1` draws along the top edge left-to-right; `dir = -1`
/// mirrors it for the bottom edge.
pub fn rounded_notch(dir: Dir) -> Vec<PathSegment> {
    vec![
        PathSegment::LineTo {
            dx: dir.apply(NOTCH_LEAD),
            dy: 0.0,
        },
        PathSegment::ArcTo {
            radius: NOTCH_SHOULDER_RADIUS,
            large_arc: false,
            sweep: Sweep::Positive,
            dx: dir.apply(NOTCH_SHOULDER_RADIUS),
            dy: dir.apply(NOTCH_SHOULDER_RADIUS),
        },
        PathSegment::LineTo {
            dx: 0.0,
            dy: dir.apply(NOTCH_DEPTH),
        },
        PathSegment::ArcTo {
            radius: NOTCH_CUP_RADIUS,
            large_arc: false,
            sweep: Sweep::Negative,
            dx: dir.apply(NOTCH_CUP_RADIUS * 2.0),
            dy: 0.0,
        },
        PathSegment::LineTo {
            dx: 0.0,
            dy: dir.apply(-NOTCH_DEPTH),
        },
        PathSegment::ArcTo {
            radius: NOTCH_SHOULDER_RADIUS,
            large_arc: false,
            sweep: Sweep::Positive,
            dx: dir.apply(NOTCH_SHOULDER_RADIUS),
            dy: dir.apply(-NOTCH_SHOULDER_RADIUS),
        },
        PathSegment::LineTo {
            dx: dir.apply(NOTCH_LEAD),
            dy: 0.0,
        },
    ]
}

/// Net advance of one notch along its edge, derived from the emitted
/// segments. The sheet-width formula counts this pitch, so it must come from
/// the primitive itself rather than a copied constant.
pub fn notch_pitch() -> f64 {
    rounded_notch(Dir::POS)
        .iter()
        .map(|segment| match *segment {
            PathSegment::LineTo { dx, .. } => dx,
            PathSegment::ArcTo { dx, .. } => dx,
            PathSegment::MoveTo { .. } | PathSegment::MoveBy { .. } | PathSegment::Close => 0.0,
        })
        .sum()
}

/// The yarn-lock tab found at each frame corner: a diagonal lead reaching
/// into the sheet, a near-full-circle loop, and a diagonal return. Net
/// displacement is `(0, -4 * dir)`.
pub fn lock_tab(dir: Dir) -> Vec<PathSegment> {
    vec![
        PathSegment::LineTo {
            dx: dir.apply(LOCK_REACH),
            dy: dir.apply(-1.0),
        },
        PathSegment::ArcTo {
            radius: LOCK_LOOP_RADIUS,
            large_arc: true,
            sweep: Sweep::Negative,
            dx: 0.0,
            dy: dir.apply(-2.0),
        },
        PathSegment::LineTo {
            dx: dir.apply(-LOCK_REACH),
            dy: dir.apply(-1.0),
        },
    ]
}

/// One comb tooth: a long run out, a small turn, and the return run, leaving
/// a narrow slot between this tooth and the next.
pub fn tooth_slot(length: f64) -> Vec<PathSegment> {
    let run = length - TOOTH_TURN_RADIUS;
    vec![
        PathSegment::LineTo { dx: run, dy: 0.0 },
        PathSegment::ArcTo {
            radius: TOOTH_TURN_RADIUS,
            large_arc: false,
            sweep: Sweep::Positive,
            dx: 0.0,
            dy: TOOTH_TURN_RADIUS * 2.0,
        },
        PathSegment::LineTo { dx: -run, dy: 0.0 },
    ]
}
