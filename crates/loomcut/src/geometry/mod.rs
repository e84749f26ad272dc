use kurbo::{BezPath, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

use crate::error::LoomError;

pub mod ids;
pub mod primitives;

pub use ids::ShapeId;

/// A point in sheet space. Origin is the top-left corner of the sheet and one
/// unit is 1/80 of an inch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A mirroring sign, restricted to exactly +1 or -1.
///
/// Every directional primitive takes a `Dir` so the same formula draws a
/// feature on either side of a shape. Construction through [`Dir::new`] is
/// the single place an out-of-range sign is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dir(i8);

impl Dir {
    pub const POS: Dir = Dir(1);
    pub const NEG: Dir = Dir(-1);

    /// Validate a raw sign. Anything other than +1 or -1 has no defined
    /// mirroring and is rejected.
    pub fn new(sign: i8) -> Result<Self, LoomError> {
        match sign {
            1 => Ok(Dir::POS),
            -1 => Ok(Dir::NEG),
            value => Err(LoomError::InvalidDirection { value }),
        }
    }

    /// Scale a displacement by this sign.
    pub fn apply(self, value: f64) -> f64 {
        f64::from(self.0) * value
    }

    /// The opposite sign.
    pub fn flip(self) -> Dir {
        Dir(-self.0)
    }

    pub fn sign(self) -> i8 {
        self.0
    }
}

/// SVG arc sweep flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sweep {
    /// Sweep flag 1: the arc turns in the positive-angle direction.
    Positive,
    /// Sweep flag 0.
    Negative,
}

impl Sweep {
    fn flag(self) -> u8 {
        match self {
            Sweep::Positive => 1,
            Sweep::Negative => 0,
        }
    }
}

/// One segment of a path. All displacements are relative to the current pen
/// position except `MoveTo`, which is absolute and only valid as the first
/// segment of a description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Absolute initial move.
    MoveTo { x: f64, y: f64 },
    /// Relative straight line.
    LineTo { dx: f64, dy: f64 },
    /// Relative circular arc (rx = ry always, no x-axis rotation).
    ArcTo {
        radius: f64,
        large_arc: bool,
        sweep: Sweep,
        dx: f64,
        dy: f64,
    },
    /// Relative pen-up displacement. Used for breakaway gaps: the cut line
    /// skips over the gap so the piece stays attached to the scrap sheet.
    MoveBy { dx: f64, dy: f64 },
    /// Close the current subpath with a straight line back to its start.
    Close,
}

impl PathSegment {
    fn write_svg(&self, out: &mut String) {
        match *self {
            PathSegment::MoveTo { x, y } => {
                out.push_str(&format!("M{} {}", x, y));
            }
            PathSegment::LineTo { dx, dy } => {
                out.push_str(&format!("l{} {}", dx, dy));
            }
            PathSegment::ArcTo {
                radius,
                large_arc,
                sweep,
                dx,
                dy,
            } => {
                out.push_str(&format!(
                    "a{} {} 0 {} {} {} {}",
                    radius,
                    radius,
                    u8::from(large_arc),
                    sweep.flag(),
                    dx,
                    dy
                ));
            }
            PathSegment::MoveBy { dx, dy } => {
                out.push_str(&format!("m{} {}", dx, dy));
            }
            PathSegment::Close => out.push('z'),
        }
    }
}

/// An ordered sequence of segments forming one drawable outline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathDescription {
    segments: Vec<PathSegment>,
}

impl PathDescription {
    /// Start a description at an absolute point.
    pub fn begin_at(start: Point) -> Self {
        Self {
            segments: vec![PathSegment::MoveTo {
                x: start.x,
                y: start.y,
            }],
        }
    }

    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    pub fn extend<I: IntoIterator<Item = PathSegment>>(&mut self, segments: I) {
        self.segments.extend(segments);
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Whether the description ends by closing its outline.
    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Close))
    }

    /// Serialize into an SVG path `d` attribute.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            segment.write_svg(&mut out);
        }
        out
    }

    /// Realize the description as a kurbo Bézier path (arcs become cubics).
    pub fn to_bezpath(&self) -> Result<BezPath, LoomError> {
        BezPath::from_svg(&self.to_svg()).map_err(|err| LoomError::MalformedPath {
            detail: err.to_string(),
        })
    }

    /// Measured bounding box of the realized geometry.
    pub fn bounding_box(&self) -> Result<Rect, LoomError> {
        Ok(self.to_bezpath()?.bounding_box())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_validation() {
        assert_eq!(Dir::new(1), Ok(Dir::POS));
        assert_eq!(Dir::new(-1), Ok(Dir::NEG));
        assert_eq!(
            Dir::new(0),
            Err(LoomError::InvalidDirection { value: 0 })
        );
        assert_eq!(
            Dir::new(2),
            Err(LoomError::InvalidDirection { value: 2 })
        );
    }

    #[test]
    fn test_dir_apply_and_flip() {
        assert_eq!(Dir::POS.apply(7.0), 7.0);
        assert_eq!(Dir::NEG.apply(7.0), -7.0);
        assert_eq!(Dir::POS.flip(), Dir::NEG);
    }

    #[test]
    fn test_svg_serialization() {
        let mut path = PathDescription::begin_at(Point::new(0.0, 20.0));
        path.push(PathSegment::LineTo { dx: 15.0, dy: -1.0 });
        path.push(PathSegment::ArcTo {
            radius: 3.0,
            large_arc: true,
            sweep: Sweep::Negative,
            dx: 0.0,
            dy: -2.0,
        });
        path.push(PathSegment::Close);
        assert_eq!(path.to_svg(), "M0 20 l15 -1 a3 3 0 1 0 0 -2 z");
    }

    #[test]
    fn test_bounding_box_of_rectangle_outline() {
        let mut path = PathDescription::begin_at(Point::new(10.0, 10.0));
        path.push(PathSegment::LineTo { dx: 30.0, dy: 0.0 });
        path.push(PathSegment::LineTo { dx: 0.0, dy: 20.0 });
        path.push(PathSegment::LineTo { dx: -30.0, dy: 0.0 });
        path.push(PathSegment::Close);
        let bbox = path.bounding_box().expect("measure");
        assert_eq!(bbox.width(), 30.0);
        assert_eq!(bbox.height(), 20.0);
    }

    #[test]
    fn test_breakaway_gap_is_not_drawn() {
        // A gap splits the outline into two subpaths but leaves the
        // bounding box of the drawn geometry unchanged.
        let mut path = PathDescription::begin_at(Point::new(0.0, 0.0));
        path.push(PathSegment::LineTo { dx: 0.0, dy: 10.0 });
        path.push(PathSegment::MoveBy { dx: 0.0, dy: 1.0 });
        path.push(PathSegment::LineTo { dx: 0.0, dy: 10.0 });
        let bbox = path.bounding_box().expect("measure");
        assert_eq!(bbox.height(), 21.0);
        assert_eq!(bbox.width(), 0.0);
    }

    #[test]
    fn test_is_closed() {
        let mut path = PathDescription::begin_at(Point::new(0.0, 0.0));
        path.push(PathSegment::LineTo { dx: 5.0, dy: 0.0 });
        assert!(!path.is_closed());
        path.push(PathSegment::Close);
        assert!(path.is_closed());
    }
}
