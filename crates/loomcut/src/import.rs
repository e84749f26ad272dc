//! Re-import of exported documents, used to validate that an export loads as
//! a well-formed vector document with the expected drawable geometry.

use anyhow::{anyhow, Result};
use kurbo::BezPath;
use tiny_skia_path::Transform;

/// Parse a serialized SVG document and return every drawable path as a
/// high-fidelity kurbo Bézier path.
///
/// Coordinates come back in the parser's normalized pixel space (the root's
/// physical size and viewBox are folded into each path's transform), so
/// shapes keep their proportions but not raw sheet units.
pub fn reimport(data: &[u8]) -> Result<Vec<BezPath>> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(data, &opt)
        .map_err(|err| anyhow!("failed to parse exported document: {}", err))?;

    let mut paths = Vec::new();
    collect_group(tree.root(), &mut paths);
    Ok(paths)
}

/// Recursively collect paths from a usvg group, converting each to kurbo.
fn collect_group(group: &usvg::Group, paths: &mut Vec<BezPath>) {
    for node in group.children() {
        match node {
            usvg::Node::Group(g) => collect_group(g, paths),
            usvg::Node::Path(path) => {
                if !path.is_visible() {
                    continue;
                }
                let bezpath = convert_tiny_skia_to_kurbo(path.data(), path.abs_transform());
                if !bezpath.elements().is_empty() {
                    paths.push(bezpath);
                }
            }
            usvg::Node::Image(_) => {
                // Raster content never appears in a loom template.
            }
            usvg::Node::Text(_) => {
                // Label text carries no cut geometry.
            }
        }
    }
}

fn map_point(ts: Transform, x: f32, y: f32) -> kurbo::Point {
    kurbo::Point::new(
        f64::from(ts.sx * x + ts.kx * y + ts.tx),
        f64::from(ts.ky * x + ts.sy * y + ts.ty),
    )
}

/// Convert a tiny_skia_path to kurbo, preserving curves as curves and
/// applying the node's absolute transform.
fn convert_tiny_skia_to_kurbo(path: &tiny_skia_path::Path, ts: Transform) -> BezPath {
    let mut bezpath = BezPath::new();

    for segment in path.segments() {
        match segment {
            tiny_skia_path::PathSegment::MoveTo(p) => {
                bezpath.move_to(map_point(ts, p.x, p.y));
            }
            tiny_skia_path::PathSegment::LineTo(p) => {
                bezpath.line_to(map_point(ts, p.x, p.y));
            }
            tiny_skia_path::PathSegment::QuadTo(p1, p2) => {
                bezpath.quad_to(map_point(ts, p1.x, p1.y), map_point(ts, p2.x, p2.y));
            }
            tiny_skia_path::PathSegment::CubicTo(p1, p2, p3) => {
                bezpath.curve_to(
                    map_point(ts, p1.x, p1.y),
                    map_point(ts, p2.x, p2.y),
                    map_point(ts, p3.x, p3.y),
                );
            }
            tiny_skia_path::PathSegment::Close => {
                bezpath.close_path();
            }
        }
    }

    bezpath
}
