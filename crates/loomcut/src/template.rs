use serde::{Deserialize, Serialize};

use crate::geometry::{PathDescription, Point, ShapeId};

/// Deliberate 1-unit unscored gap in an otherwise continuous cut line, so a
/// piece stays attached to the scrap sheet until manually snapped free.
pub const BREAKAWAY: f64 = 1.0;

/// A named path produced by a shape composer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    /// Unique identifier for this shape.
    pub id: ShapeId,
    /// Human-readable description, emitted as an annotation next to the
    /// drawn path.
    pub label: String,
    /// The outline itself.
    pub path: PathDescription,
}

impl Shape {
    pub fn new(label: impl Into<String>, path: PathDescription) -> Self {
        Self {
            id: ShapeId::new(),
            label: label.into(),
            path,
        }
    }
}

/// An axis-aligned flat rectangle, decorative or functional (the stand slot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stroke: String,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64, stroke: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            stroke: stroke.into(),
        }
    }
}

/// A positioned text baseline. Content is supplied externally; the layout
/// engine only places the anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub id: String,
    pub anchor: Point,
    pub content: String,
}

impl TextLabel {
    pub fn new(id: impl Into<String>, anchor: Point) -> Self {
        Self {
            id: id.into(),
            anchor,
            content: String::new(),
        }
    }
}

/// A complete loom template: every shape, rectangle, and label for one sheet,
/// fully determined by the layout parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub params: crate::layout::LayoutParameters,
    pub shapes: Vec<Shape>,
    pub rectangles: Vec<Rectangle>,
    pub labels: Vec<TextLabel>,
}

impl Template {
    /// The outer frame is always composed first.
    pub fn outer_frame(&self) -> Option<&Shape> {
        self.shapes.first()
    }

    pub fn label(&self, id: &str) -> Option<&TextLabel> {
        self.labels.iter().find(|label| label.id == id)
    }

    pub fn label_mut(&mut self, id: &str) -> Option<&mut TextLabel> {
        self.labels.iter_mut().find(|label| label.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PathSegment;

    #[test]
    fn test_shape_construction() {
        let mut path = PathDescription::begin_at(Point::new(0.0, 0.0));
        path.push(PathSegment::LineTo { dx: 10.0, dy: 0.0 });
        let shape = Shape::new("test outline", path);
        assert_eq!(shape.label, "test outline");
        assert_eq!(shape.path.segments().len(), 2);
    }

    #[test]
    fn test_text_label_starts_empty() {
        let label = TextLabel::new("text1", Point::new(140.0, 30.0));
        assert_eq!(label.content, "");
        assert_eq!(label.anchor, Point::new(140.0, 30.0));
    }

    #[test]
    fn test_rectangle_serialization() {
        let rect = Rectangle::new(20.0, 50.0, 240.0, 460.0, "red");
        let serialized = serde_json::to_string(&rect).expect("serialize");
        let deserialized: Rectangle = serde_json::from_str(&serialized).expect("deserialize");
        assert_eq!(rect, deserialized);
    }
}
