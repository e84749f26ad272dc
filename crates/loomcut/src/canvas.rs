//! The render sink: an explicit canvas object holding every drawn node.
//!
//! The core composers never touch this directly; they return path
//! descriptions and the canvas draws them, measures them, and keeps the node
//! list that the exporter serializes.

use kurbo::{BezPath, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::LoomError;
use crate::geometry::ShapeId;
use crate::layout::SHEET_UNITS_PER_INCH;
use crate::template::{Rectangle, Template, TextLabel};
use crate::verify::report_outer_frame;

/// Fixed margin added to the physical sheet size, in inches.
pub const PHYSICAL_MARGIN_IN: f64 = 0.1;

/// Stylesheet kept across clears; everything drawn is stroked, not filled.
const DEFAULT_STYLE: &str =
    "path, rect { fill: none; stroke: black; stroke-width: 1; } \
     text { text-anchor: middle; font-size: 16px; }";

/// One node on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CanvasNode {
    /// Persistent stylesheet; survives [`Canvas::clear`].
    Style { css: String },
    /// Annotation emitted beside a drawn shape.
    Comment { text: String },
    /// A drawn path, kept as its serialized `d` data.
    Path { id: ShapeId, d: String },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        stroke: String,
    },
    Text {
        id: String,
        x: f64,
        y: f64,
        content: String,
    },
}

impl CanvasNode {
    fn is_persistent(&self) -> bool {
        matches!(self, CanvasNode::Style { .. })
    }
}

/// An in-memory drawing surface with sheet dimensions in sheet units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Canvas {
    nodes: Vec<CanvasNode>,
    width: f64,
    height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            nodes: vec![CanvasNode::Style {
                css: DEFAULT_STYLE.to_string(),
            }],
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn nodes(&self) -> &[CanvasNode] {
        &self.nodes
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Physical sheet width in inches, including the fixed margin.
    pub fn physical_width_in(&self) -> f64 {
        self.width / SHEET_UNITS_PER_INCH + PHYSICAL_MARGIN_IN
    }

    /// Physical sheet height in inches, including the fixed margin.
    pub fn physical_height_in(&self) -> f64 {
        self.height / SHEET_UNITS_PER_INCH + PHYSICAL_MARGIN_IN
    }

    /// Number of drawable (non-persistent) nodes.
    pub fn drawable_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.is_persistent()).count()
    }

    /// Set the sheet dimensions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Append an annotation node.
    pub fn comment(&mut self, text: impl Into<String>) {
        self.nodes.push(CanvasNode::Comment { text: text.into() });
    }

    /// Draw a shape's path and return the realized bounding-box width of the
    /// node as drawn, measured from its own `d` data rather than from any
    /// layout prediction.
    pub fn draw_path(&mut self, shape: &crate::template::Shape) -> Result<f64, LoomError> {
        let d = shape.path.to_svg();
        let realized = BezPath::from_svg(&d)
            .map_err(|err| LoomError::MalformedPath {
                detail: err.to_string(),
            })?
            .bounding_box()
            .width();
        self.nodes.push(CanvasNode::Path { id: shape.id, d });
        Ok(realized)
    }

    pub fn draw_rect(&mut self, rect: &Rectangle) {
        self.nodes.push(CanvasNode::Rect {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            stroke: rect.stroke.clone(),
        });
    }

    pub fn draw_text(&mut self, label: &TextLabel) {
        self.nodes.push(CanvasNode::Text {
            id: label.id.clone(),
            x: label.anchor.x,
            y: label.anchor.y,
            content: label.content.clone(),
        });
    }

    /// Replace the content of a drawn text node in place. Geometry nodes are
    /// untouched; no rebuild happens.
    pub fn set_label_text(&mut self, id: &str, content: &str) -> Result<(), LoomError> {
        for node in &mut self.nodes {
            if let CanvasNode::Text {
                id: node_id,
                content: node_content,
                ..
            } = node
            {
                if node_id == id {
                    *node_content = content.to_string();
                    return Ok(());
                }
            }
        }
        Err(LoomError::UnknownLabel { id: id.to_string() })
    }

    /// Current content of a drawn text node.
    pub fn label_text(&self, id: &str) -> Option<&str> {
        self.nodes.iter().find_map(|node| match node {
            CanvasNode::Text {
                id: node_id,
                content,
                ..
            } if node_id == id => Some(content.as_str()),
            _ => None,
        })
    }

    /// Remove every drawable node, keeping persistent style nodes. Returns
    /// the number removed, or `ResidualNodesAfterClear` if any drawable node
    /// survives the sweep.
    pub fn clear(&mut self) -> Result<usize, LoomError> {
        let before = self.drawable_count();
        debug!(removing = before, "clearing canvas");
        self.nodes.retain(CanvasNode::is_persistent);
        let remaining = self.drawable_count();
        if remaining > 0 {
            return Err(LoomError::ResidualNodesAfterClear { remaining });
        }
        Ok(before)
    }

    /// Full clear-and-rebuild render of a template. Draws every shape,
    /// rectangle, and label, then checks the outer frame's realized width
    /// against the layout prediction. Returns the realized width.
    pub fn render_template(&mut self, template: &Template) -> Result<f64, LoomError> {
        if let Err(err) = self.clear() {
            // Postcondition failure in the sink, not in the template; keep
            // rendering so the drawing stays inspectable.
            error!(%err, "canvas clear left residual nodes");
        }
        self.resize(template.params.width, template.params.height);

        let mut outer_width = 0.0;
        for (index, shape) in template.shapes.iter().enumerate() {
            self.comment(shape.label.clone());
            let realized = self.draw_path(shape)?;
            if index == 0 {
                outer_width = realized;
            }
        }
        for rect in &template.rectangles {
            self.draw_rect(rect);
        }
        for label in &template.labels {
            self.draw_text(label);
        }

        report_outer_frame(&template.params, outer_width);
        Ok(outer_width)
    }
}
