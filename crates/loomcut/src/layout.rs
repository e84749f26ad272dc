//! Layout engine: derives sheet dimensions and every composer anchor from a
//! single tooth count.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::comb::comb;
use crate::error::LoomError;
use crate::frame::{inner_frame, outer_frame};
use crate::geometry::primitives::notch_pitch;
use crate::geometry::Point;
use crate::needle::needle;
use crate::template::{Rectangle, Template, TextLabel};

/// 80 sheet units make one inch.
pub const SHEET_UNITS_PER_INCH: f64 = 80.0;

/// The comb is always cut with this many teeth, independent of loom size.
pub const COMB_TOOTH_COUNT: i32 = 13;

/// Below this many teeth the frame still cuts, but the lock tabs crowd the
/// corners; flagged as a warning only.
pub const STRUCTURAL_MINIMUM_TEETH: i32 = 8;

/// Named size presets offered by the selection UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizePreset {
    Small,
    Medium,
    Large,
}

impl SizePreset {
    pub fn tooth_count(self) -> i32 {
        match self {
            SizePreset::Small => 12,
            SizePreset::Medium => 16,
            SizePreset::Large => 20,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "small" => Some(SizePreset::Small),
            "medium" => Some(SizePreset::Medium),
            "large" => Some(SizePreset::Large),
            _ => None,
        }
    }
}

/// Sheet dimensions for a tooth count. Width counts the notch pitch across
/// both toothed edges plus the two corner radii; height is twice the width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParameters {
    pub tooth_count: i32,
    pub width: f64,
    pub height: f64,
}

impl LayoutParameters {
    pub fn for_tooth_count(tooth_count: i32) -> Result<Self, LoomError> {
        if tooth_count < 1 {
            return Err(LoomError::InvalidToothCount { value: tooth_count });
        }
        let width = tooth_count as f64 * notch_pitch() + 40.0;
        Ok(Self {
            tooth_count,
            width,
            height: width * 2.0,
        })
    }

    /// Sheet width in inches at the fixed physical scale.
    pub fn physical_width_in(&self) -> f64 {
        self.width / SHEET_UNITS_PER_INCH
    }
}

/// Compute a full template from one tooth count. Pure: validates, derives
/// dimensions and anchors, and composes every shape; nothing is drawn here.
pub fn compute_layout(tooth_count: i32) -> Result<Template, LoomError> {
    let params = LayoutParameters::for_tooth_count(tooth_count)?;
    if tooth_count < STRUCTURAL_MINIMUM_TEETH {
        warn!(
            tooth_count,
            minimum = STRUCTURAL_MINIMUM_TEETH,
            "tooth count below the structural minimum; frame corners will crowd"
        );
    }

    let width = params.width;
    let height = params.height;

    let mut shapes = Vec::new();
    shapes.push(outer_frame(Point::new(0.0, 0.0), tooth_count, height)?);
    shapes.push(inner_frame(
        Point::new(30.0, 70.0),
        width - 60.0,
        height - 190.0,
        30.0,
    ));

    let needle_height = height / 2.0 - 35.0;
    for x in [50.0, width - 60.0] {
        let (body, eye) = needle(Point::new(x, 130.0), needle_height, 10.0, 4.0);
        shapes.push(body);
        shapes.push(eye);
    }

    shapes.push(comb(Point::new(100.0, 150.0), COMB_TOOTH_COUNT, 30.0)?);

    let rectangles = vec![
        // Decorative border.
        Rectangle::new(20.0, 50.0, width - 40.0, height - 100.0, "red"),
        // Slot for the stand.
        Rectangle::new(55.0, height - 100.0, width - 120.0, 14.0, "black"),
    ];

    let labels = vec![
        TextLabel::new("text1", Point::new(width / 2.0, 30.0)),
        TextLabel::new("text2", Point::new(width / 2.0, height - 30.0)),
    ];

    Ok(Template {
        params,
        shapes,
        rectangles,
        labels,
    })
}
