mod canvas;
mod comb;
mod error;
mod export;
mod frame;
mod geometry;
mod import;
mod layout;
mod needle;
mod session;
mod template;
mod verify;

pub use canvas::{Canvas, CanvasNode, PHYSICAL_MARGIN_IN};
pub use comb::{comb, comb_height, COMB_LABEL, COMB_TOOTH_LENGTH};
pub use error::LoomError;
pub use export::{
    attribute_values, export_document, path_data_strings, FILE_NAME, MIME_TYPE, SVG_NS,
};
pub use frame::{
    inner_frame, outer_frame, FRAME_CORNER_RADIUS, INNER_FRAME_LABEL, OUTER_FRAME_LABEL,
};
pub use geometry::primitives::{
    lock_tab, notch_pitch, quarter_arc, rounded_notch, straight_run, tooth_slot, Axis,
};
pub use geometry::{Dir, PathDescription, PathSegment, Point, ShapeId, Sweep};
pub use import::reimport;
pub use layout::{
    compute_layout, LayoutParameters, SizePreset, COMB_TOOTH_COUNT, SHEET_UNITS_PER_INCH,
    STRUCTURAL_MINIMUM_TEETH,
};
pub use needle::{needle, NEEDLE_EYE_LABEL, NEEDLE_LABEL};
pub use session::{LoomSession, SessionState};
pub use template::{Rectangle, Shape, Template, TextLabel, BREAKAWAY};
pub use verify::{report_outer_frame, verify_width};
