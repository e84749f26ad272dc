//! Dimension verifier: compares the outer frame's realized bounding-box
//! width against the width the layout formula predicted. A mismatch is a
//! geometry-author self-check, not a user-facing failure.

use tracing::{info, warn};

use crate::error::LoomError;
use crate::layout::LayoutParameters;

/// Float comparison slack; the construction is exact in f64 but measured
/// widths pass through an arc-to-cubic conversion.
const WIDTH_TOLERANCE: f64 = 1e-6;

/// Check a realized width against the predicted one.
pub fn verify_width(expected: f64, actual: f64) -> Result<(), LoomError> {
    if (expected - actual).abs() <= WIDTH_TOLERANCE {
        Ok(())
    } else {
        Err(LoomError::DimensionMismatch { expected, actual })
    }
}

/// Run the check for a rendered outer frame and log the outcome. Mismatches
/// are logged at warn level and rendering proceeds.
pub fn report_outer_frame(params: &LayoutParameters, realized_width: f64) {
    match verify_width(params.width, realized_width) {
        Ok(()) => info!(
            width = params.width,
            inches = params.physical_width_in(),
            "outer frame width verified"
        ),
        Err(err) => warn!(%err, "outer frame width check failed"),
    }
}
