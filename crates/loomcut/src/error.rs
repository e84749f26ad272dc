use thiserror::Error;

/// Domain errors for template construction and canvas bookkeeping.
///
/// `InvalidDirection` and `InvalidToothCount` are input errors and abort the
/// build that raised them. `DimensionMismatch` and `ResidualNodesAfterClear`
/// are post-hoc consistency checks: callers log them and keep going, since
/// the drawing is still usable for inspection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoomError {
    #[error("invalid direction sign {value}, expected +1 or -1")]
    InvalidDirection { value: i8 },

    #[error("invalid tooth count {value}, expected a positive integer")]
    InvalidToothCount { value: i32 },

    #[error("dimension mismatch: expected width {expected}, measured {actual}")]
    DimensionMismatch { expected: f64, actual: f64 },

    #[error("{remaining} drawable node(s) left on the canvas after clear")]
    ResidualNodesAfterClear { remaining: usize },

    #[error("no text label with id {id:?} on the canvas")]
    UnknownLabel { id: String },

    #[error("path data failed to parse: {detail}")]
    MalformedPath { detail: String },
}
