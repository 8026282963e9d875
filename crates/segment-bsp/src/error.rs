//! Error types for segment classification and tree construction.

use thiserror::Error;

/// Why a pair of lines could not be related.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateKind {
    /// The splitting line is vertical and has no slope-intercept equation.
    VerticalSplitter,
    /// The straddling segment is vertical, so no intersection can be solved for.
    VerticalSegment,
    /// The splitter and the straddling segment have the same slope.
    Parallel,
}

impl std::fmt::Display for DegenerateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegenerateKind::VerticalSplitter => write!(f, "splitting line is vertical"),
            DegenerateKind::VerticalSegment => write!(f, "straddling segment is vertical"),
            DegenerateKind::Parallel => write!(f, "lines are parallel"),
        }
    }
}

/// Errors produced while relating lines or building a tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BspError {
    /// A comparison kind that the approximate comparator does not support.
    #[error("invalid argument: unsupported comparison kind `{0}`")]
    InvalidArgument(String),
    /// The geometry cannot be classified or intersected.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(DegenerateKind),
    /// A splitter selector returned an index outside the candidate list.
    #[error("splitter index {index} out of range for {len} segments")]
    SplitterOutOfRange { index: usize, len: usize },
    /// The classification tolerance is negative, NaN or infinite.
    #[error("invalid epsilon {0}: must be finite and non-negative")]
    InvalidEpsilon(f64),
}
