//! Splitter selection strategies for BSP tree construction.
//!
//! The choice of splitting line determines the shape of the tree and the
//! number of segment splits during construction.

use crate::Line;

/// Strategy for selecting which segment's line to use for splitting.
///
/// The selected segment becomes the first collinear segment of a BSP node.
pub trait SplitterSelector {
    /// Select the index of the segment to split on.
    ///
    /// Returns `None` if the slice is empty.
    /// The returned index must be in bounds for the provided slice.
    fn select(&self, segments: &[Line]) -> Option<usize>;
}

/// Selects the first segment in the list.
///
/// Tree shape follows input order directly, so permuting the input can
/// change the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstSegment;

impl SplitterSelector for FirstSegment {
    fn select(&self, segments: &[Line]) -> Option<usize> {
        if segments.is_empty() { None } else { Some(0) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_segment_empty_list() {
        let selector = FirstSegment;
        let segments: Vec<Line> = vec![];
        assert!(selector.select(&segments).is_none());
    }

    #[test]
    fn first_segment_multiple() {
        let selector = FirstSegment;
        let segments = vec![
            Line::from_coords(0.0, 0.0, 1.0, 0.0),
            Line::from_coords(0.0, 1.0, 1.0, 1.0),
        ];
        assert_eq!(selector.select(&segments), Some(0));
    }
}
