//! BSP tree node implementation.

use crate::Line;

/// A node in the BSP tree.
///
/// Each node stores the segments lying on its splitting line. The first
/// segment is the one whose equation defines the splitting line; the rest
/// were found collinear with it during construction. Segments ahead of the
/// line live in the back subtree, segments behind it in the front subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct BspNode {
    /// Segments on the splitting line, splitter first.
    segments: Vec<Line>,

    /// Subtree containing segments AHEAD of the splitting line.
    back: Option<Box<BspNode>>,

    /// Subtree containing segments BEHIND the splitting line.
    front: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a leaf node whose splitting line is defined by `splitter`.
    pub fn new(splitter: Line) -> Self {
        Self {
            segments: vec![splitter],
            back: None,
            front: None,
        }
    }

    /// Creates a node from its collinear segments and both subtrees.
    ///
    /// Returns `None` if `segments` is empty, since a node needs its splitter.
    pub(crate) fn with_children(
        segments: Vec<Line>,
        back: Option<BspNode>,
        front: Option<BspNode>,
    ) -> Option<Self> {
        if segments.is_empty() {
            return None;
        }
        Some(Self {
            segments,
            back: back.map(Box::new),
            front: front.map(Box::new),
        })
    }

    /// Returns the segments lying on this node's splitting line.
    #[inline]
    pub fn segments(&self) -> &[Line] {
        &self.segments
    }

    /// Returns the segment that defines the splitting line.
    #[inline]
    pub fn splitter(&self) -> &Line {
        &self.segments[0]
    }

    /// Returns a reference to the back child subtree.
    #[inline]
    pub fn back(&self) -> Option<&BspNode> {
        self.back.as_deref()
    }

    /// Returns a reference to the front child subtree.
    #[inline]
    pub fn front(&self) -> Option<&BspNode> {
        self.front.as_deref()
    }

    /// Checks if this node has any children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.back.is_none() && self.front.is_none()
    }

    /// Returns the total number of segments in this subtree.
    pub fn segment_count(&self) -> usize {
        let mut count = self.segments.len();

        if let Some(ref back) = self.back {
            count += back.segment_count();
        }
        if let Some(ref front) = self.front {
            count += front.segment_count();
        }

        count
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        let back_depth = self.back.as_ref().map_or(0, |n| n.depth());
        let front_depth = self.front.as_ref().map_or(0, |n| n.depth());
        1 + back_depth.max(front_depth)
    }
}
