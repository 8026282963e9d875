//! BSP tree container and construction.

use tracing::debug;

use crate::{BspConfig, BspError, Line, Relation};

use super::node::BspNode;
use super::selector::{FirstSegment, SplitterSelector};

/// A Binary Space Partitioning tree over 2D line segments.
///
/// Each node owns the segments lying on its splitting line. Segments ahead
/// of the line are partitioned into the back subtree, segments behind it
/// into the front subtree, and segments crossing it are split in two.
///
/// # Construction
///
/// ```
/// use segment_bsp::{BspTree, Line};
///
/// let segments = vec![
///     Line::from_coords(1.0, 1.0, 2.0, 2.0),
///     Line::from_coords(4.0, 4.0, 7.0, 4.0),
/// ];
/// let tree = BspTree::from_segments(segments).unwrap();
/// assert_eq!(tree.depth(), 2);
/// ```
///
/// The tree is read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BspTree {
    root: Option<BspNode>,
}

impl BspTree {
    /// Creates an empty BSP tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a BSP tree from an ordered list of segments.
    ///
    /// Uses the provided [`SplitterSelector`] to choose splitting lines and
    /// `config.epsilon` for every classification. Input order matters: it
    /// decides which segment splits each subspace.
    ///
    /// Returns an empty tree if the input is empty.
    ///
    /// # Errors
    /// - [`BspError::InvalidEpsilon`] if `config` fails [`BspConfig::validate`]
    /// - [`BspError::SplitterOutOfRange`] if `selector` returns a bad index
    /// - [`BspError::DegenerateGeometry`] if any classification hits a
    ///   vertical splitter or an unsplittable straddling segment
    ///
    /// No partial tree is returned.
    pub fn build<S>(
        segments: Vec<Line>,
        selector: &S,
        config: &BspConfig,
    ) -> Result<Self, BspError>
    where
        S: SplitterSelector + Sync,
    {
        config.validate()?;
        Ok(Self {
            root: build_node(segments, selector, config)?,
        })
    }

    /// Builds a BSP tree splitting on the first remaining segment each time,
    /// with the default configuration.
    pub fn from_segments(segments: Vec<Line>) -> Result<Self, BspError> {
        Self::build(segments, &FirstSegment, &BspConfig::default())
    }

    /// Returns `true` if the tree contains no segments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&BspNode> {
        self.root.as_ref()
    }

    /// Returns the total number of segments in the tree, counting split pieces.
    pub fn segment_count(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.segment_count())
    }

    /// Returns the maximum depth of the tree (0 for empty tree).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.depth())
    }

    /// Collects all segments in pre-order: node, back subtree, front subtree.
    pub fn collect_segments(&self) -> Vec<Line> {
        let mut result = Vec::with_capacity(self.segment_count());
        collect_segments_recursive(self.root.as_ref(), &mut result);
        result
    }
}

/// Recursively builds a BSP node from a list of segments.
fn build_node<S>(
    mut segments: Vec<Line>,
    selector: &S,
    config: &BspConfig,
) -> Result<Option<BspNode>, BspError>
where
    S: SplitterSelector + Sync,
{
    let Some(splitter_idx) = selector.select(&segments) else {
        return Ok(None);
    };

    if splitter_idx >= segments.len() {
        return Err(BspError::SplitterOutOfRange {
            index: splitter_idx,
            len: segments.len(),
        });
    }

    // Order of the remaining segments is preserved
    let splitter = segments.remove(splitter_idx);

    let mut collinear = Vec::new();
    let mut back_list = Vec::new();
    let mut front_list = Vec::new();

    for segment in segments {
        match splitter.relate(&segment, config.epsilon)? {
            Relation::Ahead => back_list.push(segment),
            Relation::Behind => front_list.push(segment),
            Relation::Collinear => collinear.push(segment),
            Relation::Straddles { back, front } => {
                debug!(%segment, %back, %front, "split segment");
                back_list.push(back);
                front_list.push(front);
            }
        }
    }

    debug!(
        %splitter,
        collinear = collinear.len(),
        back = back_list.len(),
        front = front_list.len(),
        "partitioned node"
    );

    let mut node_segments = Vec::with_capacity(collinear.len() + 1);
    node_segments.push(splitter);
    node_segments.extend(collinear);

    let (back, front) = build_children(back_list, front_list, selector, config)?;
    Ok(BspNode::with_children(node_segments, back, front))
}

type Children = (Option<BspNode>, Option<BspNode>);

#[cfg(not(feature = "parallel"))]
fn build_children<S>(
    back_list: Vec<Line>,
    front_list: Vec<Line>,
    selector: &S,
    config: &BspConfig,
) -> Result<Children, BspError>
where
    S: SplitterSelector + Sync,
{
    let back = build_node(back_list, selector, config)?;
    let front = build_node(front_list, selector, config)?;
    Ok((back, front))
}

/// Both candidate lists are complete here, so the subtrees are independent.
#[cfg(feature = "parallel")]
fn build_children<S>(
    back_list: Vec<Line>,
    front_list: Vec<Line>,
    selector: &S,
    config: &BspConfig,
) -> Result<Children, BspError>
where
    S: SplitterSelector + Sync,
{
    let (back, front) = rayon::join(
        || build_node(back_list, selector, config),
        || build_node(front_list, selector, config),
    );
    Ok((back?, front?))
}

/// Recursively collects all segments from a node subtree.
fn collect_segments_recursive(node: Option<&BspNode>, result: &mut Vec<Line>) {
    if let Some(n) = node {
        result.extend(n.segments().iter().cloned());
        collect_segments_recursive(n.back(), result);
        collect_segments_recursive(n.front(), result);
    }
}
