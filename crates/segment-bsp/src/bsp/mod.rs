//! Binary Space Partitioning tree for 2D line segments.
//!
//! This module provides a BSP tree implementation that recursively partitions
//! the plane using lines derived from input segments. Construction always
//! splits on a segment chosen by a [`SplitterSelector`], classifies every
//! other segment against it, splits the ones that cross it, and recurses.
//!
//! # Example
//!
//! ```
//! use segment_bsp::{render, BspTree, Line};
//!
//! let segments = vec![
//!     Line::from_coords(0.0, 0.0, 1.0, 0.0),
//!     Line::from_coords(0.0, 1.0, 1.0, 1.0),
//! ];
//! let tree = BspTree::from_segments(segments).unwrap();
//!
//! assert_eq!(tree.depth(), 2);
//! println!("{}", render(&tree));
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: The main container holding the root node
//! - [`BspNode`]: Nodes storing the segments on their splitting line
//! - [`SplitterSelector`]: Strategy trait for choosing splitting segments
//! - [`render`]: Indented text form of a tree

mod node;
mod render;
mod selector;
mod tree;

// Re-export main types
pub use node::BspNode;
pub use render::render;
pub use selector::{FirstSegment, SplitterSelector};
pub use tree::BspTree;
