//! BSP (Binary Space Partitioning) tree over 2D line segments.

pub mod bsp;
mod compare;
mod config;
mod error;
mod line;
mod relation;

pub use bsp::{render, BspNode, BspTree, FirstSegment, SplitterSelector};
pub use compare::{approx_compare, Comparison, DEFAULT_EPSILON};
pub use config::BspConfig;
pub use error::{BspError, DegenerateKind};
pub use line::{Line, Point, Side};
pub use relation::Relation;
