//! Pixel graph and disjoint-set structures
//!
//! - 8-connected pixel graph with color-distance edge weights
//! - Union-find tracking component size and internal difference

/// Weighted 8-connected pixel graph
pub mod pixel_graph;
/// Union-find with size and internal-difference statistics
pub mod union_find;

pub use pixel_graph::{Edge, PixelGraph, PixelNode};
pub use union_find::UnionFind;
