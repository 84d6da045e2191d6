//! Weighted 8-connected pixel graph
//!
//! Every ordered (pixel, in-bounds neighbor) pair becomes one edge, so each
//! physical adjacency is stored twice. Edges are sorted by ascending weight
//! once at construction.

use crate::models::{PixelMatrix, Rgb};

/// Neighbor offsets as (dy, dx), in emission order
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A pixel as a graph node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelNode {
    /// Linear index (`y * width + x`)
    pub index: u32,
    /// Column
    pub x: u32,
    /// Row
    pub y: u32,
    /// Channel values
    pub color: Rgb,
}

impl PixelNode {
    /// Color distance to another node
    pub fn distance(&self, other: &PixelNode) -> f32 {
        self.color.distance(&other.color)
    }
}

/// Directed edge between two pixel indices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Source pixel index
    pub from: u32,
    /// Target pixel index
    pub to: u32,
    /// Euclidean color distance between the endpoints
    pub weight: f32,
}

/// Nodes plus weight-sorted edges of a pixel grid
pub struct PixelGraph {
    nodes: Vec<PixelNode>,
    edges: Vec<Edge>,
}

impl PixelGraph {
    /// Build the graph for `image`.
    ///
    /// Equal-weight edges keep their emission order (row-major source pixel,
    /// then `DIRECTIONS` order) because the sort is stable.
    pub fn new(image: &PixelMatrix) -> Self {
        let width = image.width();
        let height = image.height();

        let mut nodes = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                nodes.push(PixelNode {
                    index: (y * width + x) as u32,
                    x: x as u32,
                    y: y as u32,
                    color: image.get(x, y),
                });
            }
        }

        let mut edges = Vec::with_capacity(edge_capacity(width, height));
        for y in 0..height {
            for x in 0..width {
                let current = &nodes[y * width + x];
                for &(dy, dx) in &DIRECTIONS {
                    let nx = x as isize + dx;
                    let ny = y as isize + dy;
                    if nx < 0 || ny < 0 || nx >= width as isize || ny >= height as isize {
                        continue;
                    }
                    let neighbor = &nodes[ny as usize * width + nx as usize];
                    edges.push(Edge {
                        from: current.index,
                        to: neighbor.index,
                        weight: current.distance(neighbor),
                    });
                }
            }
        }

        edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        Self { nodes, edges }
    }

    /// Nodes in row-major order
    pub fn nodes(&self) -> &[PixelNode] {
        &self.nodes
    }

    /// Edges in ascending weight order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// Exact number of directed 8-neighbor edges on a `width` x `height` grid
fn edge_capacity(width: usize, height: usize) -> usize {
    if width == 0 || height == 0 {
        return 0;
    }
    let horizontal = (width - 1) * height;
    let vertical = width * (height - 1);
    let diagonal = 2 * (width - 1) * (height - 1);
    2 * (horizontal + vertical + diagonal)
}
