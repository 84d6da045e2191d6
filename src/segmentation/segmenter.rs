//! Size-adaptive greedy merge over a [`PixelGraph`]
//!
//! Phase 1 walks the weight-sorted edges once and joins two components when
//! the edge is no heavier than `min(Int(A) + k/|A|, Int(B) + k/|B|)`. A
//! rejected edge is never looked at again. Phase 2 folds every component
//! smaller than the minimum region size into its largest surviving neighbor.

use crate::graph::{Edge, PixelGraph, UnionFind};

/// Default minimum region size used by Phase 2
pub const MIN_REGION_SIZE: u32 = 20;

/// Edge weight passed to unions made during small-region absorption
const ABSORB_WEIGHT: f32 = f32::MAX;

/// Segmenter for one image size and one `k`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segmenter {
    width: usize,
    height: usize,
    k: f32,
    min_region_size: u32,
}

impl Segmenter {
    /// Create a segmenter. Larger `k` favors fewer, larger regions.
    pub fn new(width: usize, height: usize, k: f32) -> Self {
        Self {
            width,
            height,
            k,
            min_region_size: MIN_REGION_SIZE,
        }
    }

    /// Override the Phase 2 minimum region size
    pub fn with_min_region_size(mut self, min_region_size: u32) -> Self {
        self.min_region_size = min_region_size;
        self
    }

    fn tau(&self, size: u32) -> f32 {
        self.k / size as f32
    }

    /// Run both phases and return dense 1-based labels in row-major order
    pub fn segment(&self, graph: &PixelGraph) -> Vec<u32> {
        debug_assert_eq!(graph.node_count(), self.width * self.height);

        let mut uf = self.merge(graph);
        let absorbed = self.absorb_small_regions(&mut uf, graph);
        let labels = label_components(&mut uf);

        log::debug!(
            "segment: {}x{} k={} edges={} absorbed={} regions={}",
            self.width,
            self.height,
            self.k,
            graph.edges().len(),
            absorbed,
            uf.component_count()
        );

        labels
    }

    /// Phase 1: single pass over the sorted edges
    pub fn merge(&self, graph: &PixelGraph) -> UnionFind {
        let mut uf = UnionFind::new(graph.node_count());
        let mut merges = 0usize;

        for edge in graph.edges() {
            if self.accepts(&mut uf, edge) {
                uf.union(edge.from, edge.to, edge.weight);
                merges += 1;
            }
        }

        log::debug!(
            "merge: {} of {} edges joined components",
            merges,
            graph.edges().len()
        );
        uf
    }

    /// True when `edge` joins two distinct components and passes the
    /// adaptive threshold for the current union-find state
    pub fn accepts(&self, uf: &mut UnionFind, edge: &Edge) -> bool {
        let root_from = uf.find(edge.from);
        let root_to = uf.find(edge.to);
        if root_from == root_to {
            return false;
        }

        let m_int = f32::min(
            uf.internal_difference(root_from) + self.tau(uf.size(root_from)),
            uf.internal_difference(root_to) + self.tau(uf.size(root_to)),
        );
        edge.weight <= m_int
    }

    /// Phase 2: fold components smaller than the minimum region size into
    /// their currently largest surviving neighbor.
    ///
    /// Components are visited in row-major first-encounter order. Returns the
    /// number of absorptions performed.
    pub fn absorb_small_regions(&self, uf: &mut UnionFind, graph: &PixelGraph) -> usize {
        let n = uf.len();

        // Compact component ids, assigned in row-major first-encounter order.
        let mut component_of_root = vec![u32::MAX; n];
        let mut roots: Vec<u32> = Vec::new();
        let mut sizes: Vec<u32> = Vec::new();
        for i in 0..n as u32 {
            let root = uf.find(i);
            let slot = &mut component_of_root[root as usize];
            if *slot == u32::MAX {
                *slot = roots.len() as u32;
                roots.push(root);
                sizes.push(0);
            }
            sizes[*slot as usize] += 1;
        }

        let mut adjacency: Vec<Vec<u32>> = vec![Vec::new(); roots.len()];
        for edge in graph.edges() {
            let a = component_of_root[uf.find(edge.from) as usize];
            let b = component_of_root[uf.find(edge.to) as usize];
            if a != b {
                push_unique(&mut adjacency[a as usize], b);
                push_unique(&mut adjacency[b as usize], a);
            }
        }

        let mut alive = vec![true; roots.len()];
        let mut absorbed = 0usize;

        for component in 0..roots.len() {
            if !alive[component] || sizes[component] >= self.min_region_size {
                continue;
            }

            // First maximal neighbor in adjacency order wins ties.
            let best = adjacency[component]
                .iter()
                .copied()
                .filter(|&nb| alive[nb as usize])
                .fold(None, |best: Option<u32>, nb| match best {
                    Some(b) if sizes[b as usize] >= sizes[nb as usize] => Some(b),
                    _ => Some(nb),
                });
            let Some(best) = best else {
                continue;
            };
            let best = best as usize;

            uf.union(roots[component], roots[best], ABSORB_WEIGHT);
            sizes[best] += sizes[component];
            sizes[component] = 0;
            alive[component] = false;

            let inherited = std::mem::take(&mut adjacency[component]);
            for nb in inherited {
                if nb as usize != best && alive[nb as usize] {
                    push_unique(&mut adjacency[best], nb);
                    push_unique(&mut adjacency[nb as usize], best as u32);
                }
            }
            absorbed += 1;
        }

        absorbed
    }
}

/// Dense 1-based labels from final roots, assigned in row-major
/// first-encounter order
pub fn label_components(uf: &mut UnionFind) -> Vec<u32> {
    let n = uf.len();
    let mut label_of_root = vec![0u32; n];
    let mut next_label = 1u32;
    let mut labels = Vec::with_capacity(n);

    for i in 0..n as u32 {
        let root = uf.find(i) as usize;
        if label_of_root[root] == 0 {
            label_of_root[root] = next_label;
            next_label += 1;
        }
        labels.push(label_of_root[root]);
    }

    labels
}

fn push_unique(list: &mut Vec<u32>, value: u32) {
    if !list.contains(&value) {
        list.push(value);
    }
}
