/// Union-Find with per-component size and internal difference
///
/// `size` and `internal_difference` are only meaningful at a root, so every
/// accessor resolves its argument through `find` first.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<u32>,
    rank: Vec<u8>,
    size: Vec<u32>,
    internal_difference: Vec<f32>,
}

impl UnionFind {
    /// Create `n` singleton components
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            rank: vec![0; n],
            size: vec![1; n],
            internal_difference: vec![0.0; n],
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True when the structure holds no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of `x`'s component, compressing the path to it
    pub fn find(&mut self, x: u32) -> u32 {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = x;
        while node != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }
        root
    }

    /// Merge the components of `x` and `y` through an edge of `edge_weight`.
    ///
    /// Returns the surviving root, or `None` when both were already joined.
    /// On a rank tie the root of `x` survives.
    pub fn union(&mut self, x: u32, y: u32, edge_weight: f32) -> Option<u32> {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return None;
        }

        let (rx, ry) = (root_x as usize, root_y as usize);
        let (winner, loser) = if self.rank[rx] < self.rank[ry] {
            (ry, rx)
        } else {
            if self.rank[rx] == self.rank[ry] {
                self.rank[rx] = self.rank[rx].saturating_add(1);
            }
            (rx, ry)
        };

        self.parent[loser] = winner as u32;
        self.size[winner] += self.size[loser];
        self.internal_difference[winner] = self.internal_difference[winner]
            .max(self.internal_difference[loser])
            .max(edge_weight);

        Some(winner as u32)
    }

    /// Number of elements in `x`'s component
    pub fn size(&mut self, x: u32) -> u32 {
        let root = self.find(x);
        self.size[root as usize]
    }

    /// Largest edge weight merged inside `x`'s component so far
    pub fn internal_difference(&mut self, x: u32) -> f32 {
        let root = self.find(x);
        self.internal_difference[root as usize]
    }

    /// Number of distinct components
    pub fn component_count(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &p)| p as usize == i)
            .count()
    }
}
