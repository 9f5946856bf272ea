/// This is an array-backed implementation of a Disjoint Set, which allows for
/// efficient operations that involve set union and representative finding.
/// We need this to implement Kruskal's algorithm: an edge is accepted into the
/// spanning tree exactly when its endpoints live in different components.
///
/// The tie-breaking in `union` is deliberate and observable: when two roots
/// have equal rank, the second root is attached under the first and the first
/// root's rank increases by one. Which spanning tree is produced among
/// equal-weight alternatives depends on this rule, so it must not change.
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    pub fn new(size: usize) -> DisjointSet {
        let mut parent = Vec::with_capacity(size);
        for i in 0..size {
            // MakeSet(i)
            parent.push(i);
        }
        DisjointSet {
            parent,
            rank: vec![0; size],
            components: size,
        }
    }

    /// Returns the representative of the component containing `index`,
    /// compressing the path along the way. Compression re-parents nodes but
    /// never changes which element is the representative.
    pub fn find(&mut self, index: usize) -> usize {
        let mut root = self.parent[index];
        if root != index {
            root = self.find(root);
            self.parent[index] = root;
        }
        root
    }

    /// Merge the components containing `u` and `v`. Returns `true` if the two
    /// were in different components (a merge happened), `false` if they were
    /// already connected.
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let root_u = self.find(u);
        let root_v = self.find(v);
        if root_u == root_v {
            return false;
        }
        if self.rank[root_u] < self.rank[root_v] {
            self.parent[root_u] = root_v;
        } else if self.rank[root_u] > self.rank[root_v] {
            self.parent[root_v] = root_u;
        } else {
            // Equal ranks: the first root wins and gains a rank.
            self.parent[root_v] = root_u;
            self.rank[root_u] += 1;
        }
        self.components -= 1;
        true
    }

    /// Number of disjoint components. Decreases by exactly one on every
    /// successful `union` and never increases.
    pub fn component_count(&self) -> usize {
        self.components
    }
}
