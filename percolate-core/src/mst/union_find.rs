//! Union-find (disjoint set union) used by the spanning-forest builder.
//!
//! Roots are vertices with no parent pointer (`None`, the classic `-1`
//! sentinel); `union` is by component size and `find` compresses the walked
//! chain onto the root. This forest is wholly separate from the traversal
//! parents kept by the component analyzer: the two track different trees
//! with different lifetimes.

/// A disjoint-set forest over dense vertex indices.
///
/// # Examples
/// ```
/// use percolate_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert_ne!(sets.find(0), sets.find(1));
/// sets.union(0, 1);
/// assert_eq!(sets.find(0), sets.find(1));
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parents: Vec<Option<usize>>,
    sizes: Vec<usize>,
}

impl DisjointSet {
    /// Creates `vertex_count` singleton sets, each vertex its own root.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            parents: vec![None; vertex_count],
            sizes: vec![1; vertex_count],
        }
    }

    /// Returns the representative of the set containing `vertex`.
    ///
    /// Follows parent pointers to the root, then repoints the walked chain
    /// directly at it. Compression changes only the internal tree shape,
    /// never which representative is returned.
    pub fn find(&mut self, vertex: usize) -> usize {
        let mut root = vertex;
        while let Some(parent) = self.parents[root] {
            root = parent;
        }

        let mut current = vertex;
        while let Some(parent) = self.parents[current] {
            self.parents[current] = Some(root);
            current = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`, returning the
    /// surviving root.
    ///
    /// The smaller component is attached beneath the larger and its size
    /// absorbed. When sizes are equal, `left`'s root goes under `right`'s:
    /// a fixed tie-break so the representative is reproducible. It never
    /// affects which edges a spanning forest accepts.
    pub fn union(&mut self, left: usize, right: usize) -> usize {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return left_root;
        }

        let (survivor, absorbed) = if self.sizes[left_root] > self.sizes[right_root] {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };
        self.parents[absorbed] = Some(survivor);
        self.sizes[survivor] += self.sizes[absorbed];
        survivor
    }
}
