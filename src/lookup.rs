//! Depth-offset table for implicit-tree addressing.

/// Prefix sums mapping tree depth to the base index of that depth's block
/// in the flat node arrays.
///
/// The tree has no parent or child pointers. A node at depth `d` with
/// local index `i` lives at flat index `offset(d) + i`, and the children
/// of local index `i` have local indices `4 * i + slot` on depth `d + 1`.
/// `offset(d)` is the total number of nodes on all shallower depths,
/// `(4^d - 1) / 3`.
#[derive(Debug, Clone)]
pub struct DepthOffsets {
    offsets: Vec<usize>,
}

impl DepthOffsets {
    /// Precomputes offsets for depths `0..=max_depth + 1`.
    ///
    /// The extra entry past `max_depth` lets the traversal address the
    /// child block of the deepest parent level without a special case.
    pub fn new(max_depth: usize) -> Self {
        let mut offsets = Vec::with_capacity(max_depth + 2);
        let mut total = 0usize;
        let mut level_size = 1usize;
        for _ in 0..=max_depth + 1 {
            offsets.push(total);
            total += level_size;
            level_size *= 4;
        }
        DepthOffsets { offsets }
    }

    /// Base index of the `depth` block in the flat node arrays.
    #[inline]
    pub fn offset(&self, depth: usize) -> usize {
        self.offsets[depth]
    }

    /// Total number of addressable nodes, i.e. the size the flat arrays
    /// must have.
    pub fn total_nodes(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0)
    }
}
