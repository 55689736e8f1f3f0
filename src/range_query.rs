//! Recursive range-query traversal over the implicit tree.

use crate::aabb2d::Aabb2D;
use crate::quadtree::{QuadElement, QuadTree};

/// One rectangular range query against an immutable tree snapshot.
///
/// Borrows the tree's flat storage for the duration of the call; the only
/// owned state is the query rectangle and the recursion stack. Multiple
/// queries against the same tree can run in parallel.
pub(crate) struct RangeQuery<'a, T> {
    tree: &'a QuadTree<T>,
    bounds: Aabb2D,
}

impl<'a, T: Clone> RangeQuery<'a, T> {
    pub(crate) fn new(tree: &'a QuadTree<T>, bounds: Aabb2D) -> Self {
        RangeQuery { tree, bounds }
    }

    /// Runs the traversal from the root, appending matches to `results`.
    pub(crate) fn run(&self, results: &mut Vec<QuadElement<T>>) {
        self.descend(results, self.tree.bounds, false, 0, 0);
    }

    /// Visits the four children whose local indices start at `node_base`
    /// on `depth + 1`.
    ///
    /// Once a cell is proven to lie fully inside the query rectangle,
    /// `parent_contained` carries that fact down and no geometric test
    /// runs for any of its descendants: fully contained leaves bulk-copy
    /// their whole run, partially overlapped leaves filter per element,
    /// and disjoint cells are pruned outright.
    fn descend(
        &self,
        results: &mut Vec<QuadElement<T>>,
        parent_bounds: Aabb2D,
        parent_contained: bool,
        node_base: usize,
        depth: usize,
    ) {
        let child_offset = self.tree.offsets.offset(depth + 1);

        for slot in 0..4 {
            let child_bounds = parent_bounds.child_quadrant(slot);

            let mut contained = parent_contained;
            if !contained {
                if self.bounds.contains(&child_bounds) {
                    contained = true;
                } else if !self.bounds.intersects(&child_bounds) {
                    continue;
                }
            }

            let at = child_offset + node_base + slot;
            let element_count = self.tree.lookup[at] as usize;

            if element_count > self.tree.max_leaf_elements && depth + 1 < self.tree.max_depth {
                self.descend(
                    results,
                    child_bounds,
                    contained,
                    (node_base + slot) * 4,
                    depth + 1,
                );
            } else if element_count != 0 {
                let node = self.tree.nodes[at];
                let first = node.first_child_index as usize;
                let run = &self.tree.elements[first..first + node.count as usize];

                if contained {
                    results.extend_from_slice(run);
                } else {
                    for element in run {
                        if self.bounds.contains_point(element.position) {
                            results.push(element.clone());
                        }
                    }
                }
            }
        }
    }
}
