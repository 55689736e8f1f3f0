//! Flattened implicit quadtree over 2D points.
//!
//! The tree keeps no node pointers. Per-depth node metadata lives in flat
//! arrays addressed arithmetically through [`DepthOffsets`], and all
//! elements live in one contiguous array where each leaf owns a single
//! contiguous run. The layout is rebuilt wholesale by
//! [`QuadTree::bulk_insert`]; between rebuilds the tree is immutable and
//! queries only borrow it.

use glam::Vec2;
use thiserror::Error;

use crate::aabb2d::Aabb2D;
use crate::lookup::DepthOffsets;
use crate::range_query::RangeQuery;

/// Hard ceiling on tree depth.
///
/// Bounds both the query recursion and the flat node arrays, which hold
/// `(4^(depth + 1) - 1) / 3` slots.
pub const MAX_DEPTH: usize = 12;

/// Errors surfaced while configuring or rebuilding a tree.
///
/// Queries themselves cannot fail; every failure mode is caught at build
/// time.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum QuadTreeError {
    /// `max_depth` outside `1..=MAX_DEPTH`.
    #[error("max_depth must be in 1..={MAX_DEPTH}, got {0}")]
    InvalidMaxDepth(usize),
    /// `max_leaf_elements` of zero would force every node to subdivide.
    #[error("max_leaf_elements must be at least 1")]
    InvalidLeafCapacity,
    /// Root bounds must be square with strictly positive half-extents;
    /// the child-bounds arithmetic halves a single extent for both axes.
    #[error("root bounds must be square with positive half-extents, got {0:?}")]
    InvalidBounds(Vec2),
    /// An element position outside the root bounds has no cell to land in.
    #[error("element position {0:?} lies outside the root bounds")]
    OutOfBounds(Vec2),
}

/// Descriptor of one leaf's contiguous run in the shared element array.
///
/// Only slots that the build pass turned into leaves hold meaningful
/// descriptors; the traversal never reads the others.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct QuadNode {
    /// Start of the run in the element array.
    pub(crate) first_child_index: u32,
    /// Number of contiguous elements in the run.
    pub(crate) count: u32,
}

/// A stored item: a 2D position plus an opaque payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadElement<T> {
    /// Position of the element inside the root bounds.
    pub position: Vec2,
    /// Caller-supplied payload carried along with the position.
    pub payload: T,
}

impl<T> QuadElement<T> {
    /// Creates an element from a position and payload.
    pub fn new(position: Vec2, payload: T) -> Self {
        QuadElement { position, payload }
    }
}

/// Implicit quadtree spatial index over 2D points.
///
/// Built once from a batch of elements, then queried any number of times.
/// Rectangular range queries walk the implicit tree top-down, prune cells
/// disjoint from the query, and bulk-copy whole leaf runs once a cell is
/// known to lie fully inside the query rectangle.
///
/// # Example
///
/// ```
/// use quadpoint::{Aabb2D, QuadElement, QuadTree};
/// use glam::Vec2;
///
/// let bounds = Aabb2D::square(Vec2::ZERO, 100.0);
/// let mut tree = QuadTree::new(bounds, 6, 16).unwrap();
///
/// tree.bulk_insert(vec![
///     QuadElement::new(Vec2::new(10.0, 20.0), "a"),
///     QuadElement::new(Vec2::new(-40.0, 35.0), "b"),
///     QuadElement::new(Vec2::new(80.0, -80.0), "c"),
/// ])
/// .unwrap();
///
/// let mut results = Vec::new();
/// tree.query_rect(Aabb2D::square(Vec2::ZERO, 50.0), &mut results);
/// assert_eq!(results.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct QuadTree<T> {
    pub(crate) bounds: Aabb2D,
    pub(crate) max_depth: usize,
    pub(crate) max_leaf_elements: usize,
    pub(crate) offsets: DepthOffsets,
    /// Per-node count of elements at or below that node, for every depth
    /// from the root's children down.
    pub(crate) lookup: Vec<u32>,
    /// Leaf descriptors, parallel to `lookup`.
    pub(crate) nodes: Vec<QuadNode>,
    /// Element storage; each leaf owns one contiguous run.
    pub(crate) elements: Vec<QuadElement<T>>,
}

impl<T> QuadTree<T> {
    /// Creates an empty tree covering `bounds`.
    ///
    /// `max_depth` is the recursion ceiling (`1..=MAX_DEPTH`) and
    /// `max_leaf_elements` the per-leaf element threshold above which a
    /// node subdivides. Both are fixed for the tree's lifetime; the flat
    /// node arrays are sized here, so rebuilds never reallocate them.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError`] if `max_depth` is outside `1..=MAX_DEPTH`,
    /// `max_leaf_elements` is zero, or `bounds` is not a square with
    /// strictly positive half-extents.
    pub fn new(
        bounds: Aabb2D,
        max_depth: usize,
        max_leaf_elements: usize,
    ) -> Result<Self, QuadTreeError> {
        if max_depth == 0 || max_depth > MAX_DEPTH {
            return Err(QuadTreeError::InvalidMaxDepth(max_depth));
        }
        if max_leaf_elements == 0 {
            return Err(QuadTreeError::InvalidLeafCapacity);
        }
        // The comparison also rejects NaN extents.
        if !(bounds.extents.x > 0.0) || bounds.extents.x != bounds.extents.y {
            return Err(QuadTreeError::InvalidBounds(bounds.extents));
        }

        let offsets = DepthOffsets::new(max_depth);
        let total_nodes = offsets.total_nodes();
        Ok(QuadTree {
            bounds,
            max_depth,
            max_leaf_elements,
            offsets,
            lookup: vec![0; total_nodes],
            nodes: vec![QuadNode::default(); total_nodes],
            elements: Vec::new(),
        })
    }

    /// Root bounds of the tree.
    pub fn bounds(&self) -> Aabb2D {
        self.bounds
    }

    /// Recursion ceiling the tree was built with.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Per-leaf element threshold the tree was built with.
    pub fn max_leaf_elements(&self) -> usize {
        self.max_leaf_elements
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All stored elements, grouped by leaf run.
    pub fn elements(&self) -> &[QuadElement<T>] {
        &self.elements
    }

    /// Removes all elements without releasing the node arrays.
    pub fn clear(&mut self) {
        self.lookup.fill(0);
        self.nodes.fill(QuadNode::default());
        self.elements.clear();
    }

    /// Clears the tree and rebuilds it from a batch of elements.
    ///
    /// Three passes over the flat arrays: count how many elements fall at
    /// or below every node, carve one contiguous element run per leaf in
    /// traversal order, then route each element into its leaf's run. A
    /// node becomes a leaf when its count is at most `max_leaf_elements`
    /// or it sits on the deepest level; the traversal applies the same
    /// rule, so build and query always agree on where the leaves are.
    ///
    /// # Errors
    ///
    /// Returns [`QuadTreeError::OutOfBounds`] if any element position lies
    /// outside the root bounds; the tree is left unchanged in that case.
    pub fn bulk_insert(&mut self, incoming: Vec<QuadElement<T>>) -> Result<(), QuadTreeError> {
        for element in &incoming {
            if !self.bounds.contains_point(element.position) {
                return Err(QuadTreeError::OutOfBounds(element.position));
            }
        }

        self.lookup.fill(0);
        self.nodes.fill(QuadNode::default());

        // Pass 1: count elements at or below every node on the path from
        // the root's children to the deepest level. The root itself is
        // never a leaf, so it needs no count.
        for element in &incoming {
            let mut cell = self.bounds;
            let mut local = 0usize;
            for depth in 1..=self.max_depth {
                let slot = cell.child_slot(element.position);
                cell = cell.child_quadrant(slot);
                local = local * 4 + slot;
                self.lookup[self.offsets.offset(depth) + local] += 1;
            }
        }

        // Pass 2: assign contiguous element runs to leaves.
        let mut next_run_start = 0u32;
        self.prepare_leaves(0, 0, &mut next_run_start);

        // Pass 3: route every element to its leaf and settle the element
        // array into per-leaf contiguous runs.
        let mut placed: Vec<(usize, QuadElement<T>)> = Vec::with_capacity(incoming.len());
        for element in incoming {
            let at = self.leaf_index_for(element.position);
            let node = &mut self.nodes[at];
            let destination = node.first_child_index as usize + node.count as usize;
            node.count += 1;
            placed.push((destination, element));
        }
        // Destinations are unique, so the sort fully determines the layout.
        placed.sort_unstable_by_key(|&(destination, _)| destination);
        self.elements = placed.into_iter().map(|(_, element)| element).collect();
        Ok(())
    }

    /// Walks the four children whose local indices start at `node_base`
    /// on `depth + 1`, carving an element run for every node the traversal
    /// will treat as a leaf.
    fn prepare_leaves(&mut self, node_base: usize, depth: usize, next_run_start: &mut u32) {
        let child_offset = self.offsets.offset(depth + 1);
        for slot in 0..4 {
            let at = child_offset + node_base + slot;
            let element_count = self.lookup[at] as usize;

            if element_count > self.max_leaf_elements && depth + 1 < self.max_depth {
                self.prepare_leaves((node_base + slot) * 4, depth + 1, next_run_start);
            } else if element_count != 0 {
                // Count starts at zero and doubles as the write cursor
                // while elements are routed in.
                self.nodes[at] = QuadNode {
                    first_child_index: *next_run_start,
                    count: 0,
                };
                *next_run_start += element_count as u32;
            }
        }
    }

    /// Flat index of the leaf that owns `position`, following the same
    /// count/depth rule as [`QuadTree::prepare_leaves`].
    fn leaf_index_for(&self, position: Vec2) -> usize {
        let mut cell = self.bounds;
        let mut local = 0usize;
        let mut depth = 0usize;
        loop {
            let slot = cell.child_slot(position);
            cell = cell.child_quadrant(slot);
            local = local * 4 + slot;
            depth += 1;
            let at = self.offsets.offset(depth) + local;
            let element_count = self.lookup[at] as usize;
            if element_count <= self.max_leaf_elements || depth >= self.max_depth {
                return at;
            }
        }
    }
}

impl<T: Clone> QuadTree<T> {
    /// Appends every stored element whose position falls inside `bounds`
    /// to `results`, in traversal order (top-left, top-right, bottom-left,
    /// bottom-right). `results` is not cleared first; callers that reuse a
    /// buffer clear it themselves.
    ///
    /// The query rectangle may be degenerate or entirely outside the root
    /// bounds, in which case nothing is appended.
    pub fn query_rect(&self, bounds: Aabb2D, results: &mut Vec<QuadElement<T>>) {
        RangeQuery::new(self, bounds).run(results);
    }
}
