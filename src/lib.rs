//! # quadpoint - Implicit Quadtree Spatial Index
//!
//! A Rust library providing a flattened, pointerless quadtree for 2D
//! points-in-region queries: given an axis-aligned query rectangle, it
//! returns every stored element whose position falls inside it.
//!
//! ## Features
//!
//! - **Implicit Tree Addressing**: nodes live in flat per-depth arrays and
//!   are located by arithmetic index, not pointers
//! - **Containment Pruning**: subtrees proven fully inside the query
//!   rectangle are bulk-copied without per-element tests
//! - **Contiguous Element Storage**: each leaf owns one contiguous run of
//!   the shared element array, so bulk copies are plain slice appends
//! - **Static Optimization**: built once from a batch, then queried any
//!   number of times; queries take `&self` and can run in parallel
//!
//! ## Quick Start
//!
//! ```rust
//! use quadpoint::prelude::*;
//!
//! // A square world centered at the origin, 200x200 units.
//! let bounds = Aabb2D::square(Vec2::ZERO, 100.0);
//!
//! // Up to 6 levels deep, splitting nodes above 16 elements.
//! let mut tree = QuadTree::new(bounds, 6, 16).unwrap();
//!
//! tree.bulk_insert(vec![
//!     QuadElement::new(Vec2::new(10.0, 20.0), 0u32),
//!     QuadElement::new(Vec2::new(-40.0, 45.0), 1),
//!     QuadElement::new(Vec2::new(80.0, -80.0), 2),
//! ])
//! .unwrap();
//!
//! // Query a rectangle; results are appended, the caller owns the buffer.
//! let mut results = Vec::new();
//! tree.query_rect(Aabb2D::square(Vec2::ZERO, 50.0), &mut results);
//!
//! let payloads: Vec<u32> = results.iter().map(|e| e.payload).collect();
//! assert_eq!(payloads, vec![1, 0]);
//! ```
//!
//! ## How It Works
//!
//! The tree subdivides its square root region into four quadrants per
//! level, down to a configured maximum depth. Nodes are addressed as
//! `depth_offset(depth) + local_index`, where a node's children have local
//! indices `4 * local_index + slot` - no parent or child pointers exist.
//!
//! A rectangular query walks this implicit tree top-down. Cells disjoint
//! from the query rectangle are pruned without being visited. Once a cell
//! is fully contained in the query rectangle, the flag is inherited by the
//! whole subtree and its leaf runs are appended wholesale; only cells that
//! partially overlap the query filter their elements one by one.

pub mod aabb2d;
pub mod lookup;
pub mod prelude;
pub mod quadtree;

mod range_query;

pub use aabb2d::Aabb2D;
pub use lookup::DepthOffsets;
pub use quadtree::{MAX_DEPTH, QuadElement, QuadTree, QuadTreeError};
