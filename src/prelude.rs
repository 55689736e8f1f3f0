//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use quadpoint::prelude::*;
//! ```

pub use glam::Vec2;

pub use crate::aabb2d::Aabb2D;
pub use crate::quadtree::{QuadElement, QuadTree, QuadTreeError};
