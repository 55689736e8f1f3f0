//! Axis-aligned bounding box stored as center + half-extents.
//!
//! All containment and overlap predicates are inclusive on the boundary:
//! a point exactly on an edge counts as inside, and two boxes that merely
//! touch count as intersecting. The tree's internal cell tests and the
//! final per-element filter use the same predicates, so an element can
//! never fall between the two.

use glam::Vec2;

/// 2D axis-aligned bounding box defined by center and half-extents.
///
/// Tree cells are always square (half-extents equal in x and y); query
/// rectangles may be arbitrary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2D {
    /// Center of the box.
    pub center: Vec2,
    /// Half-extents: distance from the center to each edge.
    pub extents: Vec2,
}

impl Aabb2D {
    /// Creates a box from its center and half-extents.
    pub fn new(center: Vec2, extents: Vec2) -> Self {
        Aabb2D { center, extents }
    }

    /// Creates a square box from its center and a single half-extent.
    pub fn square(center: Vec2, half_extent: f32) -> Self {
        Aabb2D {
            center,
            extents: Vec2::splat(half_extent),
        }
    }

    /// Lower-left corner.
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.extents
    }

    /// Upper-right corner.
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.extents
    }

    /// Point containment, inclusive on all edges.
    #[inline]
    pub fn contains_point(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Whole-rectangle containment: `other` lies entirely inside `self`.
    #[inline]
    pub fn contains(&self, other: &Aabb2D) -> bool {
        let min = self.min();
        let max = self.max();
        let other_min = other.min();
        let other_max = other.max();
        other_min.x >= min.x && other_max.x <= max.x && other_min.y >= min.y && other_max.y <= max.y
    }

    /// Overlap test; boxes that only touch on an edge still intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb2D) -> bool {
        let min = self.min();
        let max = self.max();
        let other_min = other.min();
        let other_max = other.max();
        min.x <= other_max.x && max.x >= other_min.x && min.y <= other_max.y && max.y >= other_min.y
    }

    /// Bounds of the child cell in `slot` (0 = top-left, 1 = top-right,
    /// 2 = bottom-left, 3 = bottom-right).
    ///
    /// Assumes a square cell: the x half-extent is halved for both axes.
    /// A slot outside 0..=3 is a broken internal invariant.
    #[inline]
    pub(crate) fn child_quadrant(&self, slot: usize) -> Aabb2D {
        let half = self.extents.x * 0.5;
        let Vec2 { x: cx, y: cy } = self.center;

        let center = match slot {
            0 => Vec2::new(cx - half, cy + half),
            1 => Vec2::new(cx + half, cy + half),
            2 => Vec2::new(cx - half, cy - half),
            3 => Vec2::new(cx + half, cy - half),
            _ => unreachable!("child slot out of range: {slot}"),
        };
        Aabb2D::square(center, half)
    }

    /// Slot of the child cell that owns `point`.
    ///
    /// A point exactly on the vertical split line goes right, on the
    /// horizontal split line it goes up, so every point maps to exactly
    /// one child. Inverse of [`Aabb2D::child_quadrant`] for points inside
    /// the cell.
    #[inline]
    pub(crate) fn child_slot(&self, point: Vec2) -> usize {
        usize::from(point.x >= self.center.x) + 2 * usize::from(point.y < self.center.y)
    }
}
