//! Axis-aligned bounding boxes and the overlap test used for all collision.
//!
//! Collision in this game is approximation by rectangle: every entity is a
//! box derived from its transform and nominal sprite size. The overlap test
//! is a pure function so it can be unit-tested exhaustively.

use bevy::prelude::*;

/// An axis-aligned bounding box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build a box from its centre point and full size.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Build a box from an entity's transform translation and nominal size.
    pub fn from_transform(transform: &Transform, size: Vec2) -> Self {
        Self::from_center_size(transform.translation.truncate(), size)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// A box with zero (or negative) extent on either axis encloses no area
    /// and is treated as colliding with nothing.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

/// True iff the two boxes intersect with strictly positive area.
///
/// Degenerate boxes never overlap anything, including themselves. Boxes that
/// merely share an edge do not overlap.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    if a.is_degenerate() || b.is_degenerate() {
        return false;
    }
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_center_size(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn overlapping_boxes_are_detected() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(4.0, 4.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(8.0, 0.0, 10.0, 10.0);
        let c = boxed(100.0, 0.0, 10.0, 10.0);
        assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        assert_eq!(overlaps(&a, &c), overlaps(&c, &a));
    }

    #[test]
    fn non_degenerate_box_overlaps_itself() {
        let a = boxed(3.0, -7.0, 5.0, 2.0);
        assert!(overlaps(&a, &a));
    }

    #[test]
    fn separated_boxes_do_not_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(20.0, 0.0, 10.0, 10.0);
        let c = boxed(0.0, 20.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn edge_touching_boxes_do_not_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let b = boxed(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn degenerate_boxes_never_overlap() {
        let a = boxed(0.0, 0.0, 10.0, 10.0);
        let zero_width = boxed(0.0, 0.0, 0.0, 10.0);
        let zero_height = boxed(0.0, 0.0, 10.0, 0.0);
        let point = boxed(0.0, 0.0, 0.0, 0.0);
        assert!(!overlaps(&a, &zero_width));
        assert!(!overlaps(&zero_width, &a));
        assert!(!overlaps(&a, &zero_height));
        assert!(!overlaps(&point, &point));
    }

    #[test]
    fn from_transform_tracks_translation() {
        let t = Transform::from_xyz(5.0, -3.0, 0.0);
        let b = Aabb::from_transform(&t, Vec2::new(4.0, 2.0));
        assert_eq!(b.min, Vec2::new(3.0, -4.0));
        assert_eq!(b.max, Vec2::new(7.0, -2.0));
    }
}
