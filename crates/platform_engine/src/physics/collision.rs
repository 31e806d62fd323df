//! Axis-aligned bounding box collision
//!
//! Overlap uses strict inequalities on all four half-plane tests, so boxes
//! that only share an edge do not collide.

use crate::foundation::math::Vec2;

/// Anything that occupies an axis-aligned rectangle
pub trait Collider {
    /// Current bounding box
    fn aabb(&self) -> Aabb;
}

/// Test two colliders for overlap
pub fn overlaps<A: Collider + ?Sized, B: Collider + ?Sized>(a: &A, b: &B) -> bool {
    a.aabb().overlaps(&b.aabb())
}

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Aabb {
    /// Create a box from its top-left corner and size
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Left edge
    pub fn left(&self) -> f32 {
        self.min.x
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    /// Top edge
    pub fn top(&self) -> f32 {
        self.min.y
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Strict overlap test. Touching edges do not count.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Penetration depths of `self` into `other` along each side of `other`
    ///
    /// Only meaningful when the boxes overlap.
    pub fn penetration(&self, other: &Aabb) -> Penetration {
        Penetration {
            from_top: self.bottom() - other.top(),
            from_bottom: other.bottom() - self.top(),
            from_left: self.right() - other.left(),
            from_right: other.right() - self.left(),
        }
    }
}

/// Side of a static box that a moving box entered through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionSide {
    /// Entered from above
    Top,
    /// Entered from below
    Bottom,
    /// Entered from the left
    Left,
    /// Entered from the right
    Right,
}

/// Per-side overlap distances between two intersecting boxes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Penetration {
    /// Mover's bottom below the obstacle's top
    pub from_top: f32,
    /// Obstacle's bottom below the mover's top
    pub from_bottom: f32,
    /// Mover's right edge past the obstacle's left edge
    pub from_left: f32,
    /// Obstacle's right edge past the mover's left edge
    pub from_right: f32,
}

impl Penetration {
    /// Smallest of the four depths
    pub fn min_depth(&self) -> f32 {
        self.from_top
            .min(self.from_bottom)
            .min(self.from_left)
            .min(self.from_right)
    }

    /// Side with the shallowest penetration
    ///
    /// Ties resolve in the order Top, Bottom, Left, Right.
    pub fn shallowest(&self) -> CollisionSide {
        let min = self.min_depth();
        if self.from_top == min {
            CollisionSide::Top
        } else if self.from_bottom == min {
            CollisionSide::Bottom
        } else if self.from_left == min {
            CollisionSide::Left
        } else {
            CollisionSide::Right
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&rect(0.0, 10.0, 10.0, 10.0)));
        assert!(!a.overlaps(&rect(-10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&rect(0.0, -10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_containment_overlaps() {
        let player = rect(340.0, 330.0, 40.0, 60.0);
        let coin = rect(350.0, 350.0, 20.0, 20.0);
        assert!(player.overlaps(&coin));
    }

    #[test]
    fn test_penetration_depths() {
        let player = rect(100.0, 241.5, 40.0, 60.0);
        let platform = rect(100.0, 300.0, 200.0, 20.0);
        let pen = player.penetration(&platform);
        assert_relative_eq!(pen.from_top, 1.5);
        assert_relative_eq!(pen.from_bottom, 78.5);
        assert_relative_eq!(pen.from_left, 40.0);
        assert_relative_eq!(pen.from_right, 200.0);
        assert_eq!(pen.shallowest(), CollisionSide::Top);
    }

    #[test]
    fn test_shallowest_from_below() {
        let player = rect(100.0, 303.5, 40.0, 60.0);
        let platform = rect(100.0, 300.0, 200.0, 20.0);
        assert_eq!(player.penetration(&platform).shallowest(), CollisionSide::Bottom);
    }

    #[test]
    fn test_shallowest_sides() {
        let platform = rect(100.0, 300.0, 200.0, 20.0);
        let from_left = rect(62.0, 290.0, 40.0, 60.0);
        assert_eq!(from_left.penetration(&platform).shallowest(), CollisionSide::Left);
        let from_right = rect(298.0, 290.0, 40.0, 60.0);
        assert_eq!(from_right.penetration(&platform).shallowest(), CollisionSide::Right);
    }

    #[test]
    fn test_tie_prefers_top() {
        let pen = Penetration {
            from_top: 2.0,
            from_bottom: 2.0,
            from_left: 2.0,
            from_right: 2.0,
        };
        assert_eq!(pen.shallowest(), CollisionSide::Top);
    }

    #[test]
    fn test_collider_overlap_helper() {
        struct Fixed(Aabb);
        impl Collider for Fixed {
            fn aabb(&self) -> Aabb {
                self.0
            }
        }
        let a = Fixed(rect(0.0, 0.0, 4.0, 4.0));
        let b = Fixed(rect(3.0, 3.0, 4.0, 4.0));
        let c = Fixed(rect(4.0, 0.0, 4.0, 4.0));
        assert!(overlaps(&a, &b));
        assert!(!overlaps(&a, &c));
    }
}
