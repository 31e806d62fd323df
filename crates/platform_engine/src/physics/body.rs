//! Kinematic body shared by every moving or static thing in a level
//!
//! A body is a rectangle with a velocity. It has no mass, no forces and no
//! bounds checking: callers apply gravity, collision and clamping themselves.

use crate::foundation::math::{utils, Vec2};
use super::collision::{Aabb, Collider};

/// Position, size and velocity of an axis-aligned rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Top-left corner in screen space
    pub position: Vec2,

    /// Velocity in units per tick
    pub velocity: Vec2,

    size: Vec2,
}

impl Body {
    /// Create a body at rest
    ///
    /// Negative size components are treated as zero.
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
            size: Vec2::new(size.x.max(0.0), size.y.max(0.0)),
        }
    }

    /// Width and height. Fixed for the lifetime of the body.
    pub const fn size(&self) -> Vec2 {
        self.size
    }

    /// Width
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Height
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    /// Integrate velocity into position for one tick
    pub fn advance(&mut self) {
        self.position += self.velocity;
    }

    /// Clamp the body inside a `width` x `height` field anchored at the origin
    ///
    /// Only position is touched; velocity is left as is.
    pub fn clamp_within(&mut self, width: f32, height: f32) {
        self.position.x = utils::clamp_to_field(self.position.x, width - self.size.x);
        self.position.y = utils::clamp_to_field(self.position.y, height - self.size.y);
    }

    /// Bounding box at the current position
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }
}

impl Collider for Body {
    fn aabb(&self) -> Aabb {
        Body::aabb(self)
    }
}
