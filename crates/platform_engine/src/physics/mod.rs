//! Physics module for kinematic motion and collision detection
//!
//! Provides a frame-stepped kinematic body and axis-aligned bounding box
//! overlap and penetration tests. Collision *response* is left to the game,
//! which decides which sides it resolves.

pub mod body;
pub mod collision;

pub use body::Body;
pub use collision::{Aabb, Collider, CollisionSide, Penetration, overlaps};
