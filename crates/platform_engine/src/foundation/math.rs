//! Math utilities and types
//!
//! Screen-space 2D math. The y axis points down: larger y is lower on screen.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Math utility functions
pub mod utils {
    /// Clamp a value into `[0, upper]`.
    ///
    /// When `upper` is negative the lower bound wins, so an object larger than
    /// its field is pinned to the origin instead of producing a negative position.
    pub fn clamp_to_field(value: f32, upper: f32) -> f32 {
        value.min(upper).max(0.0)
    }
}
