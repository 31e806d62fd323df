//! # Platform Engine
//!
//! A small engine for frame-stepped 2D platformer simulations.
//!
//! ## Features
//!
//! - **Kinematic Bodies**: position/size/velocity integrated once per tick
//! - **AABB Collision**: strict overlap tests and per-side penetration depths
//! - **Input Tracking**: held-key state plus edge-triggered presses
//! - **Events**: immediate and tick-deferred event delivery
//! - **Configuration**: TOML/RON backed configuration files
//!
//! The engine owns no scheduling primitive. A host drives the simulation by
//! calling a step function once per frame and presents whatever it returns.
//!
//! ## Quick Start
//!
//! ```rust
//! use platform_engine::prelude::*;
//!
//! let mut body = Body::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
//! body.velocity = Vec2::new(2.0, 1.0);
//! body.advance();
//! assert_eq!(body.position, Vec2::new(2.0, 1.0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod physics;
pub mod config;
pub mod events;
pub mod input;
pub mod audio;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        foundation::math::Vec2,
        physics::{Aabb, Body, Collider, CollisionSide, Penetration, overlaps},
        config::{Config, ConfigError, ConfigFormat},
        events::EventQueue,
        input::{InputManager, InputSnapshot, KeyCode},
        audio::{AudioError, AudioSink, LogAudioSink},
    };
}
