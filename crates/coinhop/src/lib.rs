//! # Coinhop
//!
//! A three-level coin collecting platformer. The player runs, double-jumps
//! onto platforms, and clears a level by collecting every coin on it.
//!
//! The crate is the simulation only. A host feeds input snapshots to
//! [`GameSession::tick`] once per frame and presents the returned HUD values,
//! events and render state however it likes.
//!
//! ```rust
//! use coinhop::prelude::*;
//!
//! let mut game = GameSession::standard().unwrap();
//! let output = game.tick(&InputSnapshot::empty().with_held(KeyCode::ArrowRight));
//! assert_eq!(output.hud.level, 1);
//! assert_eq!(game.player().body.velocity.x, 5.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod components;
pub mod config;
pub mod levels;
pub mod particles;
pub mod player;
pub mod render;
pub mod session;

pub use session::{FrameOutput, GameError, GameEvent, GameMode, GameSession, GameStatus};

/// Common imports for hosts
pub mod prelude {
    pub use crate::{
        components::{Coin, Facing, Platform, Player},
        config::GameConfig,
        levels::{Campaign, LevelDefinition, LevelError, LevelProgress},
        render::{HudState, RenderState, SpriteKind},
        session::{cues, FrameOutput, GameError, GameEvent, GameMode, GameSession, GameStatus},
    };
    pub use platform_engine::prelude::*;
}
