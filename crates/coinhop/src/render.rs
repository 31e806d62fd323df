//! Presentation snapshots
//!
//! The simulation never draws. After a tick the host asks for a
//! [`RenderState`] and a [`HudState`] and turns them into pixels and text.

use platform_engine::foundation::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::components::Facing;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Color {
    /// Create a color from components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// What a render item depicts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpriteKind {
    /// Static platform rectangle
    Platform,
    /// Uncollected coin
    Coin,
    /// Pickup particle square
    Particle,
    /// The player, with the side its eyes look toward
    Player {
        /// Facing direction
        facing: Facing,
    },
}

/// One thing to draw
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    /// Kind of sprite
    pub kind: SpriteKind,
    /// Top-left corner
    pub position: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Fill color
    pub color: Color,
    /// Opacity in `[0, 1]`
    pub alpha: f32,
}

/// The "drawable" capability: produce a render item, or nothing when hidden
pub trait Drawable {
    /// Render item for the current state
    fn render_item(&self) -> Option<RenderItem>;
}

/// Everything visible this frame, in draw order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    /// Items back to front
    pub items: Vec<RenderItem>,
}

impl RenderState {
    /// Collect items from a sequence of drawables, skipping hidden ones
    pub fn extend_from<'a, D, I>(&mut self, drawables: I)
    where
        D: Drawable + 'a,
        I: IntoIterator<Item = &'a D>,
    {
        self.items.extend(drawables.into_iter().filter_map(|drawable| drawable.render_item()));
    }

    /// Count items of a given kind
    pub fn count(&self, matches: impl Fn(&SpriteKind) -> bool) -> usize {
        self.items.iter().filter(|item| matches(&item.kind)).count()
    }
}

/// Values shown on the heads-up display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudState {
    /// Player health
    pub health: u32,
    /// Coins collected on the current level
    pub coins: u32,
    /// 1-based number of the current level
    pub level: usize,
    /// Number of levels in the campaign
    pub level_count: usize,
    /// Transient banner text, if one is showing
    pub notification: Option<String>,
}

impl HudState {
    /// "Level N/M" label
    pub fn level_label(&self) -> String {
        format!("Level: {}/{}", self.level, self.level_count)
    }
}
