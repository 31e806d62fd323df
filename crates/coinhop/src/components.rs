//! Game entities
//!
//! Player, platforms and coins share a [`Body`] for position, size and
//! velocity and add their own state on top. All three are colliders and
//! drawables.

use platform_engine::foundation::math::Vec2;
use platform_engine::physics::{Aabb, Body, Collider};

use crate::config::{CoinConfig, GameConfig};
use crate::render::{Color, Drawable, RenderItem, SpriteKind};

/// Horizontal facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// Looking left
    Left,
    /// Looking right
    #[default]
    Right,
}

/// Player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Motion state
    pub body: Body,

    /// Health (display only)
    pub health: u32,

    /// Coins collected on the current level
    pub coins: u32,

    /// Standing on a platform after this tick's collision pass
    pub on_ground: bool,

    /// Last horizontal direction moved
    pub facing: Facing,

    /// Jumps used since last landing
    pub jump_count: u32,

    /// Jumps allowed between landings
    pub max_jumps: u32,

    /// Body color
    pub color: Color,
}

impl Player {
    /// Spawn a fresh player at `spawn`
    pub fn new(spawn: Vec2, config: &GameConfig) -> Self {
        Self {
            body: Body::new(spawn, Vec2::new(config.player.width, config.player.height)),
            health: config.player.health,
            coins: 0,
            on_ground: false,
            facing: Facing::Right,
            jump_count: 0,
            max_jumps: config.physics.max_jumps,
            color: config.player.color,
        }
    }
}

impl Collider for Player {
    fn aabb(&self) -> Aabb {
        self.body.aabb()
    }
}

impl Drawable for Player {
    fn render_item(&self) -> Option<RenderItem> {
        Some(RenderItem {
            kind: SpriteKind::Player { facing: self.facing },
            position: self.body.position,
            size: self.body.size(),
            color: self.color,
            alpha: 1.0,
        })
    }
}

/// Immovable platform
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    body: Body,
}

impl Platform {
    /// Platform color
    pub const COLOR: Color = Color::rgb(0x27, 0xae, 0x60);

    /// Create a platform; `height` is the shared platform height from the physics config
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            body: Body::new(Vec2::new(x, y), Vec2::new(width, height)),
        }
    }

    /// Motion state; velocity is always zero
    pub const fn body(&self) -> &Body {
        &self.body
    }
}

impl Collider for Platform {
    fn aabb(&self) -> Aabb {
        self.body.aabb()
    }
}

impl Drawable for Platform {
    fn render_item(&self) -> Option<RenderItem> {
        Some(RenderItem {
            kind: SpriteKind::Platform,
            position: self.body.position,
            size: self.body.size(),
            color: Self::COLOR,
            alpha: 1.0,
        })
    }
}

/// Collectible coin
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    /// Motion state
    pub body: Body,

    /// Picked up; never reverts
    pub collected: bool,

    /// Accumulated bob phase in radians
    pub bob_phase: f32,

    /// Coin color
    pub color: Color,
}

impl Coin {
    /// Create an uncollected coin with its top-left corner at (`x`, `y`)
    pub fn new(x: f32, y: f32, config: &CoinConfig) -> Self {
        Self {
            body: Body::new(Vec2::new(x, y), Vec2::new(config.size, config.size)),
            collected: false,
            bob_phase: 0.0,
            color: config.color,
        }
    }

    /// Advance the idle bob by one tick
    ///
    /// The sine offset is added to the current y, not to a fixed baseline, so
    /// the coin drifts around its spawn height rather than oscillating about it.
    pub fn update(&mut self, config: &CoinConfig) {
        self.bob_phase += config.bob_speed;
        self.body.position.y += self.bob_phase.sin() * config.bob_amplitude;
    }

    /// Mark collected. Returns false if it already was.
    pub fn collect(&mut self) -> bool {
        !std::mem::replace(&mut self.collected, true)
    }
}

impl Collider for Coin {
    fn aabb(&self) -> Aabb {
        self.body.aabb()
    }
}

impl Drawable for Coin {
    fn render_item(&self) -> Option<RenderItem> {
        (!self.collected).then(|| RenderItem {
            kind: SpriteKind::Coin,
            position: self.body.position,
            size: self.body.size(),
            color: self.color,
            alpha: 1.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_player_spawn_state() {
        let config = GameConfig::default();
        let player = Player::new(Vec2::new(100.0, 300.0), &config);
        assert_eq!(player.body.position, Vec2::new(100.0, 300.0));
        assert_eq!(player.body.size(), Vec2::new(40.0, 60.0));
        assert_eq!(player.health, 100);
        assert_eq!(player.coins, 0);
        assert_eq!(player.jump_count, 0);
        assert_eq!(player.max_jumps, 2);
        assert!(!player.on_ground);
        assert_eq!(player.facing, Facing::Right);
    }

    #[test]
    fn test_platform_is_static() {
        let platform = Platform::new(300.0, 400.0, 200.0, 20.0);
        assert_eq!(platform.body().velocity, Vec2::zeros());
        assert_eq!(platform.aabb().bottom(), 420.0);
    }

    #[test]
    fn test_coin_bob_accumulates_onto_position() {
        let config = CoinConfig::default();
        let mut coin = Coin::new(350.0, 350.0, &config);

        coin.update(&config);
        assert_relative_eq!(coin.bob_phase, 0.05);
        assert_relative_eq!(coin.body.position.y, 350.0 + 0.05_f32.sin() * 0.5);

        coin.update(&config);
        assert_relative_eq!(coin.bob_phase, 0.1);
        assert_relative_eq!(
            coin.body.position.y,
            350.0 + 0.05_f32.sin() * 0.5 + 0.1_f32.sin() * 0.5,
            epsilon = 1e-4
        );
        assert_eq!(coin.body.position.x, 350.0);
    }

    #[test]
    fn test_coin_collect_is_one_way() {
        let mut coin = Coin::new(0.0, 0.0, &CoinConfig::default());
        assert!(coin.collect());
        assert!(!coin.collect());
        assert!(coin.collected);
    }

    #[test]
    fn test_collected_coin_not_drawn() {
        let mut coin = Coin::new(0.0, 0.0, &CoinConfig::default());
        assert!(coin.render_item().is_some());
        coin.collect();
        assert!(coin.render_item().is_none());
    }
}
