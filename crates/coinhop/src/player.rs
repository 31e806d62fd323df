//! Player controller
//!
//! Per tick, in order:
//! 1. horizontal velocity from held keys ([`apply_held_input`])
//! 2. gravity when airborne, integrate, platform collision, clamp ([`update`])
//!
//! Jumps are edge-triggered and handled separately by [`jump`].

use platform_engine::input::InputSnapshot;
use platform_engine::physics::{CollisionSide, Collider};

use crate::components::{Facing, Platform, Player};
use crate::config::{ControlsConfig, GameConfig, PhysicsConfig};

/// Set horizontal velocity from held keys
///
/// Left wins when both directions are held. No acceleration or friction: the
/// velocity snaps straight to the configured speed or to zero.
pub fn apply_held_input(player: &mut Player, input: &InputSnapshot, controls: &ControlsConfig, physics: &PhysicsConfig) {
    if input.any_held(&controls.left) {
        player.body.velocity.x = -physics.player_speed;
        player.facing = Facing::Left;
    } else if input.any_held(&controls.right) {
        player.body.velocity.x = physics.player_speed;
        player.facing = Facing::Right;
    } else {
        player.body.velocity.x = 0.0;
    }
}

/// Try to jump. Returns true if the jump happened.
///
/// A no-op once `max_jumps` jumps were used since the last landing.
pub fn jump(player: &mut Player, physics: &PhysicsConfig) -> bool {
    if player.jump_count >= player.max_jumps {
        return false;
    }
    player.body.velocity.y = physics.jump_force;
    player.jump_count += 1;
    player.on_ground = false;
    log::trace!("jump {}/{}", player.jump_count, player.max_jumps);
    true
}

/// Advance the player one tick against the level's platforms
pub fn update(player: &mut Player, platforms: &[Platform], config: &GameConfig) {
    if !player.on_ground {
        player.body.velocity.y += config.physics.gravity;
    }

    player.body.advance();

    player.on_ground = false;
    for platform in platforms {
        resolve_platform_collision(player, platform);
    }

    player
        .body
        .clamp_within(config.playfield.width, config.playfield.height);
}

/// Land the player on `platform` if it is falling into its top
///
/// Only the top side is resolved, and only while moving down. Side and
/// underside contacts are left alone, so the player passes through platforms
/// horizontally and from below. Returns true if the player landed.
pub fn resolve_platform_collision(player: &mut Player, platform: &Platform) -> bool {
    let player_box = player.aabb();
    let platform_box = platform.aabb();
    if !player_box.overlaps(&platform_box) {
        return false;
    }

    let penetration = player_box.penetration(&platform_box);
    if penetration.shallowest() == CollisionSide::Top && player.body.velocity.y > 0.0 {
        player.body.position.y = platform_box.top() - player.body.height();
        player.body.velocity.y = 0.0;
        player.on_ground = true;
        player.jump_count = 0;
        return true;
    }
    false
}
