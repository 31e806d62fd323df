//! Game session and the per-frame step
//!
//! The host owns scheduling: it calls [`GameSession::tick`] once per frame
//! with an input snapshot, applies the returned HUD values and events, and
//! draws [`GameSession::render_state`]. One tick is one fixed physics step;
//! nothing is scaled by elapsed time.
//!
//! Tick order:
//! 1. fresh jump press
//! 2. held-key movement
//! 3. player gravity, integration, platform landing, clamping
//! 4. coin bob
//! 5. coin pickups (score, particle bursts)
//! 6. level completion (advance or finish the campaign)
//! 7. particle motion and eviction
//! 8. event delivery

use platform_engine::config::ConfigError;
use platform_engine::events::EventQueue;
use platform_engine::input::InputSnapshot;
use platform_engine::physics::overlaps;
use thiserror::Error;

use crate::components::{Coin, Platform, Player};
use crate::config::GameConfig;
use crate::levels::{Campaign, LevelError, LevelInstance, LevelManager, LevelProgress};
use crate::particles::ParticlePool;
use crate::player;
use crate::render::{HudState, RenderState};

/// Session construction errors
#[derive(Error, Debug)]
pub enum GameError {
    /// Bad configuration values
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Bad level data
    #[error("Level error: {0}")]
    Level(#[from] LevelError),
}

/// Names of the sound cues a host may register
pub mod cues {
    /// Successful jump
    pub const JUMP: &str = "jump";
    /// Coin picked up
    pub const COIN: &str = "coin";
    /// Player hurt. Registered for hosts but never emitted.
    pub const HIT: &str = "hit";
}

/// How the session was started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// One local player
    #[default]
    SinglePlayer,
    /// Flag only; plays exactly like single player
    Multiplayer,
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Levels remain
    Playing,
    /// Every level cleared; gameplay is frozen
    GameComplete,
}

/// Things that happened during a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The player jumped
    Jumped,
    /// A coin was picked up
    CoinCollected {
        /// 0-based level index
        level: usize,
        /// Player's coin count after the pickup
        coins: u32,
    },
    /// A level was cleared and the next one loaded
    LevelComplete {
        /// 0-based index of the cleared level
        completed: usize,
        /// 0-based index of the new level
        next: usize,
    },
    /// The final level was cleared
    GameComplete,
    /// The "level complete" banner timed out
    NotificationDismissed {
        /// Tick the banner was shown on
        shown_at: u64,
    },
}

impl GameEvent {
    /// Sound cue to play for this event, if any
    pub const fn sound_cue(&self) -> Option<&'static str> {
        match self {
            Self::Jumped => Some(cues::JUMP),
            Self::CoinCollected { .. } => Some(cues::COIN),
            _ => None,
        }
    }
}

/// Everything the host needs after a tick
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Tick number, starting at 1
    pub tick: u64,
    /// HUD values
    pub hud: HudState,
    /// Events delivered this tick
    pub events: Vec<GameEvent>,
    /// Lifecycle after this tick
    pub status: GameStatus,
}

#[derive(Debug, Clone)]
struct Notification {
    text: String,
    shown_at: u64,
}

/// A running game
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    levels: LevelManager,
    level: LevelInstance,
    particles: ParticlePool,
    events: EventQueue<GameEvent>,
    notification: Option<Notification>,
    mode: GameMode,
    status: GameStatus,
    tick: u64,
}

impl GameSession {
    /// Validate inputs and load the first level
    pub fn new(config: GameConfig, campaign: Campaign, mode: GameMode) -> Result<Self, GameError> {
        config.validate()?;
        let mut levels = LevelManager::new(campaign, &config)?;
        let level = levels.load_level(0, &config)?;
        let particles = ParticlePool::new(config.particles.seed);

        log::info!("Starting {:?} session with {} levels", mode, levels.level_count());
        if mode == GameMode::Multiplayer {
            log::warn!("Multiplayer has no network transport; playing locally");
        }

        Ok(Self {
            config,
            levels,
            level,
            particles,
            events: EventQueue::new(),
            notification: None,
            mode,
            status: GameStatus::Playing,
            tick: 0,
        })
    }

    /// Default config, built-in campaign, single player
    pub fn standard() -> Result<Self, GameError> {
        Self::new(GameConfig::default(), Campaign::standard(), GameMode::SinglePlayer)
    }

    /// Run one frame
    pub fn tick(&mut self, input: &InputSnapshot) -> FrameOutput {
        self.tick += 1;

        if self.status == GameStatus::Playing {
            self.step_gameplay(input);
        }

        self.particles.update(&self.config.particles);

        let events = self.events.drain(self.tick);
        for event in &events {
            if let GameEvent::NotificationDismissed { shown_at } = event {
                if self.notification.as_ref().is_some_and(|n| n.shown_at == *shown_at) {
                    self.notification = None;
                }
            }
        }

        FrameOutput {
            tick: self.tick,
            hud: self.hud(),
            events,
            status: self.status,
        }
    }

    fn step_gameplay(&mut self, input: &InputSnapshot) {
        let config = &self.config;
        let hero = &mut self.level.player;

        if input.any_pressed(&config.controls.jump) && player::jump(hero, &config.physics) {
            self.events.send(GameEvent::Jumped);
        }
        player::apply_held_input(hero, input, &config.controls, &config.physics);
        player::update(hero, &self.level.platforms, config);

        for coin in &mut self.level.coins {
            coin.update(&config.coin);
        }

        self.check_coin_pickups();
        self.check_level_complete();
    }

    /// Collect every uncollected coin the player overlaps. Returns the number picked up.
    pub fn check_coin_pickups(&mut self) -> usize {
        let mut picked = 0;
        let hero = &mut self.level.player;

        for coin in self.level.coins.iter_mut().filter(|coin| !coin.collected) {
            if !overlaps(&*hero, &*coin) {
                continue;
            }
            coin.collect();
            hero.coins += 1;
            picked += 1;

            self.particles
                .burst(coin.body.center(), self.config.particles.color, &self.config.particles);
            self.events.send(GameEvent::CoinCollected {
                level: self.levels.current_index(),
                coins: hero.coins,
            });
            log::debug!(
                "Coin collected at ({:.1}, {:.1}), {} this level",
                coin.body.position.x,
                coin.body.position.y,
                hero.coins
            );
        }

        picked
    }

    /// Advance or finish the campaign once every coin is collected
    pub fn check_level_complete(&mut self) -> LevelProgress {
        if self.status == GameStatus::GameComplete {
            return LevelProgress::GameComplete;
        }

        let progress = self.levels.check_level_complete(&mut self.level, &self.config);
        match progress {
            LevelProgress::InProgress => {}
            LevelProgress::Advanced { completed, next } => {
                self.events.send(GameEvent::LevelComplete { completed, next });
                self.notification = Some(Notification {
                    text: format!("Level {} complete!", completed + 1),
                    shown_at: self.tick,
                });
                self.events.post(
                    self.tick.saturating_add(self.config.presentation.notification_ticks),
                    GameEvent::NotificationDismissed { shown_at: self.tick },
                );
            }
            LevelProgress::GameComplete => {
                self.status = GameStatus::GameComplete;
                self.events.send(GameEvent::GameComplete);
                log::info!("All {} levels complete", self.levels.level_count());
            }
        }
        progress
    }

    /// Current HUD values
    pub fn hud(&self) -> HudState {
        HudState {
            health: self.level.player.health,
            coins: self.level.player.coins,
            level: self.levels.current_index() + 1,
            level_count: self.levels.level_count(),
            notification: self.notification.as_ref().map(|n| n.text.clone()),
        }
    }

    /// Visible entities: platforms, uncollected coins, particles, then the player
    pub fn render_state(&self) -> RenderState {
        let mut state = RenderState::default();
        state.extend_from(&self.level.platforms);
        state.extend_from(&self.level.coins);
        state.extend_from(self.particles.particles());
        state.extend_from(std::iter::once(&self.level.player));
        state
    }

    /// The player
    pub const fn player(&self) -> &Player {
        &self.level.player
    }

    /// Platforms of the active level
    pub fn platforms(&self) -> &[Platform] {
        &self.level.platforms
    }

    /// Coins of the active level
    pub fn coins(&self) -> &[Coin] {
        &self.level.coins
    }

    /// Live particles
    pub const fn particles(&self) -> &ParticlePool {
        &self.particles
    }

    /// 0-based index of the active level
    pub const fn current_level(&self) -> usize {
        self.levels.current_index()
    }

    /// Display name of the active level
    pub fn level_name(&self) -> &str {
        &self.levels.current_level().name
    }

    /// Lifecycle status
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Mode chosen at start
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Ticks run so far
    pub const fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Active configuration
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Facing;
    use crate::render::SpriteKind;
    use platform_engine::foundation::math::Vec2;
    use platform_engine::input::KeyCode;

    fn session() -> GameSession {
        let mut config = GameConfig::default();
        config.particles.seed = Some(42);
        GameSession::new(config, Campaign::standard(), GameMode::SinglePlayer).unwrap()
    }

    #[test]
    fn test_new_session_loads_first_level() {
        let game = session();
        assert_eq!(game.current_level(), 0);
        assert_eq!(game.level_name(), "Basics");
        assert_eq!(game.player().body.position, Vec2::new(100.0, 300.0));
        assert_eq!(game.platforms().len(), 4);
        assert_eq!(game.coins().len(), 3);
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.particles().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GameConfig::default();
        config.physics.max_jumps = 0;
        let result = GameSession::new(config, Campaign::standard(), GameMode::SinglePlayer);
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_non_finite_particle_speed_rejected_at_start() {
        let mut config = GameConfig::default();
        config.particles.speed = f32::INFINITY;
        let result = GameSession::new(config, Campaign::standard(), GameMode::SinglePlayer);
        assert!(matches!(result, Err(GameError::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn test_coin_pickup_scenario() {
        let mut game = session();
        game.level.player.body.position = Vec2::new(340.0, 330.0);

        assert_eq!(game.check_coin_pickups(), 1);

        assert!(game.coins()[0].collected);
        assert_eq!(game.player().coins, 1);
        assert_eq!(game.particles().len(), 10);
        assert!(game
            .particles()
            .particles()
            .iter()
            .all(|p| p.position == Vec2::new(360.0, 360.0)));
    }

    #[test]
    fn test_coin_pickup_is_idempotent() {
        let mut game = session();
        game.level.player.body.position = Vec2::new(340.0, 330.0);
        assert_eq!(game.check_coin_pickups(), 1);
        assert_eq!(game.check_coin_pickups(), 0);
        assert_eq!(game.check_coin_pickups(), 0);
        assert_eq!(game.player().coins, 1);
        assert_eq!(game.particles().len(), 10);
    }

    #[test]
    fn test_jump_emits_event_once_per_press() {
        let mut game = session();
        let press = InputSnapshot::empty().with_pressed(KeyCode::W);
        let hold = InputSnapshot::empty().with_held(KeyCode::W);

        let output = game.tick(&press);
        assert!(output.events.contains(&GameEvent::Jumped));
        assert_eq!(game.player().jump_count, 1);

        let output = game.tick(&hold);
        assert!(!output.events.contains(&GameEvent::Jumped));
        assert_eq!(game.player().jump_count, 1);
    }

    #[test]
    fn test_level_complete_notification_expires() {
        let mut game = session();
        for coin in &mut game.level.coins {
            coin.collect();
        }

        let output = game.tick(&InputSnapshot::empty());
        assert!(output
            .events
            .contains(&GameEvent::LevelComplete { completed: 0, next: 1 }));
        assert_eq!(output.hud.level, 2);
        assert_eq!(output.hud.coins, 0);
        assert_eq!(output.hud.notification.as_deref(), Some("Level 1 complete!"));
        assert_eq!(game.level_name(), "Gaps");

        let shown_at = output.tick;
        let mut dismissed_at = None;
        for _ in 0..200 {
            let output = game.tick(&InputSnapshot::empty());
            if output.events.contains(&GameEvent::NotificationDismissed { shown_at }) {
                assert!(output.hud.notification.is_none());
                dismissed_at = Some(output.tick);
                break;
            }
            assert!(output.hud.notification.is_some());
        }
        assert_eq!(dismissed_at, Some(shown_at + 120));
    }

    #[test]
    fn test_game_complete_is_terminal() {
        let mut game = session();
        for _ in 0..2 {
            for coin in &mut game.level.coins {
                coin.collect();
            }
            game.tick(&InputSnapshot::empty());
        }
        assert_eq!(game.current_level(), 2);

        for coin in &mut game.level.coins {
            coin.collect();
        }
        let output = game.tick(&InputSnapshot::empty());
        assert_eq!(output.status, GameStatus::GameComplete);
        assert!(output.events.contains(&GameEvent::GameComplete));

        let frozen = game.player().clone();
        let output = game.tick(&InputSnapshot::empty().with_pressed(KeyCode::W));
        assert_eq!(output.status, GameStatus::GameComplete);
        assert!(output.events.is_empty());
        assert_eq!(game.player(), &frozen);
        assert_eq!(game.current_level(), 2);
    }

    #[test]
    fn test_render_order() {
        let mut game = session();
        game.level.player.body.position = Vec2::new(340.0, 330.0);
        game.check_coin_pickups();

        let state = game.render_state();
        let platforms = 4;
        let coins = 2;
        let particles = 10;
        assert_eq!(state.items.len(), platforms + coins + particles + 1);
        assert!(matches!(
            state.items.last().map(|item| item.kind),
            Some(SpriteKind::Player { .. })
        ));
        assert_eq!(state.items[0].kind, SpriteKind::Platform);
    }

    #[test]
    fn test_player_sprite_follows_facing() {
        let mut game = session();
        let player_kind = |game: &GameSession| game.render_state().items.last().map(|item| item.kind);
        assert_eq!(
            player_kind(&game),
            Some(SpriteKind::Player { facing: Facing::Right })
        );

        game.tick(&InputSnapshot::empty().with_held(KeyCode::ArrowLeft));
        assert_eq!(
            player_kind(&game),
            Some(SpriteKind::Player { facing: Facing::Left })
        );

        // Releasing every key keeps the last direction
        game.tick(&InputSnapshot::empty());
        assert_eq!(
            player_kind(&game),
            Some(SpriteKind::Player { facing: Facing::Left })
        );
    }

    #[test]
    fn test_sound_cues() {
        assert_eq!(GameEvent::Jumped.sound_cue(), Some(cues::JUMP));
        assert_eq!(GameEvent::CoinCollected { level: 0, coins: 1 }.sound_cue(), Some(cues::COIN));
        assert_eq!(GameEvent::GameComplete.sound_cue(), None);
    }
}
