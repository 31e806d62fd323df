//! Level templates and progression
//!
//! A [`Campaign`] is an ordered list of immutable [`LevelDefinition`]s. The
//! [`LevelManager`] materializes fresh entities from the active template and
//! advances through the campaign as levels are cleared.

use platform_engine::config::Config;
use platform_engine::foundation::math::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::{Coin, Platform, Player};
use crate::config::GameConfig;

/// Level data errors, raised when a level is loaded
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LevelError {
    /// Campaign has no levels
    #[error("campaign contains no levels")]
    EmptyCampaign,

    /// Requested level does not exist
    #[error("level index {index} out of range (campaign has {count} levels)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Levels available
        count: usize,
    },

    /// Level has nothing to stand on
    #[error("level {level} has no platforms")]
    NoPlatforms {
        /// 0-based level index
        level: usize,
    },

    /// Level would be complete the moment it loads
    #[error("level {level} has no coins")]
    NoCoins {
        /// 0-based level index
        level: usize,
    },

    /// Platform width is zero or negative
    #[error("level {level} platform {platform} has non-positive width {width}")]
    InvalidPlatformWidth {
        /// 0-based level index
        level: usize,
        /// Platform position in the level's list
        platform: usize,
        /// Offending width
        width: f32,
    },

    /// Platform position is NaN or infinite
    #[error("level {level} platform {platform} has a non-finite position")]
    NonFinitePlatform {
        /// 0-based level index
        level: usize,
        /// Platform position in the level's list
        platform: usize,
    },

    /// Coin does not fit inside the playfield
    #[error("level {level} coin {coin} at ({x}, {y}) lies outside the playfield")]
    CoinOutOfBounds {
        /// 0-based level index
        level: usize,
        /// Coin position in the level's list
        coin: usize,
        /// Coin x
        x: f32,
        /// Coin y
        y: f32,
    },

    /// Player spawn does not fit inside the playfield
    #[error("level {level} spawn point ({x}, {y}) lies outside the playfield")]
    SpawnOutOfBounds {
        /// 0-based level index
        level: usize,
        /// Spawn x
        x: f32,
        /// Spawn y
        y: f32,
    },
}

/// Platform placement: top-left corner and width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
}

/// Coin placement: top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoinSpec {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
}

/// Player spawn point: top-left corner of the player body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
}

/// Immutable level template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Platforms in draw order
    pub platforms: Vec<PlatformSpec>,
    /// Coins in draw order
    pub coins: Vec<CoinSpec>,
    /// Where the player appears
    pub player_start: SpawnPoint,
}

const fn platform(x: f32, y: f32, width: f32) -> PlatformSpec {
    PlatformSpec { x, y, width }
}

const fn coin(x: f32, y: f32) -> CoinSpec {
    CoinSpec { x, y }
}

impl LevelDefinition {
    /// Check the template against the playfield and entity sizes
    pub fn validate(&self, level: usize, config: &GameConfig) -> Result<(), LevelError> {
        let field = &config.playfield;

        if self.platforms.is_empty() {
            return Err(LevelError::NoPlatforms { level });
        }
        if self.coins.is_empty() {
            return Err(LevelError::NoCoins { level });
        }

        for (index, spec) in self.platforms.iter().enumerate() {
            if !(spec.x.is_finite() && spec.y.is_finite()) {
                return Err(LevelError::NonFinitePlatform { level, platform: index });
            }
            if !(spec.width.is_finite() && spec.width > 0.0) {
                return Err(LevelError::InvalidPlatformWidth {
                    level,
                    platform: index,
                    width: spec.width,
                });
            }
        }

        for (index, spec) in self.coins.iter().enumerate() {
            let fits = spec.x >= 0.0
                && spec.y >= 0.0
                && spec.x + config.coin.size <= field.width
                && spec.y + config.coin.size <= field.height;
            if !fits {
                return Err(LevelError::CoinOutOfBounds {
                    level,
                    coin: index,
                    x: spec.x,
                    y: spec.y,
                });
            }
        }

        let start = self.player_start;
        let spawn_fits = start.x >= 0.0
            && start.y >= 0.0
            && start.x + config.player.width <= field.width
            && start.y + config.player.height <= field.height;
        if !spawn_fits {
            return Err(LevelError::SpawnOutOfBounds {
                level,
                x: start.x,
                y: start.y,
            });
        }

        Ok(())
    }

    /// Build fresh entities from this template
    pub fn instantiate(&self, config: &GameConfig) -> LevelInstance {
        LevelInstance {
            player: Player::new(Vec2::new(self.player_start.x, self.player_start.y), config),
            platforms: self
                .platforms
                .iter()
                .map(|p| Platform::new(p.x, p.y, p.width, config.physics.platform_height))
                .collect(),
            coins: self
                .coins
                .iter()
                .map(|c| Coin::new(c.x, c.y, &config.coin))
                .collect(),
        }
    }
}

/// Live entities of one level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelInstance {
    /// The player
    pub player: Player,
    /// Static platforms
    pub platforms: Vec<Platform>,
    /// Coins, collected or not
    pub coins: Vec<Coin>,
}

impl LevelInstance {
    /// Every coin has been collected
    pub fn all_coins_collected(&self) -> bool {
        self.coins.iter().all(|coin| coin.collected)
    }
}

/// Ordered list of levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// Levels in play order
    pub levels: Vec<LevelDefinition>,
}

impl Default for Campaign {
    fn default() -> Self {
        Self::standard()
    }
}

impl Config for Campaign {}

impl Campaign {
    /// The built-in three-level campaign
    pub fn standard() -> Self {
        Self {
            levels: vec![
                LevelDefinition {
                    name: "Basics".to_string(),
                    platforms: vec![
                        platform(0.0, 500.0, 800.0),
                        platform(300.0, 400.0, 200.0),
                        platform(100.0, 300.0, 200.0),
                        platform(500.0, 200.0, 200.0),
                    ],
                    coins: vec![coin(350.0, 350.0), coin(150.0, 250.0), coin(550.0, 150.0)],
                    player_start: SpawnPoint { x: 100.0, y: 300.0 },
                },
                LevelDefinition {
                    name: "Gaps".to_string(),
                    platforms: vec![
                        platform(0.0, 500.0, 200.0),
                        platform(300.0, 500.0, 200.0),
                        platform(600.0, 500.0, 200.0),
                        platform(150.0, 400.0, 100.0),
                        platform(400.0, 300.0, 100.0),
                        platform(200.0, 200.0, 100.0),
                        platform(500.0, 150.0, 100.0),
                    ],
                    coins: vec![
                        coin(150.0, 350.0),
                        coin(400.0, 250.0),
                        coin(200.0, 150.0),
                        coin(500.0, 100.0),
                    ],
                    player_start: SpawnPoint { x: 50.0, y: 400.0 },
                },
                LevelDefinition {
                    name: "Staircase".to_string(),
                    platforms: vec![
                        platform(0.0, 550.0, 150.0),
                        platform(200.0, 500.0, 100.0),
                        platform(350.0, 450.0, 100.0),
                        platform(500.0, 400.0, 100.0),
                        platform(650.0, 350.0, 150.0),
                        platform(500.0, 300.0, 100.0),
                        platform(350.0, 250.0, 100.0),
                        platform(200.0, 200.0, 100.0),
                        platform(50.0, 150.0, 100.0),
                    ],
                    coins: vec![
                        coin(220.0, 450.0),
                        coin(370.0, 400.0),
                        coin(520.0, 350.0),
                        coin(670.0, 300.0),
                        coin(520.0, 250.0),
                    ],
                    player_start: SpawnPoint { x: 50.0, y: 500.0 },
                },
            ],
        }
    }

    /// Validate every level
    pub fn validate(&self, config: &GameConfig) -> Result<(), LevelError> {
        if self.levels.is_empty() {
            return Err(LevelError::EmptyCampaign);
        }
        self.levels
            .iter()
            .enumerate()
            .try_for_each(|(index, level)| level.validate(index, config))
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// No levels at all
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Result of a completion check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelProgress {
    /// Coins remain
    InProgress,
    /// Level cleared and the next one loaded
    Advanced {
        /// 0-based index of the level just cleared
        completed: usize,
        /// 0-based index of the level now active
        next: usize,
    },
    /// Last level cleared
    GameComplete,
}

/// Walks a validated campaign level by level
#[derive(Debug, Clone)]
pub struct LevelManager {
    campaign: Campaign,
    current: usize,
}

impl LevelManager {
    /// Validate `campaign` and start at its first level
    pub fn new(campaign: Campaign, config: &GameConfig) -> Result<Self, LevelError> {
        campaign.validate(config)?;
        Ok(Self { campaign, current: 0 })
    }

    /// 0-based index of the active level
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// Number of levels in the campaign
    pub fn level_count(&self) -> usize {
        self.campaign.len()
    }

    /// Template of the active level
    pub fn current_level(&self) -> &LevelDefinition {
        &self.campaign.levels[self.current]
    }

    /// The active level is the last one
    pub fn is_last_level(&self) -> bool {
        self.current + 1 >= self.campaign.len()
    }

    /// Make `index` the active level and build its entities
    pub fn load_level(&mut self, index: usize, config: &GameConfig) -> Result<LevelInstance, LevelError> {
        let definition = self.campaign.levels.get(index).ok_or(LevelError::IndexOutOfRange {
            index,
            count: self.campaign.len(),
        })?;
        let instance = definition.instantiate(config);
        self.current = index;
        log::info!(
            "Loaded level {}/{} '{}': {} platforms, {} coins",
            index + 1,
            self.campaign.len(),
            definition.name,
            instance.platforms.len(),
            instance.coins.len()
        );
        Ok(instance)
    }

    /// Advance when every coin of `instance` is collected
    ///
    /// On advance `instance` is replaced by the next level's fresh entities,
    /// discarding the old player together with its coin count.
    pub fn check_level_complete(&mut self, instance: &mut LevelInstance, config: &GameConfig) -> LevelProgress {
        if !instance.all_coins_collected() {
            return LevelProgress::InProgress;
        }
        if self.is_last_level() {
            return LevelProgress::GameComplete;
        }

        let completed = self.current;
        let next = completed + 1;
        // Levels were validated up front, so the next template is present
        *instance = self.campaign.levels[next].instantiate(config);
        self.current = next;
        log::info!("Level {} complete, advancing to level {}", completed + 1, next + 1);
        LevelProgress::Advanced { completed, next }
    }
}
