//! Game configuration
//!
//! Every tunable constant of the simulation lives here and is handed to the
//! session at construction. Files may set any subset of fields; the rest keep
//! their defaults.

use std::path::Path;

use platform_engine::config::{Config, ConfigError};
use platform_engine::input::KeyCode;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Longest accepted notification display, one hour at 60 ticks per second
pub const MAX_NOTIFICATION_TICKS: u64 = 60 * 60 * 60;

/// Game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player motion constants
    pub physics: PhysicsConfig,

    /// Player body and starting stats
    pub player: PlayerConfig,

    /// Coin size and bobbing
    pub coin: CoinConfig,

    /// Pickup particle bursts
    pub particles: ParticleConfig,

    /// Playfield bounds used for clamping and level validation
    pub playfield: PlayfieldConfig,

    /// Presentation timings reported to the host
    pub presentation: PresentationConfig,

    /// Key bindings
    pub controls: ControlsConfig,
}

/// Player motion constants, all per tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to vertical velocity each airborne tick
    pub gravity: f32,

    /// Vertical velocity set by a jump (negative is up)
    pub jump_force: f32,

    /// Horizontal speed while a direction is held
    pub player_speed: f32,

    /// Jumps allowed before touching ground again
    pub max_jumps: u32,

    /// Height of every platform
    pub platform_height: f32,
}

/// Player body and starting stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Body width
    pub width: f32,

    /// Body height
    pub height: f32,

    /// Starting health (display only)
    pub health: u32,

    /// Body color
    pub color: Color,
}

/// Coin size and idle motion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinConfig {
    /// Edge length of the square coin
    pub size: f32,

    /// Phase advance per tick
    pub bob_speed: f32,

    /// Scale of the per-tick sine offset
    pub bob_amplitude: f32,

    /// Coin color
    pub color: Color,
}

/// Pickup particle bursts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Particles spawned per coin pickup
    pub burst_count: usize,

    /// Smallest particle size
    pub size_min: f32,

    /// Largest particle size
    pub size_max: f32,

    /// Maximum initial speed per axis, in either direction
    pub speed: f32,

    /// Added to vertical velocity each tick
    pub gravity: f32,

    /// Life lost each tick (life starts at 1.0)
    pub decay: f32,

    /// Burst color for coin pickups
    pub color: Color,

    /// Fixed RNG seed for reproducible bursts; entropy-seeded when absent
    pub seed: Option<u64>,
}

/// Playfield bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    /// Field width
    pub width: f32,

    /// Field height
    pub height: f32,
}

/// Presentation timings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    /// Ticks a "level complete" notification stays visible
    pub notification_ticks: u64,
}

/// Key bindings; any listed key triggers the action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Move left
    pub left: Vec<KeyCode>,

    /// Move right
    pub right: Vec<KeyCode>,

    /// Jump (edge-triggered)
    pub jump: Vec<KeyCode>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_force: -12.0,
            player_speed: 5.0,
            max_jumps: 2,
            platform_height: 20.0,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 60.0,
            health: 100,
            color: Color::rgb(0x34, 0x98, 0xdb),
        }
    }
}

impl Default for CoinConfig {
    fn default() -> Self {
        Self {
            size: 20.0,
            bob_speed: 0.05,
            bob_amplitude: 0.5,
            color: Color::rgb(255, 215, 0),
        }
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            burst_count: 10,
            size_min: 2.0,
            size_max: 6.0,
            speed: 3.0,
            gravity: 0.1,
            decay: 0.02,
            color: Color::rgb(255, 215, 0),
            seed: None,
        }
    }
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        // 2 seconds at 60 Hz
        Self { notification_ticks: 120 }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            left: vec![KeyCode::ArrowLeft, KeyCode::A],
            right: vec![KeyCode::ArrowRight, KeyCode::D],
            jump: vec![KeyCode::ArrowUp, KeyCode::W],
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load configuration from `path`, or return defaults if the file doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let config = Self::load_from_file(path)?;
        config.validate()?;
        log::info!("Loaded game config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    ///
    /// TOML and RON both accept `nan` and `inf`, so every float is checked for
    /// finiteness before its range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        let floats = [
            ("physics.gravity", self.physics.gravity),
            ("physics.jump_force", self.physics.jump_force),
            ("physics.player_speed", self.physics.player_speed),
            ("physics.platform_height", self.physics.platform_height),
            ("player.width", self.player.width),
            ("player.height", self.player.height),
            ("coin.size", self.coin.size),
            ("coin.bob_speed", self.coin.bob_speed),
            ("coin.bob_amplitude", self.coin.bob_amplitude),
            ("particles.size_min", self.particles.size_min),
            ("particles.size_max", self.particles.size_max),
            ("particles.speed", self.particles.speed),
            ("particles.gravity", self.particles.gravity),
            ("particles.decay", self.particles.decay),
            ("playfield.width", self.playfield.width),
            ("playfield.height", self.playfield.height),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::Invalid(format!("{name} must be a finite number")));
        }

        if self.playfield.width <= 0.0 || self.playfield.height <= 0.0 {
            return invalid("playfield must have positive width and height");
        }
        if self.player.width <= 0.0 || self.player.height <= 0.0 {
            return invalid("player must have positive width and height");
        }
        if self.player.width > self.playfield.width || self.player.height > self.playfield.height {
            return invalid("player does not fit inside the playfield");
        }
        if self.coin.size <= 0.0 {
            return invalid("coin size must be positive");
        }
        if self.physics.platform_height <= 0.0 {
            return invalid("platform height must be positive");
        }
        if self.physics.jump_force >= 0.0 {
            return invalid("jump force must be negative (upward)");
        }
        if self.physics.player_speed < 0.0 {
            return invalid("player speed must not be negative");
        }
        if self.physics.max_jumps == 0 {
            return invalid("max jumps must be at least 1");
        }
        if self.particles.size_min < 0.0 || self.particles.size_min > self.particles.size_max {
            return invalid("particle sizes must satisfy 0 <= size_min <= size_max");
        }
        if self.particles.speed < 0.0 {
            return invalid("particle speed must not be negative");
        }
        if self.particles.decay <= 0.0 {
            return invalid("particle decay must be positive");
        }
        if self.presentation.notification_ticks > MAX_NOTIFICATION_TICKS {
            return invalid("notification_ticks is too large");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform_engine::config::ConfigFormat;

    #[test]
    fn test_defaults_match_classic_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.physics.gravity, 0.5);
        assert_eq!(config.physics.jump_force, -12.0);
        assert_eq!(config.physics.player_speed, 5.0);
        assert_eq!(config.physics.max_jumps, 2);
        assert_eq!(config.physics.platform_height, 20.0);
        assert_eq!(config.playfield.width, 800.0);
        assert_eq!(config.playfield.height, 600.0);
        assert_eq!(config.particles.burst_count, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_overrides() {
        let text = "[playfield]\nwidth = 1024.0\n\n[physics]\nmax_jumps = 3\n";
        let config = GameConfig::from_str_with_format(text, ConfigFormat::Toml).unwrap();
        assert_eq!(config.playfield.width, 1024.0);
        assert_eq!(config.playfield.height, 600.0);
        assert_eq!(config.physics.max_jumps, 3);
        assert_eq!(config.physics.gravity, 0.5);
    }

    #[test]
    fn test_controls_from_ron() {
        let text = "(controls: (jump: [Space]))";
        let config = GameConfig::from_str_with_format(text, ConfigFormat::Ron).unwrap();
        assert_eq!(config.controls.jump, vec![KeyCode::Space]);
        assert_eq!(config.controls.left, vec![KeyCode::ArrowLeft, KeyCode::A]);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = GameConfig::default();
        config.physics.jump_force = 4.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.physics.max_jumps = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.playfield.width = 0.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.particles.size_min = 8.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.particles.speed = -1.0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.presentation.notification_ticks = u64::MAX;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validation_rejects_non_finite_floats() {
        let config = GameConfig::from_str_with_format("[particles]\nspeed = inf\n", ConfigFormat::Toml).unwrap();
        assert!(config.particles.speed.is_infinite());
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("particles.speed")));

        let text = "[physics]\ngravity = nan\nplayer_speed = nan\n";
        let config = GameConfig::from_str_with_format(text, ConfigFormat::Toml).unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(msg)) if msg.contains("physics.gravity")));

        let mut config = GameConfig::default();
        config.coin.bob_amplitude = f32::NEG_INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_rejects_infinite_speed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coinhop.toml");
        std::fs::write(&path, "[particles]\nspeed = inf\n").unwrap();
        assert!(matches!(GameConfig::load_or_default(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("coinhop.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_or_default_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("coinhop.toml");
        std::fs::write(&path, "[physics]\nmax_jumps = 0\n").unwrap();
        assert!(matches!(GameConfig::load_or_default(&path), Err(ConfigError::Invalid(_))));
    }
}
