//! Particle System
//!
//! Short-lived decorative squares spawned in bursts on coin pickup. Each
//! particle falls under its own light gravity, fades linearly, and is removed
//! on the tick its life reaches zero.

use platform_engine::foundation::math::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ParticleConfig;
use crate::render::{Color, Drawable, RenderItem, SpriteKind};

/// A single particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Top-left corner
    pub position: Vec2,
    /// Velocity in units per tick
    pub velocity: Vec2,
    /// Edge length of the square
    pub size: f32,
    /// Remaining life, starting at 1.0
    pub life: f32,
    /// Color tag
    pub color: Color,
}

impl Particle {
    /// Advance one tick: move, then fall, then fade
    pub fn update(&mut self, gravity: f32, decay: f32) {
        self.position += self.velocity;
        self.life -= decay;
        self.velocity.y += gravity;
    }

    /// Life has run out
    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }
}

impl Drawable for Particle {
    fn render_item(&self) -> Option<RenderItem> {
        Some(RenderItem {
            kind: SpriteKind::Particle,
            position: self.position,
            size: Vec2::new(self.size, self.size),
            color: self.color,
            alpha: self.life.clamp(0.0, 1.0),
        })
    }
}

/// Owner of every live particle
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticlePool {
    /// Create an empty pool; bursts are reproducible when `seed` is set
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            particles: Vec::new(),
            rng,
        }
    }

    /// Spawn one particle at `center` with randomized size and velocity
    pub fn spawn(&mut self, center: Vec2, color: Color, config: &ParticleConfig) {
        let size = if config.size_max > config.size_min {
            self.rng.gen_range(config.size_min..config.size_max)
        } else {
            config.size_min
        };
        let velocity = if config.speed > 0.0 {
            Vec2::new(
                self.rng.gen_range(-config.speed..config.speed),
                self.rng.gen_range(-config.speed..config.speed),
            )
        } else {
            Vec2::zeros()
        };
        self.particles.push(Particle {
            position: center,
            velocity,
            size,
            life: 1.0,
            color,
        });
    }

    /// Spawn `config.burst_count` particles at `center`
    pub fn burst(&mut self, center: Vec2, color: Color, config: &ParticleConfig) {
        for _ in 0..config.burst_count {
            self.spawn(center, color, config);
        }
    }

    /// Advance every particle one tick and drop the expired ones
    ///
    /// Surviving particles may be reordered.
    pub fn update(&mut self, config: &ParticleConfig) {
        let mut i = 0;
        while i < self.particles.len() {
            let particle = &mut self.particles[i];
            particle.update(config.gravity, config.decay);
            if particle.is_expired() {
                self.particles.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Live particles
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// No live particles
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
