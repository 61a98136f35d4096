//! Particle system state
//!
//! A fixed pool of balls plus the frame clock needed to time-correct the
//! integrator. Balls are never added or removed during a session.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::particle::Particle;
use super::pocket::Tag;
use crate::config::TableConfig;
use crate::error::{Error, Result};

/// The simulated table
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pub(crate) config: TableConfig,
    /// Balls in stable order (index = render order)
    pub(crate) particles: Vec<Particle>,
    /// Jitter source (friction at creation, collision nudges every frame)
    pub(crate) rng: Pcg32,
    /// Timestamp of the last accepted frame (ns)
    pub(crate) last_timestamp: Option<i64>,
    /// Duration of the last accepted frame (seconds), 0 until two frames are seen
    pub(crate) last_dt: f32,
    /// Per-ball "already pocketed this frame" flags
    pub(crate) pocketed: Vec<bool>,
}

impl ParticleSystem {
    /// Validate the config and rack the balls at the origin.
    ///
    /// `rng` supplies all randomness for the session; pass a seeded generator
    /// to get reproducible runs.
    pub fn new(config: TableConfig, mut rng: Pcg32) -> Result<Self> {
        config.validate()?;

        let particles: Vec<Particle> = (0..config.particle_count)
            .map(|_| Particle::random(&mut rng, &config))
            .collect();

        log::info!(
            "Racked {} balls (diameter {} m, bounds {:?}, friction {})",
            particles.len(),
            config.diameter,
            config.bounds,
            config.friction
        );

        Ok(Self {
            pocketed: vec![false; particles.len()],
            config,
            particles,
            rng,
            last_timestamp: None,
            last_dt: 0.0,
        })
    }

    /// Shorthand for `new` with a `Pcg32` seeded from `seed`
    pub fn seeded(config: TableConfig, seed: u64) -> Result<Self> {
        Self::new(config, Pcg32::seed_from_u64(seed))
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    /// Position of ball `index` (0-based)
    pub fn position(&self, index: usize) -> Option<Vec2> {
        self.particles.get(index).map(|p| p.pos)
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.particles.iter().map(|p| p.pos)
    }

    pub fn tag(&self, index: usize) -> Option<&Tag> {
        self.particles.get(index).map(|p| &p.tag)
    }

    /// Duration of the last accepted frame in seconds (0 while bootstrapping)
    pub fn last_dt(&self) -> f32 {
        self.last_dt
    }

    /// Put ball `index` at rest at `pos`, clamped to the table
    pub fn place(&mut self, index: usize, pos: Vec2) -> Result<()> {
        let count = self.particles.len();
        let bounds = self.config.bounds;
        let particle = self
            .particles
            .get_mut(index)
            .ok_or(Error::ParticleIndex { index, count })?;
        if !pos.is_finite() {
            return Err(Error::NonFinitePosition { index, x: pos.x, y: pos.y });
        }
        particle.place(pos.clamp(-bounds, bounds));
        Ok(())
    }

    /// Forget the frame clock. The next two updates bootstrap it again
    /// without integrating, so a pause is never integrated as one long step.
    pub fn reset_clock(&mut self) {
        log::debug!("Frame clock reset");
        self.last_timestamp = None;
        self.last_dt = 0.0;
    }
}
