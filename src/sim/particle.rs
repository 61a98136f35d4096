//! A single ball on the table
//!
//! Each ball holds its current and previous position plus the last
//! acceleration. Velocity is never stored; it is implied by the two positions.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pocket::Tag;
use crate::config::TableConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    /// Current position (meters, origin at table center)
    pub pos: Vec2,
    /// Position one integration step ago
    pub prev_pos: Vec2,
    /// Acceleration computed on the last step (m/s²)
    pub accel: Vec2,
    /// Share of the inherited displacement kept each step, in (0, 1]
    pub friction_retention: f32,
    /// Identity used for scoring
    pub tag: Tag,
}

impl Particle {
    /// A ball at rest at the origin
    pub fn new(tag: Tag, friction_retention: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            prev_pos: Vec2::ZERO,
            accel: Vec2::ZERO,
            friction_retention,
            tag,
        }
    }

    /// Rack a ball with its own friction and a tag drawn from the palette.
    /// Makes each ball a little different so they don't all move in lockstep.
    pub fn random(rng: &mut impl Rng, config: &TableConfig) -> Self {
        let r = (rng.random::<f32>() - 1.0) * config.friction_jitter;
        let retention = 1.0 - config.friction + r;
        let tag = config.palette[rng.random_range(0..config.palette.len())].clone();
        Self::new(tag, retention)
    }

    /// Displacement over the last step
    #[inline]
    pub fn displacement(&self) -> Vec2 {
        self.pos - self.prev_pos
    }

    /// Put the ball at rest at `pos`
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.prev_pos.is_finite() && self.accel.is_finite()
    }

    /// Advance one frame with time-corrected Verlet:
    ///
    /// `x(t+dt) = x(t) + k * (x(t) - x(t-dt)) * (dt / dt_prev) + a(t) * dt²`
    ///
    /// where `k` is the friction retention. The acceleration applied is the one
    /// stored on the previous step; the tilt given here takes effect next frame.
    pub fn compute_physics(&mut self, tilt: Vec2, dt: f32, dt_ratio: f32, mass: f32) {
        // F = mA, so A = F / m. The mass cancels out but stays explicit.
        let force = -tilt * mass;
        let inv_mass = 1.0 / mass;
        let accel = force * inv_mass;

        let next = self.pos
            + self.friction_retention * dt_ratio * self.displacement()
            + self.accel * (dt * dt);
        self.prev_pos = self.pos;
        self.pos = next;
        self.accel = accel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ball(retention: f32) -> Particle {
        Particle::new(Tag::new("red"), retention)
    }

    #[test]
    fn test_acceleration_is_applied_one_step_late() {
        let mut p = ball(0.5);
        p.compute_physics(Vec2::new(1.0, 0.0), 0.1, 1.0, 1000.0);
        assert_eq!(p.pos, Vec2::ZERO);
        assert!((p.accel.x + 1.0).abs() < 1e-6);

        p.compute_physics(Vec2::new(1.0, 0.0), 0.1, 1.0, 1000.0);
        // a * dt² = -1 * 0.01
        assert!((p.pos.x + 0.01).abs() < 1e-6);
        assert_eq!(p.pos.y, 0.0);
    }

    #[test]
    fn test_friction_damps_inherited_motion() {
        let mut p = ball(0.5);
        p.pos = Vec2::new(0.01, 0.0);
        p.compute_physics(Vec2::ZERO, 0.016, 1.0, 1000.0);
        assert!((p.pos.x - 0.015).abs() < 1e-6);
        assert!((p.prev_pos.x - 0.01).abs() < 1e-6);
    }

    #[test]
    fn test_time_correction_scales_inherited_motion() {
        let mut p = ball(1.0);
        p.pos = Vec2::new(0.0, 0.01);
        // Frame twice as long as the previous one covers twice the distance
        p.compute_physics(Vec2::ZERO, 0.032, 2.0, 1000.0);
        assert!((p.pos.y - 0.03).abs() < 1e-6);
    }

    #[test]
    fn test_mass_does_not_change_acceleration() {
        let mut light = ball(0.5);
        let mut heavy = ball(0.5);
        light.compute_physics(Vec2::new(0.3, -0.7), 0.016, 1.0, 1.0);
        heavy.compute_physics(Vec2::new(0.3, -0.7), 0.016, 1.0, 1000.0);
        assert!((light.accel - heavy.accel).length() < 1e-6);
    }

    #[test]
    fn test_random_retention_range() {
        let config = TableConfig::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let p = Particle::random(&mut rng, &config);
            let low = 1.0 - config.friction - config.friction_jitter;
            let high = 1.0 - config.friction;
            assert!(p.friction_retention >= low && p.friction_retention < high);
            assert!(config.palette.contains(&p.tag));
        }
    }

    #[test]
    fn test_place_is_at_rest() {
        let mut p = ball(0.5);
        p.place(Vec2::new(0.02, -0.03));
        assert_eq!(p.displacement(), Vec2::ZERO);
        assert!(p.is_finite());
    }
}
