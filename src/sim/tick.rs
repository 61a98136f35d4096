//! Per-frame simulation step
//!
//! One `update` integrates every ball, then relaxes collisions, walls and
//! pockets for a bounded number of passes. It always completes; there are
//! no suspension points and no error path.

use glam::Vec2;
use rand::Rng;

use super::collision::{clamp_to_bounds, overlaps, separate};
use super::events::EventSink;
use super::pocket::{Corner, score_delta};
use super::state::ParticleSystem;
use crate::consts::NANOS_TO_SECS;

/// Forcing for a single frame, handed over by the sensor side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Table inclination, gravity projected onto the table plane. Balls
    /// accelerate along `-tilt`; rotation correction is the caller's job.
    pub tilt: Vec2,
    /// Monotonic sample time (nanoseconds)
    pub timestamp_ns: i64,
}

impl FrameInput {
    pub fn new(tilt_x: f32, tilt_y: f32, timestamp_ns: i64) -> Self {
        Self {
            tilt: Vec2::new(tilt_x, tilt_y),
            timestamp_ns,
        }
    }
}

impl ParticleSystem {
    /// Advance the table by one frame
    pub fn update(&mut self, input: &FrameInput, events: &mut impl EventSink) {
        if let Some((dt, dt_ratio)) = self.advance_clock(input.timestamp_ns) {
            let tilt = if input.tilt.is_finite() {
                input.tilt
            } else {
                log::warn!("Ignoring non-finite tilt {:?}", input.tilt);
                Vec2::ZERO
            };
            let mass = self.config.mass;
            for (i, particle) in self.particles.iter_mut().enumerate() {
                particle.compute_physics(tilt, dt, dt_ratio, mass);
                // Checked before the walls and pockets can hide it
                assert!(
                    particle.is_finite(),
                    "ball {i} left the finite range: {particle:?}"
                );
            }
        }

        self.resolve(&mut *events);
    }

    /// Record a timestamp. Returns `(dt, dt / last_dt)` when there is enough
    /// history to integrate: one sample gives no `dt`, two give no ratio.
    fn advance_clock(&mut self, timestamp_ns: i64) -> Option<(f32, f32)> {
        let Some(last) = self.last_timestamp else {
            self.last_timestamp = Some(timestamp_ns);
            return None;
        };

        if timestamp_ns <= last {
            log::warn!(
                "Timestamp {} does not advance past {}, skipping integration",
                timestamp_ns,
                last
            );
            return None;
        }

        let dt = timestamp_ns.saturating_sub(last) as f32 * NANOS_TO_SECS;
        let step = (self.last_dt != 0.0).then(|| (dt, dt / self.last_dt));
        self.last_dt = dt;
        self.last_timestamp = Some(timestamp_ns);
        step
    }

    /// Relax collisions, walls and pockets. Each ball is tested against
    /// every later ball; pairs that overlap are pushed apart and the pass is
    /// repeated, because one push can create another overlap. Stops when a
    /// pass finds nothing or after `max_iterations` passes, whichever is
    /// first. Returns the number of passes run.
    pub fn resolve(&mut self, events: &mut impl EventSink) -> u32 {
        let diameter = self.config.diameter;
        let diameter_sq = self.config.diameter_sq();
        let jitter = self.config.collision_jitter;
        let count = self.particles.len();

        self.pocketed.clear();
        self.pocketed.resize(count, false);

        let mut passes = 0;
        let mut more = true;
        while more && passes < self.config.max_iterations {
            more = false;
            passes += 1;

            for i in 0..count {
                for j in (i + 1)..count {
                    let (head, tail) = self.particles.split_at_mut(j);
                    let (curr, other) = (&mut head[i], &mut tail[0]);
                    if !overlaps(curr.pos, other.pos, diameter_sq) {
                        continue;
                    }

                    // A little entropy, nothing in the universe is perfect
                    let nudge = Vec2::new(
                        self.rng.random::<f32>() - 0.5,
                        self.rng.random::<f32>() - 0.5,
                    ) * jitter;
                    if !separate(&mut curr.pos, &mut other.pos, diameter, nudge) {
                        log::trace!("Balls {i} and {j} coincide, retrying next pass");
                    }
                    more = true;
                }

                self.contain(i, &mut *events);
            }
        }

        if more {
            log::trace!("Constraint solver hit the {passes}-pass cap with overlap left");
        }
        passes
    }

    /// Keep ball `i` on the table, then drop it into a pocket if it went
    /// past a corner's thresholds.
    fn contain(&mut self, i: usize, events: &mut impl EventSink) {
        let bounds = self.config.bounds;
        let threshold = self.config.pocket_threshold;
        let particle = &mut self.particles[i];

        // Pockets are judged on where the ball got to, before the wall stops it
        let raw = particle.pos;
        particle.pos = clamp_to_bounds(raw, bounds);

        if self.pocketed[i] {
            return;
        }
        let Some(corner) = Corner::locate(raw, threshold) else {
            return;
        };

        // prev_pos is kept, so the ball leaves the origin with a kick next frame
        particle.pos = Vec2::ZERO;
        self.pocketed[i] = true;

        let wanted = self.config.pockets.tag_for(corner);
        let delta = score_delta(&particle.tag, wanted);
        log::debug!(
            "Ball {} ({}) dropped into {:?} pocket ({}), score {:+}",
            i,
            particle.tag,
            corner,
            wanted,
            delta
        );
        events.on_pocket_hit(i, corner);
        events.on_score(delta);
    }
}
