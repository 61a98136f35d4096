//! Table configuration
//!
//! Fixed for a whole session. Loaded from JSON or built from defaults, then
//! validated before any simulation is allowed to start.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, Result};
use crate::sim::{Corner, Tag};
use crate::viewport::Viewport;

/// Which ball tag each corner pocket wants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PocketTags {
    pub top_right: Tag,
    pub bottom_right: Tag,
    pub bottom_left: Tag,
    pub top_left: Tag,
}

impl Default for PocketTags {
    fn default() -> Self {
        Self {
            top_right: Tag::new("black"),
            bottom_right: Tag::new("white"),
            bottom_left: Tag::new("blue"),
            top_left: Tag::new("red"),
        }
    }
}

impl PocketTags {
    /// Tag associated with a corner pocket
    pub fn tag_for(&self, corner: Corner) -> &Tag {
        match corner {
            Corner::TopRight => &self.top_right,
            Corner::BottomRight => &self.bottom_right,
            Corner::BottomLeft => &self.bottom_left,
            Corner::TopLeft => &self.top_left,
        }
    }
}

/// Table geometry and physics tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of balls on the table
    pub particle_count: usize,
    /// Ball diameter (meters)
    pub diameter: f32,
    /// Base friction, each ball keeps `1 - friction` of its momentum per step
    pub friction: f32,
    /// Each ball loses up to this much extra retention, chosen at random
    pub friction_jitter: f32,
    /// Nominal ball mass
    pub mass: f32,
    /// Maximum |x| and |y| a ball center may reach (meters)
    pub bounds: Vec2,
    /// Pockets start beyond these coordinates on both axes (meters)
    pub pocket_threshold: Vec2,
    /// Tag each pocket rewards
    pub pockets: PocketTags,
    /// Tags balls are randomly drawn from
    pub palette: Vec<Tag>,
    /// Constraint relaxation passes per frame (upper limit)
    pub max_iterations: u32,
    /// Full width of the separation nudge for colliding pairs (meters)
    pub collision_jitter: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        let pockets = PocketTags::default();
        let palette = vec![
            pockets.top_right.clone(),
            pockets.top_left.clone(),
            pockets.bottom_right.clone(),
            pockets.bottom_left.clone(),
        ];
        Self {
            particle_count: BALL_COUNT,
            diameter: BALL_DIAMETER,
            friction: TABLE_FRICTION,
            friction_jitter: FRICTION_JITTER,
            mass: BALL_MASS,
            bounds: Vec2::new(DEFAULT_BOUND_X, DEFAULT_BOUND_Y),
            pocket_threshold: Vec2::new(POCKET_THRESHOLD_X, POCKET_THRESHOLD_Y),
            pockets,
            palette,
            max_iterations: MAX_ITERATIONS,
            collision_jitter: COLLISION_JITTER,
        }
    }
}

impl TableConfig {
    /// Parse a config from JSON (missing fields fall back to defaults)
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded table config from {}", path.display());
        Ok(config)
    }

    /// Derive containment bounds from the screen the table is drawn on
    pub fn fit_to_viewport(&mut self, viewport: &Viewport) {
        self.bounds = viewport.bounds(self.diameter);
    }

    /// Squared diameter, the overlap test threshold
    #[inline]
    pub fn diameter_sq(&self) -> f32 {
        self.diameter * self.diameter
    }

    /// Check every field; the simulation never starts from a config that fails this
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(self.diameter.is_finite() && self.diameter > 0.0) {
            return Err(ConfigError::InvalidDiameter(self.diameter));
        }
        if !(self.bounds.is_finite() && self.bounds.cmpgt(Vec2::ZERO).all()) {
            return Err(ConfigError::InvalidBounds {
                x: self.bounds.x,
                y: self.bounds.y,
            });
        }
        if self.particle_count == 0 {
            return Err(ConfigError::EmptyParticleSet);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if !(0.0..1.0).contains(&self.friction) {
            return Err(ConfigError::InvalidFriction(self.friction));
        }
        if !(self.friction_jitter >= 0.0 && self.friction + self.friction_jitter < 1.0) {
            return Err(ConfigError::InvalidFrictionJitter {
                friction: self.friction,
                jitter: self.friction_jitter,
            });
        }
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::InvalidMass(self.mass));
        }
        if !(self.pocket_threshold.is_finite() && self.pocket_threshold.cmpgt(Vec2::ZERO).all()) {
            return Err(ConfigError::InvalidPocketThreshold {
                x: self.pocket_threshold.x,
                y: self.pocket_threshold.y,
            });
        }
        if !(self.collision_jitter.is_finite() && self.collision_jitter >= 0.0) {
            return Err(ConfigError::InvalidCollisionJitter(self.collision_jitter));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }

        if self.pocket_threshold.cmpge(self.bounds).any() {
            log::warn!(
                "Pocket threshold {:?} is not inside bounds {:?}; pockets can only be reached by overshoot",
                self.pocket_threshold,
                self.bounds
            );
        }
        Ok(())
    }
}
