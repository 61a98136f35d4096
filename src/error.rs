//! Error types
//!
//! The simulation itself has no per-frame error path; everything that can go
//! wrong is caught when the table is configured or when a caller hands in a
//! bad particle index.

use thiserror::Error;

/// Crate result alias
pub type Result<T> = std::result::Result<T, Error>;

/// Rejected table configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Ball diameter must be a positive finite length
    #[error("ball diameter must be positive, got {0}")]
    InvalidDiameter(f32),

    /// Containment bounds must be positive on both axes
    #[error("containment bounds must be positive, got ({x}, {y})")]
    InvalidBounds {
        /// Horizontal bound (meters)
        x: f32,
        /// Vertical bound (meters)
        y: f32,
    },

    /// The table needs at least one ball
    #[error("particle count must be at least 1")]
    EmptyParticleSet,

    /// Tags are drawn from the palette, so it cannot be empty
    #[error("particle palette is empty")]
    EmptyPalette,

    /// Base friction outside [0, 1)
    #[error("friction must be in [0, 1), got {0}")]
    InvalidFriction(f32),

    /// Friction jitter would allow a ball to keep no momentum at all
    #[error("friction jitter {jitter} leaves no retention with friction {friction}")]
    InvalidFrictionJitter {
        /// Base friction
        friction: f32,
        /// Requested jitter spread
        jitter: f32,
    },

    /// Mass must be positive, it is inverted every step
    #[error("mass must be positive, got {0}")]
    InvalidMass(f32),

    /// Pocket thresholds must be positive, otherwise the corners overlap
    #[error("pocket thresholds must be positive, got ({x}, {y})")]
    InvalidPocketThreshold {
        /// Horizontal threshold (meters)
        x: f32,
        /// Vertical threshold (meters)
        y: f32,
    },

    /// Collision jitter must be a finite non-negative width
    #[error("collision jitter must be non-negative, got {0}")]
    InvalidCollisionJitter(f32),

    /// At least one relaxation pass is required
    #[error("max iterations must be at least 1")]
    ZeroIterations,
}

/// Top-level crate error
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid table config: {0}")]
    Config(#[from] ConfigError),

    #[error("particle index {index} out of range (count {count})")]
    ParticleIndex { index: usize, count: usize },

    #[error("particle {index} cannot be placed at non-finite ({x}, {y})")]
    NonFinitePosition { index: usize, x: f32, y: f32 },

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}
