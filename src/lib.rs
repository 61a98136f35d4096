//! Tilt Table - a tilting pool table simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (Verlet integration, collisions, pockets)
//! - `config`: Table geometry and tuning, loadable from JSON
//! - `viewport`: Screen metrics to table geometry and pixel mapping
//! - `error`: Configuration and access errors

pub mod config;
pub mod error;
pub mod sim;
pub mod viewport;

pub use config::{PocketTags, TableConfig};
pub use error::{ConfigError, Error, Result};
pub use sim::{
    Corner, EventSink, FrameInput, NullSink, Particle, ParticleSystem, ScoreTally, SimEvent, Tag,
};
pub use viewport::Viewport;

/// Default table constants
pub mod consts {
    /// Ball diameter in meters (about 0.8 cm on screen)
    pub const BALL_DIAMETER: f32 = 0.008;
    /// Friction of the virtual table and air
    pub const TABLE_FRICTION: f32 = 0.5;
    /// Spread of the per-ball friction randomization
    pub const FRICTION_JITTER: f32 = 0.2;
    /// Nominal mass of every ball. Only rescales the force, never observable on its own.
    pub const BALL_MASS: f32 = 1000.0;
    /// Number of balls racked at the start of a session
    pub const BALL_COUNT: usize = 15;

    /// Maximum constraint relaxation passes per frame
    pub const MAX_ITERATIONS: u32 = 10;
    /// Full width of the random nudge added to a colliding pair's separation
    pub const COLLISION_JITTER: f32 = 0.0001;

    /// Pocket thresholds (a pocket is everything beyond both)
    pub const POCKET_THRESHOLD_X: f32 = 0.06;
    pub const POCKET_THRESHOLD_Y: f32 = 0.09;

    /// Containment bounds used until a viewport is known
    pub const DEFAULT_BOUND_X: f32 = 0.1;
    pub const DEFAULT_BOUND_Y: f32 = 0.15;

    /// Meters per inch, for dpi conversion
    pub const METERS_PER_INCH: f32 = 0.0254;
    /// Nanoseconds to seconds
    pub const NANOS_TO_SECS: f32 = 1.0 / 1_000_000_000.0;
}
