//! Deterministic simulation module
//!
//! All table physics lives here. This module must stay pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by ball index)
//! - Bounded work per frame
//! - No rendering or platform dependencies

pub mod collision;
pub mod events;
pub mod particle;
pub mod pocket;
pub mod state;
pub mod tick;

pub use collision::{clamp_to_bounds, overlaps, separate};
pub use events::{EventSink, NullSink, ScoreTally, SimEvent};
pub use particle::Particle;
pub use pocket::{Corner, Tag, score_delta};
pub use state::ParticleSystem;
pub use tick::FrameInput;
