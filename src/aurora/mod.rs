//! Animated background: base wash, aurora bands and recycling particles.

pub mod background;
pub mod engine;
pub mod particle;
pub mod state;

pub use engine::{ParticleEngine, particle_count};
pub use particle::{Particle, Variant};
pub use state::EngineState;
