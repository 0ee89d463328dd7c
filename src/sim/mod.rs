//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected random source only
//! - Stable iteration order (particle slots scanned by index)
//! - No rendering or platform dependencies beyond held-key state

pub mod particles;
pub mod rng;
pub mod score;
pub mod shake;
pub mod tick;
pub mod vehicle;

pub use particles::{DEFAULT_PARTICLE_CAPACITY, Particle, ParticleField};
pub use rng::{PcgSource, RandomSource, SequenceSource};
pub use score::ScoreEngine;
pub use shake::ScreenShake;
pub use tick::{World, tick};
pub use vehicle::Vehicle;
