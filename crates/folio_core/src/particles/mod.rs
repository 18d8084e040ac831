//! Ambient Particle Field
//!
//! Drifting translucent dots across a full-viewport surface.
//!
//! Per frame:
//! 1. Advance every particle by its velocity
//! 2. Reflect on any edge it crossed (velocity sign flip + mirrored overshoot)
//! 3. Clear the surface and draw every particle as a filled circle
//! 4. Request the next tick from the host scheduler
//!
//! Cost is O(n) with n capped at [`ParticleConfig::max_particles`], cheap
//! enough to run for the lifetime of the page.

mod field;
mod particle;

pub use field::{FieldStats, ParticleField};
pub use particle::{Particle, ParticleConfig};
