pub mod field;
pub mod particle;

pub use field::ParticleField;
pub use particle::{Particle, SpawnRanges, Spawner};
