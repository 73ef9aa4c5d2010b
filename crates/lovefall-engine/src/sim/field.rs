use crate::api::config::SceneConfig;
use crate::api::error::SceneError;
use crate::core::viewport::Viewport;

use super::particle::{Particle, SpawnRanges, Spawner};

/// Fixed-size collection of falling particles.
///
/// The population is set at construction and never grows or shrinks;
/// particles leaving the bottom edge are respawned in place.
pub struct ParticleField {
    particles: Vec<Particle>,
    spawner: Spawner,
    viewport: Viewport,
}

impl ParticleField {
    /// Create `config.particle_count` particles above `viewport`.
    pub fn new(config: &SceneConfig, viewport: Viewport) -> Result<Self, SceneError> {
        config.validate()?;

        let seed = config.seed.unwrap_or(0x5EED_F411);
        let mut spawner = Spawner::new(seed, SpawnRanges::from_config(config));
        let particles = (0..config.particle_count)
            .map(|_| spawner.spawn(&viewport))
            .collect();

        log::debug!(
            "particle field: {} particles over {}x{}",
            config.particle_count,
            viewport.width(),
            viewport.height()
        );

        Ok(Self {
            particles,
            spawner,
            viewport,
        })
    }

    /// Advance every particle by one frame, in insertion order.
    /// Returns how many were respawned.
    pub fn advance(&mut self) -> usize {
        let mut respawned = 0;
        for particle in self.particles.iter_mut() {
            if particle.advance(&mut self.spawner, &self.viewport) {
                respawned += 1;
            }
        }
        if respawned > 0 {
            log::trace!("respawned {respawned} particles");
        }
        respawned
    }

    /// Adopt new surface bounds. Particles keep their state; the new bounds
    /// apply from the next advance and spawn.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Iterate over all particles in insertion (paint) order.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Mutable access to a single particle, for hosts that script the scene.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    /// Number of particles. Constant for the field's lifetime.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn field(seed: u64) -> ParticleField {
        let config = SceneConfig::default().with_seed(seed);
        ParticleField::new(&config, Viewport::new(1024.0, 800.0).unwrap()).unwrap()
    }

    #[test]
    fn starts_with_fifty_particles_above_the_surface() {
        let f = field(1);
        assert_eq!(f.len(), 50);
        assert!(f.iter().all(|p| (-50.0..=-10.0).contains(&p.position.y)));
        assert!(f.iter().all(|p| (0.0..=1024.0).contains(&p.position.x)));
    }

    #[test]
    fn population_is_fixed_across_frames() {
        let mut f = field(2);
        let mut total_respawns = 0;
        for _ in 0..5_000 {
            total_respawns += f.advance();
            assert_eq!(f.len(), 50);
        }
        assert!(total_respawns > 0);
    }

    #[test]
    fn every_particle_stays_within_one_advance_of_the_bottom() {
        let mut f = field(3);
        for _ in 0..3_000 {
            f.advance();
            for p in f.iter() {
                assert!(p.position.y <= 800.0, "y={}", p.position.y);
            }
        }
    }

    #[test]
    fn respawn_scenario_at_bottom_edge() {
        let mut f = field(4);
        let p = f.get_mut(0).unwrap();
        p.position = Vec2::new(100.0, 799.0);
        p.fall_speed = 2.0;

        f.advance();
        let p = f.get(0).unwrap();
        assert!((-50.0..=-10.0).contains(&p.position.y));
    }

    #[test]
    fn same_seed_same_field() {
        let a = field(11);
        let b = field(11);
        assert!(a.iter().eq(b.iter()));
    }

    #[test]
    fn resize_keeps_particles_in_place() {
        let mut f = field(5);
        let before: Vec<Particle> = f.iter().cloned().collect();
        f.resize(Viewport::new(400.0, 300.0).unwrap());
        assert!(f.iter().eq(before.iter()));
        assert_eq!(f.viewport().height(), 300.0);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = SceneConfig::default().with_particle_count(0);
        let result = ParticleField::new(&config, Viewport::new(10.0, 10.0).unwrap());
        assert!(result.is_err());
    }
}
