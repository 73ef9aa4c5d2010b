//! Falling symbol particles.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::config::{SceneConfig, SpanF32};
use crate::core::rng::Rng;
use crate::core::viewport::Viewport;
use crate::renderer::color::VectorColor;
use crate::symbols::SymbolKind;

/// One falling symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub kind: SymbolKind,
    pub position: Vec2,
    pub size: f32,
    pub fall_speed: f32,
    pub opacity: f32,
    /// Cached palette color for `kind` at `opacity`.
    pub color: VectorColor,
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl Particle {
    /// Build a particle with the color derived from `kind` and `opacity`.
    pub fn new(kind: SymbolKind, position: Vec2, size: f32, fall_speed: f32, opacity: f32) -> Self {
        Particle {
            kind,
            position,
            size,
            fall_speed,
            opacity,
            color: kind.color(opacity),
            rotation: 0.0,
            rotation_speed: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation: f32, rotation_speed: f32) -> Self {
        self.rotation = rotation;
        self.rotation_speed = rotation_speed;
        self
    }

    /// Advance one frame. Once the particle has dropped below the viewport it is
    /// replaced wholesale by a fresh draw from `spawner`. Returns true on respawn.
    pub fn advance(&mut self, spawner: &mut Spawner, viewport: &Viewport) -> bool {
        self.position.y += self.fall_speed;
        self.rotation += self.rotation_speed;

        if viewport.is_below(self.position.y) {
            *self = spawner.spawn(viewport);
            return true;
        }
        false
    }
}

/// Sampling ranges for fresh particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRanges {
    pub spawn_y: SpanF32,
    pub size: SpanF32,
    pub fall_speed: SpanF32,
    pub opacity: SpanF32,
    pub rotation_speed: SpanF32,
}

impl SpawnRanges {
    pub fn from_config(config: &SceneConfig) -> Self {
        Self {
            spawn_y: config.spawn_y,
            size: config.size,
            fall_speed: config.fall_speed,
            opacity: config.opacity,
            rotation_speed: config.rotation_speed,
        }
    }
}

impl Default for SpawnRanges {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

/// Draws new particles from a seeded RNG.
///
/// Cloning a spawner forks its random stream: both copies produce the same
/// particles from then on.
#[derive(Debug, Clone, PartialEq)]
pub struct Spawner {
    rng: Rng,
    ranges: SpawnRanges,
}

impl Spawner {
    pub fn new(seed: u64, ranges: SpawnRanges) -> Self {
        Self {
            rng: Rng::new(seed),
            ranges,
        }
    }

    pub fn ranges(&self) -> &SpawnRanges {
        &self.ranges
    }

    /// A fresh particle just above the visible area, every attribute re-drawn.
    pub fn spawn(&mut self, viewport: &Viewport) -> Particle {
        let r = self.ranges;
        let kind = SymbolKind::random(&mut self.rng);
        let x = self.rng.range(0.0, viewport.width());
        let y = self.rng.span(r.spawn_y);
        let size = self.rng.span(r.size);
        let fall_speed = self.rng.span(r.fall_speed);
        let opacity = self.rng.span(r.opacity);
        let rotation = self.rng.range(0.0, TAU);
        let rotation_speed = self.rng.span(r.rotation_speed);

        Particle::new(kind, Vec2::new(x, y), size, fall_speed, opacity)
            .with_rotation(rotation, rotation_speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(1280.0, 800.0).unwrap()
    }

    #[test]
    fn spawned_attributes_within_ranges() {
        let vp = viewport();
        let mut spawner = Spawner::new(42, SpawnRanges::default());
        for _ in 0..5_000 {
            let p = spawner.spawn(&vp);
            assert!((0.0..=1280.0).contains(&p.position.x), "x={}", p.position.x);
            assert!((-50.0..=-10.0).contains(&p.position.y), "y={}", p.position.y);
            assert!((15.0..=30.0).contains(&p.size));
            assert!((0.5..=2.0).contains(&p.fall_speed));
            assert!((0.5..=1.0).contains(&p.opacity));
            assert!((0.0..=TAU).contains(&p.rotation));
            assert!((-0.02..=0.02).contains(&p.rotation_speed));
        }
    }

    #[test]
    fn color_matches_kind_and_opacity() {
        let vp = viewport();
        let mut spawner = Spawner::new(8, SpawnRanges::default());
        for _ in 0..100 {
            let p = spawner.spawn(&vp);
            assert_eq!(p.color, p.kind.color(p.opacity));
        }
    }

    #[test]
    fn advance_moves_by_fall_speed_and_spins() {
        let vp = viewport();
        let mut spawner = Spawner::new(1, SpawnRanges::default());
        let mut p = Particle::new(SymbolKind::Star, Vec2::new(10.0, 100.0), 20.0, 1.5, 1.0)
            .with_rotation(0.5, 0.01);

        let respawned = p.advance(&mut spawner, &vp);
        assert!(!respawned);
        assert_eq!(p.position, Vec2::new(10.0, 101.5));
        assert!((p.rotation - 0.51).abs() < 1e-6);
    }

    #[test]
    fn y_increases_by_exactly_fall_speed_until_respawn() {
        let vp = viewport();
        let mut spawner = Spawner::new(17, SpawnRanges::default());
        let mut p = spawner.spawn(&vp);
        let mut frames = 0;
        loop {
            let before = p.clone();
            if p.advance(&mut spawner, &vp) {
                assert!(before.position.y + before.fall_speed > 800.0);
                assert!((-50.0..=-10.0).contains(&p.position.y));
                break;
            }
            assert_eq!(p.position.y, before.position.y + before.fall_speed);
            assert_eq!(p.kind, before.kind);
            assert_eq!(p.size, before.size);
            frames += 1;
            assert!(frames < 10_000, "particle never left the viewport");
        }
    }

    #[test]
    fn crossing_bottom_edge_respawns_fully() {
        let vp = viewport();
        let mut spawner = Spawner::new(99, SpawnRanges::default());
        let mut p = Particle::new(SymbolKind::Heart, Vec2::new(640.0, 799.0), 20.0, 2.0, 0.8)
            .with_rotation(1.0, 0.01);

        let expected = spawner.clone().spawn(&vp);
        assert!(p.advance(&mut spawner, &vp));
        assert_eq!(p, expected);
        assert!((-50.0..=-10.0).contains(&p.position.y));
    }

    #[test]
    fn exactly_at_bottom_edge_does_not_respawn() {
        let vp = viewport();
        let mut spawner = Spawner::new(5, SpawnRanges::default());
        let mut p = Particle::new(SymbolKind::Bird, Vec2::new(0.0, 798.0), 20.0, 2.0, 1.0);
        assert!(!p.advance(&mut spawner, &vp));
        assert_eq!(p.position.y, 800.0);
    }
}
