use serde::{Deserialize, Serialize};

use crate::api::error::SceneError;

/// Inclusive `[min, max]` span for uniformly sampled attributes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpanF32 {
    pub min: f32,
    pub max: f32,
}

impl SpanF32 {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies within the span (inclusive on both ends).
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    fn check(&self, name: &str) -> Result<(), SceneError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(SceneError::InvalidConfig(format!("{name} must be finite")));
        }
        if self.min > self.max {
            return Err(SceneError::InvalidConfig(format!(
                "{name} range is inverted ({} > {})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Configuration for the falling-symbols scene.
///
/// Every field has a default, so a host may pass a partial JSON object
/// (or nothing at all).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of particles created at startup. Fixed for the scene lifetime.
    pub particle_count: usize,
    /// Vertical spawn band, just above the visible area.
    pub spawn_y: SpanF32,
    /// Symbol size (star outer radius, heart half-height, ...).
    pub size: SpanF32,
    /// Downward advance per frame, in surface pixels.
    pub fall_speed: SpanF32,
    /// Alpha baked into the symbol color.
    pub opacity: SpanF32,
    /// Spin per frame, in radians.
    pub rotation_speed: SpanF32,
    /// Seconds between the two halves of an envelope open/close transition.
    pub reveal_delay: f32,
    /// Stroke width for sparkle crosses.
    pub sparkle_line_width: f32,
    /// Max distance between a curve and its tessellated approximation.
    pub tessellation_tolerance: f32,
    /// RNG seed. Hosts without a fixed seed should supply their own entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            spawn_y: SpanF32::new(-50.0, -10.0),
            size: SpanF32::new(15.0, 30.0),
            fall_speed: SpanF32::new(0.5, 2.0),
            opacity: SpanF32::new(0.5, 1.0),
            rotation_speed: SpanF32::new(-0.02, 0.02),
            reveal_delay: 0.5,
            sparkle_line_width: 1.0,
            tessellation_tolerance: 0.5,
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_reveal_delay(mut self, seconds: f32) -> Self {
        self.reveal_delay = seconds;
        self
    }

    /// Reject configs the simulation cannot honor.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.particle_count == 0 {
            return Err(SceneError::InvalidConfig(
                "particle_count must be at least 1".into(),
            ));
        }
        self.spawn_y.check("spawn_y")?;
        self.size.check("size")?;
        self.fall_speed.check("fall_speed")?;
        self.opacity.check("opacity")?;
        self.rotation_speed.check("rotation_speed")?;

        if self.size.min <= 0.0 {
            return Err(SceneError::InvalidConfig("size must be positive".into()));
        }
        if self.fall_speed.min <= 0.0 {
            // A non-positive speed would leave a particle above the surface forever.
            return Err(SceneError::InvalidConfig("fall_speed must be positive".into()));
        }
        if self.opacity.min < 0.0 || self.opacity.max > 1.0 {
            return Err(SceneError::InvalidConfig("opacity must lie in [0, 1]".into()));
        }
        if !(self.reveal_delay.is_finite() && self.reveal_delay >= 0.0) {
            return Err(SceneError::InvalidConfig(
                "reveal_delay must be a non-negative number of seconds".into(),
            ));
        }
        if !(self.sparkle_line_width.is_finite() && self.sparkle_line_width > 0.0) {
            return Err(SceneError::InvalidConfig(
                "sparkle_line_width must be positive".into(),
            ));
        }
        if !(self.tessellation_tolerance.is_finite() && self.tessellation_tolerance > 0.0) {
            return Err(SceneError::InvalidConfig(
                "tessellation_tolerance must be positive".into(),
            ));
        }
        Ok(())
    }
}
