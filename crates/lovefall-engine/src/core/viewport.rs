use glam::Vec2;

use crate::api::error::SceneError;

/// Dimensions of the drawing surface, in surface pixels.
///
/// Always finite and strictly positive; construct through [`Viewport::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, SceneError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SceneError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Whether a point has fallen past the bottom edge.
    pub fn is_below(&self, y: f32) -> bool {
        y > self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_dimensions() {
        let v = Viewport::new(1280.0, 800.0).unwrap();
        assert_eq!(v.size(), Vec2::new(1280.0, 800.0));
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert!(Viewport::new(0.0, 800.0).is_err());
        assert!(Viewport::new(800.0, 0.0).is_err());
        assert!(Viewport::new(-1.0, 800.0).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Viewport::new(f32::NAN, 800.0).is_err());
        assert!(Viewport::new(800.0, f32::INFINITY).is_err());
    }

    #[test]
    fn below_is_strict() {
        let v = Viewport::new(100.0, 800.0).unwrap();
        assert!(!v.is_below(800.0));
        assert!(v.is_below(800.5));
    }
}
