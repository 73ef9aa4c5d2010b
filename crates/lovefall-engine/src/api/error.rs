use thiserror::Error;

/// Errors raised while building or reconfiguring a scene.
///
/// Nothing inside the per-frame loop is fallible; these only surface at
/// startup, on config load, and on resize.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The drawing surface is missing, zero-sized or has non-finite dimensions.
    #[error("viewport must be finite and non-empty, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    /// A config value is out of its allowed domain.
    #[error("invalid scene config: {0}")]
    InvalidConfig(String),
    /// The config JSON could not be parsed.
    #[error("failed to parse scene config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
