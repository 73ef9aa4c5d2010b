pub mod api;
pub mod core;
pub mod sim;
pub mod symbols;
pub mod renderer;
pub mod ui;
pub mod input;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use api::config::{SceneConfig, SpanF32};
pub use api::error::SceneError;
pub use crate::core::rng::Rng;
pub use crate::core::viewport::Viewport;
pub use sim::field::ParticleField;
pub use sim::particle::{Particle, SpawnRanges, Spawner};
pub use symbols::{Glyph, GlyphStyle, SymbolKind};
pub use renderer::canvas::Canvas;
pub use renderer::color::VectorColor;
pub use renderer::frame::{draw_particle, render_frame};
pub use renderer::vector::{VectorCanvas, VectorVertex};
pub use ui::overlay::{
    ClassChange, ClassOp, OverlayController, OverlayElement, OverlayPhase,
};
pub use input::queue::{InputQueue, SceneInput};
pub use bridge::protocol::{FrameHeader, HEADER_FLOATS, PROTOCOL_VERSION};
