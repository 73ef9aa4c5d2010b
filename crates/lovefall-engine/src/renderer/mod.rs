pub mod canvas;
pub mod color;
pub mod frame;
pub mod vector;

// Re-export key types for convenient access
pub use canvas::Canvas;
pub use color::VectorColor;
pub use frame::{draw_particle, render_frame};
pub use vector::{VectorCanvas, VectorVertex};
