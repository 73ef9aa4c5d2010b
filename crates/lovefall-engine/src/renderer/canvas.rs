//! Drawing-surface contract shared by every backend.
//!
//! The scene renderer only talks to this trait. The engine ships
//! [`VectorCanvas`](super::vector::VectorCanvas), which tessellates into a
//! flat vertex buffer for GPU hosts; the web crate adds a backend over the
//! browser's 2D context.
//!
//! Semantics follow the HTML canvas model: a current affine transform,
//! `save`/`restore` pushing and popping it, and paths given in local
//! coordinates that are mapped through the transform when painted.

use glam::Vec2;
use lyon::path::Path;

use super::color::VectorColor;
use crate::core::viewport::Viewport;

/// A 2D drawing surface with a transform stack.
pub trait Canvas {
    /// Erase everything painted since the last clear.
    fn clear(&mut self);

    /// Match the surface to a new viewport. Prior content is not preserved.
    fn resize(&mut self, viewport: Viewport);

    /// Push the current transform.
    fn save(&mut self);

    /// Pop the transform pushed by the matching `save`. No-op on an empty stack.
    fn restore(&mut self);

    /// Post-multiply the current transform by a translation.
    fn translate(&mut self, offset: Vec2);

    /// Post-multiply the current transform by a rotation (radians, clockwise on a y-down surface).
    fn rotate(&mut self, radians: f32);

    /// Fill a closed path with a solid color.
    fn fill_path(&mut self, path: &Path, color: VectorColor);

    /// Stroke a path with a solid color.
    fn stroke_path(&mut self, path: &Path, width: f32, color: VectorColor);
}
