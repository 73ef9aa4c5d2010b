//! Lyon-based tessellating canvas.
//!
//! Provides CPU-side tessellation of filled and stroked paths using Lyon,
//! producing a flat triangle-list vertex buffer a GPU host can upload as-is.
//! Each vertex is mapped through the canvas transform at tessellation time,
//! so the buffer is already in surface coordinates.
//!
//! # Usage
//!
//! ```ignore
//! let mut canvas = VectorCanvas::new(viewport, 0.5);
//! render_frame(field.iter(), &mut canvas, 1.0);
//! upload(canvas.vertices());
//! ```

use bytemuck::{Pod, Zeroable};
use glam::{Affine2, Vec2};
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor,
    StrokeOptions, StrokeTessellator, StrokeVertex, StrokeVertexConstructor, VertexBuffers,
};

use super::canvas::Canvas;
use super::color::VectorColor;
use crate::core::viewport::Viewport;

/// Per-vertex data for vector rendering.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24

    fn at(position: Vec2, color: VectorColor) -> Self {
        Self {
            x: position.x,
            y: position.y,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        }
    }
}

/// Vertex constructor for lyon fill tessellation.
struct FillVertexCtor {
    color: VectorColor,
    transform: Affine2,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex::at(self.transform.transform_point2(Vec2::new(p.x, p.y)), self.color)
    }
}

/// Vertex constructor for lyon stroke tessellation.
struct StrokeVertexCtor {
    color: VectorColor,
    transform: Affine2,
}

impl StrokeVertexConstructor<VectorVertex> for StrokeVertexCtor {
    fn new_vertex(&mut self, vertex: StrokeVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex::at(self.transform.transform_point2(Vec2::new(p.x, p.y)), self.color)
    }
}

/// Canvas backend that tessellates every draw call into a vertex buffer.
///
/// Holds lyon tessellators, the output buffer, and the transform stack.
/// `clear` empties the buffer; the transform stack is left alone, as on an
/// HTML canvas.
pub struct VectorCanvas {
    fill_tess: FillTessellator,
    stroke_tess: StrokeTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    buffer: Vec<f32>,
    transform: Affine2,
    stack: Vec<Affine2>,
    tolerance: f32,
    size: Vec2,
}

impl VectorCanvas {
    /// Create a canvas covering `viewport`, tessellating curves to within `tolerance` pixels.
    pub fn new(viewport: Viewport, tolerance: f32) -> Self {
        Self {
            fill_tess: FillTessellator::new(),
            stroke_tess: StrokeTessellator::new(),
            geometry: VertexBuffers::new(),
            buffer: Vec::with_capacity(16384 * VectorVertex::FLOATS),
            transform: Affine2::IDENTITY,
            stack: Vec::with_capacity(8),
            tolerance,
            size: viewport.size(),
        }
    }

    /// Number of vertices currently in the buffer.
    pub fn vertex_count(&self) -> usize {
        self.buffer.len() / VectorVertex::FLOATS
    }

    /// The flat `[x, y, r, g, b, a]` triangle list.
    pub fn vertices(&self) -> &[f32] {
        &self.buffer
    }

    /// Raw pointer to the flat float buffer (for host-side copies).
    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    /// Current surface size.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Current transform (local → surface).
    pub fn transform(&self) -> Affine2 {
        self.transform
    }

    /// Depth of the save/restore stack.
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    /// Flush indexed geometry to the flat buffer as a triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            let v = &self.geometry.vertices[*idx as usize];
            self.buffer.extend_from_slice(&[v.x, v.y, v.r, v.g, v.b, v.a]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }
}

impl Canvas for VectorCanvas {
    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn resize(&mut self, viewport: Viewport) {
        self.size = viewport.size();
        self.buffer.clear();
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        if let Some(t) = self.stack.pop() {
            self.transform = t;
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.transform = self.transform * Affine2::from_angle(radians);
    }

    fn fill_path(&mut self, path: &Path, color: VectorColor) {
        let ctor = FillVertexCtor {
            color,
            transform: self.transform,
        };
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(self.tolerance),
            &mut BuffersBuilder::new(&mut self.geometry, ctor),
        );

        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => {
                log::warn!("fill tessellation failed: {err:?}");
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    fn stroke_path(&mut self, path: &Path, width: f32, color: VectorColor) {
        let ctor = StrokeVertexCtor {
            color,
            transform: self.transform,
        };
        let result = self.stroke_tess.tessellate_path(
            path,
            &StrokeOptions::tolerance(self.tolerance).with_line_width(width),
            &mut BuffersBuilder::new(&mut self.geometry, ctor),
        );

        match result {
            Ok(()) => self.flush_geometry(),
            Err(err) => {
                log::warn!("stroke tessellation failed: {err:?}");
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }
}
