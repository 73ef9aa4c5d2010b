//! Frame header shared with a GPU host.
//! Must stay in sync with the host-side reader.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 8 floats]
//! [Vector vertices: vertex_count × 6 floats]  (separate buffer, see VectorCanvas)
//! ```
//!
//! The header is rewritten after every frame. Booleans are 0.0 / 1.0.

use crate::renderer::vector::VectorVertex;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_VIEWPORT_WIDTH: usize = 2;
pub const HEADER_VIEWPORT_HEIGHT: usize = 3;
pub const HEADER_PARTICLE_COUNT: usize = 4;
pub const HEADER_VECTOR_VERTEX_COUNT: usize = 5;
pub const HEADER_ENVELOPE_OPEN: usize = 6;
pub const HEADER_LETTER_VISIBLE: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per vector vertex: x, y, r, g, b, a (wire format — never changes).
pub const VECTOR_VERTEX_FLOATS: usize = VectorVertex::FLOATS;

/// Per-frame summary a host reads before drawing the vertex buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameHeader {
    pub frame: u64,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub particle_count: usize,
    pub vector_vertex_count: usize,
    pub envelope_open: bool,
    pub letter_visible: bool,
}

impl FrameHeader {
    /// Encode into the wire layout.
    pub fn write(&self, out: &mut [f32; HEADER_FLOATS]) {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        out[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        // f32 loses integer precision past 2^24 frames (~77 hours at 60 fps); wrap instead.
        out[HEADER_FRAME_COUNTER] = (self.frame % (1 << 24)) as f32;
        out[HEADER_VIEWPORT_WIDTH] = self.viewport_width;
        out[HEADER_VIEWPORT_HEIGHT] = self.viewport_height;
        out[HEADER_PARTICLE_COUNT] = self.particle_count as f32;
        out[HEADER_VECTOR_VERTEX_COUNT] = self.vector_vertex_count as f32;
        out[HEADER_ENVELOPE_OPEN] = flag(self.envelope_open);
        out[HEADER_LETTER_VISIBLE] = flag(self.letter_visible);
    }

    /// Size in floats of a vertex buffer holding `vector_vertex_count` vertices.
    pub fn vertex_floats(&self) -> usize {
        self.vector_vertex_count * VECTOR_VERTEX_FLOATS
    }
}
