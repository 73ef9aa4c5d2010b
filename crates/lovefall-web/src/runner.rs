use lovefall_engine::{
    render_frame, Canvas, ClassChange, FrameHeader, InputQueue, OverlayController,
    ParticleField, SceneConfig, SceneError, SceneInput, VectorCanvas, Viewport, HEADER_FLOATS,
};

/// Frame driver that wires up the scene loop.
///
/// Owns the particle field, the overlay controller and a canvas backend. The
/// host calls [`SceneRunner::tick`] once per display frame; DOM listeners only
/// push into the input queue, which is drained at the start of the next tick.
pub struct SceneRunner<C: Canvas> {
    config: SceneConfig,
    field: ParticleField,
    overlay: OverlayController,
    input: InputQueue,
    canvas: C,
    frame: u64,
    /// Flat header for host-side reads (headless backend only).
    header: [f32; HEADER_FLOATS],
}

impl<C: Canvas> SceneRunner<C> {
    pub fn new(config: SceneConfig, viewport: Viewport, mut canvas: C) -> Result<Self, SceneError> {
        let field = ParticleField::new(&config, viewport)?;
        let overlay = OverlayController::new(config.reveal_delay);
        canvas.resize(viewport);

        Ok(Self {
            config,
            field,
            overlay,
            input: InputQueue::new(),
            canvas,
            frame: 0,
            header: [0.0; HEADER_FLOATS],
        })
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: SceneInput) {
        self.input.push(event);
    }

    /// Run one frame: overlay timers, queued input, simulation, then paint.
    pub fn tick(&mut self, dt: f32) {
        // Advance timers before applying new triggers so a click's delay
        // starts counting from this frame, not from the previous one.
        self.overlay.tick(dt);

        for event in self.input.drain() {
            match event {
                SceneInput::Open => self.overlay.open(),
                SceneInput::Close => self.overlay.close(),
                SceneInput::Resize { width, height } => {
                    if let Err(err) = self.resize(width, height) {
                        log::warn!("ignoring resize: {err}");
                    }
                }
            }
        }

        self.field.advance();
        render_frame(self.field.iter(), &mut self.canvas, self.config.sparkle_line_width);
        self.frame += 1;
    }

    /// Resize the surface. Nothing drawn before the resize is kept; the next
    /// tick repaints from the current particle state.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), SceneError> {
        let viewport = Viewport::new(width, height)?;
        self.field.resize(viewport);
        self.canvas.resize(viewport);
        log::debug!("resized to {width}x{height}");
        Ok(())
    }

    /// Class-list changes for the host to apply to the DOM, in order.
    pub fn drain_class_changes(&mut self) -> Vec<ClassChange> {
        self.overlay.drain_changes()
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn overlay(&self) -> &OverlayController {
        &self.overlay
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn frame_header(&self, vector_vertex_count: usize) -> FrameHeader {
        let viewport = self.field.viewport();
        FrameHeader {
            frame: self.frame,
            viewport_width: viewport.width(),
            viewport_height: viewport.height(),
            particle_count: self.field.len(),
            vector_vertex_count,
            envelope_open: self.overlay.envelope_open(),
            letter_visible: self.overlay.letter_visible(),
        }
    }
}

impl SceneRunner<VectorCanvas> {
    /// Refresh the flat header after a tick.
    pub fn publish_header(&mut self) {
        let header = self.frame_header(self.canvas.vertex_count());
        header.write(&mut self.header);
    }

    // ---- Pointer accessors for host-side reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn header(&self) -> &[f32; HEADER_FLOATS] {
        &self.header
    }

    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.canvas.buffer_ptr()
    }

    pub fn vector_vertex_count(&self) -> u32 {
        self.canvas.vertex_count() as u32
    }
}
