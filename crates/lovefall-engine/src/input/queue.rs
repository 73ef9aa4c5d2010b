/// Input events the scene understands.
/// Pushed by the host's DOM listeners, drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneInput {
    /// The envelope was clicked.
    Open,
    /// The letter's close button was clicked.
    Close,
    /// The window (and with it the drawing surface) changed size.
    Resize { width: f32, height: f32 },
}

/// A queue of input events.
/// The host writes events into the queue; the frame driver drains them each tick.
pub struct InputQueue {
    events: Vec<SceneInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: SceneInput) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<SceneInput> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &SceneInput> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
