/// Input event types the scene understands.
/// Bodies are addressed by display name, as the host UI knows them.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Focus the named body.
    Select { body: String },
    /// Return to the overview.
    Deselect,
    /// Pointer entered a body (`Some`) or left every body (`None`).
    Hover { body: Option<String> },
    /// Viewport size in CSS pixels.
    Resize { width: u32, height: u32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust drains them once per frame tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events in arrival order.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
