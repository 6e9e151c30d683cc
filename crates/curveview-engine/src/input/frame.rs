use super::types::KeyPress;

/// Per-frame input deltas.
///
/// `InputState` holds the current state (pointer position).
/// `InputFrame` holds what happened since the previous frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Key presses this frame, in arrival order.
    pub key_presses: Vec<KeyPress>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.key_presses.clear();
    }
}
