/// Keyboard key, reduced to what viewer commands need.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,
    /// A key that produced a printable character (layout-aware).
    Char(char),
    /// Any other key.
    Other,
}

/// Key press with its repeat flag.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyPress {
    pub key: Key,
    /// True when generated by key auto-repeat.
    pub repeat: bool,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key pressed (releases are not reported).
    KeyPressed(KeyPress),

    /// Pointer moved, in logical pixels.
    PointerMoved { x: f32, y: f32 },

    /// Pointer left the window surface.
    PointerLeft,
}
