//! Keyboard events.
//!
//! Keycodes are the platform-neutral codes the window backend reports,
//! carried as raw `u32` values until an input layer maps them to actions.

/// A key went down, or is auto-repeating while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPressedEvent {
    keycode: u32,
    repeat_count: u32,
}

impl KeyPressedEvent {
    pub fn new(keycode: u32, repeat_count: u32) -> Self {
        Self {
            keycode,
            repeat_count,
        }
    }

    pub fn keycode(&self) -> u32 {
        self.keycode
    }

    /// 0 for the initial press, incrementing for OS auto-repeat.
    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }
}

/// A key was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyReleasedEvent {
    keycode: u32,
}

impl KeyReleasedEvent {
    pub fn new(keycode: u32) -> Self {
        Self { keycode }
    }

    pub fn keycode(&self) -> u32 {
        self.keycode
    }
}
