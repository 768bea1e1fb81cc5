//! Mouse events.
//!
//! Cursor positions are in window-local logical coordinates, matching what
//! the window backend hands to its callback.

/// A mouse button went down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonPressedEvent {
    button: u8,
}

impl MouseButtonPressedEvent {
    pub fn new(button: u8) -> Self {
        Self { button }
    }

    pub fn button(&self) -> u8 {
        self.button
    }
}

/// A mouse button was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseButtonReleasedEvent {
    button: u8,
}

impl MouseButtonReleasedEvent {
    pub fn new(button: u8) -> Self {
        Self { button }
    }

    pub fn button(&self) -> u8 {
        self.button
    }
}

/// The cursor moved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseMovedEvent {
    x: f32,
    y: f32,
}

impl MouseMovedEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }
}

/// The scroll wheel or trackpad scrolled. Horizontal offset is nonzero on
/// devices that support it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseScrolledEvent {
    x_offset: f32,
    y_offset: f32,
}

impl MouseScrolledEvent {
    pub fn new(x_offset: f32, y_offset: f32) -> Self {
        Self { x_offset, y_offset }
    }

    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }
}
