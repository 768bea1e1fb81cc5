//! Category flags for coarse-grained event filtering.

use bitflags::bitflags;

bitflags! {
    /// Classifies an event along orthogonal axes, independently of its
    /// concrete [`EventType`](crate::EventType). A key press is both
    /// `INPUT` and `KEYBOARD`; a mouse click carries three flags. Listeners
    /// use this to subscribe to a whole class of events ("all mouse events")
    /// without enumerating every concrete kind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EventCategory: u8 {
        const APPLICATION  = 0b00001;
        const INPUT        = 0b00010;
        const KEYBOARD     = 0b00100;
        const MOUSE        = 0b01000;
        const MOUSE_BUTTON = 0b10000;
    }
}
