//! The event taxonomy: type tags, payload data, and the `Event` record.
//!
//! Events are a tagged union rather than a class hierarchy: [`EventData`]
//! carries one tuple variant per concrete kind, so hosts can exhaustively
//! match on the whole surface, while [`EventPayload`] ties each payload type
//! back to its static tag and category set for typed dispatch. The binding
//! between the three is declared once, in the `event_payload!` table at the
//! bottom of this file.

use std::fmt;

use crate::application::{
    AppRenderEvent, AppTickEvent, AppUpdateEvent, WindowCloseEvent, WindowFocusEvent,
    WindowLostFocusEvent, WindowMovedEvent, WindowResizeEvent,
};
use crate::category::EventCategory;
use crate::key::{KeyPressedEvent, KeyReleasedEvent};
use crate::mouse::{
    MouseButtonPressedEvent, MouseButtonReleasedEvent, MouseMovedEvent, MouseScrolledEvent,
};

// ────────────────────────────────────────────────────────────────
// EventType
// ────────────────────────────────────────────────────────────────

/// Closed tag identifying the concrete kind of an event. Fixed at
/// construction of the event instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    WindowClose,
    WindowResize,
    WindowFocus,
    WindowLostFocus,
    WindowMoved,
    AppTick,
    AppUpdate,
    AppRender,
    KeyPressed,
    KeyReleased,
    MouseButtonPressed,
    MouseButtonReleased,
    MouseMoved,
    MouseScrolled,
}

impl EventType {
    /// Category set for this kind of event. Constant per type, never per
    /// instance; this match is the single source of truth.
    pub const fn categories(self) -> EventCategory {
        match self {
            EventType::WindowClose
            | EventType::WindowResize
            | EventType::WindowFocus
            | EventType::WindowLostFocus
            | EventType::WindowMoved
            | EventType::AppTick
            | EventType::AppUpdate
            | EventType::AppRender => EventCategory::APPLICATION,
            EventType::KeyPressed | EventType::KeyReleased => {
                EventCategory::INPUT.union(EventCategory::KEYBOARD)
            }
            EventType::MouseButtonPressed | EventType::MouseButtonReleased => EventCategory::INPUT
                .union(EventCategory::MOUSE)
                .union(EventCategory::MOUSE_BUTTON),
            EventType::MouseMoved | EventType::MouseScrolled => {
                EventCategory::INPUT.union(EventCategory::MOUSE)
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            EventType::WindowClose => "WindowClose",
            EventType::WindowResize => "WindowResize",
            EventType::WindowFocus => "WindowFocus",
            EventType::WindowLostFocus => "WindowLostFocus",
            EventType::WindowMoved => "WindowMoved",
            EventType::AppTick => "AppTick",
            EventType::AppUpdate => "AppUpdate",
            EventType::AppRender => "AppRender",
            EventType::KeyPressed => "KeyPressed",
            EventType::KeyReleased => "KeyReleased",
            EventType::MouseButtonPressed => "MouseButtonPressed",
            EventType::MouseButtonReleased => "MouseButtonReleased",
            EventType::MouseMoved => "MouseMoved",
            EventType::MouseScrolled => "MouseScrolled",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ────────────────────────────────────────────────────────────────
// EventData
// ────────────────────────────────────────────────────────────────

/// The payload sum type. One variant per [`EventType`], each wrapping the
/// payload struct for that kind (unit structs for kinds with no data).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventData {
    WindowClose(WindowCloseEvent),
    WindowResize(WindowResizeEvent),
    WindowFocus(WindowFocusEvent),
    WindowLostFocus(WindowLostFocusEvent),
    WindowMoved(WindowMovedEvent),
    AppTick(AppTickEvent),
    AppUpdate(AppUpdateEvent),
    AppRender(AppRenderEvent),
    KeyPressed(KeyPressedEvent),
    KeyReleased(KeyReleasedEvent),
    MouseButtonPressed(MouseButtonPressedEvent),
    MouseButtonReleased(MouseButtonReleasedEvent),
    MouseMoved(MouseMovedEvent),
    MouseScrolled(MouseScrolledEvent),
}

impl EventData {
    pub fn event_type(&self) -> EventType {
        match self {
            EventData::WindowClose(_) => EventType::WindowClose,
            EventData::WindowResize(_) => EventType::WindowResize,
            EventData::WindowFocus(_) => EventType::WindowFocus,
            EventData::WindowLostFocus(_) => EventType::WindowLostFocus,
            EventData::WindowMoved(_) => EventType::WindowMoved,
            EventData::AppTick(_) => EventType::AppTick,
            EventData::AppUpdate(_) => EventType::AppUpdate,
            EventData::AppRender(_) => EventType::AppRender,
            EventData::KeyPressed(_) => EventType::KeyPressed,
            EventData::KeyReleased(_) => EventType::KeyReleased,
            EventData::MouseButtonPressed(_) => EventType::MouseButtonPressed,
            EventData::MouseButtonReleased(_) => EventType::MouseButtonReleased,
            EventData::MouseMoved(_) => EventType::MouseMoved,
            EventData::MouseScrolled(_) => EventType::MouseScrolled,
        }
    }
}

impl fmt::Display for EventData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventData::WindowResize(e) => {
                write!(f, "WindowResizeEvent: {}, {}", e.width(), e.height())
            }
            EventData::WindowMoved(e) => write!(f, "WindowMovedEvent: {}, {}", e.x(), e.y()),
            EventData::KeyPressed(e) => write!(
                f,
                "KeyPressedEvent: {} ({} repeats)",
                e.keycode(),
                e.repeat_count()
            ),
            EventData::KeyReleased(e) => write!(f, "KeyReleasedEvent: {}", e.keycode()),
            EventData::MouseButtonPressed(e) => {
                write!(f, "MouseButtonPressedEvent: {}", e.button())
            }
            EventData::MouseButtonReleased(e) => {
                write!(f, "MouseButtonReleasedEvent: {}", e.button())
            }
            EventData::MouseMoved(e) => write!(f, "MouseMovedEvent: {}, {}", e.x(), e.y()),
            EventData::MouseScrolled(e) => {
                write!(f, "MouseScrolledEvent: {}, {}", e.x_offset(), e.y_offset())
            }
            // Remaining kinds carry no payload.
            other => f.write_str(other.event_type().name()),
        }
    }
}

// ────────────────────────────────────────────────────────────────
// Event
// ────────────────────────────────────────────────────────────────

/// A single occurrence handed from a producer (window backend, main loop)
/// to the application's dispatch chain. Payload is immutable; the only
/// mutable state is the `handled` flag, whose false-to-true transition is
/// terminal: dispatch never resets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    data: EventData,
    handled: bool,
}

impl Event {
    pub fn new(data: EventData) -> Self {
        Self {
            data,
            handled: false,
        }
    }

    /// Tag of the wrapped variant. Pure: same answer on every call.
    pub fn event_type(&self) -> EventType {
        self.data.event_type()
    }

    pub fn category_flags(&self) -> EventCategory {
        self.event_type().categories()
    }

    /// True iff every bit of `category` is present in this event's
    /// category set.
    pub fn is_in_category(&self, category: EventCategory) -> bool {
        self.category_flags().contains(category)
    }

    pub fn data(&self) -> &EventData {
        &self.data
    }

    pub fn handled(&self) -> bool {
        self.handled
    }

    /// Marks the event consumed outside a dispatch chain (e.g. an overlay
    /// swallowing input before the rest of the application sees it). The
    /// flag cannot be cleared.
    pub fn set_handled(&mut self) {
        self.handled = true;
    }

    pub(crate) fn fold_handled(&mut self, consumed: bool) {
        self.handled |= consumed;
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}

// ────────────────────────────────────────────────────────────────
// EventPayload
// ────────────────────────────────────────────────────────────────

/// Binds a concrete payload type to its static tag and category set, and
/// extracts it back out of an [`EventData`]. Every payload implements this
/// (via the table below); there is no default.
pub trait EventPayload {
    const TYPE: EventType;
    const CATEGORIES: EventCategory;

    fn from_data(data: &EventData) -> Option<&Self>;
}

/// One row per event kind: payload type, `EventType`/`EventData` variant.
/// Generates the `EventPayload` impl and a `From<payload>` constructor for
/// [`Event`], replacing the per-class boilerplate a hierarchy would need.
macro_rules! event_payload {
    ($( $payload:ident => $kind:ident ),+ $(,)?) => {
        $(
            impl EventPayload for $payload {
                const TYPE: EventType = EventType::$kind;
                const CATEGORIES: EventCategory = EventType::$kind.categories();

                fn from_data(data: &EventData) -> Option<&Self> {
                    match data {
                        EventData::$kind(payload) => Some(payload),
                        _ => None,
                    }
                }
            }

            impl From<$payload> for Event {
                fn from(payload: $payload) -> Self {
                    Event::new(EventData::$kind(payload))
                }
            }
        )+
    };
}

event_payload! {
    WindowCloseEvent         => WindowClose,
    WindowResizeEvent        => WindowResize,
    WindowFocusEvent         => WindowFocus,
    WindowLostFocusEvent     => WindowLostFocus,
    WindowMovedEvent         => WindowMoved,
    AppTickEvent             => AppTick,
    AppUpdateEvent           => AppUpdate,
    AppRenderEvent           => AppRender,
    KeyPressedEvent          => KeyPressed,
    KeyReleasedEvent         => KeyReleased,
    MouseButtonPressedEvent  => MouseButtonPressed,
    MouseButtonReleasedEvent => MouseButtonReleased,
    MouseMovedEvent          => MouseMoved,
    MouseScrolledEvent       => MouseScrolled,
}
