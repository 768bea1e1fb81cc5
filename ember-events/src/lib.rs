//! # Ember Events
//!
//! The event nucleus of the Ember application framework: a closed taxonomy
//! of window, input, and application-lifecycle events, plus the typed
//! dispatcher that routes one event through a chain of handlers.
//!
//! Everything here is synchronous and single-threaded: events are created
//! in the window backend's callback and dispatched on that same thread.
//! There is no queue and no re-delivery; an event nobody claims is dropped
//! when the callback returns.

pub mod application;
pub mod category;
pub mod dispatcher;
pub mod event;
pub mod key;
pub mod mouse;

// Re-export the core types so users can just use `ember_events::Event`
pub use category::EventCategory;
pub use dispatcher::EventDispatcher;
pub use event::{Event, EventData, EventPayload, EventType};
