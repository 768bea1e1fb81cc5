//! Typed routing of a single event to the handlers that care about it.

use crate::event::{Event, EventPayload};

/// Routes one [`Event`] through a chain of typed handlers. Constructed by
/// the host's "on event" callback, used for the duration of that callback,
/// then dropped; it borrows the event rather than owning it.
///
/// Handlers are tried in call-site order. A dispatch call whose type does
/// not match the event is a no-op that reports `false`, not an error. The
/// dispatcher never short-circuits the chain itself; a call site that wants
/// to stop after a match checks [`is_handled`](Self::is_handled).
///
/// # Example
///
/// ```
/// use ember_events::application::{WindowCloseEvent, WindowResizeEvent};
/// use ember_events::{Event, EventDispatcher};
///
/// let mut event: Event = WindowResizeEvent::new(1280, 720).into();
/// let mut dispatcher = EventDispatcher::new(&mut event);
///
/// dispatcher.dispatch(|resize: &WindowResizeEvent| {
///     println!("resized to {}x{}", resize.width(), resize.height());
///     true
/// });
/// dispatcher.dispatch(|_: &WindowCloseEvent| true); // wrong type, skipped
///
/// assert!(event.handled());
/// ```
pub struct EventDispatcher<'a> {
    event: &'a mut Event,
}

impl<'a> EventDispatcher<'a> {
    pub fn new(event: &'a mut Event) -> Self {
        Self { event }
    }

    /// If the wrapped event is a `T`, invokes `handler` with its payload
    /// exactly once, folds the handler's return value into the event's
    /// `handled` flag, and returns `true`. Otherwise returns `false` without
    /// invoking the handler and without touching `handled`.
    ///
    /// The flag is folded with OR: a handler returning `false` after an
    /// earlier one consumed the event does not un-handle it.
    pub fn dispatch<T, F>(&mut self, handler: F) -> bool
    where
        T: EventPayload,
        F: FnOnce(&T) -> bool,
    {
        let Some(payload) = T::from_data(self.event.data()) else {
            return false;
        };

        let consumed = handler(payload);
        self.event.fold_handled(consumed);
        tracing::trace!("dispatched {} (consumed: {})", T::TYPE, consumed);
        true
    }

    /// Fallible twin of [`dispatch`](Self::dispatch) for handlers that can
    /// fail. A handler error propagates to the caller with `handled`
    /// untouched; whether to abort the rest of the chain is the caller's
    /// decision. A type mismatch is `Ok(false)`, not an error.
    pub fn try_dispatch<T, E, F>(&mut self, handler: F) -> Result<bool, E>
    where
        T: EventPayload,
        F: FnOnce(&T) -> Result<bool, E>,
    {
        let Some(payload) = T::from_data(self.event.data()) else {
            return Ok(false);
        };

        let consumed = handler(payload)?;
        self.event.fold_handled(consumed);
        tracing::trace!("dispatched {} (consumed: {})", T::TYPE, consumed);
        Ok(true)
    }

    /// Whether some earlier handler in this chain (or the host, before the
    /// chain started) already consumed the event.
    pub fn is_handled(&self) -> bool {
        self.event.handled()
    }
}
