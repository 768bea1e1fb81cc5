// ember-events/src/bin/event_probe.rs

use anyhow::Result;
use ember_events::application::{WindowCloseEvent, WindowResizeEvent};
use ember_events::key::KeyPressedEvent;
use ember_events::mouse::MouseMovedEvent;
use ember_events::{Event, EventCategory, EventDispatcher};

/// Stands in for the window backend + application layer: fabricates the
/// event stream a message pump would produce and runs each event through
/// the dispatch chain a real host would install.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let feed: Vec<Event> = vec![
        WindowResizeEvent::new(1280, 720).into(),
        KeyPressedEvent::new(32, 0).into(),
        MouseMovedEvent::new(640.0, 360.0).into(),
        WindowCloseEvent.into(),
    ];

    let mut running = true;

    for mut event in feed {
        tracing::info!("incoming: {}", event);

        let mut dispatcher = EventDispatcher::new(&mut event);

        dispatcher.dispatch(|resize: &WindowResizeEvent| {
            tracing::info!("viewport now {}x{}", resize.width(), resize.height());
            true
        });

        dispatcher.dispatch(|_: &WindowCloseEvent| {
            tracing::info!("close requested, stopping the loop");
            running = false;
            true
        });

        // Everything the chain left unclaimed; input events would fall
        // through to a lower layer here.
        if !event.handled() && event.is_in_category(EventCategory::INPUT) {
            tracing::warn!("unclaimed input event: {}", event);
        }
    }

    tracing::info!("probe finished (running = {})", running);
    Ok(())
}
