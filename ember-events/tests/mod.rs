use ember_events::application::{
    AppTickEvent, WindowCloseEvent, WindowFocusEvent, WindowResizeEvent,
};
use ember_events::key::{KeyPressedEvent, KeyReleasedEvent};
use ember_events::mouse::{MouseButtonPressedEvent, MouseMovedEvent, MouseScrolledEvent};
use ember_events::{Event, EventCategory, EventData, EventDispatcher, EventType};

// ============================================================================
// Event Construction Tests
// ============================================================================

#[test]
fn test_window_resize_event_fields() {
    let event: Event = WindowResizeEvent::new(1920, 1080).into();

    match event.data() {
        EventData::WindowResize(resize) => {
            assert_eq!(resize.width(), 1920);
            assert_eq!(resize.height(), 1080);
        }
        _ => panic!("Expected WindowResize variant"),
    }

    assert_eq!(event.event_type(), EventType::WindowResize);
    assert!(event.is_in_category(EventCategory::APPLICATION));
    assert!(!event.handled());
}

#[test]
fn test_window_resize_display_contains_dimensions() {
    let event: Event = WindowResizeEvent::new(1920, 1080).into();
    let text = event.to_string();
    assert!(text.contains("1920"));
    assert!(text.contains("1080"));
}

#[test]
fn test_payloadless_event_displays_type_name() {
    let event: Event = WindowCloseEvent.into();
    assert_eq!(event.to_string(), "WindowClose");

    let event: Event = AppTickEvent.into();
    assert_eq!(event.to_string(), "AppTick");
}

#[test]
fn test_key_pressed_event_fields() {
    let event: Event = KeyPressedEvent::new(65, 3).into();
    match event.data() {
        EventData::KeyPressed(key) => {
            assert_eq!(key.keycode(), 65);
            assert_eq!(key.repeat_count(), 3);
        }
        _ => panic!("Expected KeyPressed variant"),
    }
}

#[test]
fn test_event_type_is_stable_across_calls() {
    let event: Event = MouseScrolledEvent::new(0.0, -1.5).into();
    assert_eq!(event.event_type(), event.event_type());
    assert_eq!(event.event_type(), EventType::MouseScrolled);
}

// ============================================================================
// Category Tests
// ============================================================================

#[test]
fn test_key_event_categories() {
    let event: Event = KeyReleasedEvent::new(10).into();
    assert!(event.is_in_category(EventCategory::INPUT));
    assert!(event.is_in_category(EventCategory::KEYBOARD));
    assert!(!event.is_in_category(EventCategory::MOUSE));
    assert!(!event.is_in_category(EventCategory::APPLICATION));
}

#[test]
fn test_mouse_button_event_categories() {
    let event: Event = MouseButtonPressedEvent::new(0).into();
    assert!(event.is_in_category(EventCategory::INPUT));
    assert!(event.is_in_category(EventCategory::MOUSE));
    assert!(event.is_in_category(EventCategory::MOUSE_BUTTON));
    assert!(!event.is_in_category(EventCategory::KEYBOARD));
}

#[test]
fn test_is_in_category_requires_full_subset() {
    let event: Event = MouseMovedEvent::new(4.0, 8.0).into();

    // Both bits present, so the subset holds.
    assert!(event.is_in_category(EventCategory::INPUT | EventCategory::MOUSE));
    // MOUSE_BUTTON is missing: a partial overlap is not membership.
    assert!(!event.is_in_category(EventCategory::MOUSE | EventCategory::MOUSE_BUTTON));
}

#[test]
fn test_category_flags_match_type_table() {
    let event: Event = WindowFocusEvent.into();
    assert_eq!(event.category_flags(), EventType::WindowFocus.categories());
    assert_eq!(event.category_flags(), EventCategory::APPLICATION);
}

// ============================================================================
// Dispatcher Tests
// ============================================================================

#[test]
fn test_dispatch_matching_type_invokes_handler_once() {
    let mut event: Event = WindowResizeEvent::new(800, 600).into();
    let mut calls = 0;

    let mut dispatcher = EventDispatcher::new(&mut event);
    let matched = dispatcher.dispatch(|resize: &WindowResizeEvent| {
        calls += 1;
        assert_eq!(resize.width(), 800);
        true
    });

    assert!(matched);
    assert_eq!(calls, 1);
    assert!(event.handled());
}

#[test]
fn test_dispatch_wrong_type_skips_handler() {
    let mut event: Event = WindowResizeEvent::new(800, 600).into();

    let mut dispatcher = EventDispatcher::new(&mut event);
    let matched = dispatcher.dispatch(|_: &KeyPressedEvent| {
        panic!("handler must not run for a non-matching type");
    });

    assert!(!matched);
    assert!(!event.handled());
}

#[test]
fn test_dispatch_handler_can_decline_event() {
    let mut event: Event = WindowCloseEvent.into();

    let mut dispatcher = EventDispatcher::new(&mut event);
    let matched = dispatcher.dispatch(|_: &WindowCloseEvent| false);

    // The dispatch occurred, but the handler chose not to consume.
    assert!(matched);
    assert!(!event.handled());
}

#[test]
fn test_chained_dispatch_only_matching_handler_runs() {
    let mut event: Event = KeyPressedEvent::new(13, 0).into();
    let mut resize_calls = 0;
    let mut key_calls = 0;

    let mut dispatcher = EventDispatcher::new(&mut event);
    dispatcher.dispatch(|_: &WindowResizeEvent| {
        resize_calls += 1;
        true
    });
    dispatcher.dispatch(|_: &KeyPressedEvent| {
        key_calls += 1;
        true
    });

    assert_eq!(resize_calls, 0);
    assert_eq!(key_calls, 1);
    assert!(event.handled());
}

#[test]
fn test_handled_flag_is_terminal() {
    let mut event: Event = WindowCloseEvent.into();

    let mut dispatcher = EventDispatcher::new(&mut event);
    assert!(dispatcher.dispatch(|_: &WindowCloseEvent| true));
    // A later handler declining the event must not clear the flag.
    assert!(dispatcher.dispatch(|_: &WindowCloseEvent| false));
    assert!(dispatcher.is_handled());

    assert!(event.handled());
}

#[test]
fn test_dispatcher_reports_handled_mid_chain() {
    let mut event: Event = AppTickEvent.into();

    let mut dispatcher = EventDispatcher::new(&mut event);
    assert!(!dispatcher.is_handled());
    dispatcher.dispatch(|_: &AppTickEvent| true);
    assert!(dispatcher.is_handled());
}

#[test]
fn test_unmatched_event_falls_through_chain() {
    // A resize offered only key/mouse handlers comes out the other side
    // untouched.
    let mut event: Event = WindowResizeEvent::new(640, 480).into();

    let mut dispatcher = EventDispatcher::new(&mut event);
    assert!(!dispatcher.dispatch(|_: &KeyPressedEvent| true));
    assert!(!dispatcher.dispatch(|_: &MouseMovedEvent| true));

    assert!(!event.handled());
}

#[test]
fn test_set_handled_outside_dispatch() {
    let mut event: Event = MouseMovedEvent::new(1.0, 2.0).into();
    event.set_handled();

    let mut dispatcher = EventDispatcher::new(&mut event);
    assert!(dispatcher.is_handled());
    // Still dispatched; short-circuiting is the call site's choice.
    assert!(dispatcher.dispatch(|_: &MouseMovedEvent| false));
    assert!(event.handled());
}

// ============================================================================
// Fallible Dispatch Tests
// ============================================================================

#[test]
fn test_try_dispatch_ok_path_sets_handled() {
    let mut event: Event = WindowResizeEvent::new(320, 240).into();

    let mut dispatcher = EventDispatcher::new(&mut event);
    let result: Result<bool, String> = dispatcher.try_dispatch(|_: &WindowResizeEvent| Ok(true));

    assert_eq!(result, Ok(true));
    assert!(event.handled());
}

#[test]
fn test_try_dispatch_mismatch_is_ok_false() {
    let mut event: Event = WindowResizeEvent::new(320, 240).into();

    let mut dispatcher = EventDispatcher::new(&mut event);
    let result: Result<bool, String> =
        dispatcher.try_dispatch(|_: &KeyPressedEvent| Err("must not run".to_string()));

    assert_eq!(result, Ok(false));
    assert!(!event.handled());
}

#[test]
fn test_try_dispatch_propagates_handler_error() {
    let mut event: Event = WindowCloseEvent.into();

    let mut dispatcher = EventDispatcher::new(&mut event);
    let result: Result<bool, String> =
        dispatcher.try_dispatch(|_: &WindowCloseEvent| Err("shutdown hook failed".to_string()));

    assert_eq!(result, Err("shutdown hook failed".to_string()));
    // Error leaves the flag untouched; the caller decides what to do next.
    assert!(!event.handled());
}
