//! End-to-end gesture flows through the public engine API.
//!
//! These tests drive the engine the way a host shell would: raw tap
//! events in, queries and drained events out, with the in-memory
//! StringSurface standing in for the host widget.

use pintext_engine::{EngineEvent, SavedPinState, SelectionEngine, StringSurface, TextSurface};
use pintext_input::TapEvent;

// Word layout: "The" 0..3, "quick" 4..9, "brown" 10..15, "fox" 16..19,
// "jumps" 20..25
const TEXT: &str = "The quick brown fox jumps";

fn engine() -> SelectionEngine<StringSurface> {
    SelectionEngine::new(StringSurface::with_text(TEXT))
}

#[test]
fn pin_adjust_then_clear_flow() {
    let mut engine = engine();

    // Double-tap "quick": pin created over the whole word.
    engine.handle_double_tap(6);
    assert_eq!(engine.surface().selection(), (4, 9));

    // Double-tap "jumps": its midpoint (22) is nearer the end boundary,
    // so only the end moves.
    engine.handle_double_tap(22);
    assert_eq!(engine.surface().selection(), (4, 25));

    // Double-tap "The": nearer the start boundary.
    engine.handle_double_tap(0);
    assert_eq!(engine.surface().selection(), (0, 25));
    assert_eq!(engine.selected_text().unwrap(), TEXT);

    // Triple-tap (400ms gaps) clears the pin and collapses to the caret.
    engine.handle_tap(TapEvent::at(10_000));
    engine.handle_tap(TapEvent::at(10_400));
    engine.handle_tap(TapEvent::at(10_800));
    assert!(!engine.is_pin_active());
    assert_eq!(engine.surface().selection(), (0, 0));
}

#[test]
fn search_suppression_round_trip() {
    let mut engine = engine();

    // Pin "brown", then search for "jumps".
    engine.handle_double_tap(12);
    engine.drain_events();
    engine.update_search("jumps");

    assert!(engine.is_pin_active());
    assert_eq!(engine.search_results_count(), 1);
    assert_eq!(engine.current_search_index(), 1);
    assert_eq!(engine.surface().selection(), (20, 25));

    // A new pin gesture wins over the search.
    engine.handle_double_tap(17); // "fox"
    assert_eq!(engine.search_results_count(), 0);
    assert!(engine.surface().highlights().is_empty());
    // The tap's word midpoint is right of the old end boundary, so the
    // end moved.
    assert_eq!(engine.surface().selection(), (10, 19));

    let events = engine.drain_events();
    assert!(events.contains(&EngineEvent::SearchCleared));
    assert!(events.contains(&EngineEvent::PinChanged));
}

#[test]
fn counter_display_follows_navigation() {
    let mut engine = SelectionEngine::new(StringSurface::with_text(
        "The quick brown fox jumps over the lazy dog. Fox, dog, and quick.",
    ));

    engine.update_search("fox");
    assert_eq!(
        (engine.current_search_index(), engine.search_results_count()),
        (1, 2)
    );

    engine.next_search_result();
    assert_eq!(engine.current_search_index(), 2);
    engine.next_search_result();
    assert_eq!(engine.current_search_index(), 1);

    engine.update_search("");
    assert_eq!(
        (engine.current_search_index(), engine.search_results_count()),
        (0, 0)
    );
}

#[test]
fn pin_survives_a_host_state_cycle_as_json() {
    let mut engine = engine();
    engine.handle_double_tap(17); // pin "fox" -> (16, 19)

    // Hosts serialize the saved state however they persist host state;
    // JSON here, with -1 sentinels on the wire.
    let saved = serde_json::to_string(&engine.saved_pin_state()).unwrap();
    assert_eq!(saved, r#"{"start":16,"end":19}"#);

    let mut restored = SelectionEngine::new(StringSurface::with_text(TEXT));
    restored.restore_pin_state(serde_json::from_str::<SavedPinState>(&saved).unwrap());
    assert!(restored.is_pin_active());
    assert_eq!(restored.surface().selection(), (16, 19));

    // And the no-pin form round-trips to inactive.
    let empty = serde_json::to_string(&SavedPinState::empty()).unwrap();
    let mut fresh = SelectionEngine::new(StringSurface::with_text(TEXT));
    fresh.restore_pin_state(serde_json::from_str::<SavedPinState>(&empty).unwrap());
    assert!(!fresh.is_pin_active());
}

#[test]
fn keyboard_dismiss_does_not_lose_the_pin() {
    let mut engine = engine();
    engine.handle_double_tap(6);
    engine.drain_events();

    // Focus loss; the host's keyboard dismissal collapses the native
    // selection behind the engine's back.
    engine.focus_changed(false);
    engine.surface_mut().set_selection(9, 9);

    engine.focus_changed(true);
    assert_eq!(engine.surface().selection(), (4, 9));
    assert!(engine.is_pin_active());
}
