//! The selection/search coordinator.
//!
//! [`SelectionEngine`] is the only type the host shell talks to. It owns
//! the pin controller, the search engine, both tap detectors, the event
//! queue, and the injected [`TextSurface`], and it enforces the mutual
//! exclusion between pinning and searching:
//!
//! - a double-tap pin gesture clears an active search first;
//! - a new query takes over the visible selection (first match wins)
//!   but leaves the pin state intact, to be restored when the search is
//!   cleared;
//! - clearing the search restores the pin's selection when a pin
//!   exists, and otherwise leaves the caret alone;
//! - a triple-tap clears the pin and reports through the same
//!   search-cleared channel the host banner listens on.
//!
//! Every command runs synchronously on the caller's thread; the host
//! drains [`SelectionEngine::drain_events`] after each command. Surface
//! failures are caught here, logged, and degrade to "no highlights, no
//! match count" - a search can never take the host down.

use pintext_input::{DoubleTapEvent, TapEvent};

use crate::events::{EngineEvent, EventQueue};
use crate::pin::{PinController, PinnedRange, SavedPinState};
use crate::search::SearchEngine;
use crate::surface::{SurfaceError, TextSurface};
use crate::tap::{DoubleTapDetector, TapAction, TapTracker};

/// Coordinates pinning and searching over an injected text surface.
pub struct SelectionEngine<S: TextSurface> {
    surface: S,
    pin: PinController,
    search: SearchEngine,
    taps: TapTracker,
    double_taps: DoubleTapDetector,
    events: EventQueue,
}

impl<S: TextSurface> SelectionEngine<S> {
    /// Creates an engine over the given surface.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            pin: PinController::new(),
            search: SearchEngine::new(),
            taps: TapTracker::new(),
            double_taps: DoubleTapDetector::new(),
            events: EventQueue::new(),
        }
    }

    /// The underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the underlying surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Removes and returns all pending notifications, in order.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        self.events.drain()
    }

    // ==================== Queries ====================

    /// True while a pin is active.
    pub fn is_pin_active(&self) -> bool {
        self.pin.is_active()
    }

    /// The current pin boundaries, if any (stored, un-normalized form).
    pub fn pinned(&self) -> Option<&PinnedRange> {
        self.pin.pinned()
    }

    /// Number of matches of the current search.
    pub fn search_results_count(&self) -> usize {
        self.search.match_count()
    }

    /// 1-based index of the current match, 0 when there is none.
    pub fn current_search_index(&self) -> usize {
        self.search.display_index()
    }

    /// The text under the current native selection.
    pub fn selected_text(&self) -> Result<String, SurfaceError> {
        let text = self.surface.text()?;
        let (start, end) = self.surface.selection();
        let (start, end) = (start.min(end), start.max(end));
        Ok(text.chars().skip(start).take(end - start).collect())
    }

    // ==================== Tap handling ====================

    /// Feeds one raw down-event through both tap detectors.
    ///
    /// A third qualifying tap clears the pin and consumes the event:
    /// no pin-adjustment processing happens that cycle. Otherwise, a
    /// completed double-tap is resolved to a text offset through the
    /// surface and handled as a pin gesture.
    pub fn handle_tap(&mut self, tap: TapEvent) {
        if self.taps.register(tap.timestamp_ms) == TapAction::Triple {
            self.clear_selection_pins();
            return;
        }
        if self.double_taps.register(tap.timestamp_ms) {
            let offset = self.surface.offset_for_position(tap.x, tap.y);
            self.handle_double_tap(offset);
        }
    }

    /// Handles a double-tap already classified by the host toolkit.
    pub fn handle_double_tap_event(&mut self, event: DoubleTapEvent) {
        self.handle_double_tap(event.offset);
    }

    /// Handles a double-tap at the given character offset.
    ///
    /// Creates the pin from the tapped word, or moves the boundary
    /// nearest to the tapped word's midpoint. Always takes priority
    /// over search highlighting: an active search is cleared.
    pub fn handle_double_tap(&mut self, offset: usize) {
        let text = match self.surface.text() {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Ignoring double-tap, buffer unavailable: {}", e);
                return;
            }
        };

        let (start, end) = self.pin.apply_double_tap(&text, offset);
        self.apply_selection(start, end);

        if self.search.match_count() > 0 {
            self.clear_search_highlights(true);
        } else {
            // No highlights to remove, but the banner channel still
            // gets its refresh.
            self.search.clear();
            self.events.emit(EngineEvent::SearchCleared);
        }

        self.events.emit(EngineEvent::PinChanged);
    }

    /// Clears the pin entirely (the triple-tap action).
    ///
    /// Collapses the native selection to the current caret position and
    /// reports on both the pin and the search-cleared channels. Search
    /// state itself is untouched.
    pub fn clear_selection_pins(&mut self) {
        self.pin.clear();
        let caret = self.surface.selection().0;
        self.apply_selection(caret, caret);
        self.events.emit(EngineEvent::PinChanged);
        self.events.emit(EngineEvent::SearchCleared);
    }

    // ==================== Search commands ====================

    /// Re-runs the search for `query`.
    ///
    /// Previously applied highlights are always removed first (with the
    /// cleared notification suppressed). An empty query leaves the
    /// search inactive. Otherwise every match is highlighted, the
    /// cursor moves to the first match, and that match takes over the
    /// visible selection and is scrolled into view.
    pub fn update_search(&mut self, query: &str) {
        self.clear_search_highlights(false);

        if query.is_empty() {
            return;
        }

        let text = match self.surface.text() {
            Ok(text) => text,
            Err(e) => {
                eprintln!("Search degraded, buffer unavailable: {}", e);
                return;
            }
        };

        let matches = self.search.update(&text, query).to_vec();

        for m in matches {
            if let Err(e) = self.surface.add_highlight(m.start, m.end) {
                eprintln!("Search degraded, highlight failed: {}", e);
                self.surface.clear_highlights();
                self.search.clear();
                return;
            }
        }

        if let Some(first) = self.search.current() {
            self.apply_selection(first.start, first.end);
            self.surface.scroll_into_view(first.start, first.end);
        }
    }

    /// Selects the next match, wrapping past the end.
    pub fn next_search_result(&mut self) {
        if let Some(m) = self.search.next() {
            self.apply_selection(m.start, m.end);
            self.surface.scroll_into_view(m.start, m.end);
        }
    }

    /// Selects the previous match, wrapping before the start.
    pub fn previous_search_result(&mut self) {
        if let Some(m) = self.search.previous() {
            self.apply_selection(m.start, m.end);
            self.surface.scroll_into_view(m.start, m.end);
        }
    }

    /// Clears the search: removes this engine's highlights, empties the
    /// match list, and restores the pin's selection when a pin is
    /// active.
    ///
    /// `notify` suppresses the [`EngineEvent::SearchCleared`]
    /// notification; pass `false` when the clear is itself part of a
    /// larger action that already refreshes the host.
    pub fn clear_search_highlights(&mut self, notify: bool) {
        self.surface.clear_highlights();
        self.search.clear();
        if let Some((start, end)) = self.pin.pinned().map(|pin| pin.normalized()) {
            self.apply_selection(start, end);
        }
        if notify {
            self.events.emit(EngineEvent::SearchCleared);
        }
    }

    // ==================== Lifecycle ====================

    /// Reports that the host replaced the text wholesale.
    ///
    /// Both the pin and the search are destroyed; stale offsets into
    /// the old text must not survive into the new one.
    pub fn text_reloaded(&mut self) {
        self.pin.clear();
        self.search.clear();
        self.surface.clear_highlights();
        self.events.emit(EngineEvent::PinChanged);
        self.events.emit(EngineEvent::SearchCleared);
    }

    /// Reports a host focus change.
    ///
    /// Losing focus with an active pin schedules a one-shot restore of
    /// the pin selection; regaining focus applies it. The restore is
    /// implicitly cancelled if a pin action supersedes it in between.
    pub fn focus_changed(&mut self, focused: bool) {
        if focused {
            if let Some((start, end)) = self.pin.take_pending_restore() {
                self.apply_selection(start, end);
            }
        } else {
            self.pin.focus_lost();
        }
    }

    /// Pin snapshot for a host state save.
    pub fn saved_pin_state(&self) -> SavedPinState {
        self.pin.saved_state()
    }

    /// Restores the pin from a host state save and re-applies its
    /// selection when active.
    pub fn restore_pin_state(&mut self, state: SavedPinState) {
        if let Some((start, end)) = self.pin.restore(state) {
            self.apply_selection(start, end);
        }
    }

    fn apply_selection(&mut self, start: usize, end: usize) {
        self.surface.set_selection(start, end);
        // Report what the surface actually applied (it clamps).
        let (start, end) = self.surface.selection();
        self.events.emit(EngineEvent::SelectionChanged { start, end });
    }
}
