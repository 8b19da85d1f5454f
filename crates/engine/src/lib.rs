//! pintext-engine: the pin-selection and search engine.
//!
//! This crate implements the tap-driven pin state machine, word-boundary
//! resolution, and the case-insensitive search/highlight/navigation
//! subsystem, plus the coordinator that enforces their interaction
//! rules. Everything around it (layout, menus, dialogs, theming) is host
//! plumbing that calls in through [`SelectionEngine`] and reacts to the
//! drained [`EngineEvent`]s.
//!
//! # Overview
//!
//! The main type is [`SelectionEngine`], generic over a [`TextSurface`]:
//! the capability seam to whatever widget owns the editable text. The
//! engine itself has no UI dependency; [`StringSurface`] is the bundled
//! in-memory surface for headless hosts and tests.
//!
//! # Example
//!
//! ```
//! use pintext_engine::{EngineEvent, SelectionEngine, StringSurface, TextSurface};
//!
//! let mut engine = SelectionEngine::new(StringSurface::with_text("aa bb cc"));
//!
//! // Double-tap inside "bb" pins that word.
//! engine.handle_double_tap(4);
//! assert!(engine.is_pin_active());
//! assert_eq!(engine.surface().selection(), (3, 5));
//!
//! // Searching takes over the visible selection; the pin survives.
//! engine.update_search("cc");
//! assert_eq!(engine.search_results_count(), 1);
//! assert_eq!(engine.surface().selection(), (6, 8));
//!
//! // Clearing the search hands the selection back to the pin.
//! engine.clear_search_highlights(true);
//! assert_eq!(engine.surface().selection(), (3, 5));
//! assert!(engine.drain_events().contains(&EngineEvent::SearchCleared));
//! ```
//!
//! # Event model
//!
//! Commands run synchronously on the caller's thread and queue
//! notifications ([`EngineEvent::SelectionChanged`],
//! [`EngineEvent::PinChanged`], [`EngineEvent::SearchCleared`]); the
//! host drains them after each command and refreshes whatever each kind
//! drives. There are no callbacks, timers, or background threads; the
//! only deferred action is the one-shot pin restore applied when focus
//! returns.

mod coordinator;
mod events;
mod pin;
mod search;
mod surface;
mod tap;
mod word;

pub use coordinator::SelectionEngine;
pub use events::{EngineEvent, EventQueue};
pub use pin::{PinController, PinnedRange, SavedPinState};
pub use search::{MatchRange, SearchEngine};
pub use surface::{StringSurface, SurfaceError, TextSurface};
pub use tap::{DoubleTapDetector, TapAction, TapTracker, DOUBLE_TAP_WINDOW_MS, TAP_WINDOW_MS};
pub use word::resolve_word;
