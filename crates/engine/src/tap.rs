//! Tap timing classification.
//!
//! Two detectors run concurrently over the same raw down-event stream:
//!
//! - [`TapTracker`] keeps the rolling tap count that recognizes a
//!   triple-tap (three downs pairwise within [`TAP_WINDOW_MS`]).
//! - [`DoubleTapDetector`] recognizes a double-tap with its own,
//!   shorter, platform-standard window ([`DOUBLE_TAP_WINDOW_MS`]).
//!
//! Both are plain elapsed-time comparisons over the incoming timestamps;
//! no timers are scheduled and no state exists beyond the last-tap time
//! and the count.

/// Window for the rolling triple-tap counter, in milliseconds.
pub const TAP_WINDOW_MS: u64 = 500;

/// Window for recognizing a pair of downs as a double-tap, in
/// milliseconds. Matches the conventional toolkit double-tap timeout.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Terminal action derived from the rolling tap count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    /// The tap only advanced the count.
    None,
    /// Third qualifying tap: the caller must clear the pin and consume
    /// the event (no pin-adjustment processing this cycle).
    Triple,
}

/// Rolling tap counter for triple-tap recognition.
#[derive(Debug, Default)]
pub struct TapTracker {
    count: u32,
    last_tap_ms: u64,
}

impl TapTracker {
    /// Creates a tracker in the idle state (count 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a down-event at time `timestamp_ms`.
    ///
    /// Increments the count when the previous tap was less than
    /// [`TAP_WINDOW_MS`] ago, otherwise restarts at 1. Reaching 3 fires
    /// [`TapAction::Triple`] and resets the count to 0.
    pub fn register(&mut self, timestamp_ms: u64) -> TapAction {
        if timestamp_ms.wrapping_sub(self.last_tap_ms) < TAP_WINDOW_MS && self.count > 0 {
            self.count += 1;
        } else {
            self.count = 1;
        }
        self.last_tap_ms = timestamp_ms;

        if self.count == 3 {
            self.count = 0;
            TapAction::Triple
        } else {
            TapAction::None
        }
    }

    /// Current rolling tap count.
    pub fn count(&self) -> u32 {
        self.count
    }
}

/// Pair-window double-tap detector.
///
/// A down-event arriving within [`DOUBLE_TAP_WINDOW_MS`] of the previous
/// one completes a double-tap. The completing event consumes the pair:
/// a third quick tap starts a new pair rather than firing again.
#[derive(Debug, Default)]
pub struct DoubleTapDetector {
    last_down_ms: Option<u64>,
}

impl DoubleTapDetector {
    /// Creates a detector with no pending first tap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a down-event; returns true when it completes a
    /// double-tap.
    pub fn register(&mut self, timestamp_ms: u64) -> bool {
        match self.last_down_ms {
            Some(last) if timestamp_ms.wrapping_sub(last) < DOUBLE_TAP_WINDOW_MS => {
                self.last_down_ms = None;
                true
            }
            _ => {
                self.last_down_ms = Some(timestamp_ms);
                false
            }
        }
    }
}
