//! Pin state: the two user-anchored selection boundaries.
//!
//! A pin is created by a double-tap on a word, adjusted one boundary at
//! a time by further double-taps, and destroyed by a triple-tap. The pin
//! outlives the platform's transient native selection: it survives focus
//! loss (via a deferred one-shot restore) and host state save/restore
//! cycles (via [`SavedPinState`]).
//!
//! ## The un-normalized boundary quirk
//!
//! [`PinnedRange`] stores `start` and `end` exactly as assigned and
//! never swaps them. Only the *applied* native selection is normalized
//! to `(min, max)`. A later double-tap computes its nearest-boundary
//! distances against the stored values, so an inverted pair (which can
//! enter through [`PinController::restore`]) keeps steering boundary
//! choice by its stored orientation. This reproduces the original
//! behavior deliberately; do not "fix" it by normalizing the fields.

use serde::{Deserialize, Serialize};

use crate::word::resolve_word;

/// The two pinned boundaries, in character offsets.
///
/// Stored exactly as assigned; see the module docs for why `start` may
/// exceed `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinnedRange {
    pub start: usize,
    pub end: usize,
}

impl PinnedRange {
    /// The `(min, max)` form applied to the native selection.
    pub fn normalized(&self) -> (usize, usize) {
        (self.start.min(self.end), self.start.max(self.end))
    }
}

/// Pin saved-state record for host save/restore cycles.
///
/// On the wire each boundary uses `-1` as its "absent" sentinel, but the
/// pair is only ever restored or cleared together: unless both fields
/// are non-negative the restored state is "no pin".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPinState {
    pub start: i64,
    pub end: i64,
}

impl SavedPinState {
    /// Wire sentinel for an absent boundary.
    pub const ABSENT: i64 = -1;

    /// The saved form of "no pin active".
    pub fn empty() -> Self {
        Self {
            start: Self::ABSENT,
            end: Self::ABSENT,
        }
    }
}

/// Owns the optional pin and interprets double-taps against it.
///
/// The controller is purely about pin state; applying selections and
/// emitting events is the coordinator's job, so every mutation returns
/// the selection range (if any) the caller should apply.
#[derive(Debug, Default)]
pub struct PinController {
    pinned: Option<PinnedRange>,
    /// One-shot selection restore scheduled on focus loss, taken when
    /// focus returns. Superseded (dropped) by any later pin action.
    pending_restore: Option<(usize, usize)>,
}

impl PinController {
    /// Creates a controller with no pin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a pin is active.
    pub fn is_active(&self) -> bool {
        self.pinned.is_some()
    }

    /// The current pin, if any.
    pub fn pinned(&self) -> Option<&PinnedRange> {
        self.pinned.as_ref()
    }

    /// Interprets a double-tap at `offset` against `text`.
    ///
    /// With no pin, the tapped word becomes the pin and the whole word
    /// span is returned for selection. With a pin, the boundary nearest
    /// to the tapped word's midpoint moves to the corresponding word
    /// edge (ties move the start boundary), and the normalized pin range
    /// is returned.
    pub fn apply_double_tap(&mut self, text: &str, offset: usize) -> (usize, usize) {
        self.pending_restore = None;
        let (word_start, word_end) = resolve_word(text, offset);

        match &mut self.pinned {
            None => {
                self.pinned = Some(PinnedRange {
                    start: word_start,
                    end: word_end,
                });
                (word_start, word_end)
            }
            Some(pin) => {
                let tap_mid = (word_start + word_end) / 2;
                let dist_to_start = tap_mid.abs_diff(pin.start);
                let dist_to_end = tap_mid.abs_diff(pin.end);
                if dist_to_start <= dist_to_end {
                    pin.start = word_start;
                } else {
                    pin.end = word_end;
                }
                pin.normalized()
            }
        }
    }

    /// Clears the pin (triple-tap, new text, explicit clear).
    pub fn clear(&mut self) {
        self.pinned = None;
        self.pending_restore = None;
    }

    /// Records that the host lost input focus.
    ///
    /// If a pin is active, schedules a one-shot restore of its selection
    /// for when focus returns (the platform tends to collapse the
    /// selection when an on-screen keyboard dismisses).
    pub fn focus_lost(&mut self) {
        if let Some(pin) = &self.pinned {
            self.pending_restore = Some(pin.normalized());
        }
    }

    /// Takes the scheduled focus restore, if it is still pending.
    pub fn take_pending_restore(&mut self) -> Option<(usize, usize)> {
        self.pending_restore.take()
    }

    /// Snapshot for a host state save.
    pub fn saved_state(&self) -> SavedPinState {
        match &self.pinned {
            Some(pin) => SavedPinState {
                start: pin.start as i64,
                end: pin.end as i64,
            },
            None => SavedPinState::empty(),
        }
    }

    /// Restores from a host state save.
    ///
    /// Returns the selection range to apply when the restored state has
    /// an active pin. The stored boundaries are taken verbatim (no
    /// normalization); see the module docs.
    pub fn restore(&mut self, state: SavedPinState) -> Option<(usize, usize)> {
        self.pending_restore = None;
        if state.start >= 0 && state.end >= 0 {
            let pin = PinnedRange {
                start: state.start as usize,
                end: state.end as usize,
            };
            self.pinned = Some(pin);
            Some(pin.normalized())
        } else {
            self.pinned = None;
            None
        }
    }
}
