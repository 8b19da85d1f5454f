//! Tap event types for touch and mouse gesture handling.
//!
//! These types abstract over host toolkit event details (Android
//! MotionEvent, NSEvent, winit, ...) and provide a clean Rust-native
//! interface for tap handling. This crate is shared between the engine
//! and host front-end crates to avoid circular dependencies.

/// A raw down-event: one tap at a screen position.
///
/// The engine consumes these transiently; nothing beyond the rolling
/// tap-count/last-tap-time pair is ever retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapEvent {
    /// Milliseconds since an arbitrary host epoch. Only differences
    /// between consecutive taps matter.
    pub timestamp_ms: u64,
    /// Horizontal screen coordinate of the tap.
    pub x: f32,
    /// Vertical screen coordinate of the tap.
    pub y: f32,
}

impl TapEvent {
    /// Creates a new TapEvent at the given time and position.
    pub fn new(timestamp_ms: u64, x: f32, y: f32) -> Self {
        Self { timestamp_ms, x, y }
    }

    /// Creates a TapEvent at the given time with a zero position.
    ///
    /// Convenient in tests where only timing matters.
    pub fn at(timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms,
            x: 0.0,
            y: 0.0,
        }
    }
}

/// A double-tap already classified by the host toolkit, with the tap
/// position resolved to a text offset.
///
/// Hosts whose toolkit ships its own double-tap recognizer (Android's
/// GestureDetector, NSClickGestureRecognizer) deliver these directly;
/// hosts without one feed raw [`TapEvent`]s to the engine instead and
/// let it run its own pair window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleTapEvent {
    /// Milliseconds since the host epoch.
    pub timestamp_ms: u64,
    /// Character offset into the text under the tap.
    pub offset: usize,
}

impl DoubleTapEvent {
    /// Creates a new DoubleTapEvent at the given time and text offset.
    pub fn new(timestamp_ms: u64, offset: usize) -> Self {
        Self {
            timestamp_ms,
            offset,
        }
    }
}
