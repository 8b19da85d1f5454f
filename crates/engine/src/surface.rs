//! The text surface capability seam.
//!
//! The engine never owns the text it operates on. Instead of extending a
//! toolkit text widget, it talks to a [`TextSurface`]: get a snapshot of
//! the text, move the native selection, annotate match ranges, resolve a
//! screen position to a text offset. Whatever UI toolkit hosts the
//! engine implements this trait; the engine itself carries no UI
//! dependency.
//!
//! [`StringSurface`] is the in-memory implementation used by headless
//! hosts and by tests.
//!
//! All offsets are character offsets. Implementations clamp out-of-range
//! offsets to `[0, len]`; none of the operations may panic on bad input.

use std::fmt;

/// Error from a surface operation.
///
/// Surfaces backed by real widgets can fail transiently (buffer detached
/// mid-gesture, annotation rejected). The coordinator catches these and
/// degrades; they never propagate to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The buffer text could not be read.
    TextUnavailable,
    /// A highlight annotation could not be applied.
    HighlightRejected,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::TextUnavailable => write!(f, "buffer text unavailable"),
            SurfaceError::HighlightRejected => write!(f, "highlight annotation rejected"),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// Capability interface over the host's editable text.
///
/// Highlights added through [`add_highlight`](Self::add_highlight) carry
/// this engine's marker: [`clear_highlights`](Self::clear_highlights)
/// removes exactly those and must leave unrelated annotations on the
/// buffer untouched.
pub trait TextSurface {
    /// Returns a snapshot of the current text.
    fn text(&self) -> Result<String, SurfaceError>;

    /// Sets the native selection to `[start, end)` in character offsets.
    /// Out-of-range offsets are clamped, never an error.
    fn set_selection(&mut self, start: usize, end: usize);

    /// Returns the current native selection as `(start, end)`.
    /// A collapsed selection (caret) has `start == end`.
    fn selection(&self) -> (usize, usize);

    /// Applies a search-highlight annotation to `[start, end)`.
    fn add_highlight(&mut self, start: usize, end: usize) -> Result<(), SurfaceError>;

    /// Removes every highlight previously added by this engine.
    /// Idempotent: safe to call with no highlights present.
    fn clear_highlights(&mut self);

    /// Resolves a screen position to a character offset into the text.
    fn offset_for_position(&self, x: f32, y: f32) -> usize;

    /// Requests that the host scroll `[start, end)` into visibility.
    fn scroll_into_view(&mut self, start: usize, end: usize);
}

/// In-memory [`TextSurface`] backed by a `String`.
///
/// Used by headless hosts and tests. Having no layout, it resolves a
/// screen position by treating `x` as the character offset directly
/// (clamped), ignoring `y`.
#[derive(Debug, Default)]
pub struct StringSurface {
    text: String,
    selection: (usize, usize),
    highlights: Vec<(usize, usize)>,
    scrolled_to: Option<(usize, usize)>,
}

impl StringSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a surface holding the given text, caret at 0.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Replaces the text. The selection collapses to 0 and all
    /// highlights are dropped; the caller is expected to notify the
    /// engine that the text was reloaded.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selection = (0, 0);
        self.highlights.clear();
        self.scrolled_to = None;
    }

    /// Number of characters in the text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// The highlight ranges currently applied, in application order.
    pub fn highlights(&self) -> &[(usize, usize)] {
        &self.highlights
    }

    /// The last range requested to be scrolled into view, if any.
    pub fn scrolled_to(&self) -> Option<(usize, usize)> {
        self.scrolled_to
    }

    fn clamp(&self, offset: usize) -> usize {
        offset.min(self.char_len())
    }
}

impl TextSurface for StringSurface {
    fn text(&self) -> Result<String, SurfaceError> {
        Ok(self.text.clone())
    }

    fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = (self.clamp(start), self.clamp(end));
    }

    fn selection(&self) -> (usize, usize) {
        self.selection
    }

    fn add_highlight(&mut self, start: usize, end: usize) -> Result<(), SurfaceError> {
        self.highlights.push((self.clamp(start), self.clamp(end)));
        Ok(())
    }

    fn clear_highlights(&mut self) {
        self.highlights.clear();
    }

    fn offset_for_position(&self, x: f32, _y: f32) -> usize {
        if x <= 0.0 {
            0
        } else {
            self.clamp(x as usize)
        }
    }

    fn scroll_into_view(&mut self, start: usize, end: usize) {
        self.scrolled_to = Some((self.clamp(start), self.clamp(end)));
    }
}
