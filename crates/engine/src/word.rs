//! Word boundary resolution.
//!
//! Given a text snapshot and a character offset, [`resolve_word`] returns
//! the contiguous non-whitespace span containing that offset. This is the
//! leaf the pin controller builds on: every double-tap is first resolved
//! to a word span before it creates or adjusts a pin boundary.

/// Returns the boundaries `(start, end)` of the word at the given
/// character offset.
///
/// Scans backward from `offset` while the previous character is
/// non-whitespace, and forward while the current character is
/// non-whitespace. Whitespace classification is `char::is_whitespace`
/// (standard Unicode whitespace: space, tab, newline, NBSP, ...).
///
/// `offset` is clamped to `[0, char_count]`; an empty text always
/// resolves to `(0, 0)`. Pure and deterministic: no side effects, and
/// the same `(text, offset)` always produces the same span.
pub fn resolve_word(text: &str, offset: usize) -> (usize, usize) {
    if text.is_empty() {
        return (0, 0);
    }

    let chars: Vec<char> = text.chars().collect();
    let offset = offset.min(chars.len());

    let mut start = offset;
    let mut end = offset;
    while start > 0 && !chars[start - 1].is_whitespace() {
        start -= 1;
    }
    while end < chars.len() && !chars[end].is_whitespace() {
        end += 1;
    }
    (start, end)
}
