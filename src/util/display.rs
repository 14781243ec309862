use std::borrow::Cow;

/// Number of characters shown before a long result is cut off.
pub const DISPLAY_LIMIT: usize = 40;

/// Shortens `text` to at most `limit` characters followed by `...`.
///
/// Text that already fits is returned unchanged and without allocating.
/// Lengths are counted in characters, so multi-byte text is never split in
/// the middle of a character.
///
/// # Example
/// ```
/// use duocalc::util::display::truncate_for_display;
///
/// assert_eq!(truncate_for_display("abcdef", 4), "abcd...");
/// assert_eq!(truncate_for_display("abc", 4), "abc");
/// ```
#[must_use]
pub fn truncate_for_display(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}
