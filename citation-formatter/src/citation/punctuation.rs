//! Punctuation and segment assembly shared by the citation styles

/// Characters that already close a sentence-like segment
const TERMINAL_PUNCTUATION: [char; 3] = ['.', '?', '!'];

fn ends_with_terminal(segment: &str) -> bool {
    segment.ends_with(TERMINAL_PUNCTUATION)
}

/// Keep at most `limit` entries and report whether any were dropped
pub(crate) fn truncate<T>(items: &[T], limit: usize) -> (&[T], bool) {
    if items.len() > limit {
        (&items[..limit], true)
    } else {
        (items, false)
    }
}

/// Append a single `.` unless the string already ends with `.`
///
/// Trailing whitespace is dropped first so no space precedes the period.
pub(crate) fn ensure_trailing_period(mut text: String) -> String {
    text.truncate(text.trim_end().len());
    if !text.ends_with('.') {
        text.push('.');
    }
    text
}

/// Join segments as sentences: `"A. B. C"`
///
/// A segment that already ends in `.`, `?` or `!` is followed by a plain space.
/// Empty segments are skipped.
pub(crate) fn join_sentences<S: AsRef<str>>(segments: &[S]) -> String {
    let mut joined = String::new();
    for segment in segments {
        let segment = segment.as_ref().trim();
        if segment.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            if !ends_with_terminal(&joined) {
                joined.push('.');
            }
            joined.push(' ');
        }
        joined.push_str(segment);
    }
    joined
}

/// Close a sentence with `.` unless it already ends in terminal punctuation
pub(crate) fn close_sentence(mut text: String) -> String {
    if !text.is_empty() && !ends_with_terminal(&text) {
        text.push('.');
    }
    text
}

/// `"A"`, `"A & B"`, `"A, B, & C"`
pub(crate) fn join_with_ampersand(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} & {second}"),
        [init @ .., last] => format!("{}, & {last}", init.join(", ")),
    }
}
