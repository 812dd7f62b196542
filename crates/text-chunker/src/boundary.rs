//! Forward-only boundary search past a target cut point.

/// Move a naive cut forward to the nearest paragraph or word break.
///
/// Prefers a paragraph break (`\n` followed by end of text or another `\n`)
/// within `paragraph_window` characters of the cut, then falls back to the
/// first space or tab within `word_window` characters. The cut never moves
/// backward, so a chunk may exceed the target size by up to
/// `paragraph_window` characters but is never shortened below it.
pub(crate) fn adjust_end(
    chars: &[char],
    end: usize,
    paragraph_window: usize,
    word_window: usize,
) -> usize {
    debug_assert!(end <= chars.len());
    let total = chars.len();

    let paragraph_limit = end.saturating_add(paragraph_window).min(total);
    for i in end..paragraph_limit {
        if chars[i] == '\n' && (i + 1 == total || chars[i + 1] == '\n') {
            return i + 1;
        }
    }

    let word_limit = end.saturating_add(word_window).min(total);
    for i in end..word_limit {
        if chars[i] == ' ' || chars[i] == '\t' {
            return i;
        }
    }

    end
}
