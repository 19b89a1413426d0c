//! Backward scan for the nearest unmatched opening bracket.
//!
//! Used for jump-to-opening-bracket navigation: given a caret position, the
//! host subtracts whatever cursor adjustment it needs (the original editor
//! command used `caret - 2` to step over a closing bracket) and asks where
//! the enclosing `(` or `{` ends.

/// Find the position just inside the unmatched opening bracket before `offset`.
///
/// Scans positions `offset` down to 1, decrementing a nesting counter on
/// `(`/`{` and incrementing on `)`/`}`. Returns the byte offset immediately
/// after the first bracket that drives the counter negative, or `None` when
/// the start of the text is reached first.
///
/// Offsets are byte offsets. Only ASCII bracket bytes are inspected, which
/// is safe inside UTF-8 text.
#[must_use]
pub fn find_open_bracket(text: &str, offset: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return None;
    }
    let mut nesting: i32 = 0;
    let mut pos = offset.min(bytes.len() - 1);
    while pos > 0 {
        match bytes[pos] {
            b'(' | b'{' => {
                nesting -= 1;
                if nesting < 0 {
                    return Some(pos + 1);
                }
            }
            b')' | b'}' => nesting += 1,
            _ => {}
        }
        pos -= 1;
    }
    None
}
