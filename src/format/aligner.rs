//! Columnar alignment of assignment blocks.
//!
//! The pipeline is a single forward pass over the input lines:
//! 1. classify each line into a [`LineRecord`]
//! 2. pad LHS tokens so each column matches its widest member
//! 3. pad whole LHSs so the `=` signs share one column
//! 4. rebuild the text, trimming trailing spaces per line
//!
//! Column alignment must run before separator alignment: the `=` column
//! position depends on the post-padding LHS widths.
//!
//! The transformation is total. Lines that cannot be classified fall back to
//! verbatim reproduction, so `align` never fails for any input string.

use crate::format::record::LineRecord;

/// Realign a block of text.
///
/// The output has the same number of lines as the input and ends with a
/// newline iff the input does. Behavior is fixed: there are no options.
#[must_use]
pub fn align(text: &str) -> String {
    let (body, trailing_newline) = match text.strip_suffix('\n') {
        Some(body) => (body, true),
        None => (text, false),
    };

    let mut records: Vec<LineRecord> = body.split('\n').map(LineRecord::classify).collect();

    align_columns(&mut records);
    align_separators(&mut records);

    build_output(&records, trailing_newline)
}

/// Pad each LHS token to the maximum width seen at its column position.
///
/// Tokens are whitespace-separated runs; a record with fewer tokens simply
/// does not contribute to the higher columns. Rebuilt LHSs join their padded
/// tokens with single spaces.
fn align_columns(records: &mut [LineRecord]) {
    let mut maxes: Vec<usize> = Vec::new();
    for record in records.iter().filter(|r| r.aligns_columns()) {
        for (i, token) in record.lhs.split_whitespace().enumerate() {
            let width = token.chars().count();
            if i == maxes.len() {
                maxes.push(width);
            } else if maxes[i] < width {
                maxes[i] = width;
            }
        }
    }

    for record in records.iter_mut().filter(|r| r.aligns_columns()) {
        let mut new_lhs = String::with_capacity(record.lhs.len());
        for (i, token) in record.lhs.split_whitespace().enumerate() {
            if i > 0 {
                new_lhs.push(' ');
            }
            push_padded(&mut new_lhs, token, maxes[i]);
        }
        record.lhs = new_lhs;
    }
}

/// Pad column-aligned LHSs so the `=` signs line up.
///
/// Only records that actually carry an assignment (non-empty RHS) receive
/// the padding or influence the target width; ignored records never do.
fn align_separators(records: &mut [LineRecord]) {
    let max_lhs = records
        .iter()
        .filter(|r| !r.ignore && !r.rhs.is_empty())
        .map(|r| r.lhs.chars().count())
        .max()
        .unwrap_or(0);

    for record in records.iter_mut().filter(|r| !r.rhs.is_empty()) {
        let mut padded = std::mem::take(&mut record.lhs);
        let width = padded.chars().count();
        if width < max_lhs {
            padded.push_str(&" ".repeat(max_lhs - width));
        }
        record.lhs = padded;
    }
}

/// Rebuild the final text from the aligned records.
fn build_output(records: &[LineRecord], trailing_newline: bool) -> String {
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&record.leading);
        out.push_str(&record.lhs);
        if !record.ignore && !record.rhs.is_empty() {
            if !record.separator.is_empty() {
                out.push(' ');
                out.push_str(&record.separator);
                out.push(' ');
            }
            out.push_str(&record.rhs);
        }
        out.push_str(&record.trailer);
        // Column padding can overshoot on the last token of a line with
        // nothing after it; strip the excess.
        while out.ends_with(' ') {
            out.pop();
        }
    }
    if trailing_newline {
        out.push('\n');
    }
    out
}

/// Append `token` right-padded with spaces to `width` characters.
fn push_padded(out: &mut String, token: &str, width: usize) {
    out.push_str(token);
    let len = token.chars().count();
    if len < width {
        out.push_str(&" ".repeat(width - len));
    }
}
