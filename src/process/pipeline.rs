//! Alignment pipeline over buffered streams.

use std::io::{BufRead, Write};

use crate::format::align;
use crate::Result;

/// Align everything readable from `input` and write the result to `output`.
///
/// Returns whether the aligned text differs from the input. The input must
/// be valid UTF-8; the alignment itself is total once the text is in memory.
pub fn format_file<R: BufRead, W: Write>(mut input: R, output: &mut W) -> Result<bool> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;

    let aligned = align(&text);
    output.write_all(aligned.as_bytes())?;

    Ok(aligned != text)
}
