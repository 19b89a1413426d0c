//! Stream processing for the alignment pipeline.
//!
//! The main entry point is [`format_file`] which reads a buffered reader to
//! the end, aligns the text, and writes the result to any `Write`
//! implementation.

pub mod pipeline;

pub use pipeline::format_file;
