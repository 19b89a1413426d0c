//! Source code alignment.
//!
//! This module contains the core alignment logic organized into submodules:
//! - [`record`]: Classifies raw lines into [`LineRecord`]s
//! - [`aligner`]: The two-phase columnar alignment pass over the records
//!
//! The entry point is [`align`], a pure text-to-text transformation.

pub mod aligner;
pub mod record;

pub use aligner::align;
pub use record::LineRecord;
