//! ocdformat - Columnar alignment for assignment-heavy source code
//!
//! Reflows a block of declaration or assignment lines so that corresponding
//! tokens line up in columns and `=` signs share one column.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod bracket;
pub mod cli;
pub mod error;
pub mod format;
pub mod process;

// Re-export commonly used types
pub use bracket::find_open_bracket;
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use error::Result;
pub use format::{align, LineRecord};
