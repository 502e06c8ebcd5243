/*!
# Rust Language Module

This Rust module classifies script lines and splits command arguments.

*/

#[macro_use]
mod error;
mod lex;
mod line;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::{is_quoted, lex, unquote};
pub use line::{Kind, Line, ANONYMOUS_LABEL, SEPARATOR};

/// 1-based source line number, `None` when not attributable to a line.
pub type LineNumber = Option<usize>;
