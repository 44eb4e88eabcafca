pub mod error;
pub mod json;
pub mod parser;
pub mod sexpr;
pub mod tree;
pub mod validate;
pub mod walk;

use std::fmt;

pub use error::{ParseError, Position};
pub use tree::{Node, Value};
pub use validate::{validate_shape, ShapeError};
pub use walk::{flatten, render_lines, WalkError};

// ── Core API ───────────────────────────────────────────────────────

/// Any error the parse-then-flatten pipeline can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Parse(ParseError),
    Walk(WalkError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => err.fmt(f),
            Error::Walk(err) => err.fmt(f),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<WalkError> for Error {
    fn from(err: WalkError) -> Self {
        Error::Walk(err)
    }
}

/// Parse a tree expression and flatten it, returning the emitted leaf
/// lines.
pub fn flatten_source(input: &str) -> Result<String, Error> {
    let value = parser::parse(input)?;
    Ok(walk::render_lines(&value)?)
}
