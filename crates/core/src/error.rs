//! Error types for the Lispel query compiler.

use alloc::string::String;
use core::fmt;

/// Result type alias for Lispel operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for reading and plan compilation.
///
/// A "no plan" outcome is not an error; the compiler signals it as an
/// absent result. Only malformed source text and unplannable expressions
/// in a required position (column, filter argument, group key, aggregate
/// argument) reach this type.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Malformed query text at the reader boundary.
    Syntax {
        message: String,
    },
    /// An expression that must produce a plan node compiled to "no plan".
    Unplannable {
        expr: String,
    },
}

impl Error {
    /// Creates a syntax error with the given message.
    pub fn syntax(message: impl Into<String>) -> Self {
        Error::Syntax {
            message: message.into(),
        }
    }

    /// Creates a fatal compile error for `expr` (in source form).
    pub fn unplannable(expr: impl Into<String>) -> Self {
        Error::Unplannable { expr: expr.into() }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax { message } => {
                write!(f, "Syntax error: {}", message)
            }
            Error::Unplannable { expr } => {
                write!(f, "Cannot plan expression: {}", expr)
            }
        }
    }
}
