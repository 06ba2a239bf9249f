//! Expression type definitions.
//!
//! This module defines the `Expression` enum, the parsed unit of the query
//! language. Expressions are produced by the reader and consumed by the plan
//! compiler; they are immutable once built.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// A parsed expression of the query language.
///
/// Lists are ordered and position-significant; by convention the first
/// element of a list names an operation (`select`, `columns`, `count`, ...).
#[derive(Clone, Debug, PartialEq)]
pub enum Expression {
    /// A bare symbol, e.g. a column or table name.
    Symbol(String),
    /// A numeric literal. All numbers are 64-bit floats.
    Number(f64),
    /// A double-quoted string literal.
    Str(String),
    /// A boolean literal (`#t` / `#f`).
    Bool(bool),
    /// The nil literal.
    Nil,
    /// An ordered sequence of expressions.
    List(Vec<Expression>),
    /// An error value carried through expression position.
    Error(String),
}

impl Expression {
    /// Returns true if this expression is `Nil`.
    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Expression::Nil)
    }

    /// Returns the symbol name if this is a `Symbol`, `None` otherwise.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Expression::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Renders this expression in source form.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Symbol(name) => f.write_str(name),
            Expression::Number(n) => write!(f, "{}", n),
            Expression::Str(s) => {
                // Only double quotes are escaped, mirroring the reader.
                write!(f, "\"{}\"", s.replace('"', "\\\""))
            }
            Expression::Bool(true) => f.write_str("#t"),
            Expression::Bool(false) => f.write_str("#f"),
            Expression::Nil => f.write_str("nil"),
            Expression::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(")")
            }
            Expression::Error(message) => write!(f, "!{{{}}}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_atom_rendering() {
        assert_eq!(Expression::Symbol("name".into()).to_text(), "name");
        assert_eq!(Expression::Number(1.0).to_text(), "1");
        assert_eq!(Expression::Number(2.5).to_text(), "2.5");
        assert_eq!(Expression::Bool(true).to_text(), "#t");
        assert_eq!(Expression::Bool(false).to_text(), "#f");
        assert_eq!(Expression::Nil.to_text(), "nil");
        assert_eq!(Expression::Error("oops".into()).to_text(), "!{oops}");
    }

    #[test]
    fn test_string_rendering_escapes_quotes() {
        assert_eq!(Expression::Str("bob".into()).to_text(), "\"bob\"");
        assert_eq!(
            Expression::Str("say \"hi\"".into()).to_text(),
            "\"say \\\"hi\\\"\""
        );
    }

    #[test]
    fn test_list_rendering() {
        let expr = Expression::List(vec![
            Expression::Symbol("select".into()),
            Expression::List(vec![
                Expression::Symbol("columns".into()),
                Expression::Number(1.0),
                Expression::Str("bob".into()),
            ]),
        ]);
        assert_eq!(expr.to_text(), "(select (columns 1 \"bob\"))");
    }

    #[test]
    fn test_empty_list_rendering() {
        assert_eq!(Expression::List(vec![]).to_text(), "()");
    }
}
