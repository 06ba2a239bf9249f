//! Lispel Core - Core types for the Lispel query compiler.
//!
//! This crate provides the foundational types shared by the reader,
//! the plan compiler, and the evaluator:
//!
//! - `Expression`: the parsed unit of the query language (symbol, constant,
//!   or ordered list)
//! - `Row`: an insertion-ordered column/value mapping produced by evaluation
//! - `Error`: error types for reading and compilation
//!
//! # Example
//!
//! ```rust
//! use lispel_core::{Expression, Row, DEFAULT_COLUMN};
//!
//! let expr = Expression::List(vec![
//!     Expression::Symbol("count".into()),
//!     Expression::Number(1.0),
//! ]);
//! assert_eq!(expr.to_text(), "(count 1)");
//!
//! let mut row = Row::new();
//! row.insert(DEFAULT_COLUMN, Expression::Number(1.0));
//! assert_eq!(row.get(DEFAULT_COLUMN), Some(&Expression::Number(1.0)));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod expression;
mod row;

pub use error::{Error, Result};
pub use expression::Expression;
pub use row::{Row, DEFAULT_COLUMN};
