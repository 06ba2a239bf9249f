//! Lispel Query - plan compiler and evaluator for the Lispel S-expression
//! query language.
//!
//! This crate turns query text into a logical plan tree and evaluates that
//! tree against an in-memory environment:
//!
//! - `reader`: tokenizer and reader producing `Expression` trees
//! - `environment`: chained scopes holding symbol and table bindings
//! - `plan`: plan node definitions and the diagnostic tree printer
//! - `compile`: the `select`/`count` grammar compiler
//! - `eval`: single-row tree-walking evaluation
//!
//! Evaluation is deliberately single-row: a table reference resolves to the
//! first row of the seeded table, grouping and joins compile but do not
//! execute, and filters are carried in the plan without being applied.
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use lispel_core::{Expression, Row};
//! use lispel_query::{compile, read, Environment};
//!
//! let expr = read("(select (columns id) (table users))").unwrap();
//! let plan = compile(&expr).unwrap().unwrap();
//!
//! let env = Rc::new(Environment::new(None));
//! env.set_table("users", vec![Row::single("id", Expression::Number(1.0))]);
//!
//! let row = plan.evaluate(&env).unwrap();
//! assert_eq!(row.get("_"), Some(&Expression::Number(1.0)));
//! ```

#![no_std]

extern crate alloc;

pub mod compile;
pub mod environment;
pub mod eval;
pub mod plan;
pub mod reader;

pub use compile::compile;
pub use environment::Environment;
pub use plan::{Filter, PlanNode};
pub use reader::read;
