//! Plan compiler for the `select`/`count` grammar.
//!
//! `compile` is a pure transform from an `Expression` to a plan tree. It
//! performs no evaluation and no table lookups; every scoping decision it
//! makes is positional. Clauses of a `select` are processed in the order
//! they appear in source text, and that order is observable:
//!
//! - a `group` clause captures only the columns declared before it;
//! - an aggregate column synthesizes a whole-relation `Group` (empty keys)
//!   the first time one is seen, unless synthesis already happened;
//! - while no synthesized group is latched, the scan's column list is
//!   reassigned after every clause, so its final value depends on where the
//!   last ungrouped clause sits.
//!
//! An explicit `group` clause does not latch: a later aggregate column still
//! replaces it with a synthesized group, and the scan's columns keep being
//! reassigned afterward. This mirrors the language's reference behavior.

use crate::plan::{Filter, PlanNode};
use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;
use lispel_core::{Error, Expression, Result};

/// Compiles `expr` into a plan tree.
///
/// Returns `Ok(None)` for expressions the grammar does not recognize (an
/// empty list, an unknown head symbol, `nil`, error values): that is a
/// non-fatal "no plan" outcome, not an error. Returns `Err` only for
/// malformed clause structure or for a required sub-expression (column,
/// filter argument, group key, aggregate argument) that itself has no plan.
pub fn compile(expr: &Expression) -> Result<Option<PlanNode>> {
    match expr {
        Expression::Symbol(name) => Ok(Some(PlanNode::SymbolRef(name.clone()))),
        Expression::Number(_) | Expression::Str(_) | Expression::Bool(_) => {
            Ok(Some(PlanNode::Const(expr.clone())))
        }
        Expression::List(items) => compile_list(items),
        Expression::Nil | Expression::Error(_) => Ok(None),
    }
}

fn compile_list(items: &[Expression]) -> Result<Option<PlanNode>> {
    let head = match items.first().and_then(Expression::as_symbol) {
        Some(head) => head,
        None => return Ok(None),
    };
    match head {
        "count" => compile_aggregate(head, &items[1..]).map(Some),
        "select" => compile_select(&items[1..]).map(Some),
        _ => Ok(None),
    }
}

/// Compiles a sub-expression that must produce a plan node.
fn require(expr: &Expression) -> Result<PlanNode> {
    compile(expr)?.ok_or_else(|| Error::unplannable(expr.to_text()))
}

fn compile_aggregate(function: &str, args: &[Expression]) -> Result<PlanNode> {
    let mut arguments = Vec::new();
    for arg in args {
        arguments.push(require(arg)?);
    }
    Ok(PlanNode::Aggregate {
        function: function.to_string(),
        arguments,
    })
}

fn compile_select(clauses: &[Expression]) -> Result<PlanNode> {
    let mut source: Option<Box<PlanNode>> = None;
    let mut filters: Vec<Filter> = Vec::new();
    // Running list of every compiled column, in declaration order.
    let mut columns: Vec<PlanNode> = Vec::new();
    // Snapshot the scan will carry; reassigned per clause while ungrouped.
    let mut scan_columns: Vec<PlanNode> = Vec::new();
    // (keys, columns captured at group time), explicit or synthesized.
    let mut group: Option<(Vec<PlanNode>, Vec<PlanNode>)> = None;
    let mut has_group = false;
    let mut has_aggregate = false;

    for clause in clauses {
        let parts = match clause {
            Expression::List(parts) if !parts.is_empty() => parts,
            other => return Err(Error::unplannable(other.to_text())),
        };
        match parts[0].as_symbol() {
            Some("columns") => {
                for column_expr in &parts[1..] {
                    let node = require(column_expr)?;
                    if matches!(node, PlanNode::Aggregate { .. }) {
                        has_aggregate = true;
                    }
                    columns.push(node);
                }
            }
            Some("table") => {
                let table_expr = parts
                    .get(1)
                    .ok_or_else(|| Error::unplannable(clause.to_text()))?;
                // A bare symbol names a table; anything else that compiles
                // (a nested select, a constant) is used as the source
                // directly. An unplannable table expression leaves the
                // source unset rather than failing.
                source = match compile(table_expr)? {
                    Some(PlanNode::SymbolRef(name)) => {
                        Some(Box::new(PlanNode::Table(name)))
                    }
                    Some(node) => Some(Box::new(node)),
                    None => None,
                };
            }
            Some("where") => {
                for predicate in &parts[1..] {
                    filters.push(compile_filter(predicate)?);
                }
            }
            Some("group") => {
                let mut keys = Vec::new();
                for key_expr in &parts[1..] {
                    keys.push(require(key_expr)?);
                }
                group = Some((keys, columns.clone()));
            }
            // Unrecognized clause keywords are skipped, not rejected.
            _ => {}
        }

        if has_aggregate && !has_group {
            has_group = true;
            group = Some((Vec::new(), columns.clone()));
        }
        if !has_group {
            scan_columns = columns.clone();
        }
    }

    let scan = PlanNode::Scan {
        source,
        columns: scan_columns,
        filters,
    };
    Ok(match group {
        Some((keys, group_columns)) => PlanNode::Group {
            source: Box::new(scan),
            keys,
            columns: group_columns,
        },
        None => scan,
    })
}

fn compile_filter(predicate: &Expression) -> Result<Filter> {
    let parts = match predicate {
        Expression::List(parts) if !parts.is_empty() => parts,
        other => return Err(Error::unplannable(other.to_text())),
    };
    let operator = parts[0]
        .as_symbol()
        .ok_or_else(|| Error::unplannable(predicate.to_text()))?;
    let mut arguments = Vec::new();
    for arg in &parts[1..] {
        arguments.push(require(arg)?);
    }
    Ok(Filter {
        operator: operator.to_string(),
        arguments,
    })
}
