//! Logical plan node definitions and the diagnostic tree printer.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use lispel_core::Expression;

/// One node of a compiled logical plan tree.
///
/// Nodes are built once by the compiler and never mutated afterward; each
/// node is owned by its parent, so the tree is finite and acyclic by
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub enum PlanNode {
    /// A constant value.
    Const(Expression),
    /// A symbol to resolve against the environment at evaluation time.
    SymbolRef(String),
    /// A table to resolve against the environment at evaluation time.
    Table(String),
    /// Projects columns over an optional source, carrying attached filters.
    Scan {
        source: Option<Box<PlanNode>>,
        columns: Vec<PlanNode>,
        filters: Vec<Filter>,
    },
    /// Grouped aggregation over a source. Execution is unimplemented; the
    /// structure exists for compilation and diagnostics.
    Group {
        source: Box<PlanNode>,
        keys: Vec<PlanNode>,
        columns: Vec<PlanNode>,
    },
    /// An aggregate function call. Execution is a placeholder.
    Aggregate {
        function: String,
        arguments: Vec<PlanNode>,
    },
    /// Reserved; no grammar path currently produces this variant.
    Join,
}

/// A predicate attached to a scan: an operator plus ordered arguments.
/// Filters are carried in the plan and rendered by the printer, but the
/// evaluator does not apply them.
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub operator: String,
    pub arguments: Vec<PlanNode>,
}

impl PlanNode {
    /// Renders this subtree for human inspection, one node per line, with
    /// `prefix` prepended to each line this node contributes. Output is
    /// byte-identical across runs: every container here is ordered.
    pub fn render(&self, prefix: &str) -> String {
        match self {
            PlanNode::Const(value) => format!("{}CONST({})", prefix, value),
            PlanNode::SymbolRef(name) => format!("{}SYMBOL({})", prefix, name),
            PlanNode::Table(name) => format!("{}TABLE({})", prefix, name),
            PlanNode::Aggregate {
                function,
                arguments,
            } => {
                let mut out = format!("{}AGGREGATE({})", prefix, function);
                for arg in arguments {
                    out.push('\n');
                    out.push_str(&arg.render(&format!("{} arg ", prefix)));
                }
                out
            }
            PlanNode::Scan {
                source,
                columns,
                filters,
            } => {
                let mut out = format!("{}SCAN", prefix);
                if let Some(source) = source {
                    out.push('\n');
                    out.push_str(&source.render(&format!("{}   -> ", prefix)));
                }
                for filter in filters {
                    // Filter headers indent from the margin, not the prefix.
                    out.push_str("\n   Filter: ");
                    out.push_str(&filter.operator);
                    for arg in &filter.arguments {
                        out.push('\n');
                        out.push_str(&arg.render(&format!("{}     - ", prefix)));
                    }
                }
                for column in columns {
                    out.push('\n');
                    out.push_str(&column.render(&format!("{} - ", prefix)));
                }
                out
            }
            PlanNode::Group {
                source,
                keys,
                columns,
            } => {
                let mut out = format!("{}GROUP", prefix);
                out.push('\n');
                out.push_str(&source.render(&format!("{}   -> ", prefix)));
                for key in keys {
                    out.push('\n');
                    out.push_str(&key.render(&format!("{} - ", prefix)));
                }
                for column in columns {
                    out.push('\n');
                    out.push_str(&column.render(&format!("{} - ", prefix)));
                }
                out
            }
            PlanNode::Join => format!("{}JOIN", prefix),
        }
    }
}

impl fmt::Display for PlanNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(""))
    }
}
