//! Row structure produced by plan evaluation.
//!
//! A `Row` maps column keys to expression values. Unlike a hash map it keeps
//! insertion order, so any textual rendering of a row is deterministic.

use crate::expression::Expression;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Key under which unaliased column results are stored. Several unaliased
/// columns in one scan collide here, with later columns overwriting earlier
/// ones. That collision is part of the language's observable behavior.
pub const DEFAULT_COLUMN: &str = "_";

/// An insertion-ordered mapping from column key to expression value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    entries: Vec<(String, Expression)>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Creates a row holding a single entry.
    pub fn single(key: impl Into<String>, value: Expression) -> Self {
        let mut row = Self::new();
        row.insert(key, value);
        row
    }

    /// Inserts a value under `key`, overwriting an existing entry in place.
    /// An overwritten key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Expression) {
        let key = key.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
            return;
        }
        self.entries.push((key, value));
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Expression> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, (String, Expression)> {
        self.entries.iter()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the row has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        f.write_str("}")
    }
}
