//! Chained evaluation scopes.
//!
//! An `Environment` holds symbol bindings and named table contents, with an
//! optional link to an outer scope. Lookups walk the chain outward; writes
//! always land in exactly one scope. Parents are shared read-only through
//! `Rc`, so a child never outlives or mutates the chain structure; the maps
//! themselves sit behind `RefCell` because `set` mutates in place through a
//! shared reference during evaluation.
//!
//! Environments are built per evaluation call tree and discarded afterward.
//! Nothing here is synchronized; a chain must not be shared across threads.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use hashbrown::HashMap;
use lispel_core::{Expression, Row};

/// A single scope in the chain.
#[derive(Default)]
pub struct Environment {
    outer: Option<Rc<Environment>>,
    values: RefCell<HashMap<String, Expression>>,
    tables: RefCell<HashMap<String, Vec<Row>>>,
}

impl Environment {
    /// Creates a scope with the given outer scope (`None` for the root).
    pub fn new(outer: Option<Rc<Environment>>) -> Self {
        Self {
            outer,
            values: RefCell::new(HashMap::new()),
            tables: RefCell::new(HashMap::new()),
        }
    }

    /// Looks `name` up through the scope chain.
    pub fn get(&self, name: &str) -> Option<Expression> {
        if let Some(value) = self.values.borrow().get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref()?.get(name)
    }

    /// Binds `name` in this scope, shadowing any outer binding.
    pub fn set(&self, name: impl Into<String>, value: Expression) {
        self.values.borrow_mut().insert(name.into(), value);
    }

    /// Overwrites the nearest existing binding of `name`, searching from
    /// this scope outward. A name bound nowhere in the chain is dropped.
    pub fn set_outer(&self, name: &str, value: Expression) {
        if self.values.borrow().contains_key(name) {
            self.values.borrow_mut().insert(name.into(), value);
            return;
        }
        if let Some(outer) = &self.outer {
            outer.set_outer(name, value);
        }
    }

    /// Looks a table up through the scope chain.
    pub fn get_table(&self, name: &str) -> Option<Vec<Row>> {
        if let Some(rows) = self.tables.borrow().get(name) {
            return Some(rows.clone());
        }
        self.outer.as_ref()?.get_table(name)
    }

    /// Registers a table's rows in this scope. This is the data-loading
    /// contract: callers seed the root scope before evaluating.
    pub fn set_table(&self, name: impl Into<String>, rows: Vec<Row>) {
        self.tables.borrow_mut().insert(name.into(), rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn num(n: f64) -> Expression {
        Expression::Number(n)
    }

    #[test]
    fn test_get_walks_the_chain() {
        let root = Rc::new(Environment::new(None));
        root.set("x", num(1.0));
        let child = Environment::new(Some(Rc::clone(&root)));

        assert_eq!(child.get("x"), Some(num(1.0)));
        assert_eq!(child.get("y"), None);
    }

    #[test]
    fn test_set_shadows_without_touching_parent() {
        let root = Rc::new(Environment::new(None));
        root.set("x", num(1.0));
        let child = Environment::new(Some(Rc::clone(&root)));
        child.set("x", num(2.0));

        assert_eq!(child.get("x"), Some(num(2.0)));
        assert_eq!(root.get("x"), Some(num(1.0)));
    }

    #[test]
    fn test_set_outer_updates_nearest_holder_only() {
        let root = Rc::new(Environment::new(None));
        root.set("x", num(1.0));
        let mid = Rc::new(Environment::new(Some(Rc::clone(&root))));
        mid.set("x", num(2.0));
        let leaf = Environment::new(Some(Rc::clone(&mid)));

        leaf.set_outer("x", num(9.0));
        assert_eq!(mid.get("x"), Some(num(9.0)));
        assert_eq!(root.get("x"), Some(num(1.0)));
    }

    #[test]
    fn test_set_outer_on_unbound_name_is_dropped() {
        let root = Rc::new(Environment::new(None));
        let leaf = Environment::new(Some(Rc::clone(&root)));

        leaf.set_outer("ghost", num(1.0));
        assert_eq!(leaf.get("ghost"), None);
        assert_eq!(root.get("ghost"), None);
    }

    #[test]
    fn test_table_lookup_walks_the_chain() {
        let root = Rc::new(Environment::new(None));
        root.set_table("users", vec![Row::single("id", num(1.0))]);
        let child = Environment::new(Some(Rc::clone(&root)));

        assert_eq!(child.get_table("users").map(|t| t.len()), Some(1));
        assert_eq!(child.get_table("orders"), None);
    }
}
