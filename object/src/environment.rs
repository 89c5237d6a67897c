// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::Value;

/// A lexical scope: a local store plus an optional link to the scope it was
/// created inside of. `Get` walks the chain outward; `Set` always writes to
/// the innermost store, so an inner `let` can never mutate an outer binding.
///
/// Wrapped in `Rc<RefCell<..>>` everywhere it's held, not `Arc<Mutex<..>>` —
/// the language is single-threaded and closures routinely form
/// reference cycles (a function stored in the scope it captured), which is
/// an accepted leak under this model rather than a bug to route around.
pub struct Environment {
    store: IndexMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment { store: IndexMap::new(), outer: None }))
    }

    /// A fresh scope enclosed by `outer`, created for each function
    /// invocation with `outer` set to the function's captured environment.
    pub fn enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment { store: IndexMap::new(), outer: Some(outer) }))
    }

    /// Searches this scope, then recursively up the chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Writes only to this scope, shadowing any outer binding of the same
    /// name for the remainder of this scope's lifetime.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_scope_sees_outer_bindings() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Value::Integer(1));
        let inner = Environment::enclosed(outer);
        assert!(matches!(inner.borrow().get("x"), Some(Value::Integer(1))));
    }

    #[test]
    fn inner_let_shadows_without_mutating_outer() {
        let outer = Environment::new();
        outer.borrow_mut().set("x", Value::Integer(1));
        let inner = Environment::enclosed(outer.clone());
        inner.borrow_mut().set("x", Value::Integer(2));

        assert!(matches!(inner.borrow().get("x"), Some(Value::Integer(2))));
        assert!(matches!(outer.borrow().get("x"), Some(Value::Integer(1))));
    }

    #[test]
    fn missing_binding_is_none() {
        let env = Environment::new();
        assert!(env.borrow().get("missing").is_none());
    }
}
