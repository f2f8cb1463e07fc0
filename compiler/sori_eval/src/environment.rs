//! Chained runtime environments.
//!
//! An environment is a mutable name→value map plus an optional link to the
//! enclosing environment. A child is created per block and per call; closures
//! keep their defining environment alive through [`EnvRef`] shared ownership,
//! so environments are not stack-disciplined.
//!
//! `get`/`assign` walk the chain outward. `get_at`/`assign_at` walk exactly
//! the resolver-computed number of links and operate on that environment
//! directly — O(distance), and immune to an outer scope later gaining a
//! same-named binding.

use rustc_hash::FxHashMap;

use crate::{Shared, Value};

/// Shared handle to an environment.
pub type EnvRef = Shared<Environment>;

/// One scope's bindings plus the link outward.
#[derive(Debug, Default)]
pub struct Environment {
    values: FxHashMap<String, Value>,
    enclosing: Option<EnvRef>,
}

impl Environment {
    /// A root environment with no enclosing scope (the global scope).
    pub fn root() -> EnvRef {
        Shared::new(Environment::default())
    }

    /// A child environment chained to `enclosing`.
    pub fn child_of(enclosing: EnvRef) -> EnvRef {
        Shared::new(Environment {
            values: FxHashMap::default(),
            enclosing: Some(enclosing),
        })
    }

    /// Insert or overwrite `name` in this scope only.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Look up `name` here, then outward along the chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }
        self.enclosing.as_ref()?.borrow().get(name)
    }

    /// Assign to an existing `name` here or outward along the chain.
    /// Returns false if no scope binds the name.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
            return true;
        }
        match &self.enclosing {
            Some(enclosing) => enclosing.borrow_mut().assign(name, value),
            None => false,
        }
    }
}

/// The environment exactly `distance` links out from `env`.
fn ancestor(env: &EnvRef, distance: usize) -> EnvRef {
    let mut current = env.clone();
    for _ in 0..distance {
        let next = current
            .borrow()
            .enclosing
            .clone()
            .unwrap_or_else(|| panic!("resolver distance exceeds environment chain"));
        current = next;
    }
    current
}

/// Read `name` from the scope `distance` links out.
///
/// The resolver guarantees the binding exists there; `None` indicates a
/// resolution bug, which the caller surfaces as an undefined variable.
pub fn get_at(env: &EnvRef, distance: usize, name: &str) -> Option<Value> {
    ancestor(env, distance).borrow().values.get(name).cloned()
}

/// Write `name` in the scope `distance` links out.
pub fn assign_at(env: &EnvRef, distance: usize, name: &str, value: Value) -> bool {
    let target = ancestor(env, distance);
    let mut target = target.borrow_mut();
    match target.values.get_mut(name) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn define_then_get() {
        let env = Environment::root();
        env.borrow_mut().define("x", Value::Number(1.0));
        assert_eq!(env.borrow().get("x"), Some(Value::Number(1.0)));
        assert_eq!(env.borrow().get("y"), None);
    }

    #[test]
    fn get_walks_the_chain() {
        let root = Environment::root();
        root.borrow_mut().define("x", Value::Number(1.0));
        let child = Environment::child_of(root);
        assert_eq!(child.borrow().get("x"), Some(Value::Number(1.0)));
    }

    #[test]
    fn define_shadows_without_touching_outer() {
        let root = Environment::root();
        root.borrow_mut().define("x", Value::Number(1.0));
        let child = Environment::child_of(root.clone());
        child.borrow_mut().define("x", Value::Number(2.0));
        assert_eq!(child.borrow().get("x"), Some(Value::Number(2.0)));
        assert_eq!(root.borrow().get("x"), Some(Value::Number(1.0)));
    }

    #[test]
    fn assign_updates_the_binding_scope() {
        let root = Environment::root();
        root.borrow_mut().define("x", Value::Number(1.0));
        let child = Environment::child_of(root.clone());
        assert!(child.borrow_mut().assign("x", Value::Number(5.0)));
        assert_eq!(root.borrow().get("x"), Some(Value::Number(5.0)));
    }

    #[test]
    fn assign_fails_for_unbound_names() {
        let env = Environment::root();
        assert!(!env.borrow_mut().assign("missing", Value::Nil));
    }

    #[test]
    fn get_at_skips_shadowing() {
        let root = Environment::root();
        root.borrow_mut().define("x", Value::Number(1.0));
        let child = Environment::child_of(root);
        child.borrow_mut().define("x", Value::Number(2.0));
        assert_eq!(get_at(&child, 0, "x"), Some(Value::Number(2.0)));
        assert_eq!(get_at(&child, 1, "x"), Some(Value::Number(1.0)));
    }

    #[test]
    fn assign_at_targets_exactly_one_scope() {
        let root = Environment::root();
        root.borrow_mut().define("x", Value::Number(1.0));
        let child = Environment::child_of(root.clone());
        child.borrow_mut().define("x", Value::Number(2.0));
        assert!(assign_at(&child, 1, "x", Value::Number(9.0)));
        assert_eq!(root.borrow().get("x"), Some(Value::Number(9.0)));
        assert_eq!(get_at(&child, 0, "x"), Some(Value::Number(2.0)));
    }

    #[test]
    fn environment_outlives_its_block() {
        // A closure-style handle keeps the scope alive after the creating
        // frame would have popped.
        let escaped = {
            let root = Environment::root();
            root.borrow_mut().define("counter", Value::Number(0.0));
            Environment::child_of(root)
        };
        assert_eq!(escaped.borrow().get("counter"), Some(Value::Number(0.0)));
    }
}
