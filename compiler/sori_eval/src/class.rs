//! Classes and instances.
//!
//! A class is a name plus a method table; there is no superclass chain in
//! this language revision. An instance is a reference to its class plus a
//! private field map. Property reads check fields first and fall back to an
//! **unbound** class method; property writes always hit the field map,
//! creating the field if absent — fields are not restricted to a declared
//! set.

use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::callable::FunctionValue;
use crate::Value;

/// A declared class: its name and methods.
pub struct ClassValue {
    pub name: String,
    methods: FxHashMap<String, Rc<FunctionValue>>,
}

impl ClassValue {
    pub fn new(name: impl Into<String>, methods: FxHashMap<String, Rc<FunctionValue>>) -> Self {
        ClassValue {
            name: name.into(),
            methods,
        }
    }

    /// Look up a method by name among this class's own methods.
    pub fn find_method(&self, name: &str) -> Option<Rc<FunctionValue>> {
        self.methods.get(name).cloned()
    }

    /// The class's constructor arity: its `init` method's arity, or zero.
    pub fn arity(&self) -> usize {
        self.find_method("init").map_or(0, |init| init.arity())
    }
}

impl std::fmt::Debug for ClassValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassValue")
            .field("name", &self.name)
            .field("methods", &self.methods.len())
            .finish()
    }
}

/// One object: a class reference and its fields.
#[derive(Debug)]
pub struct InstanceValue {
    pub class: Rc<ClassValue>,
    fields: FxHashMap<String, Value>,
}

impl InstanceValue {
    pub fn new(class: Rc<ClassValue>) -> Self {
        InstanceValue {
            class,
            fields: FxHashMap::default(),
        }
    }

    /// Read a property: field first, then an unbound class method.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.fields.get(name) {
            return Some(value.clone());
        }
        self.class.find_method(name).map(Value::Function)
    }

    /// Write a field, creating it if absent.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }
}
