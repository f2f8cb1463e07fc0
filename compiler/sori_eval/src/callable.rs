//! Callable values: user functions, natives, and array built-ins.
//!
//! The callable contract is an arity plus a call; arity mismatches are
//! checked at the call site before anything runs. A user function's call
//! chains its fresh environment to the *closure* environment captured at
//! declaration time, never the caller's — that is what makes closures
//! lexical rather than dynamic.

use std::rc::Rc;

use sori_ir::FunctionDecl;

use crate::environment::{EnvRef, Environment};
use crate::{EvalContext, Value};

/// A user-declared function or method.
///
/// Carries the shared declaration, the captured closure environment, and the
/// [`EvalContext`] of the program that declared it (so the body's expression
/// ids stay meaningful across host `execute` calls).
#[derive(Clone)]
pub struct FunctionValue {
    pub decl: Rc<FunctionDecl>,
    pub closure: EnvRef,
    /// True for a class's `init`: calling it yields the receiver regardless
    /// of how the body exits.
    pub is_initializer: bool,
    /// The instance this function was bound to at construction time.
    /// Property lookup returns methods unbound (`None`); only class
    /// construction binds `init`.
    pub receiver: Option<Value>,
    pub context: EvalContext,
}

impl FunctionValue {
    pub fn new(
        decl: Rc<FunctionDecl>,
        closure: EnvRef,
        is_initializer: bool,
        context: EvalContext,
    ) -> Self {
        FunctionValue {
            decl,
            closure,
            is_initializer,
            receiver: None,
            context,
        }
    }

    /// Number of declared parameters.
    #[inline]
    pub fn arity(&self) -> usize {
        self.decl.params.len()
    }

    /// Bind this function to `instance`: a wrapper environment defining
    /// `this` is chained in front of the closure, and the receiver is
    /// recorded so an initializer can return it.
    ///
    /// Note `this` in the wrapper is only reachable through a resolved
    /// distance — and the resolver never resolves `this` in this language
    /// revision, so method bodies still fail to read it at run time. The
    /// receiver field is what makes constructor return semantics work anyway.
    pub fn bind(&self, instance: Value) -> FunctionValue {
        let env = Environment::child_of(self.closure.clone());
        env.borrow_mut().define("this", instance.clone());
        FunctionValue {
            decl: Rc::clone(&self.decl),
            closure: env,
            is_initializer: self.is_initializer,
            receiver: Some(instance),
            context: self.context.clone(),
        }
    }
}

impl std::fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionValue")
            .field("name", &self.decl.name)
            .field("arity", &self.arity())
            .field("is_initializer", &self.is_initializer)
            .field("bound", &self.receiver.is_some())
            .finish_non_exhaustive()
    }
}

/// Signature of a host-provided function.
pub type NativeFn = fn(&[Value]) -> Result<Value, String>;

/// A host-provided function exposed as a global.
#[derive(Debug)]
pub struct NativeFunction {
    pub name: &'static str,
    pub arity: usize,
    pub func: NativeFn,
}

/// The fixed set of array built-in methods, reached by dot-property access.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArrayBuiltin {
    /// Push one element at the back.
    Append,
    /// Push one element at the front.
    PushFront,
    /// Remove and return the last element; Nil when empty.
    Pop,
    /// Remove and return the first element; Nil when empty.
    PopFront,
    /// Current element count as a Number.
    Length,
}

impl ArrayBuiltin {
    /// Resolve a property name to a built-in, if it is one.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "append" => Some(ArrayBuiltin::Append),
            "push_front" => Some(ArrayBuiltin::PushFront),
            "pop" => Some(ArrayBuiltin::Pop),
            "pop_front" => Some(ArrayBuiltin::PopFront),
            "length" => Some(ArrayBuiltin::Length),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ArrayBuiltin::Append => "append",
            ArrayBuiltin::PushFront => "push_front",
            ArrayBuiltin::Pop => "pop",
            ArrayBuiltin::PopFront => "pop_front",
            ArrayBuiltin::Length => "length",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            ArrayBuiltin::Append | ArrayBuiltin::PushFront => 1,
            ArrayBuiltin::Pop | ArrayBuiltin::PopFront | ArrayBuiltin::Length => 0,
        }
    }
}
