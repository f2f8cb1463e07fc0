//! Runtime model and tree-walking evaluator for the Sori interpreter.
//!
//! Executes a resolved program against the runtime value/environment model:
//! chained lexically-scoped environments, reference-semantics arrays and
//! instances, callables with closure capture, and classes with
//! single-initializer semantics. Statement execution threads an explicit
//! [`Flow`] outcome (Normal / Break / Continue / Return) instead of using an
//! unwinding mechanism; expression evaluation returns
//! `Result<Value, RuntimeError>` and the first runtime error aborts the rest
//! of the program.

mod builtins;
mod callable;
mod class;
mod context;
mod environment;
mod error;
mod flow;
mod interpreter;
mod print_handler;
mod shared;
mod value;

#[cfg(test)]
mod tests;

pub use callable::{ArrayBuiltin, FunctionValue, NativeFn, NativeFunction};
pub use class::{ClassValue, InstanceValue};
pub use context::EvalContext;
pub use environment::{assign_at, get_at, EnvRef, Environment};
pub use error::{EvalResult, RuntimeError, RuntimeErrorKind};
pub use flow::Flow;
pub use interpreter::Interpreter;
pub use print_handler::PrintHandler;
pub use shared::Shared;
pub use value::Value;
