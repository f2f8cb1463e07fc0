//! Call and property dispatch.
//!
//! Arity is checked here, before any callee runs. A user function call swaps
//! in the callee's environment and evaluation context (its defining arena and
//! resolution) and restores the caller's on the way out.

use std::rc::Rc;

use crate::callable::{ArrayBuiltin, FunctionValue};
use crate::class::{ClassValue, InstanceValue};
use crate::environment::Environment;
use crate::error::EvalResult;
use crate::{Flow, RuntimeError, Shared, Value};

use super::Interpreter;

impl Interpreter {
    /// Invoke `callee` with already-evaluated arguments. `line` is the
    /// call-site line (the closing paren) used for dispatch errors.
    pub(crate) fn call_value(
        &mut self,
        callee: Value,
        args: Vec<Value>,
        line: u32,
    ) -> EvalResult {
        match callee {
            Value::Function(function) => {
                if args.len() != function.arity() {
                    return Err(RuntimeError::arity_mismatch(
                        function.arity(),
                        args.len(),
                        line,
                    ));
                }
                self.call_function(&function, args)
            }
            Value::Native(native) => {
                if args.len() != native.arity {
                    return Err(RuntimeError::arity_mismatch(native.arity, args.len(), line));
                }
                (native.func)(&args).map_err(|message| RuntimeError::native(message, line))
            }
            Value::Class(class) => {
                if args.len() != class.arity() {
                    return Err(RuntimeError::arity_mismatch(class.arity(), args.len(), line));
                }
                self.construct(&class, args)
            }
            Value::ArrayMethod { builtin, array } => {
                if args.len() != builtin.arity() {
                    return Err(RuntimeError::arity_mismatch(
                        builtin.arity(),
                        args.len(),
                        line,
                    ));
                }
                Ok(array_method(builtin, &array, args))
            }
            _ => Err(RuntimeError::not_callable(line)),
        }
    }

    /// Call a user function: fresh environment chained to the closure,
    /// parameters bound, body run as a block. A Return outcome supplies the
    /// value; an initializer yields its receiver no matter how the body
    /// exits.
    pub(crate) fn call_function(
        &mut self,
        function: &FunctionValue,
        args: Vec<Value>,
    ) -> EvalResult {
        tracing::trace!(function = %function.decl.name, args = args.len(), "call");
        let env = Environment::child_of(function.closure.clone());
        {
            let mut env = env.borrow_mut();
            for (param, arg) in function.decl.params.iter().zip(args) {
                env.define(param.name.clone(), arg);
            }
        }

        let saved_context = std::mem::replace(&mut self.context, function.context.clone());
        let result = self.execute_block(&function.decl.body, env);
        self.context = saved_context;

        let value = match result? {
            Flow::Return(value) => value,
            // Break/Continue cannot cross a function boundary (resolver);
            // Normal means the body fell off the end.
            _ => Value::Nil,
        };
        if function.is_initializer {
            if let Some(receiver) = &function.receiver {
                return Ok(receiver.clone());
            }
        }
        Ok(value)
    }

    /// Class used as a callee: create the instance, run a bound `init` if
    /// the class has one, and yield the instance.
    fn construct(&mut self, class: &Rc<ClassValue>, args: Vec<Value>) -> EvalResult {
        let instance = Value::Instance(Shared::new(InstanceValue::new(Rc::clone(class))));
        if let Some(init) = class.find_method("init") {
            let bound = init.bind(instance.clone());
            self.call_function(&bound, args)?;
        }
        Ok(instance)
    }

    /// Read `object.name`. Instances check fields then unbound methods;
    /// arrays expose their built-in methods, bound to the array at this
    /// moment; anything else has no properties.
    pub(crate) fn property_get(&self, object: &Value, name: &str, line: u32) -> EvalResult {
        match object {
            Value::Instance(instance) => instance
                .borrow()
                .get(name)
                .ok_or_else(|| RuntimeError::undefined_property(name, line)),
            Value::Array(array) => ArrayBuiltin::from_name(name)
                .map(|builtin| Value::ArrayMethod {
                    builtin,
                    array: array.clone(),
                })
                .ok_or_else(|| RuntimeError::undefined_property(name, line)),
            _ => Err(RuntimeError::no_properties(line)),
        }
    }
}

/// Run an array built-in against its bound array. Mutators return Nil;
/// `pop`/`pop_front` return Nil (not an error) on an empty array.
fn array_method(builtin: ArrayBuiltin, array: &Shared<Vec<Value>>, mut args: Vec<Value>) -> Value {
    match builtin {
        ArrayBuiltin::Append => {
            let item = args.pop().unwrap_or(Value::Nil);
            array.borrow_mut().push(item);
            Value::Nil
        }
        ArrayBuiltin::PushFront => {
            let item = args.pop().unwrap_or(Value::Nil);
            array.borrow_mut().insert(0, item);
            Value::Nil
        }
        ArrayBuiltin::Pop => array.borrow_mut().pop().unwrap_or(Value::Nil),
        ArrayBuiltin::PopFront => {
            let mut items = array.borrow_mut();
            if items.is_empty() {
                Value::Nil
            } else {
                items.remove(0)
            }
        }
        ArrayBuiltin::Length => Value::Number(array.borrow().len() as f64),
    }
}
