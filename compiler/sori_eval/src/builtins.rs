//! Native global functions.
//!
//! One native ships with the interpreter: `clock()`, seconds since the Unix
//! epoch as a Number. Registered into the global environment at interpreter
//! construction.

use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::callable::NativeFunction;
use crate::environment::EnvRef;
use crate::Value;

fn clock(_args: &[Value]) -> Result<Value, String> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| "system clock is set before the Unix epoch".to_string())?;
    Ok(Value::Number(elapsed.as_secs_f64()))
}

/// Define every native in `globals`.
pub(crate) fn install(globals: &EnvRef) {
    let natives = [NativeFunction {
        name: "clock",
        arity: 0,
        func: clock,
    }];
    let mut globals = globals.borrow_mut();
    for native in natives {
        globals.define(native.name, Value::Native(Rc::new(native)));
    }
}
