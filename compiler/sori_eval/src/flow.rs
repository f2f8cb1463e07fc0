//! Control-flow outcomes for statement execution.
//!
//! `return`, `break`, and `continue` are not errors and not unwinding: every
//! statement execution produces a [`Flow`], and each enclosing construct
//! decides what to do with a non-normal one. A `While` consumes Break and
//! Continue from its body; a function call consumes Return; a Block stops at
//! the first non-normal outcome and hands it up. The resolver guarantees no
//! signal can reach a context that has no handler for it.

use crate::Value;

/// Outcome of executing one statement.
#[derive(Clone, Debug)]
pub enum Flow {
    /// The statement completed; continue with the next one.
    Normal,
    /// Terminate the innermost enclosing loop.
    Break,
    /// Skip to the next condition test of the innermost enclosing loop.
    Continue,
    /// Unwind to the enclosing function call with a value.
    Return(Value),
}

impl Flow {
    /// Whether this outcome lets sequential execution continue.
    #[inline]
    pub fn is_normal(&self) -> bool {
        matches!(self, Flow::Normal)
    }
}
