//! Per-program evaluation context.
//!
//! Expression ids are only meaningful within the arena that allocated them,
//! and resolver distances are keyed by those ids. A function value therefore
//! carries `Rc` clones of its defining arena and resolution; when the
//! interpreter enters a call it swaps the callee's context in and restores
//! the caller's afterwards. This is what keeps closures from one `execute`
//! call evaluable in later calls when the host reuses an interpreter
//! (REPL-style incremental use).

use std::rc::Rc;

use sori_ir::ExprArena;
use sori_resolve::Resolution;

/// The arena + resolution pair a piece of code evaluates against.
#[derive(Clone)]
pub struct EvalContext {
    pub arena: Rc<ExprArena>,
    pub locals: Rc<Resolution>,
}

impl EvalContext {
    pub fn new(arena: Rc<ExprArena>, locals: Rc<Resolution>) -> Self {
        EvalContext { arena, locals }
    }

    /// A context with no expressions; the interpreter's state before the
    /// first program runs.
    pub fn empty() -> Self {
        EvalContext {
            arena: Rc::new(ExprArena::new()),
            locals: Rc::new(Resolution::default()),
        }
    }
}
